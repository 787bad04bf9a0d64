use std::time::Duration;

use super::constants::DEFAULT_PACING;

/// Delay policy applied before every upstream request.
///
/// The registry is a third-party site; each lookup issues two requests and
/// waits before each of them. Tests use [`Pacing::Disabled`] to skip the sleep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep for a fixed duration before each request.
    Fixed(Duration),
    /// Issue requests immediately.
    Disabled,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PACING)
    }
}

impl Pacing {
    /// The delay applied before each request.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Disabled => Duration::ZERO,
        }
    }

    pub(crate) async fn pause(&self) {
        let delay = self.delay();
        if !delay.is_zero() {
            tracing::trace!(?delay, "pacing before upstream request");
            tokio::time::sleep(delay).await;
        }
    }
}
