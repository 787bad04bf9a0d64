//! Core components of the `companieshouse-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`ChClient`] and its builder.
//! - The primary [`ChError`] type and its [`FailureKind`] taxonomy.
//! - Internal networking shared by the search and detail stages.

/// The main client (`ChClient`), builder, and pacing policy.
pub mod client;
/// The primary error type (`ChError`) for the crate.
pub mod error;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ChClient`
pub use client::{ChClient, ChClientBuilder, Pacing};
pub use error::{ChError, FailureKind};
