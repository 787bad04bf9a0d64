//! Structural field extraction from a registry detail page.
//!
//! Detail pages lay fields out as
//!
//! ```html
//! <div><h3>Registered name</h3></div>
//! <div>PT Buka Bumi Konstruksi</div>
//! ```
//!
//! i.e. the label sits in its own container and the value lives in the next
//! sibling container. Each step of that walk is an explicit `Option` so a
//! missing piece maps onto a specific [`FieldValue`] marker.

use scraper::{ElementRef, Html};

use super::model::{DetailFieldSet, FieldValue};

pub const REGISTERED_NAME: &str = "Registered name";
pub const LEGAL_ENTITY_TYPE: &str = "Legal entity type";
pub const BUSINESS_NUMBER: &str = "Business number";
pub const REGISTERED_ADDRESS: &str = "Registered address";
pub const CITY: &str = "City";

/// Labels read from a detail page by default, in output order.
pub const TARGET_FIELDS: [&str; 5] = [
    REGISTERED_NAME,
    LEGAL_ENTITY_TYPE,
    BUSINESS_NUMBER,
    REGISTERED_ADDRESS,
    CITY,
];

/// Which labels to read and which element kinds carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    fields: Vec<String>,
    label_tag: String,
    container_tag: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new(TARGET_FIELDS)
    }
}

impl ExtractionConfig {
    /// Read `fields` using the default `h3` label / `div` container layout.
    ///
    /// Repeated labels are dropped; the first occurrence keeps its position.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in fields.into_iter().map(Into::into) {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self {
            fields: unique,
            label_tag: "h3".to_string(),
            container_tag: "div".to_string(),
        }
    }

    /// Element kind whose text is the label (default `h3`).
    #[must_use]
    pub fn label_tag(mut self, tag: &str) -> Self {
        self.label_tag = tag.to_ascii_lowercase();
        self
    }

    /// Element kind of label and value containers (default `div`).
    #[must_use]
    pub fn container_tag(mut self, tag: &str) -> Self {
        self.container_tag = tag.to_ascii_lowercase();
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Read every configured label from `document`.
///
/// Never fails: each label yields either its value or a marker, independently
/// of the others, in configuration order.
pub fn extract_fields(document: &Html, cfg: &ExtractionConfig) -> DetailFieldSet {
    let mut out = DetailFieldSet::default();
    for label in &cfg.fields {
        let value = extract_one(document, cfg, label);
        tracing::trace!(label = %label, ?value, "field extracted");
        out.push(label.clone(), value);
    }
    out
}

fn extract_one(document: &Html, cfg: &ExtractionConfig, label: &str) -> FieldValue {
    let Some(label_el) = find_label(document, &cfg.label_tag, label) else {
        return FieldValue::LabelNotFound;
    };
    let Some(value_el) =
        label_container(label_el).and_then(|c| value_container(c, &cfg.container_tag))
    else {
        return FieldValue::ValueContainerNotFound;
    };
    FieldValue::Found(visible_text(value_el))
}

/// First `tag` element, in document order, whose text is exactly `label`.
fn find_label<'a>(document: &'a Html, tag: &str, label: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == tag)
        .find(|el| el.text().collect::<String>() == label)
}

/// The label's immediate parent element.
fn label_container(label: ElementRef<'_>) -> Option<ElementRef<'_>> {
    label.parent().and_then(ElementRef::wrap)
}

/// The next sibling of `container` that is itself a `tag` element.
fn value_container<'a>(container: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    container
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}

/// Text nodes trimmed, empties dropped, joined without separator.
fn visible_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}
