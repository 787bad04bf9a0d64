use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use url::Url;

/// Outcome of reading one labeled field from a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Visible text of the value container.
    Found(String),
    /// No label element carries the label text.
    LabelNotFound,
    /// The label exists but its container has no sibling value container.
    ValueContainerNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: FieldValue,
}

impl Field {
    /// The string the caller sees: the value itself or a diagnostic marker.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.value {
            FieldValue::Found(v) => Cow::Borrowed(v.as_str()),
            FieldValue::LabelNotFound => Cow::Owned(format!("Label not found for {}", self.label)),
            FieldValue::ValueContainerNotFound => Cow::Owned(format!(
                "Value container not found using sibling traversal for {}",
                self.label
            )),
        }
    }

    /// A field counts as resolved when its text carries no "not found" marker.
    pub fn is_resolved(&self) -> bool {
        !self.text().to_lowercase().contains("not found")
    }
}

/// Ordered label → value mapping; exactly one entry per configured label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFieldSet {
    fields: Vec<Field>,
}

impl DetailFieldSet {
    pub(crate) fn push(&mut self, label: impl Into<String>, value: FieldValue) {
        self.fields.push(Field {
            label: label.into(),
            value,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Rendered text for `label`, markers included.
    pub fn get(&self, label: &str) -> Option<Cow<'_, str>> {
        self.field(label).map(Field::text)
    }

    pub fn resolved_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_resolved()).count()
    }

    /// At least one field carries a real value.
    pub fn has_resolved(&self) -> bool {
        self.fields.iter().any(Field::is_resolved)
    }
}

impl Serialize for DetailFieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for f in &self.fields {
            map.serialize_entry(&f.label, &f.text())?;
        }
        map.end()
    }
}

/// A successfully extracted registry profile.
///
/// Serializes as the flat label → string object of its fields; the source URL
/// is kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    url: Url,
    fields: DetailFieldSet,
}

impl CompanyProfile {
    pub(crate) fn new(url: Url, fields: DetailFieldSet) -> Self {
        Self { url, fields }
    }

    /// The detail page the profile was read from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn fields(&self) -> &DetailFieldSet {
        &self.fields
    }

    pub fn get(&self, label: &str) -> Option<Cow<'_, str>> {
        self.fields.get(label)
    }

    pub fn into_fields(self) -> DetailFieldSet {
        self.fields
    }
}

impl Serialize for CompanyProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
