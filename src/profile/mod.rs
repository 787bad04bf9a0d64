//! Detail-page profile types + extraction.
//!
//! Internals are split into:
//! - `extract`: structural label → value traversal over a parsed page
//! - `fetch`:   GET the detail page and decide success/failure
//! - `model`:   field outcomes, the ordered field set and the profile

mod extract;
mod fetch;
mod model;

pub use extract::{
    BUSINESS_NUMBER, CITY, ExtractionConfig, LEGAL_ENTITY_TYPE, REGISTERED_ADDRESS,
    REGISTERED_NAME, TARGET_FIELDS, extract_fields,
};
pub use fetch::{fetch_detail, profile_from_html};
pub use model::{CompanyProfile, DetailFieldSet, Field, FieldValue};
