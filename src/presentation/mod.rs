//! Transaction presentation: from a parsed transaction to display rows.
//!
//! - [`fields`] - Field identities, values and link routes
//! - [`plan`] - Per-variant field and section plan
//! - [`layout`] - Disclosure-aware flattening into rows with anchors
//! - [`text`] - Plain-text rendering for the command line

pub mod fields;
pub mod layout;
pub mod plan;
pub mod text;

pub use fields::{Field, FieldId, FieldValue, Route};
pub use layout::{DetailLayout, DetailRow, build_rows};
pub use plan::{DetailSection, VariantPlan, collection_item, plan_variant};
