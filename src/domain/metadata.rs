//! Asset metadata parsing.
//!
//! `mintAsset` transactions carry a free-form metadata string. By convention
//! it is a JSON object with `name`, `description` and `icon_url`, but nothing
//! enforces that, so parsing here never fails: anything unusable is simply
//! absent.

use serde_json::{Map, Value};

/// Placeholder shown for absent metadata fields.
pub const ABSENT: &str = "None";

/// Structured view of a metadata string, plus the string itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetMetadata {
    /// Asset name.
    pub name: Option<String>,
    /// Asset description.
    pub description: Option<String>,
    /// URL of the asset icon.
    pub icon_url: Option<String>,
    raw: String,
}

/// Non-empty string value of `key`. Empty strings count as absent.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl AssetMetadata {
    /// Parses a metadata string.
    ///
    /// Malformed JSON, JSON that is not an object, and fields that are not
    /// strings or are empty all produce absent fields.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let fields = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                tracing::debug!("Metadata is JSON but not an object: {other}");
                Map::new()
            }
            Err(err) => {
                tracing::debug!("Metadata is not structured: {err}");
                Map::new()
            }
        };

        Self {
            name: string_field(&fields, "name"),
            description: string_field(&fields, "description"),
            icon_url: string_field(&fields, "icon_url"),
            raw: raw.to_string(),
        }
    }

    /// The original metadata string, unchanged.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Name for display, or [`ABSENT`].
    #[must_use]
    pub fn name_or_absent(&self) -> &str {
        self.name.as_deref().unwrap_or(ABSENT)
    }

    /// Description for display, or [`ABSENT`].
    #[must_use]
    pub fn description_or_absent(&self) -> &str {
        self.description.as_deref().unwrap_or(ABSENT)
    }

    /// Icon URL for display, or [`ABSENT`].
    #[must_use]
    pub fn icon_url_or_absent(&self) -> &str {
        self.icon_url.as_deref().unwrap_or(ABSENT)
    }
}

// ============================================================================
// Tests
// ============================================================================
