//! Comma-joined property lists
//!
//! Properties live in a single nullable text column. The encoding has no
//! escaping, so `Properties` refuses any element containing the separator,
//! and a list holding one empty element, which would encode exactly like the
//! empty list.
//! An absent list is stored as NULL, never as an empty string.

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, ExErrorKind, Result};

/// Separator between elements in the persisted column
pub const SEPARATOR: &str = ",";

/// Ordered list of free-text product properties
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Properties(Vec<String>);

impl Properties {
    /// Build a property list
    ///
    /// Rejects elements that contain the separator and the single-element
    /// list `[""]`, so every accepted value decodes back to itself.
    pub fn new(items: Vec<String>) -> Result<Self> {
        if let [only] = items.as_slice() {
            if only.is_empty() {
                return Err(ExError::new(ExErrorKind::InvalidInput)
                    .with_op("validate_properties")
                    .with_message("a lone empty property is indistinguishable from no properties"));
            }
        }
        if let Some(bad) = items.iter().find(|item| item.contains(SEPARATOR)) {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_properties")
                .with_entity_id(bad.clone())
                .with_message(format!("property must not contain '{}'", SEPARATOR)));
        }
        Ok(Self(items))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column representation: elements joined by the separator
    pub fn encode(&self) -> String {
        self.0.join(SEPARATOR)
    }

    /// Parse a column value written by [`Properties::encode`]
    ///
    /// The empty string decodes to an empty list.
    pub fn decode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(SEPARATOR).map(str::to_string).collect())
    }
}

impl TryFrom<Vec<String>> for Properties {
    type Error = ExError;

    fn try_from(items: Vec<String>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<Properties> for Vec<String> {
    fn from(props: Properties) -> Self {
        props.0
    }
}

/// Value bound to the `properties` column: joined text, or `None` for NULL
pub fn encode_properties(properties: Option<&Properties>) -> Option<String> {
    properties.map(Properties::encode)
}

/// Inverse of [`encode_properties`] for readers of the column
pub fn decode_properties(raw: Option<&str>) -> Option<Properties> {
    raw.map(Properties::decode)
}
