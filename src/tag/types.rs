//! Tag type definitions and error types.

use super::priority::Priority;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reserved tag flagging a scheduling overlap on a task
pub const OVERLAP_TAG_NAME: &str = "OVERLAP";

/// Reserved priority tag names
pub const HIGH_PRIORITY_TAG_NAME: &str = "HIGH";
pub const MEDIUM_PRIORITY_TAG_NAME: &str = "MEDIUM";
pub const LOW_PRIORITY_TAG_NAME: &str = "LOW";

/// All priority tag names, highest first
pub const PRIORITY_TAG_NAMES: [&str; 3] = [
    HIGH_PRIORITY_TAG_NAME,
    MEDIUM_PRIORITY_TAG_NAME,
    LOW_PRIORITY_TAG_NAME,
];

/// A label attached to a task.
///
/// Equality, ordering and hashing use the name only. Serialized as the bare
/// name string; deserializing runs the same validation as [`Tag::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

/// Tag-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Operation would result in duplicate tags: '{0}'")]
    DuplicateTag(String),

    #[error("Invalid tag name '{name}': {reason}")]
    InvalidTagName { name: String, reason: &'static str },
}

impl Tag {
    /// Create a tag from a user-supplied name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(name: &str) -> Result<Self, TagError> {
        let trimmed = name.trim();
        validate_tag_name(trimmed)?;
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Build one of the reserved tags; the names are known to be valid.
    pub(crate) fn reserved(name: &'static str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The reserved overlap marker tag
    #[must_use]
    pub fn overlap() -> Self {
        Self::reserved(OVERLAP_TAG_NAME)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }

    /// The priority this tag marks, if it is one of HIGH, MEDIUM or LOW.
    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        Priority::from_name(&self.name)
    }

    #[must_use]
    pub fn is_priority_tag(&self) -> bool {
        self.priority().is_some()
    }

    #[must_use]
    pub fn is_overlap_tag(&self) -> bool {
        self.name == OVERLAP_TAG_NAME
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Tag {
    type Error = TagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.name
    }
}

/// Validate a tag name (must be non-empty ASCII letters and digits)
pub fn validate_tag_name(name: &str) -> Result<(), TagError> {
    if name.is_empty() {
        return Err(TagError::InvalidTagName {
            name: name.to_string(),
            reason: "Name cannot be empty",
        });
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TagError::InvalidTagName {
            name: name.to_string(),
            reason: "Name must contain only letters and digits",
        });
    }

    Ok(())
}
