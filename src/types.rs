//! Core type definitions for compile-time safety.
//!
//! Newtype wrappers around string identifiers so element ids can't be
//! mixed up with slide ids or free-form text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slide element identifier, unique within one slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    /// Create a new `ElementId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Slide identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub String);

impl SlideId {
    /// Create a new `SlideId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn element_id_serializes_as_plain_string() {
        let id = ElementId::new("ai-title");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ai-title\"");
        let back: ElementId = serde_json::from_str("\"card-1\"").unwrap();
        assert_eq!(back.as_str(), "card-1");
    }
}
