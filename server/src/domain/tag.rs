//! Tag Entity
//!
//! Tags (shops) can be attached to items for grouping and filtering.

use super::entity::{DomainError, DomainResult, Entity};

/// Color given to tags created without one
pub const DEFAULT_TAG_COLOR: &str = "#3b82f6";

/// A tag for grouping items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier
    pub id: u32,
    /// Tag name
    pub name: String,
    /// Color (hex, e.g., "#FF5733")
    pub color: String,
}

impl Tag {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            color: DEFAULT_TAG_COLOR.to_string(),
        }
    }

    pub fn with_color(id: u32, name: String, color: String) -> Self {
        Self { id, name, color }
    }
}

impl Entity for Tag {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Check a tag name and return it trimmed
pub fn validate_tag_name(name: Option<&str>) -> DomainResult<String> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(DomainError::InvalidInput("name missing".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_creation() {
        let tag = Tag::new(1, "Lidl".to_string());
        assert_eq!(tag.id(), 1);
        assert_eq!(tag.name, "Lidl");
        assert_eq!(tag.color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_tag_with_color() {
        let tag = Tag::with_color(2, "Market".to_string(), "#FF0000".to_string());
        assert_eq!(tag.color, "#FF0000");
    }

    #[test]
    fn test_validate_tag_name() {
        assert_eq!(validate_tag_name(Some(" Aldi ")), Ok("Aldi".to_string()));
        assert!(validate_tag_name(Some("  ")).is_err());
        assert!(validate_tag_name(None).is_err());
    }
}
