//! Item Entity
//!
//! A shopping-list entry. Belongs to exactly one list and to any number of tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::tag::Tag;

/// Minimum number of characters in an item's content
pub const MIN_CONTENT_LEN: usize = 3;

/// Which list an item lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemList {
    #[default]
    Shopping,
    HomeNeeds,
}

impl ItemList {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemList::Shopping => "shopping",
            ItemList::HomeNeeds => "home-needs",
        }
    }
}

impl fmt::Display for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemList {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopping" => Ok(ItemList::Shopping),
            "home-needs" => Ok(ItemList::HomeNeeds),
            _ => Err(DomainError::InvalidInput(
                "list must be one of shopping, home-needs".to_string(),
            )),
        }
    }
}

/// A shopping-list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier, assigned by the store
    pub id: u32,
    pub content: String,
    pub checked: bool,
    pub list: ItemList,
    /// Tags attached to this item, loaded alongside it
    pub tags: Vec<Tag>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Item {
    /// Create an unchecked, untagged item
    pub fn new(id: u32, content: String, list: ItemList) -> Self {
        Self {
            id,
            content,
            checked: false,
            list,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Check item content and return it trimmed.
///
/// Absent or blank content is reported as missing; anything shorter than
/// [`MIN_CONTENT_LEN`] characters is rejected.
pub fn validate_content(content: Option<&str>) -> DomainResult<String> {
    let trimmed = content.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("content missing".to_string()));
    }
    if trimmed.chars().count() < MIN_CONTENT_LEN {
        return Err(DomainError::InvalidInput(format!(
            "content must be at least {} characters",
            MIN_CONTENT_LEN
        )));
    }
    Ok(trimmed.to_string())
}
