//! Frontend Models
//!
//! Data structures matching the JSON served by the backend.

use serde::{Deserialize, Serialize};

/// Which list an item lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemList {
    #[default]
    Shopping,
    HomeNeeds,
}

impl ItemList {
    pub const ALL: [ItemList; 2] = [ItemList::Shopping, ItemList::HomeNeeds];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemList::Shopping => "shopping",
            ItemList::HomeNeeds => "home-needs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemList::Shopping => "Shopping",
            ItemList::HomeNeeds => "Home needs",
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub content: String,
    pub checked: bool,
    #[serde(default)]
    pub list: ItemList,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Item {
    pub fn tag_ids(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.id.clone()).collect()
    }
}

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

/// Fallback color for tags without one
pub const DEFAULT_TAG_COLOR: &str = "#3b82f6";

impl Tag {
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_TAG_COLOR)
    }
}
