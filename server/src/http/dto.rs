//! Wire representations
//!
//! JSON shapes accepted and returned by the HTTP API. IDs travel as strings;
//! storage metadata such as timestamps never leaves the server.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Item, ItemList, Tag};
use crate::repository::ItemFilter;

use super::error::ApiError;

/// Parse an ID taken from a path segment or payload
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Decode a JSON request body.
///
/// An empty body reads as a request with every field absent, so field
/// validation decides what is missing.
pub fn parse_payload<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejected payload: {e}");
        ApiError::MalformedPayload
    })
}

/// Item as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: String,
    pub content: String,
    pub checked: bool,
    pub list: ItemList,
    pub tags: Vec<TagView>,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            content: item.content.clone(),
            checked: item.checked,
            list: item.list,
            tags: item.tags.iter().map(TagView::from).collect(),
        }
    }
}

/// Tag as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagView {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<&Tag> for TagView {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
            color: tag.color.clone(),
        }
    }
}

/// A tag reference in a payload: clients may echo back the string IDs they
/// received or send plain numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Number(u32),
    Text(String),
}

impl TagRef {
    fn id(&self) -> Option<u32> {
        match self {
            TagRef::Number(n) => Some(*n),
            TagRef::Text(s) => parse_id(s),
        }
    }
}

/// Resolve tag references, dropping the ones that cannot be IDs
pub fn tag_ids(refs: &[TagRef]) -> Vec<u32> {
    refs.iter().filter_map(TagRef::id).collect()
}

/// `GET /items` query string
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    pub list: Option<String>,
    pub tag_id: Option<String>,
}

impl ItemQuery {
    pub fn into_filter(self) -> Result<ItemFilter, ApiError> {
        let list = self
            .list
            .filter(|l| !l.is_empty())
            .map(|l| l.parse::<ItemList>())
            .transpose()?;
        let tag_id = match self.tag_id.filter(|t| !t.is_empty()) {
            Some(raw) => Some(
                parse_id(&raw).ok_or_else(|| ApiError::Validation("invalid tag_id".to_string()))?,
            ),
            None => None,
        };
        Ok(ItemFilter { list, tag_id })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    pub content: Option<String>,
    pub checked: Option<bool>,
    pub list: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<TagRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub content: Option<String>,
    pub checked: Option<bool>,
    pub list: Option<String>,
    pub tag_ids: Option<Vec<TagRef>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_view_uses_string_ids() {
        let mut item = Item::new(7, "Milk".to_string(), ItemList::Shopping);
        item.tags.push(Tag::new(3, "Lidl".to_string()));
        item.created_at = Some(1);

        let json = serde_json::to_value(ItemView::from(&item)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "7",
                "content": "Milk",
                "checked": false,
                "list": "shopping",
                "tags": [{"id": "3", "name": "Lidl", "color": "#3b82f6"}]
            })
        );
    }

    #[test]
    fn tag_refs_accept_numbers_and_strings() {
        let req: UpdateItemRequest =
            serde_json::from_str(r#"{"tag_ids": [1, "2", "x"]}"#).unwrap();
        assert_eq!(tag_ids(&req.tag_ids.unwrap()), vec![1, 2]);
    }

    #[test]
    fn empty_body_reads_as_absent_fields() {
        let req: CreateItemRequest = parse_payload(b"").unwrap();
        assert!(req.content.is_none());
        assert!(req.tag_ids.is_empty());

        let req: CreateTagRequest = parse_payload(b"  \n").unwrap();
        assert!(req.name.is_none());
    }

    #[test]
    fn broken_body_is_malformed() {
        let result: Result<CreateItemRequest, _> = parse_payload(br#"{"content": "#);
        assert!(matches!(result, Err(ApiError::MalformedPayload)));

        let result: Result<UpdateItemRequest, _> = parse_payload(br#"{"checked": "yes"}"#);
        assert!(matches!(result, Err(ApiError::MalformedPayload)));
    }

    #[test]
    fn query_into_filter() {
        let filter = ItemQuery {
            list: Some("home-needs".to_string()),
            tag_id: Some("4".to_string()),
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.list, Some(ItemList::HomeNeeds));
        assert_eq!(filter.tag_id, Some(4));

        assert!(ItemQuery {
            list: Some("garage".to_string()),
            tag_id: None,
        }
        .into_filter()
        .is_err());

        assert_eq!(ItemQuery::default().into_filter().unwrap(), ItemFilter::default());
    }
}
