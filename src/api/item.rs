//! Item Calls
//!
//! list / create / update / remove against `/api/items`.

use serde::Serialize;

use super::{check, endpoint, read_json, ClientError};
use crate::models::{Item, ItemList};

// ========================
// Argument Structs
// ========================

/// Which items to fetch. Defaults to the shopping list, all tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemScope {
    pub list: ItemList,
    pub tag_id: Option<String>,
}

impl ItemScope {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("list", self.list.as_str().to_string())];
        if let Some(tag_id) = &self.tag_id {
            query.push(("tag_id", tag_id.clone()));
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct NewItem<'a> {
    pub content: &'a str,
    pub checked: bool,
    pub list: ItemList,
    pub tag_ids: Vec<String>,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Debug, Default, Serialize)]
pub struct ItemChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

// ========================
// Calls
// ========================

pub async fn list_items(scope: &ItemScope) -> Result<Vec<Item>, ClientError> {
    let response = reqwest::Client::new()
        .get(endpoint("/items"))
        .query(&scope.query())
        .send()
        .await?;
    read_json(response).await
}

pub async fn create_item(new_item: &NewItem<'_>) -> Result<Item, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint("/items"))
        .json(new_item)
        .send()
        .await?;
    read_json(response).await
}

pub async fn update_item(id: &str, changes: &ItemChanges) -> Result<Item, ClientError> {
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/items/{}", id)))
        .json(changes)
        .send()
        .await?;
    read_json(response).await
}

pub async fn remove_item(id: &str) -> Result<(), ClientError> {
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/items/{}", id)))
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_is_shopping_list() {
        let scope = ItemScope::default();
        assert_eq!(scope.query(), vec![("list", "shopping".to_string())]);
    }

    #[test]
    fn scope_with_tag() {
        let scope = ItemScope {
            list: ItemList::HomeNeeds,
            tag_id: Some("4".to_string()),
        };
        assert_eq!(
            scope.query(),
            vec![("list", "home-needs".to_string()), ("tag_id", "4".to_string())]
        );
    }

    #[test]
    fn changes_skip_absent_fields() {
        let changes = ItemChanges {
            checked: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&changes).unwrap(), r#"{"checked":true}"#);
    }
}
