//! Item endpoints
//!
//! One handler per verb, each mapping to one repository call. Writes that
//! carry `tag_ids` store the row and its tags together.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use super::dto::{
    parse_id, parse_payload, tag_ids, CreateItemRequest, ItemQuery, ItemView, UpdateItemRequest,
};
use super::error::ApiError;
use crate::domain::{validate_content, Item, ItemList};
use crate::repository::{FilteredRepository, ItemTagOperations, Repository};
use crate::AppState;

/// `GET /items`
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> Result<Json<Vec<ItemView>>, ApiError> {
    let Query(query) = query.map_err(|e| {
        warn!("Rejected item query: {e}");
        ApiError::Validation("invalid query".to_string())
    })?;
    let filter = query.into_filter()?;
    let items = state.items.list_filtered(filter).await?;
    debug!(count = items.len(), ?filter, "Listed items");
    Ok(Json(items.iter().map(ItemView::from).collect()))
}

/// `GET /items/:id`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemView>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let item = state.items.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(ItemView::from(&item)))
}

/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ItemView>, ApiError> {
    let req: CreateItemRequest = parse_payload(&body)?;

    let content = validate_content(req.content.as_deref())?;
    let list = req
        .list
        .as_deref()
        .map(str::parse::<ItemList>)
        .transpose()?
        .unwrap_or_default();

    let mut item = Item::new(0, content, list);
    item.checked = req.checked.unwrap_or(false);

    let created = state
        .items
        .create_with_tags(&item, &tag_ids(&req.tag_ids))
        .await?;
    info!(id = created.id, list = %created.list, "Created item");
    Ok(Json(ItemView::from(&created)))
}

/// `PUT /items/:id`
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ItemView>, ApiError> {
    let req: UpdateItemRequest = parse_payload(&body)?;

    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let mut item = state.items.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if let Some(content) = req.content.as_deref() {
        item.content = validate_content(Some(content))?;
    }
    if let Some(checked) = req.checked {
        item.checked = checked;
    }
    if let Some(list) = req.list.as_deref() {
        item.list = list.parse()?;
    }

    let updated = match req.tag_ids.as_deref() {
        Some(refs) => state.items.update_with_tags(&item, &tag_ids(refs)).await?,
        None => state.items.update(&item).await?,
    };
    info!(id, checked = updated.checked, "Updated item");
    Ok(Json(ItemView::from(&updated)))
}

/// `DELETE /items/:id`, 204 whether or not the item existed
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(id) = parse_id(&id) {
        state.items.delete(id).await?;
        info!(id, "Deleted item");
    }
    Ok(StatusCode::NO_CONTENT)
}

