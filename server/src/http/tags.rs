//! Tag endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::dto::{parse_id, parse_payload, CreateTagRequest, TagView, UpdateTagRequest};
use super::error::ApiError;
use crate::domain::{validate_tag_name, Tag, DEFAULT_TAG_COLOR};
use crate::repository::Repository;
use crate::AppState;

/// `GET /tags`, sorted by name
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagView>>, ApiError> {
    let tags = state.tags.list().await?;
    Ok(Json(tags.iter().map(TagView::from).collect()))
}

/// `GET /tags/:id`
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TagView>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let tag = state.tags.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(TagView::from(&tag)))
}

/// `POST /tags`
pub async fn create_tag(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TagView>, ApiError> {
    let req: CreateTagRequest = parse_payload(&body)?;

    let name = validate_tag_name(req.name.as_deref())?;
    let color = req
        .color
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());

    let tag = state.tags.create(&Tag::with_color(0, name, color)).await?;
    info!(id = tag.id, name = %tag.name, "Created tag");
    Ok(Json(TagView::from(&tag)))
}

/// `PUT /tags/:id`
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TagView>, ApiError> {
    let req: UpdateTagRequest = parse_payload(&body)?;

    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let mut tag = state.tags.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if req.name.is_some() {
        tag.name = validate_tag_name(req.name.as_deref())?;
    }
    if let Some(color) = req.color.filter(|c| !c.trim().is_empty()) {
        tag.color = color;
    }

    let tag = state.tags.update(&tag).await?;
    Ok(Json(TagView::from(&tag)))
}

/// `DELETE /tags/:id`. Items carrying the tag are kept.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if let Some(id) = parse_id(&id) {
        state.tags.delete(id).await?;
        info!(id, "Deleted tag");
    }
    Ok(StatusCode::NO_CONTENT)
}
