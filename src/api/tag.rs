//! Tag Calls

use serde::Serialize;

use super::{check, endpoint, read_json, ClientError};
use crate::models::Tag;

#[derive(Debug, Serialize)]
pub struct NewTag<'a> {
    pub name: &'a str,
    pub color: Option<&'a str>,
}

pub async fn list_tags() -> Result<Vec<Tag>, ClientError> {
    let response = reqwest::Client::new().get(endpoint("/tags")).send().await?;
    read_json(response).await
}

pub async fn create_tag(new_tag: &NewTag<'_>) -> Result<Tag, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint("/tags"))
        .json(new_tag)
        .send()
        .await?;
    read_json(response).await
}

pub async fn remove_tag(id: &str) -> Result<(), ClientError> {
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/tags/{}", id)))
        .send()
        .await?;
    check(response).await?;
    Ok(())
}
