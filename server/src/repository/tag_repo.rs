//! Tag Repository
//!
//! SQLite-backed implementation for Tag CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use super::db::{is_unique_violation, last_insert_id, now_millis, SharedConnection};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Tag};

/// Message for a create or rename that collides with another tag's name
const DUPLICATE_TAG_NAME: &str = "Tag with this name already exists";

/// SQLite implementation of Tag repository
#[derive(Clone)]
pub struct TagRepository {
    conn: SharedConnection,
}

impl TagRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Tag> for TagRepository {
    async fn create(&self, entity: &Tag) -> DomainResult<Tag> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO tags (name, color, created_at) VALUES (?, ?, ?)",
            params![entity.name, entity.color, now_millis()],
        )
        .map_err(name_conflict)?;

        let mut tag = entity.clone();
        tag.id = last_insert_id(&conn)?;
        Ok(tag)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Tag>> {
        let conn = self.conn.lock().await;

        let tag = conn
            .query_row(
                "SELECT id, name, color FROM tags WHERE id = ?",
                params![id],
                row_to_tag,
            )
            .optional()?;
        Ok(tag)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let conn = self.conn.lock().await;

        let mut stmt =
            conn.prepare("SELECT id, name, color FROM tags ORDER BY name COLLATE NOCASE, id")?;
        let tags = stmt
            .query_map([], row_to_tag)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    async fn update(&self, entity: &Tag) -> DomainResult<Tag> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "UPDATE tags SET name = ?, color = ? WHERE id = ?",
                params![entity.name, entity.color, entity.id],
            )
            .map_err(name_conflict)?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Tag {}", entity.id)));
        }

        Ok(entity.clone())
    }

    /// Items keep existing; only their association with the tag is dropped.
    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM item_tags WHERE tag_id = ?", params![id])?;
        tx.execute("DELETE FROM tags WHERE id = ?", params![id])?;

        tx.commit()?;
        Ok(())
    }
}

fn name_conflict(e: rusqlite::Error) -> DomainError {
    if is_unique_violation(&e) {
        DomainError::Conflict(DUPLICATE_TAG_NAME.to_string())
    } else {
        e.into()
    }
}

/// Convert a database row to Tag
fn row_to_tag(row: &rusqlite::Row) -> rusqlite::Result<Tag> {
    Ok(Tag::with_color(row.get(0)?, row.get(1)?, row.get(2)?))
}
