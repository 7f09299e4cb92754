//! Item-Tag Relationship Operations
//!
//! Operations for managing the many-to-many relationship between items and tags.

use std::collections::HashMap;

use async_trait::async_trait;
use rusqlite::{params, Connection};

use super::item_repo::{find_item, insert_item, update_item_row, ItemRepository};
use super::traits::ItemTagOperations;
use crate::domain::{DomainError, DomainResult, Item, Tag};

#[async_trait]
impl ItemTagOperations for ItemRepository {
    async fn create_with_tags(&self, item: &Item, tag_ids: &[u32]) -> DomainResult<Item> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let id = insert_item(&tx, item)?;
        replace_item_tags(&tx, id, tag_ids)?;

        tx.commit()?;
        find_item(&conn, id)?.ok_or_else(|| DomainError::NotFound(format!("Item {}", id)))
    }

    async fn update_with_tags(&self, item: &Item, tag_ids: &[u32]) -> DomainResult<Item> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        update_item_row(&tx, item)?;
        replace_item_tags(&tx, item.id, tag_ids)?;

        tx.commit()?;
        find_item(&conn, item.id)?
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", item.id)))
    }
}

/// Replace the full tag set of an item
fn replace_item_tags(conn: &Connection, item_id: u32, tag_ids: &[u32]) -> DomainResult<()> {
    conn.execute("DELETE FROM item_tags WHERE item_id = ?", params![item_id])?;

    // Only link tags that exist; the SELECT yields no row for unknown IDs
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO item_tags (item_id, tag_id)
         SELECT ?1, id FROM tags WHERE id = ?2",
    )?;
    for tag_id in tag_ids {
        stmt.execute(params![item_id, tag_id])?;
    }
    Ok(())
}

/// Tags grouped by item ID, each group sorted by name.
///
/// With `Some(id)` only that item's tags are loaded.
pub(super) fn tags_by_item(
    conn: &Connection,
    item_id: Option<u32>,
) -> DomainResult<HashMap<u32, Vec<Tag>>> {
    let mut stmt = conn.prepare(
        "SELECT it.item_id, t.id, t.name, t.color FROM item_tags it
         JOIN tags t ON t.id = it.tag_id
         WHERE ?1 IS NULL OR it.item_id = ?1
         ORDER BY t.name COLLATE NOCASE, t.id",
    )?;

    let rows = stmt.query_map(params![item_id], |row| {
        Ok((
            row.get::<_, u32>(0)?,
            Tag::with_color(row.get(1)?, row.get(2)?, row.get(3)?),
        ))
    })?;

    let mut grouped: HashMap<u32, Vec<Tag>> = HashMap::new();
    for row in rows {
        let (item_id, tag) = row?;
        grouped.entry(item_id).or_default().push(tag);
    }
    Ok(grouped)
}
