//! Item Repository
//!
//! SQLite-backed implementation for Item CRUD operations.
//! Item-tag relationships are in item_tag.

use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::db::{last_insert_id, now_millis, SharedConnection};
use super::item_tag::tags_by_item;
use super::traits::{FilteredRepository, ItemFilter, Repository};
use crate::domain::{DomainError, DomainResult, Item};

const ITEM_COLUMNS: &str = "i.id, i.content, i.checked, i.list, i.created_at, i.updated_at";

/// SQLite implementation of Item repository
#[derive(Clone)]
pub struct ItemRepository {
    pub(super) conn: SharedConnection,
}

impl ItemRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Item> for ItemRepository {
    async fn create(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;
        let id = insert_item(&conn, entity)?;
        find_item(&conn, id)?.ok_or_else(|| DomainError::NotFound(format!("Item {}", id)))
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Item>> {
        let conn = self.conn.lock().await;
        find_item(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Item>> {
        self.list_filtered(ItemFilter::default()).await
    }

    async fn update(&self, entity: &Item) -> DomainResult<Item> {
        let conn = self.conn.lock().await;
        update_item_row(&conn, entity)?;
        find_item(&conn, entity.id)?
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", entity.id)))
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM item_tags WHERE item_id = ?", params![id])?;
        tx.execute("DELETE FROM items WHERE id = ?", params![id])?;

        tx.commit()?;
        Ok(())
    }
}

#[async_trait]
impl FilteredRepository for ItemRepository {
    async fn list_filtered(&self, filter: ItemFilter) -> DomainResult<Vec<Item>> {
        let conn = self.conn.lock().await;

        let mut sql = format!("SELECT {} FROM items i", ITEM_COLUMNS);
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(list) = filter.list {
            clauses.push("i.list = ?");
            values.push(Value::Text(list.as_str().to_string()));
        }
        if let Some(tag_id) = filter.tag_id {
            clauses.push("EXISTS (SELECT 1 FROM item_tags it WHERE it.item_id = i.id AND it.tag_id = ?)");
            values.push(Value::Integer(i64::from(tag_id)));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY i.id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let mut items = stmt
            .query_map(params_from_iter(values), row_to_item)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut tags = tags_by_item(&conn, None)?;
        for item in &mut items {
            item.tags = tags.remove(&item.id).unwrap_or_default();
        }
        Ok(items)
    }
}

/// Insert the item row and return its new ID. Tags are not touched.
pub(super) fn insert_item(conn: &Connection, entity: &Item) -> DomainResult<u32> {
    let now = now_millis();
    conn.execute(
        "INSERT INTO items (content, checked, list, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        params![entity.content, entity.checked, entity.list.as_str(), now, now],
    )?;
    last_insert_id(conn)
}

/// Overwrite content, checked and list of an existing row
pub(super) fn update_item_row(conn: &Connection, entity: &Item) -> DomainResult<()> {
    let changed = conn.execute(
        "UPDATE items SET content = ?, checked = ?, list = ?, updated_at = ? WHERE id = ?",
        params![
            entity.content,
            entity.checked,
            entity.list.as_str(),
            now_millis(),
            entity.id
        ],
    )?;
    if changed == 0 {
        return Err(DomainError::NotFound(format!("Item {}", entity.id)));
    }
    Ok(())
}

/// Load one item with its tags
pub(super) fn find_item(conn: &Connection, id: u32) -> DomainResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM items i WHERE i.id = ?", ITEM_COLUMNS),
            params![id],
            row_to_item,
        )
        .optional()?;

    match item {
        Some(mut item) => {
            item.tags = tags_by_item(conn, Some(id))?.remove(&id).unwrap_or_default();
            Ok(Some(item))
        }
        None => Ok(None),
    }
}

/// Convert a database row to Item (tags are attached separately)
fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        content: row.get(1)?,
        checked: row.get(2)?,
        list: row.get::<_, String>(3)?.parse().unwrap_or_default(),
        tags: Vec::new(),
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
