//! Repository Integration Tests
//!
//! Tests for ItemRepository and TagRepository with in-memory SQLite database.

use crate::domain::{DomainError, Item, ItemList, Tag};
use crate::repository::{
    init_db, FilteredRepository, ItemFilter, ItemRepository, ItemTagOperations, Repository,
    TagRepository,
};
use std::path::Path;

async fn setup_test_db() -> (ItemRepository, TagRepository) {
    // Use in-memory database for tests
    let db_state = init_db(Path::new(":memory:"))
        .await
        .expect("Failed to init test DB");
    (
        ItemRepository::new(db_state.connection()),
        TagRepository::new(db_state.connection()),
    )
}

fn new_item(content: &str, list: ItemList) -> Item {
    Item::new(0, content.to_string(), list)
}

#[tokio::test]
async fn test_create_item() {
    let (repo, _) = setup_test_db().await;

    let created = repo
        .create(&new_item("Milk", ItemList::Shopping))
        .await
        .expect("Failed to create");

    assert!(created.id > 0);
    assert_eq!(created.content, "Milk");
    assert!(!created.checked);
    assert_eq!(created.list, ItemList::Shopping);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (repo, _) = setup_test_db().await;

    let first = repo.create(&new_item("Bread", ItemList::Shopping)).await.unwrap();
    repo.delete(first.id).await.unwrap();
    let second = repo.create(&new_item("Butter", ItemList::Shopping)).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_find_by_id() {
    let (repo, _) = setup_test_db().await;

    let created = repo.create(&new_item("Find me", ItemList::HomeNeeds)).await.unwrap();

    let found = repo.find_by_id(created.id).await.expect("Find failed").unwrap();
    assert_eq!(found.content, "Find me");
    assert_eq!(found.list, ItemList::HomeNeeds);

    assert!(repo.find_by_id(created.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_items_filtered_by_list() {
    let (repo, _) = setup_test_db().await;

    repo.create(&new_item("Apples", ItemList::Shopping)).await.unwrap();
    repo.create(&new_item("Light bulbs", ItemList::HomeNeeds)).await.unwrap();
    repo.create(&new_item("Pears", ItemList::Shopping)).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 3);

    let shopping = repo
        .list_filtered(ItemFilter {
            list: Some(ItemList::Shopping),
            tag_id: None,
        })
        .await
        .unwrap();
    let contents: Vec<_> = shopping.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, vec!["Apples", "Pears"]);
}

#[tokio::test]
async fn test_update_item() {
    let (repo, _) = setup_test_db().await;

    let mut created = repo.create(&new_item("Original", ItemList::Shopping)).await.unwrap();
    created.content = "Updated".to_string();
    created.checked = true;
    created.list = ItemList::HomeNeeds;

    let updated = repo.update(&created).await.expect("Update failed");
    assert_eq!(updated.content, "Updated");
    assert!(updated.checked);
    assert_eq!(updated.list, ItemList::HomeNeeds);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let (repo, _) = setup_test_db().await;

    let ghost = Item::new(42, "Ghost".to_string(), ItemList::Shopping);
    assert!(matches!(repo.update(&ghost).await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_item_is_idempotent() {
    let (repo, _) = setup_test_db().await;

    let created = repo.create(&new_item("To delete", ItemList::Shopping)).await.unwrap();

    repo.delete(created.id).await.expect("Delete failed");
    repo.delete(created.id).await.expect("Second delete failed");

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

/// Replace an item's tags, keeping its other fields
async fn tag_item(items: &ItemRepository, item: &Item, tag_ids: &[u32]) -> Item {
    items.update_with_tags(item, tag_ids).await.expect("Failed to tag item")
}

#[tokio::test]
async fn test_create_with_tags() {
    let (items, tags) = setup_test_db().await;

    let lidl = tags.create(&Tag::new(0, "Lidl".to_string())).await.unwrap();
    let created = items
        .create_with_tags(&new_item("Yoghurt", ItemList::Shopping), &[lidl.id, 404])
        .await
        .unwrap();

    assert_eq!(created.tags, vec![lidl]);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_update_with_tags_replaces_and_skips_unknown() {
    let (items, tags) = setup_test_db().await;

    let lidl = tags.create(&Tag::new(0, "Lidl".to_string())).await.unwrap();
    let aldi = tags.create(&Tag::new(0, "Aldi".to_string())).await.unwrap();
    let mut item = items.create(&new_item("Cheese", ItemList::Shopping)).await.unwrap();

    item.content = "Goat cheese".to_string();
    let tagged = tag_item(&items, &item, &[lidl.id, aldi.id, 999]).await;
    let names: Vec<_> = tagged.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Aldi", "Lidl"]);
    assert_eq!(tagged.content, "Goat cheese");

    tag_item(&items, &tagged, &[lidl.id]).await;
    let found = items.find_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(found.tags, vec![lidl]);
}

#[tokio::test]
async fn test_update_with_tags_missing_item_is_not_found() {
    let (items, tags) = setup_test_db().await;

    let lidl = tags.create(&Tag::new(0, "Lidl".to_string())).await.unwrap();
    let ghost = Item::new(42, "Ghost".to_string(), ItemList::Shopping);

    assert!(matches!(
        items.update_with_tags(&ghost, &[lidl.id]).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_failed_tag_write_rolls_back_item_write() {
    let db_state = init_db(Path::new(":memory:")).await.unwrap();
    let items = ItemRepository::new(db_state.connection());
    let tags = TagRepository::new(db_state.connection());

    let lidl = tags.create(&Tag::new(0, "Lidl".to_string())).await.unwrap();
    let mut item = items.create(&new_item("Milk", ItemList::Shopping)).await.unwrap();

    // Make every association insert fail from here on
    db_state
        .connection()
        .lock()
        .await
        .execute_batch(
            "CREATE TRIGGER reject_item_tags BEFORE INSERT ON item_tags
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    item.content = "Oat milk".to_string();
    assert!(matches!(
        items.update_with_tags(&item, &[lidl.id]).await,
        Err(DomainError::Internal(_))
    ));
    let stored = items.find_by_id(item.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "Milk");

    assert!(items
        .create_with_tags(&new_item("Bread", ItemList::Shopping), &[lidl.id])
        .await
        .is_err());
    assert_eq!(items.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_items_filtered_by_tag() {
    let (items, tags) = setup_test_db().await;

    let market = tags.create(&Tag::new(0, "Market".to_string())).await.unwrap();
    let eggs = items.create(&new_item("Eggs", ItemList::Shopping)).await.unwrap();
    items.create(&new_item("Soap", ItemList::HomeNeeds)).await.unwrap();
    tag_item(&items, &eggs, &[market.id]).await;

    let tagged = items
        .list_filtered(ItemFilter {
            list: None,
            tag_id: Some(market.id),
        })
        .await
        .unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].content, "Eggs");
    assert_eq!(tagged[0].tags[0].name, "Market");
}

#[tokio::test]
async fn test_delete_tag_keeps_items() {
    let (items, tags) = setup_test_db().await;

    let shop = tags.create(&Tag::new(0, "Corner shop".to_string())).await.unwrap();
    let item = items.create(&new_item("Coffee", ItemList::Shopping)).await.unwrap();
    tag_item(&items, &item, &[shop.id]).await;

    tags.delete(shop.id).await.unwrap();

    let found = items.find_by_id(item.id).await.unwrap().expect("item kept");
    assert!(found.tags.is_empty());
    assert!(tags.find_by_id(shop.id).await.unwrap().is_none());

    let filtered = items
        .list_filtered(ItemFilter {
            list: None,
            tag_id: Some(shop.id),
        })
        .await
        .unwrap();
    assert!(filtered.is_empty());
}

#[tokio::test]
async fn test_tag_names_are_unique_ignoring_case() {
    let (_, tags) = setup_test_db().await;

    let lidl = tags.create(&Tag::new(0, "Lidl".to_string())).await.unwrap();
    let duplicate = Err(DomainError::Conflict(
        "Tag with this name already exists".to_string(),
    ));
    assert_eq!(tags.create(&Tag::new(0, "Lidl".to_string())).await, duplicate);
    assert_eq!(tags.create(&Tag::new(0, "LIDL".to_string())).await, duplicate);

    // Renaming onto another tag's name collides too, keeping one's own does not
    let mut aldi = tags.create(&Tag::new(0, "Aldi".to_string())).await.unwrap();
    aldi.name = "lidl".to_string();
    assert_eq!(tags.update(&aldi).await, duplicate);
    assert!(tags.update(&lidl).await.is_ok());
    assert_eq!(tags.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_tags_sorted_by_name() {
    let (_, tags) = setup_test_db().await;

    tags.create(&Tag::new(0, "rewe".to_string())).await.unwrap();
    tags.create(&Tag::with_color(0, "Aldi".to_string(), "#ff0000".to_string()))
        .await
        .unwrap();

    let listed = tags.list().await.unwrap();
    assert_eq!(listed[0].name, "Aldi");
    assert_eq!(listed[0].color, "#ff0000");
    assert_eq!(listed[1].name, "rewe");
}

#[tokio::test]
async fn test_update_tag() {
    let (_, tags) = setup_test_db().await;

    let mut tag = tags.create(&Tag::new(0, "Edeka".to_string())).await.unwrap();
    tag.color = "#00ff00".to_string();
    tags.update(&tag).await.unwrap();

    let found = tags.find_by_id(tag.id).await.unwrap().unwrap();
    assert_eq!(found.color, "#00ff00");

    let ghost = Tag::new(77, "Nope".to_string());
    assert!(matches!(tags.update(&ghost).await, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_items_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shopping.db");

    {
        let db_state = init_db(&path).await.unwrap();
        let items = ItemRepository::new(db_state.connection());
        let tags = TagRepository::new(db_state.connection());
        let tag = tags.create(&Tag::new(0, "Aldi".to_string())).await.unwrap();
        items
            .create_with_tags(&new_item("Butter", ItemList::HomeNeeds), &[tag.id])
            .await
            .unwrap();
    }

    let db_state = init_db(&path).await.unwrap();
    let items = ItemRepository::new(db_state.connection());
    let listed = items.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "Butter");
    assert_eq!(listed[0].list, ItemList::HomeNeeds);
    assert_eq!(listed[0].tags.len(), 1);
    assert_eq!(listed[0].tags[0].name, "Aldi");
}

#[test]
fn test_row_ids_beyond_u32_are_rejected() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY)").unwrap();

    conn.execute("INSERT INTO t (id) VALUES (7)", ()).unwrap();
    assert_eq!(super::db::last_insert_id(&conn), Ok(7));

    conn.execute("INSERT INTO t (id) VALUES (4294967296)", ()).unwrap();
    assert!(matches!(
        super::db::last_insert_id(&conn),
        Err(DomainError::Internal(_))
    ));
}
