//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, Item, ItemList};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its store-assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity.
    ///
    /// Fails with `DomainError::NotFound` when no entity has this ID.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Deleting an absent ID is not an error.
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Scope for listing items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub list: Option<ItemList>,
    pub tag_id: Option<u32>,
}

/// Extension for repositories that can list a subset of items
#[async_trait]
pub trait FilteredRepository: Repository<Item> {
    async fn list_filtered(&self, filter: ItemFilter) -> DomainResult<Vec<Item>>;
}

/// Item writes that also replace the item's tag set.
///
/// The row and its tags are written in one transaction: either both land or
/// neither does. Unknown tag IDs are skipped.
#[async_trait]
pub trait ItemTagOperations: Send + Sync {
    async fn create_with_tags(&self, item: &Item, tag_ids: &[u32]) -> DomainResult<Item>;

    /// Fails with `DomainError::NotFound` when no item has this ID
    async fn update_with_tags(&self, item: &Item, tag_ids: &[u32]) -> DomainResult<Item>;
}
