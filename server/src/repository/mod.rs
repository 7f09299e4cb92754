//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod item_repo;
mod item_tag;
mod tag_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState, SharedConnection};
pub use item_repo::ItemRepository;
pub use tag_repo::TagRepository;
pub use traits::{FilteredRepository, ItemFilter, ItemTagOperations, Repository};
