//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer does no I/O.

mod entity;
mod item;
mod tag;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{validate_content, Item, ItemList, MIN_CONTENT_LEN};
pub use tag::{validate_tag_name, Tag, DEFAULT_TAG_COLOR};
