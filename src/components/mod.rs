//! UI Components
//!
//! Leptos components for the list page.

mod delete_confirm_button;
mod item_row;
mod list_switch;
mod new_item_form;
mod notification;
mod search_filter;
mod tag_manager;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::ItemRow;
pub use list_switch::ListSwitch;
pub use new_item_form::NewItemForm;
pub use notification::Notification;
pub use search_filter::SearchFilter;
pub use tag_manager::TagManager;
