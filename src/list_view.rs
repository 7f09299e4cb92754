//! List View Logic
//!
//! Pure functions behind the list: client-side filtering, ordering,
//! reconciliation with server responses, and the per-row edit state machine.

use crate::models::Item;

/// How long an error banner stays up
pub const ERROR_BANNER_MS: u32 = 5_000;

/// Order items by content, ignoring case
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.content
            .to_lowercase()
            .cmp(&b.content.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Items passing the show-all/show-missing toggle and the search box
pub fn visible_items(items: &[Item], search: &str, show_all: bool) -> Vec<Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| show_all || !item.checked)
        .filter(|item| item.content.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Swap in the server's copy of an item, keeping the list sorted
pub fn replace_item(items: &mut Vec<Item>, returned: Item) {
    match items.iter_mut().find(|item| item.id == returned.id) {
        Some(slot) => *slot = returned,
        None => items.push(returned),
    }
    sort_items(items);
}

/// Add a freshly created item, keeping the list sorted
pub fn insert_item(items: &mut Vec<Item>, created: Item) {
    replace_item(items, created);
}

pub fn remove_item(items: &mut Vec<Item>, id: &str) {
    items.retain(|item| item.id != id);
}

/// Tag set after toggling one tag on an item
pub fn toggled_tag_ids(item: &Item, tag_id: &str) -> Vec<String> {
    let mut ids = item.tag_ids();
    if let Some(pos) = ids.iter().position(|id| id == tag_id) {
        ids.remove(pos);
    } else {
        ids.push(tag_id.to_string());
    }
    ids
}

/// A click on a row's checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckToggle {
    /// What the checkbox shows until the server answered
    pub shown: bool,
    /// Value sent to the server
    pub requested: bool,
}

pub fn check_toggle(item: &Item) -> CheckToggle {
    CheckToggle {
        shown: item.checked,
        requested: !item.checked,
    }
}

/// Saves of one row still waiting for the server.
///
/// Toggles derive the next value from the stored item, so a second toggle
/// has to wait until the first one came back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingSaves(u32);

impl PendingSaves {
    pub fn begin(&mut self) {
        self.0 += 1;
    }

    pub fn finish(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_settled(&self) -> bool {
        self.0 == 0
    }
}

/// Banner text when flipping `checked` fails
pub fn toggle_failed_message(content: &str) -> String {
    format!("Item '{}' was already removed from the server", content)
}

/// Edit state of one item row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Viewing,
    Editing { draft: String },
}

/// What leaving edit mode asks of the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCommit {
    /// Nothing changed
    Keep,
    /// Draft was emptied
    Delete,
    /// Draft differs; carries the trimmed content
    Update(String),
}

impl RowState {
    /// Click on the text
    pub fn start_editing(content: &str) -> Self {
        RowState::Editing {
            draft: content.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowState::Editing { .. })
    }

    pub fn set_draft(&mut self, text: String) {
        if let RowState::Editing { draft } = self {
            *draft = text;
        }
    }

    /// Blur or Enter: return to viewing and decide the server call
    pub fn commit(&mut self, original: &str) -> RowCommit {
        let state = std::mem::take(self);
        let RowState::Editing { draft } = state else {
            return RowCommit::Keep;
        };

        let trimmed = draft.trim();
        if trimmed.is_empty() {
            RowCommit::Delete
        } else if trimmed != original {
            RowCommit::Update(trimmed.to_string())
        } else {
            RowCommit::Keep
        }
    }

    /// Escape: drop the draft
    pub fn cancel(&mut self) {
        *self = RowState::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemList, Tag};

    fn make_item(id: &str, content: &str, checked: bool) -> Item {
        Item {
            id: id.to_string(),
            content: content.to_string(),
            checked,
            list: ItemList::Shopping,
            tags: Vec::new(),
        }
    }

    fn contents(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.content.as_str()).collect()
    }

    #[test]
    fn test_sort_ignores_case() {
        let mut items = vec![
            make_item("1", "milk", false),
            make_item("2", "Bread", false),
            make_item("3", "apples", false),
        ];
        sort_items(&mut items);
        assert_eq!(contents(&items), vec!["apples", "Bread", "milk"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            make_item("1", "Whole Milk", false),
            make_item("2", "Bread", false),
            make_item("3", "Buttermilk", true),
        ];
        assert_eq!(contents(&visible_items(&items, "MILK", true)), vec!["Whole Milk", "Buttermilk"]);
        assert_eq!(visible_items(&items, "", true).len(), 3);
    }

    #[test]
    fn test_show_missing_hides_checked() {
        let items = vec![
            make_item("1", "Whole Milk", false),
            make_item("2", "Buttermilk", true),
        ];
        assert_eq!(contents(&visible_items(&items, "", false)), vec!["Whole Milk"]);
        assert_eq!(contents(&visible_items(&items, "butter", false)), Vec::<&str>::new());
    }

    #[test]
    fn test_replace_item_takes_server_copy() {
        let mut items = vec![make_item("1", "Milk", false), make_item("2", "Eggs", false)];
        replace_item(&mut items, make_item("1", "Almond milk", true));

        assert_eq!(contents(&items), vec!["Almond milk", "Eggs"]);
        assert!(items[0].checked);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut items = vec![make_item("1", "Milk", false)];
        insert_item(&mut items, make_item("2", "Cheese", false));
        assert_eq!(contents(&items), vec!["Cheese", "Milk"]);

        remove_item(&mut items, "1");
        assert_eq!(contents(&items), vec!["Cheese"]);
        remove_item(&mut items, "1");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_toggled_tag_ids() {
        let mut item = make_item("1", "Milk", false);
        item.tags.push(Tag {
            id: "5".to_string(),
            name: "Lidl".to_string(),
            color: None,
        });

        assert_eq!(toggled_tag_ids(&item, "6"), vec!["5".to_string(), "6".to_string()]);
        assert!(toggled_tag_ids(&item, "5").is_empty());
    }

    #[test]
    fn test_commit_unchanged_keeps() {
        let mut state = RowState::start_editing("Milk");
        assert_eq!(state.commit("Milk"), RowCommit::Keep);
        assert_eq!(state, RowState::Viewing);
    }

    #[test]
    fn test_commit_empty_deletes() {
        let mut state = RowState::start_editing("Milk");
        state.set_draft("   ".to_string());
        assert_eq!(state.commit("Milk"), RowCommit::Delete);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_commit_changed_updates_trimmed() {
        let mut state = RowState::start_editing("Milk");
        state.set_draft("  Oat milk ".to_string());
        assert_eq!(state.commit("Milk"), RowCommit::Update("Oat milk".to_string()));

        // Only whitespace added: nothing to send
        let mut state = RowState::start_editing("Milk");
        state.set_draft("Milk  ".to_string());
        assert_eq!(state.commit("Milk"), RowCommit::Keep);
    }

    #[test]
    fn test_commit_while_viewing_is_noop() {
        let mut state = RowState::Viewing;
        state.set_draft("ignored".to_string());
        assert_eq!(state.commit("Milk"), RowCommit::Keep);
    }

    #[test]
    fn test_cancel_drops_draft() {
        let mut state = RowState::start_editing("Milk");
        state.set_draft("Bread".to_string());
        state.cancel();
        assert_eq!(state.commit("Milk"), RowCommit::Keep);
    }

    #[test]
    fn test_toggle_failed_message() {
        assert_eq!(
            toggle_failed_message("Milk"),
            "Item 'Milk' was already removed from the server"
        );
    }

    #[test]
    fn test_check_toggle_waits_for_server() {
        let open = make_item("1", "Milk", false);
        let toggle = check_toggle(&open);
        assert!(!toggle.shown);
        assert!(toggle.requested);

        let done = make_item("2", "Eggs", true);
        assert_eq!(
            check_toggle(&done),
            CheckToggle {
                shown: true,
                requested: false
            }
        );
    }

    #[test]
    fn test_pending_saves_settle_after_last_answer() {
        let mut pending = PendingSaves::default();
        assert!(pending.is_settled());

        pending.begin();
        pending.begin();
        pending.finish();
        assert!(!pending.is_settled());

        pending.finish();
        assert!(pending.is_settled());

        // An extra answer never underflows
        pending.finish();
        assert!(pending.is_settled());
    }
}
