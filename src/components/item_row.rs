//! Item Row Component
//!
//! One list entry. Click the text to edit; blur or Enter saves, Escape
//! cancels. While editing, the row also offers every tag as a toggle.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ItemChanges};
use crate::context::use_app_context;
use crate::list_view::{
    check_toggle, toggle_failed_message, toggled_tag_ids, PendingSaves, RowCommit, RowState,
};
use crate::models::Item;
use crate::store::{store_remove_item, store_update_item, use_app_store, AppStateStoreFields};

/// A single item row, reading its item from the store by ID
#[component]
pub fn ItemRow(id: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (row, set_row) = signal(RowState::Viewing);
    let is_editing = Memo::new(move |_| row.with(RowState::is_editing));
    let input_ref = NodeRef::<html::Input>::new();
    let (pending, set_pending) = signal(PendingSaves::default());

    let item = Memo::new(move |_| {
        store
            .items()
            .read()
            .iter()
            .find(|item| item.id == id)
            .cloned()
    });

    // Server calls. Local state changes only once the server answered.
    let save = move |current: Item, changes: ItemChanges| {
        set_pending.update(PendingSaves::begin);
        spawn_local(async move {
            let result = api::update_item(&current.id, &changes).await;
            set_pending.update(PendingSaves::finish);
            match result {
                Ok(returned) => store_update_item(&store, returned),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEM] update failed: {}", e).into());
                    let message = if changes.checked.is_some() {
                        toggle_failed_message(&current.content)
                    } else {
                        format!("Failed to update '{}'", current.content)
                    };
                    ctx.show_error(message);
                }
            }
        });
    };

    let delete = move |current: Item| {
        spawn_local(async move {
            match api::remove_item(&current.id).await {
                Ok(()) => store_remove_item(&store, &current.id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEM] delete failed: {}", e).into());
                    ctx.show_error(format!("Failed to delete '{}'", current.content));
                }
            }
        });
    };

    let toggle_checked = move |ev: web_sys::Event| {
        let Some(current) = item.get_untracked() else {
            return;
        };
        let toggle = check_toggle(&current);
        // The box follows the store, which only moves once the server answered
        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(toggle.shown);
        if !pending.get_untracked().is_settled() {
            return;
        }
        let changes = ItemChanges {
            checked: Some(toggle.requested),
            ..Default::default()
        };
        save(current, changes);
    };

    let toggle_tag = move |tag_id: String| {
        if !pending.get_untracked().is_settled() {
            return;
        }
        if let Some(current) = item.get_untracked() {
            let changes = ItemChanges {
                tag_ids: Some(toggled_tag_ids(&current, &tag_id)),
                ..Default::default()
            };
            save(current, changes);
        }
    };

    let commit = move || {
        let Some(current) = item.get_untracked() else {
            return;
        };
        let mut state = row.get_untracked();
        let decision = state.commit(&current.content);
        set_row.set(state);

        match decision {
            RowCommit::Keep => {}
            RowCommit::Delete => delete(current),
            RowCommit::Update(content) => save(
                current,
                ItemChanges {
                    content: Some(content),
                    ..Default::default()
                },
            ),
        }
    };

    let start_editing = move |_| {
        if let Some(current) = item.get_untracked() {
            set_row.set(RowState::start_editing(&current.content));
        }
    };

    // Focus the input as soon as it is mounted
    Effect::new(move |_| {
        if is_editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let editing_view = move || {
        view! {
            <input
                class="item-edit"
                type="text"
                node_ref=input_ref
                prop:value=move || match row.get() {
                    RowState::Editing { draft } => draft,
                    RowState::Viewing => String::new(),
                }
                on:input=move |ev| set_row.update(|state| state.set_draft(event_target_value(&ev)))
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => set_row.update(RowState::cancel),
                    _ => {}
                }
            />
            <span class="tag-toggles">
                <For
                    each=move || store.tags().get()
                    key=|tag| tag.id.clone()
                    children=move |tag| {
                        let tag_id = tag.id.clone();
                        let has_tag = {
                            let tag_id = tag_id.clone();
                            move || {
                                item.get()
                                    .map(|i| i.tags.iter().any(|t| t.id == tag_id))
                                    .unwrap_or(false)
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class=move || if has_tag() { "tag-chip on" } else { "tag-chip" }
                                disabled=move || !pending.get().is_settled()
                                style=format!("border-left: 4px solid {};", tag.color_or_default())
                                // mousedown keeps focus in the input, so the edit stays open
                                on:mousedown=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    toggle_tag(tag_id.clone());
                                }
                            >
                                {tag.name.clone()}
                            </button>
                        }
                    }
                />
            </span>
        }
    };

    let viewing_view = move || {
        view! {
            <span class="item-text" on:click=start_editing>
                {move || item.get().map(|i| i.content).unwrap_or_default()}
            </span>
            <span class="item-tags">
                {move || {
                    item.get()
                        .map(|i| i.tags)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span
                                    class="tag-chip"
                                    style=format!("border-left: 4px solid {};", tag.color_or_default())
                                >
                                    {tag.name.clone()}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </span>
        }
    };

    let checked = move || item.get().map(|i| i.checked).unwrap_or(false);

    view! {
        <li class=move || if checked() { "item checked" } else { "item" }>
            <input type="checkbox" prop:checked=checked on:change=toggle_checked />
            {move || if is_editing.get() {
                editing_view().into_any()
            } else {
                viewing_view().into_any()
            }}
        </li>
    }
}
