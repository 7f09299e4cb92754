//! New Item Form Component
//!
//! Adds an item to the selected list, tagged with the selected tag.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ClientError, NewItem};
use crate::context::use_app_context;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move || {
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let list = store.list().get_untracked();
        let tag_ids = store.selected_tag().get_untracked().into_iter().collect();

        spawn_local(async move {
            let new_item = NewItem {
                content: text.trim(),
                checked: false,
                list,
                tag_ids,
            };
            match api::create_item(&new_item).await {
                Ok(created) => {
                    store_add_item(&store, created);
                    set_new_text.set(String::new());
                }
                Err(ClientError::Status {
                    message: Some(reason),
                    ..
                }) => ctx.show_error(format!("Failed to add item: {}", reason)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ITEM] create failed: {}", e).into());
                    ctx.show_error("Failed to add item".to_string());
                }
            }
        });
    };

    view! {
        <form
            class="input-form new-item-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                create_item();
            }
        >
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"save"</button>
        </form>
    }
}
