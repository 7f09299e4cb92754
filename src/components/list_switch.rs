//! List Switch Component
//!
//! Chooses between the shopping and home-needs lists.

use leptos::prelude::*;

use crate::models::ItemList;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListSwitch() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="list-switch">
            {ItemList::ALL.iter().map(|&list| {
                let is_selected = move || store.list().get() == list;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "list-btn active" } else { "list-btn" }
                        on:click=move |_| store.list().set(list)
                    >
                        {list.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
