//! Search box. Filtering happens client-side in `list_view::visible_items`.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchFilter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <form class="input-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <input
                type="search"
                placeholder="Search..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
        </form>
    }
}
