//! Error banner, cleared by `AppContext::show_error` after five seconds.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Notification() -> impl IntoView {
    let store = use_app_store();

    move || {
        store
            .error_message()
            .get()
            .map(|message| view! { <div class="error">{message}</div> })
    }
}
