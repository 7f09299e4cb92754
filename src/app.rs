//! Shopping List Frontend App
//!
//! Root component: owns the store, loads data, lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ItemRow, ListSwitch, NewItemForm, Notification, SearchFilter, TagManager};
use crate::context::AppContext;
use crate::list_view::visible_items;
use crate::store::{store_scope, store_set_items, store_set_tags, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load tags on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_tags().await {
                Ok(loaded) => store_set_tags(&store, loaded),
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load tags: {}", e).into()),
            }
        });
    });

    // Load items when the list, the tag filter or the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let scope = store_scope(&store);
        web_sys::console::log_1(&format!("[APP] Loading items for {:?}, trigger={}", scope, trigger).into());
        spawn_local(async move {
            match api::list_items(&scope).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store_set_items(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load items: {}", e).into());
                    ctx.show_error("Failed to load items".to_string());
                }
            }
        });
    });

    let items_to_show = move || {
        visible_items(
            &store.items().read(),
            &store.search().read(),
            store.show_all().get(),
        )
    };

    view! {
        <div class="app">
            <h1>"Shopping List"</h1>
            <Notification />

            <ListSwitch />
            <TagManager />
            <SearchFilter />

            <div>
                <button on:click=move |_| store.show_all().update(|v| *v = !*v)>
                    {move || if store.show_all().get() { "show missing" } else { "show all" }}
                </button>
            </div>

            <ul class="glassy">
                <For
                    each=items_to_show
                    key=|item| item.id.clone()
                    children=|item| view! { <ItemRow id=item.id /> }
                />
            </ul>

            <NewItemForm />

            <p class="item-count">
                {move || format!("{} of {} items", items_to_show().len(), store.items().read().len())}
            </p>
        </div>
    }
}
