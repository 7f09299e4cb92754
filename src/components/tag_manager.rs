//! Tag Manager Component
//!
//! Shop tags: filter by one, add one with a color, delete one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewTag};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{Tag, DEFAULT_TAG_COLOR};
use crate::store::{store_add_tag, store_remove_tag, use_app_store, AppStateStoreFields};

/// Tag add form, shown after clicking "+ Add Shop"
#[component]
fn TagAddForm(set_adding: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (new_tag_name, set_new_tag_name) = signal(String::new());
    let (new_tag_color, set_new_tag_color) = signal(DEFAULT_TAG_COLOR.to_string());

    let add_tag = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_tag_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let color = new_tag_color.get_untracked();

        spawn_local(async move {
            let new_tag = NewTag {
                name: name.trim(),
                color: Some(&color),
            };
            match api::create_tag(&new_tag).await {
                Ok(tag) => {
                    store_add_tag(&store, tag);
                    set_new_tag_name.set(String::new());
                    set_new_tag_color.set(DEFAULT_TAG_COLOR.to_string());
                    set_adding.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TAG] create failed: {}", e).into());
                    ctx.show_error("Failed to add shop".to_string());
                }
            }
        });
    };

    view! {
        <form class="tag-form" on:submit=add_tag>
            <input
                type="text"
                placeholder="Shop name..."
                prop:value=move || new_tag_name.get()
                on:input=move |ev| set_new_tag_name.set(event_target_value(&ev))
            />
            <input
                type="color"
                title="Choose color"
                prop:value=move || new_tag_color.get()
                on:input=move |ev| set_new_tag_color.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
            <button type="button" on:click=move |_| set_adding.set(false)>"Cancel"</button>
        </form>
    }
}

/// One selectable tag with its delete button
#[component]
fn TagEntry(tag: Tag) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = tag.id.clone();
    let is_selected = {
        let id = id.clone();
        move || store.selected_tag().get().as_deref() == Some(id.as_str())
    };
    let select = {
        let id = id.clone();
        move |_| store.selected_tag().set(Some(id.clone()))
    };
    let delete = Callback::new(move |_: ()| {
        let id = id.clone();
        spawn_local(async move {
            match api::remove_tag(&id).await {
                Ok(()) => {
                    store_remove_tag(&store, &id);
                    // Items lose the tag but stay; refresh their tag chips
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TAG] delete failed: {}", e).into());
                    ctx.show_error("Failed to delete shop".to_string());
                }
            }
        });
    });

    view! {
        <div class="tag-item">
            <button
                class=move || if is_selected() { "tag-button active" } else { "tag-button" }
                style=format!("border-left: 4px solid {};", tag.color_or_default())
                on:click=select
            >
                {tag.name.clone()}
            </button>
            <DeleteConfirmButton button_class="tag-delete" subject=tag.name.clone() on_confirm=delete />
        </div>
    }
}

#[component]
pub fn TagManager() -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    view! {
        <div class="tag-manager">
            <div class="tag-list">
                <button
                    class=move || {
                        if store.selected_tag().get().is_none() { "tag-button active" } else { "tag-button" }
                    }
                    on:click=move |_| store.selected_tag().set(None)
                >
                    "All Items"
                </button>
                <For
                    each=move || store.tags().get()
                    key=|tag| (tag.id.clone(), tag.name.clone(), tag.color.clone())
                    children=move |tag| view! { <TagEntry tag=tag /> }
                />
            </div>

            {move || if adding.get() {
                view! { <TagAddForm set_adding=set_adding /> }.into_any()
            } else {
                view! {
                    <button class="add-tag-button" on:click=move |_| set_adding.set(true)>
                        "+ Add Shop"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
