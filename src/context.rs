//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::list_view::ERROR_BANNER_MS;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    store: AppStore,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), store: AppStore) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            store,
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show an error banner, dismissed after five seconds
    pub fn show_error(&self, message: String) {
        web_sys::console::error_1(&format!("[APP] {}", message).into());
        self.store.error_message().set(Some(message.clone()));

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_BANNER_MS).await;
            // A newer banner keeps its own five seconds
            if store.error_message().get_untracked().as_deref() == Some(message.as_str()) {
                store.error_message().set(None);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
