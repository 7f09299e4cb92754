//! Confirm-before-delete button
//!
//! Deleting a shop also strips it from every item, so the first click only
//! asks; the second one runs the callback.

use leptos::prelude::*;

/// Inline two-step delete for the named thing
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Shown in the question, e.g. the shop name
    #[prop(into)]
    subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let question = format!("Remove '{}' from all items?", subject);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{question.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "yes"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                        }
                    >
                        "no"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title=format!("Delete {}", subject)
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
