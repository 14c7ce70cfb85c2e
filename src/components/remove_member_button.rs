//! Remove Member Button
//!
//! "Remove" that asks "Remove <name>?" in place before calling back.

use leptos::prelude::*;

/// Prompt shown while a removal awaits confirmation
pub fn removal_prompt(name: &str) -> String {
    format!("Remove {}?", name)
}

#[component]
pub fn RemoveMemberButton(
    /// Shown in the confirmation prompt
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = removal_prompt(&name);

    view! {
        {move || if confirming.get() {
            view! {
                <span class="remove-confirm">
                    <span class="remove-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                        "Keep"
                    </button>
                </span>
            }
                .into_any()
        } else {
            view! {
                <button
                    class="remove-btn"
                    title=format!("Remove {}", name)
                    on:click=move |_| set_confirming.set(true)
                >
                    "Remove"
                </button>
            }
                .into_any()
        }}
    }
}
