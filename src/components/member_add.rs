//! Member Add Component
//!
//! Form for adding a member by name.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Passes the raw input to the store, which trims and validates it
#[component]
pub fn MemberAdd() -> impl IntoView {
    let ctx = use_app_context();

    let (new_name, set_new_name) = signal(String::new());

    let add_member = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_member(&new_name.get()).is_some() {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="member-add-form" on:submit=add_member>
            <input
                type="text"
                placeholder="Add member..."
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
