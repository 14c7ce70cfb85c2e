use leptos::prelude::*;

use crate::route::Route;

/// Fallback for paths no view handles
#[component]
pub fn NotFound(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <p>"Nothing at " <code>{path}</code></p>
            <a href=Route::Dashboard.href()>"Back to members"</a>
        </section>
    }
}
