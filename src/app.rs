//! Club Roster App
//!
//! Root component: owns the store subscription and switches views by route.

use leptos::prelude::*;
use roster_core::MemberStore;

use crate::components::{Dashboard, MemberDetail, NotFound};
use crate::context::AppContext;
use crate::route::{Route, Router};
use crate::store::provide_roster;

#[component]
pub fn App(
    #[prop(into)] title: String,
    members: MemberStore,
) -> impl IntoView {
    // Provide context to all children
    provide_roster(&members);
    let router = Router::new();
    provide_context(AppContext::new(members, router));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a class="app-title" href=Route::Dashboard.href()>
                    <h1>{title}</h1>
                </a>
            </header>

            <main class="main-content">
                {move || {
                    let route = router.route();
                    let member_id = route.member_id();
                    match route {
                        Route::Dashboard => view! { <Dashboard /> }.into_any(),
                        Route::MemberDetail(_) => view! { <MemberDetail id=member_id /> }.into_any(),
                        Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
