//! Dashboard Component
//!
//! Summary counts above the add form and member list.

use leptos::prelude::*;

use crate::components::{MemberAdd, MemberList};
use crate::store::{roster_summary, use_roster};

#[component]
pub fn Dashboard() -> impl IntoView {
    let roster = use_roster();
    let summary = Memo::new(move |_| roster_summary(roster));

    view! {
        <section class="dashboard">
            <div class="summary">
                <span class="summary-item">"Total: " {move || summary.get().total}</span>
                <span class="summary-item">"Active: " {move || summary.get().active}</span>
            </div>

            <MemberAdd />

            <MemberList />
        </section>
    }
}
