//! Member List Component
//!
//! All members in insertion order, with toggle and remove actions.

use leptos::prelude::*;
use roster_core::Member;

use crate::components::RemoveMemberButton;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{use_roster, RosterStateStoreFields};

/// A single member row
#[component]
fn MemberRow(member: Member) -> impl IntoView {
    let ctx = use_app_context();

    let id = member.id;
    let active = member.active;
    let name = member.name;

    view! {
        <li class=if active { "member-row" } else { "member-row inactive" }>
            <input
                type="checkbox"
                title="Active"
                checked=active
                on:change=move |_| {
                    ctx.toggle_member(id);
                }
            />
            <a class="member-name" href=Route::member(id).href()>{name.clone()}</a>
            <span class="member-status">{if active { "active" } else { "inactive" }}</span>
            <RemoveMemberButton
                name=name
                on_confirm=Callback::new(move |_: ()| {
                    ctx.remove_member(id);
                })
            />
        </li>
    }
}

#[component]
pub fn MemberList() -> impl IntoView {
    let roster = use_roster();

    view! {
        <ul class="member-list">
            <For
                each=move || roster.members().get()
                // Any change to a member re-renders its row
                key=|member| (member.id, member.name.clone(), member.active)
                children=move |member| view! { <MemberRow member=member /> }
            />
        </ul>
        <Show when=move || roster.members().with(|members| members.is_empty())>
            <p class="empty-roster">"No members yet."</p>
        </Show>
    }
}
