//! Member Detail Component
//!
//! One member resolved from the route, with rename, toggle and remove.
//! An unknown or unparseable id renders an absent state, never an error.

use leptos::prelude::*;

use crate::components::RemoveMemberButton;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{roster_member, use_roster};

#[component]
fn MemberMissing() -> impl IntoView {
    view! {
        <div class="member-missing">
            <p>"No member found."</p>
            <a href=Route::Dashboard.href()>"Back to members"</a>
        </div>
    }
}

#[component]
pub fn MemberDetail(id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let roster = use_roster();

    let member = Memo::new(move |_| id.and_then(|id| roster_member(roster, id)));

    // Draft name, pre-filled once from the member as first resolved
    let (draft, set_draft) = signal(
        member
            .get_untracked()
            .map(|m| m.name)
            .unwrap_or_default(),
    );

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id else { return };
        if ctx.rename_member(id, &draft.get()) {
            ctx.navigate(Route::Dashboard);
        }
    };

    view! {
        <section class="member-detail">
            {move || match member.get() {
                Some(m) => {
                    let id = m.id;
                    view! {
                        <h2>{m.name.clone()}</h2>
                        <p class="member-meta">
                            "#" {id} " · " {if m.active { "active" } else { "inactive" }}
                        </p>

                        <form class="member-rename-form" on:submit=save>
                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                            />
                            <button type="submit">"Save"</button>
                        </form>

                        <div class="member-actions">
                            <button
                                class="toggle-btn"
                                on:click=move |_| {
                                    ctx.toggle_member(id);
                                }
                            >
                                {if m.active { "Deactivate" } else { "Activate" }}
                            </button>
                            <RemoveMemberButton
                                name=m.name.clone()
                                on_confirm=Callback::new(move |_: ()| {
                                    ctx.remove_member(id);
                                    ctx.navigate(Route::Dashboard);
                                })
                            />
                            <a class="back-link" href=Route::Dashboard.href()>"Back"</a>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <MemberMissing /> }.into_any(),
            }}
        </section>
    }
}
