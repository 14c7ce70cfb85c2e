//! Reactive Roster State
//!
//! Mirrors the `MemberStore` into a Leptos `reactive_stores` store so views
//! get fine-grained reactivity. The mirror is read-only for views; all
//! mutations go through `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;
use roster_core::{summarize, Member, MemberStore, Summary};

/// Latest snapshot as reactive state
#[derive(Clone, Debug, Default, Store)]
pub struct RosterState {
    /// Members in display order
    pub members: Vec<Member>,
}

/// Type alias for the store
pub type RosterStore = Store<RosterState>;

/// Get the roster mirror from context
pub fn use_roster() -> RosterStore {
    expect_context::<RosterStore>()
}

/// Subscribe a new mirror to `members` and provide it as context.
///
/// The subscription is cancelled when the calling owner is cleaned up.
pub fn provide_roster(members: &MemberStore) -> RosterStore {
    let roster = Store::new(RosterState::default());

    let subscription = members.subscribe(move |snapshot| {
        log::trace!("[roster] mirroring snapshot v{}", snapshot.version());
        *roster.members().write() = snapshot.members().to_vec();
    });
    on_cleanup(move || subscription.cancel());

    provide_context(roster);
    roster
}

// ========================
// Derived Reads
// ========================

/// Member `id` in the mirror, tracked
pub fn roster_member(roster: RosterStore, id: u32) -> Option<Member> {
    roster
        .members()
        .with(|members| members.iter().find(|m| m.id == id).cloned())
}

/// Dashboard counts over the mirror, tracked
pub fn roster_summary(roster: RosterStore) -> Summary {
    roster.members().with(|members| summarize(members))
}
