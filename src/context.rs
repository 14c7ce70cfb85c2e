//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use roster_core::MemberStore;

use crate::route::{Route, Router};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one member store for this page
    members: StoredValue<MemberStore>,
    /// Current route
    pub router: Router,
}

impl AppContext {
    pub fn new(members: MemberStore, router: Router) -> Self {
        Self {
            members: StoredValue::new(members),
            router,
        }
    }

    /// Add a member from raw input; blank input is ignored
    pub fn add_member(&self, name: &str) -> Option<u32> {
        self.members.with_value(|store| store.add(name))
    }

    pub fn rename_member(&self, id: u32, name: &str) -> bool {
        self.members.with_value(|store| store.rename(id, name))
    }

    pub fn toggle_member(&self, id: u32) -> bool {
        self.members.with_value(|store| store.toggle_active(id))
    }

    pub fn remove_member(&self, id: u32) -> bool {
        self.members.with_value(|store| store.remove(id))
    }

    pub fn navigate(&self, route: Route) {
        self.router.navigate(route);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
