//! Subscription handles.

use std::sync::{Mutex, PoisonError, Weak};

use super::member_store::Shared;

/// Handle to a live listener registered with [`MemberStore::subscribe`].
///
/// Dropping the handle does NOT unsubscribe; call [`Subscription::cancel`].
///
/// [`MemberStore::subscribe`]: super::MemberStore::subscribe
#[derive(Debug, Clone)]
pub struct Subscription {
    shared: Weak<Mutex<Shared>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(shared: Weak<Mutex<Shared>>, id: u64) -> Self {
        Self { shared, id }
    }

    /// Stop delivering snapshots to this listener. Safe to call twice,
    /// and safe to call after the store itself is gone.
    pub fn cancel(&self) {
        if let Some(shared) = self.shared.upgrade() {
            let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if shared.unregister(self.id) {
                log::trace!("[store] subscription {} cancelled", self.id);
            }
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.shared.upgrade().is_some_and(|shared| {
            shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_registered(self.id)
        })
    }
}
