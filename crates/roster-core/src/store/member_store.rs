//! Member Store
//!
//! Sole owner of the member collection. Every successful mutation replaces
//! the current snapshot and pushes it to all subscribers; invalid input and
//! unknown ids are silent no-ops so callers never have to handle errors.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace, warn};

use super::snapshot::Snapshot;
use super::subscription::Subscription;
use crate::domain::{sample_members, DomainError, DomainResult, Member, Summary};

type Listener = Arc<dyn Fn(&Snapshot) + Send + Sync>;

struct Registration {
    id: u64,
    listener: Listener,
    /// Newest snapshot version this listener has been handed
    last_seen: u64,
}

/// State behind the store's lock. Never held while a listener runs.
pub(crate) struct Shared {
    current: Snapshot,
    /// `None` once the id space is exhausted
    next_id: Option<u32>,
    listeners: Vec<Registration>,
    next_subscription: u64,
    /// Snapshots produced but not yet delivered, oldest first
    pending: VecDeque<Snapshot>,
    delivering: bool,
}

impl Shared {
    fn allocate_id(&mut self) -> Option<u32> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    /// Replace the current snapshot and queue it for delivery
    fn commit(&mut self, members: Vec<Member>) -> u64 {
        let version = self.current.version() + 1;
        self.current = Snapshot::new(version, members);
        self.pending.push_back(self.current.clone());
        version
    }

    /// Hand out the listener for `id` if it still needs `version`
    fn claim(&mut self, id: u64, version: u64) -> Option<Listener> {
        let registration = self.listeners.iter_mut().find(|r| r.id == id)?;
        if registration.last_seen >= version {
            return None;
        }
        registration.last_seen = version;
        Some(registration.listener.clone())
    }

    pub(crate) fn unregister(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        self.listeners.len() != before
    }

    pub(crate) fn is_registered(&self, id: u64) -> bool {
        self.listeners.iter().any(|r| r.id == id)
    }
}

/// Shared handle to the member store.
///
/// Clones refer to the same store. The store is meant to be driven from a
/// single event loop; the lock only exists so the handle can live in
/// `Send + Sync` contexts.
#[derive(Clone)]
pub struct MemberStore {
    shared: Arc<Mutex<Shared>>,
}

impl MemberStore {
    /// Empty store; the first member gets id 1
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Some(1))
    }

    /// Store seeded with `members`, which keep their ids and order.
    ///
    /// Names are trimmed. Fails on blank names or duplicate ids. New ids
    /// continue above the highest seeded id.
    pub fn with_members(members: Vec<Member>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        let mut seeded = Vec::with_capacity(members.len());
        for member in members {
            let name = member.name.trim();
            if name.is_empty() {
                return Err(DomainError::InvalidInput(format!(
                    "member {} has an empty name",
                    member.id
                )));
            }
            if !seen.insert(member.id) {
                return Err(DomainError::Conflict(format!(
                    "duplicate member id {}",
                    member.id
                )));
            }
            seeded.push(member.renamed(name));
        }

        let next_id = match seeded.iter().map(|m| m.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Ok(Self::from_parts(seeded, next_id))
    }

    /// Store holding the three sample members Ava, Ben and Chris
    pub fn with_sample_data() -> Self {
        Self::from_parts(sample_members(), Some(4))
    }

    fn from_parts(members: Vec<Member>, next_id: Option<u32>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                current: Snapshot::new(0, members),
                next_id,
                listeners: Vec::new(),
                next_subscription: 1,
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================
    // Reads
    // ========================

    /// The latest snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.lock().current.clone()
    }

    pub fn find(&self, id: u32) -> Option<Member> {
        self.lock().current.find(id).cloned()
    }

    pub fn summary(&self) -> Summary {
        self.lock().current.summary()
    }

    /// Register `listener`. It is called right away with the current
    /// snapshot, then once per emitted snapshot, oldest first, until the
    /// returned subscription is cancelled.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut shared = self.lock();
            let id = shared.next_subscription;
            shared.next_subscription += 1;
            let current = shared.current.clone();
            shared.listeners.push(Registration {
                id,
                listener: listener.clone(),
                last_seen: current.version(),
            });
            (id, current)
        };
        trace!("[store] subscription {} at version {}", id, current.version());

        listener(&current);
        Subscription::new(Arc::downgrade(&self.shared), id)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a member named `name` (trimmed). Blank names are ignored.
    /// Returns the new member's id.
    pub fn add(&self, name: &str) -> Option<u32> {
        let name = name.trim();
        if name.is_empty() {
            trace!("[store] add ignored: blank name");
            return None;
        }

        let (id, version) = {
            let mut shared = self.lock();
            let Some(id) = shared.allocate_id() else {
                warn!("[store] add ignored: member ids exhausted");
                return None;
            };
            let mut members = shared.current.members().to_vec();
            members.push(Member::new(id, name));
            (id, shared.commit(members))
        };
        debug!("[store] added member {} {:?} (v{})", id, name, version);

        self.deliver();
        Some(id)
    }

    /// Rename member `id` to `name` (trimmed). Blank names and unknown ids
    /// are ignored.
    pub fn rename(&self, id: u32, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            trace!("[store] rename of {} ignored: blank name", id);
            return false;
        }

        self.update(id, "rename", |member| member.renamed(name))
    }

    /// Flip member `id`'s active flag. Unknown ids are ignored.
    pub fn toggle_active(&self, id: u32) -> bool {
        self.update(id, "toggle", Member::toggled)
    }

    /// Remove member `id`, keeping the order of the rest. Unknown ids are
    /// ignored and produce no snapshot.
    pub fn remove(&self, id: u32) -> bool {
        let version = {
            let mut shared = self.lock();
            if shared.current.position(id).is_none() {
                trace!("[store] remove ignored: no member {}", id);
                return false;
            }
            let members = shared
                .current
                .members()
                .iter()
                .filter(|m| m.id != id)
                .cloned()
                .collect();
            shared.commit(members)
        };
        debug!("[store] removed member {} (v{})", id, version);

        self.deliver();
        true
    }

    /// Replace member `id` with `change(member)` in a new snapshot
    fn update(&self, id: u32, action: &str, change: impl FnOnce(&Member) -> Member) -> bool {
        let version = {
            let mut shared = self.lock();
            let Some(pos) = shared.current.position(id) else {
                trace!("[store] {} ignored: no member {}", action, id);
                return false;
            };
            let mut members = shared.current.members().to_vec();
            members[pos] = change(&members[pos]);
            shared.commit(members)
        };
        debug!("[store] {} member {} (v{})", action, id, version);

        self.deliver();
        true
    }

    // ========================
    // Delivery
    // ========================

    /// Drain queued snapshots to every listener.
    ///
    /// Re-entrant calls (a listener mutating the store) only queue; the
    /// outermost call delivers everything in order. A snapshot leaves the
    /// queue only after every listener has had it, so if a listener panics
    /// the next delivery resumes with the listeners it did not reach.
    fn deliver(&self) {
        {
            let mut shared = self.lock();
            if shared.delivering {
                return;
            }
            shared.delivering = true;
        }
        let _guard = DeliveryGuard { store: self };

        loop {
            let (snapshot, ids) = {
                let shared = self.lock();
                let Some(snapshot) = shared.pending.front().cloned() else {
                    return;
                };
                let ids: Vec<u64> = shared.listeners.iter().map(|r| r.id).collect();
                (snapshot, ids)
            };

            for id in ids {
                let listener = self.lock().claim(id, snapshot.version());
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }

            self.lock().pending.pop_front();
        }
    }
}

/// Clears the delivering flag when delivery ends, including by unwinding
struct DeliveryGuard<'a> {
    store: &'a MemberStore,
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.store.lock().delivering = false;
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemberStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.lock();
        f.debug_struct("MemberStore")
            .field("current", &shared.current)
            .field("next_id", &shared.next_id)
            .field("listeners", &shared.listeners.len())
            .finish()
    }
}
