//! Immutable views of the member collection.

use std::sync::Arc;

use crate::domain::{summarize, Member, Summary};

/// The member collection at one point in time.
///
/// Cloning is cheap; the member list is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    version: u64,
    members: Arc<[Member]>,
}

impl Snapshot {
    pub(crate) fn new(version: u64, members: Vec<Member>) -> Self {
        Self {
            version,
            members: members.into(),
        }
    }

    /// Position of this snapshot in the store's history; the seed is 0.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub(crate) fn position(&self, id: u32) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.members)
    }
}
