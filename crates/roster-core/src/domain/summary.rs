//! Roster summary counts.

use serde::{Deserialize, Serialize};
use super::member::Member;

/// Headline counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
}

/// Count members, recomputed from scratch on every call
pub fn summarize(members: &[Member]) -> Summary {
    Summary {
        total: members.len(),
        active: members.iter().filter(|m| m.active).count(),
    }
}
