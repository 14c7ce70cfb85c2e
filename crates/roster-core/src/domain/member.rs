//! Member Entity
//!
//! A club member. Members are only created by the store, which assigns ids.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A club member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier, never reused
    pub id: u32,
    /// Trimmed, non-empty display name
    pub name: String,
    /// Whether the member is currently active
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Member {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }

    pub fn inactive(id: u32, name: impl Into<String>) -> Self {
        Self {
            active: false,
            ..Self::new(id, name)
        }
    }

    /// Copy of this member with a different name
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Copy of this member with the active flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            active: !self.active,
            ..self.clone()
        }
    }
}

/// The starting roster: Ava, Ben and the inactive Chris
pub fn sample_members() -> Vec<Member> {
    vec![
        Member::new(1, "Ava"),
        Member::new(2, "Ben"),
        Member::inactive(3, "Chris"),
    ]
}
