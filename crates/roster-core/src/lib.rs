//! Roster Core
//!
//! Layered like a small backend:
//! - domain: the Member entity, errors and derived projections
//! - store: the single in-memory owner of the member collection

pub mod domain;
pub mod store;

pub use domain::{sample_members, summarize, DomainError, DomainResult, Member, Summary};
pub use store::{MemberStore, Snapshot, Subscription};
