//! Store Layer
//!
//! The single in-memory owner of the member collection and its
//! subscription plumbing.

mod member_store;
mod snapshot;
mod subscription;

#[cfg(test)]
mod tests;

pub use member_store::MemberStore;
pub use snapshot::Snapshot;
pub use subscription::Subscription;
