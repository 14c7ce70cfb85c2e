//! Domain Layer
//!
//! Entities and pure functions over them.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod member;
mod summary;

pub use error::{DomainError, DomainResult};
pub use member::{sample_members, Member};
pub use summary::{summarize, Summary};
