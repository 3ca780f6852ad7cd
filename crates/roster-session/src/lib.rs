//! Session token store with legacy-area migration.
//!
//! Holds the opaque authentication token behind two storage areas: a
//! primary session-scoped area and a legacy durable area that older
//! deployments wrote to. Initialization performs a one-time migration from
//! the legacy area; logout clears both unconditionally.
//!
//! The store never judges token validity — a missing token means logged
//! out, and an invalid one is only discovered when the remote rejects it.

mod area;
mod error;
mod store;

pub use area::{FileArea, MemoryArea, TokenArea};
pub use error::{Error, Result};
pub use store::SessionStore;
