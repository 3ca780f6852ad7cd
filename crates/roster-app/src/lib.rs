//! List-view controller for the user directory.
//!
//! Orchestrates the session store, page cache, and directory client into
//! the page-of-records workflow: cache-first loads with a hard 24-hour
//! expiry, field validation before any update leaves the process, edits
//! and deletes applied locally only after the remote acknowledges them,
//! and a concurrently built full-directory search index.
//!
//! All collaborators are injected at construction — there is no ambient
//! global state.

mod auth;
mod controller;
mod error;
mod search;
mod validation;

pub use auth::{DEMO, DemoCredentials};
pub use controller::{ListViewController, PageView, UpdateFields, ViewState};
pub use error::{Error, Result};
pub use search::filter_users;
pub use validation::{Field, ValidationError, validate_email, validate_name};
