//! Typed HTTP client for the Roster user-directory API.
//!
//! The remote service is a reqres.in-style mock: it authenticates a fixed
//! demo account, serves paginated user records, and echoes edits without
//! persisting them. This crate only speaks the wire contract; reconciling
//! non-durable edits with local state is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use roster_client::DirectoryClient;
//!
//! # async fn example() -> roster_client::Result<()> {
//! let client = DirectoryClient::builder()
//!     .base_url("https://reqres.in")
//!     .bearer_token("QpwL5tke4Pnpja7X4")
//!     .build()?;
//!
//! let page = client.users().list(1).await?;
//! println!("{} users, {} pages", page.data.len(), page.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, DirectoryClient};
pub use error::{Error, Result};
pub use types::*;
