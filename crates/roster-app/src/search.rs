//! Full-directory search over a concurrently built index.

use futures::future::try_join_all;
use tracing::{debug, warn};

use roster_client::{DirectoryClient, User};

use crate::error::Result;

/// Fetch every page of the directory and flatten into one index.
///
/// Page 1 is fetched first to learn the page count, then all pages are
/// requested concurrently and awaited as a single batch. Results are keyed
/// by page, so no ordering among the in-flight requests is needed.
pub async fn build_index(client: &DirectoryClient) -> Result<Vec<User>> {
    let first = client.users().list(1).await.inspect_err(|e| {
        warn!(error = %e, "failed to fetch directory index");
    })?;
    let total_pages = first.total_pages;

    let fetches = (1..=total_pages).map(|page| {
        let client = client.clone();
        async move { client.users().list(page).await }
    });

    let responses = try_join_all(fetches).await.inspect_err(|e| {
        warn!(error = %e, "failed to fetch directory index");
    })?;

    let index: Vec<User> = responses.into_iter().flat_map(|r| r.data).collect();
    debug!(pages = total_pages, records = index.len(), "directory index built");
    Ok(index)
}

/// Filter users by a multi-term query.
///
/// The query is lowercased and split on whitespace; every term must appear
/// in either the full name or the email.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        return users.iter().collect();
    }

    users
        .iter()
        .filter(|user| {
            let full_name = user.full_name().to_lowercase();
            let email = user.email.to_lowercase();
            terms
                .iter()
                .all(|term| full_name.contains(term) || email.contains(term))
        })
        .collect()
}
