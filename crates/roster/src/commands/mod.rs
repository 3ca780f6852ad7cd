//! CLI command handlers.

pub mod auth;
pub mod cache;
pub mod users;

use anyhow::Result;

use roster_app::ListViewController;
use roster_cache::{CacheConfig, JsonFileStore, PageCache};
use roster_client::{DirectoryClient, User};
use roster_session::{FileArea, SessionStore};

use crate::paths;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory API base URL.
    pub api_url: String,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Controller over the file-backed stores the CLI uses.
pub type AppController = ListViewController<JsonFileStore, FileArea, FileArea>;

/// Open the session store over the standard token locations, running the
/// legacy migration.
pub fn open_session() -> Result<SessionStore<FileArea, FileArea>> {
    let store = SessionStore::open(
        FileArea::new(paths::primary_token_path()),
        FileArea::new(paths::legacy_token_path()),
    )?;
    Ok(store)
}

/// The file-backed page cache at its standard location.
pub fn open_cache() -> PageCache<JsonFileStore, User> {
    PageCache::with_store(
        CacheConfig::default(),
        JsonFileStore::new(paths::cache_blob_path()),
    )
}

/// Build a controller wired to the configured API, attaching the stored
/// token when one is present.
pub fn build_controller(ctx: &Context) -> Result<AppController> {
    tracing::debug!(api_url = %ctx.api_url, verbose = ctx.verbose, "building controller");
    let session = open_session()?;

    let mut builder = DirectoryClient::builder().base_url(&ctx.api_url);
    if let Some(token) = session.token() {
        builder = builder.bearer_token(token);
    }
    let client = builder.build()?;

    Ok(ListViewController::new(client, open_cache(), session))
}
