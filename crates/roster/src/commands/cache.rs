//! Cache commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{Context, open_cache};
use crate::paths;

/// Arguments for the cache command.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Drop all cached pages
    Clear,

    /// Show cache location and size
    Info,
}

/// Run the cache command.
pub async fn run(args: CacheArgs, ctx: &Context) -> Result<()> {
    let cache = open_cache();

    match args.command {
        CacheCommand::Clear => {
            cache.clear()?;
            println!("{} Cache cleared", style("✓").green());
            Ok(())
        }
        CacheCommand::Info => {
            if ctx.json_output {
                let info = serde_json::json!({
                    "path": paths::cache_blob_path(),
                    "cached_pages": cache.len()?,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
                return Ok(());
            }
            println!("Cache file:   {}", paths::cache_blob_path().display());
            println!("Cached pages: {}", cache.len()?);
            Ok(())
        }
    }
}
