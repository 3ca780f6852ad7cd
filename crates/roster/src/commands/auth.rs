//! Auth commands: login, register, logout, status.

use anyhow::Result;
use clap::Args;
use console::style;

use roster_app::{DEMO, Error};

use super::{Context, build_controller, open_cache};
use crate::paths;

/// Arguments for the login command.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

/// Arguments for the register command.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;

    match controller.login(&args.email, &args.password).await {
        Ok(()) => {
            println!("{} Logged in as {}", style("✓").green(), args.email);
            Ok(())
        }
        Err(Error::InvalidCredentials) => {
            eprintln!(
                "{} Invalid credentials. Use the provided test credentials: {} / {}",
                style("✗").red(),
                DEMO.email,
                DEMO.login_password
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the register command.
pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;

    match controller.register(&args.email, &args.password).await {
        Ok(()) => {
            println!("{} Registered as {}", style("✓").green(), args.email);
            Ok(())
        }
        Err(Error::InvalidCredentials) => {
            eprintln!(
                "{} Invalid credentials. Use the provided test credentials: {} / {}",
                style("✗").red(),
                DEMO.email,
                DEMO.register_password
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;
    controller.logout()?;
    println!("{} Logged out", style("✓").green());
    Ok(())
}

/// Run the status command.
pub async fn status(ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;
    let cache = open_cache();

    if ctx.json_output {
        let status = serde_json::json!({
            "authenticated": controller.session().is_authenticated(),
            "api_url": ctx.api_url,
            "cached_pages": cache.len()?,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if controller.session().is_authenticated() {
        println!("Session:      {}", style("authenticated").green());
    } else {
        println!(
            "Session:      {} (run 'roster login {} {}')",
            style("logged out").yellow(),
            DEMO.email,
            DEMO.login_password
        );
    }
    println!("API:          {}", ctx.api_url);
    println!("Cached pages: {}", cache.len()?);
    println!("Token file:   {}", paths::primary_token_path().display());
    println!("Cache file:   {}", paths::cache_blob_path().display());
    Ok(())
}
