//! Users commands: list, update, delete, search.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use roster_app::{Error, PageView, UpdateFields};
use roster_client::User;

use super::{Context, build_controller};

/// Arguments for the users command.
#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List one page of users
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Update a user's fields
    Update {
        /// User id
        id: i64,

        /// Page the user is listed on
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// New first name
        #[arg(long)]
        first_name: Option<String>,

        /// New last name
        #[arg(long)]
        last_name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User id
        id: i64,

        /// Page the user is listed on
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Search the whole directory
    Search {
        /// Search terms (all must match the name or email)
        #[arg(required = true)]
        query: Vec<String>,
    },
}

/// Run the users command.
pub async fn run(args: UsersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        UsersCommand::List { page } => cmd_list(page, ctx).await,
        UsersCommand::Update {
            id,
            page,
            first_name,
            last_name,
            email,
        } => {
            let fields = UpdateFields {
                first_name,
                last_name,
                email,
            };
            cmd_update(id, page, fields, ctx).await
        }
        UsersCommand::Delete { id, page, yes } => cmd_delete(id, page, yes, ctx).await,
        UsersCommand::Search { query } => cmd_search(&query.join(" "), ctx).await,
    }
}

async fn cmd_list(page: u32, ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;

    let view = match controller.load_page(page).await {
        Ok(view) => view,
        Err(e) => return fail(e),
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&view.records)?);
        return Ok(());
    }

    print_page(&view);
    Ok(())
}

async fn cmd_update(id: i64, page: u32, fields: UpdateFields, ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;

    if let Err(e) = controller.load_page(page).await {
        return fail(e);
    }

    match controller.update_user(id, fields).await {
        Ok(()) => {
            println!("{} User {} updated", style("✓").green(), id);
            Ok(())
        }
        Err(Error::Validation(v)) => {
            eprintln!("{} {}", style("✗").red(), v);
            std::process::exit(1);
        }
        Err(e) => fail(e),
    }
}

async fn cmd_delete(id: i64, page: u32, yes: bool, ctx: &Context) -> Result<()> {
    if !yes && !confirm(&format!("Delete user {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }

    let controller = build_controller(ctx)?;

    if let Err(e) = controller.load_page(page).await {
        return fail(e);
    }

    match controller.delete_user(id).await {
        Ok(()) => {
            println!("{} User {} deleted", style("✓").green(), id);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

async fn cmd_search(query: &str, ctx: &Context) -> Result<()> {
    let controller = build_controller(ctx)?;

    let hits = match controller.search(query).await {
        Ok(hits) => hits,
        Err(e) => return fail(e),
    };

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No users matching \"{}\"", query);
        return Ok(());
    }

    for user in &hits {
        print_user(user);
    }
    Ok(())
}

fn print_page(view: &PageView) {
    for user in &view.records {
        print_user(user);
    }
    match view.total_pages {
        Some(total) => println!("\npage {} of {}", view.page, total),
        None => println!("\npage {}", view.page),
    }
}

fn print_user(user: &User) {
    println!(
        "{:>4}  {}  {}",
        style(user.id).cyan(),
        style(user.full_name()).bold(),
        style(&user.email).dim()
    );
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

/// Convert an application error into a user-facing exit.
fn fail(e: Error) -> Result<()> {
    match &e {
        Error::NotAuthenticated => {
            eprintln!("{} Not logged in. Run 'roster login' first.", style("✗").red());
            std::process::exit(1);
        }
        Error::Client(c) if c.is_unauthorized() => {
            eprintln!(
                "{} Session rejected by the server. Run 'roster login' again.",
                style("✗").red()
            );
            std::process::exit(1);
        }
        _ => Err(e.into()),
    }
}
