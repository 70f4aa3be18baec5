//! Role administration from the terminal
//!
//! Implements the console's UI collaborator traits against stdin/stdout
//! so the whole create/update/delete workflow can be driven without a
//! browser.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing::debug;

use ac_client::{Config, RoleClient, RoleDraft, RoleItem, RoleList, RoleQuery};
use ac_console::{ConfirmGate, EnglishCatalog, Notice, Notifier, RoleConsole, TableHandle};

#[derive(Parser)]
#[command(name = "ac-admin", about = "Role administration console")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "AC_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Answer yes to confirmation prompts
    #[arg(long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List roles
    List {
        /// Page number, 1-based
        #[arg(long)]
        page: Option<u64>,

        /// Page size
        #[arg(long)]
        size: Option<u64>,

        /// Filter by role name
        #[arg(long)]
        name: Option<String>,
    },

    /// Show one role
    Show { id: String },

    /// Create a role
    Create { role_name: String },

    /// Rename an existing role
    Update { id: String, role_name: String },

    /// Delete roles by id (asks for confirmation)
    Delete { ids: Vec<String> },
}

struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Loading(text) => eprintln!("... {text}"),
            Notice::Success(text) => println!("{text}"),
            Notice::Failure(text) => eprintln!("error: {text}"),
        }
    }

    fn dismiss(&self) {}
}

struct TermGate {
    assume_yes: bool,
}

#[async_trait]
impl ConfirmGate for TermGate {
    async fn confirm(&self, title: &str, body: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{title} {body} [y/N] ");
        io::stderr().flush().ok();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

/// The terminal has no live table; reload signals are only logged and the
/// next `list` invocation refetches.
struct TermTable;

impl TableHandle for TermTable {
    fn reload(&self) {
        debug!("table reload requested");
    }

    fn reload_and_reset(&self) {
        debug!("table reload-and-reset requested");
    }
}

fn print_list(list: &RoleList) {
    println!("{:<28} ROLE NAME", "ID");
    for role in &list.data {
        println!("{:<28} {}", role.id, role.role_name);
    }
    println!("total: {}", list.total);
}

async fn find_role(console: &RoleConsole, id: &str) -> Result<RoleItem> {
    let list = console.load(&RoleQuery::default()).await?;
    list.data
        .into_iter()
        .find(|role| role.id == id)
        .ok_or_else(|| anyhow!("no role with id {id}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = Arc::new(RoleClient::new(Config::new(&cli.base_url))?);
    let mut console = RoleConsole::new(
        client,
        Arc::new(TermNotifier),
        Arc::new(TermGate {
            assume_yes: cli.yes,
        }),
        Arc::new(TermTable),
        Arc::new(EnglishCatalog),
    );

    match cli.command {
        Command::List { page, size, name } => {
            let mut query = RoleQuery::default();
            if let Some(page) = page {
                query = query.with_page(page, size.unwrap_or(20));
            }
            if let Some(name) = name {
                query = query.with_role_name(name);
            }

            let list = console.load(&query).await?;
            print_list(&list);
        }

        Command::Show { id } => {
            let role = find_role(&console, &id).await?;
            console.open_detail(role);

            if let Some(row) = console.state().current_row() {
                println!("id: {}", row.id);
                println!("roleName: {}", row.role_name);
                for (key, value) in &row.extra {
                    println!("{key}: {value}");
                }
            }
            console.close();
        }

        Command::Create { role_name } => {
            console.open_create();
            if !console.submit_create(RoleDraft::new(role_name)).await {
                std::process::exit(1);
            }
        }

        Command::Update { id, role_name } => {
            let current = find_role(&console, &id).await?;
            console.open_edit(current.clone());

            let mut edited = current;
            edited.role_name = role_name;
            if !console.submit_update(edited).await {
                std::process::exit(1);
            }
        }

        Command::Delete { ids } => {
            let list = console.load(&RoleQuery::default()).await?;
            let selection: Vec<RoleItem> = list
                .data
                .into_iter()
                .filter(|role| ids.contains(&role.id))
                .collect();

            if selection.len() != ids.len() {
                return Err(anyhow!("one or more role ids were not found"));
            }

            console.set_selection(selection);
            if !console.delete_selected().await {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
