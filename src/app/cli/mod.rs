//! CLI Adapter.

mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api;
use crate::app::config::SessionInputs;
use crate::domain::{AppError, Role};

#[derive(Parser)]
#[command(name = "tunshell-install")]
#[command(version)]
#[command(about = "Render one-line tunshell install commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List install methods offered to a role
    #[clap(visible_alias = "ls")]
    List {
        /// Role: initiator (local) or remote (target)
        #[arg(short, long, value_parser = parse_role)]
        role: Role,
        /// Only show methods safe to display to untrusted viewers
        #[arg(long)]
        public_only: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the bootstrap arguments derived from a session
    Args {
        #[arg(short, long, value_parser = parse_role)]
        role: Role,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Render the install command for a role and method
    #[clap(visible_alias = "r")]
    Render {
        #[arg(short, long, value_parser = parse_role)]
        role: Role,
        /// Install method name, e.g. "Unix (curl)" (prompts when omitted)
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        session: SessionArgs,
        /// Arguments passed verbatim instead of the session-derived ones
        #[arg(last = true)]
        args_override: Vec<String>,
    },
}

/// Session key sources shared by commands that need keys.
#[derive(Args)]
struct SessionArgs {
    /// TOML file with initiator_key, remote_key and encryption_secret
    #[arg(short, long)]
    session: Option<PathBuf>,
    /// Initiator key (overrides the session file)
    #[arg(long)]
    initiator_key: Option<String>,
    /// Remote key (overrides the session file)
    #[arg(long)]
    remote_key: Option<String>,
    /// Encryption secret (overrides the session file)
    #[arg(long)]
    encryption_secret: Option<String>,
}

impl From<SessionArgs> for SessionInputs {
    fn from(args: SessionArgs) -> Self {
        SessionInputs {
            file: args.session,
            initiator_key: args.initiator_key,
            remote_key: args.remote_key,
            encryption_secret: args.encryption_secret,
        }
    }
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse().map_err(|err: AppError| err.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::List { role, public_only, json } => run_list(role, public_only, json),
        Commands::Args { role, session } => run_args(role, session.into()),
        Commands::Render { role, name, session, args_override } => {
            let args_override = (!args_override.is_empty()).then_some(args_override);
            render::run_render(role, name, session.into(), args_override)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_list(role: Role, public_only: bool, json: bool) -> Result<(), AppError> {
    let summaries = api::list_summaries(role, public_only);

    if json {
        let rendered = serde_json::to_string_pretty(&summaries)
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Install methods for {}:", role);
    for summary in summaries {
        let visibility = if summary.public_safe { "" } else { " (private)" };
        println!("  {} [{}]{}", summary.name, summary.environment, visibility);
    }
    Ok(())
}

fn run_args(role: Role, inputs: SessionInputs) -> Result<(), AppError> {
    for arg in api::args(role, inputs)? {
        println!("{}", arg);
    }
    Ok(())
}
