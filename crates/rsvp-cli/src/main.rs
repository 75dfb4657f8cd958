use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rsvp_core::Locale;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "rsvp")]
#[command(about = "RSVP Chat - collect wedding guest names through a conversation", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/rsvp/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an RSVP conversation in the terminal
    Chat {
        /// Conversation language (en, tl, bis); asked interactively when omitted
        #[arg(long)]
        locale: Option<Locale>,

        /// Enter through the RSVP button (without it the bot only redirects)
        #[arg(long)]
        rsvp: bool,
    },
    /// Inspect the guest registry
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },
}

#[derive(Subcommand)]
enum RegistryAction {
    /// Print every registered guest name
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    match cli.command {
        Commands::Chat { locale, rsvp } => commands::chat::run(cli.config, locale, rsvp).await?,
        Commands::Registry { action } => match action {
            RegistryAction::List => commands::registry::list(cli.config).await?,
        },
    }

    Ok(())
}
