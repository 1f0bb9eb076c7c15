//! staylist - look up hotel listing pages and keep a saved shortlist

use clap::Parser;

use staylist::cli::{Cli, Commands, ShortlistCommands};
use staylist::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup { url, save, json, no_ai } => {
            commands::cmd_lookup(&url, save, json, no_ai)
        }
        Commands::Save { url } => commands::cmd_lookup(&url, true, false, false),
        Commands::Unsave { name } => commands::cmd_shortlist_remove(&name),

        Commands::Shortlist(ShortlistCommands::List { json }) => {
            commands::cmd_shortlist_list(json)
        }
        Commands::Shortlist(ShortlistCommands::Remove { name }) => {
            commands::cmd_shortlist_remove(&name)
        }
        Commands::Shortlist(ShortlistCommands::Clear { yes }) => {
            commands::cmd_shortlist_clear(yes)
        }

        Commands::Inquiry { name, location, whatsapp, no_ai } => {
            commands::cmd_inquiry(&name, location, whatsapp, no_ai)
        }

        Commands::Doctor => commands::cmd_doctor(),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
