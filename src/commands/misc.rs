//! Miscellaneous commands: doctor, completions

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use staylist::assist::{Assistant, ClaudeAssistant};
use staylist::cli::{Cli, CompletionShell};
use staylist::config::Config;
use staylist::error::Result;
use staylist::shortlist::ShortlistStore;

/// Check the environment: API key, assistant CLI, shortlist file
pub fn cmd_doctor() -> Result<()> {
    println!("\n{}\n", "staylist doctor".bold());

    let config = Config::load()?;
    match config.resolve_api_key() {
        Ok(_) => println!("  {} Places API key configured", "✓".green()),
        Err(_) => println!(
            "  {} No Places API key (set STAYLIST_API_KEY or api_key in config.toml)",
            "✗".red()
        ),
    }

    if ClaudeAssistant.is_available() {
        println!("  {} claude CLI available (AI summaries and drafts)", "✓".green());
    } else {
        println!(
            "  {} claude CLI not found (deterministic fallbacks will be used)",
            "○".yellow()
        );
    }

    match Config::shortlist_path() {
        Ok(path) => {
            let count = ShortlistStore::open()?.list().len();
            println!("  {} Shortlist: {} entries at {}", "✓".green(), count, path.display());
        }
        Err(e) => println!("  {} Shortlist path unavailable: {}", "✗".red(), e),
    }

    match Config::config_path() {
        Ok(path) if path.exists() => {
            println!("  {} Config: {}", "✓".green(), path.display());
        }
        Ok(path) => {
            println!("  {} No config file (defaults in use): {}", "○".yellow(), path.display());
        }
        Err(e) => println!("  {} Config path unavailable: {}", "✗".red(), e),
    }

    println!();
    Ok(())
}

/// Generate shell completions to stdout
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "staylist", &mut io::stdout());
    Ok(())
}
