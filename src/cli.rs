use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "staylist")]
#[command(author, version, about = "Look up hotel listing pages and keep a saved shortlist", long_about = None)]
#[command(after_help = r#"Examples:
  staylist lookup https://booking.example.com/hotel/sea-view     Detect and enrich a listing
  staylist lookup booking.example.com/hotel/sea-view --save      Look up and save to the shortlist
  staylist shortlist list                                        Show saved properties
  staylist inquiry "Sea View Resort"                             Draft an availability inquiry

Quick Start:
  1. export STAYLIST_API_KEY=<your Places API key>
  2. staylist lookup <listing url>
  3. staylist shortlist list
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a listing page: detect the property, enrich it, render a card
    #[command(after_help = r#"Examples:
  staylist lookup https://booking.example.com/hotel/sea-view
  staylist lookup booking.example.com/hotel/sea-view    # https:// added automatically
  staylist lookup <url> --save                          # also save to the shortlist
  staylist lookup <url> --json                          # machine-readable output
  staylist lookup <url> --no-ai                         # deterministic fallbacks only
"#)]
    Lookup {
        /// Listing page URL (bare domains accepted)
        #[arg(value_name = "URL")]
        url: String,

        /// Save the detected property to the shortlist
        #[arg(long)]
        save: bool,

        /// Output the enriched record as JSON
        #[arg(long)]
        json: bool,

        /// Skip AI assistance (detection fallback, summaries, drafts)
        #[arg(long)]
        no_ai: bool,
    },

    /// Look up a listing page and save it to the shortlist
    Save {
        /// Listing page URL
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Remove a property from the shortlist by name
    Unsave {
        /// Exact property name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Manage the saved shortlist
    #[command(subcommand)]
    Shortlist(ShortlistCommands),

    /// Draft an availability inquiry for a property
    #[command(after_help = r#"Examples:
  staylist inquiry "Sea View Resort"                 Uses the saved entry if present
  staylist inquiry "Sea View Resort" --location Goa
  staylist inquiry "Sea View Resort" --whatsapp      Also print the WhatsApp link
  staylist inquiry "Sea View Resort" --no-ai         Deterministic template
"#)]
    Inquiry {
        /// Property name (matched against the shortlist when saved)
        #[arg(value_name = "NAME")]
        name: String,

        /// Location hint (defaults to the saved entry's location)
        #[arg(long)]
        location: Option<String>,

        /// Print a WhatsApp deep link (needs a phone number)
        #[arg(long)]
        whatsapp: bool,

        /// Skip AI drafting; use the fixed template
        #[arg(long)]
        no_ai: bool,
    },

    /// Check your environment (API key, assistant CLI, shortlist file)
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ShortlistCommands {
    /// Show all saved properties
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a saved property by exact name
    Remove {
        /// Exact property name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete every saved property
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
