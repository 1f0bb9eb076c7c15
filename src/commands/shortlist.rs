//! Shortlist commands: list, remove, clear

use colored::Colorize;

use staylist::assist::NoAssistant;
use staylist::error::Result;
use staylist::inquiry;
use staylist::present;
use staylist::shortlist::ShortlistStore;

/// Show the saved shortlist
pub fn cmd_shortlist_list(json: bool) -> Result<()> {
    let store = ShortlistStore::open()?;
    let entries = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    present::render_shortlist(&entries, |entry| {
        inquiry::draft_inquiry(&entry.name, &entry.location, &NoAssistant)
    });
    Ok(())
}

/// Remove a saved property by exact name
pub fn cmd_shortlist_remove(name: &str) -> Result<()> {
    let store = ShortlistStore::open()?;
    if store.remove(name)? {
        println!("{} {}", "Removed from shortlist:".green(), name);
    } else {
        println!("{} {}", "Not in shortlist:".dimmed(), name);
    }
    Ok(())
}

/// Delete every saved property
pub fn cmd_shortlist_clear(yes: bool) -> Result<()> {
    let store = ShortlistStore::open()?;
    let count = store.list().len();

    if count == 0 {
        println!("{}", "Shortlist is already empty.".dimmed());
        return Ok(());
    }

    if !yes {
        let confirmed = inquire::Confirm::new(&format!("Delete all {} saved properties?", count))
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.clear()?;
    println!("{}", "Shortlist cleared.".green());
    Ok(())
}
