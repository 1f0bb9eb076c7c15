//! The inquiry command: draft a message and print the composer links

use colored::Colorize;

use staylist::assist;
use staylist::error::Result;
use staylist::inquiry;
use staylist::links;
use staylist::shortlist::ShortlistStore;

/// Draft an availability inquiry for a property, shortlist-aware
pub fn cmd_inquiry(
    name: &str,
    location: Option<String>,
    whatsapp: bool,
    no_ai: bool,
) -> Result<()> {
    let store = ShortlistStore::open()?;
    let saved = store.list().into_iter().find(|e| e.name == name);

    let location = location
        .or_else(|| saved.as_ref().map(|e| e.location.clone()))
        .unwrap_or_default();
    let phone = saved.map(|e| e.phone).unwrap_or_default();

    let assistant = assist::default_assistant(no_ai);
    let body = inquiry::draft_inquiry(name, &location, assistant.as_ref());

    println!();
    println!("{}", body);
    println!();
    println!(
        "{} {}",
        "Mail:".cyan(),
        links::mailto_link(&inquiry::inquiry_subject(name), &body)
    );

    if whatsapp {
        match links::whatsapp_link(&phone, &body) {
            Some(link) => println!("{} {}", "WhatsApp:".cyan(), link),
            None => println!("{}", "No phone number saved for this property.".yellow()),
        }
    }

    Ok(())
}
