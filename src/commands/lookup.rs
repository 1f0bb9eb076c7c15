//! The lookup command: detect → enrich → render → optionally save

use colored::Colorize;

use staylist::assist::{self, Assistant};
use staylist::config::Config;
use staylist::detect::{self, DetectedProperty, SelectorRules};
use staylist::error::Result;
use staylist::fetch;
use staylist::inquiry;
use staylist::places::{EnrichedPlace, PlacesClient};
use staylist::present;
use staylist::shortlist::{ShortlistEntry, ShortlistStore};
use staylist::summarize;

/// Look up a listing page and render the property card
pub fn cmd_lookup(url: &str, save: bool, json: bool, no_ai: bool) -> Result<()> {
    let url = fetch::normalize_url(url)?;
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    let assistant = assist::default_assistant(no_ai);

    if !json {
        println!("{}", "Detecting property...".dimmed());
    }

    // Errors past this point are the detect/enrich/render chain failing on a
    // specific page, not a setup problem; degrade to the terminal state.
    if let Err(e) = lookup_pipeline(&url, &config, api_key, assistant.as_ref(), save, json) {
        eprintln!("lookup error: {}", e);
        println!("{}", "Detection failed".red());
    }

    Ok(())
}

fn lookup_pipeline(
    url: &str,
    config: &Config,
    api_key: String,
    assistant: &dyn Assistant,
    save: bool,
    json: bool,
) -> Result<()> {
    let rules = SelectorRules::default();

    let mut last_html = String::new();
    let mut detected = detect::detect_with_retry(
        || {
            let page = fetch::fetch_page(url)?;
            last_html = page.html.clone();
            Ok(page.html)
        },
        &rules,
        &config.detect_retry,
        std::thread::sleep,
    )?;

    if detected.is_empty() {
        if let Some(guessed) = detect::detect_with_assistant(assistant, &last_html) {
            detected = guessed;
        }
    }

    if detected.is_empty() {
        if json {
            println!("{}", serde_json::json!({ "detected": null, "place": null }));
        } else {
            println!("{}", "No property detected".yellow());
        }
        return Ok(());
    }

    let client = PlacesClient::new(api_key, config);
    let place = match client.search(&detected.name, &detected.location) {
        Ok(place) => place,
        Err(e) => {
            // Enrichment failure is non-fatal: render what we detected
            eprintln!("Places API error: {}", e);
            None
        }
    };

    if json {
        let output = serde_json::json!({ "detected": detected, "place": place });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render(&detected, place.as_ref(), assistant);
    }

    if save {
        save_entry(&detected, place.as_ref())?;
    }

    Ok(())
}

fn render(detected: &DetectedProperty, place: Option<&EnrichedPlace>, assistant: &dyn Assistant) {
    let inquiry_body = inquiry::draft_inquiry(&detected.name, &detected.location, assistant);

    match place {
        Some(place) => {
            let summary = if place.summary.is_empty() {
                None
            } else {
                Some(summarize::summarize(&place.summary, assistant))
            };
            present::render_card(detected, place, summary.as_deref(), &inquiry_body);
        }
        None => present::render_no_data(detected, &inquiry_body),
    }
}

fn save_entry(detected: &DetectedProperty, place: Option<&EnrichedPlace>) -> Result<()> {
    let entry = ShortlistEntry {
        name: detected.name.clone(),
        location: detected.location.clone(),
        website: place.map(|p| p.website.clone()).unwrap_or_default(),
        phone: place.map(|p| p.phone.clone()).unwrap_or_default(),
        photo_uri: place.map(|p| p.photo_uri.clone()).unwrap_or_default(),
        place_id: place.map(|p| p.place_id.clone()).unwrap_or_default(),
    };

    let store = ShortlistStore::open()?;
    if store.add(entry)? {
        println!("{} {}", "Saved to shortlist:".green(), detected.name);
    } else {
        println!("{} {}", "Already in shortlist:".dimmed(), detected.name);
    }
    Ok(())
}
