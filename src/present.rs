//! Terminal rendering of the property card and the saved shortlist.

use colored::Colorize;

use crate::detect::DetectedProperty;
use crate::inquiry;
use crate::links;
use crate::places::EnrichedPlace;
use crate::shortlist::ShortlistEntry;

/// Render the full property card after successful enrichment
pub fn render_card(
    detected: &DetectedProperty,
    place: &EnrichedPlace,
    summary: Option<&str>,
    inquiry_body: &str,
) {
    println!();
    println!("  {}", place.name.bold());

    let address = if place.short_address.is_empty() {
        &detected.location
    } else {
        &place.short_address
    };
    if !address.is_empty() {
        println!("  {}", address.dimmed());
    }

    println!();
    println!("  {}", rating_block(place));

    if !place.photo_uri.is_empty() {
        println!("  {} {}", "Photo:".dimmed(), place.photo_uri);
    }
    if !place.phone.is_empty() {
        println!("  {} {}", "Phone:".dimmed(), place.phone);
    }
    if !place.website.is_empty() {
        println!("  {} {}", "Website:".dimmed(), place.website);
    }

    if let Some(summary) = summary.filter(|s| !s.is_empty()) {
        println!();
        println!("  {}", "Summary".bold());
        println!("  {}", summary);
    }

    println!();
    println!("  {}", "Actions".bold());
    render_link(
        "Send Inquiry",
        &links::mailto_link(&inquiry::inquiry_subject(&detected.name), inquiry_body),
    );
    if !place.place_id.is_empty() {
        render_link("Map", &links::maps_place_link(&place.place_id));
    } else {
        render_link("Map", &links::maps_search_link(&detected.name, &detected.location));
    }
    if !place.website.is_empty() {
        render_link("Website", &place.website);
    }
    if let Some(wa) = links::whatsapp_link(&place.phone, inquiry_body) {
        render_link("WhatsApp", &wa);
    }
    if !place.phone.is_empty() {
        render_link("Call", &links::tel_link(&place.phone));
    }
    render_link(
        "Compare/Book",
        &links::travel_search_link(&detected.name, &detected.location),
    );
    println!();
}

/// Rating line with a conditional reviews link; shown only when a rating exists
pub fn rating_block(place: &EnrichedPlace) -> String {
    if place.has_rating() {
        format!(
            "⭐ {}  {} {}",
            place.rating_label().green(),
            "Read Reviews:".dimmed(),
            links::reviews_link(&place.place_id)
        )
    } else {
        "⭐ No ratings found".to_string()
    }
}

/// Render the detected property when enrichment produced no data; the links
/// that need no place data stay usable.
pub fn render_no_data(detected: &DetectedProperty, inquiry_body: &str) {
    println!();
    println!("  {}", detected.name.bold());
    if !detected.location.is_empty() {
        println!("  {}", detected.location.dimmed());
    }
    println!();
    println!("  {}", "No Google data found.".yellow());
    println!();
    println!("  {}", "Actions".bold());
    render_link(
        "Send Inquiry",
        &links::mailto_link(&inquiry::inquiry_subject(&detected.name), inquiry_body),
    );
    render_link("Map", &links::maps_search_link(&detected.name, &detected.location));
    render_link(
        "Compare/Book",
        &links::travel_search_link(&detected.name, &detected.location),
    );
    println!();
}

/// Render the saved shortlist as numbered cards
pub fn render_shortlist(entries: &[ShortlistEntry], inquiry_body_for: impl Fn(&ShortlistEntry) -> String) {
    println!();
    println!("  {}", "Saved Shortlist".bold());
    println!("  {}", "─".repeat(40).dimmed());

    if entries.is_empty() {
        println!("  {}", "No hotels shortlisted yet.".dimmed());
        println!();
        return;
    }

    for (idx, entry) in entries.iter().enumerate() {
        let body = inquiry_body_for(entry);

        println!();
        println!("  {} {}", format!("{}.", idx + 1).bold(), entry.name.bold());
        if !entry.location.is_empty() {
            println!("     {}", entry.location.dimmed());
        }
        let photo = if entry.photo_uri.is_empty() {
            links::PLACEHOLDER_PHOTO
        } else {
            &entry.photo_uri
        };
        println!("     {} {}", "Photo:".dimmed(), photo);

        render_entry_link(
            "Read Reviews",
            &links::reviews_or_search_link(&entry.place_id, &entry.name, &entry.location),
        );
        render_entry_link(
            "Send Inquiry",
            &links::mailto_link(&inquiry::inquiry_subject(&entry.name), &body),
        );
        if !entry.website.is_empty() {
            render_entry_link("Website", &entry.website);
        }
        if !entry.phone.is_empty() {
            render_entry_link("Call", &links::tel_link(&entry.phone));
        }
        render_entry_link("Map", &links::maps_search_link(&entry.name, &entry.location));
        render_entry_link(
            "Compare/Book",
            &links::travel_search_link(&entry.name, &entry.location),
        );
        if let Some(wa) = links::whatsapp_link(&entry.phone, &body) {
            render_entry_link("WhatsApp", &wa);
        }
    }
    println!();
}

fn render_link(label: &str, url: &str) {
    println!("  {} {}", format!("{}:", label).cyan(), url);
}

fn render_entry_link(label: &str, url: &str) {
    println!("     {} {}", format!("{}:", label).cyan(), url);
}
