//! Deep links opened from the rendered card: mail composer, messaging app,
//! phone, maps, reviews and travel search. All user-visible text is
//! percent-encoded.

/// Placeholder image shown for shortlist entries without a photo
pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/50?text=Hotel";

/// `mailto:` link with subject and body
pub fn mailto_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// WhatsApp deep link. `None` when the phone number carries no digits.
pub fn whatsapp_link(phone: &str, body: &str) -> Option<String> {
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(body)
    ))
}

/// `tel:` link for a phone number
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Place-specific maps link
pub fn maps_place_link(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{}", place_id)
}

/// Maps search by name and location
pub fn maps_search_link(name: &str, location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&query_text(name, location))
    )
}

/// Travel search ("book direct" comparison) link
pub fn travel_search_link(name: &str, location: &str) -> String {
    format!(
        "https://www.google.com/travel/search?q={}",
        urlencoding::encode(&query_text(name, location))
    )
}

/// Place reviews link
pub fn reviews_link(place_id: &str) -> String {
    format!("https://search.google.com/local/reviews?placeid={}", place_id)
}

/// Reviews link when a place id is known, plain search otherwise
pub fn reviews_or_search_link(place_id: &str, name: &str, location: &str) -> String {
    if place_id.is_empty() {
        format!(
            "https://www.google.com/search?q={}",
            urlencoding::encode(&query_text(name, location))
        )
    } else {
        reviews_link(place_id)
    }
}

/// Phone number reduced to its digits (wa.me format)
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn query_text(name: &str, location: &str) -> String {
    format!("{} {}", name, location).trim().to_string()
}
