//! Places enrichment client: one text-search call, first candidate mapped
//! into a normalized property record.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// Production endpoint for Places text search
const PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Fields requested from the API; anything else in the response is ignored
const FIELD_MASK: &str = "places.id,places.displayName,places.shortFormattedAddress,\
places.rating,places.userRatingCount,places.internationalPhoneNumber,places.websiteUri,\
places.googleMapsUri,places.photos,places.editorialSummary";

/// Thumbnail dimensions for the resolved photo URL
const PHOTO_MAX_PX: u32 = 145;

/// Request timeout for the enrichment call
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Rating sentinel when the place has no rating
const NO_RATING: &str = "N/A";

/// Normalized property record mapped from the first search candidate.
/// Every field is defaultable; absence never prevents rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrichedPlace {
    pub place_id: String,
    pub name: String,
    pub short_address: String,
    /// Formatted rating, or "N/A" when the place has none
    pub rating: String,
    pub review_count: u64,
    pub phone: String,
    pub website: String,
    pub google_maps_uri: String,
    pub photo_uri: String,
    pub summary: String,
}

impl EnrichedPlace {
    pub fn has_rating(&self) -> bool {
        self.rating != NO_RATING
    }

    /// Rating line as rendered in the card, e.g. "4.5 (120 reviews)"
    pub fn rating_label(&self) -> String {
        format!("{} ({} reviews)", self.rating, self.review_count)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    text_query: String,
    included_type: &'a str,
    region_code: &'a str,
    max_result_count: u32,
    language_code: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Place {
    id: String,
    display_name: Option<LocalizedText>,
    short_formatted_address: String,
    rating: Option<f64>,
    user_rating_count: Option<u64>,
    international_phone_number: String,
    website_uri: String,
    google_maps_uri: String,
    photos: Vec<Photo>,
    editorial_summary: Option<LocalizedText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocalizedText {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Photo {
    name: String,
}

/// Client for the Places text-search API
pub struct PlacesClient {
    agent: ureq::Agent,
    api_key: String,
    base_url: String,
    region_code: String,
    language_code: String,
}

impl PlacesClient {
    pub fn new(api_key: String, config: &Config) -> Self {
        Self::with_base_url(api_key, config, PLACES_BASE_URL)
    }

    /// Point the client at a different endpoint (stub servers in tests)
    pub fn with_base_url(api_key: String, config: &Config, base_url: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .build()
            .into();

        Self {
            agent,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            region_code: config.region_code.clone(),
            language_code: config.language_code.clone(),
        }
    }

    /// Search for a lodging place by name and location hint.
    ///
    /// Transport and HTTP errors propagate; an empty result set is `Ok(None)`.
    /// One request, one candidate, no retry, no caching.
    pub fn search(&self, name: &str, location: &str) -> Result<Option<EnrichedPlace>> {
        let query = format!("{} {}", name, location).trim().to_string();

        let request = SearchRequest {
            text_query: query,
            included_type: "lodging",
            region_code: &self.region_code,
            max_result_count: 1,
            language_code: &self.language_code,
        };

        let endpoint = format!("{}/v1/places:searchText", self.base_url);
        let response = self
            .agent
            .post(&endpoint)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .send_json(&request)?;

        let parsed: SearchResponse = response.into_body().read_json()?;
        Ok(self.map_response(parsed, name))
    }

    fn map_response(&self, response: SearchResponse, fallback_name: &str) -> Option<EnrichedPlace> {
        let place = response.places.into_iter().next()?;

        let photo_uri = place
            .photos
            .first()
            .filter(|p| !p.name.is_empty())
            .map(|p| {
                format!(
                    "{}/v1/{}/media?key={}&maxHeightPx={}&maxWidthPx={}",
                    self.base_url, p.name, self.api_key, PHOTO_MAX_PX, PHOTO_MAX_PX
                )
            })
            .unwrap_or_default();

        let name = place
            .display_name
            .map(|n| n.text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let summary = place
            .editorial_summary
            .map(|s| s.text.trim().to_string())
            .unwrap_or_default();

        Some(EnrichedPlace {
            place_id: place.id,
            name,
            short_address: place.short_formatted_address,
            rating: place.rating.map(format_rating).unwrap_or_else(|| NO_RATING.into()),
            review_count: place.user_rating_count.unwrap_or(0),
            phone: place.international_phone_number,
            website: place.website_uri,
            google_maps_uri: place.google_maps_uri,
            photo_uri,
            summary,
        })
    }
}

/// Format a rating the way the API's JSON prints it: "4" not "4.0", "4.5" as-is
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{}", rating as i64)
    } else {
        format!("{}", rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PlacesClient {
        PlacesClient::new("test-key".into(), &Config::default())
    }

    fn parse(json: &str) -> SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    const CANDIDATE: &str = r#"{
        "places": [{
            "id": "abc123",
            "displayName": {"text": "Sea View Resort", "languageCode": "en"},
            "shortFormattedAddress": "Calangute, Goa",
            "rating": 4.5,
            "userRatingCount": 120,
            "internationalPhoneNumber": "+91 832 123 4567",
            "websiteUri": "https://seaview.example.com",
            "googleMapsUri": "https://maps.google.com/?cid=1",
            "photos": [{"name": "places/abc123/photos/xyz"}],
            "editorialSummary": {"text": "  A beachfront resort.  "}
        }]
    }"#;

    #[test]
    fn test_map_first_candidate() {
        let place = client().map_response(parse(CANDIDATE), "input name").unwrap();
        assert_eq!(place.place_id, "abc123");
        assert_eq!(place.name, "Sea View Resort");
        assert_eq!(place.short_address, "Calangute, Goa");
        assert_eq!(place.rating, "4.5");
        assert_eq!(place.review_count, 120);
        assert_eq!(place.rating_label(), "4.5 (120 reviews)");
        assert_eq!(place.summary, "A beachfront resort.");
        assert_eq!(
            place.photo_uri,
            "https://places.googleapis.com/v1/places/abc123/photos/xyz/media?key=test-key&maxHeightPx=145&maxWidthPx=145"
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let place = client()
            .map_response(parse(r#"{"places":[{"id":"p1"}]}"#), "Fallback Inn")
            .unwrap();
        assert_eq!(place.name, "Fallback Inn");
        assert_eq!(place.rating, "N/A");
        assert!(!place.has_rating());
        assert_eq!(place.review_count, 0);
        assert_eq!(place.phone, "");
        assert_eq!(place.website, "");
        assert_eq!(place.photo_uri, "");
        assert_eq!(place.summary, "");
    }

    #[test]
    fn test_empty_result_set_is_none() {
        assert!(client().map_response(parse(r#"{"places":[]}"#), "x").is_none());
        assert!(client().map_response(parse("{}"), "x").is_none());
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let json = r#"{"places":[{"id":"p1","futureField":42}],"extra":true}"#;
        assert!(client().map_response(parse(json), "x").is_some());
    }

    #[test]
    fn test_whole_number_rating_formatting() {
        let json = r#"{"places":[{"id":"p1","rating":4.0,"userRatingCount":3}]}"#;
        let place = client().map_response(parse(json), "x").unwrap();
        assert_eq!(place.rating_label(), "4 (3 reviews)");
    }
}
