//! End-to-end pipeline pieces without the real network: detection over canned
//! HTML, enrichment against a local stub endpoint, rendered formatting.

use std::io::{Read, Write};
use std::net::TcpListener;

use staylist::config::Config;
use staylist::detect::{detect, SelectorRules};
use staylist::links;
use staylist::places::PlacesClient;
use staylist::present;

/// One-shot HTTP stub: accepts a single request and replies with `body`
fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain headers plus whatever request body arrives with them
            let mut buf = vec![0u8; 16384];
            let mut total = 0;
            while total < buf.len() {
                match stream.read(&mut buf[total..]) {
                    Ok(0) => break,
                    Ok(n) => {
                        total += n;
                        if buf[..total].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

const CANDIDATE_JSON: &str = r#"{
    "places": [{
        "id": "abc123",
        "displayName": {"text": "Sea View Resort"},
        "shortFormattedAddress": "Calangute, Goa",
        "rating": 4.5,
        "userRatingCount": 120,
        "internationalPhoneNumber": "+91 832 123 4567",
        "websiteUri": "https://seaview.example.com",
        "googleMapsUri": "https://maps.google.com/?cid=1",
        "photos": [{"name": "places/abc123/photos/xyz"}],
        "editorialSummary": {"text": "A beachfront resort in north Goa."}
    }]
}"#;

#[test]
fn enrichment_against_stub_yields_formatted_record() {
    let base = spawn_stub("HTTP/1.1 200 OK", CANDIDATE_JSON);
    let client = PlacesClient::with_base_url("test-key".into(), &Config::default(), &base);

    let place = client.search("Sea View Resort", "Goa").unwrap().unwrap();
    assert_eq!(place.place_id, "abc123");
    assert_eq!(place.rating_label(), "4.5 (120 reviews)");
    assert_eq!(
        links::reviews_link(&place.place_id),
        "https://search.google.com/local/reviews?placeid=abc123"
    );

    colored::control::set_override(false);
    let block = present::rating_block(&place);
    assert!(block.contains("4.5 (120 reviews)"));
    assert!(block.contains("placeid=abc123"));
}

#[test]
fn enrichment_with_empty_result_set_is_none() {
    let base = spawn_stub("HTTP/1.1 200 OK", r#"{"places":[]}"#);
    let client = PlacesClient::with_base_url("test-key".into(), &Config::default(), &base);
    assert!(client.search("Nowhere Inn", "").unwrap().is_none());
}

#[test]
fn enrichment_http_error_propagates() {
    let base = spawn_stub("HTTP/1.1 500 Internal Server Error", "{}");
    let client = PlacesClient::with_base_url("test-key".into(), &Config::default(), &base);
    assert!(client.search("Sea View Resort", "Goa").is_err());
}

#[test]
fn detection_over_booking_style_page() {
    let html = r#"
        <html>
          <head><title>Sea View Resort (Deals) - Booking Site</title></head>
          <body>
            <div class="hp__hotel-name">Sea View Resort Deals</div>
            <span class="hp_address_subtitle">Calangute Beach Road, Goa 403516</span>
          </body>
        </html>
    "#;

    let detected = detect(html, &SelectorRules::default());
    assert_eq!(detected.name, "Sea View Resort");
    assert_eq!(detected.location, "Calangute Beach Road, Goa 403516");
}

#[test]
fn detection_title_fallback_takes_first_segment() {
    let html = r#"
        <html>
          <head><title>Grand Hotel - Booking Site</title></head>
          <body><main><p>No recognizable markup here.</p></main></body>
        </html>
    "#;

    let detected = detect(html, &SelectorRules::default());
    assert_eq!(detected.name, "Grand Hotel");
    assert_eq!(detected.location, "");
}
