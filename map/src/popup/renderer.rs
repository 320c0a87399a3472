//! Popup renderer
//!
//! Renders store popups and the status label to HTML fragments.
//! All store text is treated as untrusted and escaped here.

use chrono::{DateTime, TimeZone, Utc};
use urlencoding::encode;

use crate::app::PopupPolicy;
use crate::domain::entities::{FeedMetadata, StoreRecord};

/// Escape text for use in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An outbound map-provider link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderLink {
    pub label: &'static str,
    pub url: String,
}

/// External links for a store, per the popup policy
pub fn provider_links(record: &StoreRecord, policy: &PopupPolicy) -> Vec<ProviderLink> {
    let query = encode(&record.name);
    let mut links = vec![ProviderLink {
        label: "Google Maps",
        url: format!(
            "https://www.google.com/maps/search/?api=1&query={}&zoom=16&hl=en",
            query
        ),
    }];

    if policy.is_home(&record.country) {
        links.push(ProviderLink {
            label: "Yahoo Maps (日本語)",
            url: format!(
                "https://map.yahoo.co.jp/search?q={}&lat={}&lng={}&zoom=16&hl=en",
                query, record.location.lat, record.location.lng
            ),
        });
    } else {
        links.push(ProviderLink {
            label: "Google Search",
            url: format!("https://google.com/search?q={}", query),
        });
    }

    links
}

/// Render the popup shown when a store marker is clicked
pub fn render_popup(record: &StoreRecord, policy: &PopupPolicy) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"notranslate store-info\">");
    buf.push_str(&format!(
        "<p class=\"store-name\"><b>{}</b></p>",
        escape_html(&record.name)
    ));
    buf.push_str(&format!(
        "<p class=\"store-address\">{}</p>",
        escape_html(&record.address)
    ));

    buf.push_str("<ul class=\"store-links\">");
    for link in provider_links(record, policy) {
        buf.push_str(&format!(
            "<li><a target=\"_blank\" rel=\"noopener noreferrer\" href=\"{}\">{}</a></li>",
            escape_html(&link.url),
            escape_html(link.label)
        ));
    }
    buf.push_str("</ul>");

    if !policy.is_home(&record.country) {
        buf.push_str(&format!(
            "<p class=\"store-warning\">Stores outside {} may be inaccurate.<br>Use this data at your own risk!</p>",
            escape_html(&home_name(policy))
        ));
    }

    buf.push_str("</div>");
    buf
}

fn home_name(policy: &PopupPolicy) -> String {
    match policy.home_country.as_str() {
        "JP" => "Japan".to_string(),
        other => other.to_string(),
    }
}

/// Format a timestamp as `YYYY/MM/DD HH:MM:SS` in the given zone
pub fn format_last_modified<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

/// Render the `#last-modified` label
pub fn render_status<Tz>(metadata: &FeedMetadata, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match &metadata.last_modified {
        Some(ts) => format!("Database: {}", format_last_modified(ts, tz)),
        None => "Database: unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CountryCode, LatLng};
    use crate::test_utils::{test_store, test_store_in};
    use chrono::{FixedOffset, Local};

    // ===== escape_html tests =====

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Co&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_html_leaves_unicode() {
        assert_eq!(escape_html("タイトーステーション"), "タイトーステーション");
    }

    // ===== render_popup tests =====

    #[test]
    fn home_store_gets_localized_link_only() {
        let store = test_store_in("JP");

        let result = render_popup(&store, &PopupPolicy::default());

        assert!(result.contains("Google Maps"));
        assert!(result.contains("map.yahoo.co.jp/search"));
        assert!(!result.contains("google.com/search?q="));
        assert!(!result.contains("may be inaccurate"));
    }

    #[test]
    fn foreign_store_gets_search_and_warning() {
        let store = test_store_in("US");

        let result = render_popup(&store, &PopupPolicy::default());

        assert!(result.contains("Google Maps"));
        assert!(result.contains("https://google.com/search?q="));
        assert!(result.contains("Stores outside Japan may be inaccurate."));
        assert!(!result.contains("map.yahoo.co.jp"));
    }

    #[test]
    fn home_country_is_configurable() {
        let store = test_store_in("EN");
        let policy = PopupPolicy::new(CountryCode::new("EN"));

        let result = render_popup(&store, &policy);

        assert!(result.contains("map.yahoo.co.jp"));
        assert!(!result.contains("store-warning"));
    }

    #[test]
    fn popup_contains_name_and_address() {
        let store = test_store();

        let result = render_popup(&store, &PopupPolicy::default());

        assert!(result.contains("<b>GiGO Akihabara</b>"));
        assert!(result.contains("1-10-9 Sotokanda, Chiyoda-ku"));
        assert!(result.starts_with("<div class=\"notranslate store-info\">"));
    }

    #[test]
    fn popup_escapes_untrusted_text() {
        let mut store = test_store_in("US");
        store.name = "<script>alert(\"x\")</script>".to_string();
        store.address = "<img src=x onerror=alert(1)>".to_string();

        let result = render_popup(&store, &PopupPolicy::default());

        assert!(!result.contains("<script>"));
        assert!(!result.contains("<img"));
        assert!(result.contains("&lt;script&gt;"));
        assert!(result.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn link_query_is_percent_encoded() {
        let mut store = test_store_in("US");
        store.name = "Round1 A&B \"Mall\"".to_string();

        let links = provider_links(&store, &PopupPolicy::default());

        assert_eq!(
            links[1].url,
            "https://google.com/search?q=Round1%20A%26B%20%22Mall%22"
        );
    }

    #[test]
    fn href_ampersands_are_escaped() {
        let store = test_store();

        let result = render_popup(&store, &PopupPolicy::default());

        assert!(result.contains("api=1&amp;query=GiGO%20Akihabara&amp;zoom=16"));
    }

    #[test]
    fn yahoo_link_carries_coordinates() {
        let mut store = test_store();
        store.location = LatLng {
            lat: 35.5,
            lng: 139.25,
        };

        let links = provider_links(&store, &PopupPolicy::default());

        assert_eq!(links[1].label, "Yahoo Maps (日本語)");
        assert!(links[1].url.contains("&lat=35.5&lng=139.25&"));
    }

    // ===== status tests =====

    #[test]
    fn status_formats_in_given_zone() {
        let meta = FeedMetadata::from_header(Some("Wed, 01 Jan 2025 03:04:05 GMT"));
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(render_status(&meta, &Utc), "Database: 2025/01/01 03:04:05");
        assert_eq!(render_status(&meta, &jst), "Database: 2025/01/01 12:04:05");
    }

    #[test]
    fn status_in_local_zone_matches_formatter() {
        let meta = FeedMetadata::from_header(Some("Wed, 01 Jan 2025 03:04:05 GMT"));
        let ts = meta.last_modified.unwrap();

        let result = render_status(&meta, &Local);

        assert_eq!(
            result,
            format!("Database: {}", format_last_modified(&ts, &Local))
        );
        let parsed = chrono::NaiveDateTime::parse_from_str(
            result.trim_start_matches("Database: "),
            "%Y/%m/%d %H:%M:%S",
        )
        .unwrap();
        assert_eq!(Local.from_local_datetime(&parsed).unwrap(), ts);
    }

    #[test]
    fn status_without_timestamp_is_unknown() {
        let meta = FeedMetadata::from_header(Some("not a date"));
        assert_eq!(render_status(&meta, &Utc), "Database: unknown");
    }
}
