//! Event catalog types shared by the browse, wizard, and dashboard surfaces.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered by the browse filter and the creation wizard.
pub const CATEGORIES: &[&str] = &["music", "theatre", "sports", "tech", "food", "arts"];

/// Event list entry (matches the list endpoint's summary shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub price_from_cents: Option<i64>,
    #[serde(default)]
    pub sold_out: bool,
}

/// Ticket tier of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketTier {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
    #[serde(default)]
    pub remaining: Option<u32>,
}

/// Full event record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub organizer_id: Uuid,
    #[serde(default)]
    pub tiers: Vec<TicketTier>,
}

/// Response wrapper for the event list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventSummary>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
}

/// Payload for creating or updating an event.
#[derive(Debug, Clone, Serialize)]
pub struct EventInput {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub venue: String,
    pub city: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub tiers: Vec<TierInput>,
}

/// Ticket tier payload inside [`EventInput`].
#[derive(Debug, Clone, Serialize)]
pub struct TierInput {
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

/// A purchased ticket as the API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub tier: String,
    pub code: String,
    pub status: String,
}

/// Response wrapper for the "my tickets" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketListResponse {
    pub tickets: Vec<Ticket>,
}

/// Outcome of a staff check-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckinResult {
    pub status: String,
    #[serde(default)]
    pub attendee: Option<String>,
    #[serde(default)]
    pub event_title: Option<String>,
}

/// Browse filters for the event list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub page: u32,
    /// Restrict to events owned by the caller (organizer dashboard).
    pub mine: bool,
}

impl EventFilter {
    /// Render as a query string, empty when no filter is active. Pages are
    /// 1-based; page 0/1 is omitted.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("search={}", encode_component(search)));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            params.push(format!("category={}", encode_component(category)));
        }
        if let Some(from) = self.from {
            params.push(format!("from={}", from.format("%Y-%m-%d")));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }
        if self.mine {
            params.push("mine=true".to_string());
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Percent-encode a query component (reserved characters and spaces only;
/// everything else the backend accepts verbatim).
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Price label for a cents amount, e.g. `$12.50`.
pub fn format_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

/// Short date-time label for cards and tables.
pub fn format_when(when: &DateTime<Utc>) -> String {
    when.format("%a, %b %d · %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_filter_renders_no_query() {
        assert_eq!(EventFilter::default().to_query_string(), "");
    }

    #[test]
    fn full_filter_renders_all_params() {
        let filter = EventFilter {
            search: Some("rust conf".to_string()),
            category: Some("tech".to_string()),
            from: NaiveDate::from_ymd_opt(2026, 9, 1),
            page: 3,
            mine: false,
        };
        assert_eq!(
            filter.to_query_string(),
            "?search=rust%20conf&category=tech&from=2026-09-01&page=3"
        );
    }

    #[test]
    fn first_page_and_blank_fields_are_omitted() {
        let filter = EventFilter {
            search: Some(String::new()),
            category: None,
            from: None,
            page: 1,
            mine: true,
        };
        assert_eq!(filter.to_query_string(), "?mine=true");
    }

    #[test]
    fn query_components_are_percent_encoded() {
        let filter = EventFilter {
            search: Some("jazz & blues?".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query_string(),
            "?search=jazz%20%26%20blues%3F"
        );
    }

    #[test]
    fn price_labels() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(950), "$9.50");
        assert_eq!(format_price(12_05), "$12.05");
        assert_eq!(format_price(150_000), "$1500.00");
    }

    #[test]
    fn when_label_is_stable() {
        let when = Utc.with_ymd_and_hms(2026, 9, 12, 19, 30, 0).unwrap();
        assert_eq!(format_when(&when), "Sat, Sep 12 · 19:30");
    }
}
