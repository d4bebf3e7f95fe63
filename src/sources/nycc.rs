use crate::constants::{NYCC_BASE_URL, NYCC_SOURCE};
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::normalize::{normalize_date, normalize_url};
use crate::selectors::{first_attr, first_text, select_fragments};
use crate::types::{Event, EventSource};
use scraper::Html;
use tracing::{info, instrument, warn};

const FRAGMENT_SELECTORS: &[&str] = &[".ride-item", ".event-item", ".ride-listing"];
const NAME_SELECTORS: &[&str] = &[".ride-title", ".event-title", "h3", "h4"];
const DATE_SELECTORS: &[&str] = &[".ride-date", ".event-date", ".date"];
const LOCATION_SELECTORS: &[&str] = &[".ride-location", ".location", ".start-location"];
const LEADER_SELECTORS: &[&str] = &[".ride-leader", ".leader"];
const PACE_SELECTORS: &[&str] = &[".pace", ".ride-pace"];
const DISTANCE_SELECTORS: &[&str] = &[".distance", ".ride-distance"];

/// New York Cycle Club ride listings.
pub struct NyccRidesSource;

impl NyccRidesSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NyccRidesSource {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_document(body: &str) -> Vec<Event> {
    let document = Html::parse_document(body);
    let mut events = Vec::new();

    for fragment in select_fragments(&document, FRAGMENT_SELECTORS) {
        let Some(name) = first_text(&fragment, NAME_SELECTORS) else {
            continue;
        };
        let Some(date_text) = first_text(&fragment, DATE_SELECTORS) else {
            continue;
        };
        let Some(date) = normalize_date(&date_text) else {
            continue;
        };

        let url = first_attr(&fragment, &["a"], "href")
            .and_then(|href| normalize_url(Some(&href), NYCC_BASE_URL));
        let mut event = Event::new(
            NYCC_SOURCE,
            name,
            date,
            first_text(&fragment, LOCATION_SELECTORS).unwrap_or_default(),
            url,
        );
        event.leader = first_text(&fragment, LEADER_SELECTORS);
        event.pace = first_text(&fragment, PACE_SELECTORS);
        event.distance = first_text(&fragment, DISTANCE_SELECTORS);
        events.push(event);
    }

    events
}

#[async_trait::async_trait]
impl EventSource for NyccRidesSource {
    fn source_name(&self) -> &'static str {
        NYCC_SOURCE
    }

    #[instrument(skip(self, http))]
    async fn fetch_events(&self, http: &HttpFetcher) -> Result<Vec<Event>> {
        let body = http.get_text(&format!("{NYCC_BASE_URL}/rides")).await?;
        let events = parse_document(&body);
        info!("Parsed {} events from NYCC rides", events.len());
        if events.is_empty() {
            warn!("No NYCC rides found - the page structure may have changed");
        }
        Ok(events)
    }
}
