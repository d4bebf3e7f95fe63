use crate::constants::{NYCC_BASE_URL, NYCC_CALENDAR_SOURCE};
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::normalize::{normalize_date, normalize_url};
use crate::selectors::{first_attr, first_text, select_fragments};
use crate::types::{Event, EventSource};
use scraper::Html;
use tracing::{info, instrument};

const FRAGMENT_SELECTORS: &[&str] = &[".calendar-event", ".event"];
const NAME_SELECTORS: &[&str] = &[".event-title", ".title"];
const DATE_SELECTORS: &[&str] = &[".event-date", ".date"];
const LOCATION_SELECTORS: &[&str] = &[".event-location", ".location"];
const TIME_SELECTORS: &[&str] = &[".event-time", ".time"];
const TYPE_SELECTORS: &[&str] = &[".event-type", ".type"];

/// NYCC club calendar, a second page with its own markup. Kept as a
/// separate source so its events carry their own tag through dedup.
pub struct NyccCalendarSource;

impl NyccCalendarSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NyccCalendarSource {
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
            NYCC_CALENDAR_SOURCE,
            name,
            date,
            first_text(&fragment, LOCATION_SELECTORS).unwrap_or_default(),
            url,
        );
        event.time = first_text(&fragment, TIME_SELECTORS);
        event.kind = first_text(&fragment, TYPE_SELECTORS);
        events.push(event);
    }

    events
}

#[async_trait::async_trait]
impl EventSource for NyccCalendarSource {
    fn source_name(&self) -> &'static str {
        NYCC_CALENDAR_SOURCE
    }

    #[instrument(skip(self, http))]
    async fn fetch_events(&self, http: &HttpFetcher) -> Result<Vec<Event>> {
        let body = http.get_text(&format!("{NYCC_BASE_URL}/calendar")).await?;
        let events = parse_document(&body);
        info!("Parsed {} events from NYCC calendar", events.len());
        Ok(events)
    }
}
