use crate::constants::{BIKEREG_BASE_URL, BIKEREG_SOURCE};
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::normalize::{normalize_date, normalize_url};
use crate::selectors::{first_attr, first_text, select_fragments};
use crate::types::{BikeRegParams, Event, EventSource};
use scraper::Html;
use tracing::{info, instrument};

const FRAGMENT_SELECTORS: &[&str] = &[".event-item", ".event-row"];
const NAME_SELECTORS: &[&str] = &[".event-title", ".event-name a"];
const DATE_SELECTORS: &[&str] = &[".event-date", ".date"];
const LOCATION_SELECTORS: &[&str] = &[".event-location", ".location"];
const DISCIPLINE_SELECTORS: &[&str] = &[".event-discipline", ".discipline"];
const DISTANCE_SELECTORS: &[&str] = &[".event-distance", ".distance"];

pub struct BikeRegSource {
    params: BikeRegParams,
}

impl BikeRegSource {
    pub fn new(params: BikeRegParams) -> Self {
        Self { params }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/events?state={}&discipline={}&month={}",
            BIKEREG_BASE_URL, self.params.state, self.params.discipline, self.params.month
        )
    }
}

/// Extracts events from one BikeReg listing page. A fragment becomes an
/// event only when both name and date text are present.
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
            .and_then(|href| normalize_url(Some(&href), BIKEREG_BASE_URL));
        let mut event = Event::new(
            BIKEREG_SOURCE,
            name,
            date,
            first_text(&fragment, LOCATION_SELECTORS).unwrap_or_default(),
            url,
        );
        event.discipline = first_text(&fragment, DISCIPLINE_SELECTORS);
        event.distance = first_text(&fragment, DISTANCE_SELECTORS);
        events.push(event);
    }

    events
}

#[async_trait::async_trait]
impl EventSource for BikeRegSource {
    fn source_name(&self) -> &'static str {
        BIKEREG_SOURCE
    }

    #[instrument(skip(self, http))]
    async fn fetch_events(&self, http: &HttpFetcher) -> Result<Vec<Event>> {
        let body = http.get_text(&self.request_url()).await?;
        let events = parse_document(&body);
        info!("Parsed {} events from BikeReg", events.len());
        Ok(events)
    }
}
