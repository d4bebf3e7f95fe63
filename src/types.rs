use crate::error::Result;
use crate::http::HttpFetcher;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Event date as produced by the normalizer: either a fully parsed UTC
/// instant or the original text when no known format matched. Both shapes
/// flow downstream; dedup and sorting must tolerate the mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    Parsed(DateTime<Utc>),
    Unparsed(String),
}

impl EventDate {
    /// The date exactly as produced: an ISO-8601 millisecond instant for
    /// parsed dates, the raw text otherwise. Used for serialization and as
    /// part of the dedup key.
    pub fn as_produced(&self) -> String {
        match self {
            EventDate::Parsed(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            EventDate::Unparsed(raw) => raw.clone(),
        }
    }
}

impl Ord for EventDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (EventDate::Parsed(a), EventDate::Parsed(b)) => a.cmp(b),
            // Unparsed dates sort after every parsed date, ordered among
            // themselves by raw text.
            (EventDate::Parsed(_), EventDate::Unparsed(_)) => Ordering::Less,
            (EventDate::Unparsed(_), EventDate::Parsed(_)) => Ordering::Greater,
            (EventDate::Unparsed(a), EventDate::Unparsed(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for EventDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_produced())
    }
}

/// Canonical event record. Immutable once produced by a source; the
/// aggregator only moves, filters and reorders these.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub source: &'static str,
    pub name: String,
    pub date: EventDate,
    pub location: String,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Event {
    pub fn new(
        source: &'static str,
        name: String,
        date: EventDate,
        location: String,
        url: Option<String>,
    ) -> Self {
        Self {
            source,
            name,
            date,
            location,
            url,
            discipline: None,
            distance: None,
            leader: None,
            pace: None,
            time: None,
            kind: None,
        }
    }

    /// Composite dedup key: first occurrence of a key wins during a run.
    pub fn dedup_key(&self) -> (String, String, &'static str) {
        (self.name.clone(), self.date.as_produced(), self.source)
    }
}

/// Core trait every event source implements: fetch raw documents and turn
/// them into canonical events. Failures stay inside the `Result`; the
/// aggregator decides what to do with them.
#[async_trait::async_trait]
pub trait EventSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch and extract all events from this source
    async fn fetch_events(&self, http: &HttpFetcher) -> Result<Vec<Event>>;
}

/// BikeReg listing filters, forwarded verbatim as query parameters.
#[derive(Debug, Clone, Default)]
pub struct BikeRegParams {
    pub state: String,
    pub discipline: String,
    pub month: String,
}

/// Strava search center. Defaults to lower Manhattan with a 50 km radius.
#[derive(Debug, Clone)]
pub struct StravaParams {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
}

impl Default for StravaParams {
    fn default() -> Self {
        Self {
            lat: 40.7128,
            lng: -74.0060,
            radius: 50,
        }
    }
}

/// Per-run aggregation request. Fully determines which sources run and with
/// what arguments; there is no other state feeding a run.
#[derive(Debug, Clone)]
pub struct AggregationOptions {
    pub include_bikereg: bool,
    pub include_strava: bool,
    pub include_nycc: bool,
    pub bikereg: BikeRegParams,
    pub strava: StravaParams,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            include_bikereg: true,
            // Strava needs API credentials, so it is opt-in
            include_strava: false,
            include_nycc: true,
            bikereg: BikeRegParams::default(),
            strava: StravaParams::default(),
        }
    }
}
