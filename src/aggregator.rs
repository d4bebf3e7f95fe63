use crate::config::FetchConfig;
use crate::error::{Result, ScraperError};
use crate::http::HttpFetcher;
use crate::sources;
use crate::types::{AggregationOptions, Event, EventSource};
use futures::future;
use std::collections::HashSet;
use tracing::{info, warn};

/// Orchestrates one stateless aggregation pass:
/// dispatch -> collect -> dedup -> sort -> return.
pub struct Aggregator {
    http: HttpFetcher,
}

impl Aggregator {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
        })
    }

    /// Full aggregation across the sources enabled in `options`. Partial
    /// source failures never surface here; the worst case is an empty list.
    pub async fn run(&self, options: &AggregationOptions) -> Vec<Event> {
        let sources = sources::enabled_sources(options);
        self.run_sources(&sources).await
    }

    /// Runs an explicit source set through the same collect/dedup/sort path.
    pub async fn run_sources(&self, sources: &[Box<dyn EventSource>]) -> Vec<Event> {
        let events = self.collect(sources).await;
        sort_by_date(dedup(events))
    }

    /// Single-source invocation, bypassing dedup and merge. The per-record
    /// name/date filter already happened inside the extractor.
    pub async fn run_source(&self, name: &str, options: &AggregationOptions) -> Result<Vec<Event>> {
        let source = sources::source_by_name(name, options)
            .ok_or_else(|| ScraperError::UnknownSource(name.to_string()))?;
        Ok(self.fetch_one(source.as_ref()).await)
    }

    /// Fires all fetches at once and awaits them together, so wall-clock
    /// latency is bounded by the slowest source. Results are concatenated
    /// in source order, not completion order.
    async fn collect(&self, sources: &[Box<dyn EventSource>]) -> Vec<Event> {
        let fetches: Vec<_> = sources
            .iter()
            .map(|source| self.fetch_one(source.as_ref()))
            .collect();
        let results = future::join_all(fetches).await;

        let mut events = Vec::new();
        for source_events in results {
            events.extend(source_events);
        }
        info!(
            "Collected {} events from {} sources",
            events.len(),
            sources.len()
        );
        events
    }

    async fn fetch_one(&self, source: &dyn EventSource) -> Vec<Event> {
        match source.fetch_events(&self.http).await {
            Ok(events) => events,
            Err(e) => {
                // One broken source must not poison the whole run
                warn!(source = source.source_name(), "source fetch failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// First occurrence of a `(name, date-as-produced, source)` key wins; later
/// duplicates are dropped.
fn dedup(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.dedup_key()))
        .collect()
}

/// Stable ascending sort by date. Unparsed dates order after all parsed
/// dates (see `EventDate::cmp`); ties keep concatenation order.
fn sort_by_date(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}
