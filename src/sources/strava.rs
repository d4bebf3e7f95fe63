use crate::constants::STRAVA_SOURCE;
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::types::{Event, EventSource, StravaParams};
use tracing::info;

/// Strava only exposes event data through its authenticated API. Without a
/// configured access token this source degrades to an empty result instead
/// of failing the run; the authenticated lookup itself is not wired up.
pub struct StravaSource {
    params: StravaParams,
    access_token: Option<String>,
}

impl StravaSource {
    pub fn new(params: StravaParams, access_token: Option<String>) -> Self {
        Self {
            params,
            access_token,
        }
    }
}

#[async_trait::async_trait]
impl EventSource for StravaSource {
    fn source_name(&self) -> &'static str {
        STRAVA_SOURCE
    }

    async fn fetch_events(&self, _http: &HttpFetcher) -> Result<Vec<Event>> {
        if self.access_token.is_none() {
            info!("Strava access token not configured, skipping Strava events");
            return Ok(Vec::new());
        }
        info!(
            lat = self.params.lat,
            lng = self.params.lng,
            radius = self.params.radius,
            "Strava event lookup is not implemented, returning no events"
        );
        Ok(Vec::new())
    }
}
