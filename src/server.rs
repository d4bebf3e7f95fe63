use crate::aggregator::Aggregator;
use crate::types::{AggregationOptions, BikeRegParams, Event, StravaParams};
use axum::{
    extract::{Path, Query},
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Query-string shape shared by the event routes. Source flags map to
/// enable/disable booleans; the free-text parameters feed BikeReg.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    bikereg: Option<String>,
    strava: Option<String>,
    nycc: Option<String>,
    state: Option<String>,
    discipline: Option<String>,
    month: Option<String>,
}

impl EventsQuery {
    fn into_options(self) -> AggregationOptions {
        AggregationOptions {
            // BikeReg and NYCC are on unless explicitly disabled; Strava is
            // off unless explicitly enabled
            include_bikereg: self.bikereg.as_deref() != Some("false"),
            include_strava: self.strava.as_deref() == Some("true"),
            include_nycc: self.nycc.as_deref() != Some("false"),
            bikereg: BikeRegParams {
                state: self.state.unwrap_or_default(),
                discipline: self.discipline.unwrap_or_default(),
                month: self.month.unwrap_or_default(),
            },
            strava: StravaParams::default(),
        }
    }
}

#[derive(Serialize)]
struct EventsResponse {
    success: bool,
    count: usize,
    events: Vec<Event>,
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cycling-events",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn all_events(
    Extension(aggregator): Extension<Arc<Aggregator>>,
    Query(query): Query<EventsQuery>,
) -> impl IntoResponse {
    let events = aggregator.run(&query.into_options()).await;
    Json(EventsResponse {
        success: true,
        count: events.len(),
        events,
    })
}

async fn source_events(
    Extension(aggregator): Extension<Arc<Aggregator>>,
    Path(source): Path<String>,
    Query(query): Query<EventsQuery>,
) -> impl IntoResponse {
    match aggregator.run_source(&source, &query.into_options()).await {
        Ok(events) => Json(EventsResponse {
            success: true,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

/// Create the HTTP server with all routes
pub fn create_server(aggregator: Arc<Aggregator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/events", get(all_events))
        .route("/api/events/:source", get(source_events))
        .layer(Extension(aggregator))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(
    aggregator: Arc<Aggregator>,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_server(aggregator);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("🚴 Cycling events API running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("📅 All events:   http://localhost:{port}/api/events");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_enables_bikereg_and_nycc_only() {
        let options = EventsQuery::default().into_options();
        assert!(options.include_bikereg);
        assert!(!options.include_strava);
        assert!(options.include_nycc);
    }

    #[test]
    fn flags_map_to_enable_disable() {
        let query = EventsQuery {
            bikereg: Some("false".to_string()),
            strava: Some("true".to_string()),
            nycc: Some("false".to_string()),
            ..Default::default()
        };
        let options = query.into_options();
        assert!(!options.include_bikereg);
        assert!(options.include_strava);
        assert!(!options.include_nycc);
    }

    #[test]
    fn free_text_parameters_feed_bikereg() {
        let query = EventsQuery {
            state: Some("NY".to_string()),
            discipline: Some("Road".to_string()),
            ..Default::default()
        };
        let options = query.into_options();
        assert_eq!(options.bikereg.state, "NY");
        assert_eq!(options.bikereg.discipline, "Road");
        assert_eq!(options.bikereg.month, "");
    }
}
