pub mod aggregator;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod logging;
pub mod normalize;
pub mod selectors;
pub mod server;
pub mod sources;
pub mod types;

pub use aggregator::Aggregator;
pub use types::{AggregationOptions, Event, EventDate, EventSource};
