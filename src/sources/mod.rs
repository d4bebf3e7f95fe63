pub mod bikereg;
pub mod nycc;
pub mod nycc_calendar;
pub mod strava;

use crate::config::strava_access_token;
use crate::constants::{BIKEREG_SOURCE, NYCC_CALENDAR_SOURCE, NYCC_SOURCE, STRAVA_SOURCE};
use crate::types::{AggregationOptions, EventSource};

use bikereg::BikeRegSource;
use nycc::NyccRidesSource;
use nycc_calendar::NyccCalendarSource;
use strava::StravaSource;

/// Builds the enabled sources for one aggregation run, in fixed
/// registration order. Downstream ordering depends on this order, never on
/// which fetch completes first.
pub fn enabled_sources(options: &AggregationOptions) -> Vec<Box<dyn EventSource>> {
    let mut sources: Vec<Box<dyn EventSource>> = Vec::new();
    if options.include_bikereg {
        sources.push(Box::new(BikeRegSource::new(options.bikereg.clone())));
    }
    if options.include_strava {
        sources.push(Box::new(StravaSource::new(
            options.strava.clone(),
            strava_access_token(),
        )));
    }
    if options.include_nycc {
        // NYCC publishes rides and a calendar as separate pages
        sources.push(Box::new(NyccRidesSource::new()));
        sources.push(Box::new(NyccCalendarSource::new()));
    }
    sources
}

/// Single source by name, with the matching filter parameters applied.
pub fn source_by_name(name: &str, options: &AggregationOptions) -> Option<Box<dyn EventSource>> {
    match name {
        BIKEREG_SOURCE => Some(Box::new(BikeRegSource::new(options.bikereg.clone()))),
        STRAVA_SOURCE => Some(Box::new(StravaSource::new(
            options.strava.clone(),
            strava_access_token(),
        ))),
        NYCC_SOURCE => Some(Box::new(NyccRidesSource::new())),
        NYCC_CALENDAR_SOURCE => Some(Box::new(NyccCalendarSource::new())),
        _ => None,
    }
}
