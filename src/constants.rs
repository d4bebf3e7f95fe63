// Source identifiers. These are the only values an Event's `source` field
// can carry.
pub const BIKEREG_SOURCE: &str = "bikereg";
pub const STRAVA_SOURCE: &str = "strava";
pub const NYCC_SOURCE: &str = "nycc";
pub const NYCC_CALENDAR_SOURCE: &str = "nycc_calendar";

pub const BIKEREG_BASE_URL: &str = "https://www.bikereg.com";
pub const NYCC_BASE_URL: &str = "https://nycc.org";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
