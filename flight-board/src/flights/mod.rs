//! Flight-status API access.
//!
//! This module provides an HTTP client for the airport's public
//! flight-status API, which serves one day of arrivals or departures per
//! query, split into pages.
//!
//! Key characteristics of the API:
//! - The total item count is only known after the first page arrives
//! - Times are 12-digit local (KST) strings, `YYYYMMDDHHmm`
//! - Codeshare designators appear as separate items, marked `Master`/`Slave`
//! - Field names are the API's own; [`normalize_all`] maps them to ours

mod client;
mod error;
mod normalize;
mod pager;
mod types;

pub use client::{
    BASE_URL_VAR, DEFAULT_PAGE_SIZE, FlightStatusClient, FlightStatusConfig, SERVICE_KEY_VAR,
};
pub use error::FlightApiError;
pub use normalize::{Field, Normalized, NormalizedFlight, normalize_all, normalize_item};
pub use pager::{Operation, Page, PageSource, fetch_day};
pub use types::{ApiBody, ApiEnvelope, ApiHeader, ApiResponse, ItemsPayload, RawFlightItem};
