//! Flight-status HTTP client.
//!
//! Wraps the airport's public flight-status API. Each call fetches exactly
//! one page; [`super::fetch_day`] drives paging.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::api_day;

use super::error::FlightApiError;
use super::pager::{Operation, Page, PageSource};
use super::types::ApiEnvelope;

/// Default base URL for the flight-status API.
const DEFAULT_BASE_URL: &str = "https://apis.data.go.kr/B551177/statusOfAllFltDeOdp";

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the service key.
pub const SERVICE_KEY_VAR: &str = "SERVICE_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "FLIGHT_API_BASE_URL";

/// Configuration for the flight-status client.
#[derive(Debug, Clone)]
pub struct FlightStatusConfig {
    /// Service key sent as the `serviceKey` query parameter
    pub service_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Items per page
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FlightStatusConfig {
    /// Create a new config with the given service key.
    pub fn new(service_key: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build from the process environment.
    ///
    /// A missing service key is not an error here: requests go out with an
    /// empty key and the API rejects them.
    pub fn from_env() -> Self {
        let service_key = std::env::var(SERVICE_KEY_VAR).unwrap_or_else(|_| {
            warn!("{SERVICE_KEY_VAR} not set; API calls will be rejected");
            String::new()
        });
        let config = Self::new(service_key);
        match std::env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Flight-status API client.
#[derive(Debug, Clone)]
pub struct FlightStatusClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    page_size: u32,
}

impl FlightStatusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FlightStatusConfig) -> Result<Self, FlightApiError> {
        if config.page_size == 0 {
            return Err(FlightApiError::NotConfigured(
                "page size must be at least 1".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key,
            page_size: config.page_size,
        })
    }

    /// Items requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl PageSource for FlightStatusClient {
    async fn fetch_page(
        &self,
        operation: Operation,
        day: NaiveDate,
        page_no: u32,
        page_size: u32,
    ) -> Result<Page, FlightApiError> {
        let url = format!("{}/{}", self.base_url, operation.path());

        let response = self
            .http
            .get(&url)
            .query(&[
                ("serviceKey", self.service_key.clone()),
                ("type", "json".to_string()),
                ("numOfRows", page_size.to_string()),
                ("pageNo", page_no.to_string()),
                ("searchDate", api_day(day)),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FlightApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FlightApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: ApiEnvelope =
            serde_json::from_str(&body).map_err(|e| FlightApiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if let Some(header) = envelope.response.header.as_ref()
            && header.is_failure()
        {
            return Err(FlightApiError::Upstream {
                code: header.result_code.clone().unwrap_or_default(),
                message: header.result_msg.clone().unwrap_or_default(),
            });
        }

        Ok(envelope
            .response
            .body
            .map(|body| Page {
                total_count: body.total_count,
                items: body.items.into_items(),
            })
            .unwrap_or_default())
    }
}
