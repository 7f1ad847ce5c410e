//! Flight-status API response DTOs.
//!
//! These types map directly onto the JSON envelope the API returns. The
//! flight items themselves stay untyped (`RawFlightItem`) until they pass
//! through the allow-list normalizer.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One flight item exactly as the API sent it.
pub type RawFlightItem = Map<String, Value>;

/// Result code the API uses for success.
pub const SUCCESS_CODE: &str = "00";

/// Top-level response wrapper: `{"response": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub response: ApiResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Result code and message.
    pub header: Option<ApiHeader>,

    /// Page payload. Missing on some error responses.
    pub body: Option<ApiBody>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHeader {
    pub result_code: Option<String>,
    pub result_msg: Option<String>,
}

impl ApiHeader {
    /// Whether the header reports a failure. A missing code is not one.
    pub fn is_failure(&self) -> bool {
        self.result_code
            .as_deref()
            .is_some_and(|code| code.trim() != SUCCESS_CODE)
    }
}

/// One page of results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBody {
    /// Total number of items for the whole query, across all pages.
    #[serde(default)]
    pub total_count: u64,

    /// Items on this page.
    #[serde(default)]
    pub items: ItemsPayload,
}

/// The `items` field in the shapes the API is known to send.
///
/// Usually a plain list. Some gateways wrap it as `{"item": [...]}`, and an
/// empty result may arrive as `""` or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum ItemsPayload {
    List(Vec<RawFlightItem>),
    Wrapped { item: Vec<RawFlightItem> },
    Blank(String),
    #[default]
    Missing,
}

impl ItemsPayload {
    pub fn into_items(self) -> Vec<RawFlightItem> {
        match self {
            ItemsPayload::List(items) | ItemsPayload::Wrapped { item: items } => items,
            ItemsPayload::Blank(_) | ItemsPayload::Missing => Vec::new(),
        }
    }
}
