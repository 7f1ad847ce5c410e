//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Days, FixedOffset, NaiveTime, Timelike};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::{
    DomainError, GateQuery, LOOKAHEAD_DAYS, LOOKBACK_DAYS, QueryRange, local_instant, now_kst,
    parse_day, parse_time_of_day, truncate_to_minute,
};
use crate::flights::FlightApiError;
use crate::pipeline::{fetch_range, lookup_gate};
use crate::report::{Report, ReportError, export_filename, to_xlsx_bytes};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/gate", get(gate_lookup))
        .route("/export", get(export_workbook))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with lookup and export forms.
async fn index_page() -> impl IntoResponse {
    let now = now_kst();
    let today = now.date_naive();
    let template = IndexTemplate {
        today: today.format("%Y-%m-%d").to_string(),
        now: format!("{:02}:{:02}", now.hour(), now.minute()),
        min_day: (today - Days::new(LOOKBACK_DAYS)).format("%Y-%m-%d").to_string(),
        max_day: (today + Days::new(LOOKAHEAD_DAYS)).format("%Y-%m-%d").to_string(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Requested time of day, or the current minute.
fn cutoff_time(
    requested: Option<&str>,
    now: &DateTime<FixedOffset>,
) -> Result<NaiveTime, DomainError> {
    match requested {
        Some(s) => parse_time_of_day(s),
        None => Ok(truncate_to_minute(now.naive_local()).time()),
    }
}

/// What's at a gate now, or next.
async fn gate_lookup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<GateLookupRequest>,
) -> Result<Response, AppError> {
    let gate = GateQuery::parse(&req.gate)?;

    let now = now_kst();
    let today = now.date_naive();
    let day = match non_blank(&req.date) {
        Some(s) => parse_day(s)?,
        None => today,
    };
    let time = cutoff_time(non_blank(&req.time), &now)?;
    // Only the window check matters here.
    QueryRange::single(day, today)?;

    let cutoff = local_instant(day, time);
    let selection =
        lookup_gate(state.client.as_ref(), day, &gate, &cutoff, state.page_size).await?;

    let date = day.format("%Y-%m-%d").to_string();
    let cutoff = cutoff.format("%H:%M").to_string();

    if accepts_html(&headers) {
        let template =
            GateResultsTemplate::from_selection(gate.to_string(), date, cutoff, &selection);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(GateLookupResponse::from_selection(
            gate.to_string(),
            date,
            cutoff,
            &selection,
        ))
        .into_response())
    }
}

/// Fetch a day range and return it as an xlsx attachment.
async fn export_workbook(
    State(state): State<AppState>,
    Query(req): Query<ExportRequest>,
) -> Result<Response, AppError> {
    let today = now_kst().date_naive();
    let start = match non_blank(&req.start) {
        Some(s) => parse_day(s)?,
        None => today,
    };
    let end = match non_blank(&req.end) {
        Some(s) => parse_day(s)?,
        None => start,
    };
    let range = QueryRange::new(start, end, today)?;

    let set = fetch_range(state.client.as_ref(), &range, state.page_size).await?;
    let (report, summary) = Report::build(set);
    info!(
        arrivals = summary.arrivals_fetched,
        departures = summary.departures_fetched,
        rows = summary.total_rows(),
        dropped_fields = summary.dropped_fields,
        "export assembled"
    );

    let bytes = to_xlsx_bytes(&report)?;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(&range));
    let disposition = HeaderValue::from_str(&disposition).map_err(|e| AppError::Internal {
        message: format!("Invalid header: {}", e),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<FlightApiError> for AppError {
    fn from(e: FlightApiError) -> Self {
        match e {
            FlightApiError::NotConfigured(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::today_kst;
    use crate::flights::{FlightStatusClient, FlightStatusConfig};
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn envelope(items: Value) -> Value {
        json!({
            "response": {
                "header": { "resultCode": "00", "resultMsg": "NORMAL SERVICE." },
                "body": { "totalCount": items.as_array().map_or(0, Vec::len), "items": items }
            }
        })
    }

    async fn state_for(server: &MockServer) -> AppState {
        let config = FlightStatusConfig::new("test-key").with_base_url(server.uri());
        AppState::new(FlightStatusClient::new(config).unwrap())
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers
    }

    #[test]
    fn accepts_html_checks_header() {
        assert!(accepts_html(&html_headers()));
        assert!(!accepts_html(&HeaderMap::new()));
    }

    #[test]
    fn default_cutoff_is_current_minute() {
        use chrono::TimeZone;
        let now = crate::domain::kst()
            .with_ymd_and_hms(2025, 2, 26, 12, 0, 30)
            .unwrap()
            + chrono::TimeDelta::milliseconds(500);
        assert_eq!(
            cutoff_time(None, &now).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            cutoff_time(Some("08:15"), &now).unwrap(),
            NaiveTime::from_hms_opt(8, 15, 0).unwrap()
        );
        assert!(cutoff_time(Some("8pm"), &now).is_err());
    }

    #[test]
    fn error_statuses() {
        let bad: AppError = DomainError::InvalidGate(String::new()).into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream: AppError = FlightApiError::Unauthorized.into();
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn gate_lookup_json() {
        let server = MockServer::start().await;
        let today = today_kst().format("%Y%m%d").to_string();
        Mock::given(method("GET"))
            .and(path("/getFltArrivalsDeOdp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                { "flightId": "KE001", "codeshare": "Master", "fstandPosition": "43",
                  "scheduleDatetime": format!("{today}2330"), "terminalId": "P01" }
            ]))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/getFltDeparturesDeOdp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let req = GateLookupRequest {
            gate: " 43 ".into(),
            date: None,
            time: Some("00:00".into()),
        };
        let response = gate_lookup(State(state), HeaderMap::new(), Query(req))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "upcoming");
        assert_eq!(body["gate"], "43");
        assert_eq!(body["next"]["flight_number"], "KE001");
        assert_eq!(body["next"]["scheduled"], "23:30");
    }

    #[tokio::test]
    async fn gate_lookup_html_for_browsers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let req = GateLookupRequest {
            gate: "231".into(),
            date: None,
            time: None,
        };
        let response = gate_lookup(State(state), html_headers(), Query(req))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("배정된 항공편이 없습니다"));
    }

    #[tokio::test]
    async fn blank_gate_rejected_before_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .expect(0)
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let req = GateLookupRequest {
            gate: "  ".into(),
            date: None,
            time: None,
        };
        let err = gate_lookup(State(state), HeaderMap::new(), Query(req))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn export_out_of_window_rejected() {
        let server = MockServer::start().await;
        let state = state_for(&server).await;
        let far = (today_kst() + Days::new(30)).format("%Y-%m-%d").to_string();
        let req = ExportRequest {
            start: Some(far),
            end: None,
        };
        let err = export_workbook(State(state), Query(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn export_returns_attachment() {
        let server = MockServer::start().await;
        let today = today_kst().format("%Y%m%d").to_string();
        Mock::given(method("GET"))
            .and(path("/getFltDeparturesDeOdp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                { "flightId": "OZ101", "codeshare": "Master", "terminalId": "P03",
                  "scheduleDatetime": format!("{today}0810") }
            ]))))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/getFltArrivalsDeOdp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let req = ExportRequest {
            start: None,
            end: None,
        };
        let response = export_workbook(State(state), Query(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], XLSX_CONTENT_TYPE);
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains(&format!("icn_flight_status_{today}.xlsx")));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = state_for(&server).await;
        let req = ExportRequest {
            start: None,
            end: None,
        };
        let err = export_workbook(State(state), Query(req)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
