//! Exhaustive page-by-page retrieval of one operation for one day.

use std::fmt;
use std::future::Future;

use chrono::NaiveDate;
use tracing::debug;

use super::error::FlightApiError;
use super::types::RawFlightItem;

/// Which board to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Arrivals,
    Departures,
}

impl Operation {
    /// Path segment of the API operation.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Arrivals => "getFltArrivalsDeOdp",
            Operation::Departures => "getFltDeparturesDeOdp",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One page of an operation's results.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Total item count the API declares for the whole query.
    pub total_count: u64,
    /// Items on this page.
    pub items: Vec<RawFlightItem>,
}

/// Source of flight-status pages.
///
/// This abstraction allows the pager to be tested with synthetic pages.
/// Fetches must be `Send` so they can run inside server handlers.
pub trait PageSource {
    /// Fetch page `page_no` (1-based) of `operation` for `day`.
    fn fetch_page(
        &self,
        operation: Operation,
        day: NaiveDate,
        page_no: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Page, FlightApiError>> + Send;
}

/// Fetch every item of `operation` for `day`.
///
/// Pages are requested in order starting at 1. Paging stops at the first
/// empty page, or once the accumulated count reaches the declared total.
/// Any page failure aborts the whole day; there is no partial result.
pub async fn fetch_day<P: PageSource>(
    source: &P,
    operation: Operation,
    day: NaiveDate,
    page_size: u32,
) -> Result<Vec<RawFlightItem>, FlightApiError> {
    let mut all_items = Vec::new();
    let mut page_no = 1;

    loop {
        debug!(%operation, %day, page_no, "requesting page");
        let page = source.fetch_page(operation, day, page_no, page_size).await?;

        if page.items.is_empty() {
            break;
        }

        let received = page.items.len();
        all_items.extend(page.items);
        debug!(
            %operation,
            %day,
            page_no,
            received,
            accumulated = all_items.len(),
            total = page.total_count,
            "page received"
        );

        if all_items.len() as u64 >= page.total_count {
            break;
        }

        page_no += 1;
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};
    use std::sync::Mutex;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 26).unwrap()
    }

    fn item(n: u64) -> RawFlightItem {
        let mut map = Map::new();
        map.insert("flightId".into(), Value::String(format!("KE{n:04}")));
        map
    }

    /// Serves `total` synthetic items in pages and records every request.
    struct SyntheticSource {
        total: u64,
        requests: Mutex<Vec<(Operation, u32)>>,
        fail_on_page: Option<u32>,
    }

    impl SyntheticSource {
        fn new(total: u64) -> Self {
            Self {
                total,
                requests: Mutex::new(Vec::new()),
                fail_on_page: None,
            }
        }

        fn pages_requested(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|(_, p)| *p).collect()
        }
    }

    impl PageSource for SyntheticSource {
        async fn fetch_page(
            &self,
            operation: Operation,
            _day: NaiveDate,
            page_no: u32,
            page_size: u32,
        ) -> Result<Page, FlightApiError> {
            self.requests.lock().unwrap().push((operation, page_no));
            if self.fail_on_page == Some(page_no) {
                return Err(FlightApiError::Status {
                    status: 502,
                    message: "Bad Gateway".into(),
                });
            }
            let start = u64::from(page_no - 1) * u64::from(page_size);
            let end = (start + u64::from(page_size)).min(self.total);
            Ok(Page {
                total_count: self.total,
                items: (start..end).map(item).collect(),
            })
        }
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn day_fetch_future_is_send() {
        let source = SyntheticSource::new(1);
        let fetch = fetch_day(&source, Operation::Arrivals, day(), 1000);
        assert_send(&fetch);
    }

    #[tokio::test]
    async fn pages_until_total_reached() {
        let source = SyntheticSource::new(2500);
        let items = fetch_day(&source, Operation::Departures, day(), 1000)
            .await
            .unwrap();
        assert_eq!(items.len(), 2500);
        assert_eq!(source.pages_requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_result_takes_one_request() {
        let source = SyntheticSource::new(0);
        let items = fetch_day(&source, Operation::Arrivals, day(), 1000)
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(source.pages_requested(), vec![1]);
    }

    #[tokio::test]
    async fn exact_multiple_stops_without_extra_request() {
        let source = SyntheticSource::new(2000);
        let items = fetch_day(&source, Operation::Arrivals, day(), 1000)
            .await
            .unwrap();
        assert_eq!(items.len(), 2000);
        assert_eq!(source.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn failure_aborts_the_day() {
        let mut source = SyntheticSource::new(2500);
        source.fail_on_page = Some(2);
        let result = fetch_day(&source, Operation::Departures, day(), 1000).await;
        assert!(matches!(result, Err(FlightApiError::Status { status: 502, .. })));
        assert_eq!(source.pages_requested(), vec![1, 2]);
    }

    /// Declares more items than it ever delivers.
    struct OverstatedSource;

    impl PageSource for OverstatedSource {
        async fn fetch_page(
            &self,
            _operation: Operation,
            _day: NaiveDate,
            page_no: u32,
            _page_size: u32,
        ) -> Result<Page, FlightApiError> {
            let items = if page_no == 1 { vec![item(1)] } else { Vec::new() };
            Ok(Page {
                total_count: 50,
                items,
            })
        }
    }

    #[tokio::test]
    async fn empty_page_stops_even_below_total() {
        let items = fetch_day(&OverstatedSource, Operation::Arrivals, day(), 10)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn operation_paths() {
        assert_eq!(Operation::Arrivals.path(), "getFltArrivalsDeOdp");
        assert_eq!(Operation::Departures.to_string(), "getFltDeparturesDeOdp");
    }
}
