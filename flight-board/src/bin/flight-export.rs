//! Write the per-terminal flight status workbook for a range of days.

use std::path::PathBuf;

use clap::Parser;
use flight_board::domain::{QueryRange, parse_day, today_kst};
use flight_board::flights::{FlightStatusClient, FlightStatusConfig};
use flight_board::pipeline::fetch_range;
use flight_board::report::{Report, export_filename, save_xlsx};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Export Incheon Airport flight status to an xlsx workbook.
#[derive(Debug, Parser)]
struct Args {
    /// First day, YYYYMMDD or YYYY-MM-DD (default: today in KST)
    start: Option<String>,

    /// Last day, inclusive (default: START)
    end: Option<String>,

    /// Output path (default: icn_flight_status_{start}[_{end}].xlsx)
    #[clap(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let today = today_kst();
    let start = match args.start.as_deref() {
        Some(s) => parse_day(s)?,
        None => today,
    };
    let end = match args.end.as_deref() {
        Some(s) => parse_day(s)?,
        None => start,
    };
    let range = QueryRange::new(start, end, today)?;

    let client = FlightStatusClient::new(FlightStatusConfig::from_env())?;
    info!(%start, %end, "fetching flight status");
    let set = fetch_range(&client, &range, client.page_size()).await?;

    let (report, summary) = Report::build(set);
    if summary.dropped_fields > 0 {
        warn!(count = summary.dropped_fields, "dropped unrecognised source fields");
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_filename(&range)));
    save_xlsx(&report, &path)?;

    info!(
        arrivals = summary.arrivals_fetched,
        departures = summary.departures_fetched,
        "fetched"
    );
    for (terminal, rows) in &summary.rows_per_sheet {
        info!(sheet = terminal.sheet_name(), rows, "written");
    }
    println!("{}", path.display());
    Ok(())
}
