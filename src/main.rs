//! # Ocean Sensor Client Application Entry Point
//!
//! This binary is a small diagnostic harness around the library: it loads the
//! query from sensor-config.toml, fetches the requested sensor data, and prints a
//! per-sensor summary to stdout. Progress and failures are reported on stderr.

// Test modules
#[cfg(test)]
mod tests;

// Re-export library types for internal use
pub use ocean_sensor_lib::{config::Config, SensorData};

// Application dependencies
use ocean_sensor_lib::{Requester, RequestParameters};
use std::env;

/// Print a per-sensor summary of a fetched result to stdout.
fn print_summary(data: &SensorData) {
    let Some(records) = &data.sensor_data else {
        println!("No data matched the query (sensorData is null).");
        return;
    };

    println!("{} sensor(s) returned:", records.len());
    for record in records {
        let rows = record.data.row_count();
        let first = record.data.sample_times.first().map(String::as_str);
        let last = record.data.sample_times.last().map(String::as_str);
        match (first, last) {
            (Some(first), Some(last)) => {
                println!("  {:<24} {:>8} rows  {} .. {}", record.sensor_id, rows, first, last);
            }
            _ => println!("  {:<24} {:>8} rows", record.sensor_id, rows),
        }
    }

    match &data.next {
        Some(_) => println!("More pages exist (rerun with --all-pages to fetch everything)."),
        None => println!("Result is complete (no further pages)."),
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    // --all-pages overrides the config and walks the whole result set
    let all_pages_flag = env::args().any(|arg| arg == "--all-pages");

    // Load endpoint and default query configuration
    let config = Config::load();
    let all_pages = all_pages_flag || config.query.all_pages;

    let params = RequestParameters::new()
        .with("deviceCode", config.query.device_code.as_str())
        .with("dateFrom", config.query.date_from.as_str())
        .with("dateTo", config.query.date_to.as_str())
        .with("rowLimit", config.query.row_limit);

    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    let data = rt.block_on(async {
        let requester = Requester::new(&config.api)?;

        eprintln!(
            "Fetching {} ({} .. {}), rowLimit {}, all_pages {}",
            config.query.device_code,
            config.query.date_from,
            config.query.date_to,
            config.query.row_limit,
            all_pages
        );

        requester.get_direct_by_device(&params, all_pages).await
    })?;

    print_summary(&data);

    Ok(())
}
