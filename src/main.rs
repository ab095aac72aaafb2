mod args;
mod config;
mod writer;

use tdf::{build_transaction_query_service, report::QueryReport, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let args = args::parse_input_args()?;
    log::debug!("Parsed input args: {args:?}");

    let service = build_transaction_query_service(&args.path)?;

    log::debug!("Transactions source opened. Running queries...");

    let report = QueryReport::build(&service, args.sender.as_deref(), args.client.as_deref())?;

    log::debug!("Queries complete. Writing report...");

    let output = writer::write_report(&report, args.format)?;

    print!("{output}");

    log::debug!("Application finished successfully!");

    Ok(())
}
