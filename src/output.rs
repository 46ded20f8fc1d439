//! Console report for one driver run.
//!
//! Saved files and the total-time line go to stdout; one diagnostic line per
//! failed URL goes to stderr.

use imgfetch::{BatchReport, FetchReport};

/// Formats the line for one URL's outcome. Every [`imgfetch::FetchError`]
/// names its URL, so failure lines print the error as is.
pub fn outcome_line(outcome: &FetchReport) -> String {
    let secs = outcome.elapsed.as_secs_f64();
    match &outcome.result {
        Ok(saved) => format!(
            "saved {} ({} bytes) in {secs:.3} s",
            saved.path.display(),
            saved.bytes
        ),
        Err(error) => format!("failed after {secs:.3} s: {error}"),
    }
}

/// Formats the total-time line labeled with the strategy.
pub fn total_line(report: &BatchReport) -> String {
    format!(
        "Total time ({}): {:.3} s",
        report.strategy,
        report.elapsed.as_secs_f64()
    )
}

/// Prints a report: per-URL lines in input order, then the total.
pub fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        let line = outcome_line(outcome);
        if outcome.result.is_ok() {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
    println!("{}", total_line(report));
}
