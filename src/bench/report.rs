//! Console rendering of the benchmark report.
//!
//! All report data goes to stdout; diagnostics stay on stderr. JSON mode
//! suppresses everything except the records themselves.

#![expect(
    clippy::print_stdout,
    reason = "The report is the program's output stream"
)]

use colored::Colorize;

use crate::bench::record::BenchmarkRecord;
use crate::config::{BenchConfig, ReportFormat};
use crate::version::VERSION;

/// Prints the startup banner with the run parameters.
pub fn print_banner(config: &BenchConfig) {
    if config.format == ReportFormat::Json {
        return;
    }

    println!(
        "{} {}",
        "Monte Carlo π benchmark".bold(),
        format!("v{VERSION}").dimmed()
    );
    println!(
        "  workers: {}   detected CPUs: {}   tasks per round: {}",
        config.workers.to_string().cyan(),
        config.detected_cpus,
        config.num_tasks
    );
    let sizes = config
        .problem_sizes
        .iter()
        .map(|size| format_count(*size))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  problem sizes: {sizes}");
    println!();
}

/// Prints one finished round, honoring the configured format.
pub fn print_record(record: &BenchmarkRecord, format: ReportFormat) {
    match format {
        ReportFormat::Json => println!("{}", record.to_json()),
        ReportFormat::Text => print_record_text(record),
    }
}

fn print_record_text(record: &BenchmarkRecord) {
    println!(
        "{}",
        format!("{} iterations", format_count(record.total_iterations)).bold()
    );
    println!(
        "  {:10} {:10.2}ms   π ≈ {:.6}",
        "serial",
        record.serial_elapsed.as_secs_f64() * 1000.0,
        record.serial_estimate
    );
    println!(
        "  {:10} {:10.2}ms   π ≈ {:.6}",
        "parallel",
        record.parallel_elapsed.as_secs_f64() * 1000.0,
        record.parallel_estimate
    );
    println!(
        "  {:10} {}x   efficiency {}%   {}",
        "speedup",
        format!("{:.2}", record.speedup).magenta(),
        format!("{:.1}", record.efficiency).magenta(),
        verdict_mark(record)
    );
    println!();
}

/// Prints the cross-size summary table.
pub fn print_summary(records: &[BenchmarkRecord], format: ReportFormat) {
    if format == ReportFormat::Json || records.is_empty() {
        return;
    }

    println!("{}", "Summary".bold());
    println!(
        "  {:>12} {:>12} {:>12} {:>9} {:>11}",
        "iterations", "serial", "parallel", "speedup", "efficiency"
    );
    for record in records {
        println!(
            "  {:>12} {:>10.2}ms {:>10.2}ms {:>8.2}x {:>10.1}%",
            format_count(record.total_iterations),
            record.serial_elapsed.as_secs_f64() * 1000.0,
            record.parallel_elapsed.as_secs_f64() * 1000.0,
            record.speedup,
            record.efficiency
        );
    }
}

fn verdict_mark(record: &BenchmarkRecord) -> String {
    if record.speedup >= 1.0 {
        format!("{} {}", "✓".green(), record.verdict().green())
    } else {
        format!("{} {}", "✗".red(), record.verdict().red())
    }
}

/// Millions render as `10M`; anything else keeps its digits.
fn format_count(count: u64) -> String {
    if count >= 1_000_000 && count.is_multiple_of(1_000_000) {
        format!("{}M", count / 1_000_000)
    } else {
        count.to_string()
    }
}
