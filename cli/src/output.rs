//! Console messaging: `[LEVEL  ] message` lines, result previews, run summary.

use std::io::{self, Write};

use anyhow::Context;
use colored::Colorize;

use aovzstd_core::batch::{BatchReport, ItemOutcome, ItemReport};
use aovzstd_core::compression::CompressionLevel;
use aovzstd_core::config::Operation;
use aovzstd_core::constants::{PREVIEW_COLUMNS, PREVIEW_LEN};
use aovzstd_core::utils::preview;

fn tag(level: &str) -> String {
    format!("[{:<7}]", level)
}

pub fn info(msg: impl AsRef<str>) {
    println!("{} {}", tag("INFO").green(), msg.as_ref());
}

pub fn warn(option: &str, msg: impl AsRef<str>) {
    println!("{} option {} {}.", tag("WARN").yellow(), format!("'{option}'").yellow(), msg.as_ref());
}

/// Echo the command line, as the first verbose line.
pub fn options(args: &[String]) {
    info(format!("Used command line options: {}", args.join(" ")));
}

fn mode_name(op: Operation) -> &'static str {
    match op {
        Operation::Compress   => "compression",
        Operation::Decompress => "decompression",
    }
}

/// Verbose block for one item.
pub fn item(report: &ItemReport, bytes: Option<&[u8]>, level: CompressionLevel) {
    let name = report
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.source.display().to_string());

    println!();
    info(format!("File: {name}"));
    info(format!("Mode: {}", mode_name(report.operation)));

    match &report.outcome {
        ItemOutcome::Failed { stage, kind, message } => {
            println!("{} {} failed ({}): {}", tag("ERROR").red(), stage, kind, message);
            return;
        }
        ItemOutcome::Skipped { reason } => {
            println!("{} skipped: {}", tag("WARN").yellow(), reason.describe());
        }
        ItemOutcome::Transformed => {}
    }

    println!();
    if let Some(bytes) = bytes {
        print!("{}", preview(bytes, 0, PREVIEW_LEN, PREVIEW_COLUMNS));
    }

    if report.operation == Operation::Compress && report.outcome == ItemOutcome::Transformed {
        println!();
        info(format!("compression level: {level}"));
    }
    if report.size_mismatch() {
        println!(
            "{} envelope records {} bytes",
            tag("WARN").yellow(),
            report.declared_size.unwrap_or_default()
        );
    }
    info(format!("Size: {} bytes", report.bytes_out));
    info(format!("Output written to: {}", report.destination.display()));
}

pub fn summary(report: &BatchReport) {
    println!();
    info(format!(
        "{} transformed, {} skipped, {} failed",
        report.transformed(),
        report.skipped(),
        report.failed()
    ));
    info(format!("Execution time: {:.3} s", report.telemetry.elapsed.as_secs_f64()));
}

/// Telemetry snapshot as pretty JSON on stdout.
pub fn stats(report: &BatchReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&report.telemetry).context("serializing telemetry")?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}").context("writing telemetry")?;
    Ok(())
}
