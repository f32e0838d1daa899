//! batch/driver.rs
//!
//! Design notes:
//! - Items are processed one at a time, in directory enumeration order.
//! - The dictionary is loaded once by the caller and shared read-only.
//! - Each item's buffer moves through the transform; a failed transform drops
//!   it and nothing is written.
//! - Skipped items are copied only when the destination is a different file.

use std::fs;
use std::path::Path;

use crate::batch::paths::{dir_entry_destination, ensure_output_dir, file_destination, same_file};
use crate::batch::report::{BatchReport, ItemOutcome, ItemReport};
use crate::buffer::ByteBuffer;
use crate::classify::{classify, plan, Action};
use crate::compression::Dictionary;
use crate::config::{BatchConfig, Operation, Target};
use crate::envelope::read_original_size;
use crate::io::{read_file, write_file};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::transform;
use crate::types::BatchError;

/// Failure label for read and write errors.
pub const IO_FAILURE: &str = "io";

/// Run `config.operation` over `target`.
///
/// `on_item` is called once per processed item with its report and, unless
/// the item failed, the bytes that now live at the destination.
///
/// # Errors
/// - `BatchError::NotFound` when the target does not exist.
/// - `BatchError::Io` when the output directory cannot be created or the
///   target directory cannot be listed.
///
/// Per-item failures are recorded in the report and never abort the run.
pub fn run_batch<F>(
    target: &Target,
    dict: &Dictionary,
    config: &BatchConfig,
    mut on_item: F,
) -> Result<BatchReport, BatchError>
where
    F: FnMut(&ItemReport, Option<&[u8]>),
{
    let root = target.path();
    if !root.exists() {
        return Err(BatchError::NotFound(root.to_path_buf()));
    }

    let mut driver = Driver {
        dict,
        config,
        counters: TelemetryCounters::default(),
        timer: TelemetryTimer::new(),
        items: Vec::new(),
    };
    let output = config.output.as_deref();

    match target {
        Target::File(path) => {
            let dest = file_destination(path, output);
            driver.process(path, &dest, &mut on_item);
        }
        Target::Dir(dir) => {
            ensure_output_dir(output)?;
            let entries = fs::read_dir(dir)
                .map_err(|source| BatchError::Io { path: dir.clone(), source })?;

            for entry in entries {
                let path = match entry {
                    Ok(e) => e.path(),
                    Err(source) => {
                        log::warn!("cannot read entry in {}: {}", dir.display(), source);
                        continue;
                    }
                };
                if !path.is_file() {
                    log::debug!("skipping non-file entry {}", path.display());
                    continue;
                }
                let dest = dir_entry_destination(&path, output);
                driver.process(&path, &dest, &mut on_item);
            }
        }
    }

    driver.timer.finish();
    let telemetry = TelemetrySnapshot::from(&driver.counters, &driver.timer);
    let report = BatchReport { items: driver.items, telemetry };

    log::info!(
        "{} finished: {} transformed, {} skipped, {} failed in {:.2} ms",
        config.operation,
        report.transformed(),
        report.skipped(),
        report.failed(),
        report.telemetry.elapsed_ms,
    );
    Ok(report)
}

struct Driver<'a> {
    dict: &'a Dictionary,
    config: &'a BatchConfig,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
    items: Vec<ItemReport>,
}

impl Driver<'_> {
    fn process<F>(&mut self, src: &Path, dest: &Path, on_item: &mut F)
    where
        F: FnMut(&ItemReport, Option<&[u8]>),
    {
        let mut report = ItemReport::new(src.to_path_buf(), dest.to_path_buf(), self.config.operation);
        let written = self.process_inner(src, dest, &mut report);

        match &report.outcome {
            ItemOutcome::Transformed => {
                self.counters.add_transformed(report.bytes_in, report.bytes_out);
                log::debug!(
                    "{}: {} -> {} bytes, written to {}",
                    src.display(), report.bytes_in, report.bytes_out, dest.display()
                );
            }
            ItemOutcome::Skipped { reason } => {
                self.counters.add_skipped();
                log::warn!("{}: skipped, {}", src.display(), reason.describe());
            }
            ItemOutcome::Failed { stage, kind, message } => {
                self.counters.add_failed();
                log::warn!("{}: {} failed ({}): {}", src.display(), stage, kind, message);
            }
        }

        on_item(&report, written.as_ref().map(|b| b.as_slice()));
        self.items.push(report);
    }

    /// Fills `report` and returns what ended up at `dest`, if anything.
    fn process_inner(&mut self, src: &Path, dest: &Path, report: &mut ItemReport) -> Option<ByteBuffer> {
        let input = match self.timer.time(Stage::Read, || read_file(src)) {
            Ok(buf) => buf,
            Err(e) => {
                report.outcome = ItemOutcome::Failed { stage: Stage::Read, kind: IO_FAILURE, message: e.to_string() };
                return None;
            }
        };
        report.bytes_in = input.len();

        let state = self.timer.time(Stage::Classify, || classify(&input));
        report.state = Some(state);

        let op = match plan(self.config.operation, state) {
            Action::Apply(op) => op,
            Action::Skip(reason) => {
                report.outcome = ItemOutcome::Skipped { reason };
                report.bytes_out = input.len();
                if !same_file(src, dest) {
                    if let Err(e) = self.timer.time(Stage::Write, || write_file(dest, &input)) {
                        report.outcome = ItemOutcome::Failed { stage: Stage::Write, kind: IO_FAILURE, message: e.to_string() };
                        return None;
                    }
                }
                return Some(input);
            }
        };

        let result = match op {
            Operation::Compress => {
                let level = self.config.level;
                let dict = self.dict;
                self.timer.time(Stage::Compress, || transform::compress(input, dict, level))
            }
            Operation::Decompress => {
                report.declared_size = read_original_size(&input).ok();
                let dict = self.dict;
                self.timer.time(Stage::Decompress, || transform::decompress(input, dict))
            }
        };

        let output = match result {
            Ok(buf) => buf,
            Err(e) => {
                let stage = match op {
                    Operation::Compress => Stage::Compress,
                    Operation::Decompress => Stage::Decompress,
                };
                report.outcome = ItemOutcome::Failed { stage, kind: e.kind(), message: e.to_string() };
                return None;
            }
        };
        report.bytes_out = output.len();

        if report.size_mismatch() {
            log::warn!(
                "{}: decompressed {} bytes but envelope records {}",
                src.display(),
                report.bytes_out,
                report.declared_size.unwrap_or_default(),
            );
        }

        if let Err(e) = self.timer.time(Stage::Write, || write_file(dest, &output)) {
            report.outcome = ItemOutcome::Failed { stage: Stage::Write, kind: IO_FAILURE, message: e.to_string() };
            return None;
        }

        report.outcome = ItemOutcome::Transformed;
        Some(output)
    }
}
