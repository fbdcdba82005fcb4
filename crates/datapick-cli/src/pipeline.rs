//! Dataset loading pipeline: discover, select, load, profile.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;
use polars::prelude::DataFrame;
use tracing::{error, info};

use datapick_ingest::{DatasetSummary, list_csv_files, read_csv_table};

use crate::prompt::select_candidate;
use crate::report::{print_candidates, print_report};

/// Options for a load run.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory searched for CSV files.
    pub dir: PathBuf,
    /// Non-interactive 1-based selection; prompts when absent.
    pub select: Option<usize>,
    /// Number of preview rows in the profile.
    pub head_rows: usize,
    /// Render the profile as JSON instead of tables.
    pub json: bool,
}

impl LoadOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            select: None,
            head_rows: 5,
            json: false,
        }
    }
}

/// Discovers CSV files, resolves a selection, loads the file, and prints
/// its profile.
///
/// Every failure is reported and mapped to `None`; nothing propagates. A
/// failure while profiling or printing does not discard the loaded frame.
pub fn load_dataset<R: BufRead>(options: &LoadOptions, input: &mut R) -> Option<DataFrame> {
    let candidates = match list_csv_files(&options.dir) {
        Ok(candidates) => candidates,
        Err(err) => {
            error!(%err, dir = %options.dir.display(), "discovery failed");
            println!("Failed to list CSV files: {err}");
            return None;
        }
    };

    if candidates.is_empty() {
        println!("No CSV files found in {}.", options.dir.display());
        return None;
    }

    println!("CSV files found:");
    print_candidates(&candidates);

    let choice = match options.select {
        Some(choice) => {
            if choice == 0 || choice > candidates.len() {
                println!(
                    "Selection {choice} is out of range (1-{}).",
                    candidates.len()
                );
                return None;
            }
            choice
        }
        None => match select_candidate(input, &mut std::io::stdout(), candidates.len()) {
            Ok(choice) => choice,
            Err(err) => {
                error!(%err, "selection aborted");
                println!("Selection aborted: {err}");
                return None;
            }
        },
    };
    let candidate = &candidates[choice - 1];

    println!();
    println!("Loading {} ...", candidate.file_name());
    let loaded = match read_csv_table(&candidate.path) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(%err, path = %candidate.path.display(), "load failed");
            println!("Failed to load dataset: {err}");
            return None;
        }
    };
    info!(
        file = candidate.file_name(),
        encoding = loaded.encoding,
        rows = loaded.frame.height(),
        "dataset loaded"
    );
    println!("Loaded with encoding: {}", loaded.encoding);
    println!();

    // Profiling failures are reported but do not discard the frame.
    let report_result = DatasetSummary::from_frame(&loaded.frame, options.head_rows)
        .map_err(anyhow::Error::from)
        .and_then(|summary| render_summary(&summary, options.json));
    if let Err(err) = report_result {
        error!(%err, "profiling failed");
        println!("Failed to summarize dataset: {err}");
    }

    Some(loaded.frame)
}

fn render_summary(summary: &DatasetSummary, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(summary).context("serialize profile")?;
        println!("{rendered}");
    } else {
        print_report(summary);
    }
    Ok(())
}

/// Prints the candidate listing without loading anything.
///
/// Returns `false` when the directory holds no CSV files.
pub fn list_candidates(dir: &Path, json: bool) -> anyhow::Result<bool> {
    let candidates =
        list_csv_files(dir).with_context(|| format!("list CSV files in {}", dir.display()))?;

    if candidates.is_empty() {
        println!("No CSV files found in {}.", dir.display());
        return Ok(false);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&candidates).context("serialize listing")?;
        println!("{rendered}");
    } else {
        println!("CSV files found:");
        print_candidates(&candidates);
    }

    Ok(true)
}
