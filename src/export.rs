// src/export.rs
//
// Batch prediction export: submit every audio file under a path and write
// `filename,prediction,confidence` rows (prediction: 0 = real, 1 = fake).
// Files that fail still get a row (prediction 0, confidence 0).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::client::{detect, SelectedFile, Transport, UploadForm};
use crate::config::{ClientConfig, DetectionMethod};
use crate::detection::Verdict;

/// Audio file found under the export root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEntry {
    /// Path relative to the root, `/`-separated
    pub relative: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub filename: String,
    /// None when the file produced no result
    pub verdict: Option<Verdict>,
    pub score: f64,
    pub confidence: f64,
}

impl PredictionRecord {
    /// Default row for a file that could not be processed
    pub fn failed(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            verdict: None,
            score: 0.0,
            confidence: 0.0,
        }
    }

    pub fn prediction(&self) -> u8 {
        self.verdict.map_or(0, |v| v.prediction())
    }
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// One row per file, failures included
    pub records: Vec<PredictionRecord>,
    /// (file, error message) for files that produced no prediction
    pub failures: Vec<(String, String)>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExportSummary {
    pub fn fake_count(&self) -> usize {
        self.records.iter().filter(|r| r.prediction() == 1).count()
    }

    /// Files with a verdict other than fake; failed rows are not counted
    pub fn real_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.verdict.is_some() && r.prediction() == 0)
            .count()
    }

    /// Mean confidence over every row, failures counted as 0
    pub fn average_confidence(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.confidence).sum();
        Some(total / self.records.len() as f64)
    }

    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Find uploadable audio files; a single file is returned as-is
pub fn collect_audio_files(root: &Path, config: &ClientConfig) -> Result<Vec<AudioEntry>> {
    let mut entries = Vec::new();

    if root.is_file() {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.is_extension_allowed(&name) {
            entries.push(AudioEntry {
                relative: name,
                path: root.to_path_buf(),
            });
        }
    } else if root.is_dir() {
        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let name = entry.file_name().to_string_lossy();
            if !config.is_extension_allowed(&name) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            entries.push(AudioEntry {
                relative,
                path: entry.path().to_path_buf(),
            });
        }
    } else {
        bail!("{} is not a valid file or directory", root.display());
    }

    Ok(entries)
}

/// Submit each file in turn; per-file failures are recorded and skipped
pub fn run_export<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    root: &Path,
    method: DetectionMethod,
    show_progress: bool,
) -> Result<ExportSummary> {
    let started_at = Utc::now();
    let files = collect_audio_files(root, config)?;
    log::info!("Found {} audio file(s) under {}", files.len(), root.display());

    let progress = if show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for entry in &files {
        progress.set_message(entry.relative.clone());

        let outcome = SelectedFile::from_path(&entry.path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                let form = UploadForm::new(method).with_file(file);
                detect(transport, config, &form).map_err(|e| e.to_string())
            });

        match outcome {
            Ok(result) => {
                log::debug!(
                    "{}: prediction={}, confidence={:.4}",
                    entry.relative,
                    result.verdict.prediction(),
                    result.confidence
                );
                records.push(PredictionRecord {
                    filename: entry.relative.clone(),
                    verdict: Some(result.verdict),
                    score: result.score,
                    confidence: result.confidence,
                });
            }
            Err(message) => {
                log::warn!("Error processing {}: {}", entry.relative, message);
                records.push(PredictionRecord::failed(entry.relative.clone()));
                failures.push((entry.relative.clone(), message));
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(ExportSummary {
        records,
        failures,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Write the prediction CSV
pub fn write_csv<W: Write>(records: &[PredictionRecord], mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "filename,prediction,confidence")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{:.4}",
            csv_field(&record.filename),
            record.prediction(),
            record.confidence
        )?;
    }
    writer.flush()
}

/// Write the prediction CSV to a file
pub fn write_csv_file(records: &[PredictionRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(records, std::io::BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
