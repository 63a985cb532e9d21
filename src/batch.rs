use anyhow::Context;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{spoof_with_limit, TargetPrefix};

pub const REPORT_FILE: &str = "results.json";

#[derive(Debug, Default)]
pub struct Report {
    pub target: String,
    pub completed: Vec<Completed>,
    pub failed: Vec<Failed>,
}

#[derive(Debug)]
pub struct Completed {
    pub input: PathBuf,
    pub output: PathBuf,
    pub digest: String,
    pub attempts: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug)]
pub struct Failed {
    pub input: PathBuf,
    pub error: String,
}

impl Report {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
        let completed: Vec<_> = self
            .completed
            .iter()
            .map(|job| {
                serde_json::json!({
                    "input": job.input.display().to_string(),
                    "output": job.output.display().to_string(),
                    "digest": job.digest,
                    "attempts": job.attempts,
                    "elapsed_ms": job.elapsed_ms,
                })
            })
            .collect();
        let failed: Vec<_> = self
            .failed
            .iter()
            .map(|job| {
                serde_json::json!({
                    "input": job.input.display().to_string(),
                    "error": job.error,
                })
            })
            .collect();
        Ok(serde_json::json!({
            "date": now,
            "target": self.target,
            "completed": completed,
            "failed": failed,
        }))
    }
}

/// Spoofs every `*.png` in `input_dir` into `output_dir/<stem>-spoofed.png`
/// and writes the report next to them. A file that fails is recorded and
/// the rest of the batch still runs.
pub fn run(
    target: &TargetPrefix,
    input_dir: &Path,
    output_dir: &Path,
    max_attempts: u64,
) -> anyhow::Result<Report> {
    let mut images: Vec<PathBuf> = fs::read_dir(input_dir)
        .context(format!("Failed to read {}", input_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension() == Some(OsStr::new("png")))
        .collect();
    images.sort();
    log::info!("Found {} images to process", images.len());
    fs::create_dir_all(output_dir)
        .context(format!("Failed to create {}", output_dir.display()))?;

    let mut report = Report {
        target: format!("0x{}", target.as_str()),
        ..Default::default()
    };
    for input in images {
        let stem = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("image");
        let output = output_dir.join(format!("{stem}-spoofed.png"));
        let started = Instant::now();
        match spoof_file(target, &input, &output, max_attempts) {
            Ok((digest, attempts)) => {
                log::info!("{} -> {}", input.display(), output.display());
                report.completed.push(Completed {
                    input,
                    output,
                    digest,
                    attempts,
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }
            Err(e) => {
                log::error!("{}: {e:#}", input.display());
                report.failed.push(Failed {
                    input,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    fs::write(output_dir.join(REPORT_FILE), report.to_json()?.to_string())
        .context(format!("Failed to write {REPORT_FILE}"))?;
    Ok(report)
}

fn spoof_file(
    target: &TargetPrefix,
    input: &Path,
    output: &Path,
    max_attempts: u64,
) -> anyhow::Result<(String, u64)> {
    let bytes = fs::read(input).context(format!("Failed to read {}", input.display()))?;
    let spoofed = spoof_with_limit(target, &bytes, max_attempts)?;
    fs::write(output, &spoofed.bytes).context(format!("Failed to write {}", output.display()))?;
    Ok((spoofed.digest, spoofed.attempts))
}
