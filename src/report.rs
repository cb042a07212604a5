//! End-to-end report generation: build, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::builder;
use crate::content::{self, ReportContext};
use crate::error::ReportError;

/// Fixed name of the output artifact; embeds the report version.
pub const OUTPUT_FILENAME: &str = "Meeting_Scheduler_Project_Report_v2.0.0.pdf";

/// Outcome of a successful generation run.
#[derive(Clone, Debug)]
pub struct GeneratedReport {
    /// Path of the written file.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub size_bytes: u64,
}

impl GeneratedReport {
    /// File size in kibibytes, for the operator-facing summary.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Builds the report, renders it, and writes it into `output_dir`.
///
/// Rendering happens entirely in memory before the destination file is
/// touched, so a failed run never leaves a partial artifact behind.
pub fn generate_to(output_dir: &Path, ctx: &ReportContext) -> Result<GeneratedReport, ReportError> {
    let document = content::build_report(ctx);
    let bytes = builder::render(&document)?;

    let path = output_dir.join(OUTPUT_FILENAME);
    persist(&bytes, &path)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(GeneratedReport {
        path,
        size_bytes: bytes.len() as u64,
    })
}

/// Writes the rendered bytes to `path` in a single call.
pub fn persist(bytes: &[u8], path: &Path) -> Result<(), ReportError> {
    fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
