//! Font loading for the report renderer.
//!
//! The renderer needs a TrueType font family on disk; without one the
//! formatting capability is unavailable and generation fails up front with
//! [`ReportError::MissingFonts`].

use std::env;
use std::path::{Path, PathBuf};

use genpdf::fonts::{self, FontData, FontFamily};
use log::debug;

use crate::error::ReportError;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable that relocates the font directory.
pub const FONTS_DIR_ENV: &str = "PROJECT_REPORT_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

fn font_directory() -> PathBuf {
    match env::var_os(FONTS_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"),
    }
}

fn missing_fonts(details: String) -> ReportError {
    ReportError::MissingFonts { details }
}

fn ensure_required_fonts_present(directory: &Path) -> Result<(), ReportError> {
    if !directory.is_dir() {
        return Err(missing_fonts(format!(
            "font directory {} does not exist (see assets/fonts/README.md, or set {})",
            directory.display(),
            FONTS_DIR_ENV
        )));
    }

    let missing: Vec<_> = FONT_FILES
        .iter()
        .map(|name| directory.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(missing_fonts(format!(
            "missing font files: {display_list} (see assets/fonts/README.md)"
        )))
    }
}

/// Loads the Roboto font family used for every report.
pub fn default_font_family() -> Result<FontFamily<FontData>, ReportError> {
    let directory = font_directory();
    debug!("loading font family from {}", directory.display());
    ensure_required_fonts_present(&directory)?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        missing_fonts(format!(
            "failed to load font family '{}' from {}: {}",
            DEFAULT_FONT_FAMILY_NAME,
            directory.display(),
            err
        ))
    })
}

/// Indicates whether all font files required by the renderer are present.
pub fn default_fonts_available() -> bool {
    let directory = font_directory();
    directory.is_dir()
        && FONT_FILES
            .iter()
            .map(|name| directory.join(name))
            .all(|path| path.is_file())
}
