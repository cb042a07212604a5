//! Error taxonomy for report generation.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating or writing the report.
///
/// Every failure is terminal for the run; the CLI maps each variant to a
/// distinct process exit code via [`ReportError::exit_code`].
#[derive(Debug)]
pub enum ReportError {
    /// The bundled font assets backing the document renderer are missing
    /// or unreadable.
    MissingFonts {
        /// Description of what was missing and where it was looked for.
        details: String,
    },
    /// The PDF composition layer rejected the document.
    Render(genpdf::error::Error),
    /// The output file could not be written.
    Io {
        /// Destination path of the failed write.
        path: PathBuf,
        /// Underlying operating system error.
        source: io::Error,
    },
}

impl ReportError {
    /// Process exit code the CLI should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingFonts { .. } => 2,
            Self::Render(_) | Self::Io { .. } => 1,
        }
    }
}

impl From<genpdf::error::Error> for ReportError {
    fn from(err: genpdf::error::Error) -> Self {
        Self::Render(err)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFonts { details } => {
                write!(f, "document fonts are not available: {details}")
            }
            Self::Render(err) => write!(f, "failed to compose the PDF document: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingFonts { .. } => None,
            Self::Render(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_missing_fonts() {
        let missing = ReportError::MissingFonts {
            details: "no font directory".into(),
        };
        assert_eq!(missing.exit_code(), 2);

        let io = ReportError::Io {
            path: PathBuf::from("/nope/report.pdf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn io_display_includes_path_and_source() {
        let err = ReportError::Io {
            path: PathBuf::from("/nope/report.pdf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/nope/report.pdf"));
        assert!(message.contains("denied"));
    }
}
