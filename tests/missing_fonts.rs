//! Runs in its own test binary so redirecting the font directory through the
//! environment cannot interfere with the other tests.

use std::env;
use std::fs;

use project_report::content::ReportContext;
use project_report::error::ReportError;
use project_report::fonts::{self, FONTS_DIR_ENV};
use project_report::report::{self, OUTPUT_FILENAME};

#[test]
fn missing_fonts_fail_before_any_output_is_written() {
    let empty_fonts_dir = tempfile::tempdir().expect("create empty fonts dir");
    env::set_var(FONTS_DIR_ENV, empty_fonts_dir.path());
    assert!(!fonts::default_fonts_available());

    let output_dir = tempfile::tempdir().expect("create output dir");
    let err = report::generate_to(output_dir.path(), &ReportContext::now())
        .expect_err("generation without fonts must fail");

    assert!(matches!(err, ReportError::MissingFonts { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("font"));

    assert!(!output_dir.path().join(OUTPUT_FILENAME).exists());
    let leftovers = fs::read_dir(output_dir.path()).expect("read output dir").count();
    assert_eq!(leftovers, 0, "a failed run must not leave partial output");
}
