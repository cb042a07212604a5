use chrono::{Local, TimeZone};
use project_report::builder;
use project_report::content::{self, ReportContext};
use project_report::fonts;
use sha2::{Digest, Sha256};

fn fixed_context() -> ReportContext {
    ReportContext::at(Local.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap())
}

fn render_sample_report() -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let document = content::build_report(&fixed_context());
    Some(builder::render(&document).expect("render report"))
}

/// Zeroes the volatile PDF metadata (timestamps, document identifiers) so
/// renders of the same document can be compared byte for byte.
fn scrub_volatile_metadata(bytes: &[u8]) -> Vec<u8> {
    const DELIMITED: &[(&[u8], u8)] = &[
        (b"/CreationDate(", b')'),
        (b"/ModDate(", b')'),
        (b"/Producer(", b')'),
        (b"/ID[", b']'),
    ];
    const XML_TAGS: &[&str] = &[
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ];

    let mut data = bytes.to_vec();
    for (tag, terminator) in DELIMITED {
        zero_until_terminator(&mut data, tag, *terminator);
    }
    for tag in XML_TAGS {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        zero_between_markers(&mut data, open.as_bytes(), close.as_bytes());
    }
    data
}

fn zero_until_terminator(data: &mut [u8], tag: &[u8], terminator: u8) {
    let mut index = 0;
    while index + tag.len() <= data.len() {
        if !data[index..].starts_with(tag) {
            index += 1;
            continue;
        }
        let mut cursor = index + tag.len();
        while cursor < data.len() && data[cursor] != terminator {
            let byte = data[cursor];
            if !byte.is_ascii_whitespace() && !matches!(byte, b'<' | b'>') {
                data[cursor] = b'0';
            }
            cursor += 1;
        }
        index = cursor;
    }
}

fn zero_between_markers(data: &mut [u8], open: &[u8], close: &[u8]) {
    let mut offset = 0;
    while let Some(start) = find(&data[offset..], open) {
        let content_start = offset + start + open.len();
        let Some(end) = find(&data[content_start..], close) else {
            break;
        };
        for byte in &mut data[content_start..content_start + end] {
            if !byte.is_ascii_whitespace() {
                *byte = b'0';
            }
        }
        offset = content_start + end + close.len();
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_volatile_metadata(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_non_empty_pdf() {
    let Some(bytes) = render_sample_report() else {
        eprintln!(
            "Skipping renders_non_empty_pdf: font assets missing. Set PROJECT_REPORT_FONTS_DIR or copy the Roboto fonts into assets/fonts."
        );
        return;
    };
    assert!(
        bytes.starts_with(b"%PDF"),
        "rendered output should carry the PDF header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_sample_report() else {
        eprintln!(
            "Skipping rendering_is_deterministic: font assets missing. Set PROJECT_REPORT_FONTS_DIR or copy the Roboto fonts into assets/fonts."
        );
        return;
    };
    let Some(bytes_b) = render_sample_report() else {
        eprintln!(
            "Skipping rendering_is_deterministic: font assets missing. Set PROJECT_REPORT_FONTS_DIR or copy the Roboto fonts into assets/fonts."
        );
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "renders must be identical after metadata normalization"
    );
}
