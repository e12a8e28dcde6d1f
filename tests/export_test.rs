//! PDF output integration tests

use photo_roster::export::pdf;
use photo_roster::resolver::Resolution;
use photo_roster::roster::RosterRecord;
use printpdf::image_crate::{DynamicImage, RgbImage};
use std::fs;
use tempfile::tempdir;

fn record(name: &str, date: &str, affiliation: &str) -> RosterRecord {
    RosterRecord {
        name: name.to_string(),
        date: date.to_string(),
        affiliation: affiliation.to_string(),
    }
}

#[test]
fn test_pdf_generation_without_photos() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("roster.pdf");

    let records = vec![
        record("Maria Ressa", "2021-10-08", "Rappler"),
        record("Jamal K.", "2018-10-02", "The Washington Post, columnist"),
    ];
    let resolutions = vec![Resolution::NoMatch, Resolution::Rejected];

    let result = pdf::generate_pdf(&records, &resolutions, &output_path, "Test Roster");
    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());

    let bytes = fs::read(&output_path).expect("Failed to read PDF output");
    assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
}

#[test]
fn test_pdf_generation_with_embedded_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let photo_path = dir.path().join("Maria Ressa.png");
    let output_path = dir.path().join("roster.pdf");

    let image = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
    image.save(&photo_path).expect("Failed to write test image");

    let records = vec![record("Maria Ressa", "2021-10-08", "Rappler")];
    let resolutions = vec![Resolution::Primary(photo_path)];

    let result = pdf::generate_pdf(&records, &resolutions, &output_path, "Test Roster");
    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());

    let metadata = fs::metadata(&output_path).expect("Failed to stat PDF output");
    assert!(metadata.len() > 0, "PDF output is empty");
}

#[test]
fn test_pdf_generation_with_unreadable_photo_still_renders_page() {
    let dir = tempdir().expect("Failed to create temp dir");
    let photo_path = dir.path().join("broken.jpg");
    let output_path = dir.path().join("roster.pdf");

    fs::write(&photo_path, b"not actually a jpeg").unwrap();

    let records = vec![record("Jane Doe", "2020-01-01", "Somewhere")];
    let resolutions = vec![Resolution::Secondary(photo_path)];

    // The broken photo is skipped; the page and the document still render
    let result = pdf::generate_pdf(&records, &resolutions, &output_path, "Test Roster");
    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_pdf_generation_long_name_wraps() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("roster.pdf");

    let records = vec![record(
        "An Extraordinarily Long Ceremonial Name That Cannot Possibly Fit On One Line",
        "2019-05-05",
        "Outlet One, Outlet Two, Outlet Three, Outlet Four, Outlet Five",
    )];
    let resolutions = vec![Resolution::NoMatch];

    let result = pdf::generate_pdf(&records, &resolutions, &output_path, "Test Roster");
    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());
}
