//! PDF rendering: one A4 page per roster record, resolved photo on the
//! upper portion, name / date / affiliation centered below it.

use crate::error::{PhotoRosterError, Result};
use crate::resolver::Resolution;
use crate::roster::RosterRecord;
use printpdf::image_crate::GenericImageView;
use printpdf::{
    image_crate, BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfLayerReference,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const PT_PER_MM: f32 = 72.0 / 25.4;

const TOP_MARGIN_MM: f32 = 12.7;
const SIDE_MARGIN_MM: f32 = 12.7;
const IMAGE_TEXT_GAP_MM: f32 = 7.6;

const NAME_SIZE_PT: f32 = 41.0;
const DATE_SIZE_PT: f32 = 26.0;
const AFFILIATION_SIZE_PT: f32 = 24.0;
const NAME_LINE_SPACING: f32 = 1.3;
const AFFILIATION_LINE_SPACING: f32 = 1.2;

// Name baseline sits a third of the page height from the bottom
const NAME_BASELINE_MM: f32 = A4_HEIGHT_MM / 3.0;

// Builtin Helvetica carries no metrics table here, so widths are
// estimated from an average glyph width
const AVG_GLYPH_WIDTH_EM: f32 = 0.52;

const EMBED_DPI: f32 = 300.0;

struct PageFonts {
    bold: IndirectFontRef,
    regular: IndirectFontRef,
    oblique: IndirectFontRef,
}

/// Render `records` (paired index-wise with `resolutions`) to `output_path`.
///
/// A record without a resolved photo still gets its text page. A photo
/// file that exists but cannot be decoded is skipped with a warning; the
/// rest of the document is unaffected.
pub fn generate_pdf(
    records: &[RosterRecord],
    resolutions: &[Resolution],
    output_path: &Path,
    title: &str,
) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );

    let fonts = PageFonts {
        bold: add_font(&doc, BuiltinFont::HelveticaBold)?,
        regular: add_font(&doc, BuiltinFont::Helvetica)?,
        oblique: add_font(&doc, BuiltinFont::HelveticaOblique)?,
    };

    for (idx, record) in records.iter().enumerate() {
        let (page, layer) = if idx == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);

        let photo = resolutions.get(idx).and_then(|r| r.path());
        add_person_page(&layer, record, photo, &fonts);
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| PhotoRosterError::PdfGeneration(format!("failed to save PDF: {:?}", e)))?;

    Ok(())
}

fn add_font(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| PhotoRosterError::PdfGeneration(format!("failed to add font: {:?}", e)))
}

fn add_person_page(
    layer: &PdfLayerReference,
    record: &RosterRecord,
    photo: Option<&Path>,
    fonts: &PageFonts,
) {
    let max_text_width_mm = A4_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;

    let name_lines = wrap_words(&record.name, NAME_SIZE_PT, max_text_width_mm);
    let name_line_height_mm = NAME_SIZE_PT * NAME_LINE_SPACING / PT_PER_MM;

    // Name, bold, wrapped, growing downward from the fixed baseline
    let mut text_y = NAME_BASELINE_MM;
    for line in &name_lines {
        draw_centered(layer, line, NAME_SIZE_PT, text_y, &fonts.bold);
        text_y -= name_line_height_mm;
    }

    if !record.date.is_empty() {
        draw_centered(layer, &record.date, DATE_SIZE_PT, text_y, &fonts.regular);
    }
    text_y -= DATE_SIZE_PT * NAME_LINE_SPACING / PT_PER_MM;

    // Affiliation, oblique, wrapped on its comma-separated segments
    if !record.affiliation.is_empty() {
        let line_height_mm = AFFILIATION_SIZE_PT * AFFILIATION_LINE_SPACING / PT_PER_MM;
        for line in wrap_commas(&record.affiliation, AFFILIATION_SIZE_PT, max_text_width_mm) {
            draw_centered(layer, &line, AFFILIATION_SIZE_PT, text_y, &fonts.oblique);
            text_y -= line_height_mm;
        }
    }

    if let Some(path) = photo {
        // The photo fills the space above the name block
        let name_block_top_mm = NAME_BASELINE_MM + name_lines.len() as f32 * name_line_height_mm;
        if let Err(e) = embed_photo(layer, path, name_block_top_mm) {
            println!("  Warning: could not render photo for {}: {}", record.name, e);
        }
    }
}

fn embed_photo(layer: &PdfLayerReference, path: &Path, bottom_limit_mm: f32) -> Result<()> {
    let decoded = image_crate::open(path)
        .map_err(|e| PhotoRosterError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    let (px_w, px_h) = decoded.dimensions();

    // Flatten to RGB; alpha channels do not survive embedding
    let rgb = image_crate::DynamicImage::ImageRgb8(decoded.to_rgb8());
    let image = Image::from_dynamic_image(&rgb);

    let native_w_mm = px_w as f32 * 25.4 / EMBED_DPI;
    let native_h_mm = px_h as f32 * 25.4 / EMBED_DPI;

    let max_w_mm = A4_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;
    let max_h_mm = A4_HEIGHT_MM - TOP_MARGIN_MM - bottom_limit_mm - IMAGE_TEXT_GAP_MM;
    if max_h_mm <= 0.0 {
        // Name block so tall there is no room left for the photo
        return Ok(());
    }

    let scale = (max_w_mm / native_w_mm).min(max_h_mm / native_h_mm);
    let display_w_mm = native_w_mm * scale;
    let display_h_mm = native_h_mm * scale;

    let x_mm = (A4_WIDTH_MM - display_w_mm) / 2.0;
    let y_mm = A4_HEIGHT_MM - TOP_MARGIN_MM - display_h_mm;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(Mm(y_mm)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(EMBED_DPI),
            ..Default::default()
        },
    );

    Ok(())
}

fn draw_centered(
    layer: &PdfLayerReference,
    text: &str,
    font_size_pt: f32,
    baseline_mm: f32,
    font: &IndirectFontRef,
) {
    let width_mm = estimated_width_pt(text, font_size_pt) / PT_PER_MM;
    let x_mm = ((A4_WIDTH_MM - width_mm) / 2.0).max(SIDE_MARGIN_MM);
    layer.use_text(text, font_size_pt, Mm(x_mm), Mm(baseline_mm), font);
}

fn estimated_width_pt(text: &str, font_size_pt: f32) -> f32 {
    text.chars().count() as f32 * font_size_pt * AVG_GLYPH_WIDTH_EM
}

/// Greedy word wrap against the estimated line width.
fn wrap_words(text: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let max_width_pt = max_width_mm * PT_PER_MM;
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if estimated_width_pt(&candidate, font_size_pt) <= max_width_pt || line.is_empty() {
            line = candidate;
        } else {
            lines.push(line);
            line = word.to_string();
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap on comma-separated segments, rejoining with ", ".
fn wrap_commas(text: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let max_width_pt = max_width_mm * PT_PER_MM;
    let mut lines = Vec::new();
    let mut line = String::new();

    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let candidate = if line.is_empty() {
            segment.to_string()
        } else {
            format!("{}, {}", line, segment)
        };

        if estimated_width_pt(&candidate, font_size_pt) < max_width_pt || line.is_empty() {
            line = candidate;
        } else {
            lines.push(line);
            line = segment.to_string();
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
