//! PDF rendering for the report document.
//!
//! A4 portrait, builtin Helvetica, title once on the first page and one text
//! line per record. Content depends only on the report, so exporting the
//! same history twice produces the same document.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::{ExportError, Result};
use crate::report::Report;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
/// Vertical space reserved for the title block on every page. The title is
/// only drawn on the first page; keeping the reservation uniform keeps the
/// slot math page-independent.
const HEADER_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_SIZE_PT: f32 = 16.0;
const LINE_SIZE_PT: f32 = 11.0;

/// Item lines that fit on one page.
pub fn lines_per_page() -> usize {
    ((A4_HEIGHT_MM - 2.0 * MARGIN_MM - HEADER_MM) / LINE_HEIGHT_MM) as usize
}

/// Baseline Y of an item slot, measured from the page bottom (PDF origin).
pub fn line_y_mm(slot: usize) -> f32 {
    A4_HEIGHT_MM - MARGIN_MM - HEADER_MM - (slot as f32 + 1.0) * LINE_HEIGHT_MM
}

fn title_y_mm() -> f32 {
    A4_HEIGHT_MM - MARGIN_MM - 8.0
}

/// Render the report to `output_path`. An empty report produces a document
/// with the title and no item lines.
pub fn render_report(report: &Report, output_path: &Path) -> Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        &report.title,
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::PdfGeneration(format!("builtin font: {:?}", e)))?;

    let first_layer = doc.get_page(page1).get_layer(layer1);
    first_layer.use_text(
        &report.title,
        TITLE_SIZE_PT,
        Mm(MARGIN_MM),
        Mm(title_y_mm()),
        &font,
    );

    let per_page = lines_per_page();
    for (page_index, chunk) in report.lines.chunks(per_page).enumerate() {
        let layer = if page_index == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page, layer) = doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };
        draw_lines(&layer, chunk, &font);
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::PdfGeneration(format!("save: {:?}", e)))?;

    Ok(())
}

fn draw_lines(layer: &PdfLayerReference, lines: &[String], font: &IndirectFontRef) {
    for (slot, line) in lines.iter().enumerate() {
        layer.use_text(line, LINE_SIZE_PT, Mm(MARGIN_MM), Mm(line_y_mm(slot)), font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_per_page_fits_on_page() {
        let per_page = lines_per_page();
        assert!(per_page > 0);
        // the last slot must still sit above the bottom margin
        assert!(line_y_mm(per_page - 1) >= MARGIN_MM);
    }

    #[test]
    fn test_line_slots_descend() {
        assert!(line_y_mm(0) > line_y_mm(1));
        assert!(line_y_mm(1) > line_y_mm(2));
    }

    #[test]
    fn test_first_line_sits_below_title() {
        assert!(line_y_mm(0) < title_y_mm());
    }
}
