//! PDF rendering engine.
//!
//! Draws a `PageLayout` onto a single US Letter page using the standard
//! Helvetica faces built into every PDF reader, so no font files are needed.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use super::layout::{FontWeight, PageLayout, PAGE_HEIGHT, PAGE_WIDTH};
use super::{GeneratedDocument, GeneratorError};

const LAYER_NAME: &str = "Document";

/// Stateless engine for rendering page layouts to PDF.
pub struct PdfRenderEngine;

impl PdfRenderEngine {
    /// Render a layout to a PDF document.
    ///
    /// # Arguments
    /// * `layout` - The fully positioned page produced by a template.
    /// * `filename` - Attachment filename reported back to the client.
    pub fn render(layout: &PageLayout, filename: String) -> Result<GeneratedDocument, GeneratorError> {
        let pdf = draw_pdf(layout)?;

        Ok(GeneratedDocument {
            title: layout.title.clone(),
            filename,
            pdf,
        })
    }
}

fn draw_pdf(layout: &PageLayout) -> Result<Vec<u8>, GeneratorError> {
    let (doc, page, layer) = PdfDocument::new(
        layout.title.as_str(),
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| GeneratorError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| GeneratorError::Font(e.to_string()))?;

    let canvas = doc.get_page(page).get_layer(layer);
    for line in &layout.lines {
        let font = match line.weight {
            FontWeight::Regular => &regular,
            FontWeight::Bold => &bold,
        };
        canvas.use_text(
            line.text.as_str(),
            line.size,
            Mm::from(Pt(line.x)),
            Mm::from(Pt(line.y)),
            font,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| GeneratorError::Pdf(e.to_string()))
}
