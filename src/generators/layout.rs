//! Positioned-text page model.
//!
//! Templates describe a document as lines of text placed on a US Letter page,
//! in points measured from the bottom-left corner. The engine turns a
//! `PageLayout` into PDF drawing operations.

use super::metrics::text_width;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A single run of text at an absolute position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title: String,
    pub lines: Vec<TextLine>,
    weight: FontWeight,
    size: f32,
}

impl PageLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            weight: FontWeight::Regular,
            size: 12.0,
        }
    }

    /// Font used by subsequent `draw` calls.
    pub fn set_font(&mut self, weight: FontWeight, size: f32) -> &mut Self {
        self.weight = weight;
        self.size = size;
        self
    }

    pub fn draw(&mut self, x: f32, y: f32, text: impl Into<String>) -> &mut Self {
        self.lines.push(TextLine {
            text: text.into(),
            x,
            y,
            size: self.size,
            weight: self.weight,
        });
        self
    }

    /// Draw `text` horizontally centred on `center_x`.
    pub fn draw_centred(&mut self, center_x: f32, y: f32, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        let x = center_x - text_width(&text, self.weight, self.size) / 2.0;
        self.draw(x, y, text)
    }

    /// Draw a bold clause label followed by regular text on the same baseline.
    pub fn draw_clause(
        &mut self,
        label_x: f32,
        text_x: f32,
        y: f32,
        label: &str,
        text: impl Into<String>,
    ) -> &mut Self {
        let size = self.size;
        self.set_font(FontWeight::Bold, size)
            .draw(label_x, y, label)
            .set_font(FontWeight::Regular, size)
            .draw(text_x, y, text)
    }

    /// Every line's text, top to bottom, one per line.
    pub fn text(&self) -> String {
        let mut lines: Vec<&TextLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));
        lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }
}
