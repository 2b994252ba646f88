//! Generators module - business logic for rendering formation documents to PDF.
//!
//! One template per supported (jurisdiction, entity type) pair:
//! - `delaware` - Certificate of Incorporation / Certificate of Formation
//! - `california` - Articles of Incorporation / Articles of Organization
//! - `new_york` - Certificate of Incorporation (BCL §402) / Articles of Organization (LLCL §203)
//!
//! `formation` picks the template, `engine` draws the resulting layout.

pub mod california;
pub mod common;
pub mod delaware;
pub mod engine;
pub mod formation;
pub mod layout;
pub mod metrics;
pub mod new_york;
pub mod traits;
pub mod validation;

pub use engine::PdfRenderEngine;
pub use formation::{DocumentTemplate, FormationGenerator};
pub use layout::PageLayout;
pub use traits::{Generator, Validator};

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Only Delaware, California, and New York entities are supported at this time")]
    UnsupportedJurisdiction { state: String },
    #[error("failed to load built-in font: {0}")]
    Font(String),
    #[error("failed to write PDF: {0}")]
    Pdf(String),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub title: String,
    pub filename: String,
    pub pdf: Vec<u8>,
}
