//! Traits for generator system standardization.

use super::validation::ValidationErrors;
use super::{GeneratedDocument, GeneratorError};

/// Trait for validating raw request objects into their checked form.
pub trait Validator {
    type Output;

    /// Validate the request, collecting every problem found.
    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: Req) -> Result<GeneratedDocument, GeneratorError>;
}
