//! Input validation module for formation requests.
//!
//! Provides clear, descriptive validation errors that name the offending
//! field and, where possible, how to fix it.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::formation::models::{CompanyType, StateCode};

lazy_static! {
    static ref COMPANY_NAME_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9\s,\.'&]+$").expect("company name pattern is valid");
}

/// Validation error with detailed, user-friendly messages.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must not be empty", label))
            .with_suggestion(format!("Provide a value for {}", label.to_lowercase()))
    }

    pub fn invalid_company_name(field: &str) -> Self {
        Self::new(
            field,
            "Company name can only contain alphanumeric characters, spaces, commas, periods, apostrophes, and ampersands",
        )
        .with_suggestion("Example: Smith & Sons, LLC")
    }

    pub fn invalid_state(field: &str) -> Self {
        Self::new(field, "Invalid US state or territory")
            .with_suggestion("Use a two-letter postal code such as DE, CA or NY")
    }

    pub fn invalid_company_type(field: &str) -> Self {
        Self::new(field, "Company type must be either 'corporation' or 'LLC'")
    }

    pub fn invalid_number(field: &str, label: &str, value: &str) -> Self {
        Self::new(field, format!("{} '{}' is not a valid number", label, value))
    }

    pub fn unsupported_characters(field: &str, label: &str, found: &[char]) -> Self {
        let listed: Vec<String> = found.iter().map(|c| format!("'{}'", c)).collect();
        Self::new(
            field,
            format!(
                "{} contains characters that cannot be printed: {}",
                label,
                listed.join(", ")
            ),
        )
        .with_suggestion("Use Latin letters (accents such as é or ñ are fine), digits and punctuation")
    }

    pub fn negative_par_value(field: &str) -> Self {
        Self::new(field, "Par value must be zero or a positive amount")
            .with_suggestion("Use 0 for shares without par value")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Formatted message suitable for an error response body.
    pub fn to_message(&self) -> String {
        match self.errors.as_slice() {
            [] => String::new(),
            [single] => single.to_string(),
            errors => {
                let mut parts = vec![format!(
                    "Validation failed: {} errors found",
                    errors.len()
                )];
                for (i, error) in errors.iter().enumerate() {
                    parts.push(format!("{}. {}", i + 1, error));
                }
                parts.join("\n")
            }
        }
    }

    /// Ok if no errors were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_message())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate the company name character set.
pub fn validate_company_name(value: &str, field: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, "Company name"));
        return;
    }

    if !COMPANY_NAME_PATTERN.is_match(value) {
        errors.add(ValidationError::invalid_company_name(field));
    }
}

/// Validate a state or territory code, case-insensitively.
pub fn validate_state(value: &str, field: &str, errors: &mut ValidationErrors) -> Option<StateCode> {
    match value.parse::<StateCode>() {
        Ok(state) => Some(state),
        Err(_) => {
            errors.add(ValidationError::invalid_state(field));
            None
        }
    }
}

/// Validate the entity type; the spelling must match exactly.
pub fn validate_company_type(
    value: &str,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<CompanyType> {
    match value.parse::<CompanyType>() {
        Ok(company_type) => Some(company_type),
        Err(_) => {
            errors.add(ValidationError::invalid_company_type(field));
            None
        }
    }
}

/// Characters the built-in PDF fonts can draw: printable ASCII and Latin-1.
fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}')
}

/// Validate that every character of a free-text field can be printed.
pub fn validate_printable(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    let mut found: Vec<char> = Vec::new();
    for c in value.chars().filter(|&c| !is_printable(c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }

    if !found.is_empty() {
        errors.add(ValidationError::unsupported_characters(field, label, &found));
    }
}

/// Validate par value - optional, only validated if provided
pub fn validate_par_value(value: Option<f64>, field: &str, errors: &mut ValidationErrors) {
    if let Some(par_value) = value {
        if !par_value.is_finite() || par_value < 0.0 {
            errors.add(ValidationError::negative_par_value(field));
        }
    }
}

/// Parse an optional numeric text field. Blank input counts as absent.
pub fn parse_optional_number<T: FromStr>(
    value: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;
    match trimmed.parse::<T>() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.add(ValidationError::invalid_number(field, label, trimmed));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_accepts_allowed_punctuation() {
        let mut errors = ValidationErrors::new();
        validate_company_name("Smith & Sons, L.L.C.", "company_name", &mut errors);
        validate_company_name("O'Brien Holdings", "company_name", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_company_name_rejects_other_symbols() {
        for name in ["Acme @ Corp", "Acme-Corp", "Acme (Holdings)", "Acme!"] {
            let mut errors = ValidationErrors::new();
            validate_company_name(name, "company_name", &mut errors);
            assert_eq!(errors.len(), 1, "{name} should be rejected");
        }
    }

    #[test]
    fn test_company_name_blank_is_required_error() {
        let mut errors = ValidationErrors::new();
        validate_company_name("   ", "company_name", &mut errors);
        assert!(errors.to_message().contains("Company name must not be empty"));
    }

    #[test]
    fn test_printable_accepts_latin_accents() {
        let mut errors = ValidationErrors::new();
        validate_printable("José Núñez", "incorporator_name", "Incorporator name", &mut errors);
        validate_printable("Zoë Brontë-Ørsted", "incorporator_name", "Incorporator name", &mut errors);
        validate_printable("12 Rue de l'Église, #4", "incorporator_address", "Incorporator address", &mut errors);
        assert!(errors.is_empty(), "{}", errors);
    }

    #[test]
    fn test_printable_rejects_characters_fonts_cannot_draw() {
        let mut errors = ValidationErrors::new();
        validate_printable("Łukasz Żółw", "incorporator_name", "Incorporator name", &mut errors);
        assert_eq!(errors.len(), 1);
        let msg = errors.to_message();
        assert!(msg.contains("[incorporator_name] Incorporator name contains characters that cannot be printed"));
        assert!(msg.contains("'Ł', 'Ż', 'ł'"));

        let mut errors = ValidationErrors::new();
        validate_printable("王伟", "incorporator_name", "Incorporator name", &mut errors);
        assert!(errors.to_message().contains("'王', '伟'"));

        let mut errors = ValidationErrors::new();
        validate_printable("Kings\tCounty", "county", "County", &mut errors);
        validate_printable("Smith \u{2019}s", "county", "County", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_parse_optional_number() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            parse_optional_number::<u64>(Some(" 1000 "), "shares", "Shares", &mut errors),
            Some(1000)
        );
        assert_eq!(parse_optional_number::<u64>(Some(""), "shares", "Shares", &mut errors), None);
        assert_eq!(parse_optional_number::<u64>(None, "shares", "Shares", &mut errors), None);
        assert!(errors.is_empty());

        assert_eq!(
            parse_optional_number::<f64>(Some("ten"), "par_value", "Par value", &mut errors),
            None
        );
        assert!(errors.to_message().contains("'ten' is not a valid number"));
    }

    #[test]
    fn test_par_value_rules() {
        let mut errors = ValidationErrors::new();
        validate_par_value(None, "par_value", &mut errors);
        validate_par_value(Some(0.0), "par_value", &mut errors);
        validate_par_value(Some(0.01), "par_value", &mut errors);
        assert!(errors.is_empty());

        validate_par_value(Some(-1.0), "par_value", &mut errors);
        validate_par_value(Some(f64::NAN), "par_value", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_message_lists_every_error() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::invalid_state("state_of_formation"));
        errors.add(ValidationError::invalid_company_type("company_type"));

        let msg = errors.to_message();
        assert!(msg.contains("2 errors"));
        assert!(msg.contains("1. [state_of_formation] Invalid US state or territory"));
        assert!(msg.contains("2. [company_type]"));
    }
}
