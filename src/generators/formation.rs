//! Template selection for formation documents.
//!
//! Each supported (jurisdiction, entity type) pair maps to exactly one fixed
//! template. Every other state code is rejected before anything is drawn.

use chrono::NaiveDate;

use super::common::{download_filename, today};
use super::engine::PdfRenderEngine;
use super::layout::PageLayout;
use super::traits::Generator;
use super::{california, delaware, new_york};
use super::{GeneratedDocument, GeneratorError};
use crate::formation::models::{CompanyFormation, CompanyType, StateCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentTemplate {
    DelawareCertificateOfIncorporation,
    DelawareCertificateOfFormation,
    CaliforniaArticlesOfIncorporation,
    CaliforniaArticlesOfOrganization,
    NewYorkCertificateOfIncorporation,
    NewYorkArticlesOfOrganization,
}

impl DocumentTemplate {
    pub fn select(state: StateCode, company_type: CompanyType) -> Result<Self, GeneratorError> {
        use CompanyType::*;
        use DocumentTemplate::*;

        match (state, company_type) {
            (StateCode::Delaware, Corporation) => Ok(DelawareCertificateOfIncorporation),
            (StateCode::Delaware, Llc) => Ok(DelawareCertificateOfFormation),
            (StateCode::California, Corporation) => Ok(CaliforniaArticlesOfIncorporation),
            (StateCode::California, Llc) => Ok(CaliforniaArticlesOfOrganization),
            (StateCode::NewYork, Corporation) => Ok(NewYorkCertificateOfIncorporation),
            (StateCode::NewYork, Llc) => Ok(NewYorkArticlesOfOrganization),
            (other, _) => Err(GeneratorError::UnsupportedJurisdiction {
                state: other.code().to_string(),
            }),
        }
    }

    /// Title printed at the top of the document.
    pub fn heading(self) -> &'static str {
        match self {
            DocumentTemplate::DelawareCertificateOfIncorporation
            | DocumentTemplate::NewYorkCertificateOfIncorporation => "CERTIFICATE OF INCORPORATION",
            DocumentTemplate::DelawareCertificateOfFormation => "CERTIFICATE OF FORMATION",
            DocumentTemplate::CaliforniaArticlesOfIncorporation => "ARTICLES OF INCORPORATION",
            DocumentTemplate::CaliforniaArticlesOfOrganization
            | DocumentTemplate::NewYorkArticlesOfOrganization => "ARTICLES OF ORGANIZATION",
        }
    }

    pub fn layout(self, formation: &CompanyFormation, executed_on: NaiveDate) -> PageLayout {
        match self {
            DocumentTemplate::DelawareCertificateOfIncorporation => {
                delaware::certificate_of_incorporation(self.heading(), formation, executed_on)
            }
            DocumentTemplate::DelawareCertificateOfFormation => {
                delaware::certificate_of_formation(self.heading(), formation, executed_on)
            }
            DocumentTemplate::CaliforniaArticlesOfIncorporation => {
                california::articles_of_incorporation(self.heading(), formation, executed_on)
            }
            DocumentTemplate::CaliforniaArticlesOfOrganization => {
                california::articles_of_organization(self.heading(), formation, executed_on)
            }
            DocumentTemplate::NewYorkCertificateOfIncorporation => {
                new_york::certificate_of_incorporation(self.heading(), formation)
            }
            DocumentTemplate::NewYorkArticlesOfOrganization => {
                new_york::articles_of_organization(self.heading(), formation)
            }
        }
    }
}

/// Generator for state formation documents.
///
/// Execution clauses are dated today unless a date is pinned with
/// [`FormationGenerator::with_date`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormationGenerator {
    executed_on: Option<NaiveDate>,
}

impl FormationGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(executed_on: NaiveDate) -> Self {
        Self {
            executed_on: Some(executed_on),
        }
    }

    /// Select the template and lay the document out without rendering it.
    pub fn layout(&self, formation: &CompanyFormation) -> Result<PageLayout, GeneratorError> {
        let template = DocumentTemplate::select(formation.state, formation.company_type)?;
        let executed_on = self.executed_on.unwrap_or_else(today);
        Ok(template.layout(formation, executed_on))
    }
}

impl Generator<CompanyFormation> for FormationGenerator {
    fn generate(&self, formation: CompanyFormation) -> Result<GeneratedDocument, GeneratorError> {
        let layout = self.layout(&formation)?;
        PdfRenderEngine::render(&layout, download_filename(&formation.company_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::layout::FontWeight;

    fn formation(state: StateCode, company_type: CompanyType) -> CompanyFormation {
        CompanyFormation {
            company_name: "Dispatch Test Co".to_string(),
            state,
            company_type,
            incorporator_name: "Pat Lee".to_string(),
            incorporator_address: None,
            county: None,
            shares: None,
            par_value: None,
        }
    }

    #[test]
    fn test_select_supported_pairs() {
        let cases = [
            (StateCode::Delaware, CompanyType::Corporation, "CERTIFICATE OF INCORPORATION"),
            (StateCode::Delaware, CompanyType::Llc, "CERTIFICATE OF FORMATION"),
            (StateCode::California, CompanyType::Corporation, "ARTICLES OF INCORPORATION"),
            (StateCode::California, CompanyType::Llc, "ARTICLES OF ORGANIZATION"),
            (StateCode::NewYork, CompanyType::Corporation, "CERTIFICATE OF INCORPORATION"),
            (StateCode::NewYork, CompanyType::Llc, "ARTICLES OF ORGANIZATION"),
        ];

        for (state, company_type, heading) in cases {
            let template = DocumentTemplate::select(state, company_type).unwrap();
            assert_eq!(template.heading(), heading);

            let layout = FormationGenerator::new().layout(&formation(state, company_type)).unwrap();
            let title = &layout.lines[0];
            assert_eq!(title.text, heading);
            assert_eq!(title.weight, FontWeight::Bold);
        }
    }

    #[test]
    fn test_every_other_state_is_rejected() {
        let supported = [StateCode::Delaware, StateCode::California, StateCode::NewYork];
        for state in StateCode::ALL.iter().filter(|s| !supported.contains(*s)) {
            for company_type in [CompanyType::Corporation, CompanyType::Llc] {
                let err = DocumentTemplate::select(*state, company_type).unwrap_err();
                assert!(matches!(
                    err,
                    GeneratorError::UnsupportedJurisdiction { state: ref code } if code == state.code()
                ));
            }
        }
    }

    #[test]
    fn test_unsupported_error_message() {
        let err = FormationGenerator::new()
            .generate(formation(StateCode::Texas, CompanyType::Llc))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only Delaware, California, and New York entities are supported at this time"
        );
    }

    #[test]
    fn test_pinned_date_is_used() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        let layout = FormationGenerator::with_date(date)
            .layout(&formation(StateCode::Delaware, CompanyType::Llc))
            .unwrap();
        assert!(layout.contains("this 04 day of"));
        assert!(layout.contains("July, 2023."));
    }

    #[test]
    fn test_generate_names_attachment_after_company() {
        let doc = FormationGenerator::new()
            .generate(formation(StateCode::NewYork, CompanyType::Corporation))
            .unwrap();
        assert_eq!(doc.filename, "Dispatch Test Co_certificate.pdf");
        assert_eq!(doc.title, "Certificate of Incorporation - Dispatch Test Co");
        assert!(doc.pdf.starts_with(b"%PDF"));
    }
}
