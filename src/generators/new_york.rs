//! New York formation documents, laid out after the Department of State
//! sample certificates.
//!
//! Neither document is dated; both close with the signer block and the
//! filer's name and address. County, shares, par value and the mailing
//! address fall back to the defaults on `CompanyFormation`.

use super::layout::{FontWeight, PageLayout};
use crate::formation::models::CompanyFormation;

const LABEL_X: f32 = 50.0;
const CLAUSE_X: f32 = 100.0;
const VALUE_X: f32 = 70.0;

/// Wording of the FOURTH clause share authorization.
pub fn share_clause(shares: u64, par_value: f64) -> String {
    if par_value > 0.0 {
        format!("{} common shares with ${:.2} par value per share.", shares, par_value)
    } else {
        format!("{} common shares without par value.", shares)
    }
}

fn draw_heading(page: &mut PageLayout, title: &str, company_name: &str, statute: &str) {
    page.set_font(FontWeight::Bold, 14.0)
        .draw_centred(300.0, 750.0, title)
        .draw_centred(300.0, 730.0, "OF")
        .draw_centred(300.0, 710.0, company_name)
        .set_font(FontWeight::Regular, 11.0)
        .draw_centred(300.0, 690.0, statute);
}

fn draw_signatures(page: &mut PageLayout, role: &str, signer: &str, address: &str) {
    let signature = format!("/s/ {}", signer);
    page.draw(LABEL_X, 180.0, role)
        .draw(VALUE_X, 160.0, signature.as_str())
        .draw(VALUE_X, 140.0, address)
        .draw(LABEL_X, 100.0, "Filer's Name and Address:")
        .draw(VALUE_X, 80.0, signature)
        .draw(VALUE_X, 60.0, address);
}

/// Certificate of Incorporation under Section 402 of the Business Corporation Law.
pub fn certificate_of_incorporation(heading: &str, formation: &CompanyFormation) -> PageLayout {
    let county = formation.county_or_default();
    let address = formation.incorporator_address_or_default();
    let mut page = PageLayout::new(format!("Certificate of Incorporation - {}", formation.company_name));

    draw_heading(
        &mut page,
        heading,
        &formation.company_name,
        "Under Section 402 of the Business Corporation Law",
    );

    page.draw_clause(LABEL_X, CLAUSE_X, 650.0, "FIRST:", "The name of this corporation is:")
        .draw(VALUE_X, 630.0, formation.company_name.as_str());

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        590.0,
        "SECOND:",
        "The purpose of the corporation is to engage in any lawful act or activity for which",
    )
    .draw(LABEL_X, 570.0, "a corporation may be organized under the Business Corporation Law. The corporation is not")
    .draw(LABEL_X, 550.0, "formed to engage in any act or activity requiring the consent or approval of any state official,")
    .draw(LABEL_X, 530.0, "department, board, agency or other body without such consent or approval first being obtained.");

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        490.0,
        "THIRD:",
        "The county, within this state, in which the office of the corporation is to be located",
    )
    .draw(LABEL_X, 470.0, format!("is: {}.", county));

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        430.0,
        "FOURTH:",
        "The corporation shall have authority to issue one class of shares consisting of",
    )
    .draw(
        LABEL_X,
        410.0,
        share_clause(formation.shares_or_default(), formation.par_value_or_default()),
    );

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        370.0,
        "FIFTH:",
        "The Secretary of State is designated as agent of the corporation upon whom process",
    )
    .draw(LABEL_X, 350.0, "against the corporation may be served.")
    .draw(LABEL_X, 330.0, "The post office address to which the Secretary of State shall mail a copy of any process")
    .draw(LABEL_X, 310.0, "against the corporation served upon the Secretary of State by personal delivery is:")
    .draw(VALUE_X, 290.0, address);

    draw_signatures(&mut page, "Incorporator:", &formation.incorporator_name, address);
    page
}

/// Articles of Organization under Section 203 of the Limited Liability Company Law.
pub fn articles_of_organization(heading: &str, formation: &CompanyFormation) -> PageLayout {
    let county = formation.county_or_default();
    let address = formation.incorporator_address_or_default();
    let mut page = PageLayout::new(format!("Articles of Organization - {}", formation.company_name));

    draw_heading(
        &mut page,
        heading,
        &formation.company_name,
        "Under Section 203 of the Limited Liability Company Law",
    );

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        650.0,
        "FIRST:",
        "The name of the limited liability company is:",
    )
    .draw(VALUE_X, 630.0, formation.company_name.as_str());

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        590.0,
        "SECOND:",
        "The purpose of the limited liability company is to engage in any lawful act or activity",
    )
    .draw(
        LABEL_X,
        570.0,
        "for which limited liability companies may be organized under the Limited Liability Company Law.",
    );

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        530.0,
        "THIRD:",
        "The county, within this state, in which the office of the limited liability company is",
    )
    .draw(LABEL_X, 510.0, format!("to be located is: {}.", county));

    page.draw_clause(
        LABEL_X,
        CLAUSE_X,
        470.0,
        "FOURTH:",
        "The Secretary of State is designated as agent of the limited liability company upon",
    )
    .draw(LABEL_X, 450.0, "whom process against it may be served.")
    .draw(LABEL_X, 430.0, "The post office address to which the Secretary of State shall mail a copy of any process")
    .draw(LABEL_X, 410.0, "against the limited liability company served upon the Secretary of State is:")
    .draw(VALUE_X, 390.0, address);

    draw_signatures(&mut page, "Organizer:", &formation.incorporator_name, address);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::models::{CompanyType, StateCode};
    use crate::generators::formation::DocumentTemplate;

    fn albany_corporation() -> CompanyFormation {
        CompanyFormation {
            company_name: "Test Company".to_string(),
            state: StateCode::NewYork,
            company_type: CompanyType::Corporation,
            incorporator_name: "Testy McTestface".to_string(),
            incorporator_address: Some("418 BROADWAY STE Y, ALBANY, ALBANY COUNTY, NY 12207".to_string()),
            county: Some("ALBANY COUNTY".to_string()),
            shares: Some(1000),
            par_value: Some(0.01),
        }
    }

    fn minimal(company_type: CompanyType) -> CompanyFormation {
        CompanyFormation {
            company_name: "Default Values Corp".to_string(),
            state: StateCode::NewYork,
            company_type,
            incorporator_name: "Jane Doe".to_string(),
            incorporator_address: None,
            county: None,
            shares: None,
            par_value: None,
        }
    }

    #[test]
    fn test_share_clause_wording() {
        assert_eq!(share_clause(1000, 0.01), "1000 common shares with $0.01 par value per share.");
        assert_eq!(share_clause(500, 1.5), "500 common shares with $1.50 par value per share.");
        assert_eq!(share_clause(200, 0.0), "200 common shares without par value.");
    }

    #[test]
    fn test_corporation_matches_sample_certificate() {
        let page = certificate_of_incorporation(
            DocumentTemplate::NewYorkCertificateOfIncorporation.heading(),
            &albany_corporation(),
        );

        for element in [
            "CERTIFICATE OF INCORPORATION",
            "Test Company",
            "Under Section 402 of the Business Corporation Law",
            "FIRST:",
            "The name of this corporation is:",
            "SECOND:",
            "consent or approval",
            "THIRD:",
            "is: ALBANY COUNTY.",
            "FOURTH:",
            "authority to issue one class of shares",
            "1000 common shares with $0.01 par value per share.",
            "FIFTH:",
            "Secretary of State is designated as agent",
            "418 BROADWAY STE Y",
            "Incorporator:",
            "/s/ Testy McTestface",
            "Filer's Name and Address:",
        ] {
            assert!(page.contains(element), "missing element: {element}");
        }
    }

    #[test]
    fn test_corporation_defaults() {
        let page = certificate_of_incorporation(
            DocumentTemplate::NewYorkCertificateOfIncorporation.heading(),
            &minimal(CompanyType::Corporation),
        );

        assert!(page.contains("is: NEW YORK COUNTY."));
        assert!(page.contains("200 common shares without par value."));
        assert!(page.contains("123 Main Street, Albany, NY 12207"));
    }

    #[test]
    fn test_county_is_upper_cased() {
        let mut formation = minimal(CompanyType::Llc);
        formation.county = Some("Kings County".to_string());
        let page = articles_of_organization(
            DocumentTemplate::NewYorkArticlesOfOrganization.heading(),
            &formation,
        );
        assert!(page.contains("to be located is: KINGS COUNTY."));
    }

    #[test]
    fn test_llc_matches_sample_articles() {
        let mut formation = albany_corporation();
        formation.company_type = CompanyType::Llc;
        let page = articles_of_organization(
            DocumentTemplate::NewYorkArticlesOfOrganization.heading(),
            &formation,
        );

        for element in [
            "ARTICLES OF ORGANIZATION",
            "Under Section 203 of the Limited Liability Company Law",
            "The name of the limited liability company is:",
            "ALBANY COUNTY",
            "Secretary of State is designated as agent of the limited liability company",
            "418 BROADWAY STE Y",
            "Organizer:",
            "Filer's Name and Address:",
        ] {
            assert!(page.contains(element), "missing element: {element}");
        }
        assert!(!page.contains("FIFTH:"));
        assert!(!page.contains("common shares"));
    }

    #[test]
    fn test_clause_labels_are_bold() {
        let page = certificate_of_incorporation(
            DocumentTemplate::NewYorkCertificateOfIncorporation.heading(),
            &minimal(CompanyType::Corporation),
        );
        let labels: Vec<&str> = page
            .lines
            .iter()
            .filter(|line| line.weight == FontWeight::Bold && line.size == 11.0)
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(labels, vec!["FIRST:", "SECOND:", "THIRD:", "FOURTH:", "FIFTH:"]);
    }
}
