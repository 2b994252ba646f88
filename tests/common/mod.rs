use chrono::NaiveDate;
use company_formation_server::formation::CompanyFormationRequest;
use company_formation_server::FormationGenerator;

/// Generator pinned to a fixed execution date so dated clauses are stable.
pub fn pinned_generator() -> FormationGenerator {
    FormationGenerator::with_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
}

pub fn request(name: &str, state: &str, company_type: &str, incorporator: &str) -> CompanyFormationRequest {
    CompanyFormationRequest {
        company_name: name.to_string(),
        state_of_formation: state.to_string(),
        company_type: company_type.to_string(),
        incorporator_name: incorporator.to_string(),
        ..Default::default()
    }
}

/// Parse PDF bytes and return the text of every page.
pub fn extract_pdf_text(pdf: &[u8]) -> String {
    let document = lopdf::Document::load_mem(pdf).expect("output should parse as a PDF");
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    assert!(!pages.is_empty(), "PDF has no pages");
    document
        .extract_text(&pages)
        .expect("PDF text should be extractable")
}
