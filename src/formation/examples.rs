use super::models::CompanyFormationRequest;

fn basic(name: &str, state: &str, company_type: &str, incorporator: &str) -> CompanyFormationRequest {
    CompanyFormationRequest {
        company_name: name.to_string(),
        state_of_formation: state.to_string(),
        company_type: company_type.to_string(),
        incorporator_name: incorporator.to_string(),
        ..Default::default()
    }
}

/// One valid request per supported template.
pub fn example_requests() -> Vec<CompanyFormationRequest> {
    vec![
        basic("Acme Corp, Inc.", "DE", "corporation", "John Smith"),
        basic("Smith & Sons, LLC", "DE", "LLC", "Jane Doe"),
        basic("Tech Innovators Co.", "CA", "corporation", "Michael Johnson"),
        basic("California Dreaming, LLC", "CA", "LLC", "Emily Chen"),
        CompanyFormationRequest {
            incorporator_address: Some("418 Broadway Ste Y, Albany, Albany County, NY 12207".to_string()),
            county: Some("Albany County".to_string()),
            shares: Some(1000),
            par_value: Some(0.01),
            ..basic("Empire State Corp.", "NY", "corporation", "Sarah Williams")
        },
        CompanyFormationRequest {
            incorporator_address: Some("123 Main Street, New York, NY 10001".to_string()),
            county: Some("New York County".to_string()),
            ..basic("Big Apple Ventures, LLC", "NY", "LLC", "David Chen")
        },
    ]
}
