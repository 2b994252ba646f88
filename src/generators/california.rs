//! California formation documents.

use chrono::NaiveDate;

use super::common::{execution_day, execution_month_year};
use super::layout::{FontWeight, PageLayout};
use crate::formation::models::CompanyFormation;

const AGENT_LINES: [&str; 3] = [
    "California Registered Agent, Inc.",
    "123 Main Street",
    "Los Angeles, CA 90001",
];

fn draw_agent(page: &mut PageLayout) {
    for (line, y) in AGENT_LINES.iter().zip([540.0, 520.0, 500.0]) {
        page.draw(70.0, y, *line);
    }
}

/// Articles of Incorporation under the California General Corporation Law.
pub fn articles_of_incorporation(
    heading: &str,
    formation: &CompanyFormation,
    executed_on: NaiveDate,
) -> PageLayout {
    let mut page = PageLayout::new(format!("Articles of Incorporation - {}", formation.company_name));

    page.set_font(FontWeight::Bold, 16.0)
        .draw_centred(300.0, 750.0, heading)
        .set_font(FontWeight::Regular, 12.0);

    page.draw(50.0, 700.0, "ARTICLE I: The name of this corporation is:")
        .draw(70.0, 680.0, formation.company_name.as_str());

    page.draw(50.0, 630.0, "ARTICLE II: The purpose of the corporation is to engage in any lawful act or activity")
        .draw(50.0, 610.0, "for which a corporation may be organized under the General Corporation Law of California.");

    page.draw(
        50.0,
        560.0,
        "ARTICLE III: The name and address in California of the corporation's initial agent for service of process is:",
    );
    draw_agent(&mut page);

    page.draw(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,")
        .draw(
            50.0,
            180.0,
            format!(
                "has executed these Articles of Incorporation this {} day of",
                execution_day(executed_on)
            ),
        )
        .draw(50.0, 160.0, format!("{}.", execution_month_year(executed_on)));

    page.draw(50.0, 100.0, "Incorporator:")
        .draw(70.0, 80.0, formation.incorporator_name.as_str());

    page
}

/// Articles of Organization under the California Revised Uniform LLC Act.
pub fn articles_of_organization(
    heading: &str,
    formation: &CompanyFormation,
    executed_on: NaiveDate,
) -> PageLayout {
    let mut page = PageLayout::new(format!("Articles of Organization - {}", formation.company_name));

    page.set_font(FontWeight::Bold, 16.0)
        .draw_centred(300.0, 750.0, heading)
        .set_font(FontWeight::Regular, 12.0);

    page.draw(50.0, 700.0, "ARTICLE I: The name of the limited liability company is:")
        .draw(70.0, 680.0, formation.company_name.as_str());

    page.draw(
        50.0,
        630.0,
        "ARTICLE II: The purpose of the limited liability company is to engage in any lawful business.",
    );

    page.draw(
        50.0,
        560.0,
        "ARTICLE III: The name and address in California of the LLC's initial agent for service of process is:",
    );
    draw_agent(&mut page);

    page.draw(
        50.0,
        200.0,
        format!(
            "IN WITNESS WHEREOF, the undersigned has executed these Articles of Organization this {} day of",
            execution_day(executed_on)
        ),
    )
    .draw(50.0, 180.0, format!("{}.", execution_month_year(executed_on)));

    page.draw(50.0, 100.0, "Authorized Person:")
        .draw(70.0, 80.0, formation.incorporator_name.as_str());

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::models::{CompanyType, StateCode};
    use crate::generators::formation::DocumentTemplate;

    fn formation(name: &str, company_type: CompanyType) -> CompanyFormation {
        CompanyFormation {
            company_name: name.to_string(),
            state: StateCode::California,
            company_type,
            incorporator_name: "Testy McTestface".to_string(),
            incorporator_address: None,
            county: None,
            shares: None,
            par_value: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    #[test]
    fn test_articles_of_incorporation() {
        let page = articles_of_incorporation(
            DocumentTemplate::CaliforniaArticlesOfIncorporation.heading(),
            &formation("California Test Corp", CompanyType::Corporation),
            date(),
        );

        assert!(page.contains("California Test Corp"));
        assert!(page.contains("ARTICLES OF INCORPORATION"));
        assert!(page.contains("ARTICLE I: The name of this corporation is:"));
        assert!(page.contains("ARTICLE II: The purpose of the corporation"));
        assert!(page.contains("ARTICLE III: The name and address in California"));
        assert!(page.contains("California Registered Agent, Inc."));
        assert!(page.contains("this 31 day of"));
        assert!(page.contains("December, 2024."));
        assert!(page.contains("Incorporator:"));
    }

    #[test]
    fn test_articles_of_organization() {
        let page = articles_of_organization(
            DocumentTemplate::CaliforniaArticlesOfOrganization.heading(),
            &formation("California Test LLC", CompanyType::Llc),
            date(),
        );

        assert!(page.contains("California Test LLC"));
        assert!(page.contains("ARTICLES OF ORGANIZATION"));
        assert!(page.contains("ARTICLE I: The name of the limited liability company is:"));
        assert!(page.contains("ARTICLE II: The purpose of the limited liability company"));
        assert!(page.contains("LLC's initial agent for service of process"));
        assert!(page.contains("Authorized Person:"));
        assert!(page.contains("Testy McTestface"));
    }
}
