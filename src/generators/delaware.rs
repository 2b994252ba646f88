//! Delaware formation documents.
//!
//! Both documents name the same registered office in Wilmington. The
//! corporation's authorized stock is fixed at 1,000 common shares.

use chrono::NaiveDate;

use super::common::{execution_day, execution_month_year};
use super::layout::{FontWeight, PageLayout};
use crate::formation::models::CompanyFormation;

const REGISTERED_OFFICE: &str =
    "251 Little Falls Drive, Wilmington, New Castle County, Delaware 19808";

/// Certificate of Incorporation under the Delaware General Corporation Law.
pub fn certificate_of_incorporation(
    heading: &str,
    formation: &CompanyFormation,
    executed_on: NaiveDate,
) -> PageLayout {
    let mut page = PageLayout::new(format!("Certificate of Incorporation - {}", formation.company_name));

    page.set_font(FontWeight::Bold, 16.0)
        .draw_centred(300.0, 750.0, heading)
        .set_font(FontWeight::Regular, 12.0);

    page.draw(50.0, 700.0, "FIRST: The name of this corporation is:")
        .draw(70.0, 680.0, formation.company_name.as_str());

    page.draw(50.0, 630.0, "SECOND: Its registered office in the State of Delaware is located at:")
        .draw(70.0, 610.0, REGISTERED_OFFICE);

    page.draw(50.0, 560.0, "THIRD: The purpose of the corporation is to engage in any lawful act or activity for")
        .draw(50.0, 540.0, "which corporations may be organized under the General Corporation Law of Delaware.");

    page.draw(50.0, 490.0, "FOURTH: The total number of shares of stock which this corporation is authorized")
        .draw(50.0, 470.0, "to issue is 1,000 shares of Common Stock with $0.01 par value per share.");

    page.draw(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,")
        .draw(
            50.0,
            180.0,
            format!(
                "has executed this Certificate of Incorporation this {} day of",
                execution_day(executed_on)
            ),
        )
        .draw(50.0, 160.0, format!("{}.", execution_month_year(executed_on)));

    page.draw(50.0, 100.0, "Incorporator:")
        .draw(70.0, 80.0, formation.incorporator_name.as_str());

    page
}

/// Certificate of Formation under the Delaware Limited Liability Company Act.
pub fn certificate_of_formation(
    heading: &str,
    formation: &CompanyFormation,
    executed_on: NaiveDate,
) -> PageLayout {
    let mut page = PageLayout::new(format!("Certificate of Formation - {}", formation.company_name));

    page.set_font(FontWeight::Bold, 16.0)
        .draw_centred(300.0, 750.0, heading)
        .set_font(FontWeight::Regular, 12.0);

    page.draw(50.0, 700.0, "FIRST: The name of the limited liability company is:")
        .draw(70.0, 680.0, formation.company_name.as_str());

    page.draw(50.0, 630.0, "SECOND: The address of its registered office in the State of Delaware is:")
        .draw(70.0, 610.0, REGISTERED_OFFICE);

    page.draw(50.0, 560.0, "THIRD: The name and address of its registered agent in the State of Delaware is:")
        .draw(70.0, 540.0, "Corporation Service Company")
        .draw(70.0, 520.0, "251 Little Falls Drive")
        .draw(70.0, 500.0, "Wilmington, DE 19808");

    page.draw(50.0, 450.0, "FOURTH: The limited liability company shall be managed by its members.");

    page.draw(
        50.0,
        200.0,
        format!(
            "IN WITNESS WHEREOF, the undersigned has executed this Certificate of Formation this {} day of",
            execution_day(executed_on)
        ),
    )
    .draw(50.0, 180.0, format!("{}.", execution_month_year(executed_on)));

    page.draw(50.0, 100.0, "Authorized Person:")
        .draw(70.0, 80.0, formation.incorporator_name.as_str());

    page
}
