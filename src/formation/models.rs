use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::generators::validation::{
    parse_optional_number, validate_company_name, validate_company_type, validate_par_value,
    validate_printable, validate_required, validate_state, ValidationErrors,
};
use crate::generators::Validator;

pub const DEFAULT_NY_COUNTY: &str = "NEW YORK COUNTY";
pub const DEFAULT_NY_SHARES: u64 = 200;
pub const DEFAULT_NY_PAR_VALUE: f64 = 0.0;
pub const DEFAULT_NY_ADDRESS: &str = "123 Main Street, Albany, NY 12207";

macro_rules! state_codes {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        /// US states, the District of Columbia and inhabited territories.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StateCode {
            $($variant),+
        }

        impl StateCode {
            pub const ALL: &'static [StateCode] = &[$(StateCode::$variant),+];

            /// Two-letter postal code.
            pub fn code(self) -> &'static str {
                match self {
                    $(StateCode::$variant => $code),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(StateCode::$variant => $name),+
                }
            }
        }

        impl FromStr for StateCode {
            type Err = UnknownStateCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $($code => Ok(StateCode::$variant),)+
                    _ => Err(UnknownStateCode(s.to_string())),
                }
            }
        }
    };
}

state_codes! {
    Alabama => ("AL", "Alabama"),
    Alaska => ("AK", "Alaska"),
    Arizona => ("AZ", "Arizona"),
    Arkansas => ("AR", "Arkansas"),
    California => ("CA", "California"),
    Colorado => ("CO", "Colorado"),
    Connecticut => ("CT", "Connecticut"),
    Delaware => ("DE", "Delaware"),
    Florida => ("FL", "Florida"),
    Georgia => ("GA", "Georgia"),
    Hawaii => ("HI", "Hawaii"),
    Idaho => ("ID", "Idaho"),
    Illinois => ("IL", "Illinois"),
    Indiana => ("IN", "Indiana"),
    Iowa => ("IA", "Iowa"),
    Kansas => ("KS", "Kansas"),
    Kentucky => ("KY", "Kentucky"),
    Louisiana => ("LA", "Louisiana"),
    Maine => ("ME", "Maine"),
    Maryland => ("MD", "Maryland"),
    Massachusetts => ("MA", "Massachusetts"),
    Michigan => ("MI", "Michigan"),
    Minnesota => ("MN", "Minnesota"),
    Mississippi => ("MS", "Mississippi"),
    Missouri => ("MO", "Missouri"),
    Montana => ("MT", "Montana"),
    Nebraska => ("NE", "Nebraska"),
    Nevada => ("NV", "Nevada"),
    NewHampshire => ("NH", "New Hampshire"),
    NewJersey => ("NJ", "New Jersey"),
    NewMexico => ("NM", "New Mexico"),
    NewYork => ("NY", "New York"),
    NorthCarolina => ("NC", "North Carolina"),
    NorthDakota => ("ND", "North Dakota"),
    Ohio => ("OH", "Ohio"),
    Oklahoma => ("OK", "Oklahoma"),
    Oregon => ("OR", "Oregon"),
    Pennsylvania => ("PA", "Pennsylvania"),
    RhodeIsland => ("RI", "Rhode Island"),
    SouthCarolina => ("SC", "South Carolina"),
    SouthDakota => ("SD", "South Dakota"),
    Tennessee => ("TN", "Tennessee"),
    Texas => ("TX", "Texas"),
    Utah => ("UT", "Utah"),
    Vermont => ("VT", "Vermont"),
    Virginia => ("VA", "Virginia"),
    Washington => ("WA", "Washington"),
    WestVirginia => ("WV", "West Virginia"),
    Wisconsin => ("WI", "Wisconsin"),
    Wyoming => ("WY", "Wyoming"),
    DistrictOfColumbia => ("DC", "District of Columbia"),
    PuertoRico => ("PR", "Puerto Rico"),
    Guam => ("GU", "Guam"),
    VirginIslands => ("VI", "U.S. Virgin Islands"),
    AmericanSamoa => ("AS", "American Samoa"),
    NorthernMarianaIslands => ("MP", "Northern Mariana Islands"),
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStateCode(pub String);

impl fmt::Display for UnknownStateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown state or territory code '{}'", self.0)
    }
}

impl std::error::Error for UnknownStateCode {}

/// Entity type being formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyType {
    Corporation,
    Llc,
}

impl CompanyType {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyType::Corporation => "corporation",
            CompanyType::Llc => "LLC",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corporation" => Ok(CompanyType::Corporation),
            "LLC" => Ok(CompanyType::Llc),
            other => Err(format!("unsupported company type '{}'", other)),
        }
    }
}

/// Company formation request as received over the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CompanyFormationRequest {
    /// Letters, digits, spaces, commas, periods, apostrophes and ampersands only
    #[serde(default)]
    #[schema(example = "Acme Corp, Inc.")]
    pub company_name: String,
    /// Two-letter US state or territory code
    #[serde(default)]
    #[schema(example = "DE")]
    pub state_of_formation: String,
    /// Either `corporation` or `LLC`
    #[serde(default)]
    #[schema(example = "corporation")]
    pub company_type: String,
    #[serde(default)]
    #[schema(example = "John Smith")]
    pub incorporator_name: String,
    /// New York only; defaults to an Albany address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incorporator_address: Option<String>,
    /// New York only; defaults to NEW YORK COUNTY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// New York corporations only; defaults to 200
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    /// New York corporations only; 0 means shares without par value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_value: Option<f64>,
}

/// Form-encoded submission. Browsers send every field as text, and blank
/// inputs for fields the user left empty.
#[derive(Deserialize, Debug, Default)]
pub struct CompanyFormationForm {
    pub company_name: Option<String>,
    pub state_of_formation: Option<String>,
    pub company_type: Option<String>,
    pub incorporator_name: Option<String>,
    pub incorporator_address: Option<String>,
    pub county: Option<String>,
    pub shares: Option<String>,
    pub par_value: Option<String>,
}

impl TryFrom<CompanyFormationForm> for CompanyFormationRequest {
    type Error = ValidationErrors;

    fn try_from(form: CompanyFormationForm) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        let shares = parse_optional_number(form.shares.as_deref(), "shares", "Shares", &mut errors);
        let par_value =
            parse_optional_number(form.par_value.as_deref(), "par_value", "Par value", &mut errors);
        errors.into_result()?;

        Ok(Self {
            company_name: form.company_name.unwrap_or_default(),
            state_of_formation: form.state_of_formation.unwrap_or_default(),
            company_type: form.company_type.unwrap_or_default(),
            incorporator_name: form.incorporator_name.unwrap_or_default(),
            incorporator_address: non_blank(form.incorporator_address),
            county: non_blank(form.county),
            shares,
            par_value,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A validated formation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyFormation {
    pub company_name: String,
    pub state: StateCode,
    pub company_type: CompanyType,
    pub incorporator_name: String,
    pub incorporator_address: Option<String>,
    pub county: Option<String>,
    pub shares: Option<u64>,
    pub par_value: Option<f64>,
}

impl CompanyFormation {
    /// County of the office, upper-cased; NEW YORK COUNTY when not given.
    pub fn county_or_default(&self) -> String {
        self.county
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_NY_COUNTY)
            .to_uppercase()
    }

    /// Authorized shares; a missing or zero count falls back to 200.
    pub fn shares_or_default(&self) -> u64 {
        match self.shares {
            Some(shares) if shares > 0 => shares,
            _ => DEFAULT_NY_SHARES,
        }
    }

    pub fn par_value_or_default(&self) -> f64 {
        self.par_value.unwrap_or(DEFAULT_NY_PAR_VALUE)
    }

    pub fn incorporator_address_or_default(&self) -> &str {
        self.incorporator_address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_NY_ADDRESS)
    }
}

impl Validator for CompanyFormationRequest {
    type Output = CompanyFormation;

    fn validate(self) -> Result<CompanyFormation, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_company_name(&self.company_name, "company_name", &mut errors);
        validate_printable(&self.company_name, "company_name", "Company name", &mut errors);
        let state = validate_state(&self.state_of_formation, "state_of_formation", &mut errors);
        let company_type = validate_company_type(&self.company_type, "company_type", &mut errors);
        validate_required(
            &self.incorporator_name,
            "incorporator_name",
            "Incorporator name",
            &mut errors,
        );
        validate_printable(
            &self.incorporator_name,
            "incorporator_name",
            "Incorporator name",
            &mut errors,
        );
        if let Some(address) = &self.incorporator_address {
            validate_printable(address, "incorporator_address", "Incorporator address", &mut errors);
        }
        // Printed upper-cased; 'ÿ' and 'µ' upper-case outside Latin-1.
        if let Some(county) = &self.county {
            validate_printable(&county.to_uppercase(), "county", "County", &mut errors);
        }
        validate_par_value(self.par_value, "par_value", &mut errors);

        match (state, company_type) {
            (Some(state), Some(company_type)) if errors.is_empty() => Ok(CompanyFormation {
                company_name: self.company_name,
                state,
                company_type,
                incorporator_name: self.incorporator_name,
                incorporator_address: self.incorporator_address,
                county: self.county,
                shares: self.shares,
                par_value: self.par_value,
            }),
            _ => Err(errors),
        }
    }
}
