//! Company formation HTTP surface: request models, handlers, example
//! payloads and the browser form.

pub mod examples;
pub mod handlers;
pub mod models;
pub mod page;

pub use handlers::config;
pub use models::{CompanyFormation, CompanyFormationForm, CompanyFormationRequest, CompanyType, StateCode};
