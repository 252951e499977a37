mod country;
mod country_rules;
mod family;
mod salary_components;
mod salary_result;
mod tax_bracket;

pub use country::Country;
pub use country_rules::{ContributionScheme, CountryRules, ExpenseBasis, RulesError};
pub use family::{FamilyProfile, FamilyStatus};
pub use salary_components::SalaryComponents;
pub use salary_result::{BracketLine, ContributionLine, SalaryResult};
pub use tax_bracket::TaxBracket;
