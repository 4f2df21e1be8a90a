//! Investments module - entry records, the entry form, and the ledger that owns them.

mod investment_form;
mod investment_ledger;
mod investments_constants;
mod investments_errors;
mod investments_model;
mod investments_traits;


#[cfg(test)]
mod investments_model_tests;

pub use investment_form::{FormSnapshot, InvestmentEntryForm};
pub use investment_ledger::InvestmentLedger;
pub use investments_constants::*;
pub use investments_errors::InvestmentError;
pub use investments_model::{
    generate_investment_id, parse_decimal_input, Investment, InvestmentSummary, InvestmentType,
};
pub use investments_traits::{InvestmentSink, MockInvestmentSink};
