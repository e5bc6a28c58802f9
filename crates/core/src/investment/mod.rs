//! Investment module - return on investment, payback and partner shares.

mod investment_calculator;
mod investment_model;

pub use investment_calculator::{compute_roi, partner_contributions};
pub use investment_model::{InvestmentResult, PartnerContribution, Payback};
