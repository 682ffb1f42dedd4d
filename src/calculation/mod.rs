//! Calculation logic for the HR admin engine.
//!
//! This module contains the payroll decomposition: whole-unit rounding,
//! the salary breakdown with its audit trail, and writing the result back
//! into form state.

mod form;
mod rounding;
mod salary_breakdown;

pub use form::{apply_to_form, SalaryForm, BREAKDOWN_FIELDS};
pub use rounding::round_currency;
pub use salary_breakdown::{
    BASIC_SHARE_OF_MONTHLY, BreakdownResult, DA_SHARE_OF_BASIC, HRA_SHARE_OF_BASIC,
    MEDICAL_ALLOWANCE, PROVIDENT_FUND_SHARE_OF_BASIC, TRANSPORT_ALLOWANCE, compute_breakdown,
    compute_breakdown_with_audit,
};
