//! Writing a computed breakdown back into form state.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollPolicy;
use crate::models::{SalaryBreakdown, SalaryInput};

use super::salary_breakdown::compute_breakdown;

/// Form field names the breakdown is written under, in write order.
pub const BREAKDOWN_FIELDS: [&str; 8] = [
    "monthly_salary",
    "basic",
    "hra",
    "da",
    "medical_allowance",
    "transport",
    "provident_fund",
    "special_allowance",
];

/// Anything that accepts individual field values, such as the state behind
/// an employment form.
pub trait SalaryForm {
    /// Sets a single field.
    fn set_field(&mut self, name: &str, value: Decimal);
}

impl SalaryForm for HashMap<String, Decimal> {
    fn set_field(&mut self, name: &str, value: Decimal) {
        self.insert(name.to_string(), value);
    }
}

fn field_values(breakdown: &SalaryBreakdown) -> [Decimal; 8] {
    [
        breakdown.monthly_salary,
        breakdown.basic,
        breakdown.hra,
        breakdown.da,
        breakdown.medical_allowance,
        breakdown.transport,
        breakdown.provident_fund,
        breakdown.special_allowance,
    ]
}

/// Recomputes the breakdown for `input` and writes every field into `form`.
///
/// When the salary is absent or not positive nothing is written, so a user
/// part-way through typing never sees the form reset to zeros.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use hr_admin_engine::calculation::apply_to_form;
/// use hr_admin_engine::config::PayrollPolicy;
/// use hr_admin_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let mut form: HashMap<String, Decimal> = HashMap::new();
/// let input = SalaryInput::new(Decimal::from(1_200_000), true);
///
/// apply_to_form(&mut form, &input, &PayrollPolicy::default());
/// assert_eq!(form["hra"], Decimal::from(20_000));
/// ```
pub fn apply_to_form<F: SalaryForm + ?Sized>(
    form: &mut F,
    input: &SalaryInput,
    policy: &PayrollPolicy,
) -> Option<SalaryBreakdown> {
    let Some(breakdown) =
        compute_breakdown(input.annual_salary, input.include_provident_fund, policy)
    else {
        debug!("No positive annual salary present, leaving form fields untouched");
        return None;
    };

    for (name, value) in BREAKDOWN_FIELDS.iter().zip(field_values(&breakdown)) {
        form.set_field(name, value);
    }

    Some(breakdown)
}
