//! Salary breakdown calculation.
//!
//! Splits an annual salary into the monthly components printed on offer
//! letters and payslips: basic, HRA, DA, the two flat allowances, the
//! provident fund contribution and a special allowance that balances the
//! rest.

use rust_decimal::Decimal;

use crate::config::PayrollPolicy;
use crate::models::{AuditStep, AuditTrace, AuditWarning, SalaryBreakdown, SalaryInput};

use super::rounding::round_currency;

/// Flat monthly medical allowance.
pub const MEDICAL_ALLOWANCE: Decimal = Decimal::from_parts(1250, 0, 0, false, 0);

/// Flat monthly transport allowance.
pub const TRANSPORT_ALLOWANCE: Decimal = Decimal::from_parts(1600, 0, 0, false, 0);

/// Basic as a share of the monthly salary (40%).
pub const BASIC_SHARE_OF_MONTHLY: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// HRA as a share of basic (50%).
pub const HRA_SHARE_OF_BASIC: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// DA as a share of basic (10%).
pub const DA_SHARE_OF_BASIC: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Provident fund as a share of basic (12%).
pub const PROVIDENT_FUND_SHARE_OF_BASIC: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// A breakdown together with the audit trail that produced it.
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    /// The derived components.
    pub breakdown: SalaryBreakdown,
    /// One step per derived figure, plus any warnings.
    pub audit: AuditTrace,
}

/// Derives the monthly salary breakdown for an annual salary.
///
/// Returns `None` without computing anything when the salary is absent,
/// zero or negative. Callers merging the result into form state must then
/// leave the existing fields alone.
///
/// The special allowance always subtracts the provident fund figure
/// computed from basic, even when `include_provident_fund` is false and the
/// reported `provident_fund` is zero.
///
/// # Examples
///
/// ```
/// use hr_admin_engine::calculation::compute_breakdown;
/// use hr_admin_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let breakdown = compute_breakdown(Some(Decimal::from(1_200_000)), true, &policy).unwrap();
///
/// assert_eq!(breakdown.monthly_salary, Decimal::from(100_000));
/// assert_eq!(breakdown.basic, Decimal::from(40_000));
/// assert_eq!(breakdown.provident_fund, Decimal::from(4_800));
/// assert_eq!(breakdown.special_allowance, Decimal::from(28_350));
///
/// assert!(compute_breakdown(None, true, &policy).is_none());
/// ```
pub fn compute_breakdown(
    annual_salary: Option<Decimal>,
    include_provident_fund: bool,
    policy: &PayrollPolicy,
) -> Option<SalaryBreakdown> {
    let input = SalaryInput {
        annual_salary,
        include_provident_fund,
    };
    let annual_salary = input.positive_salary()?;

    let rates = &policy.rates;
    let allowances = &policy.fixed_allowances;

    let monthly_salary = round_currency(annual_salary / MONTHS_PER_YEAR);
    let basic = round_currency(monthly_salary * rates.basic_of_monthly);
    let hra = round_currency(basic * rates.hra_of_basic);
    let da = round_currency(basic * rates.da_of_basic);
    let provident_fund_term = round_currency(basic * rates.provident_fund_of_basic);

    let provident_fund = if include_provident_fund {
        provident_fund_term
    } else {
        Decimal::ZERO
    };

    let fixed_components = basic + hra + da + allowances.medical + allowances.transport;
    let balance = monthly_salary - fixed_components - provident_fund_term;

    Some(SalaryBreakdown {
        monthly_salary,
        basic,
        hra,
        da,
        medical_allowance: allowances.medical,
        transport: allowances.transport,
        provident_fund,
        special_allowance: balance.max(Decimal::ZERO),
        special_allowance_clamped: balance < Decimal::ZERO,
    })
}

/// Same as [`compute_breakdown`], with an audit trail.
pub fn compute_breakdown_with_audit(
    annual_salary: Option<Decimal>,
    include_provident_fund: bool,
    policy: &PayrollPolicy,
) -> Option<BreakdownResult> {
    let breakdown = compute_breakdown(annual_salary, include_provident_fund, policy)?;
    let annual_salary = annual_salary?;
    let rates = &policy.rates;

    let pct = |rate: Decimal| (rate * Decimal::ONE_HUNDRED).normalize();
    let provident_fund_term = round_currency(breakdown.basic * rates.provident_fund_of_basic);

    let mut steps = Vec::with_capacity(7);
    let mut push = |rule_id: &str,
                    rule_name: &str,
                    input: serde_json::Value,
                    output: serde_json::Value,
                    reasoning: String| {
        let step_number = steps.len() as u32 + 1;
        steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    };

    push(
        "monthly_salary",
        "Monthly Salary",
        serde_json::json!({ "annual_salary": annual_salary.normalize().to_string() }),
        serde_json::json!({ "monthly_salary": breakdown.monthly_salary.to_string() }),
        format!(
            "{} / 12 = {} (rounded)",
            annual_salary.normalize(),
            breakdown.monthly_salary
        ),
    );
    push(
        "basic",
        "Basic Pay",
        serde_json::json!({
            "monthly_salary": breakdown.monthly_salary.to_string(),
            "rate": rates.basic_of_monthly.normalize().to_string()
        }),
        serde_json::json!({ "basic": breakdown.basic.to_string() }),
        format!(
            "{}% of {} = {} (rounded)",
            pct(rates.basic_of_monthly),
            breakdown.monthly_salary,
            breakdown.basic
        ),
    );
    push(
        "hra",
        "House Rent Allowance",
        serde_json::json!({
            "basic": breakdown.basic.to_string(),
            "rate": rates.hra_of_basic.normalize().to_string()
        }),
        serde_json::json!({ "hra": breakdown.hra.to_string() }),
        format!(
            "{}% of basic {} = {} (rounded)",
            pct(rates.hra_of_basic),
            breakdown.basic,
            breakdown.hra
        ),
    );
    push(
        "da",
        "Dearness Allowance",
        serde_json::json!({
            "basic": breakdown.basic.to_string(),
            "rate": rates.da_of_basic.normalize().to_string()
        }),
        serde_json::json!({ "da": breakdown.da.to_string() }),
        format!(
            "{}% of basic {} = {} (rounded)",
            pct(rates.da_of_basic),
            breakdown.basic,
            breakdown.da
        ),
    );
    push(
        "fixed_allowances",
        "Fixed Allowances",
        serde_json::json!({ "jurisdiction": policy.jurisdiction }),
        serde_json::json!({
            "medical_allowance": breakdown.medical_allowance.to_string(),
            "transport": breakdown.transport.to_string()
        }),
        format!(
            "Flat medical allowance {} and transport allowance {}",
            breakdown.medical_allowance, breakdown.transport
        ),
    );
    push(
        "provident_fund",
        "Provident Fund",
        serde_json::json!({
            "basic": breakdown.basic.to_string(),
            "rate": rates.provident_fund_of_basic.normalize().to_string(),
            "include_provident_fund": include_provident_fund
        }),
        serde_json::json!({
            "provident_fund": breakdown.provident_fund.to_string(),
            "provident_fund_term": provident_fund_term.to_string()
        }),
        if include_provident_fund {
            format!(
                "{}% of basic {} = {} (rounded)",
                pct(rates.provident_fund_of_basic),
                breakdown.basic,
                provident_fund_term
            )
        } else {
            format!(
                "Provident fund excluded, reported as 0; {} still deducted from the balance",
                provident_fund_term
            )
        },
    );
    push(
        "special_allowance",
        "Special Allowance",
        serde_json::json!({
            "monthly_salary": breakdown.monthly_salary.to_string(),
            "provident_fund_term": provident_fund_term.to_string()
        }),
        serde_json::json!({
            "special_allowance": breakdown.special_allowance.to_string(),
            "clamped": breakdown.special_allowance_clamped
        }),
        format!(
            "{} - ({} + {} + {} + {} + {} + {}) = {}{}",
            breakdown.monthly_salary,
            breakdown.basic,
            breakdown.hra,
            breakdown.da,
            breakdown.medical_allowance,
            breakdown.transport,
            provident_fund_term,
            breakdown.special_allowance,
            if breakdown.special_allowance_clamped {
                " (clamped to 0)"
            } else {
                ""
            }
        ),
    );

    let mut warnings = Vec::new();
    if breakdown.special_allowance_clamped {
        warnings.push(AuditWarning {
            code: "SPECIAL_ALLOWANCE_CLAMPED".to_string(),
            message: format!(
                "Fixed components exceed the monthly salary of {}; components do not reconcile",
                breakdown.monthly_salary
            ),
            severity: "medium".to_string(),
        });
    }
    if !include_provident_fund && !provident_fund_term.is_zero() {
        warnings.push(AuditWarning {
            code: "PROVIDENT_FUND_WITHHELD".to_string(),
            message: format!(
                "Provident fund excluded but {} was deducted from the special allowance",
                provident_fund_term
            ),
            severity: "low".to_string(),
        });
    }

    Some(BreakdownResult {
        breakdown,
        audit: AuditTrace { steps, warnings },
    })
}
