//! Salary input and breakdown models.
//!
//! A [`SalaryBreakdown`] is never stored on its own. It is always a
//! projection of the current [`SalaryInput`] and is recomputed in full
//! whenever the annual salary or the provident fund flag changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the employment form supplies to the payroll engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Annual salary (CTC) in whole currency units. `None` while the field is empty.
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Whether the employer provident fund contribution is part of the package.
    #[serde(default)]
    pub include_provident_fund: bool,
}

impl SalaryInput {
    /// Creates an input with a salary present.
    pub fn new(annual_salary: Decimal, include_provident_fund: bool) -> Self {
        Self {
            annual_salary: Some(annual_salary),
            include_provident_fund,
        }
    }

    /// Returns the salary only when it is strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_admin_engine::models::SalaryInput;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(SalaryInput::new(Decimal::new(1_200_000, 0), true).positive_salary().is_some());
    /// assert!(SalaryInput::new(Decimal::ZERO, true).positive_salary().is_none());
    /// ```
    pub fn positive_salary(&self) -> Option<Decimal> {
        self.annual_salary.filter(|salary| *salary > Decimal::ZERO)
    }
}

/// Monthly salary components derived from an annual salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Annual salary divided by twelve, rounded.
    pub monthly_salary: Decimal,
    /// Basic pay.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Flat medical allowance.
    pub medical_allowance: Decimal,
    /// Flat transport allowance.
    pub transport: Decimal,
    /// Provident fund contribution, zero when excluded.
    pub provident_fund: Decimal,
    /// Balancing figure, never negative.
    pub special_allowance: Decimal,
    /// True when the fixed components exceeded the monthly salary and the
    /// balancing figure was clamped to zero.
    pub special_allowance_clamped: bool,
}

impl SalaryBreakdown {
    /// Sum of all seven components.
    pub fn component_total(&self) -> Decimal {
        self.basic
            + self.hra
            + self.da
            + self.medical_allowance
            + self.transport
            + self.provident_fund
            + self.special_allowance
    }

    /// Returns false when the balancing figure had to be clamped, in which
    /// case the components no longer reconcile with the monthly salary.
    pub fn is_balanced(&self) -> bool {
        !self.special_allowance_clamped
    }

    /// Projects the monthly components onto a full year, as printed in the
    /// salary annexure of offer and appointment letters.
    pub fn annualised(&self) -> AnnualComponents {
        let twelve = Decimal::from(12);
        let basic = self.basic * twelve;
        let hra = self.hra * twelve;
        let da = self.da * twelve;
        let medical_allowance = self.medical_allowance * twelve;
        let transport = self.transport * twelve;
        let provident_fund = self.provident_fund * twelve;
        let special_allowance = self.special_allowance * twelve;

        AnnualComponents {
            basic,
            hra,
            da,
            medical_allowance,
            transport,
            provident_fund,
            special_allowance,
            total: basic + hra + da + medical_allowance + transport + provident_fund + special_allowance,
        }
    }
}

/// Yearly view of a [`SalaryBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualComponents {
    /// Basic pay per year.
    pub basic: Decimal,
    /// HRA per year.
    pub hra: Decimal,
    /// DA per year.
    pub da: Decimal,
    /// Medical allowance per year.
    pub medical_allowance: Decimal,
    /// Transport allowance per year.
    pub transport: Decimal,
    /// Provident fund per year.
    pub provident_fund: Decimal,
    /// Special allowance per year.
    pub special_allowance: Decimal,
    /// Sum of the yearly components.
    pub total: Decimal,
}
