//! Configuration types for payroll decomposition and route gating.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    BASIC_SHARE_OF_MONTHLY, DA_SHARE_OF_BASIC, HRA_SHARE_OF_BASIC, MEDICAL_ALLOWANCE,
    PROVIDENT_FUND_SHARE_OF_BASIC, TRANSPORT_ALLOWANCE,
};

/// Percentage splits used to derive the salary components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRates {
    /// Share of the monthly salary paid as basic (0.40).
    pub basic_of_monthly: Decimal,
    /// Share of basic paid as house rent allowance (0.50).
    pub hra_of_basic: Decimal,
    /// Share of basic paid as dearness allowance (0.10).
    pub da_of_basic: Decimal,
    /// Share of basic contributed to the provident fund (0.12).
    pub provident_fund_of_basic: Decimal,
}

impl Default for ComponentRates {
    fn default() -> Self {
        Self {
            basic_of_monthly: BASIC_SHARE_OF_MONTHLY,
            hra_of_basic: HRA_SHARE_OF_BASIC,
            da_of_basic: DA_SHARE_OF_BASIC,
            provident_fund_of_basic: PROVIDENT_FUND_SHARE_OF_BASIC,
        }
    }
}

/// Jurisdiction-specific flat monthly allowances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAllowances {
    /// Monthly medical allowance.
    pub medical: Decimal,
    /// Monthly transport allowance.
    pub transport: Decimal,
}

impl Default for FixedAllowances {
    fn default() -> Self {
        Self {
            medical: MEDICAL_ALLOWANCE,
            transport: TRANSPORT_ALLOWANCE,
        }
    }
}

/// The payroll policy loaded from `payroll.yaml`.
///
/// The default policy carries the figures the HR application has always
/// used, so a missing file is never needed to compute a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Jurisdiction the allowances apply to (e.g., "IN").
    pub jurisdiction: String,
    /// Version or effective date of the policy.
    pub version: String,
    /// Percentage splits.
    pub rates: ComponentRates,
    /// Flat allowances.
    pub fixed_allowances: FixedAllowances,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            jurisdiction: "IN".to_string(),
            version: "default".to_string(),
            rates: ComponentRates::default(),
            fixed_allowances: FixedAllowances::default(),
        }
    }
}

/// Names of the cookies carrying the two session identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookies {
    /// Cookie holding the admin session identifier.
    pub admin: String,
    /// Cookie holding the employee session identifier.
    pub employee: String,
}

impl Default for SessionCookies {
    fn default() -> Self {
        Self {
            admin: "admin_session_id".to_string(),
            employee: "employee_session_id".to_string(),
        }
    }
}

/// The route gate policy loaded from `gate.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// The login page. Matched exactly.
    pub login_path: String,
    /// Where an authenticated admin visiting the login page is sent.
    pub admin_dashboard_path: String,
    /// Where an authenticated employee visiting the login page is sent.
    pub employee_dashboard_path: String,
    /// Query parameter carrying the originally requested path.
    #[serde(default = "default_redirect_param")]
    pub redirect_param: String,
    /// Session cookie names.
    #[serde(default)]
    pub cookies: SessionCookies,
    /// Prefixes that require an authenticated session.
    pub protected_prefixes: Vec<String>,
    /// Prefixes that never require a session.
    pub public_prefixes: Vec<String>,
    /// Regular expressions for paths the gate never evaluates.
    #[serde(default)]
    pub exclusions: Vec<String>,
}

fn default_redirect_param() -> String {
    "redirect".to_string()
}

impl Default for GatePolicy {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            login_path: "/login".to_string(),
            admin_dashboard_path: "/dashboard".to_string(),
            employee_dashboard_path: "/employee-dashboard".to_string(),
            redirect_param: default_redirect_param(),
            cookies: SessionCookies::default(),
            protected_prefixes: owned(&[
                "/dashboard",
                "/employees",
                "/employments",
                "/salaries",
                "/enquiry",
                "/profile",
                "/documents",
                "/attendance",
                "/leaves",
                "/employee-dashboard",
            ]),
            public_prefixes: owned(&["/login", "/candidate/enquiry", "/verify"]),
            exclusions: owned(&[
                r"^/api(/|$)",
                r"^/_next/static/",
                r"^/_next/image",
                r"^/favicon\.ico$",
                r"\.png$",
                r"\.svg$",
                r"\.jpe?g$",
            ]),
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrConfig {
    payroll: PayrollPolicy,
    gate: GatePolicy,
}

impl HrConfig {
    /// Creates a new HrConfig from its component parts.
    pub fn new(payroll: PayrollPolicy, gate: GatePolicy) -> Self {
        Self { payroll, gate }
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        &self.payroll
    }

    /// Returns the route gate policy.
    pub fn gate(&self) -> &GatePolicy {
        &self.gate
    }
}
