//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll and
//! route gate configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::gate::ExclusionMatcher;

use super::types::{GatePolicy, HrConfig, PayrollPolicy};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/hr/
/// ├── payroll.yaml   # Component splits and fixed allowances
/// └── gate.yaml      # Protected/public prefixes, exclusions, cookie names
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_admin_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hr").unwrap();
/// println!("Payroll policy version: {}", loader.payroll().version);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: HrConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// holds values the engine cannot use (rates outside `0..=1`, negative
    /// allowances, paths not starting with `/`, exclusion patterns that do
    /// not compile).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll = Self::load_yaml::<PayrollPolicy>(&path.join("payroll.yaml"))?;
        let gate = Self::load_yaml::<GatePolicy>(&path.join("gate.yaml"))?;

        Self::from_parts(payroll, gate)
    }

    /// Builds a loader from already-parsed policies, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(payroll: PayrollPolicy, gate: GatePolicy) -> EngineResult<Self> {
        Self::validate_payroll(&payroll)?;
        Self::validate_gate(&gate)?;

        Ok(Self {
            config: HrConfig::new(payroll, gate),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_payroll(policy: &PayrollPolicy) -> EngineResult<()> {
        let rates = [
            ("rates.basic_of_monthly", policy.rates.basic_of_monthly),
            ("rates.hra_of_basic", policy.rates.hra_of_basic),
            ("rates.da_of_basic", policy.rates.da_of_basic),
            (
                "rates.provident_fund_of_basic",
                policy.rates.provident_fund_of_basic,
            ),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("rate {} is outside 0..=1", rate),
                });
            }
        }

        let allowances = [
            ("fixed_allowances.medical", policy.fixed_allowances.medical),
            (
                "fixed_allowances.transport",
                policy.fixed_allowances.transport,
            ),
        ];
        for (field, amount) in allowances {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("allowance {} is negative", amount),
                });
            }
        }

        Ok(())
    }

    fn validate_gate(policy: &GatePolicy) -> EngineResult<()> {
        let paths = [
            ("login_path", &policy.login_path),
            ("admin_dashboard_path", &policy.admin_dashboard_path),
            ("employee_dashboard_path", &policy.employee_dashboard_path),
        ];
        for (field, value) in paths {
            Self::require_absolute(field, value)?;
        }

        for (i, prefix) in policy.protected_prefixes.iter().enumerate() {
            Self::require_absolute(&format!("protected_prefixes[{}]", i), prefix)?;
        }
        for (i, prefix) in policy.public_prefixes.iter().enumerate() {
            Self::require_absolute(&format!("public_prefixes[{}]", i), prefix)?;
        }

        if policy.redirect_param.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "redirect_param".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        ExclusionMatcher::new(&policy.exclusions)?;

        Ok(())
    }

    fn require_absolute(field: &str, value: &str) -> EngineResult<()> {
        if value.starts_with('/') {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("'{}' must start with '/'", value),
            })
        }
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        self.config.payroll()
    }

    /// Returns the route gate policy.
    pub fn gate(&self) -> &GatePolicy {
        self.config.gate()
    }
}
