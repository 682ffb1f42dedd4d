//! Configuration loading and management for the HR admin engine.
//!
//! This module loads the payroll policy (component splits and fixed
//! allowances) and the route gate policy (protected/public prefixes,
//! exclusions, session cookie names) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_admin_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr").unwrap();
//! println!("Login page: {}", config.gate().login_path);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComponentRates, FixedAllowances, GatePolicy, HrConfig, PayrollPolicy, SessionCookies,
};
