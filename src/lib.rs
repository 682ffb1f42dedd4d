//! HR Admin Engine
//!
//! This crate provides the payroll decomposition used by the employment and
//! salary forms of an HR administration application (annual salary into
//! basic, HRA, DA, fixed allowances, provident fund and special allowance),
//! and the route access gate that decides, per request, between letting it
//! through and redirecting to or away from the login page.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
