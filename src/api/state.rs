//! Application state for the HR admin engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers and to the route gate middleware.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::gate::RouteGate;

/// Shared application state.
///
/// Holds the loaded configuration and the route gate built from it. Both
/// are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    gate: Arc<RouteGate>,
}

impl AppState {
    /// Creates a new application state, building the route gate from the
    /// loaded gate policy.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let gate = RouteGate::new(config.gate())?;
        Ok(Self::with_gate(config, gate))
    }

    /// Creates a new application state around an already built gate.
    pub fn with_gate(config: ConfigLoader, gate: RouteGate) -> Self {
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the route gate.
    pub fn gate(&self) -> &RouteGate {
        &self.gate
    }
}
