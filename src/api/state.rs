//! Application state for the staffing engine API.

use std::sync::Arc;

use crate::service::StaffingEngine;

/// Shared application state.
///
/// Holds the engine that every request handler calls into.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<StaffingEngine>,
}

impl AppState {
    /// Creates a new application state around `engine`.
    pub fn new(engine: StaffingEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the shared engine.
    pub fn engine(&self) -> &StaffingEngine {
        &self.engine
    }
}
