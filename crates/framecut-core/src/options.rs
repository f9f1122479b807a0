//! Configuration options for the derivation engine.

use std::time::Duration;

use framecut_model::{DEFAULT_CLEARANCE_IN, UnitSystem};

use crate::status::DEFAULT_STATUS_DURATION;

/// Gap between and around blanks on the board, in inches.
pub const DEFAULT_LAYOUT_GAP_IN: f64 = 0.25;

/// Options controlling a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Unit system active when the session starts.
    pub unit: UnitSystem,
    /// Clearance seeded into a new session, in inches.
    pub default_clearance_in: f64,
    /// Board layout gap, in inches. Converted to the active unit when used.
    pub layout_gap_in: f64,
    /// How long a copy status stays visible.
    pub status_duration: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            unit: UnitSystem::Imperial,
            default_clearance_in: DEFAULT_CLEARANCE_IN,
            layout_gap_in: DEFAULT_LAYOUT_GAP_IN,
            status_duration: DEFAULT_STATUS_DURATION,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: UnitSystem) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_default_clearance(mut self, inches: f64) -> Self {
        self.default_clearance_in = inches;
        self
    }

    pub fn with_layout_gap(mut self, inches: f64) -> Self {
        self.layout_gap_in = inches;
        self
    }

    pub fn with_status_duration(mut self, duration: Duration) -> Self {
        self.status_duration = duration;
        self
    }
}
