//! Lumber estimate for the board footprint.

use serde::Serialize;

use framecut_model::UnitSystem;

/// Cubic inches in one board foot (12" × 12" × 1").
pub const CUBIC_INCHES_PER_BOARD_FOOT: f64 = 144.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialEstimate {
    /// Material thickness in input units.
    pub thickness: f64,
    pub board_feet: f64,
    pub cost: f64,
}

/// Estimate board feet and cost for a `width × height` board of `thickness`.
///
/// Lengths are in `unit`; `cost_per_board_foot` is unit independent.
pub fn estimate(
    width: f64,
    height: f64,
    thickness: f64,
    cost_per_board_foot: f64,
    unit: UnitSystem,
) -> MaterialEstimate {
    let cubic_inches = unit.to_inches(width) * unit.to_inches(height) * unit.to_inches(thickness);
    let board_feet = cubic_inches / CUBIC_INCHES_PER_BOARD_FOOT;
    MaterialEstimate {
        thickness,
        board_feet,
        cost: board_feet * cost_per_board_foot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_board_foot() {
        let estimate = estimate(12.0, 12.0, 1.0, 8.0, UnitSystem::Imperial);
        assert_eq!(estimate.board_feet, 1.0);
        assert_eq!(estimate.cost, 8.0);
    }

    #[test]
    fn metric_board_matches_imperial() {
        let metric = estimate(304.8, 304.8, 25.4, 8.0, UnitSystem::Metric);
        assert!((metric.board_feet - 1.0).abs() < 1e-12);
        assert!((metric.cost - 8.0).abs() < 1e-12);
    }
}
