//! Number formatting for lengths, money and volumes.
//!
//! Lengths follow the active unit system: imperial values print with three
//! decimals, metric values print as whole millimetres rounded **up** so a cut
//! is never specified short. Money always prints two decimals.

use crate::units::UnitSystem;

/// Placeholder shown for an output that cannot be computed.
pub const UNAVAILABLE: &str = "—";

/// Decimal places for imperial lengths.
pub const IMPERIAL_OUTPUT_DECIMALS: usize = 3;

/// Decimal places for board-foot volumes.
pub const BOARD_FEET_DECIMALS: usize = 3;

/// Decimal places for money.
pub const MONEY_DECIMALS: usize = 2;

// Absorbs binary noise such as 3.175 being stored as 3.17499999...
const ROUNDING_EPSILON: f64 = 1e-9;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let nudged = scaled + ROUNDING_EPSILON.copysign(scaled);
    nudged.round() / factor
}

/// Format with exactly `decimals` places.
///
/// ```
/// use framecut_model::format::format_fixed;
///
/// assert_eq!(format_fixed(8.125, 3), "8.125");
/// assert_eq!(format_fixed(3.175, 2), "3.18");
/// assert_eq!(format_fixed(-0.0001, 2), "0.00");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let rounded = normalize_zero(round_to(value, decimals));
    format!("{rounded:.decimals$}")
}

/// Format with at most `decimals` places, trimming trailing zeros and a
/// trailing decimal point.
///
/// ```
/// use framecut_model::format::format_trimmed;
///
/// assert_eq!(format_trimmed(3.175, 2), "3.18");
/// assert_eq!(format_trimmed(25.4, 2), "25.4");
/// assert_eq!(format_trimmed(203.2, 2), "203.2");
/// assert_eq!(format_trimmed(8.0, 3), "8");
/// assert_eq!(format_trimmed(0.0, 3), "0");
/// ```
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let s = format_fixed(value, decimals);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Format a length in the given unit system, without a suffix.
pub fn format_length(value: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Imperial => format_fixed(value, IMPERIAL_OUTPUT_DECIMALS),
        UnitSystem::Metric => format!("{:.0}", ceil_mm(value)),
    }
}

/// Format a material thickness at input precision, so a thickness reads back
/// as it was entered.
///
/// ```
/// use framecut_model::UnitSystem;
/// use framecut_model::format::format_thickness;
///
/// assert_eq!(format_thickness(19.05, UnitSystem::Metric), "19.05");
/// assert_eq!(format_thickness(0.75, UnitSystem::Imperial), "0.75");
/// ```
pub fn format_thickness(value: f64, unit: UnitSystem) -> String {
    format_trimmed(value, unit.input_decimals())
}

pub fn format_money(value: f64) -> String {
    format_fixed(value, MONEY_DECIMALS)
}

pub fn format_board_feet(value: f64) -> String {
    format_fixed(value, BOARD_FEET_DECIMALS)
}

/// Format an optional value, using [`UNAVAILABLE`] when absent.
pub fn format_optional(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), format)
}

fn ceil_mm(value: f64) -> f64 {
    normalize_zero((value - ROUNDING_EPSILON).ceil())
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_lengths_use_three_decimals() {
        assert_eq!(format_length(9.625, UnitSystem::Imperial), "9.625");
        assert_eq!(format_length(42.5, UnitSystem::Imperial), "42.500");
        assert_eq!(format_length(1.0 / 3.0, UnitSystem::Imperial), "0.333");
    }

    #[test]
    fn metric_lengths_round_up() {
        assert_eq!(format_length(244.475, UnitSystem::Metric), "245");
        assert_eq!(format_length(206.0001, UnitSystem::Metric), "207");
        assert_eq!(format_length(206.0, UnitSystem::Metric), "206");
    }

    #[test]
    fn metric_ceiling_ignores_binary_noise() {
        let noisy = 10.0 * 25.4 + 1e-13;
        assert_eq!(format_length(noisy, UnitSystem::Metric), "254");
    }

    #[test]
    fn money_and_volume() {
        assert_eq!(format_money(4.5), "4.50");
        assert_eq!(format_money(0.005), "0.01");
        assert_eq!(format_board_feet(0.1234), "0.123");
        assert_eq!(format_optional(None, format_money), UNAVAILABLE);
        assert_eq!(format_optional(Some(2.0), format_money), "2.00");
    }
}
