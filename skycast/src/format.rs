//! Display formatting

/// Temperature rounded to the nearest integer with a degree suffix.
///
/// Halves round toward positive infinity: `0.5` → `1°`, `-0.5` → `0°`,
/// `-2.5` → `-2°`. Negative zero is never printed.
pub fn format_temperature(temperature: f64) -> String {
    let floor = temperature.floor();
    let rounded = if temperature - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    // + 0.0 turns -0.0 into 0.0
    format!("{}°", rounded + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(format_temperature(18.4), "18°");
        assert_eq!(format_temperature(23.6), "24°");
        assert_eq!(format_temperature(-2.6), "-3°");
        assert_eq!(format_temperature(-7.4), "-7°");
        assert_eq!(format_temperature(30.0), "30°");
    }

    #[test]
    fn test_near_zero_has_no_sign() {
        assert_eq!(format_temperature(-0.2), "0°");
        assert_eq!(format_temperature(-0.0), "0°");
        assert_eq!(format_temperature(0.2), "0°");
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(format_temperature(0.49999999999999994), "0°");
        assert_eq!(format_temperature(-0.5000000000000001), "-1°");
    }

    #[test]
    fn test_huge_values_do_not_saturate() {
        let formatted = format_temperature(1e20);
        assert_eq!(formatted, "100000000000000000000°");
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(format_temperature(0.5), "1°");
        assert_eq!(format_temperature(-0.5), "0°");
        assert_eq!(format_temperature(2.5), "3°");
        assert_eq!(format_temperature(-2.5), "-2°");
    }
}
