/// Round to the nearest integer, halves towards positive infinity
/// (-2.5 -> -2, 2.5 -> 3), matching what dashboard clients display.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Celsius to whole degrees Fahrenheit. Absent stays absent.
pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<i32> {
    celsius.map(|c| round_half_up(c * 9.0 / 5.0 + 32.0) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(Some(0.0)), Some(32));
        assert_eq!(celsius_to_fahrenheit(Some(100.0)), Some(212));
        assert_eq!(celsius_to_fahrenheit(Some(-40.0)), Some(-40));
    }

    #[test]
    fn test_rounds_to_whole_degrees() {
        // 21.4 °C = 70.52 °F
        assert_eq!(celsius_to_fahrenheit(Some(21.4)), Some(71));
        // -20.5 °C = -4.9 °F
        assert_eq!(celsius_to_fahrenheit(Some(-20.5)), Some(-5));
    }

    #[test]
    fn test_absent_is_not_zero() {
        assert_eq!(celsius_to_fahrenheit(None), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }
}
