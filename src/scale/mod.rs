/// Scale a per-serving quantity and render it with its unit.
///
/// The product is rounded to one decimal place. Whole results drop the
/// decimal point, so `scale_quantity(0.5, 4, "clove")` yields `"2 clove"`
/// while `scale_quantity(1.5, 3, "tsp")` yields `"4.5 tsp"`.
pub fn scale_quantity(base: f64, factor: u32, unit: &str) -> String {
    // f64 Display never uses exponents and prints 2.0 as "2"
    format!("{} {}", round_to_tenth(base * f64::from(factor)), unit)
}

/// Past 2^52 every f64 is already whole, and scaling by ten could overflow.
const WHOLE_ABOVE: f64 = 4_503_599_627_370_496.0;

fn round_to_tenth(value: f64) -> f64 {
    if value.abs() >= WHOLE_ABOVE {
        return value;
    }
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_drop_decimal() {
        assert_eq!(scale_quantity(150.0, 2, "g"), "300 g");
        assert_eq!(scale_quantity(0.5, 4, "clove"), "2 clove");
        assert_eq!(scale_quantity(1.0, 1, "egg"), "1 egg");
    }

    #[test]
    fn test_fractions_keep_one_decimal() {
        assert_eq!(scale_quantity(0.5, 1, "clove"), "0.5 clove");
        assert_eq!(scale_quantity(1.5, 3, "tsp"), "4.5 tsp");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        // 0.6 * 3 is 1.7999999999999998 in binary floating point
        assert_eq!(scale_quantity(0.6, 3, "tsp"), "1.8 tsp");
        assert_eq!(scale_quantity(1.4, 3, "tsp"), "4.2 tsp");
        assert_eq!(scale_quantity(0.6, 5, "tsp"), "3 tsp");
    }

    #[test]
    fn test_rounds_to_nearest_tenth() {
        assert_eq!(scale_quantity(0.33, 1, "cup"), "0.3 cup");
        assert_eq!(scale_quantity(0.26, 1, "cup"), "0.3 cup");
        assert_eq!(scale_quantity(0.96, 1, "cup"), "1 cup");
    }

    #[test]
    fn test_large_whole_values_print_exactly() {
        assert_eq!(scale_quantity(1e19, 1, "g"), "10000000000000000000 g");
        assert_eq!(
            scale_quantity(1e308, 1, "g"),
            format!("1{} g", "0".repeat(308))
        );
        assert_eq!(scale_quantity(2f64.powi(60), 4, "ml"), "4611686018427387904 ml");
    }

    #[test]
    fn test_values_near_rounding_cutoff() {
        assert_eq!(scale_quantity(WHOLE_ABOVE, 1, "g"), "4503599627370496 g");
        assert_eq!(scale_quantity(1e6 + 0.5, 1, "g"), "1000000.5 g");
    }

    #[test]
    fn test_zero_base() {
        assert_eq!(scale_quantity(0.0, 7, "g"), "0 g");
    }
}
