//! Tests for configuration constants and derived values

#[cfg(test)]
mod tests {
    use mazegen::io::configuration::{
        BASE_STEP_DELAY_MS, DEFAULT_NOTCHES, DEFAULT_OUTPUT, DEFAULT_PIXELS_PER_CELL,
        DEFAULT_SPEED, MAX_EXTREME_NOTCHES, MAX_NOTCHES, MAX_PIXELS_PER_CELL, MAX_SPEED,
        MIN_DIMENSION, MIN_NOTCHES, MIN_SPEED, SOLVED_SUFFIX, STEPS_SUFFIX, side_for_notches,
        step_delay_ms,
    };

    // Tests notch sizes always give odd sides of at least the minimum dimension
    // Verified by dropping the +1 in side_for_notches
    #[test]
    fn test_side_for_notches() {
        assert_eq!(side_for_notches(1), 11);
        assert_eq!(side_for_notches(MAX_NOTCHES), 1001);
        assert_eq!(side_for_notches(MAX_EXTREME_NOTCHES), 8001);

        for notches in MIN_NOTCHES..=MAX_NOTCHES {
            let side = side_for_notches(notches);
            assert_eq!(side % 2, 1);
            assert!(side >= MIN_DIMENSION);
        }
    }

    // Tests frame delay is the base delay divided by the speed
    #[test]
    fn test_step_delay() {
        assert_eq!(step_delay_ms(MIN_SPEED), BASE_STEP_DELAY_MS);
        assert_eq!(step_delay_ms(DEFAULT_SPEED), 10);
        assert_eq!(step_delay_ms(MAX_SPEED), 1);
    }

    // Tests out-of-range speeds still give a usable delay
    // Verified by dividing by zero
    #[test]
    fn test_step_delay_clamped() {
        assert_eq!(step_delay_ms(0), BASE_STEP_DELAY_MS);
        assert_eq!(step_delay_ms(10_000), 1);
    }

    // Tests defaults fall inside their accepted ranges
    #[test]
    fn test_defaults_in_range() {
        assert!((MIN_NOTCHES..=MAX_NOTCHES).contains(&DEFAULT_NOTCHES));
        assert!((MIN_SPEED..=MAX_SPEED).contains(&DEFAULT_SPEED));
        assert!((1..=MAX_PIXELS_PER_CELL).contains(&DEFAULT_PIXELS_PER_CELL));
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
    }

    // Tests output suffixes are safe to splice into file names
    #[test]
    fn test_output_suffixes() {
        for suffix in [SOLVED_SUFFIX, STEPS_SUFFIX] {
            assert!(suffix.starts_with('_'));
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            );
        }
        assert_ne!(SOLVED_SUFFIX, STEPS_SUFFIX);
    }
}
