//! Time helper functions.

use std::time::Duration;

/// Fractional milliseconds in a duration.
#[inline]
pub(crate) fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms() {
        assert_eq!(duration_ms(Duration::ZERO), 0.0);
        assert_eq!(duration_ms(Duration::from_millis(35)), 35.0);
        assert_eq!(duration_ms(Duration::from_micros(1500)), 1.5);
    }
}
