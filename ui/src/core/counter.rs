//! Eased count-up used by the metric cards.

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rounded value of a count from `from` to `to` after `elapsed_ms` of `duration_ms`.
///
/// A zero duration jumps straight to `to`.
pub fn counter_value(from: u64, to: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return to;
    }
    let progress = ease_out(elapsed_ms as f64 / duration_ms as f64);
    let value = from as f64 + (to as f64 - from as f64) * progress;
    value.round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(counter_value(0, 280, 0, 1400), 0);
        assert_eq!(counter_value(0, 280, 1400, 1400), 280);
        assert_eq!(counter_value(0, 280, 9_999, 1400), 280);
        assert_eq!(counter_value(5, 45, 10, 0), 45);
    }

    #[test]
    fn monotonic_increase() {
        let mut last = 0;
        for elapsed in (0..=1600).step_by(16) {
            let value = counter_value(0, 6000, elapsed, 1600);
            assert!(value >= last, "{value} < {last} at {elapsed}ms");
            last = value;
        }
        assert_eq!(last, 6000);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }
}
