//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose remainder rounds to 360.0 map to 0.0, so the
/// half-open range holds for every finite input.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `from` to `to`, in [0, 360).
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_examples() {
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn forward_arc_wraps() {
        assert!((forward_arc(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((forward_arc(10.0, 350.0) - 340.0).abs() < 1e-12);
    }
}
