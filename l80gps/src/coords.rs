//! Degrees-minutes to decimal degrees conversion.

/// Converts an NMEA `dddmm.mmmm` value plus its hemisphere indicator into
/// signed decimal degrees. `S` and `W` (either case) are negative.
///
/// ```
/// let lat = l80gps::dm2d(3110.2908, "N");
/// assert!((lat - 31.17151).abs() < 1e-5);
/// ```
pub fn dm2d(degrees_and_minutes: f64, hemisphere: &str) -> f64 {
    let degrees = (degrees_and_minutes / 100.0).floor();
    let minutes = degrees_and_minutes % 100.0;
    let decimal = degrees + minutes / 60.0;
    if is_negative_hemisphere(hemisphere) {
        -decimal
    } else {
        decimal
    }
}

fn is_negative_hemisphere(hemisphere: &str) -> bool {
    hemisphere.eq_ignore_ascii_case("s") || hemisphere.eq_ignore_ascii_case("w")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expect: f64, got: f64) {
        assert!((expect - got).abs() < 1e-5, "expect {expect}, got {got}");
    }

    #[test]
    fn test_dm2d_hemispheres() {
        assert_close(31.17151, dm2d(3110.2908, "N"));
        assert_close(-31.17151, dm2d(3110.2908, "S"));
        assert_close(121.38725, dm2d(12123.2348, "E"));
        assert_close(-121.38725, dm2d(12123.2348, "W"));
    }

    #[test]
    fn test_dm2d_lowercase_hemisphere() {
        assert_close(-31.17151, dm2d(3110.2908, "s"));
        assert_close(-121.38725, dm2d(12123.2348, "w"));
    }

    #[test]
    fn test_dm2d_blank_hemisphere_is_positive() {
        assert_eq!(0.0, dm2d(0.0, ""));
        assert_close(31.17151, dm2d(3110.2908, ""));
    }

    #[test]
    fn test_dm2d_whole_minutes() {
        assert_eq!(45.5, dm2d(4530.0, "N"));
        assert_eq!(-0.5, dm2d(30.0, "W"));
    }
}
