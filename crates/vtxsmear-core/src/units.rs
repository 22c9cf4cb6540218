//! Length and angle units.
//!
//! The internal length unit is the millimetre. Configuration lengths are
//! expressed in centimetres and multiplied by [`CM`] once, when a model is
//! built from its parameters.

/// One millimetre, the internal length unit.
pub const MM: f64 = 1.0;

/// One centimetre in internal units.
pub const CM: f64 = 10.0 * MM;

/// One degree in radians.
pub const DEG: f64 = std::f64::consts::PI / 180.0;

/// Convert a length given in cm to internal units.
pub fn from_cm(value: f64) -> f64 {
    value * CM
}

/// Convert an internal length back to cm.
pub fn to_cm(value: f64) -> f64 {
    value / CM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cm_is_ten_mm() {
        assert!((from_cm(1.0) - 10.0).abs() < f64::EPSILON);
        assert!((to_cm(53.0) - 5.3).abs() < 1e-12);
    }

    #[test]
    fn right_angle_in_degrees() {
        assert!((90.0 * DEG - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
