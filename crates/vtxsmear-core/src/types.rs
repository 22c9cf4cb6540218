//! Geometric value types shared by the models and the driver.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Cartesian axis, used to address per-axis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// DisplacementVector
// ---------------------------------------------------------------------------

/// Spatial shift of the interaction point for one event, in mm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplacementVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl DisplacementVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component along `axis`.
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Extend to a space-time point with the given time component.
    pub const fn with_time(self, t: f64) -> FourVector {
        FourVector::new(self.x, self.y, self.z, t)
    }
}

impl fmt::Display for DisplacementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// FourVector
// ---------------------------------------------------------------------------

/// Space-time position `(x, y, z, t)` of a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl FourVector {
    pub const fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "X");
        assert_eq!(Axis::ALL.len(), 3);
    }

    #[test]
    fn displacement_component_access() {
        let d = DisplacementVector::new(1.0, 2.0, 3.0);
        assert!((d.get(Axis::Y) - 2.0).abs() < f64::EPSILON);
        assert_eq!(d.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn with_time_keeps_spatial_part() {
        let v = DisplacementVector::new(1.0, -1.0, 0.5).with_time(7.0);
        assert_eq!(v, FourVector::new(1.0, -1.0, 0.5, 7.0));
    }
}
