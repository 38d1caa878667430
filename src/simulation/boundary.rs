//! Axis-aligned box that confines every sphere
//!
//! The box spans `[-X, X]` on the x and z axes and `[floor, floor + 4X]`
//! on the y axis. The height is tied to the half-width, it is not a
//! separate parameter.

use super::error::SimError;

/// Multiplier from half-width to box height
pub const HEIGHT_FACTOR: f64 = 4.0;

/// One coordinate axis of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into an `NVec3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    half_width: f64, // X
    floor: f64,      // Ylow
}

impl Boundary {
    pub fn new(half_width: f64, floor: f64) -> Result<Self, SimError> {
        if !(half_width > 0.0) || !half_width.is_finite() || !floor.is_finite() {
            return Err(SimError::InvalidBoundary { half_width, floor });
        }
        Ok(Self { half_width, floor })
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn ceiling(&self) -> f64 {
        self.floor + HEIGHT_FACTOR * self.half_width
    }

    /// Lower and upper bound along `axis`
    pub fn bounds(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X | Axis::Z => (-self.half_width, self.half_width),
            Axis::Y => (self.floor, self.ceiling()),
        }
    }

    /// Center of the box, used by the viewer to place its outline
    pub fn center(&self) -> [f64; 3] {
        [0.0, 0.5 * (self.floor + self.ceiling()), 0.0]
    }

    /// Full extents along x, y, z
    pub fn size(&self) -> [f64; 3] {
        let w = 2.0 * self.half_width;
        [w, self.ceiling() - self.floor, w]
    }
}

bitflags::bitflags! {
    /// Faces of the box a sphere was reflected off during one step.
    ///
    /// The [empty](Self::empty) set means the sphere touched no wall.
    #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
    pub struct Faces: u8 {
        const X_MIN = 1 << 0;
        const X_MAX = 1 << 1;
        const Y_MIN = 1 << 2;
        const Y_MAX = 1 << 3;
        const Z_MIN = 1 << 4;
        const Z_MAX = 1 << 5;
    }
}

impl Faces {
    /// Face at the lower bound of `axis`
    pub fn lower(axis: Axis) -> Faces {
        match axis {
            Axis::X => Faces::X_MIN,
            Axis::Y => Faces::Y_MIN,
            Axis::Z => Faces::Z_MIN,
        }
    }

    /// Face at the upper bound of `axis`
    pub fn upper(axis: Axis) -> Faces {
        match axis {
            Axis::X => Faces::X_MAX,
            Axis::Y => Faces::Y_MAX,
            Axis::Z => Faces::Z_MAX,
        }
    }
}
