//! Outcode classification against the canonical view volume.
//!
//! A point's outcode records which of the six volume boundaries it
//! violates, one bit per boundary. The bit layout matches the classic
//! Cohen-Sutherland encoding with LEFT as the most significant flag.

use std::ops::{BitAnd, BitOr};

use crate::math::vec4::Vec4;

/// The canonical view volume a scene has been normalized into.
///
/// The two variants share one clip-loop skeleton but use different point
/// tests and boundary-intersection formulas. The perspective frustum's near
/// threshold depends on the camera (`zmin = -front/back`), so the variant
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipVolume {
    /// Box: x, y in [-1, 1], z in [-1, 0].
    Parallel,
    /// Frustum: |x| <= |z|, |y| <= |z|, z in [-1, zmin].
    Perspective { zmin: f64 },
}

/// One boundary of the canonical view volume.
///
/// The declaration order is the fixed precedence the clip loop resolves
/// boundaries in: LEFT > RIGHT > BOTTOM > TOP > NEAR > FAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl Boundary {
    /// All boundaries, highest precedence first.
    pub const IN_PRECEDENCE: [Boundary; 6] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
        Boundary::Near,
        Boundary::Far,
    ];

    /// The outcode bit for this boundary.
    pub const fn bit(self) -> u8 {
        match self {
            Boundary::Left => 0b100000,
            Boundary::Right => 0b010000,
            Boundary::Bottom => 0b001000,
            Boundary::Top => 0b000100,
            Boundary::Near => 0b000010,
            Boundary::Far => 0b000001,
        }
    }
}

/// 6-bit flag set of violated boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);

    /// True when the point violates no boundary.
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when this outcode has the given boundary's bit set.
    pub fn violates(self, boundary: Boundary) -> bool {
        self.0 & boundary.bit() != 0
    }

    fn set(&mut self, boundary: Boundary) {
        self.0 |= boundary.bit();
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Self) -> Self::Output {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;

    fn bitand(self, rhs: Self) -> Self::Output {
        Outcode(self.0 & rhs.0)
    }
}

impl ClipVolume {
    /// Classifies a canonical-space point against the volume boundaries.
    ///
    /// Each opposing pair (LEFT/RIGHT, BOTTOM/TOP, NEAR/FAR) is tested with
    /// an if/else-if chain, so at most one bit of each pair can be set.
    pub fn outcode(&self, p: Vec4) -> Outcode {
        let mut outcode = Outcode::INSIDE;
        match *self {
            ClipVolume::Parallel => {
                if p.x < -1.0 {
                    outcode.set(Boundary::Left);
                } else if p.x > 1.0 {
                    outcode.set(Boundary::Right);
                }
                if p.y < -1.0 {
                    outcode.set(Boundary::Bottom);
                } else if p.y > 1.0 {
                    outcode.set(Boundary::Top);
                }
                if p.z > 0.0 {
                    outcode.set(Boundary::Near);
                } else if p.z < -1.0 {
                    outcode.set(Boundary::Far);
                }
            }
            ClipVolume::Perspective { zmin } => {
                if p.x < p.z {
                    outcode.set(Boundary::Left);
                } else if p.x > -p.z {
                    outcode.set(Boundary::Right);
                }
                if p.y < p.z {
                    outcode.set(Boundary::Bottom);
                } else if p.y > -p.z {
                    outcode.set(Boundary::Top);
                }
                if p.z > zmin {
                    outcode.set(Boundary::Near);
                } else if p.z < -1.0 {
                    outcode.set(Boundary::Far);
                }
            }
        }
        outcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSPECTIVE: ClipVolume = ClipVolume::Perspective { zmin: -0.12 };

    fn exclusive_pairs(outcode: Outcode) -> bool {
        !(outcode.violates(Boundary::Left) && outcode.violates(Boundary::Right))
            && !(outcode.violates(Boundary::Bottom) && outcode.violates(Boundary::Top))
            && !(outcode.violates(Boundary::Near) && outcode.violates(Boundary::Far))
    }

    #[test]
    fn inside_points_have_zero_outcode() {
        assert!(ClipVolume::Parallel
            .outcode(Vec4::point(0.0, 0.0, -0.5))
            .is_inside());
        assert!(PERSPECTIVE.outcode(Vec4::point(0.1, -0.1, -0.5)).is_inside());
    }

    #[test]
    fn parallel_boundary_points_are_inside() {
        // Boundaries use strict comparisons, so points exactly on a face
        // are classified inside.
        for p in [
            Vec4::point(-1.0, 0.0, -0.5),
            Vec4::point(1.0, 0.0, -0.5),
            Vec4::point(0.0, -1.0, -0.5),
            Vec4::point(0.0, 1.0, -0.5),
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(0.0, 0.0, -1.0),
        ] {
            assert!(ClipVolume::Parallel.outcode(p).is_inside(), "{:?}", p);
        }
    }

    #[test]
    fn parallel_single_violations() {
        let volume = ClipVolume::Parallel;
        assert!(volume
            .outcode(Vec4::point(-1.5, 0.0, -0.5))
            .violates(Boundary::Left));
        assert!(volume
            .outcode(Vec4::point(1.5, 0.0, -0.5))
            .violates(Boundary::Right));
        assert!(volume
            .outcode(Vec4::point(0.0, -1.5, -0.5))
            .violates(Boundary::Bottom));
        assert!(volume
            .outcode(Vec4::point(0.0, 1.5, -0.5))
            .violates(Boundary::Top));
        assert!(volume
            .outcode(Vec4::point(0.0, 0.0, 0.5))
            .violates(Boundary::Near));
        assert!(volume
            .outcode(Vec4::point(0.0, 0.0, -1.5))
            .violates(Boundary::Far));
    }

    #[test]
    fn perspective_walls_narrow_with_depth() {
        // x = 0.3 is inside at z = -0.5 but outside the right wall at
        // z = -0.2, since the frustum narrows toward the eye.
        assert!(PERSPECTIVE.outcode(Vec4::point(0.3, 0.0, -0.5)).is_inside());
        assert!(PERSPECTIVE
            .outcode(Vec4::point(0.3, 0.0, -0.2))
            .violates(Boundary::Right));
        assert!(PERSPECTIVE
            .outcode(Vec4::point(-0.3, 0.0, -0.2))
            .violates(Boundary::Left));
    }

    #[test]
    fn perspective_near_far_thresholds() {
        assert!(PERSPECTIVE
            .outcode(Vec4::point(0.0, 0.0, -0.1))
            .violates(Boundary::Near));
        assert!(PERSPECTIVE
            .outcode(Vec4::point(0.0, 0.0, -1.1))
            .violates(Boundary::Far));
        assert!(PERSPECTIVE.outcode(Vec4::point(0.0, 0.0, -0.12)).is_inside());
    }

    #[test]
    fn opposing_bits_never_both_set() {
        // Sweep a coarse grid well past the volume on every side.
        let steps = [-3.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 3.0];
        for volume in [ClipVolume::Parallel, PERSPECTIVE] {
            for &x in &steps {
                for &y in &steps {
                    for &z in &steps {
                        let outcode = volume.outcode(Vec4::point(x, y, z));
                        assert!(
                            exclusive_pairs(outcode),
                            "{:?} at ({x}, {y}, {z})",
                            volume
                        );
                    }
                }
            }
        }
    }
}
