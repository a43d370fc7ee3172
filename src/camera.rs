//! Camera description for the viewing pipeline.
//!
//! A [`ViewSpec`] holds everything the normalizing transform is derived
//! from: the projection kind, the three camera vectors (PRP, SRP, VUP) and
//! the six clip-volume scalars. It is plain data; the matrix construction
//! lives in [`crate::projection`].

use crate::math::vec3::Vec3;

/// Which canonical view volume the scene is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionKind {
    /// Box volume, direction of projection collapsed onto -z.
    #[default]
    Parallel,
    /// Frustum volume, perspective divide performed at projection time.
    Perspective,
}

/// The window on the view plane plus near/far distances along the view
/// direction, in view reference coordinates.
///
/// Field order matches the array form `[umin, umax, vmin, vmax, front,
/// back]` accepted by the `From` impl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub umin: f64,
    pub umax: f64,
    pub vmin: f64,
    pub vmax: f64,
    pub front: f64,
    pub back: f64,
}

impl ClipBounds {
    pub const fn new(umin: f64, umax: f64, vmin: f64, vmax: f64, front: f64, back: f64) -> Self {
        Self {
            umin,
            umax,
            vmin,
            vmax,
            front,
            back,
        }
    }

    /// Center of the window on the view plane (u, v).
    pub fn window_center(&self) -> (f64, f64) {
        (
            (self.umin + self.umax) / 2.0,
            (self.vmin + self.vmax) / 2.0,
        )
    }

    /// True when every scalar is finite and no pair is inverted.
    pub fn is_well_formed(&self) -> bool {
        let all_finite = [
            self.umin, self.umax, self.vmin, self.vmax, self.front, self.back,
        ]
        .iter()
        .all(|s| s.is_finite());

        all_finite
            && self.umin < self.umax
            && self.vmin < self.vmax
            && self.front > 0.0
            && self.front < self.back
    }
}

impl From<[f64; 6]> for ClipBounds {
    fn from(c: [f64; 6]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5])
    }
}

/// Camera parameters for one scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpec {
    pub kind: ProjectionKind,
    /// Projection reference point (the eye).
    pub prp: Vec3,
    /// Scene reference point (the center of interest).
    pub srp: Vec3,
    /// View-up vector.
    pub vup: Vec3,
    pub clip: ClipBounds,
}

/// Directional camera command: shifts both PRP and SRP by one unit along a
/// world axis, so the camera slides without turning. VUP and the clip
/// bounds are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Left,
    Right,
    Up,
    Down,
}

const PAN_STEP: f64 = 1.0;

impl ViewSpec {
    pub fn new(kind: ProjectionKind, prp: Vec3, srp: Vec3, vup: Vec3, clip: ClipBounds) -> Self {
        Self {
            kind,
            prp,
            srp,
            vup,
            clip,
        }
    }

    /// Apply a pan command to the camera.
    pub fn pan(&mut self, pan: Pan) {
        let delta = match pan {
            Pan::Left => Vec3::new(-PAN_STEP, 0.0, 0.0),
            Pan::Right => Vec3::new(PAN_STEP, 0.0, 0.0),
            Pan::Up => Vec3::new(0.0, PAN_STEP, 0.0),
            Pan::Down => Vec3::new(0.0, -PAN_STEP, 0.0),
        };
        self.prp = self.prp + delta;
        self.srp = self.srp + delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ViewSpec {
        ViewSpec::new(
            ProjectionKind::Parallel,
            Vec3::new(44.0, 20.0, -16.0),
            Vec3::new(20.0, 20.0, -40.0),
            Vec3::UP,
            ClipBounds::new(-19.0, 5.0, -10.0, 8.0, 12.0, 100.0),
        )
    }

    #[test]
    fn pan_moves_prp_and_srp_together() {
        let mut view = sample_view();
        let before = view;
        view.pan(Pan::Left);
        view.pan(Pan::Up);

        assert_eq!(view.prp, before.prp + Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(view.srp, before.srp + Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(view.vup, before.vup);
        assert_eq!(view.clip, before.clip);
    }

    #[test]
    fn window_center_is_midpoint() {
        let (cu, cv) = sample_view().clip.window_center();
        assert_eq!(cu, -7.0);
        assert_eq!(cv, -1.0);
    }

    #[test]
    fn well_formed_bounds() {
        assert!(sample_view().clip.is_well_formed());
        assert!(!ClipBounds::new(5.0, -19.0, -10.0, 8.0, 12.0, 100.0).is_well_formed());
        assert!(!ClipBounds::new(-19.0, 5.0, -10.0, 8.0, 100.0, 12.0).is_well_formed());
        assert!(!ClipBounds::new(-19.0, f64::NAN, -10.0, 8.0, 12.0, 100.0).is_well_formed());
    }
}
