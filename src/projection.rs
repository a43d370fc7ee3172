//! Canonical view transform construction.
//!
//! [`ViewTransform::build`] turns a [`ViewSpec`] into the two matrices the
//! pipeline needs per frame:
//!
//! - `normalize` (N): maps world space into the canonical view volume. Built
//!   from the classic derivation: translate the PRP to the origin, rotate
//!   the view reference coordinate axes onto the world axes, shear so the
//!   center of window lands on the z-axis, then scale into canonical
//!   bounds. The parallel form inserts one extra step (translate the near
//!   plane to the origin); the perspective form leaves the near plane where
//!   it is so the later divide by w produces correct foreshortening.
//! - `project` (M): fixed per projection kind, independent of the camera.
//!   Orthographic drop of z for parallel; `(x, y, z, w) -> (x, y, z, -z)`
//!   for perspective so the homogeneous divide is the perspective divide.
//!
//! Canonical volumes (checked by the clipper's outcode tests):
//! - parallel: `x, y in [-1, 1]`, `z in [-1, 0]`
//! - perspective: `|x| <= |z|`, `|y| <= |z|`, `z in [-1, -front/back]`

use std::error::Error;
use std::fmt;

use crate::camera::{ProjectionKind, ViewSpec};
use crate::clipper::ClipVolume;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Orthographic projection onto the z=0 plane: zero out z, keep w.
const M_PARALLEL: Mat4 = Mat4::new([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

/// Perspective projection onto the z=-1 plane: w takes -z, so the
/// homogeneous divide scales x and y by 1/(-z).
const M_PERSPECTIVE: Mat4 = Mat4::new([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0, 0.0],
]);

/// The camera parameters do not define a usable view direction.
///
/// Fatal to the current frame only: the caller skips rendering and keeps
/// the previous frame, the process carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateViewError {
    /// PRP and SRP coincide, so the view-plane normal has zero length.
    ZeroViewDirection,
    /// VUP is parallel to the view-plane normal, so the horizontal axis of
    /// the view cannot be derived from their cross product.
    UpParallelToViewDirection,
}

impl fmt::Display for DegenerateViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroViewDirection => {
                write!(f, "PRP and SRP coincide; view direction has zero length")
            }
            Self::UpParallelToViewDirection => {
                write!(f, "VUP is parallel to the view direction")
            }
        }
    }
}

impl Error for DegenerateViewError {}

/// The per-frame transform bundle derived from one [`ViewSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// N: world space into the canonical view volume.
    pub normalize: Mat4,
    /// M: canonical volume onto the projection plane.
    pub project: Mat4,
    /// The canonical volume the clipper tests against.
    pub volume: ClipVolume,
}

impl ViewTransform {
    /// Builds the normalizing and projection matrices for a camera.
    ///
    /// Rejects cameras whose derived basis vectors cannot be normalized
    /// instead of silently producing NaN-valued matrices.
    pub fn build(view: &ViewSpec) -> Result<Self, DegenerateViewError> {
        let clip = &view.clip;

        // 1. Translate the PRP to the origin.
        let translate_prp = Mat4::translation(-view.prp.x, -view.prp.y, -view.prp.z);

        // 2. Rotate the VRC axes (u, v, n) onto the world (x, y, z) axes.
        //    The rotation rows are the orthonormal basis vectors.
        let n = (view.prp - view.srp)
            .try_normalize()
            .ok_or(DegenerateViewError::ZeroViewDirection)?;
        let u = view
            .vup
            .cross(n)
            .try_normalize()
            .ok_or(DegenerateViewError::UpParallelToViewDirection)?;
        let v = n.cross(u);
        let rotate_vrc = Mat4::new([
            [u.x, u.y, u.z, 0.0],
            [v.x, v.y, v.z, 0.0],
            [n.x, n.y, n.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        // 3. Shear so the center of window lies on the z-axis. The direction
        //    of projection runs from the origin through the window center.
        let (cw_u, cw_v) = clip.window_center();
        let dop = Vec3::new(cw_u, cw_v, -clip.front).normalize();
        let shear_cw = Mat4::shear_xy(-dop.x / dop.z, -dop.y / dop.z);

        let (normalize, project, volume) = match view.kind {
            ProjectionKind::Parallel => {
                // 4. Translate the near plane to the origin.
                let translate_front = Mat4::translation(0.0, 0.0, clip.front);
                // 5. Scale into x, y in [-1, 1] and z in [-1, 0].
                let scale = Mat4::scaling(
                    2.0 / (clip.umax - clip.umin),
                    2.0 / (clip.vmax - clip.vmin),
                    1.0 / (clip.back - clip.front),
                );
                let n_mat = Mat4::compose(&[
                    scale,
                    translate_front,
                    shear_cw,
                    rotate_vrc,
                    translate_prp,
                ]);
                (n_mat, M_PARALLEL, ClipVolume::Parallel)
            }
            ProjectionKind::Perspective => {
                // 5. Scale so the frustum becomes |x| <= |z|, |y| <= |z|,
                //    z in [-1, -front/back]. The near plane stays put.
                let scale = Mat4::scaling(
                    (2.0 * clip.front) / ((clip.umax - clip.umin) * clip.back),
                    (2.0 * clip.front) / ((clip.vmax - clip.vmin) * clip.back),
                    1.0 / clip.back,
                );
                let n_mat = Mat4::compose(&[scale, shear_cw, rotate_vrc, translate_prp]);
                let volume = ClipVolume::Perspective {
                    zmin: -clip.front / clip.back,
                };
                (n_mat, M_PERSPECTIVE, volume)
            }
        };

        Ok(Self {
            normalize,
            project,
            volume,
        })
    }
}
