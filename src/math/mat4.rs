//! 4x4 transformation matrix using column-vector convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The viewing pipeline always composes a fixed, ordered list of matrices
//! via [`Mat4::compose`]; the rightmost matrix in the list is the first one
//! applied to a vertex.

use std::ops::Mul;

use super::vec4::Vec4;

/// 4x4 matrix stored row-major as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f64; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f64; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-vector convention).
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub const fn scaling(x: f64, y: f64, z: f64) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a shear parallel to the xy-plane: x and y pick up a multiple
    /// of z, z is unchanged.
    pub const fn shear_xy(shx: f64, shy: f64) -> Self {
        Mat4::new([
            [1.0, 0.0, shx, 0.0],
            [0.0, 1.0, shy, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composes an ordered list of matrices into a single transform.
    ///
    /// `compose(&[A, B, C])` returns `A * B * C`; applied to a vertex the
    /// rightmost matrix acts first. Matrix multiplication is associative so
    /// the grouping does not matter, but the list order does.
    pub fn compose(matrices: &[Mat4]) -> Self {
        matrices
            .iter()
            .fold(Mat4::identity(), |product, m| product * *m)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-vector convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f64; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.data[0][0] * v.x
                + self.data[0][1] * v.y
                + self.data[0][2] * v.z
                + self.data[0][3] * v.w,
            self.data[1][0] * v.x
                + self.data[1][1] * v.y
                + self.data[1][2] * v.z
                + self.data[1][3] * v.w,
            self.data[2][0] * v.x
                + self.data[2][1] * v.y
                + self.data[2][2] * v.z
                + self.data[2][3] * v.w,
            self.data[3][0] * v.x
                + self.data[3][1] * v.y
                + self.data[3][2] * v.z
                + self.data[3][3] * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_noop() {
        let v = Vec4::point(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity() * v, v);
    }

    #[test]
    fn translation_moves_points() {
        let v = Mat4::translation(1.0, 2.0, 3.0) * Vec4::point(1.0, 1.0, 1.0);
        assert_eq!(v, Vec4::point(2.0, 3.0, 4.0));
    }

    #[test]
    fn shear_adds_multiple_of_z() {
        let v = Mat4::shear_xy(2.0, -1.0) * Vec4::point(1.0, 1.0, 3.0);
        assert_relative_eq!(v.x, 7.0);
        assert_relative_eq!(v.y, -2.0);
        assert_relative_eq!(v.z, 3.0);
    }

    #[test]
    fn compose_applies_rightmost_first() {
        // Scale then translate vs translate then scale give different results.
        let scale = Mat4::scaling(2.0, 2.0, 2.0);
        let translate = Mat4::translation(1.0, 0.0, 0.0);
        let v = Vec4::point(1.0, 0.0, 0.0);

        let scale_first = Mat4::compose(&[translate, scale]) * v;
        let translate_first = Mat4::compose(&[scale, translate]) * v;

        assert_relative_eq!(scale_first.x, 3.0);
        assert_relative_eq!(translate_first.x, 4.0);
    }

    #[test]
    fn compose_matches_pairwise_products() {
        let a = Mat4::translation(1.0, 2.0, 3.0);
        let b = Mat4::scaling(2.0, 0.5, -1.0);
        let c = Mat4::shear_xy(0.25, 0.75);
        // Associativity: A * (B * C) == (A * B) * C == compose([A, B, C]).
        assert_eq!(Mat4::compose(&[a, b, c]), a * (b * c));
        assert_eq!(Mat4::compose(&[a, b, c]), (a * b) * c);
    }
}
