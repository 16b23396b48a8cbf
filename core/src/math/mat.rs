//! Affine transformation matrices.

use core::fmt::{self, Debug, Formatter};

use crate::math::{ApproxEq, Point3, Vec3, pt3};

/// A 4×4 matrix of `f32`, in row-major order, representing an affine
/// transformation of 3-space.
///
/// Points are treated as column vectors with an implicit fourth
/// component w = 1, so applying a matrix `M` to a point `p` computes
/// `M p`.
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns a matrix that translates points by `v`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{pt3, vec3, Mat4, Point3};
    ///
    /// let m = Mat4::translate(vec3(1.0, 2.0, 3.0));
    /// let p: Point3 = pt3(0.5, 0.0, -3.0);
    /// assert_eq!(m.apply(&p), pt3(1.5, 2.0, 0.0));
    /// ```
    pub fn translate(v: Vec3) -> Self {
        let [x, y, z] = v.0;
        Self([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns a matrix that scales points by `s` about the origin.
    pub fn scale(s: f32) -> Self {
        Self([
            [s, 0.0, 0.0, 0.0],
            [0.0, s, 0.0, 0.0],
            [0.0, 0.0, s, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the composition of `self` and `other`, such that applying
    /// the result is equivalent to applying `self` first and then `other`.
    ///
    /// In matrix terms, returns `other · self`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{pt3, vec3, Mat4, Point3};
    ///
    /// let m = Mat4::scale(2.0).then(&Mat4::translate(vec3(1.0, 0.0, 0.0)));
    /// let p: Point3 = pt3(1.0, 1.0, 1.0);
    /// assert_eq!(m.apply(&p), pt3(3.0, 2.0, 2.0));
    /// ```
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let (a, b) = (&other.0, &self.0);
        let mut res = [[0.0; 4]; 4];
        for (r, row) in res.iter_mut().enumerate() {
            for (c, el) in row.iter_mut().enumerate() {
                *el = (0..4).map(|k| a[r][k] * b[k][c]).sum();
            }
        }
        Self(res)
    }

    /// Applies `self` to a point.
    pub fn apply<B>(&self, p: &Point3<B>) -> Point3<B> {
        let [x, y, z] = p.0;
        let m = &self.0;
        let row = |r: usize| m[r][0] * x + m[r][1] * y + m[r][2] * z + m[r][3];
        pt3(row(0), row(1), row(2))
    }

    /// Returns the translation part of `self`.
    pub fn translation(&self) -> Vec3 {
        Vec3::new([self.0[0][3], self.0[1][3], self.0[2][3]])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ApproxEq<Self, f32> for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for row in &self.0 {
            writeln!(f, "    {row:>6.2?}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::vec3;

    use super::*;

    #[test]
    fn identity_is_noop() {
        let p: Point3 = pt3(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity().apply(&p), p);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn translations_compose_additively() {
        let m = Mat4::translate(vec3(0.25, 0.0, 0.0))
            .then(&Mat4::translate(vec3(0.5, -1.0, 0.0)));

        assert_approx_eq!(m, Mat4::translate(vec3(0.75, -1.0, 0.0)));
        assert_eq!(m.translation(), vec3(0.75, -1.0, 0.0));
    }

    #[test]
    fn composition_order() {
        let t = Mat4::translate(vec3(1.0, 0.0, 0.0));
        let s = Mat4::scale(3.0);
        let p: Point3 = pt3(1.0, 0.0, 0.0);

        // Translate, then scale
        assert_eq!(t.then(&s).apply(&p), pt3(6.0, 0.0, 0.0));
        // Scale, then translate
        assert_eq!(s.then(&t).apply(&p), pt3(4.0, 0.0, 0.0));
    }
}
