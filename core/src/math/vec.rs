//! Real vectors in two and three dimensions.

use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign},
};

use crate::math::approx::ApproxEq;

/// Tag type for real vector spaces (Euclidean spaces) of dimension `DIM`.
/// For example, the type `Real<3>` corresponds to ℝ³.
///
/// The `Basis` parameter can be used to distinguish between different
/// coordinate systems of the same dimension, such as model and world space.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Real<const DIM: usize, Basis = ()>(Pd<Basis>);

/// A vector type, generic over representation and space.
#[repr(transparent)]
pub struct Vector<Repr, Space>(pub Repr, Pd<Space>);

/// A 2-vector with `f32` components.
pub type Vec2<Basis = ()> = Vector<[f32; 2], Real<2, Basis>>;
/// A 3-vector with `f32` components.
pub type Vec3<Basis = ()> = Vector<[f32; 3], Real<3, Basis>>;

/// Returns a real 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<B>(x: f32, y: f32) -> Vec2<B> {
    Vector([x, y], Pd)
}

/// Returns a real 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<B>(x: f32, y: f32, z: f32) -> Vec3<B> {
    Vector([x, y, z], Pd)
}

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }

    /// Returns `self` reinterpreted as a vector in another space.
    #[inline]
    pub fn to<S>(self) -> Vector<R, S> {
        Vector(self.0, Pd)
    }
}

impl<Sp, const N: usize> Vector<[f32; N], Sp> {
    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N], Pd)
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{vec2, Vec2};
    ///
    /// let v: Vec2 = vec2(2.0, 1.0);
    /// assert_eq!(v.dot(&vec2(-1.0, 2.0)), 0.0);
    /// assert_eq!(v.dot(&v), 5.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Returns the length of `self`, squared.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the length (Euclidean norm) of `self`.
    ///
    /// Without the `fp` feature, uses a fast approximation of the square root.
    #[inline]
    pub fn len(&self) -> f32 {
        use super::float::f32;
        f32::sqrt(self.len_sqr())
    }

    /// Returns the index of the component of `self` with the largest
    /// absolute value. Ties are resolved in favor of the lower index.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{vec3, Vec3};
    ///
    /// let v: Vec3 = vec3(1.0, -3.0, 2.0);
    /// assert_eq!(v.dominant_axis(), 1);
    /// ```
    pub fn dominant_axis(&self) -> usize {
        let mut max = 0;
        for i in 1..N {
            if self.0[i].abs() > self.0[max].abs() {
                max = i;
            }
        }
        max
    }
}

impl<B> Vec2<B> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// Returns the perpendicular dot product of `self` and `other`.
    ///
    /// This is the z component of the cross product of `self` and `other`
    /// embedded in the xy plane. It is positive if `other` is
    /// counter-clockwise from `self`, negative if clockwise, and zero
    /// if the vectors are parallel.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{vec2, Vec2};
    ///
    /// let x: Vec2 = vec2(1.0, 0.0);
    /// assert_eq!(x.perp_dot(&vec2(0.0, 2.0)), 2.0);
    /// assert_eq!(x.perp_dot(&vec2(0.0, -1.0)), -1.0);
    /// assert_eq!(x.perp_dot(&vec2(-3.0, 0.0)), 0.0);
    /// ```
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl<B> Vec3<B> {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs, with length equal to the
    /// area of the parallelogram they span. It is the zero vector iff the
    /// inputs are parallel.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::Vec3;
    ///
    /// assert_eq!(<Vec3>::X.cross(&Vec3::Y), Vec3::Z);
    /// assert_eq!(<Vec3>::Y.cross(&Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }
}

impl<Sp, const N: usize> ApproxEq<Self, f32> for Vector<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, PartialEq, and Default to avoid
// superfluous where Sp: Trait bounds

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<const DIM: usize, B: Debug + Default> Debug for Real<DIM, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "R{DIM}<{:?}>", B::default())
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Index<usize> for Vector<[f32; N], Sp> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<Sp, const N: usize> Add for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]), Pd)
    }
}

impl<Sp, const N: usize> AddAssign for Vector<[f32; N], Sp> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Sp, const N: usize> Sub for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] - rhs.0[i]), Pd)
    }
}

impl<Sp, const N: usize> SubAssign for Vector<[f32; N], Sp> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Sp, const N: usize> Neg for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|c| -c), Pd)
    }
}

impl<Sp, const N: usize> Mul<f32> for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|c| c * rhs), Pd)
    }
}

impl<Sp, const N: usize> Mul<Vector<[f32; N], Sp>> for f32 {
    type Output = Vector<[f32; N], Sp>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N], Sp>) -> Self::Output {
        rhs * self
    }
}
