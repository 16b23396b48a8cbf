use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, Index, Sub},
};

use crate::math::{
    ApproxEq,
    vec::{Real, Vector},
};

/// A point in an affine space, generic over representation and space.
///
/// Unlike vectors, points cannot be added together or scaled. The
/// difference of two points is a vector, and a point plus a vector
/// is another point.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-point with `f32` components.
pub type Point2<Basis = ()> = Point<[f32; 2], Real<2, Basis>>;
/// A 3-point with `f32` components.
pub type Point3<Basis = ()> = Point<[f32; 3], Real<3, Basis>>;

/// Returns a real 2-point with `x` and `y` components.
pub const fn pt2<B>(x: f32, y: f32) -> Point2<B> {
    Point([x, y], Pd)
}
/// Returns a real 3-point with `x`, `y`, and `z` components.
pub const fn pt3<B>(x: f32, y: f32, z: f32) -> Point3<B> {
    Point([x, y, z], Pd)
}

impl<R, Sp> Point<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }

    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vector<R, Sp> {
        Vector::new(self.0)
    }
}

impl<Sp, const N: usize> Point<[f32; N], Sp> {
    /// The origin point.
    pub const ORIGIN: Self = Self([0.0; N], Pd);

    /// Returns the largest absolute value of any component of `self`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{pt3, Point3};
    ///
    /// let p: Point3 = pt3(1.0, -4.0, 2.0);
    /// assert_eq!(p.max_abs(), 4.0);
    /// ```
    #[inline]
    pub fn max_abs(&self) -> f32 {
        self.0.iter().fold(0.0, |m, c| c.abs().max(m))
    }
}

impl<B> Point2<B> {
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
}

impl<B> Point3<B> {
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

    /// Projects `self` onto a coordinate plane by dropping the component
    /// with index `axis`. The remaining components keep their order.
    ///
    /// # Panics
    /// If `axis` is not 0, 1, or 2.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::math::{pt2, pt3, Point2, Point3};
    ///
    /// let p: Point3 = pt3(1.0, 2.0, 3.0);
    /// assert_eq!(p.drop_axis(0), pt2::<()>(2.0, 3.0));
    /// assert_eq!(p.drop_axis(2), pt2::<()>(1.0, 2.0));
    /// ```
    pub fn drop_axis<C>(&self, axis: usize) -> Point2<C> {
        let [x, y, z] = self.0;
        match axis {
            0 => pt2(y, z),
            1 => pt2(x, z),
            2 => pt2(x, y),
            _ => panic!("axis index out of bounds: {axis}"),
        }
    }
}

impl<Sp, const N: usize> ApproxEq<Self, f32> for Point<[f32; N], Sp> {
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

impl<R: Copy, Sp> Copy for Point<R, Sp> {}

impl<R: Clone, Sp> Clone for Point<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Point<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R: PartialEq, Sp> PartialEq for Point<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp, const N: usize> Index<usize> for Point<[f32; N], Sp> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<Sp, const N: usize> Add<Vector<[f32; N], Sp>> for Point<[f32; N], Sp> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vector<[f32; N], Sp>) -> Self {
        Self(array::from_fn(|i| self.0[i] + v.0[i]), Pd)
    }
}

impl<Sp, const N: usize> Sub for Point<[f32; N], Sp> {
    type Output = Vector<[f32; N], Sp>;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        Vector::new(array::from_fn(|i| self.0[i] - other.0[i]))
    }
}
