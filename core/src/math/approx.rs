//! Approximate equality of floating-point values.

use core::iter::zip;

/// Trait for comparing values for approximate equality.
///
/// Floats can only approximate real numbers, and rounding errors pile up
/// in any nontrivial computation: `0.1 + 0.2 == 0.3` is false. Comparing
/// with a tolerance, or *epsilon*, is more robust than exact equality.
///
/// The epsilon is *relative*: it is scaled by the magnitude of the values
/// compared, but never by less than one, so values near zero are compared
/// with an absolute tolerance.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal,
    /// using the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon for `Self`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = (self - other).abs();
        diff <= *rel_eps * self.abs().max(1.0)
    }

    fn relative_epsilon() -> Self {
        if cfg!(feature = "fp") { 1e-6 } else { 5e-3 }
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>, const N: usize> ApproxEq<Self, E> for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, rel_eps),
            (None, None) => true,
            _ => false,
        }
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// The left operand must implement [`ApproxEq`], and both must implement
/// `Debug`. An explicit epsilon may be given with `eps = <literal>`.
///
/// # Panics
///
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// # use tritri_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
///
/// assert_approx_eq!(100.0, 100.5, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq(a, b),
                "assertion failed: `{a:?} ≅ {b:?}`"
            ),
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                "assertion failed: `{a:?} ≅ {b:?}` (eps = {})",
                $eps
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    fn zero_approx_eq_negative_zero() {
        assert_approx_eq!(0.0, -0.0);
        assert_approx_eq!(-0.0, 0.0);
    }

    #[test]
    fn small_differences_are_equal() {
        assert_approx_eq!(0.0, 0.0000001);
        assert_approx_eq!(-1.0, -1.0000001);
        assert_approx_eq!(1.0e10, 1.0000001e10);
    }

    #[test]
    fn custom_epsilon() {
        assert_approx_eq!(1.0, 0.999, eps = 0.01);
        assert!(!1.0f32.approx_eq_eps(&0.9, &0.01));
    }

    #[test]
    fn arrays_and_options() {
        assert_approx_eq!([1.0f32, 2.0], [1.0000001, 2.0]);
        assert_approx_eq!(Some(0.3f32), Some(0.1 + 0.2));
        assert!(!Some(1.0f32).approx_eq(&None));
    }

    #[test]
    #[should_panic]
    fn zero_not_approx_eq_to_one() {
        assert_approx_eq!(0.0, 1.0);
    }

    #[test]
    #[should_panic]
    fn nan_not_approx_eq_to_nan() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }
}
