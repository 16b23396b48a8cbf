//! Floating-point compatibility API.
//!
//! `core` does not provide a square root for `f32`. This module re-exports
//! one from `std`, `libm`, or `micromath`, depending on the enabled feature,
//! and falls back to a fast approximation if none of them is enabled.
//! Use it through the `f32` alias: `float::f32::sqrt(x)`.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrtf as sqrt;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
}

pub mod fallback {
    /// Returns the approximate square root of `x`.
    ///
    /// Returns zero if `x` is zero, and NaN if `x` is negative.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 {
            return 0.0;
        }
        x * fast_recip_sqrt(x)
    }

    /// Returns a fast approximation of the reciprocal square root of `x`.
    #[inline]
    pub fn fast_recip_sqrt(x: f32) -> f32 {
        // https://en.wikipedia.org/wiki/Fast_inverse_square_root
        const MAGIC: u32 = 0x5f37_5a86;
        if x < 0.0 {
            return f32::NAN;
        }
        let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
        // Two rounds of Newton's method
        let y = y * (1.5 - 0.5 * x * y * y);
        y * (1.5 - 0.5 * x * y * y)
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn fallback_sqrt() {
        use fallback as fb;
        assert_approx_eq!(fb::sqrt(9.0), 3.0, eps = 1e-4);
        assert_approx_eq!(fb::sqrt(2.0), core::f32::consts::SQRT_2, eps = 1e-4);
        assert_approx_eq!(fb::sqrt(1e6), 1e3, eps = 1e-4);
        assert_eq!(fb::sqrt(0.0), 0.0);
        assert!(fb::sqrt(-1.0).is_nan());
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_sqrt() {
        assert_eq!(libm::sqrt(16.0), 4.0);
        assert!(libm::sqrt(-1.0).is_nan());
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_sqrt() {
        assert_approx_eq!(mm::sqrt(9.0), 3.0);
        assert_approx_eq!(mm::sqrt(16.0), 4.0);
    }

    #[test]
    fn selected_sqrt() {
        assert_approx_eq!(f32::sqrt(25.0), 5.0, eps = 1e-4);
    }
}
