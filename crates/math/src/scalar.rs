//! Scalar math that works the same way for `f32` and `f64`.
//!
//! Generic code bounds on [`Scalar`] and calls either the trait methods or
//! the free functions in this module; the precision follows the type.

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

pub trait Scalar:
    Copy
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Angle of the point `(x, self)`, in `[-pi, pi]`.
    fn atan2(self, x: Self) -> Self;

    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;

    fn pow(self, y: Self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn exp2(self) -> Self;
    fn log2(self) -> Self;
    fn sqrt(self) -> Self;

    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    fn ceil(self) -> Self;

    /// Split into `(fractional, integral)`, both carrying the sign of `self`.
    /// Infinities split into `(±0, ±inf)`.
    fn modf(self) -> (Self, Self);

    /// `self * b + c` with a single rounding.
    fn fma(self, b: Self, c: Self) -> Self;

    /// Split into `(mantissa, exponent)` with the mantissa magnitude in
    /// `[0.5, 1)` and `self == mantissa * 2^exponent`. Zero, infinity and NaN
    /// come back unchanged with exponent 0.
    fn frexp(self) -> (Self, i32);

    /// `self * 2^exp`, without overflowing in between.
    fn ldexp(self, exp: i32) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty, $modf:path, $frexp:path, $ldexp:path) => {
        impl Scalar for $ty {
            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$ty>::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                <$ty>::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                <$ty>::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                <$ty>::atan(self)
            }

            #[inline]
            fn atan2(self, x: Self) -> Self {
                <$ty>::atan2(self, x)
            }

            #[inline]
            fn sinh(self) -> Self {
                <$ty>::sinh(self)
            }

            #[inline]
            fn cosh(self) -> Self {
                <$ty>::cosh(self)
            }

            #[inline]
            fn tanh(self) -> Self {
                <$ty>::tanh(self)
            }

            #[inline]
            fn asinh(self) -> Self {
                <$ty>::asinh(self)
            }

            #[inline]
            fn acosh(self) -> Self {
                <$ty>::acosh(self)
            }

            #[inline]
            fn atanh(self) -> Self {
                <$ty>::atanh(self)
            }

            #[inline]
            fn pow(self, y: Self) -> Self {
                <$ty>::powf(self, y)
            }

            #[inline]
            fn exp(self) -> Self {
                <$ty>::exp(self)
            }

            #[inline]
            fn ln(self) -> Self {
                <$ty>::ln(self)
            }

            #[inline]
            fn exp2(self) -> Self {
                <$ty>::exp2(self)
            }

            #[inline]
            fn log2(self) -> Self {
                <$ty>::log2(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$ty>::floor(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$ty>::trunc(self)
            }

            #[inline]
            fn round(self) -> Self {
                <$ty>::round(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$ty>::ceil(self)
            }

            #[inline]
            fn modf(self) -> (Self, Self) {
                $modf(self)
            }

            #[inline]
            fn fma(self, b: Self, c: Self) -> Self {
                <$ty>::mul_add(self, b, c)
            }

            #[inline]
            fn frexp(self) -> (Self, i32) {
                $frexp(self)
            }

            #[inline]
            fn ldexp(self, exp: i32) -> Self {
                $ldexp(self, exp)
            }
        }
    };
}

impl_scalar!(f32, libm::modff, libm::frexpf, libm::ldexpf);
impl_scalar!(f64, libm::modf, libm::frexp, libm::ldexp);

// --- Free functions ---

pub fn sin<T: Scalar>(angle: T) -> T {
    angle.sin()
}

pub fn cos<T: Scalar>(angle: T) -> T {
    angle.cos()
}

pub fn tan<T: Scalar>(angle: T) -> T {
    angle.tan()
}

pub fn asin<T: Scalar>(x: T) -> T {
    x.asin()
}

pub fn acos<T: Scalar>(x: T) -> T {
    x.acos()
}

pub fn atan<T: Scalar>(y_over_x: T) -> T {
    y_over_x.atan()
}

pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    y.atan2(x)
}

pub fn sinh<T: Scalar>(x: T) -> T {
    x.sinh()
}

pub fn cosh<T: Scalar>(x: T) -> T {
    x.cosh()
}

pub fn tanh<T: Scalar>(x: T) -> T {
    x.tanh()
}

pub fn asinh<T: Scalar>(x: T) -> T {
    x.asinh()
}

pub fn acosh<T: Scalar>(x: T) -> T {
    x.acosh()
}

pub fn atanh<T: Scalar>(x: T) -> T {
    x.atanh()
}

pub fn pow<T: Scalar>(x: T, y: T) -> T {
    x.pow(y)
}

pub fn exp<T: Scalar>(x: T) -> T {
    x.exp()
}

/// Natural logarithm.
pub fn log<T: Scalar>(x: T) -> T {
    x.ln()
}

pub fn exp2<T: Scalar>(x: T) -> T {
    x.exp2()
}

pub fn log2<T: Scalar>(x: T) -> T {
    x.log2()
}

pub fn sqrt<T: Scalar>(x: T) -> T {
    x.sqrt()
}

pub fn floor<T: Scalar>(x: T) -> T {
    x.floor()
}

pub fn trunc<T: Scalar>(x: T) -> T {
    x.trunc()
}

pub fn round<T: Scalar>(x: T) -> T {
    x.round()
}

pub fn ceil<T: Scalar>(x: T) -> T {
    x.ceil()
}

/// Returns `(fractional, integral)`.
pub fn modf<T: Scalar>(x: T) -> (T, T) {
    x.modf()
}

pub fn fma<T: Scalar>(a: T, b: T, c: T) -> T {
    a.fma(b, c)
}

/// Returns `(mantissa, exponent)`.
pub fn frexp<T: Scalar>(x: T) -> (T, i32) {
    x.frexp()
}

pub fn ldexp<T: Scalar>(x: T, exp: i32) -> T {
    x.ldexp(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_circle<T: Scalar>(angle: T) -> T {
        sin(angle) * sin(angle) + cos(angle) * cos(angle)
    }

    #[test]
    fn test_generic_call_keeps_precision() {
        assert!((unit_circle(0.7_f32) - 1.0).abs() < 1e-6);
        assert!((unit_circle(0.7_f64) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_modf_infinity() {
        assert_eq!(modf(f64::INFINITY), (0.0, f64::INFINITY));
        let (frac, int) = modf(f32::NEG_INFINITY);
        assert_eq!(frac, 0.0);
        assert!(frac.is_sign_negative());
        assert_eq!(int, f32::NEG_INFINITY);
    }
}
