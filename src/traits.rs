//! Scalar traits abstracting over the primitive types the math types accept.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Types that have a zero value, the identity element of addition.
pub trait Zero {
    /// The zero value of `Self`.
    const ZERO: Self;
}

/// Types that have a one value, the identity element of multiplication.
pub trait One {
    /// The one value of `Self`.
    const ONE: Self;
}

/// A primitive number type, either an integer or a floating-point type.
pub trait Number:
    Zero
    + One
    + Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Rem<Output = Self>
    + 'static
{
}

macro_rules! number {
    ($($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0 as $t;
            }
            impl One for $t {
                const ONE: Self = 1 as $t;
            }
            impl Number for $t {}
        )+
    };
}

number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Computes the minimum and maximum of two values.
///
/// Unlike [`Ord`], this is also implemented for floating-point types, where it propagates NaN
/// like the `min`/`max` inherent methods do.
pub trait MinMax {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! ord_min_max {
    ($($t:ty),+) => {
        $(
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }
                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}

ord_min_max!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! float_min_max {
    ($($t:ty),+) => {
        $(
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }
                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }
            }
        )+
    };
}

float_min_max!(f32, f64);

/// Trigonometric operations on floating-point types.
pub trait Trig: Sized {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
}

/// Types supporting the square root operation.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

macro_rules! float_fns {
    ($($t:ty),+) => {
        $(
            impl Trig for $t {
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }
                fn cos(self) -> Self {
                    <$t>::cos(self)
                }
                fn tan(self) -> Self {
                    <$t>::tan(self)
                }
                fn asin(self) -> Self {
                    <$t>::asin(self)
                }
                fn acos(self) -> Self {
                    <$t>::acos(self)
                }
                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }
                fn sin_cos(self) -> (Self, Self) {
                    <$t>::sin_cos(self)
                }
            }
            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )+
    };
}

float_fns!(f32, f64);

/// A floating-point scalar.
///
/// Bundles the operations the geometric types (matrix rotations, quaternions, rotors) need on
/// top of [`Number`].
pub trait Real: Number + Neg<Output = Self> + Trig + Sqrt + MinMax {
    /// Archimedes' constant.
    const PI: Self;
    /// The smallest positive normal value.
    const MIN_POSITIVE: Self;
    /// One half, used by half-angle formulas.
    const ONE_HALF: Self;
    /// Two.
    const TWO: Self;

    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
    fn clamp(self, min: Self, max: Self) -> Self;
}

macro_rules! real {
    ($($t:ty),+) => {
        $(
            impl Real for $t {
                const PI: Self = std::f64::consts::PI as $t;
                const MIN_POSITIVE: Self = <$t>::MIN_POSITIVE;
                const ONE_HALF: Self = 0.5;
                const TWO: Self = 2.0;

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
                fn clamp(self, min: Self, max: Self) -> Self {
                    <$t>::clamp(self, min, max)
                }
            }
        )+
    };
}

real!(f32, f64);

/// Integer arithmetic that reports or ignores overflow instead of panicking.
///
/// Mirrors the `overflowing_*` and `wrapping_*` inherent methods of the primitive integer
/// types so that vector-level versions can be written once, generically.
pub trait Integer: Number + Ord {
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
    /// Also reports overflow when `rhs` is zero, rather than panicking.
    fn overflowing_div(self, rhs: Self) -> (Self, bool);
    /// Also reports overflow when `rhs` is zero, rather than panicking.
    fn overflowing_rem(self, rhs: Self) -> (Self, bool);

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
}

macro_rules! integer {
    ($($t:ty),+) => {
        $(
            impl Integer for $t {
                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    <$t>::overflowing_add(self, rhs)
                }
                fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                    <$t>::overflowing_sub(self, rhs)
                }
                fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                    <$t>::overflowing_mul(self, rhs)
                }
                fn overflowing_div(self, rhs: Self) -> (Self, bool) {
                    if rhs == 0 {
                        (self, true)
                    } else {
                        <$t>::overflowing_div(self, rhs)
                    }
                }
                fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
                    if rhs == 0 {
                        (self, true)
                    } else {
                        <$t>::overflowing_rem(self, rhs)
                    }
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )+
    };
}

integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
