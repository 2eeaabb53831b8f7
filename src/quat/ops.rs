use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    approx::{ApproxEq, DefaultTolerances},
    Number, Real, Vec3,
};

use super::Quat;

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k, w] = self.vec.as_array();
        write!(f, "Quat({:?}, {:?}, {:?}, {:?})", i, j, k, w)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k, w] = self.vec.as_array();
        write!(f, "({} + {}i + {}j + {}k)", w, i, j, k)
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq<Tolerance = T> + DefaultTolerances + Copy> ApproxEq for Quat<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

impl<T: Number> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// The Hamilton product, composing two rotations.
///
/// `a * b` rotates by `b` first and by `a` second (matching matrix concatenation with column
/// vectors). The product is not commutative.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::from_components(
            a.w * b.i + a.i * b.w + a.j * b.k - a.k * b.j,
            a.w * b.j - a.i * b.k + a.j * b.w + a.k * b.i,
            a.w * b.k + a.i * b.j - a.j * b.i + a.k * b.w,
            a.w * b.w - a.i * b.i - a.j * b.j - a.k * b.k,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Multiplies by the inverse of `rhs`, undoing its rotation.
impl<T: Real> Div for Quat<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Real> DivAssign for Quat<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Rotates a vector. Equivalent to [`Quat::rotate`].
impl<T: Real> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate(rhs)
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { vec: self.vec * rhs }
    }
}

impl<T: Number> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.vec *= rhs;
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self { vec: self.vec / rhs }
    }
}

impl<T: Number> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        self.vec /= rhs;
    }
}

/// Negates every component. The result encodes the same rotation as the input.
impl<T: Number + Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}
