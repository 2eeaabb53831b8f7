use std::{
    fmt,
    ops::{Mul, MulAssign},
};

use crate::{
    approx::{ApproxEq, DefaultTolerances},
    Number, Real, Vec3,
};

use super::Rotor;

impl<T: fmt::Display> fmt::Display for Rotor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.b.x, self.b.y, self.b.z, self.s)
    }
}

impl<T: ApproxEq<Tolerance = T> + DefaultTolerances + Copy> ApproxEq for Rotor<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.b.abs_diff_eq(&other.b, abs_tolerance) && self.s.abs_diff_eq(&other.s, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.b.rel_diff_eq(&other.b, rel_tolerance) && self.s.rel_diff_eq(&other.s, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.b.ulps_diff_eq(&other.b, ulps_tolerance)
            && self.s.ulps_diff_eq(&other.s, ulps_tolerance)
    }
}

/// The geometric product, composing two rotations.
///
/// `a * b` rotates by `b` first and by `a` second. The product is not commutative.
impl<T: Number> Mul for Rotor<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        // The bivector-bivector part contributes a cross product in plane space.
        let bivector = a.b * b.s + b.b * a.s + b.b.cross(a.b);
        Self {
            b: bivector,
            s: a.s * b.s - a.b.dot(b.b),
        }
    }
}

impl<T: Number> MulAssign for Rotor<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector. Equivalent to [`Rotor::rotate`].
impl<T: Real> Mul<Vec3<T>> for Rotor<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Rotor};

    #[test]
    fn composition_order() {
        let first = Rotor::from_rotation_z(1.0);
        let second = Rotor::from_rotation_x(0.5);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!((second * first).rotate(v), second.rotate(first.rotate(v))).abs(1e-5);
    }

    #[test]
    fn product_is_associative() {
        let a = Rotor::from_rotation_x(0.3);
        let b = Rotor::from_rotation_y(-1.1);
        let c = Rotor::from_rotation_z(2.4);
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(1e-6);
    }

    #[test]
    fn mul_assign_matches_mul() {
        let a = Rotor::from_rotation_y(0.7);
        let b = Rotor::from_rotation_z(-0.2);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn fmt() {
        let r = Rotor::from_bivector_scalar(vec3(1.0, 2.0, 3.0), 4.0);
        assert_eq!(format!("{r}"), "(1, 2, 3, 4)");
        assert_eq!(
            format!("{r:?}"),
            "Rotor { b: (1.0, 2.0, 3.0), s: 4.0 }"
        );
    }
}
