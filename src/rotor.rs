mod ops;

use crate::{vec3, Mat3, Number, One, Real, RotationOrder, Sqrt, Vec3, Vector, Zero};

/// A rotor, the geometric-algebra representation of a 3D rotation.
///
/// A rotor consists of a bivector part (the rotation plane, scaled) and a scalar part. Unlike a
/// quaternion, which rotates *around an axis*, a rotor rotates *within a plane*; in 3
/// dimensions the two are isomorphic, but the plane formulation generalizes to other
/// dimensions.
///
/// Composition is the geometric product ([`Mul`][std::ops::Mul]), and applying a rotation to a
/// vector is [`Rotor::rotate`] (or `r * v`). Constructors named `from_*` produce unit rotors
/// from normalized inputs; repeated products can denormalize, which
/// [`Rotor::normalize`] repairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotor<T> {
    /// Bivector coefficients for the XY, XZ and YZ planes, in that order.
    b: Vec3<T>,
    /// Scalar part.
    s: T,
}

impl<T: Zero + One> Rotor<T> {
    /// The identity rotor, which does not rotate anything.
    pub const IDENTITY: Self = Self {
        b: Vector::ZERO,
        s: T::ONE,
    };
}

impl<T> Rotor<T> {
    /// Creates a rotor from its bivector part (XY, XZ and YZ plane coefficients) and scalar
    /// part.
    pub fn from_bivector_scalar(bivector: Vec3<T>, scalar: T) -> Self {
        Self {
            b: bivector,
            s: scalar,
        }
    }

    /// Returns the bivector part as XY, XZ and YZ plane coefficients.
    pub fn bivector(self) -> Vec3<T> {
        self.b
    }

    /// Returns the scalar part.
    pub fn scalar(self) -> T {
        self.s
    }
}

impl<T: Real> Rotor<T> {
    /// Creates a rotor rotating by `radians` within `plane`.
    ///
    /// `plane` holds normalized XY, XZ and YZ bivector coefficients (as produced by
    /// [`Vector::wedge`] of two orthonormal vectors).
    pub fn from_plane_angle(plane: Vec3<T>, radians: T) -> Self {
        // The sandwich product applies the reverse on the left, hence the negated sine.
        Self {
            b: plane * (T::ZERO - (radians * T::ONE_HALF).sin()),
            s: (radians * T::ONE_HALF).cos(),
        }
    }

    /// Creates a rotor rotating by `radians` around `axis`.
    ///
    /// `axis` must be normalized. The rotation plane is the dual of the axis.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        Self::from_plane_angle(vec3(axis.z, T::ZERO - axis.y, axis.x), radians)
    }

    /// Creates a rotor rotating counterclockwise around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_bivector_scalar(vec3(T::ZERO, T::ZERO, T::ZERO - sin), cos)
    }

    /// Creates a rotor rotating counterclockwise around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_bivector_scalar(vec3(T::ZERO, sin, T::ZERO), cos)
    }

    /// Creates a rotor rotating counterclockwise around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_bivector_scalar(vec3(T::ZERO - sin, T::ZERO, T::ZERO), cos)
    }

    /// Creates a rotor from per-axis Euler angles, composed in the given [`RotationOrder`].
    pub fn from_euler(angles: Vec3<T>, order: RotationOrder) -> Self {
        order.compose(
            Self::from_rotation_x(angles.x),
            Self::from_rotation_y(angles.y),
            Self::from_rotation_z(angles.z),
        )
    }

    /// Creates a rotor rotating `from` onto `to` along the shortest arc.
    ///
    /// Both vectors must be normalized. Anti-parallel inputs make the rotation plane ambiguous
    /// and yield a degenerate result; use [`Rotor::from_rotation_arc_with_fallback`] when they
    /// can occur.
    pub fn from_rotation_arc(from: Vec3<T>, to: Vec3<T>) -> Self {
        // The sandwich product applies the reverse on the left, so the wedge takes its
        // operands in to-from order.
        Self {
            b: to.wedge(from),
            s: T::ONE + from.dot(to),
        }
        .normalize()
    }

    /// Creates a rotor rotating `from` onto `to`, falling back to a half turn around
    /// `opposed_axis` when the inputs are (nearly) anti-parallel.
    ///
    /// Unlike [`Rotor::from_rotation_arc`], the inputs do not need to be normalized.
    pub fn from_rotation_arc_with_fallback(
        from: Vec3<T>,
        to: Vec3<T>,
        opposed_axis: Vec3<T>,
    ) -> Self {
        let normals_dot = from.normalize().dot(to.normalize());
        if normals_dot < T::MIN_POSITIVE - T::ONE {
            Self::from_axis_angle(opposed_axis, T::PI)
        } else {
            Self::from_rotation_arc(from.normalize(), to.normalize())
        }
    }

    /// The geometric product of two vectors, a rotor that rotates `a` towards `b` *twice*
    /// over.
    ///
    /// The bivector part is `a ∧ b`, the scalar part is `a · b`.
    pub fn geometric_product(a: Vec3<T>, b: Vec3<T>) -> Self {
        Self {
            b: a.wedge(b),
            s: a.dot(b),
        }
    }

    /// Rotates `vector` by this rotor.
    ///
    /// Computes the sandwich product `R̃ * v * R`. `self` must be a unit rotor.
    pub fn rotate(self, vector: Vec3<T>) -> Vec3<T> {
        let [b01, b02, b12] = self.b.into_array();
        let s = self.s;

        // First half of the sandwich yields a vector plus a trivector.
        let q = vec3(
            s * vector.x + vector.y * b01 + vector.z * b02,
            s * vector.y - vector.x * b01 + vector.z * b12,
            s * vector.z - vector.x * b02 - vector.y * b12,
        );
        let trivector = vector.y * b02 - vector.x * b12 - vector.z * b01;

        vec3(
            s * q.x + q.y * b01 + q.z * b02 - trivector * b12,
            s * q.y - q.x * b01 + trivector * b02 + q.z * b12,
            s * q.z - trivector * b01 - q.x * b02 - q.y * b12,
        )
    }

    /// Rotates `vector` by the inverse of this rotor.
    pub fn unrotate(self, vector: Vec3<T>) -> Vec3<T> {
        self.reverse().rotate(vector)
    }

    /// Returns the equivalent 3x3 rotation matrix.
    ///
    /// `self` must be a unit rotor.
    pub fn to_rotation_matrix(self) -> Mat3<T> {
        Mat3::from_columns([
            self.rotate(Vec3::X),
            self.rotate(Vec3::Y),
            self.rotate(Vec3::Z),
        ])
    }

    /// The reverse: negated bivector part, unchanged scalar part.
    ///
    /// For unit rotors the reverse is the inverse rotation.
    pub fn reverse(self) -> Self {
        Self {
            b: -self.b,
            s: self.s,
        }
    }
}

impl<T> Rotor<T> {
    /// Returns the squared length of this rotor.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.b.length2() + self.s * self.s
    }

    /// Returns the length of this rotor.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this rotor (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let recip = T::ONE / self.length();
        Self {
            b: self.b * recip,
            s: self.s * recip,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use crate::{assert_approx_eq, vec3, Quat, Rotor, RotationOrder, Vec3f};

    #[test]
    fn identity() {
        let r = Rotor::<f32>::IDENTITY;
        assert_eq!(r.length(), 1.0);
        assert_eq!(r.rotate(vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(r * Rotor::IDENTITY, r);
    }

    #[test]
    fn quarter_turns() {
        let quarter = TAU / 4.0;
        assert_approx_eq!(
            Rotor::from_rotation_z(quarter).rotate(Vec3f::X),
            Vec3f::Y
        )
        .abs(1e-6);
        assert_approx_eq!(
            Rotor::from_rotation_x(quarter).rotate(Vec3f::Y),
            Vec3f::Z
        )
        .abs(1e-6);
        assert_approx_eq!(
            Rotor::from_rotation_y(quarter).rotate(Vec3f::Z),
            Vec3f::X
        )
        .abs(1e-6);
    }

    #[test]
    fn matches_quaternion() {
        let axis = vec3(1.0, -2.0, 0.5).normalize();
        for angle in [0.1, 1.3, -2.0, PI] {
            let r = Rotor::from_axis_angle(axis, angle);
            let q = Quat::from_axis_angle(axis, angle);
            for v in [Vec3f::X, Vec3f::Y, Vec3f::Z, vec3(3.0, -1.0, 0.25)] {
                assert_approx_eq!(r.rotate(v), q.rotate(v)).abs(1e-5);
            }
        }
    }

    #[test]
    fn plane_angle_rotates_within_plane() {
        // The XY plane is `X ∧ Y`; a quarter turn in it takes X to Y.
        let plane = Vec3f::X.wedge(Vec3f::Y);
        let r = Rotor::from_plane_angle(plane, TAU / 4.0);
        assert_approx_eq!(r.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
        assert_approx_eq!(r.rotate(Vec3f::Z), Vec3f::Z).abs(1e-6);
    }

    #[test]
    fn reverse_undoes_rotation() {
        let r = Rotor::from_euler(vec3(0.4, -0.9, 2.2), RotationOrder::Zxy);
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(r.unrotate(r.rotate(v)), v).abs(1e-5);
        let round_trip = r * r.reverse();
        assert_approx_eq!(round_trip.bivector(), Vec3f::ZERO).abs(1e-6);
        assert_approx_eq!(round_trip.scalar(), 1.0).abs(1e-6);
    }

    #[test]
    fn rotation_arc() {
        let r = Rotor::from_rotation_arc(Vec3f::X, Vec3f::Y);
        assert_approx_eq!(r.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
        assert_approx_eq!(r.length(), 1.0).abs(1e-6);

        // Anti-parallel input uses the fallback axis for a half turn.
        let r = Rotor::from_rotation_arc_with_fallback(Vec3f::X, -Vec3f::X, Vec3f::Z);
        assert_approx_eq!(r.rotate(Vec3f::X), -Vec3f::X).abs(1e-6);
    }

    #[test]
    fn geometric_product_doubles_the_angle() {
        // X and the diagonal are 45° apart, so their product is a 90° rotation.
        let diagonal = vec3(1.0, 1.0, 0.0).normalize();
        let r = Rotor::geometric_product(diagonal, Vec3f::X);
        assert_approx_eq!(r.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    }

    #[test]
    fn euler_matches_matrix() {
        let angles = vec3(1.0, 0.5, -0.7);
        for order in [
            RotationOrder::Xyz,
            RotationOrder::Xzy,
            RotationOrder::Yxz,
            RotationOrder::Yzx,
            RotationOrder::Zxy,
            RotationOrder::Zyx,
        ] {
            let r = Rotor::from_euler(angles, order);
            let m = crate::Mat3::from_euler(angles, order);
            let v = vec3(1.0, 2.0, 3.0);
            assert_approx_eq!(r.rotate(v), m * v).abs(1e-5);
        }
    }

    #[test]
    fn rotation_matrix_agrees() {
        let r = Rotor::from_axis_angle(vec3(0.0, 1.0, 0.0), 0.8);
        let m = r.to_rotation_matrix();
        let v = vec3(2.0, -3.0, 1.0);
        assert_approx_eq!(m * v, r.rotate(v)).abs(1e-5);
    }
}
