mod ops;
mod view;

use crate::{vec4, Mat3, Number, One, Real, RotationOrder, Sqrt, Vec3, Vector, Zero};

/// A quaternion consisting of 3 imaginary components and a real component.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space; composition is the
/// Hamilton product ([`Mul`][std::ops::Mul]), and applying a rotation to a vector is
/// [`Quat::rotate`] (or `q * v`).
///
/// The type does not enforce unit length. Every constructor named `from_*` produces a unit
/// quaternion from normalized inputs, but arithmetic can denormalize and the caller is
/// responsible for calling [`Quat::normalize`] when needed.
///
/// Components are accessible as fields `i`, `j`, `k` and `w`, with the imaginary part first
/// and the real part last.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, a unit quaternion that does not rotate anything.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y` and `z` elements become the `i`, `j` and `k` imaginary components, the `w`
    /// element becomes the real component.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its four components, imaginary part first.
    pub fn from_components(i: T, j: T, k: T, w: T) -> Self {
        Self {
            vec: [i, j, k, w].into(),
        }
    }

    /// Creates a quaternion from its imaginary and real parts.
    pub fn from_imag_real(imag: Vec3<T>, real: T) -> Self {
        Self {
            vec: imag.extend(real),
        }
    }

    /// Returns the underlying 4-dimensional vector, imaginary part in `x`/`y`/`z`, real part
    /// in `w`.
    pub fn to_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary part as a 3-dimensional vector.
    pub fn imag(self) -> Vec3<T>
    where
        T: Copy,
    {
        self.vec.xyz()
    }

    /// Returns the real part.
    pub fn real(self) -> T
    where
        T: Copy,
    {
        self.vec.w
    }
}

impl<T: Real> Quat<T> {
    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` must be normalized for the result to be a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// use std::f32::consts::TAU;
    ///
    /// let q = Quat::from_axis_angle(vec3(0.0, 0.0, 1.0), TAU / 4.0);
    /// assert_approx_eq!(q.rotate(vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0)).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_imag_real(axis * sin, cos)
    }

    /// Creates a quaternion rotating counterclockwise around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion rotating counterclockwise around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion rotating counterclockwise around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::ONE_HALF).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion from per-axis Euler angles, composed in the given
    /// [`RotationOrder`].
    ///
    /// `angles` holds the rotation around the X, Y and Z axis respectively, in radians.
    pub fn from_euler(angles: Vec3<T>, order: RotationOrder) -> Self {
        order.compose(
            Self::from_rotation_x(angles.x),
            Self::from_rotation_y(angles.y),
            Self::from_rotation_z(angles.z),
        )
    }

    /// Creates a quaternion rotating `from` onto `to` along the shortest arc.
    ///
    /// Both vectors must be normalized by the caller. Anti-parallel inputs make the rotation
    /// plane ambiguous and yield a degenerate result; use
    /// [`Quat::from_rotation_arc_with_fallback`] when they can occur.
    pub fn from_rotation_arc(from: Vec3<T>, to: Vec3<T>) -> Self {
        Self::from_imag_real(from.cross(to), T::ONE + from.dot(to)).normalize()
    }

    /// Creates a quaternion rotating `from` onto `to`, falling back to a half turn around
    /// `opposed_axis` when the inputs are (nearly) anti-parallel.
    ///
    /// Unlike [`Quat::from_rotation_arc`], the inputs do not need to be normalized.
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

    /// Returns the rotation angle in radians.
    ///
    /// The angle is measured around [`Quat::axis`] and lies in `[0, 2π)`.
    pub fn angle(self) -> T {
        self.imag().length().atan2(self.real()) * T::TWO
    }

    /// Returns the normalized rotation axis.
    ///
    /// For the identity quaternion (and other quaternions without an imaginary part) there is
    /// no unique axis and the result is NaN.
    pub fn axis(self) -> Vec3<T> {
        self.imag().normalize()
    }

    /// Returns a quaternion with the same axis but a new rotation angle.
    ///
    /// Reconstructs the quaternion through [`Quat::from_axis_angle`] rather than scaling
    /// components in place.
    pub fn with_angle(self, radians: T) -> Self {
        Self::from_axis_angle(self.axis(), radians)
    }

    /// Returns a quaternion with the same rotation angle but a new axis.
    pub fn with_axis(self, axis: Vec3<T>) -> Self {
        Self::from_axis_angle(axis, self.angle())
    }

    /// Rotates `vector` by this quaternion.
    ///
    /// Computes the sandwich product `q * v * q⁻¹` restricted to the imaginary subspace, via
    /// the double-cross-product shortcut. `self` must be a unit quaternion.
    pub fn rotate(self, vector: Vec3<T>) -> Vec3<T> {
        let imag = self.imag();
        let t = imag.cross(vector) * T::TWO;
        vector + t * self.real() + imag.cross(t)
    }

    /// Rotates `vector` by the inverse of this quaternion.
    pub fn unrotate(self, vector: Vec3<T>) -> Vec3<T> {
        self.inverse().rotate(vector)
    }

    /// Returns the equivalent 3x3 rotation matrix.
    ///
    /// `self` must be a unit quaternion.
    pub fn to_rotation_matrix(self) -> Mat3<T> {
        Mat3::from_quat(self)
    }

    /// Extracts the rotation encoded in a 3x3 rotation matrix.
    ///
    /// `mat` must be orthogonal with determinant 1 (a pure rotation). Uses Shepperd's method:
    /// the branch is picked by the largest diagonal contribution, which keeps the divisor well
    /// away from zero.
    pub fn from_rotation_matrix(mat: Mat3<T>) -> Self {
        let quarter = T::ONE_HALF * T::ONE_HALF;
        let trace = mat.trace();
        let [m00, m11, m22] = [mat[(0, 0)], mat[(1, 1)], mat[(2, 2)]];
        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            Self::from_components(
                (mat[(2, 1)] - mat[(1, 2)]) / s,
                (mat[(0, 2)] - mat[(2, 0)]) / s,
                (mat[(1, 0)] - mat[(0, 1)]) / s,
                quarter * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (T::ONE + m00 - m11 - m22).sqrt() * T::TWO;
            Self::from_components(
                quarter * s,
                (mat[(0, 1)] + mat[(1, 0)]) / s,
                (mat[(0, 2)] + mat[(2, 0)]) / s,
                (mat[(2, 1)] - mat[(1, 2)]) / s,
            )
        } else if m11 > m22 {
            let s = (T::ONE + m11 - m00 - m22).sqrt() * T::TWO;
            Self::from_components(
                (mat[(0, 1)] + mat[(1, 0)]) / s,
                quarter * s,
                (mat[(1, 2)] + mat[(2, 1)]) / s,
                (mat[(0, 2)] - mat[(2, 0)]) / s,
            )
        } else {
            let s = (T::ONE + m22 - m00 - m11).sqrt() * T::TWO;
            Self::from_components(
                (mat[(0, 2)] + mat[(2, 0)]) / s,
                (mat[(1, 2)] + mat[(2, 1)]) / s,
                quarter * s,
                (mat[(1, 0)] - mat[(0, 1)]) / s,
            )
        }
    }

    /// The conjugate: negated imaginary part, unchanged real part.
    ///
    /// For unit quaternions this equals [`Quat::inverse`].
    pub fn conjugate(self) -> Self {
        Self::from_imag_real(-self.imag(), self.real())
    }

    /// The multiplicative inverse: conjugate divided by squared length.
    ///
    /// `q * q.inverse()` is the identity for any non-zero `q`.
    pub fn inverse(self) -> Self {
        let conjugate = self.conjugate();
        Self {
            vec: conjugate.vec / self.length2(),
        }
    }

    /// Spherically interpolates between `self` and `other` along the shortest arc.
    ///
    /// Both quaternions must be normalized. `t = 0` yields `self`, `t = 1` yields a
    /// quaternion equivalent to `other` (possibly negated, since `q` and `-q` encode the same
    /// rotation).
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut dot = self.dot(other);
        // Take the shorter of the two arcs by flipping one operand.
        let other = if dot < T::ZERO {
            dot = T::ZERO - dot;
            Self { vec: -other.vec }
        } else {
            other
        };

        // Nearly-parallel operands make `sin(theta)` degenerate; fall back to a normalized
        // linear interpolation there.
        let threshold = T::ONE - T::MIN_POSITIVE.sqrt();
        if dot > threshold {
            return Self {
                vec: self.vec + (other.vec - self.vec) * t,
            }
            .normalize();
        }

        let theta = dot.clamp(T::ZERO - T::ONE, T::ONE).acos();
        let sin_theta = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self {
            vec: self.vec * a + other.vec * b,
        }
    }
}

impl<T> Quat<T> {
    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// A length other than one means multiplying a vector with this quaternion scales it in
    /// addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Computes the plain 4-component dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }
}
