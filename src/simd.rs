//! Conversions to and from the SIMD vector types of the [`wide`] crate.
//!
//! Only available when the `wide` Cargo feature is enabled.

use wide::{f32x4, f64x2, f64x4, i32x4};

use crate::{Quat, Rotor, Vec3, Vector};

impl From<Vector<f32, 4>> for f32x4 {
    fn from(v: Vector<f32, 4>) -> Self {
        f32x4::from(v.into_array())
    }
}

impl From<f32x4> for Vector<f32, 4> {
    fn from(v: f32x4) -> Self {
        Vector::from(v.to_array())
    }
}

impl From<Vector<f64, 4>> for f64x4 {
    fn from(v: Vector<f64, 4>) -> Self {
        f64x4::from(v.into_array())
    }
}

impl From<f64x4> for Vector<f64, 4> {
    fn from(v: f64x4) -> Self {
        Vector::from(v.to_array())
    }
}

impl From<Vector<f64, 2>> for f64x2 {
    fn from(v: Vector<f64, 2>) -> Self {
        f64x2::from(v.into_array())
    }
}

impl From<f64x2> for Vector<f64, 2> {
    fn from(v: f64x2) -> Self {
        Vector::from(v.to_array())
    }
}

/// The unused fourth lane is zeroed.
impl From<Vector<f32, 3>> for f32x4 {
    fn from(v: Vector<f32, 3>) -> Self {
        let [x, y, z] = v.into_array();
        f32x4::from([x, y, z, 0.0])
    }
}

/// Drops the fourth lane.
impl From<f32x4> for Vector<f32, 3> {
    fn from(v: f32x4) -> Self {
        let [x, y, z, _] = v.to_array();
        Vector::from([x, y, z])
    }
}

impl From<Vector<i32, 4>> for i32x4 {
    fn from(v: Vector<i32, 4>) -> Self {
        i32x4::from(v.into_array())
    }
}

impl From<i32x4> for Vector<i32, 4> {
    fn from(v: i32x4) -> Self {
        Vector::from(v.to_array())
    }
}

/// Lane order is `i`, `j`, `k`, `w`.
impl From<Quat<f32>> for f32x4 {
    fn from(q: Quat<f32>) -> Self {
        f32x4::from(q.to_vec().into_array())
    }
}

impl From<f32x4> for Quat<f32> {
    fn from(v: f32x4) -> Self {
        Quat::from_vec(Vector::from(v.to_array()))
    }
}

/// Lane order is the XY, XZ and YZ bivector coefficients, then the scalar part.
impl From<Rotor<f32>> for f32x4 {
    fn from(r: Rotor<f32>) -> Self {
        let [b01, b02, b12] = r.bivector().into_array();
        f32x4::from([b01, b02, b12, r.scalar()])
    }
}

impl From<f32x4> for Rotor<f32> {
    fn from(v: f32x4) -> Self {
        let [b01, b02, b12, s] = v.to_array();
        Rotor::from_bivector_scalar(Vec3::from([b01, b02, b12]), s)
    }
}
