//! Conversions to and from the [`mint`] interchange types, for passing data between math
//! crates without copying through raw arrays.
//!
//! Only available when the `mint` Cargo feature is enabled.

use crate::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4, Vector};

impl<T> From<mint::Vector2<T>> for Vec2<T> {
    fn from(v: mint::Vector2<T>) -> Self {
        Vector::from([v.x, v.y])
    }
}

impl<T> From<Vec2<T>> for mint::Vector2<T> {
    fn from(v: Vec2<T>) -> Self {
        let [x, y] = v.into_array();
        mint::Vector2 { x, y }
    }
}

impl<T> From<mint::Vector3<T>> for Vec3<T> {
    fn from(v: mint::Vector3<T>) -> Self {
        Vector::from([v.x, v.y, v.z])
    }
}

impl<T> From<Vec3<T>> for mint::Vector3<T> {
    fn from(v: Vec3<T>) -> Self {
        let [x, y, z] = v.into_array();
        mint::Vector3 { x, y, z }
    }
}

impl<T> From<mint::Vector4<T>> for Vec4<T> {
    fn from(v: mint::Vector4<T>) -> Self {
        Vector::from([v.x, v.y, v.z, v.w])
    }
}

impl<T> From<Vec4<T>> for mint::Vector4<T> {
    fn from(v: Vec4<T>) -> Self {
        let [x, y, z, w] = v.into_array();
        mint::Vector4 { x, y, z, w }
    }
}

impl<T> From<mint::Point2<T>> for Vec2<T> {
    fn from(p: mint::Point2<T>) -> Self {
        Vector::from([p.x, p.y])
    }
}

impl<T> From<Vec2<T>> for mint::Point2<T> {
    fn from(v: Vec2<T>) -> Self {
        let [x, y] = v.into_array();
        mint::Point2 { x, y }
    }
}

impl<T> From<mint::Point3<T>> for Vec3<T> {
    fn from(p: mint::Point3<T>) -> Self {
        Vector::from([p.x, p.y, p.z])
    }
}

impl<T> From<Vec3<T>> for mint::Point3<T> {
    fn from(v: Vec3<T>) -> Self {
        let [x, y, z] = v.into_array();
        mint::Point3 { x, y, z }
    }
}

impl<T: Copy> From<mint::Quaternion<T>> for Quat<T> {
    fn from(q: mint::Quaternion<T>) -> Self {
        Quat::from_components(q.v.x, q.v.y, q.v.z, q.s)
    }
}

impl<T: Copy> From<Quat<T>> for mint::Quaternion<T> {
    fn from(q: Quat<T>) -> Self {
        mint::Quaternion {
            v: q.imag().into(),
            s: q.real(),
        }
    }
}

impl<T: Copy> From<mint::ColumnMatrix3<T>> for Mat3<T> {
    fn from(m: mint::ColumnMatrix3<T>) -> Self {
        Mat3::from_columns([Vec3::from(m.x), Vec3::from(m.y), Vec3::from(m.z)])
    }
}

impl<T: Copy> From<Mat3<T>> for mint::ColumnMatrix3<T> {
    fn from(m: Mat3<T>) -> Self {
        mint::ColumnMatrix3 {
            x: m.col(0).into(),
            y: m.col(1).into(),
            z: m.col(2).into(),
        }
    }
}

impl<T: Copy> From<mint::ColumnMatrix4<T>> for Mat4<T> {
    fn from(m: mint::ColumnMatrix4<T>) -> Self {
        Mat4::from_columns([
            Vec4::from(m.x),
            Vec4::from(m.y),
            Vec4::from(m.z),
            Vec4::from(m.w),
        ])
    }
}

impl<T: Copy> From<Mat4<T>> for mint::ColumnMatrix4<T> {
    fn from(m: Mat4<T>) -> Self {
        mint::ColumnMatrix4 {
            x: m.col(0).into(),
            y: m.col(1).into(),
            z: m.col(2).into(),
            w: m.col(3).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat4, Quat};

    #[test]
    fn vector_round_trip() {
        let v = vec3(1.0, 2.0, 3.0);
        let m: mint::Vector3<f32> = v.into();
        assert_eq!(m.y, 2.0);
        assert_eq!(crate::Vec3::from(m), v);

        let p: mint::Point3<f32> = v.into();
        assert_eq!(crate::Vec3::from(p), v);
    }

    #[test]
    fn quat_parts() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        let m: mint::Quaternion<f32> = q.into();
        assert_eq!(m.v.x, 1.0);
        assert_eq!(m.s, 4.0);
        assert_eq!(Quat::from(m), q);
    }

    #[test]
    fn matrix_columns() {
        let m = Mat4::from_translation(vec3(1.0, 2.0, 3.0));
        let interchange: mint::ColumnMatrix4<f32> = m.into();
        assert_eq!(interchange.w.x, 1.0);
        assert_eq!(Mat4::from(interchange), m);
    }
}
