use std::{array, fmt};

use crate::{
    traits::{Integer, Number, Real, Sqrt},
    Mat2, MinMax, One, Trig, Zero,
};

mod ops;
mod swizzle;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors directly from
///   their elements.
/// - [`Vector::splat`] broadcasts a single value into every element.
/// - [`Vector::from_fn`] initializes each element by invoking a closure with its index.
/// - [`Vector::from_slice`] copies elements out of a slice of exactly length `N`, and panics
///   for any other length.
/// - The [`From`] impl converts from an array of length `N`.
/// - [`Vector::ZERO`] is the all-zeroes vector, and the unit vectors `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` exist where the dimension allows it.
///
/// # Element Access
///
/// - Elements of vectors of dimension 2 to 4 are accessible as fields `x`, `y`, `z` and `w`.
/// - The [`Index`] and [`IndexMut`] impls work like those of arrays, panicking when out of
///   bounds.
/// - Named sub-vector accessors like [`xy`][Self::xy] or [`xzw`][Self::xzw] project a vector
///   onto some of its components; the matching `set_*` methods replace exactly those
///   components and leave the rest untouched.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the raw
///   elements, and [`bytemuck::Pod`] / [`bytemuck::Zeroable`] allow safe transmutation when
///   `T` does.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with every element set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(Vector::splat(5), vec3(5, 5, 5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector by copying elements out of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` does not contain exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(Vec3i::from_slice(&[1, 2, 3]), vec3(1, 2, 3));
    /// ```
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Copy,
    {
        assert_eq!(
            slice.len(),
            N,
            "a {N}-dimensional vector requires exactly {N} elements, got {}",
            slice.len(),
        );
        Self::from_fn(|i| slice[i])
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two vectors into one containing tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this vector into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no defined direction; normalizing it yields NaN.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// The sign of the dot product tells whether the angle between the vectors is below, at, or
    /// above 90°. [`Vector::abs_angle_to`] computes the exact angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Element-wise minimum of `self` and `other`.
    ///
    /// Each element is computed independently; for floats, NaN propagation follows
    /// [`f32::min`].
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each element of `self` to the closed range `[lower.i, upper.i]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let v = vec3(-5, 0, 5);
    /// assert_eq!(v.clamp(Vector::splat(-1), Vector::splat(1)), vec3(-1, 0, 1));
    /// ```
    pub fn clamp(self, lower: Self, upper: Self) -> Self
    where
        T: MinMax + Copy,
    {
        self.max(lower).min(upper)
    }

    /// Returns whether every element of `self` is less than the corresponding element of
    /// `other`.
    ///
    /// Unlike a lexicographic comparison, this is only a *partial* order: `a.elementwise_lt(b)`
    /// and `b.elementwise_lt(a)` can both be false for `a != b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert!(vec2(1, 2).elementwise_lt(vec2(2, 3)));
    /// assert!(!vec2(1, 2).elementwise_lt(vec2(1, 3)));
    /// ```
    pub fn elementwise_lt(&self, other: Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self[i] < other[i])
    }

    /// Returns whether every element of `self` is less than or equal to the corresponding
    /// element of `other`.
    pub fn elementwise_le(&self, other: Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self[i] <= other[i])
    }

    /// Returns whether every element of `self` is greater than the corresponding element of
    /// `other`.
    pub fn elementwise_gt(&self, other: Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self[i] > other[i])
    }

    /// Returns whether every element of `self` is greater than or equal to the corresponding
    /// element of `other`.
    pub fn elementwise_ge(&self, other: Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        (0..N).all(|i| self[i] >= other[i])
    }
}

impl<T: Integer, const N: usize> Vector<T, N> {
    /// Element-wise addition that wraps around on overflow.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(a, b)| a.wrapping_add(b))
    }

    /// Element-wise subtraction that wraps around on overflow.
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(a, b)| a.wrapping_sub(b))
    }

    /// Element-wise multiplication that wraps around on overflow.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(a, b)| a.wrapping_mul(b))
    }

    /// Element-wise addition, reporting whether any element overflowed.
    ///
    /// Overflowed elements hold the wrapped-around value. The returned flag is the logical OR
    /// of the per-element overflow flags.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let (v, overflowed) = vec2(i32::MAX, 1).overflowing_add(vec2(1, 1));
    /// assert_eq!(v, vec2(i32::MIN, 2));
    /// assert!(overflowed);
    /// ```
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        Self::overflowing_op(self, rhs, T::overflowing_add)
    }

    /// Element-wise subtraction, reporting whether any element overflowed.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        Self::overflowing_op(self, rhs, T::overflowing_sub)
    }

    /// Element-wise multiplication, reporting whether any element overflowed.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        Self::overflowing_op(self, rhs, T::overflowing_mul)
    }

    /// Element-wise division, reporting whether any element overflowed.
    ///
    /// Division by zero is reported as overflow (with the dividend as the element value)
    /// instead of panicking.
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        Self::overflowing_op(self, rhs, T::overflowing_div)
    }

    /// Element-wise remainder, reporting whether any element overflowed.
    ///
    /// A zero divisor is reported as overflow instead of panicking.
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        Self::overflowing_op(self, rhs, T::overflowing_rem)
    }

    fn overflowing_op(a: Self, b: Self, op: impl Fn(T, T) -> (T, bool)) -> (Self, bool) {
        let mut any = false;
        let out = a.zip(b).map(|(a, b)| {
            let (value, overflowed) = op(a, b);
            any |= overflowed;
            value
        });
        (out, any)
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Returns whether every element is finite (neither infinite nor NaN).
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|elem| elem.is_finite())
    }

    /// Returns whether any element is NaN.
    pub fn is_nan(&self) -> bool {
        self.0.iter().any(|elem| elem.is_nan())
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// Assumes that the Y axis points up and the X axis points to the right.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// Assumes that the Y axis points up and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    /// ```
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the signed clockwise rotation in radians needed to align `self` with `other`.
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + std::ops::Neg<Output = T>,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// Equal to the Z coordinate of the cross product of the inputs extended with Z=0.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the arguments flips its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the wedge product of `self` and `other`.
    ///
    /// Yields the coefficients of the bivector spanned by the inputs, in the XY, XZ, YZ plane
    /// order used by [`Rotor`][crate::Rotor].
    pub fn wedge(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.into_array();
        let [bx, by, bz] = other.into_array();

        #[rustfmt::skip]
        let wedge = vec3(
            ax * by - ay * bx,
            ax * bz - az * bx,
            ay * bz - az * by,
        );
        wedge
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element, yielding a 3-dimensional vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

/// Computes the element-wise minimum of a non-empty sequence of vectors.
///
/// Reduces the sequence with [`Vector::min`], so each output element is independent of the
/// others.
///
/// # Panics
///
/// Panics if `vectors` yields no elements.
///
/// # Examples
///
/// ```
/// # use quiver::*;
/// let min = min_of([vec2(4, -2), vec2(-1, 7), vec2(3, 3)]);
/// assert_eq!(min, vec2(-1, -2));
/// ```
pub fn min_of<T, const N: usize>(vectors: impl IntoIterator<Item = Vector<T, N>>) -> Vector<T, N>
where
    T: MinMax + Copy,
{
    vectors
        .into_iter()
        .reduce(Vector::min)
        .expect("cannot compute the minimum of an empty sequence of vectors")
}

/// Computes the element-wise maximum of a non-empty sequence of vectors.
///
/// # Panics
///
/// Panics if `vectors` yields no elements.
///
/// # Examples
///
/// ```
/// # use quiver::*;
/// let max = max_of([vec2(4, -2), vec2(-1, 7), vec2(3, 3)]);
/// assert_eq!(max, vec2(4, 7));
/// ```
pub fn max_of<T, const N: usize>(vectors: impl IntoIterator<Item = Vector<T, N>>) -> Vector<T, N>
where
    T: MinMax + Copy,
{
    vectors
        .into_iter()
        .reduce(Vector::max)
        .expect("cannot compute the maximum of an empty sequence of vectors")
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
