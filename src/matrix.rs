use std::{
    array, fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
};

use crate::{Number, One, Quat, Real, Trig, Vec3, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// The order in which per-axis Euler rotations are composed.
///
/// The first letter names the axis that is applied to a vector first. With column vectors and
/// right-to-left application this means [`RotationOrder::Zxy`] composes the final rotation as
/// `Y * X * Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    #[default]
    Zxy,
    Zyx,
}

impl RotationOrder {
    /// Composes three per-axis rotations (for the X, Y and Z axis respectively) in this order.
    ///
    /// `compose` is used with all three rotation representations (matrix, quaternion, rotor);
    /// the multiplication is right-to-left in every case.
    pub(crate) fn compose<R: Copy + std::ops::Mul<Output = R>>(self, x: R, y: R, z: R) -> R {
        let [first, second, third] = match self {
            Self::Xyz => [x, y, z],
            Self::Xzy => [x, z, y],
            Self::Yxz => [y, x, z],
            Self::Yzx => [y, z, x],
            Self::Zxy => [z, x, y],
            Self::Zyx => [z, y, x],
        };
        third * second * first
    }
}

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays of row or
///   column vectors.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given diagonal.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the usual named constants.
/// - The square 3x3/4x4 types additionally have rotation constructors: from an angle and axis
///   (Rodrigues' formula), from Euler angles with a configurable [`RotationOrder`], and from a
///   [`Quat`].
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(usize, usize)` tuples; the first
/// element is the *row*, the second the *column*, both 0-based. Indexing out of bounds panics,
/// [`Matrix::get`] and [`Matrix::get_mut`] are the checked variants. Whole rows and columns
/// are accessible via [`Matrix::row`] / [`Matrix::col`] and replaceable via
/// [`Matrix::set_row`] / [`Matrix::set_col`].
///
/// ```
/// # use quiver::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a flat slice in column-major order.
    ///
    /// The first `R` elements form the first column, the next `R` elements the second, and so
    /// on.
    ///
    /// # Panics
    ///
    /// Panics unless `slice` contains exactly `R * C` elements.
    pub fn from_column_major_slice(slice: &[T]) -> Self
    where
        T: Copy,
    {
        assert_eq!(
            slice.len(),
            R * C,
            "a {R}x{C} matrix requires exactly {} elements, got {}",
            R * C,
            slice.len(),
        );
        Self::from_fn(|row, col| slice[col * R + row])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Resizes this matrix, by either truncating its rows and columns, or extending them with
    /// zeroes.
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| {
            if col < C && row < R {
                mem::replace(&mut self[(row, col)], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (c, column) in self.0.into_iter().enumerate() {
            for (r, elem) in column.into_iter().enumerate() {
                out.0[r][c] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of
    /// bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the `index`th row as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(index < R, "row index {index} out of range for {R} rows");
        Vector::from_fn(|col| self[(index, col)])
    }

    /// Returns the `index`th column as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    pub fn col(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.0[index])
    }

    /// Replaces the `index`th row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    pub fn set_row(&mut self, index: usize, row: impl Into<Vector<T, C>>) {
        assert!(index < R, "row index {index} out of range for {R} rows");
        for (col, elem) in row.into().into_array().into_iter().enumerate() {
            self[(index, col)] = elem;
        }
    }

    /// Replaces the `index`th column.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    pub fn set_col(&mut self, index: usize, col: impl Into<Vector<T, R>>) {
        self.0[index] = col.into().into_array();
    }

    /// Computes the outer product of two vectors.
    ///
    /// Element `(r, c)` of the result is `a[r] * b[c]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let m = Matrix::outer_product(vec2(1, 2), vec3(3, 4, 5));
    /// assert_eq!(m, Matrix::from_rows([
    ///     [3, 4, 5],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn outer_product(a: Vector<T, R>, b: Vector<T, C>) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| a[row] * b[col])
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without
    /// dropping the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(col,row)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col][row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // `[T::ZERO; N]` would require `T: Copy`, so `T::ZERO` is duplicated element by
        // element instead.
        let mut mat = Self::new_uninit();
        let mut col = 0;
        while col < C {
            let mut row = 0;
            while row < R {
                mat.0[col][row] = MaybeUninit::new(T::ZERO);
                row += 1;
            }
            col += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for the safety invariant the caller needs to uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal, with zero everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of the elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not invertible (its [`determinant()`][Self::determinant] is zero).
    pub fn invert(&self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        let [[a, c], [b, d]] = self.0;
        Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(T::ZERO - radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_columns([[cos, sin], [T::ZERO - sin, cos]])
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverts this 3x3 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not invertible (its [`determinant()`][Self::determinant] is zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use quiver::*;
    /// assert_eq!(Mat3f::IDENTITY.invert(), Mat3f::IDENTITY);
    /// ```
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        // Adjugate divided by the determinant. Named after the row-major layout:
        // [a b c; d e f; g h i].
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        Matrix::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]) * (T::ONE / det)
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Creates a rotation matrix for a counterclockwise rotation around the X axis.
    pub fn rotation_x(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, c, -s],
            [T::ZERO, s, c],
        ])
    }

    /// Creates a rotation matrix for a counterclockwise rotation around the Y axis.
    pub fn rotation_y(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [c, T::ZERO, s],
            [T::ZERO, T::ONE, T::ZERO],
            [-s, T::ZERO, c],
        ])
    }

    /// Creates a rotation matrix for a counterclockwise rotation around the Z axis.
    pub fn rotation_z(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [c, -s, T::ZERO],
            [s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a rotation matrix for a rotation of `radians` around `axis`, using Rodrigues'
    /// rotation formula.
    ///
    /// `axis` is normalized internally, so it may have any non-zero length.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let [x, y, z] = axis.normalize().into_array();
        let (s, c) = radians.sin_cos();
        let t = T::ONE - c;

        Self::from_rows([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
        ])
    }

    /// Creates a rotation matrix from per-axis Euler angles, composed in the given
    /// [`RotationOrder`].
    ///
    /// `angles` holds the rotation around the X, Y and Z axis respectively, in radians.
    pub fn from_euler(angles: Vec3<T>, order: RotationOrder) -> Self {
        order.compose(
            Self::rotation_x(angles.x),
            Self::rotation_y(angles.y),
            Self::rotation_z(angles.z),
        )
    }

    /// Creates the rotation matrix equivalent to the given unit quaternion.
    ///
    /// The result is only a pure rotation if `quat` is normalized.
    pub fn from_quat(quat: Quat<T>) -> Self {
        let (x, y, z, w) = (quat.i, quat.j, quat.k, quat.w);
        let two = T::TWO;

        Self::from_rows([
            [
                T::ONE - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ],
            [
                two * (x * y + z * w),
                T::ONE - two * (x * x + z * z),
                two * (y * z - x * w),
            ],
            [
                two * (x * z - y * w),
                two * (y * z + x * w),
                T::ONE - two * (x * x + y * y),
            ],
        ])
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let (s, c) = self.subfactors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Inverts this 4x4 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not invertible (its [`determinant()`][Self::determinant] is zero).
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        // Expansion by 2x2 subfactors; row-major scalars [a b c d; e f g h; i j k l; m n o p].
        let [[a, e, i, m], [b, f, j, n], [c, g, k, o], [d, h, l, p]] = self.0;
        let (s, cf) = self.subfactors();

        Matrix::from_rows([
            [
                f * cf[5] - g * cf[4] + h * cf[3],
                c * cf[4] - b * cf[5] - d * cf[3],
                n * s[5] - o * s[4] + p * s[3],
                k * s[4] - j * s[5] - l * s[3],
            ],
            [
                g * cf[2] - e * cf[5] - h * cf[1],
                a * cf[5] - c * cf[2] + d * cf[1],
                o * s[2] - m * s[5] - p * s[1],
                i * s[5] - k * s[2] + l * s[1],
            ],
            [
                e * cf[4] - f * cf[2] + h * cf[0],
                b * cf[2] - a * cf[4] - d * cf[0],
                m * s[4] - n * s[2] + p * s[0],
                j * s[2] - i * s[4] - l * s[0],
            ],
            [
                f * cf[1] - e * cf[3] - g * cf[0],
                a * cf[3] - b * cf[1] + c * cf[0],
                n * s[1] - m * s[3] - o * s[0],
                i * s[3] - j * s[1] + k * s[0],
            ],
        ]) * (T::ONE / det)
    }

    /// 2x2 subfactors of the upper and lower half of the matrix, shared between
    /// `determinant` and `invert`.
    fn subfactors(&self) -> ([T; 6], [T; 6]) {
        let [[a, e, i, m], [b, f, j, n], [c, g, k, o], [d, h, l, p]] = self.0;
        let s = [
            a * f - e * b,
            a * g - e * c,
            a * h - e * d,
            b * g - f * c,
            b * h - f * d,
            c * h - g * d,
        ];
        let c = [
            i * n - m * j,
            i * o - m * k,
            i * p - m * l,
            j * o - n * k,
            j * p - n * l,
            k * p - o * l,
        ];
        (s, c)
    }

    /// Embeds a 3x3 matrix in the upper-left corner, filling the rest with identity values.
    pub fn from_mat3(mat: Matrix<T, 3, 3>) -> Self
    where
        T: One,
    {
        Self::from_fn(|row, col| {
            if row < 3 && col < 3 {
                mat[(row, col)]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Creates a matrix that translates by `translation`.
    pub fn from_translation(translation: Vec3<T>) -> Self
    where
        T: One,
    {
        let mut this = Self::IDENTITY;
        this.set_col(3, translation.extend(T::ONE));
        this
    }

    /// Creates a matrix that scales each axis by the matching element of `scale`.
    pub fn from_scale(scale: Vec3<T>) -> Self
    where
        T: One,
    {
        Self::from_diagonal(scale.extend(T::ONE))
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Creates a rotation matrix for a rotation of `radians` around `axis`.
    ///
    /// The rotation block is built with [`Matrix::from_axis_angle`] for 3x3 matrices.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        Self::from_mat3(Mat3::from_axis_angle(axis, radians))
    }

    /// Creates a rotation matrix from per-axis Euler angles, composed in the given
    /// [`RotationOrder`].
    ///
    /// There is no 4x4-specific default order; callers that want [`RotationOrder::Zyx`]
    /// (a common convention for world transforms) have to pass it explicitly, the same as
    /// any other order.
    pub fn from_euler(angles: Vec3<T>, order: RotationOrder) -> Self {
        Self::from_mat3(Mat3::from_euler(angles, order))
    }

    /// Creates the rotation matrix equivalent to the given unit quaternion.
    pub fn from_quat(quat: Quat<T>) -> Self {
        Self::from_mat3(Mat3::from_quat(quat))
    }

    /// Builds a transform that scales, then rotates, then translates.
    ///
    /// With this library's right-to-left convention the result is
    /// `Scale * Rotation * Translation`.
    pub fn from_scale_rotation_translation(
        scale: Vec3<T>,
        rotation: Quat<T>,
        translation: Vec3<T>,
    ) -> Self {
        Self::from_scale(scale) * Self::from_quat(rotation) * Self::from_translation(translation)
    }

    /// Combines a 3x3 scale/rotation block with a translation.
    pub fn from_mat3_translation(mat: Matrix<T, 3, 3>, translation: Vec3<T>) -> Self {
        Self::from_mat3(mat) * Self::from_translation(translation)
    }

    /// Prepends a rotation by `quat`, returning `R * self`.
    pub fn rotated_by(self, quat: Quat<T>) -> Self {
        Self::from_quat(quat) * self
    }

    /// Prepends the inverse rotation of `quat`.
    pub fn unrotated_by(self, quat: Quat<T>) -> Self {
        self.rotated_by(quat.inverse())
    }

    /// Prepends a scale, returning `S * self`.
    pub fn scaled_by(self, scale: Vec3<T>) -> Self {
        Self::from_scale(scale) * self
    }

    /// Prepends the reciprocal scale.
    pub fn unscaled_by(self, scale: Vec3<T>) -> Self {
        self.scaled_by(Vector::splat(T::ONE) / scale)
    }

    /// Adds `translation` to the translation column.
    pub fn translated_by(self, translation: Vec3<T>) -> Self {
        let mut this = self;
        this.set_col(3, this.col(3) + translation.extend(T::ZERO));
        this
    }

    /// Subtracts `translation` from the translation column.
    pub fn untranslated_by(self, translation: Vec3<T>) -> Self {
        self.translated_by(-translation)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Quat};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn column_major_slice() {
        // Sequential mapping: the slice fills column 0 top to bottom, then column 1.
        let mat = Matrix::<i32, 2, 3>::from_column_major_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(mat[(0, 0)], 1);
        assert_eq!(mat[(1, 0)], 2);
        assert_eq!(mat[(0, 1)], 3);
        assert_eq!(mat[(1, 1)], 4);
        assert_eq!(mat[(0, 2)], 5);
        assert_eq!(mat[(1, 2)], 6);
        assert_eq!(mat, Matrix::from_rows([[1, 3, 5], [2, 4, 6]]));
    }

    #[test]
    #[should_panic(expected = "requires exactly 4 elements")]
    fn column_major_slice_wrong_len() {
        Mat2f::from_column_major_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn rows_and_columns() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(mat.row(1), vec3(4, 5, 6));
        assert_eq!(mat.col(2), vec3(3, 6, 9));

        mat.set_row(0, [0, 0, 0]);
        mat.set_col(1, [-1, -2, -3]);
        assert_eq!(mat, Matrix::from_rows([[0, -1, 0], [4, -2, 6], [7, -3, 9]]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn row_out_of_range() {
        let mat = Mat3f::IDENTITY;
        mat.row(3);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(mat * vec, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
        // Row vector * matrix uses the transposed interpretation.
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        assert_eq!(Mat4f::from_diagonal([2.0, 3.0, 4.0, 5.0]).determinant(), 120.0);
    }

    #[test]
    fn invert_3x3() {
        #[rustfmt::skip]
        let mat = Mat3f::from_rows([
            [ 2.0, 0.0, 0.0],
            [ 0.0, 4.0, 0.0],
            [ 0.0, 0.0, 8.0],
        ]);
        assert_eq!(
            mat.invert(),
            Mat3f::from_diagonal([0.5, 0.25, 0.125])
        );

        let rot = Mat3f::from_axis_angle(vec3(1.0, 2.0, 0.5), 1.2);
        assert_approx_eq!(rot * rot.invert(), Mat3f::IDENTITY).abs(1e-6);
        assert_approx_eq!(rot.invert(), rot.transpose()).abs(1e-6);
    }

    #[test]
    fn invert_4x4() {
        let m = Mat4f::from_scale_rotation_translation(
            vec3(2.0, 2.0, 2.0),
            Quat::from_axis_angle(vec3(0.0, 1.0, 0.0), 0.7),
            vec3(1.0, -2.0, 3.0),
        );
        assert_approx_eq!(m * m.invert(), Mat4f::IDENTITY).abs(1e-5);
        assert_approx_eq!(m.invert() * m, Mat4f::IDENTITY).abs(1e-5);
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular() {
        Mat3f::ZERO.invert();
    }

    #[test]
    fn axis_angle_matches_per_axis_rotations() {
        for angle in [0.0, 0.5, PI / 2.0, 2.5] {
            assert_approx_eq!(
                Mat3f::from_axis_angle(vec3(1.0, 0.0, 0.0), angle),
                Mat3f::rotation_x(angle)
            )
            .abs(1e-6);
            assert_approx_eq!(
                Mat3f::from_axis_angle(vec3(0.0, 1.0, 0.0), angle),
                Mat3f::rotation_y(angle)
            )
            .abs(1e-6);
            assert_approx_eq!(
                Mat3f::from_axis_angle(vec3(0.0, 0.0, 1.0), angle),
                Mat3f::rotation_z(angle)
            )
            .abs(1e-6);
        }
    }

    #[test]
    fn quarter_turns() {
        // 90° CCW around Z maps X to Y.
        let m = Mat3f::rotation_z(TAU / 4.0);
        assert_approx_eq!(m * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)).abs(1e-6);
        // 90° CCW around X maps Y to Z.
        let m = Mat3f::rotation_x(TAU / 4.0);
        assert_approx_eq!(m * vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0)).abs(1e-6);
        // 90° CCW around Y maps Z to X.
        let m = Mat3f::rotation_y(TAU / 4.0);
        assert_approx_eq!(m * vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0)).abs(1e-6);
    }

    #[test]
    fn euler_order() {
        let angles = vec3(0.3, -1.1, 2.0);
        let x = Mat3f::rotation_x(angles.x);
        let y = Mat3f::rotation_y(angles.y);
        let z = Mat3f::rotation_z(angles.z);

        assert_approx_eq!(Mat3f::from_euler(angles, RotationOrder::Xyz), z * y * x).abs(1e-6);
        assert_approx_eq!(Mat3f::from_euler(angles, RotationOrder::Zxy), y * x * z).abs(1e-6);
        assert_approx_eq!(Mat3f::from_euler(angles, RotationOrder::Zyx), x * y * z).abs(1e-6);
        assert_eq!(RotationOrder::default(), RotationOrder::Zxy);
    }

    #[test]
    fn translation_column() {
        let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));

        let moved = m.translated_by(vec3(1.0, 1.0, 1.0));
        assert_eq!(moved.col(3), vec4(2.0, 3.0, 4.0, 1.0));
        assert_eq!(moved.untranslated_by(vec3(1.0, 1.0, 1.0)), m);
    }

    #[test]
    fn scale_rotate_translate_composite() {
        let scale = vec3(2.0, 3.0, 4.0);
        let rotation = Quat::from_axis_angle(vec3(0.0, 0.0, 1.0), 0.4);
        let translation = vec3(-1.0, 5.0, 0.5);

        let composite = Mat4f::from_scale_rotation_translation(scale, rotation, translation);
        let manual = Mat4f::from_scale(scale)
            * Mat4f::from_quat(rotation)
            * Mat4f::from_translation(translation);
        assert_approx_eq!(composite, manual).abs(1e-6);
    }

    #[test]
    fn embed_mat3() {
        let rot = Mat3f::rotation_z(1.0);
        let m = Mat4f::from_mat3(rot);
        assert_eq!(m.col(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m.row(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(m[(0, 0)], rot[(0, 0)]);
        assert_eq!(m[(2, 1)], rot[(2, 1)]);
    }

    #[test]
    fn outer_product() {
        let m = Matrix::outer_product(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0));
        assert_eq!(m[(0, 0)], 4.0);
        assert_eq!(m[(1, 2)], 12.0);
        assert_eq!(m[(2, 1)], 15.0);
    }
}
