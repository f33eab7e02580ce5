// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Mul, MulAssign};

use crate::error::MathError;
use crate::point3::Point3;
use crate::scalar::{Tolerance, EPSILON};
use crate::vec3::Vector3;
use crate::vec4::Vector4;

/// Column‑major 4×4 transform matrix.
///
/// - Stored as 16 floats in column‑major order to match GPU uploads; element
///   `M<col><row>` lives at index `col * 4 + row`.
/// - `Default` is the all-zero matrix; use [`Matrix4::IDENTITY`] or
///   [`Matrix4::load_identity`] for the identity.
/// - No matrix is assumed invertible. Both inversion algorithms return
///   [`MathError::SingularMatrix`] when `|det| < EPSILON`.
///
/// # Examples
/// ```
/// use vista_math::{Matrix4, Point3};
/// let t = Matrix4::translation(5.0, -3.0, 2.0);
/// let p = t.transform_point(&Point3::new(2.0, 4.0, -1.0));
/// assert_eq!(p, Point3::new(7.0, 1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    data: [f32; 16],
}

impl Matrix4 {
    /// The all-zero matrix (same as `Default`).
    pub const ZERO: Self = Self { data: [0.0; 16] };

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, 0.0, // col 1
            0.0, 0.0, 1.0, 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ],
    };

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from its four columns.
    pub fn from_columns(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        let mut data = [0.0; 16];
        for (col, v) in [c0, c1, c2, c3].iter().enumerate() {
            data[col * 4..col * 4 + 4].copy_from_slice(&v.to_array());
        }
        Self { data }
    }

    /// Overwrites `self` with the identity.
    pub fn load_identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column‑major storage.
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Element at column `col`, row `row`.
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Sets the element at column `col`, row `row`.
    pub fn set(&mut self, col: usize, row: usize, value: f32) -> &mut Self {
        self.data[col * 4 + row] = value;
        self
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Column `col` as a [`Vector4`].
    pub fn column(&self, col: usize) -> Vector4 {
        Vector4::new(
            self.data[col * 4],
            self.data[col * 4 + 1],
            self.data[col * 4 + 2],
            self.data[col * 4 + 3],
        )
    }

    /// Row `row` as a [`Vector4`].
    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::new(
            self.at(row, 0),
            self.at(row, 1),
            self.at(row, 2),
            self.at(row, 3),
        )
    }

    /// Replaces column `col`.
    pub fn set_column(&mut self, col: usize, value: Vector4) -> &mut Self {
        self.data[col * 4..col * 4 + 4].copy_from_slice(&value.to_array());
        self
    }

    /// Translation held in column 3.
    pub fn translation_component(&self) -> Vector3 {
        Vector3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Column‑major semantics: applying the result to a vector applies `rhs`
    /// first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Standard 4×4 × 4×1 product; neither operand is modified.
    pub fn multiply_vector(&self, v: &Vector4) -> Vector4 {
        let [x, y, z, w] = v.to_array();
        Vector4::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w,
            self.at(3, 0) * x + self.at(3, 1) * y + self.at(3, 2) * z + self.at(3, 3) * w,
        )
    }

    /// Transforms a point (`w = 1`).
    ///
    /// The result is divided by the transformed `w` when it is positive, so
    /// affine matrices behave as usual and projective matrices unproject.
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.multiply_vector(&Vector4::position(*point)).to_vector3())
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vector3) -> Vector3 {
        self.multiply_vector(&Vector4::direction(*direction)).xyz()
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant of the 3×3 minor left after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut m = [0.0; 9];
        let mut i = 0;
        for c in (0..4).filter(|&c| c != col) {
            for r in (0..4).filter(|&r| r != row) {
                m[i] = self.at(r, c);
                i += 1;
            }
        }
        det3(&m)
    }

    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }

    /// Inverse via the adjugate (transposed cofactor matrix) over the
    /// determinant.
    pub fn inversed(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            tracing::debug!(determinant = det, "cofactor inversion rejected singular matrix");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.cofactor(col, row) * inv_det;
            }
        }
        Ok(Self::new(out))
    }

    /// Inverts in place with [`Matrix4::inversed`].
    ///
    /// On failure `self` is left unchanged.
    pub fn inverse(&mut self) -> Result<&mut Self, MathError> {
        *self = self.inversed()?;
        Ok(self)
    }

    /// Inverse via Cramer's rule over paired 2×2 sub-determinants.
    ///
    /// Independent of [`Matrix4::inversed`]; the two are expected to agree
    /// within tolerance on every invertible input.
    pub fn inversed_cramer(&self) -> Result<Self, MathError> {
        let a = |r: usize, c: usize| self.at(r, c);

        // 2×2 determinants of the top two rows...
        let s0 = a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1);
        let s1 = a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2);
        let s2 = a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3);
        let s3 = a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2);
        let s4 = a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3);
        let s5 = a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3);

        // ...paired with the complementary 2×2 determinants of the bottom two.
        let c5 = a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3);
        let c4 = a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3);
        let c3 = a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2);
        let c2 = a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3);
        let c1 = a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2);
        let c0 = a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1);

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if det.abs() < EPSILON {
            tracing::debug!(determinant = det, "cramer inversion rejected singular matrix");
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;

        // inv[r][c], row-major in this listing.
        let inv = [
            [
                a(1, 1) * c5 - a(1, 2) * c4 + a(1, 3) * c3,
                -a(0, 1) * c5 + a(0, 2) * c4 - a(0, 3) * c3,
                a(3, 1) * s5 - a(3, 2) * s4 + a(3, 3) * s3,
                -a(2, 1) * s5 + a(2, 2) * s4 - a(2, 3) * s3,
            ],
            [
                -a(1, 0) * c5 + a(1, 2) * c2 - a(1, 3) * c1,
                a(0, 0) * c5 - a(0, 2) * c2 + a(0, 3) * c1,
                -a(3, 0) * s5 + a(3, 2) * s2 - a(3, 3) * s1,
                a(2, 0) * s5 - a(2, 2) * s2 + a(2, 3) * s1,
            ],
            [
                a(1, 0) * c4 - a(1, 1) * c2 + a(1, 3) * c0,
                -a(0, 0) * c4 + a(0, 1) * c2 - a(0, 3) * c0,
                a(3, 0) * s4 - a(3, 1) * s2 + a(3, 3) * s0,
                -a(2, 0) * s4 + a(2, 1) * s2 - a(2, 3) * s0,
            ],
            [
                -a(1, 0) * c3 + a(1, 1) * c1 - a(1, 2) * c0,
                a(0, 0) * c3 - a(0, 1) * c1 + a(0, 2) * c0,
                -a(3, 0) * s3 + a(3, 1) * s1 - a(3, 2) * s0,
                a(2, 0) * s3 - a(2, 1) * s1 + a(2, 2) * s0,
            ],
        ];

        let mut out = [0.0; 16];
        for (row, values) in inv.iter().enumerate() {
            for (col, v) in values.iter().enumerate() {
                out[col * 4 + row] = v * inv_det;
            }
        }
        Ok(Self::new(out))
    }

    /// Inverts in place with [`Matrix4::inversed_cramer`].
    ///
    /// On failure `self` is left unchanged.
    pub fn inverse_cramer(&mut self) -> Result<&mut Self, MathError> {
        *self = self.inversed_cramer()?;
        Ok(self)
    }

    /// Element-wise comparison under an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq_slice(&self.data, &other.data)
    }
}

/// Determinant of a 3×3 block stored column-major.
fn det3(m: &[f32; 9]) -> f32 {
    m[0] * (m[4] * m[8] - m[7] * m[5]) - m[3] * (m[1] * m[8] - m[7] * m[2])
        + m[6] * (m[1] * m[5] - m[4] * m[2])
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix4> for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    fn mul(self, rhs: Vector4) -> Vector4 {
        self.multiply_vector(&rhs)
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Matrix4> for Matrix4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
