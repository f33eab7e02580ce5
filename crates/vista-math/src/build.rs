// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named-constructor factory functions for transform matrices.
//!
//! Each `build_*` function overwrites an output matrix in place and returns it
//! for chaining, so callers can reuse storage across frames. The same
//! constructions are mirrored as associated functions on [`Matrix4`] for
//! value-style use.
//!
//! Conventions: right-handed coordinates, angles in degrees, cameras look
//! down the negative Z axis.

use crate::mat4::Matrix4;
use crate::point3::Point3;
use crate::scalar::{deg_to_rad, EPSILON};
use crate::vec3::Vector3;

/// Rotation of `angle_degrees` about an arbitrary `axis` (Rodrigues).
///
/// The axis is normalised internally; an axis within `EPSILON` of zero length
/// yields the identity.
///
/// # Examples
/// ```
/// use vista_math::{build, Matrix4, Vector3};
/// let mut m = Matrix4::ZERO;
/// build::build_rotation(&mut m, Vector3::UNIT_Y, 90.0);
/// assert_eq!(m.transform_direction(&Vector3::UNIT_X), Vector3::new(0.0, 0.0, -1.0));
/// ```
pub fn build_rotation(out: &mut Matrix4, axis: Vector3, angle_degrees: f32) -> &mut Matrix4 {
    let len = axis.magnitude();
    if len <= EPSILON {
        tracing::trace!(axis = ?axis.to_array(), "zero-length rotation axis; using identity");
        return out.load_identity();
    }
    let [x, y, z] = (axis * (1.0 / len)).to_array();
    let (s, c) = deg_to_rad(angle_degrees).sin_cos();
    let t = 1.0 - c;
    *out = Matrix4::new([
        t * x * x + c,     t * x * y + s * z, t * x * z - s * y, 0.0, // col 0
        t * x * y - s * z, t * y * y + c,     t * y * z + s * x, 0.0, // col 1
        t * x * z + s * y, t * y * z - s * x, t * z * z + c,     0.0, // col 2
        0.0,               0.0,               0.0,               1.0, // col 3
    ]);
    out
}

/// Rotation of `angle_degrees` about +X.
pub fn build_rotation_x(out: &mut Matrix4, angle_degrees: f32) -> &mut Matrix4 {
    let (s, c) = deg_to_rad(angle_degrees).sin_cos();
    *out = Matrix4::new([
        1.0, 0.0, 0.0, 0.0,
        0.0, c,   s,   0.0,
        0.0, -s,  c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    out
}

/// Rotation of `angle_degrees` about +Y.
pub fn build_rotation_y(out: &mut Matrix4, angle_degrees: f32) -> &mut Matrix4 {
    let (s, c) = deg_to_rad(angle_degrees).sin_cos();
    *out = Matrix4::new([
        c,   0.0, -s,  0.0,
        0.0, 1.0, 0.0, 0.0,
        s,   0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    out
}

/// Rotation of `angle_degrees` about +Z.
pub fn build_rotation_z(out: &mut Matrix4, angle_degrees: f32) -> &mut Matrix4 {
    let (s, c) = deg_to_rad(angle_degrees).sin_cos();
    *out = Matrix4::new([
        c,   s,   0.0, 0.0,
        -s,  c,   0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    out
}

/// Translation by `(x, y, z)`; translation occupies column 3.
pub fn build_translation(out: &mut Matrix4, x: f32, y: f32, z: f32) -> &mut Matrix4 {
    *out = Matrix4::new([
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 1.0, 0.0, // col 2
        x,   y,   z,   1.0, // col 3 (translation)
    ]);
    out
}

/// Non-uniform scale about the origin.
pub fn build_scale(out: &mut Matrix4, x: f32, y: f32, z: f32) -> &mut Matrix4 {
    *out = Matrix4::new([
        x,   0.0, 0.0, 0.0,
        0.0, y,   0.0, 0.0,
        0.0, 0.0, z,   0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    out
}

/// Non-uniform scale that keeps `point` fixed (`T(p) * S * T(-p)`).
pub fn build_scale_about_point(
    out: &mut Matrix4,
    x: f32,
    y: f32,
    z: f32,
    point: Point3,
) -> &mut Matrix4 {
    let [px, py, pz] = point.to_array();
    *out = Matrix4::new([
        x,              0.0,            0.0,            0.0,
        0.0,            y,              0.0,            0.0,
        0.0,            0.0,            z,              0.0,
        px * (1.0 - x), py * (1.0 - y), pz * (1.0 - z), 1.0,
    ]);
    out
}

/// Right-handed view matrix placing the camera at `eye` looking at `target`.
///
/// Degenerate when `target == eye` or `up` is parallel to the view
/// direction; neither is checked.
pub fn build_look_at(out: &mut Matrix4, eye: Point3, target: Point3, up: Vector3) -> &mut Matrix4 {
    let f = (target - eye).normalized();
    let s = f.cross(&up).normalized();
    let u = s.cross(&f);
    let e = eye.to_vector();
    *out = Matrix4::new([
        s.x(),      u.x(),      -f.x(),    0.0,
        s.y(),      u.y(),      -f.y(),    0.0,
        s.z(),      u.z(),      -f.z(),    0.0,
        -s.dot(&e), -u.dot(&e), f.dot(&e), 1.0,
    ]);
    out
}

/// Right-handed perspective projection (vertical FOV in degrees), mapping
/// view-space depth `[-near, -far]` to clip-space `[-1, 1]`.
pub fn build_perspective(
    out: &mut Matrix4,
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
) -> &mut Matrix4 {
    let f = 1.0 / (deg_to_rad(fov_degrees) * 0.5).tan();
    let depth = near - far;
    *out = Matrix4::new([
        f / aspect, 0.0, 0.0,                        0.0,
        0.0,        f,   0.0,                        0.0,
        0.0,        0.0, (far + near) / depth,       -1.0,
        0.0,        0.0, 2.0 * far * near / depth,   0.0,
    ]);
    out
}

/// Right-handed orthographic projection of the box
/// `[x_min, x_max] × [y_min, y_max]` between depths `z_min` (near) and
/// `z_max` (far) in front of the camera.
pub fn build_orthographic(
    out: &mut Matrix4,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    z_min: f32,
    z_max: f32,
) -> &mut Matrix4 {
    let w = x_max - x_min;
    let h = y_max - y_min;
    let d = z_max - z_min;
    *out = Matrix4::new([
        2.0 / w,                0.0,                    0.0,                    0.0,
        0.0,                    2.0 / h,                0.0,                    0.0,
        0.0,                    0.0,                    -2.0 / d,               0.0,
        -(x_max + x_min) / w,   -(y_max + y_min) / h,   -(z_max + z_min) / d,   1.0,
    ]);
    out
}

/// Upper-left 3×3 block of `matrix`, column-major, for normal/lighting use.
///
/// With `renormalise`, each column is normalised to strip scale; zero columns
/// stay zero.
pub fn extract_rotation_3x3(matrix: &Matrix4, renormalise: bool) -> [f32; 9] {
    let mut out = [0.0; 9];
    for col in 0..3 {
        let mut axis = matrix.column(col).xyz();
        if renormalise {
            axis.normalize();
        }
        out[col * 3..col * 3 + 3].copy_from_slice(&axis.to_array());
    }
    out
}

impl Matrix4 {
    /// See [`build_rotation`].
    pub fn rotation(axis: Vector3, angle_degrees: f32) -> Self {
        let mut m = Self::ZERO;
        build_rotation(&mut m, axis, angle_degrees);
        m
    }

    /// See [`build_rotation_x`].
    pub fn rotation_x(angle_degrees: f32) -> Self {
        let mut m = Self::ZERO;
        build_rotation_x(&mut m, angle_degrees);
        m
    }

    /// See [`build_rotation_y`].
    pub fn rotation_y(angle_degrees: f32) -> Self {
        let mut m = Self::ZERO;
        build_rotation_y(&mut m, angle_degrees);
        m
    }

    /// See [`build_rotation_z`].
    pub fn rotation_z(angle_degrees: f32) -> Self {
        let mut m = Self::ZERO;
        build_rotation_z(&mut m, angle_degrees);
        m
    }

    /// See [`build_translation`].
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::ZERO;
        build_translation(&mut m, x, y, z);
        m
    }

    /// See [`build_scale`].
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::ZERO;
        build_scale(&mut m, x, y, z);
        m
    }

    /// See [`build_scale_about_point`].
    pub fn scale_about_point(x: f32, y: f32, z: f32, point: Point3) -> Self {
        let mut m = Self::ZERO;
        build_scale_about_point(&mut m, x, y, z, point);
        m
    }

    /// See [`build_look_at`].
    pub fn look_at(eye: Point3, target: Point3, up: Vector3) -> Self {
        let mut m = Self::ZERO;
        build_look_at(&mut m, eye, target, up);
        m
    }

    /// See [`build_perspective`].
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut m = Self::ZERO;
        build_perspective(&mut m, fov_degrees, aspect, near, far);
        m
    }

    /// See [`build_orthographic`].
    pub fn orthographic(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        z_min: f32,
        z_max: f32,
    ) -> Self {
        let mut m = Self::ZERO;
        build_orthographic(&mut m, x_min, x_max, y_min, y_max, z_min, z_max);
        m
    }
}
