// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors produced by fallible math operations.
///
/// Only matrix inversion can fail; every other operation in this crate treats
/// degenerate input as a documented no-op.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The matrix determinant is within `EPSILON` of zero.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant computed by the rejecting algorithm.
        determinant: f32,
    },
}
