//! Weighted quadratic objective minimised by the swarm

use ndarray::Array1;

/// Number of decision variables the objective takes.
pub const DIMENSION: usize = 3;

/// Location of the unconstrained global minimum.
pub const MINIMIZER: [f64; DIMENSION] = [4.0, -3.0, -0.5];

/// Value of the objective at [`MINIMIZER`].
pub const MINIMUM: f64 = 0.0;

/// Weighted quadratic - 3D unimodal
/// f(x) = 3 (x1 - 4)^2 + 5 (x2 + 3)^2 + 7 (2 x3 + 1)^2
/// Global minimum: f(x) = 0 at x = (4, -3, -0.5)
pub fn objective(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let x3 = x[2];
    3.0 * (x1 - 4.0).powi(2) + 5.0 * (x2 + 3.0).powi(2) + 7.0 * (2.0 * x3 + 1.0).powi(2)
}
