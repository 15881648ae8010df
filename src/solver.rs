//! Generalized eigensolver for the reduced structural system.
//!
//! Solves `K·φ = ω²·M·φ` by transforming to a standard symmetric
//! eigenproblem through the Cholesky factorization of M:
//!
//! 1. `M = L·Lᵀ`
//! 2. `K̃ = L⁻¹·K·L⁻ᵀ` (symmetrized against roundoff)
//! 3. `K̃·y = ω²·y` via [`SymmetricEigen`]
//! 4. `φ = L⁻ᵀ·y`
//!
//! The symmetric route keeps the computed eigenvalues real by
//! construction, unlike forming `M⁻¹·K` directly. Eigenvalues that come
//! out negative beyond tolerance still indicate an assembly defect and
//! are surfaced as [`ComputationWarning`]s next to the (clamped) modes.

use nalgebra::linalg::{Cholesky, SymmetricEigen};
use nalgebra::{DMatrix, DVector};

use crate::error::{ComputationWarning, Error, Result};
use crate::types::{LAMBDA_CLAMP_TOL, MIN_MASS_DIAG};

/// One natural vibration mode of the shaft.
#[derive(Debug, Clone)]
pub struct Mode {
    /// Eigenvalue ω² (rad²/s²), clamped to ≥ 0.
    pub omega2: f64,
    /// Angular frequency ω (rad/s).
    pub omega: f64,
    /// Natural frequency (Hz).
    pub frequency_hz: f64,
    /// Mode shape in full DOF space; zero at fixed DOFs.
    pub shape: DVector<f64>,
}

/// Solve the reduced generalized eigenproblem and expand the mode shapes.
///
/// # Arguments
/// * `k_reduced` - Reduced stiffness matrix (possibly axially softened)
/// * `m_reduced` - Reduced mass matrix
/// * `free_dofs` - Full-space DOF index of each reduced index
/// * `full_dof_count` - Size of the unreduced DOF space
/// * `max_modes` - Upper bound on returned modes
///
/// # Returns
/// Modes sorted ascending by eigenvalue — exactly
/// `min(max_modes, free DOF count)` of them — plus any non-fatal
/// warnings.
///
/// # Errors
/// * [`Error::SingularSystem`] when the mass matrix is not positive
///   definite
/// * [`Error::InvalidParameter`] on dimension mismatches
pub fn solve_modes(
    k_reduced: &DMatrix<f64>,
    m_reduced: &DMatrix<f64>,
    free_dofs: &[usize],
    full_dof_count: usize,
    max_modes: usize,
) -> Result<(Vec<Mode>, Vec<ComputationWarning>)> {
    let n = k_reduced.nrows();
    if k_reduced.ncols() != n || m_reduced.nrows() != n || m_reduced.ncols() != n {
        return Err(Error::InvalidParameter(
            "reduced K and M must be square and of equal size".into(),
        ));
    }
    if free_dofs.len() != n {
        return Err(Error::InvalidParameter(format!(
            "free DOF map has {} entries for a {}-DOF system",
            free_dofs.len(),
            n
        )));
    }
    if let Some(&bad) = free_dofs.iter().find(|&&dof| dof >= full_dof_count) {
        return Err(Error::InvalidParameter(format!(
            "free DOF index {bad} out of range for a {full_dof_count}-DOF full space"
        )));
    }

    // A zero mass diagonal means a DOF with stiffness but no inertia;
    // the generalized problem is ill-posed there.
    let min_diag = (0..n).map(|i| m_reduced[(i, i)]).fold(f64::INFINITY, f64::min);
    if min_diag <= MIN_MASS_DIAG {
        return Err(Error::SingularSystem(format!(
            "reduced mass matrix has a near-zero diagonal entry ({min_diag:.3e})"
        )));
    }

    let chol = Cholesky::new(m_reduced.clone()).ok_or_else(|| {
        Error::SingularSystem("reduced mass matrix is not positive definite".into())
    })?;

    let l = chol.l();
    let l_inv = l.clone().try_inverse().ok_or_else(|| {
        Error::SingularSystem("Cholesky factor of the mass matrix is not invertible".into())
    })?;

    let k_tilde = &l_inv * k_reduced * l_inv.transpose();
    let k_tilde_sym = (&k_tilde + k_tilde.transpose()) * 0.5;

    let eig = SymmetricEigen::new(k_tilde_sym);
    let eigenvalues = eig.eigenvalues;
    let eigenvectors = eig.eigenvectors;

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| eigenvalues[a].total_cmp(&eigenvalues[b]));

    // Anything within a relative band below zero is roundoff; further
    // below is a defect worth reporting.
    let lambda_scale = eigenvalues
        .iter()
        .fold(0.0_f64, |acc, &v| acc.max(v.abs()))
        .max(1.0);
    let neg_tol = LAMBDA_CLAMP_TOL * lambda_scale;

    let l_inv_t = l_inv.transpose();
    let num_modes = max_modes.min(n);

    let mut warnings = Vec::new();
    let mut modes = Vec::with_capacity(num_modes);

    for (rank, &idx) in indices.iter().enumerate().take(num_modes) {
        let lambda = eigenvalues[idx];
        if lambda < -neg_tol {
            warnings.push(ComputationWarning::NegativeEigenvalue {
                index: rank,
                value: lambda,
            });
        }

        let omega2 = lambda.max(0.0);
        let omega = omega2.sqrt();
        let frequency_hz = omega / (2.0 * std::f64::consts::PI);

        // Back-transform, then scatter into the full DOF space
        let phi = &l_inv_t * eigenvectors.column(idx);
        let mut shape = DVector::<f64>::zeros(full_dof_count);
        for (reduced_idx, &dof) in free_dofs.iter().enumerate() {
            shape[dof] = phi[reduced_idx];
        }

        modes.push(Mode {
            omega2,
            omega,
            frequency_hz,
            shape,
        });
    }

    Ok((modes, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2-DOF spring-mass chain with known spectrum:
    // K = [[2, -1], [-1, 1]], M = I  →  λ = (3 ± √5)/2
    fn two_dof_chain() -> (DMatrix<f64>, DMatrix<f64>) {
        let k = DMatrix::from_row_slice(2, 2, &[2.0, -1.0, -1.0, 1.0]);
        let m = DMatrix::identity(2, 2);
        (k, m)
    }

    #[test]
    fn recovers_known_spectrum() {
        let (k, m) = two_dof_chain();
        let (modes, warnings) = solve_modes(&k, &m, &[0, 1], 2, 2).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(modes.len(), 2);

        let lo = (3.0 - 5.0_f64.sqrt()) / 2.0;
        let hi = (3.0 + 5.0_f64.sqrt()) / 2.0;
        assert!((modes[0].omega2 - lo).abs() < 1e-10);
        assert!((modes[1].omega2 - hi).abs() < 1e-10);
    }

    #[test]
    fn mode_count_is_min_of_requested_and_free() {
        let (k, m) = two_dof_chain();

        let (modes, _) = solve_modes(&k, &m, &[0, 1], 2, 6).unwrap();
        assert_eq!(modes.len(), 2);

        let (modes, _) = solve_modes(&k, &m, &[0, 1], 2, 1).unwrap();
        assert_eq!(modes.len(), 1);
    }

    #[test]
    fn shapes_expand_with_zeros_at_fixed_dofs() {
        let (k, m) = two_dof_chain();
        let (modes, _) = solve_modes(&k, &m, &[2, 3], 4, 2).unwrap();

        for mode in &modes {
            assert_eq!(mode.shape.len(), 4);
            assert_eq!(mode.shape[0], 0.0);
            assert_eq!(mode.shape[1], 0.0);
            assert!(mode.shape[2].abs() + mode.shape[3].abs() > 0.0);
        }
    }

    #[test]
    fn generalized_problem_scales_with_mass() {
        // Doubling M halves every eigenvalue
        let (k, m) = two_dof_chain();
        let (base, _) = solve_modes(&k, &m, &[0, 1], 2, 2).unwrap();
        let (scaled, _) = solve_modes(&k, &(2.0 * &m), &[0, 1], 2, 2).unwrap();

        for (a, b) in base.iter().zip(scaled.iter()) {
            assert!((a.omega2 / b.omega2 - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn frequency_follows_omega() {
        let (k, m) = two_dof_chain();
        let (modes, _) = solve_modes(&k, &m, &[0, 1], 2, 2).unwrap();

        for mode in &modes {
            assert!((mode.omega - mode.omega2.sqrt()).abs() < 1e-12);
            assert!((mode.frequency_hz - mode.omega / (2.0 * std::f64::consts::PI)).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_mass_dof_is_singular() {
        let (k, _) = two_dof_chain();
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 0.0]);

        let err = solve_modes(&k, &m, &[0, 1], 2, 2).unwrap_err();
        assert!(matches!(err, Error::SingularSystem(_)));
    }

    #[test]
    fn meaningfully_negative_eigenvalue_is_reported_and_clamped() {
        // A negative-definite "stiffness" forces λ < 0
        let k = DMatrix::from_row_slice(2, 2, &[-2.0, 0.0, 0.0, -3.0]);
        let m = DMatrix::identity(2, 2);

        let (modes, warnings) = solve_modes(&k, &m, &[0, 1], 2, 2).unwrap();

        assert!(!warnings.is_empty());
        for mode in &modes {
            assert!(mode.omega2 >= 0.0);
            assert!(mode.frequency_hz >= 0.0);
        }
        match &warnings[0] {
            ComputationWarning::NegativeEigenvalue { value, .. } => assert!(*value < 0.0),
        }
    }

    #[test]
    fn dimension_mismatch_is_invalid_parameter() {
        let (k, m) = two_dof_chain();
        let err = solve_modes(&k, &m, &[0], 2, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = solve_modes(&k, &m, &[0, 5], 2, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
