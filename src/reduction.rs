//! Boundary-condition reduction: removing fixed DOFs from the global
//! system.
//!
//! The arrow is modeled clamped at the nock during the launch impulse, so
//! the default constraint fixes displacement and rotation at node 0. The
//! reduction keeps an index map back to the full DOF space so mode shapes
//! can be re-expanded after the solve.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Fixed DOFs of the default rigid clamp at the nock node: transverse
/// displacement and rotation at node 0.
pub const CLAMPED_NOCK_DOFS: [usize; 2] = [0, 1];

/// The solvable system after removing fixed DOFs.
#[derive(Debug, Clone)]
pub struct ReducedSystem {
    /// Reduced stiffness matrix.
    pub stiffness: DMatrix<f64>,
    /// Reduced mass matrix.
    pub mass: DMatrix<f64>,
    /// `free_dofs[i]` is the full-space DOF index of reduced index i,
    /// in ascending order.
    pub free_dofs: Vec<usize>,
}

impl ReducedSystem {
    /// Number of free DOFs.
    pub fn num_dofs(&self) -> usize {
        self.free_dofs.len()
    }
}

/// Restrict K and M to the rows/columns of the free DOFs.
///
/// # Arguments
/// * `k` - Global stiffness matrix
/// * `m` - Global mass matrix (same size)
/// * `fixed_dofs` - Global DOF indices to remove
///
/// # Errors
/// [`Error::InvalidParameter`] when a fixed DOF index is out of range or
/// the reduction would remove every DOF.
pub fn reduce_system(
    k: &DMatrix<f64>,
    m: &DMatrix<f64>,
    fixed_dofs: &[usize],
) -> Result<ReducedSystem> {
    let n = k.nrows();

    if let Some(&bad) = fixed_dofs.iter().find(|&&dof| dof >= n) {
        return Err(Error::InvalidParameter(format!(
            "fixed DOF index {bad} out of range for a {n}-DOF system"
        )));
    }

    let free_dofs: Vec<usize> = (0..n).filter(|dof| !fixed_dofs.contains(dof)).collect();

    if free_dofs.is_empty() {
        return Err(Error::InvalidParameter(
            "boundary conditions remove every DOF".into(),
        ));
    }

    let n_free = free_dofs.len();
    let mut stiffness = DMatrix::<f64>::zeros(n_free, n_free);
    let mut mass = DMatrix::<f64>::zeros(n_free, n_free);

    for (i, &gi) in free_dofs.iter().enumerate() {
        for (j, &gj) in free_dofs.iter().enumerate() {
            stiffness[(i, j)] = k[(gi, gj)];
            mass[(i, j)] = m[(gi, gj)];
        }
    }

    Ok(ReducedSystem {
        stiffness,
        mass,
        free_dofs,
    })
}
