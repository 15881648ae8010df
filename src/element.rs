//! 2-node Euler–Bernoulli beam element matrices.
//!
//! DOF ordering: `[w1, θ1, w2, θ2]` — transverse displacement and
//! rotation at each node. The shaft is slender (length ≫ diameter), so
//! shear deformation is neglected and the classic Euler–Bernoulli
//! stiffness applies.

use crate::types::{Matrix4, ROTARY_INERTIA_FACTOR};

/// Compute the local beam stiffness matrix (4×4).
///
/// # Arguments
/// * `ei` - Bending stiffness (N·m²)
/// * `le` - Element length (m)
pub fn beam_stiffness(ei: f64, le: f64) -> Matrix4 {
    let a = ei / le.powi(3);
    let l = le;

    #[rustfmt::skip]
    let k = Matrix4::from_row_slice(&[
        //  w1            θ1              w2            θ2
         12.0 * a,     6.0 * l * a,   -12.0 * a,     6.0 * l * a,
          6.0 * l * a, 4.0 * l * l * a, -6.0 * l * a, 2.0 * l * l * a,
        -12.0 * a,    -6.0 * l * a,    12.0 * a,    -6.0 * l * a,
          6.0 * l * a, 2.0 * l * l * a, -6.0 * l * a, 4.0 * l * l * a,
    ]);

    k
}

/// Compute the simplified lumped element mass matrix (4×4).
///
/// Half the element's translational mass goes to each node's displacement
/// DOF; each rotation DOF gets `m·l³/12` scaled by
/// [`ROTARY_INERTIA_FACTOR`]. All off-diagonal coupling is zero.
///
/// This is a deliberate simplification of the consistent mass matrix:
/// the small rotational inertia keeps the mass matrix positive definite
/// without the rotational DOFs meaningfully loading the low bending
/// modes. Downstream numbers are keyed to this model; do not swap in the
/// consistent 4×4 mass matrix.
///
/// # Arguments
/// * `m_line` - Mass per unit length (kg/m)
/// * `le` - Element length (m)
pub fn beam_mass_lumped(m_line: f64, le: f64) -> Matrix4 {
    let mt = m_line * le / 2.0;
    let ir = m_line * le.powi(3) / 12.0 * ROTARY_INERTIA_FACTOR;

    Matrix4::from_diagonal(&nalgebra::SVector::<f64, 4>::from_row_slice(&[
        mt, ir, mt, ir,
    ]))
}
