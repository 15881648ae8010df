//! Global stiffness and mass matrix assembly.
//!
//! Scatters 4×4 element matrices into the `2(n+1)`-DOF global system,
//! then adds point masses onto the diagonal translational entries of
//! their nearest nodes.

use nalgebra::DMatrix;

use crate::element::{beam_mass_lumped, beam_stiffness};
use crate::mass::{nearest_node, PointMass};
use crate::types::{DOF_PER_ELEMENT, DOF_PER_NODE};

/// Assemble the global stiffness and mass matrices for a uniform shaft.
///
/// # Arguments
/// * `length` - Shaft length (m)
/// * `num_elements` - Number of uniform elements
/// * `shaft_mass` - Total distributed shaft mass (kg)
/// * `ei` - Bending stiffness (N·m²)
/// * `point_masses` - Discrete masses added to the nearest node's
///   translational DOF (positions outside the shaft clamp to the end
///   nodes)
///
/// # Returns
/// Tuple of `(K, M)`, each `2(n+1) × 2(n+1)`
pub fn assemble_global_matrices(
    length: f64,
    num_elements: usize,
    shaft_mass: f64,
    ei: f64,
    point_masses: &[PointMass],
) -> (DMatrix<f64>, DMatrix<f64>) {
    let num_nodes = num_elements + 1;
    let num_dof = num_nodes * DOF_PER_NODE;
    let le = length / num_elements as f64;
    let m_line = shaft_mass / length;

    let mut k_global = DMatrix::<f64>::zeros(num_dof, num_dof);
    let mut m_global = DMatrix::<f64>::zeros(num_dof, num_dof);

    let ke = beam_stiffness(ei, le);
    let me = beam_mass_lumped(m_line, le);

    for e in 0..num_elements {
        // Element e connects nodes e and e+1
        let dof_map = [
            DOF_PER_NODE * e,
            DOF_PER_NODE * e + 1,
            DOF_PER_NODE * (e + 1),
            DOF_PER_NODE * (e + 1) + 1,
        ];

        for i in 0..DOF_PER_ELEMENT {
            for j in 0..DOF_PER_ELEMENT {
                k_global[(dof_map[i], dof_map[j])] += ke[(i, j)];
                m_global[(dof_map[i], dof_map[j])] += me[(i, j)];
            }
        }
    }

    for pm in point_masses {
        let node = nearest_node(pm.position, le, num_elements);
        let dof = node * DOF_PER_NODE;
        m_global[(dof, dof)] += pm.mass;
    }

    (k_global, m_global)
}
