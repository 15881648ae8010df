//! Lumped nodal mass distribution for the shaft and its attachments.
//!
//! The uniform shaft mass is split element-by-element, half to each end
//! node, so end nodes carry half an element's mass and interior nodes a
//! full element's. Point masses (tip, nock, fletching) land on the node
//! nearest their position. [`MassAhead`] answers "how much mass sits
//! strictly ahead of position x toward the tip", which drives the axial
//! compression estimate during launch.

use crate::error::{Error, Result};

/// A discrete attached mass at a position along the shaft.
///
/// Position is measured in meters from the clamped (nock) end. Positions
/// outside `[0, L]` are clamped to the nearest end node rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Position along the shaft (m from the nock end).
    pub position: f64,
    /// Mass (kg).
    pub mass: f64,
}

impl PointMass {
    pub fn new(position: f64, mass: f64) -> Self {
        Self { position, mass }
    }
}

/// Map a position to its nearest node index, clamped to `[0, n]`.
///
/// Shared by the mass model and the assembler so point masses land on the
/// same node in both.
pub(crate) fn nearest_node(position: f64, element_length: f64, num_elements: usize) -> usize {
    let idx = (position / element_length).round();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(num_elements)
    }
}

/// Build the lumped nodal mass vector for a uniform shaft plus point
/// masses.
///
/// # Arguments
/// * `length` - Shaft length (m)
/// * `num_elements` - Number of uniform elements
/// * `shaft_mass` - Total distributed shaft mass (kg)
/// * `point_masses` - Discrete attached masses
///
/// # Returns
/// Nodal masses indexed `0..=num_elements` (kg)
pub fn build_nodal_masses(
    length: f64,
    num_elements: usize,
    shaft_mass: f64,
    point_masses: &[PointMass],
) -> Vec<f64> {
    let le = length / num_elements as f64;
    let mass_per_elem = shaft_mass / num_elements as f64;

    let mut node_masses = vec![0.0; num_elements + 1];
    node_masses[0] += mass_per_elem / 2.0;
    node_masses[num_elements] += mass_per_elem / 2.0;
    for node in node_masses.iter_mut().take(num_elements).skip(1) {
        *node += mass_per_elem;
    }

    for pm in point_masses {
        let idx = nearest_node(pm.position, le, num_elements);
        node_masses[idx] += pm.mass;
    }

    node_masses
}

/// Precomputed "mass ahead of x" query over the lumped nodal masses.
#[derive(Debug, Clone)]
pub struct MassAhead {
    cum_ahead: Vec<f64>,
    element_length: f64,
}

impl MassAhead {
    /// Build the query for a uniform shaft with attached point masses.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] when length or element count is not
    /// positive.
    pub fn new(
        length: f64,
        num_elements: usize,
        shaft_mass: f64,
        point_masses: &[PointMass],
    ) -> Result<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "shaft length must be finite and positive, got {length}"
            )));
        }
        if num_elements == 0 {
            return Err(Error::InvalidParameter(
                "element count must be at least 1".into(),
            ));
        }

        let node_masses = build_nodal_masses(length, num_elements, shaft_mass, point_masses);

        // cum_ahead[i] = sum of nodal masses strictly ahead of node i
        let mut cum_ahead = vec![0.0; num_elements + 1];
        let mut running = 0.0;
        for i in (0..num_elements).rev() {
            running += node_masses[i + 1];
            cum_ahead[i] = running;
        }

        Ok(Self {
            cum_ahead,
            element_length: length / num_elements as f64,
        })
    }

    /// Total mass strictly ahead of position x (kg).
    ///
    /// x is bucketed to the node interval containing it; beyond the tip
    /// the answer is zero.
    pub fn at(&self, x: f64) -> f64 {
        let idx = (x / self.element_length).floor();
        let idx = if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(self.cum_ahead.len() - 1)
        };
        self.cum_ahead[idx]
    }
}
