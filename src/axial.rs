//! Launch-acceleration axial softening estimate.
//!
//! During the power stroke the string accelerates the shaft from behind
//! while the tip mass resists, putting the shaft in axial compression.
//! Compression softens the bending response (the buckling-adjacent
//! effect archers feel as "dynamic spine").
//!
//! This module is an intentionally coarse stand-in for a true
//! geometric-stiffness element formulation: instead of assembling a K_G
//! matrix from the axial force profile, it reduces the whole stiffness
//! matrix by a single scalar derived from the peak compression, floored
//! at [`AXIAL_SOFTENING_FLOOR`]. The tuning constant
//! [`AXIAL_SOFTENING_ALPHA`] and the floor are untuned placeholders;
//! downstream expectations are keyed to this exact behavior.

use crate::mass::MassAhead;
use crate::types::{AXIAL_SOFTENING_ALPHA, AXIAL_SOFTENING_FLOOR};

/// Diagnostics of the axial softening stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialSoftening {
    /// Peak launch acceleration (m/s²), from the constant-acceleration
    /// model `a = v²/(2s)`.
    pub peak_acceleration: f64,
    /// Largest axial compressive force along the shaft (N).
    pub peak_force: f64,
    /// Scalar applied to the reduced stiffness matrix, in
    /// `[AXIAL_SOFTENING_FLOOR, 1]`.
    pub factor: f64,
}

/// Peak acceleration of a constant-acceleration launch reaching exit
/// velocity `v` over power-stroke length `s`.
#[inline]
pub fn peak_launch_acceleration(exit_velocity: f64, power_stroke: f64) -> f64 {
    exit_velocity * exit_velocity / (2.0 * power_stroke)
}

/// Estimate the uniform stiffness-reduction factor for a launch.
///
/// Walks every node, computes the axial compression
/// `P(x) = massAhead(x) · a`, takes the maximum, and maps it to
/// `factor = max(floor, 1 − α·Pmax)`.
///
/// # Arguments
/// * `mass_ahead` - Mass-ahead query over the assembled mass distribution
/// * `length` - Shaft length (m)
/// * `num_elements` - Number of uniform elements
/// * `exit_velocity` - Arrow exit velocity (m/s)
/// * `power_stroke` - Distance over which the string accelerates the
///   arrow (m)
pub fn estimate_axial_softening(
    mass_ahead: &MassAhead,
    length: f64,
    num_elements: usize,
    exit_velocity: f64,
    power_stroke: f64,
) -> AxialSoftening {
    let accel = peak_launch_acceleration(exit_velocity, power_stroke);
    let le = length / num_elements as f64;

    let mut peak_force: f64 = 0.0;
    for i in 0..=num_elements {
        let x = i as f64 * le;
        let p = mass_ahead.at(x) * accel;
        peak_force = peak_force.max(p);
    }

    let factor = (1.0 - AXIAL_SOFTENING_ALPHA * peak_force).max(AXIAL_SOFTENING_FLOOR);

    AxialSoftening {
        peak_acceleration: accel,
        peak_force,
        factor,
    }
}
