//! Type aliases, constants, and tolerances shared across the crate.

use nalgebra::SMatrix;

/// 4×4 local element matrix (2 nodes × 2 DOF).
pub type Matrix4 = SMatrix<f64, 4, 4>;

/// DOFs per node: transverse displacement w and rotation θ.
pub const DOF_PER_NODE: usize = 2;

/// DOFs per element (2 nodes × 2 DOF/node).
pub const DOF_PER_ELEMENT: usize = 4;

/// Default number of shaft elements when unspecified.
pub const DEFAULT_NUM_ELEMENTS: usize = 20;

/// Default number of modes returned by the facade.
pub const DEFAULT_MAX_MODES: usize = 6;

/// Scale applied to the m·l³/12 rotational inertia of the simplified
/// lumped element mass matrix. Part of the documented mass model, not a
/// tunable; see [`crate::element::beam_mass_lumped`].
pub const ROTARY_INERTIA_FACTOR: f64 = 0.01;

/// Untuned placeholder constant of the axial softening approximation
/// (stiffness loss per newton of peak axial compression).
pub const AXIAL_SOFTENING_ALPHA: f64 = 1e-6;

/// Lower bound of the axial softening factor.
pub const AXIAL_SOFTENING_FLOOR: f64 = 0.2;

/// Relative tolerance below zero within which an eigenvalue is treated as
/// numerical noise and clamped silently.
pub const LAMBDA_CLAMP_TOL: f64 = 1e-8;

/// Mass-matrix diagonal entries at or below this are treated as singular.
pub const MIN_MASS_DIAG: f64 = 1e-14;
