//! Top-level analysis facade: one parameter bundle in, frequencies and
//! diagnostics out.
//!
//! [`analyze`] is a pure function of its inputs: every matrix and mode is
//! built fresh inside the call and nothing is cached across calls, so
//! independent analyses can safely run concurrently (see
//! [`analyze_batch`]).

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::assembly::assemble_global_matrices;
use crate::axial::{estimate_axial_softening, AxialSoftening};
use crate::error::{ComputationWarning, Error, Result};
use crate::mass::{MassAhead, PointMass};
use crate::reduction::{reduce_system, ReducedSystem, CLAMPED_NOCK_DOFS};
use crate::solver::{solve_modes, Mode};
use crate::spine::spine_to_ei_standard;
use crate::types::{DEFAULT_MAX_MODES, DEFAULT_NUM_ELEMENTS, DOF_PER_NODE};
use crate::units::{grains_to_kg, grams_to_kg, inches_to_meters};

fn default_num_elements() -> usize {
    DEFAULT_NUM_ELEMENTS
}

fn default_max_modes() -> usize {
    DEFAULT_MAX_MODES
}

/// Input bundle for one shaft analysis.
///
/// Units follow archery convention on the way in (inches, grams, grains)
/// and are converted to SI internally. Optional point masses that are
/// `None` simply don't exist; optional launch parameters enable the
/// axial softening stage only when both are present and positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Shaft length (inches).
    pub length_in: f64,
    /// Number of uniform elements.
    #[serde(default = "default_num_elements")]
    pub num_elements: usize,
    /// Static spine rating.
    pub spine: f64,
    /// Total distributed shaft mass (grams).
    pub shaft_mass_g: f64,
    /// Tip/point mass (grains), placed at the tip node.
    #[serde(default)]
    pub tip_grains: Option<f64>,
    /// Nock mass (grains), placed at the clamped node.
    #[serde(default)]
    pub nock_grains: Option<f64>,
    /// Fletching mass (grains), placed at `fletch_pos_in`.
    #[serde(default)]
    pub fletch_grains: Option<f64>,
    /// Fletching position (inches from the nock end). Defaults to the
    /// nock when fletching mass is given without a position.
    #[serde(default)]
    pub fletch_pos_in: Option<f64>,
    /// Arrow exit velocity (m/s); with `power_stroke_m`, enables the
    /// axial softening stage.
    #[serde(default)]
    pub exit_velocity_ms: Option<f64>,
    /// Power-stroke length (m).
    #[serde(default)]
    pub power_stroke_m: Option<f64>,
    /// Upper bound on returned modes.
    #[serde(default = "default_max_modes")]
    pub max_modes: usize,
}

impl AnalysisParams {
    /// Parameters for a bare shaft with defaults everywhere else.
    pub fn new(length_in: f64, spine: f64, shaft_mass_g: f64) -> Self {
        Self {
            length_in,
            num_elements: DEFAULT_NUM_ELEMENTS,
            spine,
            shaft_mass_g,
            tip_grains: None,
            nock_grains: None,
            fletch_grains: None,
            fletch_pos_in: None,
            exit_velocity_ms: None,
            power_stroke_m: None,
            max_modes: DEFAULT_MAX_MODES,
        }
    }

    /// Check the bundle before analysis.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] on any nonpositive/non-finite
    /// required value, zero element or mode count, or negative optional
    /// mass/launch values.
    pub fn validate(&self) -> Result<()> {
        if !(self.length_in.is_finite() && self.length_in > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "shaft length must be finite and positive, got {}",
                self.length_in
            )));
        }
        if self.num_elements == 0 {
            return Err(Error::InvalidParameter(
                "element count must be at least 1".into(),
            ));
        }
        if !(self.spine.is_finite() && self.spine > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "spine rating must be finite and positive, got {}",
                self.spine
            )));
        }
        if !(self.shaft_mass_g.is_finite() && self.shaft_mass_g >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "shaft mass must be finite and non-negative, got {}",
                self.shaft_mass_g
            )));
        }
        if self.max_modes == 0 {
            return Err(Error::InvalidParameter(
                "mode count must be at least 1".into(),
            ));
        }

        for (name, value) in [
            ("tip mass", self.tip_grains),
            ("nock mass", self.nock_grains),
            ("fletching mass", self.fletch_grains),
            ("exit velocity", self.exit_velocity_ms),
            ("power stroke", self.power_stroke_m),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v >= 0.0) {
                    return Err(Error::InvalidParameter(format!(
                        "{name} must be finite and non-negative, got {v}"
                    )));
                }
            }
        }
        if let Some(pos) = self.fletch_pos_in {
            if !pos.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "fletching position must be finite, got {pos}"
                )));
            }
        }

        Ok(())
    }

    /// Build the SI point-mass list: tip at the tip node, nock at the
    /// clamped node, fletching at its stated position.
    fn point_masses(&self, length: f64) -> Vec<PointMass> {
        let mut pms = Vec::new();
        if let Some(grains) = self.tip_grains {
            pms.push(PointMass::new(length, grains_to_kg(grains)));
        }
        if let Some(grains) = self.nock_grains {
            pms.push(PointMass::new(0.0, grains_to_kg(grains)));
        }
        if let Some(grains) = self.fletch_grains {
            let pos = inches_to_meters(self.fletch_pos_in.unwrap_or(0.0));
            pms.push(PointMass::new(pos, grains_to_kg(grains)));
        }
        pms
    }

    /// Whether the axial softening stage runs. Zero velocity or stroke
    /// means "not launched": the stage is skipped outright, not fed a
    /// degenerate factor.
    fn axial_stage(&self) -> Option<(f64, f64)> {
        match (self.exit_velocity_ms, self.power_stroke_m) {
            (Some(v), Some(s)) if v > 0.0 && s > 0.0 => Some((v, s)),
            _ => None,
        }
    }
}

/// Everything one analysis produces: the final modes plus every
/// intermediate matrix for diagnostic inspection.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Effective bending stiffness (N·m²).
    pub ei: f64,
    /// Full global stiffness matrix, size 2(n+1).
    pub stiffness: DMatrix<f64>,
    /// Full global mass matrix, size 2(n+1).
    pub mass: DMatrix<f64>,
    /// System after clamping the nock, before axial softening.
    pub reduced: ReducedSystem,
    /// Axial softening diagnostics; `None` when the stage was skipped.
    pub axial: Option<AxialSoftening>,
    /// Natural modes, ascending by eigenvalue.
    pub modes: Vec<Mode>,
    /// Non-fatal solver diagnostics; empty for a healthy system.
    pub warnings: Vec<ComputationWarning>,
}

/// Run the full modal-analysis pipeline for one parameter bundle.
///
/// Stages: validation → unit conversion → spine-to-EI → global assembly
/// → clamped-nock reduction → optional axial softening → generalized
/// eigensolve with mode expansion.
///
/// # Errors
/// * [`Error::InvalidParameter`] from validation
/// * [`Error::SingularSystem`] when the mass distribution leaves a DOF
///   without inertia (e.g. a massless shaft)
pub fn analyze(params: &AnalysisParams) -> Result<AnalysisResult> {
    params.validate()?;

    let length = inches_to_meters(params.length_in);
    let n = params.num_elements;
    let shaft_mass = grams_to_kg(params.shaft_mass_g);
    let point_masses = params.point_masses(length);

    let ei = spine_to_ei_standard(params.spine)?;
    log::debug!(
        "spine {} over {} elements: EI = {:.4e} N·m²",
        params.spine,
        n,
        ei
    );

    let (stiffness, mass) = assemble_global_matrices(length, n, shaft_mass, ei, &point_masses);
    let reduced = reduce_system(&stiffness, &mass, &CLAMPED_NOCK_DOFS)?;

    let axial = match params.axial_stage() {
        Some((velocity, stroke)) => {
            let mass_ahead = MassAhead::new(length, n, shaft_mass, &point_masses)?;
            let softening =
                estimate_axial_softening(&mass_ahead, length, n, velocity, stroke);
            log::debug!(
                "axial softening: peak force {:.3} N, factor {:.4}",
                softening.peak_force,
                softening.factor
            );
            Some(softening)
        }
        None => None,
    };

    let full_dof_count = (n + 1) * DOF_PER_NODE;
    let (modes, warnings) = match axial {
        Some(softening) => {
            let k_effective = &reduced.stiffness * softening.factor;
            solve_modes(
                &k_effective,
                &reduced.mass,
                &reduced.free_dofs,
                full_dof_count,
                params.max_modes,
            )?
        }
        None => solve_modes(
            &reduced.stiffness,
            &reduced.mass,
            &reduced.free_dofs,
            full_dof_count,
            params.max_modes,
        )?,
    };

    if let Some(first) = modes.first() {
        log::debug!(
            "{} modes, fundamental {:.2} Hz, {} warnings",
            modes.len(),
            first.frequency_hz,
            warnings.len()
        );
    }

    Ok(AnalysisResult {
        ei,
        stiffness,
        mass,
        reduced,
        axial,
        modes,
        warnings,
    })
}

/// Analyze several independent parameter bundles.
///
/// Runs in parallel when the `parallel` feature is enabled; the bundles
/// share no state, so results are identical either way.
#[cfg(feature = "parallel")]
pub fn analyze_batch(params: &[AnalysisParams]) -> Vec<Result<AnalysisResult>> {
    params.par_iter().map(analyze).collect()
}

/// Analyze several independent parameter bundles sequentially.
#[cfg(not(feature = "parallel"))]
pub fn analyze_batch(params: &[AnalysisParams]) -> Vec<Result<AnalysisResult>> {
    params.iter().map(analyze).collect()
}
