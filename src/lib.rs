//! Finite-element modal analysis of archery arrow shafts.
//!
//! The shaft is modeled as a slender clamped-free Euler–Bernoulli beam:
//! the manufacturer's static spine rating fixes an effective bending
//! stiffness, the shaft and its attachments (tip, nock, fletching) become
//! a lumped nodal mass distribution, and the generalized eigenproblem of
//! the assembled system yields the lowest natural frequencies and mode
//! shapes.
//!
//! ## Pipeline
//! 1. Spine rating → EI via the static deflection test ([`spine`])
//! 2. Lumped nodal masses and the mass-ahead query ([`mass`])
//! 3. Element matrices and global assembly ([`element`], [`assembly`])
//! 4. Clamped-nock boundary reduction ([`reduction`])
//! 5. Optional launch-compression softening ([`axial`])
//! 6. Generalized eigensolve and mode expansion ([`solver`])
//!
//! [`analyze`] runs the whole pipeline for one parameter bundle:
//!
//! ```
//! use arrowfem::{analyze, AnalysisParams};
//!
//! let mut params = AnalysisParams::new(30.0, 500.0, 14.0);
//! params.tip_grains = Some(125.0);
//!
//! let result = analyze(&params).unwrap();
//! println!("EI = {:.3} N·m²", result.ei);
//! for (i, mode) in result.modes.iter().enumerate() {
//!     println!("mode {}: {:.1} Hz", i + 1, mode.frequency_hz);
//! }
//! ```
//!
//! ## Model limits
//! A single effective EI spans the whole length (no taper or barrel
//! profiles), the element mass matrix is a documented simplified lumped
//! model, and the axial launch-compression effect is a scalar stiffness
//! reduction rather than a geometric-stiffness formulation. Problem
//! sizes are tens of elements; everything is dense and in-memory.

pub mod analysis;
pub mod assembly;
pub mod axial;
pub mod element;
pub mod error;
pub mod mass;
pub mod reduction;
pub mod solver;
pub mod spine;
pub mod types;
pub mod units;

pub use analysis::{analyze, analyze_batch, AnalysisParams, AnalysisResult};
pub use axial::{estimate_axial_softening, peak_launch_acceleration, AxialSoftening};
pub use assembly::assemble_global_matrices;
pub use element::{beam_mass_lumped, beam_stiffness};
pub use error::{ComputationWarning, Error, Result};
pub use mass::{build_nodal_masses, MassAhead, PointMass};
pub use reduction::{reduce_system, ReducedSystem, CLAMPED_NOCK_DOFS};
pub use solver::{solve_modes, Mode};
pub use spine::{spine_to_ei, spine_to_ei_standard, DEFAULT_LOAD_KG, DEFAULT_SPAN_IN};
pub use types::{DEFAULT_MAX_MODES, DEFAULT_NUM_ELEMENTS, DOF_PER_NODE};
