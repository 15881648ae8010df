//! Static spine rating → bending stiffness conversion.
//!
//! Models the AMO static spine test: a shaft rests on supports 28 in
//! apart and a 1.94 lbf (≈ 0.88 kgf) weight hangs at the center. The
//! spine value is the measured center deflection in thousandths of an
//! inch, so spine 500 means the shaft sagged 0.500 in. For a simply
//! supported beam with a center load, `delta = F·L³/(48·EI)`, which
//! solves directly for EI.
//!
//! Spine is a deflection measurement, not a stiffness: a larger spine
//! number means a more flexible shaft and a smaller EI. The conversion
//! assumes a single effective EI along the whole length, a deliberate
//! simplification for tapered or barreled shafts.

use crate::error::{Error, Result};
use crate::units::{GRAVITY, INCH};

/// Support span of the standard spine test (inches).
pub const DEFAULT_SPAN_IN: f64 = 28.0;

/// Center load of the standard spine test (kg). The 1.94 lbf test weight
/// is 0.88 kgf; the force applied is `0.88 · g`.
pub const DEFAULT_LOAD_KG: f64 = 0.88;

/// Convert a static spine rating to an effective bending stiffness.
///
/// # Arguments
/// * `spine` - Static spine rating (deflection in thousandths of an inch)
/// * `span_in` - Support span of the deflection test (inches)
/// * `load_kg` - Center load mass (kg)
///
/// # Returns
/// Effective bending stiffness EI (N·m²)
///
/// # Errors
/// [`Error::InvalidParameter`] unless spine, span, and load are all
/// finite and positive.
pub fn spine_to_ei(spine: f64, span_in: f64, load_kg: f64) -> Result<f64> {
    if !(spine.is_finite() && spine > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "spine rating must be finite and positive, got {spine}"
        )));
    }
    if !(span_in.is_finite() && span_in > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "test span must be finite and positive, got {span_in}"
        )));
    }
    if !(load_kg.is_finite() && load_kg > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "test load must be finite and positive, got {load_kg}"
        )));
    }

    let span = span_in * INCH;
    let delta = (spine / 1000.0) * INCH;
    let force = load_kg * GRAVITY;

    Ok(force * span.powi(3) / (48.0 * delta))
}

/// [`spine_to_ei`] with the standard test span and load.
pub fn spine_to_ei_standard(spine: f64) -> Result<f64> {
    spine_to_ei(spine, DEFAULT_SPAN_IN, DEFAULT_LOAD_KG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spine_500_gives_expected_ei() {
        // delta = 0.5 in, F = 0.88 kg · g, L = 28 in
        let ei = spine_to_ei_standard(500.0).unwrap();
        let span: f64 = 28.0 * INCH;
        let expected = 0.88 * GRAVITY * span.powi(3) / (48.0 * 0.5 * INCH);
        assert!((ei - expected).abs() < 1e-12);
        assert!(ei > 0.0 && ei.is_finite());
    }

    #[test]
    fn ei_is_strictly_decreasing_in_spine() {
        let spines = [250.0, 300.0, 400.0, 500.0, 700.0, 1000.0];
        let eis: Vec<f64> = spines
            .iter()
            .map(|&s| spine_to_ei_standard(s).unwrap())
            .collect();

        for pair in eis.windows(2) {
            assert!(
                pair[0] > pair[1],
                "EI should strictly decrease with spine: {} vs {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn halving_spine_doubles_ei() {
        let ei_250 = spine_to_ei_standard(250.0).unwrap();
        let ei_500 = spine_to_ei_standard(500.0).unwrap();
        assert!((ei_250 / ei_500 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_nonpositive_inputs() {
        assert!(spine_to_ei_standard(0.0).is_err());
        assert!(spine_to_ei_standard(-500.0).is_err());
        assert!(spine_to_ei_standard(f64::NAN).is_err());
        assert!(spine_to_ei(500.0, 0.0, DEFAULT_LOAD_KG).is_err());
        assert!(spine_to_ei(500.0, DEFAULT_SPAN_IN, -1.0).is_err());
    }
}
