use arrowfem::{analyze, AnalysisParams, MassAhead, PointMass};
use arrowfem::units::{grains_to_kg, inches_to_meters};

/// The reference setup: a 30 in, 500-spine, 14 g shaft with a 125 gr
/// tip, 8 gr nock, and 20 gr of fletching 2 in from the nock, launched
/// at 75 m/s over a 0.7 m power stroke.
fn reference_arrow() -> AnalysisParams {
    let mut params = AnalysisParams::new(30.0, 500.0, 14.0);
    params.num_elements = 24;
    params.tip_grains = Some(125.0);
    params.nock_grains = Some(8.0);
    params.fletch_grains = Some(20.0);
    params.fletch_pos_in = Some(2.0);
    params.exit_velocity_ms = Some(75.0);
    params.power_stroke_m = Some(0.7);
    params
}

#[test]
fn reference_arrow_end_to_end() {
    let result = analyze(&reference_arrow()).unwrap();

    assert!(result.ei > 0.0 && result.ei.is_finite());

    // 25 nodes × 2 DOF, minus the 2 clamped DOFs
    assert_eq!(result.stiffness.nrows(), 50);
    assert_eq!(result.mass.nrows(), 50);
    assert_eq!(result.reduced.num_dofs(), 48);
    assert_eq!(result.reduced.free_dofs.len(), 48);

    assert_eq!(result.modes.len(), 6);
    for window in result.modes.windows(2) {
        assert!(
            window[0].omega2 < window[1].omega2,
            "frequencies must strictly ascend: {} vs {}",
            window[0].frequency_hz,
            window[1].frequency_hz
        );
    }

    let first = &result.modes[0];
    assert!(first.frequency_hz.is_finite());
    assert!(first.frequency_hz > 0.0);

    assert!(result.warnings.is_empty());

    let axial = result.axial.expect("launch parameters enable the axial stage");
    assert!(axial.factor > 0.2 && axial.factor < 1.0);
    assert!(axial.peak_force > 0.0);
}

#[test]
fn tip_mass_never_raises_the_first_mode() {
    let mut bare = reference_arrow();
    bare.tip_grains = None;
    bare.exit_velocity_ms = None;
    bare.power_stroke_m = None;

    let mut loaded = bare.clone();
    loaded.tip_grains = Some(125.0);

    let f_bare = analyze(&bare).unwrap().modes[0].frequency_hz;
    let f_loaded = analyze(&loaded).unwrap().modes[0].frequency_hz;

    assert!(
        f_loaded <= f_bare,
        "adding tip mass cannot raise the fundamental: {f_loaded} > {f_bare}"
    );
}

#[test]
fn heavier_tip_lowers_the_first_mode_monotonically() {
    let mut params = reference_arrow();
    params.exit_velocity_ms = None;
    params.power_stroke_m = None;

    let mut prev = f64::INFINITY;
    for grains in [75.0, 100.0, 125.0, 150.0] {
        params.tip_grains = Some(grains);
        let f1 = analyze(&params).unwrap().modes[0].frequency_hz;
        assert!(f1 < prev, "{grains} gr tip should lower f1: {f1} vs {prev}");
        prev = f1;
    }
}

#[test]
fn point_mass_beyond_the_tip_is_clamped_not_rejected() {
    let mut overshoot = reference_arrow();
    // Fletching placed past the free end
    overshoot.fletch_pos_in = Some(45.0);

    let mut at_tip = reference_arrow();
    at_tip.fletch_pos_in = Some(30.0);

    let a = analyze(&overshoot).unwrap();
    let b = analyze(&at_tip).unwrap();

    assert_eq!(a.modes.len(), b.modes.len());
    for (ma, mb) in a.modes.iter().zip(b.modes.iter()) {
        assert_eq!(ma.omega2, mb.omega2);
    }
}

#[test]
fn requesting_more_modes_than_free_dofs_caps_the_list() {
    let mut params = AnalysisParams::new(30.0, 500.0, 14.0);
    params.num_elements = 2; // 6 DOF, 4 free
    params.max_modes = 10;

    let result = analyze(&params).unwrap();
    assert_eq!(result.modes.len(), 4);
}

#[test]
fn mass_ahead_of_the_reference_setup_is_physical() {
    let length = inches_to_meters(30.0);
    let pms = [
        PointMass::new(length, grains_to_kg(125.0)),
        PointMass::new(0.0, grains_to_kg(8.0)),
        PointMass::new(inches_to_meters(2.0), grains_to_kg(20.0)),
    ];
    let ahead = MassAhead::new(length, 24, 0.014, &pms).unwrap();

    // Non-increasing toward the tip, zero past it
    let mut prev = f64::INFINITY;
    for i in 0..=48 {
        let x = i as f64 * length / 48.0;
        let m = ahead.at(x);
        assert!(m <= prev + 1e-12);
        prev = m;
    }
    assert_eq!(ahead.at(length), 0.0);

    // From the nock, the tip mass and nearly the whole shaft are ahead
    let total_ahead = ahead.at(0.0);
    assert!(total_ahead > grains_to_kg(125.0));
    assert!(total_ahead < 0.014 + grains_to_kg(153.0));
}

#[test]
fn launch_softening_lowers_but_preserves_mode_ordering() {
    let launched = analyze(&reference_arrow()).unwrap();

    let mut unlaunched = reference_arrow();
    unlaunched.exit_velocity_ms = None;
    unlaunched.power_stroke_m = None;
    let still = analyze(&unlaunched).unwrap();

    assert!(still.axial.is_none());
    for (soft, hard) in launched.modes.iter().zip(still.modes.iter()) {
        assert!(soft.frequency_hz < hard.frequency_hz);
    }

    // Scalar scaling shifts all eigenvalues by the same factor
    let factor = launched.axial.unwrap().factor;
    for (soft, hard) in launched.modes.iter().zip(still.modes.iter()) {
        let ratio = soft.omega2 / hard.omega2;
        assert!((ratio - factor).abs() < 1e-6 * factor);
    }
}
