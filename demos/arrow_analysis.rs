//! Full analysis of a typical target arrow, printed to stdout.
//!
//! Run with: `cargo run --example arrow_analysis`

use arrowfem::{analyze, AnalysisParams};

fn main() {
    let mut params = AnalysisParams::new(30.0, 500.0, 14.0);
    params.num_elements = 24;
    params.tip_grains = Some(125.0);
    params.nock_grains = Some(8.0);
    params.fletch_grains = Some(20.0);
    params.fletch_pos_in = Some(2.0);
    params.exit_velocity_ms = Some(75.0);
    params.power_stroke_m = Some(0.7);

    let result = match analyze(&params) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("analysis failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Estimated EI: {:.3e} N·m²", result.ei);
    if let Some(axial) = result.axial {
        println!(
            "Launch compression: peak {:.2} N, stiffness factor {:.4}",
            axial.peak_force, axial.factor
        );
    }

    println!("Lowest modes:");
    for (i, mode) in result.modes.iter().enumerate() {
        println!(
            "  {}: {:.2} Hz (omega^2 = {:.3e} rad²/s²)",
            i + 1,
            mode.frequency_hz,
            mode.omega2
        );
    }

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
}
