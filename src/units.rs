//! Unit conversion constants shared by the analysis pipeline.
//!
//! Archery inputs arrive in mixed units (inches, grams, grains); all
//! computation happens in SI.

/// Meters per inch.
pub const INCH: f64 = 0.0254;

/// Kilograms per grain (1/7000 pound).
pub const GRAIN: f64 = 6.479891e-5;

/// Kilograms per pound.
pub const LB: f64 = 0.45359237;

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.80665;

/// Convert inches to meters.
#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches * INCH
}

/// Convert grains to kilograms.
#[inline]
pub fn grains_to_kg(grains: f64) -> f64 {
    grains * GRAIN
}

/// Convert grams to kilograms.
#[inline]
pub fn grams_to_kg(grams: f64) -> f64 {
    grams / 1000.0
}
