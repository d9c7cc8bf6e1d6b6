//! Baseline physical constants and unit conversions.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition (2019 revision). The
//! neper/decibel factors are derived from it analytically and carry full
//! `f64` precision.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Owen Duffy, "Modelling transmission line loss": <https://owenduffy.net/transmissionline/concept/mptl.htm>

use std::f64::consts::{LN_10, PI};

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Decibels per neper, `20 · log10(e)` ≈ 8.686 dB/Np.
pub const DB_PER_NEPER: f64 = 20.0 / LN_10;

/// Nepers per decibel, `ln(10) / 20` ≈ 0.1151 Np/dB.
pub const NEPER_PER_DB: f64 = LN_10 / 20.0;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: f64) -> f64 {
    SPEED_OF_LIGHT / hz
}

/// Wavelength inside a line with velocity factor `vf`.
#[inline]
#[must_use]
pub fn guided_wavelength(hz: f64, vf: f64) -> f64 {
    vf * wavelength_from_frequency(hz)
}
