//! Frequency sweep utilities and post-processing helpers.

use log::warn;

use crate::line::RlgcLine;
use crate::math::{self, CScalar, Scalar};

/// `n` evenly spaced frequencies across a band, both edges included.
///
/// Handy for a single amateur band where log spacing buys nothing.
#[must_use]
pub fn linspace(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let step = (stop_hz - start_hz) / (n as Scalar - 1.0);
            let mut freqs: Vec<Scalar> =
                (0..n).map(|i| start_hz + step * i as Scalar).collect();
            freqs[n - 1] = stop_hz;
            freqs
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
/// Requires start > 0 and stop > 0.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

/// One frequency of a line sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    /// Frequency in hertz.
    pub freq_hz: Scalar,
    /// Characteristic impedance.
    pub z0: CScalar,
    /// Propagation constant.
    pub gamma: CScalar,
    /// Input impedance of the terminated section.
    pub zin: CScalar,
}

impl LinePoint {
    /// Reflection coefficient at the line input against a real reference,
    /// typically the transmitter's 50 Ω.
    #[must_use]
    pub fn reflection(&self, z_ref: Scalar) -> CScalar {
        math::reflection_coefficient(self.zin, CScalar::new(z_ref, 0.0))
    }
}

/// Evaluates `length` meters of `line` terminated in `z_load` at each frequency.
///
/// Non-positive frequencies are evaluated like any other and come back NaN;
/// a warning is logged so the caller can filter them afterwards.
#[must_use]
pub fn sweep_line<I>(line: &RlgcLine, freqs: I, length: Scalar, z_load: CScalar) -> Vec<LinePoint>
where
    I: IntoIterator<Item = Scalar>,
{
    let points: Vec<LinePoint> = freqs
        .into_iter()
        .map(|freq_hz| LinePoint {
            freq_hz,
            z0: line.z0(freq_hz),
            gamma: line.gamma(freq_hz),
            zin: line.zin(freq_hz, length, z_load),
        })
        .collect();

    let degenerate = points.iter().filter(|p| !(p.freq_hz > 0.0)).count();
    if degenerate > 0 {
        warn!(
            "{degenerate} of {} sweep frequencies are not positive; their results are NaN",
            points.len()
        );
    }
    points
}

/// Applies `f` to each frequency and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(freqs: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    freqs.into_iter().map(f).collect()
}

/// Reflection magnitudes in dB, `20·log10(|Γ|)`; a perfect match bottoms out
/// at -6000 dB rather than `-inf`.
#[must_use]
pub fn mag_db(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    const FLOOR: Scalar = 1e-300;
    values
        .into_iter()
        .map(|v| 20.0 * v.norm().max(FLOOR).log10())
        .collect()
}

/// Phase angles in degrees, in (-180, 180].
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg().to_degrees()).collect()
}

/// VSWR of each input impedance against a real reference `z_ref`.
#[must_use]
pub fn vswr(impedances: impl IntoIterator<Item = CScalar>, z_ref: Scalar) -> Vec<Scalar> {
    let z_ref = CScalar::new(z_ref, 0.0);
    impedances
        .into_iter()
        .map(|z| math::vswr(math::reflection_coefficient(z, z_ref)))
        .collect()
}
