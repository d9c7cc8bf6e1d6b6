//! Frequency-domain model of a lossy line with k1/k2 loss.
//!
//! Inductance and capacitance per meter follow from the nominal impedance and
//! velocity factor alone. Resistance grows with √f (skin effect) and shunt
//! conductance with f (dielectric loss), so the characteristic impedance and
//! propagation constant are both frequency dependent.
//!
//! All queries take frequency in hertz and lengths in meters. Nothing is
//! bounds checked: at `freq = 0` the characteristic impedance is `√(0/0)` and
//! comes back NaN, and that NaN carries through every dependent quantity.

use std::f64::consts::{LN_10, PI};

use log::debug;

use crate::constants::{DB_PER_NEPER, SPEED_OF_LIGHT, angular_frequency};
use crate::math::{self, CScalar, J, Scalar, principal_sqrt, reflection_coefficient};
use crate::params::LineParams;
use crate::twoport::TwoPort;

/// Distributed RLGC parameters per unit length at one frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rlgc {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

/// Lossy transmission line described by [`LineParams`].
///
/// Immutable once built; every query is a pure function of the stored
/// parameters and its arguments, so one instance can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct RlgcLine {
    params: LineParams,
    inductance: Scalar,
    capacitance: Scalar,
}

impl RlgcLine {
    /// Builds the model, deriving `L = Rn / (c·Vf)` and `C = 1 / (c·Vf·Rn)`.
    #[must_use]
    pub fn new(params: LineParams) -> Self {
        let inductance = params.rn / (SPEED_OF_LIGHT * params.vf);
        let capacitance = 1.0 / (SPEED_OF_LIGHT * params.vf * params.rn);
        debug!(
            "line Rn={} Vf={} k1={:e} k2={:e}: L={:e} H/m, C={:e} F/m",
            params.rn, params.vf, params.k1, params.k2, inductance, capacitance
        );
        Self {
            params,
            inductance,
            capacitance,
        }
    }

    /// Builds the model from named values; see [`LineParams::from_map`].
    ///
    /// # Errors
    ///
    /// Fails when a non-empty mapping lacks a required parameter.
    pub fn from_map<I, K>(entries: I) -> crate::errors::TlResult<Self>
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        LineParams::from_map(entries).map(Self::new)
    }

    /// Parameters the model was built from.
    #[must_use]
    pub fn params(&self) -> &LineParams {
        &self.params
    }

    /// Series inductance per meter (H/m).
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Shunt capacitance per meter (F/m).
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Series resistance per meter, proportional to √f.
    #[must_use]
    pub fn r(&self, freq: Scalar) -> Scalar {
        2.0 * self.params.rn / 20.0 * LN_10 * self.params.k1 * freq.sqrt()
    }

    /// Shunt conductance per meter, proportional to f.
    #[must_use]
    pub fn g(&self, freq: Scalar) -> Scalar {
        (2.0 / self.params.rn) / 20.0 * LN_10 * self.params.k2 * freq
    }

    /// Series reactance per meter, `ωL`.
    #[must_use]
    pub fn xl(&self, freq: Scalar) -> Scalar {
        2.0 * PI * freq * self.inductance
    }

    /// Shunt susceptance per meter, `ωC`.
    #[must_use]
    pub fn bc(&self, freq: Scalar) -> Scalar {
        2.0 * PI * freq * self.capacitance
    }

    /// Series impedance per meter, `R + jωL`.
    #[must_use]
    pub fn series_impedance(&self, freq: Scalar) -> CScalar {
        self.r(freq) + J * self.xl(freq)
    }

    /// Shunt admittance per meter, `G + jωC`.
    #[must_use]
    pub fn shunt_admittance(&self, freq: Scalar) -> CScalar {
        self.g(freq) + J * self.bc(freq)
    }

    /// Per-unit-length snapshot at `freq`.
    #[must_use]
    pub fn rlgc(&self, freq: Scalar) -> Rlgc {
        Rlgc {
            r_per_m: self.r(freq),
            l_per_m: self.inductance,
            g_per_m: self.g(freq),
            c_per_m: self.capacitance,
        }
    }

    /// Characteristic impedance `√((R + jωL) / (G + jωC))`, `Re ≥ 0`.
    #[must_use]
    pub fn z0(&self, freq: Scalar) -> CScalar {
        principal_sqrt(self.series_impedance(freq) / self.shunt_admittance(freq))
    }

    /// Characteristic admittance `√((G + jωC) / (R + jωL))`.
    #[must_use]
    pub fn y0(&self, freq: Scalar) -> CScalar {
        principal_sqrt(self.shunt_admittance(freq) / self.series_impedance(freq))
    }

    /// Propagation constant `γ = α + jβ = √((R + jωL)(G + jωC))`, `α ≥ 0`.
    #[must_use]
    pub fn gamma(&self, freq: Scalar) -> CScalar {
        principal_sqrt(self.series_impedance(freq) * self.shunt_admittance(freq))
    }

    /// Attenuation constant α in nepers per meter.
    #[must_use]
    pub fn attenuation(&self, freq: Scalar) -> Scalar {
        self.gamma(freq).re
    }

    /// Phase constant β in radians per meter.
    #[must_use]
    pub fn phase_constant(&self, freq: Scalar) -> Scalar {
        self.gamma(freq).im
    }

    /// Phase velocity `ω / β` in meters per second.
    #[must_use]
    pub fn phase_velocity(&self, freq: Scalar) -> Scalar {
        angular_frequency(freq) / self.phase_constant(freq)
    }

    /// Electrical length `βℓ` in degrees.
    #[must_use]
    pub fn electrical_length_deg(&self, freq: Scalar, length: Scalar) -> Scalar {
        (self.phase_constant(freq) * length).to_degrees()
    }

    /// Loss of `length` meters of matched line in dB.
    #[must_use]
    pub fn matched_loss_db(&self, freq: Scalar, length: Scalar) -> Scalar {
        DB_PER_NEPER * self.attenuation(freq) * length
    }

    /// Reflection coefficient of `z_load` against the line's own `Z0`.
    #[must_use]
    pub fn load_reflection(&self, freq: Scalar, z_load: CScalar) -> CScalar {
        reflection_coefficient(z_load, self.z0(freq))
    }

    /// Input impedance of `length` meters of line terminated in `z_load`:
    ///
    /// `Zin = Z0 · (Zl + Z0·tanh(γℓ)) / (Z0 + Zl·tanh(γℓ))`
    ///
    /// On very long lossy runs `tanh(γℓ)` saturates to 1 and `Zin` settles
    /// on `Z0` whatever the load.
    #[must_use]
    pub fn zin(&self, freq: Scalar, length: Scalar, z_load: CScalar) -> CScalar {
        let z0 = self.z0(freq);
        let t = math::tanh(self.gamma(freq) * length);
        z0 * (z_load + z0 * t) / (z0 + z_load * t)
    }

    /// ABCD two-port of `length` meters of this line.
    #[must_use]
    pub fn abcd(&self, freq: Scalar, length: Scalar) -> TwoPort {
        TwoPort::from_line(self, freq, length)
    }
}

impl Default for RlgcLine {
    /// RG-303 coax.
    fn default() -> Self {
        Self::new(LineParams::rg303())
    }
}

impl From<LineParams> for RlgcLine {
    fn from(params: LineParams) -> Self {
        Self::new(params)
    }
}
