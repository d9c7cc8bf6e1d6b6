//! Line parameter sets for the k1/k2 loss model.
//!
//! A line is described by its nominal impedance `Rn`, velocity factor `Vf`,
//! and two empirical loss coefficients: `k1` scales the skin-effect loss
//! (growing with √f) and `k2` the dielectric loss (growing with f). These are
//! the coefficients Owen Duffy's line loss calculator publishes for common
//! cables.
//!
//! Preconditions `Rn > 0` and `0 < Vf ≤ 1` are the caller's responsibility;
//! nothing here validates them.

use std::collections::BTreeMap;

use log::debug;

use crate::errors::{TlError, TlResult};
use crate::math::Scalar;

/// Mapping key for the skin-effect coefficient.
pub const KEY_K1: &str = "k1";
/// Mapping key for the dielectric-loss coefficient.
pub const KEY_K2: &str = "k2";
/// Mapping key for the nominal impedance.
pub const KEY_RN: &str = "Rn";
/// Mapping key for the velocity factor.
pub const KEY_VF: &str = "Vf";

/// Required keys, in the order missing ones are reported.
pub const REQUIRED_KEYS: [&str; 4] = [KEY_K1, KEY_K2, KEY_RN, KEY_VF];

/// Physical parameters of a uniform lossy line.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LineParams {
    /// Empirical skin-effect-loss coefficient.
    pub k1: Scalar,
    /// Empirical dielectric-loss coefficient.
    pub k2: Scalar,
    /// Nominal (high-frequency) characteristic impedance in ohms.
    #[cfg_attr(feature = "serde", serde(rename = "Rn"))]
    pub rn: Scalar,
    /// Velocity factor relative to the speed of light.
    #[cfg_attr(feature = "serde", serde(rename = "Vf"))]
    pub vf: Scalar,
    /// Extra named values carried alongside the line (datasheet figures and
    /// the like). Never read by the electrical formulas.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metadata: BTreeMap<String, Scalar>,
}

impl LineParams {
    /// Parameters from explicit values with no metadata.
    #[must_use]
    pub fn new(k1: Scalar, k2: Scalar, rn: Scalar, vf: Scalar) -> Self {
        Self {
            k1,
            k2,
            rn,
            vf,
            metadata: BTreeMap::new(),
        }
    }

    /// RG-303 (Belden 84303) 50 Ω coax.
    ///
    /// The datasheet quotes a 69.5 % velocity factor; 0.700 is used so the
    /// figures line up with Owen Duffy's calculator, which is also where the
    /// k1/k2 values come from.
    #[must_use]
    pub fn rg303() -> Self {
        Self::new(1.226e-5, 5.226e-11, 50.0, 0.700)
    }

    /// Builds parameters from named values.
    ///
    /// Recognized keys are `k1`, `k2`, `Rn` and `Vf`. Any other key is kept in
    /// [`LineParams::metadata`]. An empty mapping yields [`LineParams::rg303`].
    ///
    /// # Errors
    ///
    /// Returns [`TlError::MissingParameters`] naming every absent required key
    /// when a non-empty mapping lacks any of them.
    pub fn from_map<I, K>(entries: I) -> TlResult<Self>
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            debug!("empty parameter mapping, using RG-303 defaults");
            return Ok(Self::rg303());
        }
        Self::from_entries(entries)
    }

    /// Sorts entries into the four line parameters and metadata; every
    /// required key must be present.
    fn from_entries<I, K>(entries: I) -> TlResult<Self>
    where
        I: IntoIterator<Item = (K, Scalar)>,
        K: Into<String>,
    {
        let mut k1 = None;
        let mut k2 = None;
        let mut rn = None;
        let mut vf = None;
        let mut metadata = BTreeMap::new();

        for (key, value) in entries {
            let key = key.into();
            match key.as_str() {
                KEY_K1 => k1 = Some(value),
                KEY_K2 => k2 = Some(value),
                KEY_RN => rn = Some(value),
                KEY_VF => vf = Some(value),
                _ => {
                    metadata.insert(key, value);
                }
            }
        }

        match (k1, k2, rn, vf) {
            (Some(k1), Some(k2), Some(rn), Some(vf)) => {
                if !metadata.is_empty() {
                    debug!(
                        "carrying {} metadata key(s) beside line parameters: {:?}",
                        metadata.len(),
                        metadata.keys().collect::<Vec<_>>()
                    );
                }
                Ok(Self {
                    k1,
                    k2,
                    rn,
                    vf,
                    metadata,
                })
            }
            (k1, k2, rn, vf) => {
                let missing = REQUIRED_KEYS
                    .iter()
                    .zip([k1, k2, rn, vf])
                    .filter(|(_, v)| v.is_none())
                    .map(|(k, _)| *k)
                    .collect();
                Err(TlError::MissingParameters(missing))
            }
        }
    }

    /// Loads parameters from a flat JSON object, e.g.
    /// `{"k1": 1.226e-5, "k2": 5.226e-11, "Rn": 50.0, "Vf": 0.7, "name": "RG-303"}`.
    ///
    /// Numeric extra keys land in [`LineParams::metadata`]; extras of any other
    /// JSON type (names, notes, nested objects) are dropped. An empty object
    /// yields [`LineParams::rg303`].
    ///
    /// # Errors
    ///
    /// Returns [`TlError::InvalidDocument`] for malformed documents or when a
    /// required key holds something other than a number, and
    /// [`TlError::MissingParameters`] as [`LineParams::from_map`] does.
    #[cfg(feature = "serde")]
    pub fn from_json(document: &str) -> TlResult<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(document)
            .map_err(|e| TlError::InvalidDocument(e.to_string()))?;
        if object.is_empty() {
            debug!("empty parameter document, using RG-303 defaults");
            return Ok(Self::rg303());
        }

        let mut numeric = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value.as_f64() {
                Some(number) => numeric.push((key, number)),
                None if REQUIRED_KEYS.contains(&key.as_str()) => {
                    return Err(TlError::InvalidDocument(format!(
                        "line parameter {key} must be a number, got {value}"
                    )));
                }
                None => debug!("dropping non-numeric metadata key {key}: {value}"),
            }
        }
        Self::from_entries(numeric)
    }

    /// Replaces the skin-effect coefficient.
    #[must_use]
    pub fn with_k1(mut self, k1: Scalar) -> Self {
        self.k1 = k1;
        self
    }

    /// Replaces the dielectric-loss coefficient.
    #[must_use]
    pub fn with_k2(mut self, k2: Scalar) -> Self {
        self.k2 = k2;
        self
    }

    /// Replaces the nominal impedance.
    #[must_use]
    pub fn with_rn(mut self, rn: Scalar) -> Self {
        self.rn = rn;
        self
    }

    /// Replaces the velocity factor.
    #[must_use]
    pub fn with_vf(mut self, vf: Scalar) -> Self {
        self.vf = vf;
        self
    }

    /// Attaches a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Scalar) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns the recognized parameters as `(key, value)` pairs.
    #[must_use]
    pub fn required(&self) -> [(&'static str, Scalar); 4] {
        [
            (KEY_K1, self.k1),
            (KEY_K2, self.k2),
            (KEY_RN, self.rn),
            (KEY_VF, self.vf),
        ]
    }
}

impl Default for LineParams {
    fn default() -> Self {
        Self::rg303()
    }
}
