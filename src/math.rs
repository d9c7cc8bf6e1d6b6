//! Shared numerical primitives anchored on `num_complex`.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and phasors.
pub type CScalar = Complex<Scalar>;

/// Imaginary unit `j`.
pub const J: CScalar = Complex::new(0.0, 1.0);

/// Complex square root on the principal branch, `Re(√z) ≥ 0`.
///
/// `num_complex` 0.4 already returns a root with non-negative real part; the
/// branch is pinned here as well so the characteristic impedance and
/// attenuation of a passive line never depend on that library detail. NaN
/// input stays NaN.
#[must_use]
pub fn principal_sqrt(z: CScalar) -> CScalar {
    let root = z.sqrt();
    if root.re < 0.0 {
        -root
    } else {
        root
    }
}

/// Above this real part `tanh` is evaluated from `e^(-2|z|)`.
const TANH_DIRECT_LIMIT: Scalar = 20.0;

/// Complex hyperbolic tangent that saturates to `±1` instead of overflowing.
///
/// `Complex::tanh` goes through `sinh(2x)` and `cosh(2x)`, which reach
/// `inf / inf` once `|Re z|` passes about 355. Large arguments use
/// `(1 − e^(−2z)) / (1 + e^(−2z))` (mirrored for `Re z < 0`), which is exact
/// algebra and stays bounded. Poles on the imaginary axis are untouched.
#[must_use]
pub fn tanh(z: CScalar) -> CScalar {
    if z.re.abs() <= TANH_DIRECT_LIMIT || z.re.is_nan() {
        return z.tanh();
    }
    if z.re < 0.0 {
        return -tanh(-z);
    }
    let e = (-2.0 * z).exp();
    (1.0 - e) / (1.0 + e)
}

/// Reflection coefficient of impedance `z` against reference `z_ref`.
#[must_use]
pub fn reflection_coefficient(z: CScalar, z_ref: CScalar) -> CScalar {
    (z - z_ref) / (z + z_ref)
}

/// Voltage standing wave ratio for a reflection coefficient magnitude.
///
/// Returns `inf` for total reflection.
#[must_use]
pub fn vswr(gamma: CScalar) -> Scalar {
    let rho = gamma.norm();
    (1.0 + rho) / (1.0 - rho)
}
