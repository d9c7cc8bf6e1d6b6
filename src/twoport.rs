//! ABCD two-port representation of line sections.

use num_complex::Complex;

use crate::line::RlgcLine;
use crate::math::{CScalar, Scalar, reflection_coefficient};

/// ABCD-based two-port network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: CScalar,
    /// B element of the ABCD matrix.
    pub b: CScalar,
    /// C element of the ABCD matrix.
    pub c: CScalar,
    /// D element of the ABCD matrix.
    pub d: CScalar,
}

impl TwoPort {
    /// Identity two-port (through connection): [[1, 0], [0, 1]].
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: Complex::new(1.0, 0.0),
            b: Complex::new(0.0, 0.0),
            c: Complex::new(0.0, 0.0),
            d: Complex::new(1.0, 0.0),
        }
    }

    /// Constructs a two-port from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: CScalar, b: CScalar, c: CScalar, d: CScalar) -> Self {
        Self { a, b, c, d }
    }

    /// Series impedance `Z` represented as a two-port.
    #[must_use]
    pub fn series_impedance(z: CScalar) -> Self {
        Self::from_abcd(Complex::new(1.0, 0.0), z, Complex::new(0.0, 0.0), Complex::new(1.0, 0.0))
    }

    /// Shunt admittance `Y` represented as a two-port.
    #[must_use]
    pub fn shunt_admittance(y: CScalar) -> Self {
        Self::from_abcd(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), y, Complex::new(1.0, 0.0))
    }

    /// `length` meters of `line` at `freq`:
    /// `[[cosh(γℓ), Z0·sinh(γℓ)], [sinh(γℓ)/Z0, cosh(γℓ)]]`.
    ///
    /// The entries grow like `e^(αℓ)/2` and leave the `f64` range past about
    /// 709 Np of total attenuation; use [`RlgcLine::zin`] for longer runs.
    #[must_use]
    pub fn from_line(line: &RlgcLine, freq: Scalar, length: Scalar) -> Self {
        let z0 = line.z0(freq);
        let gl = line.gamma(freq) * length;
        let ch = gl.cosh();
        let sh = gl.sinh();
        Self::from_abcd(ch, z0 * sh, sh / z0, ch)
    }

    /// ABCD determinant `ad - bc`.
    #[must_use]
    pub fn determinant(&self) -> CScalar {
        self.a * self.d - self.b * self.c
    }

    /// Cascades this two-port with `rhs` (i.e., self followed by rhs).
    #[must_use]
    pub fn cascade(&self, rhs: &TwoPort) -> TwoPort {
        // Matrix multiplication [[a b],[c d]] * [[a' b'],[c' d']]
        TwoPort {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Impedance seen at port 1 with port 2 terminated in `z_load`.
    #[must_use]
    pub fn input_impedance(&self, z_load: CScalar) -> CScalar {
        let num = self.a * z_load + self.b;
        let den = self.c * z_load + self.d;
        // complex division squares |den|; normalise first so long lossy
        // sections with huge entries don't overflow
        let scale = den.norm();
        if scale.is_finite() && scale > 0.0 {
            num.unscale(scale) / den.unscale(scale)
        } else {
            num / den
        }
    }

    /// Reflection coefficient at port 1 for real reference impedance `z_ref`.
    #[must_use]
    pub fn reflection(&self, z_ref: Scalar, z_load: CScalar) -> CScalar {
        reflection_coefficient(self.input_impedance(z_load), Complex::new(z_ref, 0.0))
    }
}

impl Default for TwoPort {
    fn default() -> Self {
        Self::identity()
    }
}
