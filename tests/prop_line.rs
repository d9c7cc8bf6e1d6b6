//! Property-based tests for the line model using proptest.
//!
//! Covers: default construction, zero-length and matched-load identities,
//! loss monotonicity, Z0/Y0 reciprocity, passivity over a wide band, and
//! long lossy runs that saturate onto Z0.

use num_complex::Complex;
use proptest::prelude::*;
use tlcalc::constants::SPEED_OF_LIGHT;
use tlcalc::line::RlgcLine;
use tlcalc::math::principal_sqrt;
use tlcalc::params::LineParams;

fn close(a: Complex<f64>, b: Complex<f64>, tol: f64) -> bool {
    (a - b).norm() <= tol * b.norm().max(1.0)
}

fn line_strategy() -> impl Strategy<Value = RlgcLine> {
    (1.0e-6f64..5.0e-5, 1.0e-12f64..5.0e-10, 25.0f64..600.0, 0.5f64..1.0)
        .prop_map(|(k1, k2, rn, vf)| RlgcLine::new(LineParams::new(k1, k2, rn, vf)))
}

#[test]
fn default_construction_matches_rg303() {
    let line = RlgcLine::default();
    assert_eq!(line.params(), &LineParams::rg303());
    assert_eq!(line.inductance(), 50.0 / (SPEED_OF_LIGHT * 0.700));
    assert_eq!(line.capacitance(), 1.0 / (SPEED_OF_LIGHT * 0.700 * 50.0));
}

#[test]
fn twenty_meter_band_example() {
    let line = RlgcLine::default();
    let z0 = line.z0(14.2e6);
    let gamma = line.gamma(14.2e6);
    assert!(z0.is_finite());
    assert!(gamma.is_finite());
    assert!(z0.re > 0.0);
    assert!(gamma.re >= 0.0);
}

#[test]
fn empty_mapping_builds_default_line() {
    let line = RlgcLine::from_map(Vec::<(String, f64)>::new()).unwrap();
    assert_eq!(line, RlgcLine::default());
}

proptest! {
    /// Zero length hands back the load unchanged.
    #[test]
    fn zero_length_is_identity(
        line in line_strategy(),
        freq in 1.0e5f64..3.0e9,
        re in 0.1f64..2000.0,
        im in -2000.0f64..2000.0,
    ) {
        let zl = Complex::new(re, im);
        let zin = line.zin(freq, 0.0, zl);
        prop_assert!(close(zin, zl, 1e-9), "zin={zin} zl={zl}");
    }

    /// A line terminated in its own Z0 presents Z0 at any length.
    #[test]
    fn matched_load_is_invariant(
        line in line_strategy(),
        freq in 1.0e5f64..3.0e9,
        length in 0.0f64..1.0e5,
    ) {
        let z0 = line.z0(freq);
        let zin = line.zin(freq, length, z0);
        prop_assert!(close(zin, z0, 1e-9), "zin={zin} z0={z0}");
    }

    /// R grows with √f, G grows linearly.
    #[test]
    fn loss_terms_are_monotone(
        line in line_strategy(),
        f1 in 0.0f64..1.0e9,
        df in 0.0f64..1.0e9,
    ) {
        let f2 = f1 + df;
        prop_assert!(line.r(f2) >= line.r(f1));
        prop_assert!(line.g(f2) >= line.g(f1));
        if f1 > 0.0 {
            let slope = line.g(f1) / f1;
            prop_assert!((line.g(f2) - slope * f2).abs() <= 1e-12 * line.g(f2));
        }
    }

    /// Z0 times the admittance formulation is unity.
    #[test]
    fn z0_and_y0_are_reciprocal(
        line in line_strategy(),
        freq in 1.0e5f64..3.0e9,
    ) {
        let y = principal_sqrt(line.shunt_admittance(freq) / line.series_impedance(freq));
        let product = line.z0(freq) * y;
        prop_assert!(close(product, Complex::new(1.0, 0.0), 1e-12), "product={product}");
        prop_assert!(close(line.z0(freq) * line.y0(freq), Complex::new(1.0, 0.0), 1e-12));
    }

    /// Passive line: positive Re(Z0), non-negative attenuation.
    #[test]
    fn line_is_passive(
        line in line_strategy(),
        freq in 1.0f64..1.0e10,
    ) {
        let z0 = line.z0(freq);
        let gamma = line.gamma(freq);
        prop_assert!(z0.is_finite() && gamma.is_finite());
        prop_assert!(z0.re > 0.0);
        prop_assert!(gamma.re >= 0.0);
        prop_assert!(gamma.im > 0.0);
    }

    /// ABCD form and Telegrapher form agree.
    #[test]
    fn abcd_matches_zin(
        line in line_strategy(),
        freq in 1.0e5f64..1.0e9,
        length in 0.0f64..50.0,
        re in 1.0f64..500.0,
        im in -500.0f64..500.0,
    ) {
        let zl = Complex::new(re, im);
        let direct = line.zin(freq, length, zl);
        let chained = line.abcd(freq, length).input_impedance(zl);
        prop_assert!(close(chained, direct, 1e-7), "abcd={chained} direct={direct}");
    }

    /// Kilometres of line at GHz: tens of thousands of nepers, Zin stays
    /// finite and forgets the load once the section is deep enough.
    #[test]
    fn long_line_stays_finite_and_settles_on_z0(
        line in line_strategy(),
        freq in 1.0e8f64..3.0e9,
        length in 1.0e3f64..1.0e5,
        re in 0.0f64..1.0e6,
        im in -1.0e6f64..1.0e6,
    ) {
        let zl = Complex::new(re, im);
        let zin = line.zin(freq, length, zl);
        prop_assert!(zin.is_finite(), "zin={zin} at {freq} Hz, {length} m");
        if line.attenuation(freq) * length > 40.0 {
            let z0 = line.z0(freq);
            prop_assert!(close(zin, z0, 1e-9), "zin={zin} z0={z0}");
        }
    }
}
