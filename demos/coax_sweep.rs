use num_complex::Complex;
use tlcalc::line::RlgcLine;
use tlcalc::params::LineParams;
use tlcalc::sweep::{linspace, mag_db, phase_deg, sweep_line};

fn main() {
    // 30 m of RG-303 feeding a dipole-ish load.
    let line = RlgcLine::new(LineParams::rg303());
    let z_load = Complex::new(73.0, 42.5);

    // Amateur HF bands
    let freqs = [
        1.85e6_f64, 3.6e6, 7.1e6, 10.12e6, 14.2e6, 18.1e6, 21.2e6, 24.9e6, 28.4e6,
    ];

    let data = sweep_line(&line, freqs, 30.0, z_load);

    println!("freq(Hz), Z0_real(ohm), Z0_imag(ohm), alpha(Np/m), Zin_real(ohm), Zin_imag(ohm), loss(dB)");
    for p in &data {
        println!(
            "{:.6e}, {:.4}, {:.4}, {:.6e}, {:.4}, {:.4}, {:.3}",
            p.freq_hz,
            p.z0.re,
            p.z0.im,
            p.gamma.re,
            p.zin.re,
            p.zin.im,
            line.matched_loss_db(p.freq_hz, 30.0)
        );
    }

    // Return loss seen by a 50 ohm rig across the 20 m band.
    let band = sweep_line(&line, linspace(14.0e6, 14.35e6, 8), 30.0, z_load);
    let reflections: Vec<_> = band.iter().map(|p| p.reflection(50.0)).collect();
    let rl_db = mag_db(reflections.iter().copied());
    let phase = phase_deg(reflections.iter().copied());

    println!();
    println!("freq(Hz), |Gamma|(dB), arg(Gamma)(deg)");
    for ((p, rl), ph) in band.iter().zip(rl_db).zip(phase) {
        println!("{:.6e}, {:.3}, {:.2}", p.freq_hz, rl, ph);
    }
}
