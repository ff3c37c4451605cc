// File: crates/pgf-examples/src/bin/sine_superposition.rs
// Summary: Builds a superposition-of-sine-waves figure and exports csv + tex.

use std::f64::consts::PI;

use pgf_core::{Dataset, Figure};

fn main() {
    let t_max = 20.0;
    let samples = 2000usize;
    // Inclusive endpoints over [0, t_max].
    let time: Vec<f64> = (0..samples)
        .map(|i| i as f64 * t_max / (samples - 1) as f64)
        .collect();

    let s1 = sine_wave(1.0, 1.0, 0.0, &time);
    let s2 = sine_wave(0.8, 1.1, PI / 4.0, &time);
    let sum: Vec<f64> = s1.iter().zip(&s2).map(|(a, b)| a + b).collect();

    let data = Dataset::from_series(time, vec![s1, s2, sum]).expect("rectangular series");
    let mut figure = Figure::new(data, "sine_wave_superposition").expect("two or more rows");
    figure.set_legend(vec![
        "$s_1(t)$".to_string(),
        "$s_2(t)$".to_string(),
        "$s_1(t)+s_2(t)$".to_string(),
    ]);
    figure.set_caption(
        "Superposition of two sine waves with different frequencies, amplitudes and phases.",
    );
    figure.set_axis_option("xlabel", "$t$");
    figure.set_axis_option("ylabel", "Signal");
    figure.set_axis_option("x unit", r"\si{\second}");

    figure.export().expect("export figure");
    println!("Wrote {}", figure.csv_path().display());
    println!("Wrote {}", figure.tex_path().display());
}

fn sine_wave(amplitude: f64, frequency: f64, phase: f64, time: &[f64]) -> Vec<f64> {
    time.iter()
        .map(|t| amplitude * (2.0 * PI * frequency * t + phase).sin())
        .collect()
}
