//! Batch waveform generators — the raw material for every effect.
//!
//! Each generator renders a whole buffer of `f64` samples, nominally in
//! [-1, 1], at the fixed sample rate. Tonal generators take an optional
//! linear decay envelope `1 - t/duration`; the noise envelope is the
//! sample-index fraction `1 - i/N` instead.

use std::f64::consts::PI;

use rand::Rng;

use super::{SAMPLE_RATE, num_samples};

/// Sine tone at `freq` Hz, amplitude 0.5.
pub fn sine_wave(freq: f64, duration: f64, decay: bool) -> Vec<f64> {
    let n = num_samples(duration);
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / SAMPLE_RATE as f64;
        let mut val = (2.0 * PI * freq * t).sin();
        if decay {
            val *= 1.0 - t / duration;
        }
        samples.push(val * 0.5);
    }
    samples
}

/// Square tone at `freq` Hz, amplitude 0.5 — the sign of a sine
/// oscillator, so every sample is exactly ±0.5 before decay.
pub fn square_wave(freq: f64, duration: f64, decay: bool) -> Vec<f64> {
    let n = num_samples(duration);
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / SAMPLE_RATE as f64;
        let mut val = if (2.0 * PI * freq * t).sin() > 0.0 {
            1.0
        } else {
            -1.0
        };
        if decay {
            val *= 1.0 - t / duration;
        }
        samples.push(val * 0.5);
    }
    samples
}

/// Uniform white noise, amplitude 0.5, with an optional decay envelope.
///
/// The RNG is passed in so callers can seed it: the driver uses an
/// entropy-seeded generator, tests a fixed one.
pub fn white_noise<R: Rng>(duration: f64, decay: bool, rng: &mut R) -> Vec<f64> {
    let n = num_samples(duration);
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let mut val: f64 = rng.random_range(-1.0..=1.0);
        if decay {
            val *= 1.0 - i as f64 / n as f64;
        }
        samples.push(val * 0.5);
    }
    samples
}

/// Square-wave frequency sweep from `start_freq` to `end_freq` Hz,
/// amplitude 0.3.
///
/// The per-sample frequency is linearly interpolated over the sweep and
/// integrated through a phase accumulator (`phase += freq / rate`). An
/// instantaneous `sin(2π · f(t) · t)` formulation would produce phase
/// jumps and audible aliasing at fast sweep rates.
pub fn laser_sweep(start_freq: f64, end_freq: f64, duration: f64) -> Vec<f64> {
    let n = num_samples(duration);
    let mut samples = Vec::with_capacity(n);
    let mut phase = 0.0_f64;
    for i in 0..n {
        let progress = i as f64 / n as f64;
        let freq = start_freq + (end_freq - start_freq) * progress;
        phase += freq / SAMPLE_RATE as f64;
        let val = if (2.0 * PI * phase).sin() > 0.0 {
            1.0
        } else {
            -1.0
        };
        samples.push(val * 0.3);
    }
    samples
}

/// Low sawtooth rumble at `freq` Hz, amplitude 0.3, no decay — meant to
/// loop.
///
/// The phase accumulator wraps by subtracting 1.0 rather than resetting
/// to zero, so the fractional carry keeps the ramp continuous across
/// cycles.
pub fn engine_rumble(freq: f64, duration: f64) -> Vec<f64> {
    let n = num_samples(duration);
    let mut samples = Vec::with_capacity(n);
    let mut phase = 0.0_f64;
    for _ in 0..n {
        phase += freq / SAMPLE_RATE as f64;
        if phase > 1.0 {
            phase -= 1.0;
        }
        samples.push((phase * 2.0 - 1.0) * 0.3);
    }
    samples
}
