//! DSP primitives — waveform generators, sequence combinators, and the
//! WAV renderer.
//!
//! All synthesis here is offline and batch: a generator returns the
//! complete sample buffer for an effect in one call, at the fixed
//! 44.1 kHz output rate. The sounds are a couple of seconds at most, so
//! there is no streaming path and no per-sample state carried between
//! calls.

pub mod mixer;
pub mod oscillator;
pub mod renderer;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples covering `duration` seconds at [`SAMPLE_RATE`].
///
/// Non-positive durations yield zero samples; degenerate parameters
/// produce silence, not errors.
pub(crate) fn num_samples(duration: f64) -> usize {
    if duration <= 0.0 {
        return 0;
    }
    (duration * SAMPLE_RATE as f64).round() as usize
}
