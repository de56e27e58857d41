//! Effect recipes — the declarative table of game sounds.
//!
//! Each effect is data: a name, an output file name, and a list of
//! voice descriptors folded with a combinator. Building a recipe into
//! samples is pure (apart from the RNG draws made by noise voices);
//! writing the result to disk lives in the driver.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dsp::{mixer, oscillator};

/// A single generator call within a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Voice {
    /// Sine tone, amplitude 0.5, optional linear decay.
    Sine { freq: f64, duration: f64, decay: bool },
    /// Square tone, amplitude 0.5, optional linear decay.
    Square { freq: f64, duration: f64, decay: bool },
    /// White-noise burst, amplitude 0.5, optional index-fraction decay.
    Noise { duration: f64, decay: bool },
    /// Square-wave frequency sweep, amplitude 0.3.
    Sweep {
        start_freq: f64,
        end_freq: f64,
        duration: f64,
    },
    /// Sawtooth rumble, amplitude 0.3, no decay.
    Sawtooth { freq: f64, duration: f64 },
}

/// How a recipe's voices are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// Back-to-back in time (melodic phrase).
    Sequence,
    /// Summed sample-wise, zero-padded to the longest voice (chord).
    Overlay,
}

/// One named effect: where it goes and how to synthesize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    pub name: String,
    pub file_name: String,
    pub combine: Combine,
    pub voices: Vec<Voice>,
}

fn render_voice<R: Rng>(voice: &Voice, rng: &mut R) -> Vec<f64> {
    match *voice {
        Voice::Sine {
            freq,
            duration,
            decay,
        } => oscillator::sine_wave(freq, duration, decay),
        Voice::Square {
            freq,
            duration,
            decay,
        } => oscillator::square_wave(freq, duration, decay),
        Voice::Noise { duration, decay } => oscillator::white_noise(duration, decay, rng),
        Voice::Sweep {
            start_freq,
            end_freq,
            duration,
        } => oscillator::laser_sweep(start_freq, end_freq, duration),
        Voice::Sawtooth { freq, duration } => oscillator::engine_rumble(freq, duration),
    }
}

/// Build the complete sample sequence for one effect.
pub fn build<R: Rng>(spec: &SoundSpec, rng: &mut R) -> Vec<f64> {
    let parts: Vec<Vec<f64>> = spec.voices.iter().map(|v| render_voice(v, rng)).collect();
    match spec.combine {
        Combine::Sequence => {
            let refs: Vec<&[f64]> = parts.iter().map(Vec::as_slice).collect();
            mixer::sequence(&refs)
        }
        Combine::Overlay => parts
            .into_iter()
            .fold(Vec::new(), |acc, part| mixer::overlay(&acc, &part)),
    }
}

fn spec(name: &str, file_name: &str, combine: Combine, voices: Vec<Voice>) -> SoundSpec {
    SoundSpec {
        name: name.into(),
        file_name: file_name.into(),
        combine,
        voices,
    }
}

/// The full effect library: ten game sounds, in generation order.
pub fn library() -> Vec<SoundSpec> {
    use Combine::Sequence;
    use Voice::{Noise, Sawtooth, Sine, Square, Sweep};

    vec![
        // High-pitched double ping: A5 then A6.
        spec(
            "repair",
            "repair.wav",
            Sequence,
            vec![
                Sine {
                    freq: 880.0,
                    duration: 0.1,
                    decay: true,
                },
                Sine {
                    freq: 1760.0,
                    duration: 0.2,
                    decay: true,
                },
            ],
        ),
        // Short noise burst.
        spec(
            "enemy_killed",
            "enemy_killed.wav",
            Sequence,
            vec![Noise {
                duration: 0.15,
                decay: true,
            }],
        ),
        // Low crunch.
        spec(
            "damage",
            "damage.wav",
            Sequence,
            vec![Square {
                freq: 100.0,
                duration: 0.2,
                decay: true,
            }],
        ),
        // Longer noise decay.
        spec(
            "explosion",
            "explosion.wav",
            Sequence,
            vec![Noise {
                duration: 0.5,
                decay: true,
            }],
        ),
        // Fast downward sweep.
        spec(
            "laser",
            "laser.wav",
            Sequence,
            vec![Sweep {
                start_freq: 800.0,
                end_freq: 200.0,
                duration: 0.15,
            }],
        ),
        // Happy chime: C5-E5-G5 major triad, played as a run.
        spec(
            "pickup",
            "pickup.wav",
            Sequence,
            vec![
                Sine {
                    freq: 523.25,
                    duration: 0.1,
                    decay: true,
                },
                Sine {
                    freq: 659.25,
                    duration: 0.1,
                    decay: true,
                },
                Sine {
                    freq: 783.99,
                    duration: 0.15,
                    decay: true,
                },
            ],
        ),
        // Very short high pip.
        spec(
            "click",
            "click.wav",
            Sequence,
            vec![Sine {
                freq: 2000.0,
                duration: 0.05,
                decay: true,
            }],
        ),
        // Low rumble loop.
        spec(
            "engine",
            "engine.wav",
            Sequence,
            vec![Sawtooth {
                freq: 60.0,
                duration: 2.0,
            }],
        ),
        // Fanfare: C4-E4-G4, then a long C5.
        spec(
            "victory",
            "victory.wav",
            Sequence,
            vec![
                Square {
                    freq: 261.63,
                    duration: 0.15,
                    decay: true,
                },
                Square {
                    freq: 329.63,
                    duration: 0.15,
                    decay: true,
                },
                Square {
                    freq: 392.00,
                    duration: 0.15,
                    decay: true,
                },
                Square {
                    freq: 523.25,
                    duration: 0.6,
                    decay: true,
                },
            ],
        ),
        // Sad descending cadence: G4, Eb4, long C4.
        spec(
            "gameover",
            "gameover.wav",
            Sequence,
            vec![
                Square {
                    freq: 392.00,
                    duration: 0.3,
                    decay: true,
                },
                Square {
                    freq: 311.13,
                    duration: 0.3,
                    decay: true,
                },
                Square {
                    freq: 261.63,
                    duration: 0.8,
                    decay: true,
                },
            ],
        ),
    ]
}
