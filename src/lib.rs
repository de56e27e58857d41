//! sfxgen — procedural retro game sound effects.
//!
//! Synthesizes a fixed library of short effects (pings, noise bursts,
//! frequency sweeps, fanfares) and writes each one as a mono 16-bit PCM
//! WAV file at 44.1 kHz. This is a one-shot content-build tool: the
//! `sfxgen` binary renders every effect in [`effects::library`] into
//! `assets/sounds/` and exits.
//!
//! Synthesis ([`effects::build`]) is pure and keeps no state between
//! effects; all file I/O lives in the driver and the WAV renderer.

pub mod dsp;
pub mod effects;
pub mod error;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
