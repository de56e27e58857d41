//! WAV renderer — encodes sample buffers to mono 16-bit PCM and writes
//! them to disk.

use std::fs;
use std::path::Path;

use crate::error::SfxError;

use super::SAMPLE_RATE;

/// Convert normalized samples to 16-bit PCM.
///
/// Each sample is clamped to [-1, 1], scaled by 32767, and truncated
/// toward zero — so -1.0 encodes as -32767, never -32768.
fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0) as i16)
        .collect()
}

/// Encode samples as a mono 16-bit little-endian PCM WAV byte buffer
/// at [`SAMPLE_RATE`].
pub fn encode_wav(samples: &[f64]) -> Vec<u8> {
    let pcm = to_pcm_i16(samples);

    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = SAMPLE_RATE * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (pcm.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in &pcm {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}

/// Encode `samples` and write the WAV file at `path`, overwriting any
/// existing file.
pub fn write_wav(samples: &[f64], path: &Path) -> Result<(), SfxError> {
    fs::write(path, encode_wav(samples)).map_err(|source| SfxError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_wav(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sfxgen_{}_{name}.wav", std::process::id()))
    }

    #[test]
    fn wav_header_valid() {
        let wav = encode_wav(&vec![0.0; 100]);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        let sr = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(sr, 44100);

        let ch = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(ch, 1);

        let bits = u16::from_le_bytes([wav[34], wav[35]]);
        assert_eq!(bits, 16);
    }

    #[test]
    fn wav_size_correct() {
        // 100 mono samples * 2 bytes = 200 data bytes.
        let wav = encode_wav(&vec![0.0; 100]);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 200);
        assert_eq!(wav.len(), 44 + 200);
    }

    #[test]
    fn pcm_conversion_at_boundaries() {
        let pcm = to_pcm_i16(&[0.0, 1.0, -1.0, 0.5, -0.5]);
        assert_eq!(pcm[0], 0);
        assert_eq!(pcm[1], 32767);
        assert_eq!(pcm[2], -32767); // truncation toward zero, not -32768
        assert_eq!(pcm[3], 16383);
        assert_eq!(pcm[4], -16383);
    }

    #[test]
    fn pcm_conversion_clamps_out_of_range() {
        let pcm = to_pcm_i16(&[2.0, -2.0]);
        assert_eq!(pcm[0], 32767);
        assert_eq!(pcm[1], -32767);
    }

    #[test]
    fn round_trip_through_hound() {
        let path = temp_wav("round_trip");
        write_wav(&[0.0, 1.0, -1.0], &path).expect("write failed");

        let mut reader = hound::WavReader::open(&path).expect("open failed");
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let decoded: Vec<i16> = reader
            .samples::<i16>()
            .map(|s| s.expect("bad sample"))
            .collect();
        assert_eq!(decoded, vec![0, 32767, -32767]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn write_overwrites_existing_file() {
        let path = temp_wav("overwrite");
        write_wav(&vec![0.0; 1000], &path).expect("first write failed");
        write_wav(&[0.5], &path).expect("second write failed");

        let mut reader = hound::WavReader::open(&path).expect("open failed");
        assert_eq!(reader.duration(), 1, "old data should be gone");
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, vec![16383]);

        std::fs::remove_file(&path).ok();
    }
}
