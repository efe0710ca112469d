//! Raw PCM decoding: the speech service returns mono 16-bit little-endian
//! samples at 24 kHz, not a container format.

/// Sample rate of the synthesized audio, in Hz.
pub const SAMPLE_RATE: u32 = 24_000;

/// Reinterpret raw bytes as LE i16 samples and convert each to a float
/// amplitude in [-1.0, 1.0] via division by 32768.0. An odd trailing byte
/// is an incomplete sample and is dropped.
pub fn pcm16le_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_zero_and_full_scale_negative() {
        // Two LE samples: 0 and -32768.
        let bytes = [0x00, 0x00, 0x00, 0x80];
        assert_eq!(pcm16le_to_f32(&bytes), vec![0.0, -1.0]);
    }

    #[test]
    fn every_sample_maps_to_its_amplitude() {
        let samples: [i16; 6] = [0, 1, -1, 12_345, i16::MAX, i16::MIN];
        let mut bytes = Vec::new();
        for s in samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        let decoded = pcm16le_to_f32(&bytes);
        assert_eq!(decoded.len(), samples.len());
        for (value, sample) in decoded.iter().zip(samples) {
            assert_eq!(*value, sample as f32 / 32768.0);
        }
        // Positive full scale stays strictly below 1.0.
        assert!(decoded[4] < 1.0);
    }

    #[test]
    fn odd_trailing_byte_is_dropped() {
        let bytes = [0x01, 0x00, 0xff];
        assert_eq!(pcm16le_to_f32(&bytes), vec![1.0 / 32768.0]);
    }

    #[test]
    fn empty_payload_decodes_to_no_samples() {
        assert!(pcm16le_to_f32(&[]).is_empty());
    }
}
