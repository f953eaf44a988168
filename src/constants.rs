//! Snapshot capture constants

/// Receiver sampling rate [Hz]
pub const SAMPLE_RATE_HZ: f64 = 4.092E6;

/// Duration of a single snapshot [s]
pub const SNAPSHOT_DURATION_S: f64 = 12.0E-3;

/// Number of (1 bit) samples per snapshot
pub const SAMPLES_PER_SNAPSHOT: usize = 49_104;

/// Size of a raw snapshot file, in bytes. Samples are packed 8 per byte.
pub const BYTES_PER_SNAPSHOT: usize = SAMPLES_PER_SNAPSHOT.div_ceil(8);

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn snapshot_dimensions() {
        let samples = (SAMPLE_RATE_HZ * SNAPSHOT_DURATION_S).round() as usize;
        assert_eq!(samples, SAMPLES_PER_SNAPSHOT);
        assert_eq!(BYTES_PER_SNAPSHOT, 6138);
        assert_eq!(BYTES_PER_SNAPSHOT * 8, SAMPLES_PER_SNAPSHOT);
    }
}
