//! Raw snapshot decoding
use bitvec::prelude::*;

use crate::{
    constants::{BYTES_PER_SNAPSHOT, SAMPLES_PER_SNAPSHOT},
    error::Error,
};

/// Decoded snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// Raw samples, each one of {-1, +1}
    Bipolar(Vec<i8>),
    /// DC free samples (mean removed)
    Normalized(Vec<f64>),
}

impl Samples {
    /// Number of samples, always [SAMPLES_PER_SNAPSHOT] for a decoded snapshot
    pub fn len(&self) -> usize {
        match self {
            Self::Bipolar(s) => s.len(),
            Self::Normalized(s) => s.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized(_))
    }
    /// Returns raw {-1, +1} samples, if not normalized
    pub fn as_bipolar(&self) -> Option<&[i8]> {
        match self {
            Self::Bipolar(s) => Some(s),
            Self::Normalized(_) => None,
        }
    }
    /// Returns DC free samples, if normalized
    pub fn as_normalized(&self) -> Option<&[f64]> {
        match self {
            Self::Bipolar(_) => None,
            Self::Normalized(s) => Some(s),
        }
    }
    /// Returns sample at index, in floating point domain
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Self::Bipolar(s) => s.get(index).map(|s| *s as f64),
            Self::Normalized(s) => s.get(index).copied(),
        }
    }
    /// Iterates samples, in floating point domain
    pub fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Self::Bipolar(s) => Box::new(s.iter().map(|s| *s as f64)),
            Self::Normalized(s) => Box::new(s.iter().copied()),
        }
    }
    /// Arithmetic mean. Null for an empty sequence.
    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum = match self {
            Self::Bipolar(s) => s.iter().map(|s| *s as i64).sum::<i64>() as f64,
            Self::Normalized(s) => s.iter().sum::<f64>(),
        };
        sum / self.len() as f64
    }
    /// Removes the DC component. Sample count is preserved.
    pub fn normalized(self) -> Self {
        let mean = self.mean();
        match self {
            Self::Bipolar(s) => Self::Normalized(s.iter().map(|s| *s as f64 - mean).collect()),
            Self::Normalized(s) => Self::Normalized(s.iter().map(|s| s - mean).collect()),
        }
    }
}

/// Bit to antipodal sample: 0 is +1, 1 is -1
fn bipolar(bit: bool) -> i8 {
    -2 * (bit as i8) + 1
}

/// Decodes a raw snapshot.
/// Each byte packs 8 samples, least significant bit first.
/// Only the first [BYTES_PER_SNAPSHOT] bytes are decoded; a shorter
/// buffer is rejected with [Error::TruncatedInput].
/// When `normalize` is requested, the mean of the snapshot is removed.
pub fn decode(buffer: &[u8], normalize: bool) -> Result<Samples, Error> {
    let bytes = buffer
        .get(..BYTES_PER_SNAPSHOT)
        .ok_or(Error::TruncatedInput {
            expected: BYTES_PER_SNAPSHOT,
            found: buffer.len(),
        })?;

    let mut samples = Vec::<i8>::with_capacity(SAMPLES_PER_SNAPSHOT);
    samples.extend(bytes.view_bits::<Lsb0>().iter().by_vals().map(bipolar));

    let samples = Samples::Bipolar(samples);
    if normalize {
        Ok(samples.normalized())
    } else {
        Ok(samples)
    }
}
