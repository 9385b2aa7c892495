//! Hamming distance between digests.

use crate::digest::Digest;
use crate::error::Result;

impl Digest {
    /// Number of differing bits, in `0..=256`.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.lanes()
            .iter()
            .zip(other.lanes().iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

/// Hamming distance between two hex-rendered digests.
///
/// Both arguments must be exactly 64 hex characters; anything else fails
/// with `InvalidDigestFormat`.
pub fn hamming_distance(a: &str, b: &str) -> Result<u32> {
    let a: Digest = a.parse()?;
    let b: Digest = b.parse()?;
    Ok(a.hamming_distance(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::hash_hex;
    use crate::error::SynHashError;

    const ZERO: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const ONES: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    #[test]
    fn test_extremes() {
        assert_eq!(hamming_distance(ZERO, ZERO), Ok(0));
        assert_eq!(hamming_distance(ZERO, ONES), Ok(256));
    }

    #[test]
    fn test_single_bit_per_lane() {
        let b = "0000000000000001800000000000000000000000000000010000000000000100";
        assert_eq!(hamming_distance(ZERO, b), Ok(4));
    }

    #[test]
    fn test_identity_and_symmetry() {
        let a = hash_hex(b"left");
        let b = hash_hex(b"right");
        assert_eq!(hamming_distance(&a, &a), Ok(0));
        assert_eq!(hamming_distance(&a, &b), hamming_distance(&b, &a));
    }

    #[test]
    fn test_malformed_either_side() {
        assert!(matches!(
            hamming_distance("short", ZERO),
            Err(SynHashError::InvalidDigestFormat(_))
        ));
        assert!(matches!(
            hamming_distance(ZERO, "short"),
            Err(SynHashError::InvalidDigestFormat(_))
        ));
        let bad = format!("{}z", &ZERO[1..]);
        assert!(hamming_distance(ZERO, &bad).is_err());
    }
}
