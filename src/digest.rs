//! Message digest engine: one-shot, streaming, and the `Digest` value.

use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::str::FromStr;

use crate::block::{hash_block, SUB_BLOCK_SIZE};
use crate::error::SynHashError;
use crate::xorshift::Xorshift128X;

/// Bytes consumed per compression step (four sub-blocks).
pub const BLOCK_SIZE: usize = SUB_BLOCK_SIZE * 4;
/// Digest width in bytes.
pub const DIGEST_SIZE: usize = 32;
/// Digest width in hex characters.
pub const HEX_LEN: usize = DIGEST_SIZE * 2;

/// A 256-bit SynHash value, stored as four 64-bit lanes.
///
/// Renders lane 3 first and lane 0 last, each as 16 lowercase hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digest {
    lanes: [u64; 4],
}

impl Digest {
    pub const fn from_lanes(lanes: [u64; 4]) -> Self {
        Self { lanes }
    }

    pub const fn lanes(&self) -> [u64; 4] {
        self.lanes
    }

    /// Big-endian bytes in rendering order.
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        out[0..8].copy_from_slice(&self.lanes[3].to_be_bytes());
        out[8..16].copy_from_slice(&self.lanes[2].to_be_bytes());
        out[16..24].copy_from_slice(&self.lanes[1].to_be_bytes());
        out[24..32].copy_from_slice(&self.lanes[0].to_be_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; DIGEST_SIZE]) -> Self {
        let lane = |i: usize| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
            u64::from_be_bytes(word)
        };
        Self::from_lanes([lane(3), lane(2), lane(1), lane(0)])
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Strict parse: exactly 64 hex digits, nothing else.
impl FromStr for Digest {
    type Err = SynHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }
}

/// Hash one 32-byte block into the lanes.
///
/// Sub-blocks are hashed forward (0, 8, 16, 24) and then again in reverse
/// (24, 16, 8, 0). The generator keeps running across all eight calls.
#[inline]
fn compress_block(state: &mut Xorshift128X, lanes: &mut [u64; 4], block: &[u8; BLOCK_SIZE]) {
    let h0 = hash_block(state, &block[0..8]);
    let h1 = hash_block(state, &block[8..16]);
    let h2 = hash_block(state, &block[16..24]);
    let h3 = hash_block(state, &block[24..32]);

    let h4 = hash_block(state, &block[24..32]);
    let h5 = hash_block(state, &block[16..24]);
    let h6 = hash_block(state, &block[8..16]);
    let h7 = hash_block(state, &block[0..8]);

    lanes[0] ^= h0 ^ h4;
    lanes[1] ^= h1 ^ h5;
    lanes[2] ^= h2 ^ h6;
    lanes[3] ^= h3 ^ h7;
}

/// One-shot digest. An empty message hashes as a single all-zero block.
pub fn digest(data: &[u8]) -> Digest {
    let mut state = Xorshift128X::new();
    let mut lanes = [0u64; 4];

    let num_blocks = data.len().div_ceil(BLOCK_SIZE).max(1);
    for i in 0..num_blocks {
        let start = i * BLOCK_SIZE;
        let end = (start + BLOCK_SIZE).min(data.len());

        let mut block = [0u8; BLOCK_SIZE];
        block[..end - start].copy_from_slice(&data[start..end]);
        compress_block(&mut state, &mut lanes, &block);
    }

    Digest::from_lanes(lanes)
}

/// One-shot digest rendered as 64 lowercase hex characters.
pub fn hash_hex(data: &[u8]) -> String {
    digest(data).to_hex()
}

/// Streaming API, equivalent to `digest` over the concatenated input.
#[derive(Clone, Debug)]
pub struct SynHasher {
    state: Xorshift128X,
    lanes: [u64; 4],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    blocks: u64,
}

impl SynHasher {
    pub fn new() -> Self {
        Self {
            state: Xorshift128X::new(),
            lanes: [0u64; 4],
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            blocks: 0,
        }
    }

    fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress_block(&mut self.state, &mut self.lanes, block);
        self.blocks += 1;
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.compress(&block);
            self.buffer_len = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.compress(&block);
        }

        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    pub fn finalize(mut self) -> Digest {
        if self.buffer_len > 0 || self.blocks == 0 {
            let mut block = [0u8; BLOCK_SIZE];
            block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            self.compress(&block);
        }
        Digest::from_lanes(self.lanes)
    }
}

impl Default for SynHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// `finish` reports lane 0 of the digest so far without consuming the hasher.
impl Hasher for SynHasher {
    fn finish(&self) -> u64 {
        self.clone().finalize().lanes[0]
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// Builds `SynHasher`s for `HashMap`/`HashSet` keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct SynBuildHasher;

impl BuildHasher for SynBuildHasher {
    type Hasher = SynHasher;

    fn build_hasher(&self) -> SynHasher {
        SynHasher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_deterministic() {
        let data = b"Hello, SynHash!";
        assert_eq!(digest(data), digest(data));
    }

    #[test]
    fn test_empty_matches_zero_block() {
        assert_eq!(digest(b""), digest(&[0u8; BLOCK_SIZE]));
    }

    #[test]
    fn test_trailing_zeros_within_block_are_absorbed() {
        // Padding is implicit, so zeros up to the block boundary do not change the value
        assert_eq!(digest(b"abc"), digest(b"abc\0\0\0"));
        assert_ne!(digest(&[0u8; BLOCK_SIZE]), digest(&[0u8; BLOCK_SIZE + 1]));
    }

    #[test]
    fn test_hex_shape() {
        let hex = hash_hex(b"a");
        assert_eq!(hex.len(), HEX_LEN);
        assert!(hex.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn test_render_order() {
        let d = Digest::from_lanes([0, 1, 2, 0xdeadbeef]);
        assert_eq!(
            d.to_string(),
            "00000000deadbeef000000000000000200000000000000010000000000000000"
        );
        assert_eq!(format!("{d:x}"), d.to_string());
    }

    #[test]
    fn test_parse_roundtrip_and_uppercase() {
        let d = digest(b"round trip");
        assert_eq!(d.to_hex().parse::<Digest>(), Ok(d));
        assert_eq!(d.to_hex().to_uppercase().parse::<Digest>(), Ok(d));
        assert_eq!(Digest::from_bytes(&d.to_bytes()), d);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let good = hash_hex(b"x");
        assert!(matches!(
            "short".parse::<Digest>(),
            Err(SynHashError::InvalidDigestFormat(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            good[..62].parse::<Digest>(),
            Err(SynHashError::InvalidDigestFormat(hex::FromHexError::InvalidStringLength))
        ));
        assert!(format!("{good}00").parse::<Digest>().is_err());

        let bad = format!("g{}", &good[1..]);
        assert!(matches!(
            bad.parse::<Digest>(),
            Err(SynHashError::InvalidDigestFormat(
                hex::FromHexError::InvalidHexCharacter { c: 'g', index: 0 }
            ))
        ));
        assert!(format!("0x{}", &good[2..]).parse::<Digest>().is_err());
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let data = b"The quick brown fox jumps over the lazy dog, twice over the lazy dog";
        let oneshot = digest(data);

        let mut streaming = SynHasher::new();
        streaming.update(&data[..10]);
        streaming.update(&data[10..32]);
        streaming.update(&data[32..33]);
        streaming.update(&data[33..]);
        assert_eq!(streaming.finalize(), oneshot);
    }

    #[test]
    fn test_streaming_block_boundaries() {
        for len in [0usize, 1, 31, 32, 33, 64, 65] {
            let data: Vec<u8> = (0..len as u8).collect();
            let mut h = SynHasher::new();
            h.update(&data);
            assert_eq!(h.finalize(), digest(&data), "len {len}");
        }
    }

    #[test]
    fn test_hasher_finish_is_non_consuming() {
        let mut h = SynHasher::new();
        h.write(b"key");
        let first = h.finish();
        assert_eq!(first, h.finish());
        assert_eq!(first, digest(b"key").lanes()[0]);
    }

    #[test]
    fn test_build_hasher_in_map() {
        let mut map: HashMap<&str, u32, SynBuildHasher> = HashMap::default();
        map.insert("one", 1);
        map.insert("two", 2);
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), Some(&2));
    }
}
