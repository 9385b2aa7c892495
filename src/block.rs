//! Per-sub-block hashing.

use crate::xorshift::Xorshift128X;

/// Sub-block width in bytes.
pub const SUB_BLOCK_SIZE: usize = 8;

/// Fold `bytes` through the generator forward, then backward.
///
/// Both passes advance `state`, so the backward pass never replays the
/// forward outputs. No padding is applied: a short slice is hashed as-is.
#[inline]
pub fn hash_block(state: &mut Xorshift128X, bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= SUB_BLOCK_SIZE);

    let mut acc = 0u64;
    for &b in bytes {
        acc ^= state.mix(b as u64);
    }
    for &b in bytes.iter().rev() {
        acc ^= state.mix(b as u64);
    }
    acc
}
