//! SynHash - 256-bit fingerprint built on an Xorshift128X mixer
//! **WARNING: NOT CRYPTOGRAPHICALLY SECURE**
//!
//! Digests are deterministic fingerprints intended for similarity checks
//! via Hamming distance. No collision or preimage resistance is claimed.
//!
//! ```
//! let a = synhash::hash_hex(b"hello, world 1");
//! let b = synhash::hash_hex(b"hello, world 2");
//! assert_eq!(a.len(), 64);
//! assert_eq!(synhash::hamming_distance(&a, &b).unwrap(), 118);
//! ```

pub mod block;
pub mod digest;
pub mod distance;
pub mod error;
pub mod parallel;
pub mod xorshift;

pub use digest::{
    digest, hash_hex, Digest, SynBuildHasher, SynHasher, BLOCK_SIZE, DIGEST_SIZE, HEX_LEN,
};
pub use distance::hamming_distance;
pub use error::{Result, SynHashError};
pub use parallel::{digest_many, distance_matrix};
pub use xorshift::Xorshift128X;
