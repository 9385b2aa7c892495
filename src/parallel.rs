//! Batch hashing on the rayon pool.
//!
//! Every digest owns its generator state, so messages fan out with no
//! coordination between workers.

use rayon::prelude::*;
use tracing::debug;

use crate::digest::{digest, Digest};

/// Digest each message independently. Output order follows input order.
pub fn digest_many(messages: &[&[u8]]) -> Vec<Digest> {
    debug!(count = messages.len(), "digesting batch");
    messages.par_iter().map(|m| digest(m)).collect()
}

/// Pairwise Hamming distances, one row per task.
pub fn distance_matrix(digests: &[Digest]) -> Vec<Vec<u32>> {
    debug!(count = digests.len(), "building distance matrix");
    digests
        .par_iter()
        .map(|a| digests.iter().map(|b| a.hamming_distance(b)).collect())
        .collect()
}
