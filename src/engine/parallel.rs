//! Chunked parallel sweeps on the rayon thread pool.
//!
//! Trials are split into fixed-size chunks. Chunk `i` draws from
//! `rng.stream(i)`, so a chunk's outcome depends only on the seed and its
//! index, never on which worker ran it. Partial win counts are summed at the
//! end; workers share no mutable state.

use rayon::prelude::*;
use tracing::{debug, instrument};

use super::trial::run_trial;
use crate::core::{SimRng, Strategy};

/// Count wins for `trials` games under `strategy`, spread across threads.
///
/// `chunk_size` of zero is treated as one.
#[instrument(skip(rng), fields(seed = rng.seed()))]
pub fn run_simulation_parallel(
    trials: u64,
    strategy: Strategy,
    rng: &SimRng,
    chunk_size: u64,
) -> u64 {
    let chunk_size = chunk_size.max(1);
    let chunks = trials.div_ceil(chunk_size);
    debug!(chunks, "dispatching chunks");

    (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * chunk_size;
            let len = chunk_size.min(trials - start);
            let mut stream = rng.stream(chunk);
            (0..len)
                .filter(|_| run_trial(strategy, &mut stream))
                .fold(0u64, |n, _| n + 1)
        })
        .sum()
}
