//! Chunk-parallel Monte Carlo execution on the rayon pool.
//!
//! The iteration count is split into consecutive chunks of
//! [`ParallelConfig::chunk_size`] samples. Chunk `k` draws from its own
//! [`EngineRng`] seeded with [`derive_chunk_seed`]`(seed, k)` and chunks are
//! concatenated in chunk order, so the output depends on the chunk size but
//! not on the number of worker threads.

use rayon::prelude::*;
use tracing::info;

use super::simulator::RiskSimulator;
use crate::error::SimulationError;
use crate::rng::{derive_chunk_seed, EngineRng};
use crate::vectors::SampleVectors;

/// Samples per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 8_192;

/// Iteration count from which chunked execution is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 20_000;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Samples per chunk
    pub chunk_size: usize,
    /// Minimum iteration count before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(chunk_size: usize, parallel_threshold: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            parallel_threshold,
        }
    }

    /// Returns whether to use parallel processing for the given iteration count.
    #[inline]
    pub fn should_parallelize(&self, iterations: usize) -> bool {
        iterations >= self.parallel_threshold
    }

    /// Number of chunks `iterations` is split into.
    #[inline]
    pub fn chunk_count(&self, iterations: usize) -> usize {
        iterations.div_ceil(self.chunk_size.max(1))
    }
}

pub(super) fn run_chunked(
    simulator: &RiskSimulator,
    parallel: &ParallelConfig,
) -> Result<SampleVectors, SimulationError> {
    let n = simulator.config().iterations();
    let seed = simulator.config().seed();
    let chunk_size = parallel.chunk_size.max(1);
    let chunks = parallel.chunk_count(n);

    info!(
        iterations = n,
        seed,
        chunk_size,
        chunks,
        "Starting chunk-parallel simulation"
    );

    let blocks = (0..chunks)
        .into_par_iter()
        .map(|k| {
            let len = chunk_size.min(n - k * chunk_size);
            let mut rng = EngineRng::from_seed(derive_chunk_seed(seed, k as u64));
            simulator.sample_block(len, &mut rng)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut vectors = SampleVectors::with_capacity(n);
    for block in blocks {
        vectors.append(block);
    }

    info!(
        iterations = vectors.len(),
        non_finite = vectors.non_finite_ale_count(),
        "Chunk-parallel simulation complete"
    );
    Ok(vectors)
}
