//! Monte Carlo drivers.
//!
//! # Architecture
//!
//! ```text
//! RiskSimulator
//! ├── SimulationConfig   (validated, immutable)
//! ├── FactorSampler × 3  (resolved once)
//! └── Execution
//!     ├── run()           one EngineRng, TEF → Vuln → PLM
//!     └── run_parallel()  one EngineRng per chunk, rayon
//! ```

mod parallel;
mod simulator;

pub use parallel::{ParallelConfig, DEFAULT_CHUNK_SIZE, DEFAULT_PARALLEL_THRESHOLD};
pub use simulator::RiskSimulator;
