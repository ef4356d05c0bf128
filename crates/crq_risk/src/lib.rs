//! # crq_risk: Loss Analytics (Layer 3)
//!
//! Reduces the sample vectors of a run to the figures a risk report needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              crq_risk (L3)              │
//! ├─────────────────────────────────────────┤
//! │  statistics/     - mean, std, VaR,      │
//! │                    percentiles          │
//! │  exceedance/     - empirical CCDF       │
//! │  classification/ - Low … Critical       │
//! │  export/         - CSV record layouts   │
//! │  result/         - RunResult            │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             crq_engine (L2)             │
//! │  Samplers, risk pipeline, MC drivers    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use crq_core::{FactorSpec, SimulationConfig};
//! use crq_risk::{run_simulation, RiskLevel};
//!
//! let config = SimulationConfig::builder()
//!     .tef(FactorSpec::point(4.0))
//!     .vulnerability(FactorSpec::point(0.25))
//!     .primary_loss(FactorSpec::point(10_000.0))
//!     .slm_factor(0.0)
//!     .iterations(10)
//!     .build()
//!     .unwrap();
//!
//! let result = run_simulation(&config).unwrap();
//! assert_eq!(result.statistics().mean, 10_000.0);
//! assert_eq!(result.risk_level(), RiskLevel::Low);
//! ```

#![deny(missing_docs)]

pub mod classification;
pub mod error;
pub mod exceedance;
pub mod export;
pub mod result;
pub mod statistics;

pub use classification::RiskLevel;
pub use error::RiskError;
pub use exceedance::ExceedanceCurve;
pub use export::{SampleRecord, SummaryRecord, SAMPLE_COLUMNS};
pub use result::{run_simulation, run_simulation_parallel, RunResult};
pub use statistics::{ComponentMeans, SummaryStatistics};
