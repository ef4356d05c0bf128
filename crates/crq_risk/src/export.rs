//! Tabular export records.
//!
//! The engine performs no I/O; these records fix the column names and
//! order consumed by downstream CSV readers. Writing them is left to the
//! caller.

use crq_engine::SampleVectors;

use crate::classification::RiskLevel;
use crate::statistics::SummaryStatistics;

/// Sample export columns, in order.
pub const SAMPLE_COLUMNS: [&str; 7] = [
    "ALE",
    "LEF",
    "TEF",
    "Vulnerability",
    "Loss_Magnitude",
    "Primary_Loss",
    "Secondary_Loss",
];

/// One simulated year, in export column order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleRecord {
    /// Annual Loss Exposure.
    #[cfg_attr(feature = "serde", serde(rename = "ALE"))]
    pub ale: f64,
    /// Loss Event Frequency.
    #[cfg_attr(feature = "serde", serde(rename = "LEF"))]
    pub lef: f64,
    /// Threat Event Frequency.
    #[cfg_attr(feature = "serde", serde(rename = "TEF"))]
    pub tef: f64,
    /// Vulnerability.
    #[cfg_attr(feature = "serde", serde(rename = "Vulnerability"))]
    pub vulnerability: f64,
    /// Total Loss Magnitude.
    #[cfg_attr(feature = "serde", serde(rename = "Loss_Magnitude"))]
    pub loss_magnitude: f64,
    /// Primary Loss Magnitude.
    #[cfg_attr(feature = "serde", serde(rename = "Primary_Loss"))]
    pub primary_loss: f64,
    /// Secondary Loss Magnitude.
    #[cfg_attr(feature = "serde", serde(rename = "Secondary_Loss"))]
    pub secondary_loss: f64,
}

impl SampleRecord {
    /// Field values in [`SAMPLE_COLUMNS`] order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.ale,
            self.lef,
            self.tef,
            self.vulnerability,
            self.loss_magnitude,
            self.primary_loss,
            self.secondary_loss,
        ]
    }
}

/// One record per sample, in sample order.
pub fn sample_records(vectors: &SampleVectors) -> impl Iterator<Item = SampleRecord> + '_ {
    (0..vectors.len()).map(move |i| SampleRecord {
        ale: vectors.ale()[i],
        lef: vectors.lef()[i],
        tef: vectors.tef()[i],
        vulnerability: vectors.vulnerability()[i],
        loss_magnitude: vectors.loss_magnitude()[i],
        primary_loss: vectors.primary_loss()[i],
        secondary_loss: vectors.secondary_loss()[i],
    })
}

/// Compact key-value summary of a run.
///
/// Keys are `Mean_ALE`, `VaR_<c>`, `Risk_Level` and `Simulation_Count`,
/// where `<c>` is the confidence level without trailing zeros.
///
/// # Examples
///
/// ```rust
/// use crq_risk::classification::RiskLevel;
/// use crq_risk::export::SummaryRecord;
///
/// let record = SummaryRecord {
///     mean_ale: 250_000.0,
///     confidence: 95.0,
///     value_at_risk: 900_000.0,
///     risk_level: RiskLevel::Medium,
///     simulation_count: 10_000,
/// };
///
/// assert_eq!(record.var_key(), "VaR_95");
/// assert_eq!(record.entries()[3], ("Simulation_Count".to_string(), "10000".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRecord {
    /// Mean ALE.
    pub mean_ale: f64,
    /// VaR confidence level in percent.
    pub confidence: f64,
    /// VaR at `confidence`.
    pub value_at_risk: f64,
    /// Classification of `mean_ale`.
    pub risk_level: RiskLevel,
    /// Number of simulated years.
    pub simulation_count: usize,
}

impl SummaryRecord {
    /// Builds the record from run statistics.
    pub fn new(statistics: &SummaryStatistics, risk_level: RiskLevel) -> Self {
        Self {
            mean_ale: statistics.mean,
            confidence: statistics.confidence,
            value_at_risk: statistics.value_at_risk,
            risk_level,
            simulation_count: statistics.count,
        }
    }

    /// Key of the VaR entry, e.g. `VaR_95` or `VaR_99.5`.
    pub fn var_key(&self) -> String {
        format!("VaR_{}", self.confidence)
    }

    /// `(key, value)` pairs in export order.
    pub fn entries(&self) -> [(String, String); 4] {
        [
            ("Mean_ALE".to_string(), self.mean_ale.to_string()),
            (self.var_key(), self.value_at_risk.to_string()),
            ("Risk_Level".to_string(), self.risk_level.label().to_string()),
            (
                "Simulation_Count".to_string(),
                self.simulation_count.to_string(),
            ),
        ]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SummaryRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("Mean_ALE", &self.mean_ale)?;
        map.serialize_entry(&self.var_key(), &self.value_at_risk)?;
        map.serialize_entry("Risk_Level", self.risk_level.label())?;
        map.serialize_entry("Simulation_Count", &self.simulation_count)?;
        map.end()
    }
}
