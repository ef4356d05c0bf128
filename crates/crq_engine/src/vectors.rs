//! Index-aligned per-sample vectors of one simulation run.

/// The seven sample vectors of a run.
///
/// Index `i` of every vector describes the same simulated year. All vectors
/// have the same length; the struct is read-only once produced.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleVectors {
    tef: Vec<f64>,
    vulnerability: Vec<f64>,
    lef: Vec<f64>,
    primary_loss: Vec<f64>,
    secondary_loss: Vec<f64>,
    loss_magnitude: Vec<f64>,
    ale: Vec<f64>,
}

impl SampleVectors {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            tef: Vec::with_capacity(n),
            vulnerability: Vec::with_capacity(n),
            lef: Vec::with_capacity(n),
            primary_loss: Vec::with_capacity(n),
            secondary_loss: Vec::with_capacity(n),
            loss_magnitude: Vec::with_capacity(n),
            ale: Vec::with_capacity(n),
        }
    }

    pub(crate) fn from_parts(
        tef: Vec<f64>,
        vulnerability: Vec<f64>,
        lef: Vec<f64>,
        primary_loss: Vec<f64>,
        secondary_loss: Vec<f64>,
        loss_magnitude: Vec<f64>,
        ale: Vec<f64>,
    ) -> Self {
        Self {
            tef,
            vulnerability,
            lef,
            primary_loss,
            secondary_loss,
            loss_magnitude,
            ale,
        }
    }

    /// Appends `other` after the samples already held.
    pub(crate) fn append(&mut self, mut other: SampleVectors) {
        self.tef.append(&mut other.tef);
        self.vulnerability.append(&mut other.vulnerability);
        self.lef.append(&mut other.lef);
        self.primary_loss.append(&mut other.primary_loss);
        self.secondary_loss.append(&mut other.secondary_loss);
        self.loss_magnitude.append(&mut other.loss_magnitude);
        self.ale.append(&mut other.ale);
    }

    /// Number of simulated years.
    #[inline]
    pub fn len(&self) -> usize {
        self.ale.len()
    }

    /// Whether the run holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ale.is_empty()
    }

    /// Threat Event Frequency samples.
    #[inline]
    pub fn tef(&self) -> &[f64] {
        &self.tef
    }

    /// Vulnerability samples.
    #[inline]
    pub fn vulnerability(&self) -> &[f64] {
        &self.vulnerability
    }

    /// Loss Event Frequency, `TEF × Vulnerability`.
    #[inline]
    pub fn lef(&self) -> &[f64] {
        &self.lef
    }

    /// Primary Loss Magnitude samples.
    #[inline]
    pub fn primary_loss(&self) -> &[f64] {
        &self.primary_loss
    }

    /// Secondary Loss Magnitude, `PLM × slm_factor`.
    #[inline]
    pub fn secondary_loss(&self) -> &[f64] {
        &self.secondary_loss
    }

    /// Total Loss Magnitude, `PLM + SLM`.
    #[inline]
    pub fn loss_magnitude(&self) -> &[f64] {
        &self.loss_magnitude
    }

    /// Annual Loss Exposure, `LEF × LM`.
    #[inline]
    pub fn ale(&self) -> &[f64] {
        &self.ale
    }

    /// Number of NaN or infinite ALE samples.
    pub fn non_finite_ale_count(&self) -> usize {
        self.ale.iter().filter(|v| !v.is_finite()).count()
    }
}
