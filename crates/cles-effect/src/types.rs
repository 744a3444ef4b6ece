//! Types for effect size representation

use std::fmt;

/// How a common language effect size was estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EstimationMethod {
    /// Exact pairwise comparison of every (a, b) pair
    Nonparametric,
    /// Normal-CDF approximation from the sample means
    Parametric,
}

impl EstimationMethod {
    /// Get the name of the estimation method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nonparametric => "Nonparametric CLES",
            Self::Parametric => "Parametric CLES",
        }
    }
}

/// A common language effect size with its interpretation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSize {
    /// Probability that a draw from sample a exceeds a draw from sample b
    pub magnitude: f64,
    /// Estimator that produced the value
    pub method: EstimationMethod,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (a, b)
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    /// Range every CLES falls in
    pub const RANGE: (f64, f64) = (0.0, 1.0);

    /// Create a new effect size
    pub fn new(
        magnitude: f64,
        method: EstimationMethod,
        sample_sizes: Option<(usize, usize)>,
    ) -> Self {
        Self {
            magnitude,
            method,
            interpretation: EffectSizeInterpretation::from_probability(magnitude),
            sample_sizes,
        }
    }

    /// Distance from chance (0.5)
    pub fn distance_from_chance(&self) -> f64 {
        (self.magnitude - 0.5).abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }

    /// True when draws from sample a tend to exceed draws from sample b
    pub fn favors_a(&self) -> bool {
        self.magnitude > 0.5
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.method.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

/// Interpretation of a CLES by its distance from chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Classify a probability by `|p - 0.5|`
    ///
    /// Thresholds 0.06 / 0.14 / 0.21 correspond to Cohen's d of roughly
    /// 0.2 / 0.5 / 0.8 under normality.
    pub fn from_probability(probability: f64) -> Self {
        let distance_from_chance = (probability - 0.5).abs();
        if distance_from_chance < 0.06 {
            Self::Negligible
        } else if distance_from_chance < 0.14 {
            Self::Small
        } else if distance_from_chance < 0.21 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
