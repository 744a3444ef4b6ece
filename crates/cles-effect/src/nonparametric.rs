//! Nonparametric Common Language Effect Size
//!
//! The probability that a randomly selected observation from sample a is
//! greater than a randomly selected observation from sample b, counted
//! exactly over every (a, b) pair.

use crate::{EffectSize, EffectSizeEstimator, EstimationMethod, NonParametricEffectSize};
use cles_core::{check_samples, sign_of_difference, Error, Numeric, Result, Sign};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Largest number of pairs `PairwiseStrategy::Auto` scans directly
pub const BRUTE_FORCE_MAX_PAIRS: usize = 4096;

/// How the pairwise comparison is carried out
///
/// Both strategies produce bit-identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairwiseStrategy {
    /// Compare every pair, O(|a|·|b|)
    BruteForce,
    /// Sort b and binary-search each a, O((|a| + |b|) log |b|)
    Ranked,
    /// Brute force up to [`BRUTE_FORCE_MAX_PAIRS`] pairs, ranked beyond
    #[default]
    Auto,
}

/// Tally of pair outcomes from the point of view of sample a
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairCounts {
    /// Pairs with a[i] > b[j]
    pub wins: u64,
    /// Pairs with a[i] == b[j]
    pub ties: u64,
    /// Pairs with a[i] < b[j]
    pub losses: u64,
}

impl PairCounts {
    /// Total number of pairs
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    fn record(&mut self, sign: Sign) {
        match sign {
            Sign::Positive => self.wins += 1,
            Sign::Zero => self.ties += 1,
            Sign::Negative => self.losses += 1,
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    /// Mean credit over all pairs
    ///
    /// Every entry scores in {0, 0.5, 1}, so the sums below are exact and
    /// equal the mean of the scored pair matrix.
    pub fn score(&self, half_credit: bool) -> f64 {
        let credited = self.wins as f64 * pair_credit(Sign::Positive, half_credit)
            + self.ties as f64 * pair_credit(Sign::Zero, half_credit)
            + self.losses as f64 * pair_credit(Sign::Negative, half_credit);
        credited / self.total() as f64
    }
}

/// Credit of a single pair given the sign of `a[i] - b[j]`
///
/// Applied in order: sign, tie substitution, then negative zeroing.
pub fn pair_credit(sign: Sign, half_credit: bool) -> f64 {
    let mut credit = sign.value();
    if half_credit && credit == 0.0 {
        credit = 0.5;
    }
    if credit == -1.0 {
        credit = 0.0;
    }
    credit
}

/// Nonparametric CLES estimator
///
/// CLES = P(A > B) + ½·P(A = B) with half credit, P(A > B) without.
///
/// The result ranges from 0 to 1:
/// - CLES = 0.5: no difference between samples
/// - CLES > 0.5: sample a tends to have higher values
/// - CLES = 1.0: every value in a is greater than every value in b
/// - CLES = 0.0: every value in a is less than every value in b
///
/// Samples must be non-empty and finite; NaN or infinite values are
/// rejected with [`Error::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonparametricCles {
    half_credit: bool,
    strategy: PairwiseStrategy,
}

impl NonparametricCles {
    /// Create a new estimator with half credit for ties
    pub fn new() -> Self {
        Self {
            half_credit: true,
            strategy: PairwiseStrategy::Auto,
        }
    }

    /// Set whether ties earn half credit
    pub fn with_half_credit(mut self, half_credit: bool) -> Self {
        self.half_credit = half_credit;
        self
    }

    /// Count ties as losses for sample a
    pub fn without_half_credit(self) -> Self {
        self.with_half_credit(false)
    }

    /// Choose the pairwise comparison strategy
    pub fn with_strategy(mut self, strategy: PairwiseStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn half_credit(&self) -> bool {
        self.half_credit
    }

    pub fn strategy(&self) -> PairwiseStrategy {
        self.strategy
    }

    /// Probability that a draw from `a` exceeds a draw from `b`
    pub fn estimate<T: Numeric>(&self, a: &[T], b: &[T]) -> Result<f64> {
        Ok(self.counts(a, b)?.score(self.half_credit))
    }

    /// Win/tie/loss tally over all pairs
    pub fn counts<T: Numeric>(&self, a: &[T], b: &[T]) -> Result<PairCounts> {
        check_samples(a, b)?;
        match self.resolve_strategy(a.len(), b.len()) {
            PairwiseStrategy::Ranked => {
                let mut sorted_b = b.to_vec();
                sorted_b.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
                Ok(ranked_counts(a, &sorted_b))
            }
            _ => brute_force_counts(a, b),
        }
    }

    fn resolve_strategy(&self, n_a: usize, n_b: usize) -> PairwiseStrategy {
        let strategy = match self.strategy {
            PairwiseStrategy::Auto => {
                if n_a.saturating_mul(n_b) <= BRUTE_FORCE_MAX_PAIRS {
                    PairwiseStrategy::BruteForce
                } else {
                    PairwiseStrategy::Ranked
                }
            }
            fixed => fixed,
        };
        debug!(n_a, n_b, ?strategy, "nonparametric CLES");
        strategy
    }

    /// Convert CLES to Cliff's delta
    ///
    /// Relationship: δ = 2 × CLES - 1 (with half credit for ties)
    pub fn to_cliff_delta(cles: f64) -> f64 {
        2.0 * cles - 1.0
    }

    /// Convert Cliff's delta to CLES
    ///
    /// Relationship: CLES = (δ + 1) / 2
    pub fn from_cliff_delta(delta: f64) -> f64 {
        (delta + 1.0) / 2.0
    }
}

impl Default for NonparametricCles {
    fn default() -> Self {
        Self::new()
    }
}

fn row_counts<T: Numeric>(x: T, b: &[T]) -> Result<PairCounts> {
    let mut counts = PairCounts::default();
    for &y in b {
        let sign = sign_of_difference(x, y)
            .ok_or_else(|| Error::non_finite("pairwise difference"))?;
        counts.record(sign);
    }
    Ok(counts)
}

#[cfg(not(feature = "parallel"))]
fn brute_force_counts<T: Numeric>(a: &[T], b: &[T]) -> Result<PairCounts> {
    a.iter()
        .try_fold(PairCounts::default(), |acc, &x| -> Result<PairCounts> {
            Ok(acc.merge(row_counts(x, b)?))
        })
}

#[cfg(feature = "parallel")]
fn brute_force_counts<T: Numeric>(a: &[T], b: &[T]) -> Result<PairCounts> {
    use rayon::prelude::*;

    a.par_iter()
        .map(|&x| row_counts(x, b))
        .try_reduce(PairCounts::default, |l, r| Ok(l.merge(r)))
}

/// Counts against an ascending `sorted_b`
fn ranked_counts<T: Numeric>(a: &[T], sorted_b: &[T]) -> PairCounts {
    let n_b = sorted_b.len() as u64;
    let mut counts = PairCounts::default();
    for &x in a {
        let below = sorted_b.partition_point(|&y| y < x) as u64;
        let not_above = sorted_b.partition_point(|&y| y <= x) as u64;
        counts.wins += below;
        counts.ties += not_above - below;
        counts.losses += n_b - not_above;
    }
    trace!(?counts, "ranked pair counts");
    counts
}

impl<T: Numeric> NonParametricEffectSize<T> for NonparametricCles {
    fn compute(&self, group_a: &[T], group_b: &[T]) -> Result<EffectSize> {
        let cles = self.estimate(group_a, group_b)?;
        Ok(EffectSize::new(
            cles,
            EstimationMethod::Nonparametric,
            Some((group_a.len(), group_b.len())),
        ))
    }

    fn compute_sorted(&self, group_a: &[T], sorted_group_b: &[T]) -> Result<EffectSize> {
        let presorted = sorted_group_b.windows(2).all(|w| w[0] <= w[1]);
        if !presorted || self.strategy == PairwiseStrategy::BruteForce {
            return self.compute(group_a, sorted_group_b);
        }

        check_samples(group_a, sorted_group_b)?;
        debug!(
            n_a = group_a.len(),
            n_b = sorted_group_b.len(),
            "nonparametric CLES on presorted sample"
        );
        let cles = ranked_counts(group_a, sorted_group_b).score(self.half_credit);
        Ok(EffectSize::new(
            cles,
            EstimationMethod::Nonparametric,
            Some((group_a.len(), sorted_group_b.len())),
        ))
    }
}

impl<T: Numeric> EffectSizeEstimator<T> for NonparametricCles {
    fn method(&self) -> EstimationMethod {
        EstimationMethod::Nonparametric
    }
}
