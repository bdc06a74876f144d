//! Statistical combiners: `AverageF64`, `SummaryStats`

use super::CombineFn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/* ===================== AverageF64 ===================== */

/// Arithmetic mean as `f64`.
///
/// Values must be convertible into `f64` via `Into<f64>`.
///
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `f64`
///
/// An empty input averages to `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<V, (f64, u64), f64> for AverageF64
where
    V: Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    fn merge(&self, acc: &mut (f64, u64), other: (f64, u64)) {
        acc.0 += other.0;
        acc.1 += other.1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> f64 {
        if acc.1 == 0 {
            0.0
        } else {
            acc.0 / (acc.1 as f64)
        }
    }
}

/* ===================== SummaryStats ===================== */

/// Count, sum, min, max and average of integer values, gathered in one pass.
///
/// The sum is kept in an `i128`, so no input of `i64` values can overflow it.
/// An empty summary reports `min = i64::MAX` and `max = i64::MIN`, which
/// makes merging with an empty summary a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: u64,
    pub sum: i128,
    pub min: i64,
    pub max: i64,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }
}

impl SummaryStatistics {
    /// Record one value.
    pub fn accept(&mut self, v: i64) {
        self.count += 1;
        self.sum += i128::from(v);
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Fold another summary into this one.
    pub fn combine(&mut self, other: &SummaryStatistics) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Mean of the recorded values, `0.0` when empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

impl Display for SummaryStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(
            f,
            "SummaryStatistics{{count={}, sum={}, min={}, average={:.6}, max={}}}",
            self.count,
            self.sum,
            self.min,
            self.average(),
            self.max
        )
    }
}

/// Collector producing a [`SummaryStatistics`] from values convertible to `i64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryStats;

impl<V> CombineFn<V, SummaryStatistics, SummaryStatistics> for SummaryStats
where
    V: Into<i64>,
{
    fn create(&self) -> SummaryStatistics {
        SummaryStatistics::default()
    }

    fn add_input(&self, acc: &mut SummaryStatistics, v: V) {
        acc.accept(v.into());
    }

    fn merge(&self, acc: &mut SummaryStatistics, other: SummaryStatistics) {
        acc.combine(&other);
    }

    fn finish(&self, acc: SummaryStatistics) -> SummaryStatistics {
        acc
    }
}
