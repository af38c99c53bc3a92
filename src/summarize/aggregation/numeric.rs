// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use std::fmt;

use crate::summarize::summary::NumericColumnSummary;

/// Compensated (Kahan) summation. Keeps the floating-point sum's dependence
/// on partition order and merge grouping at rounding-error scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    pub fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    pub fn merge(&mut self, other: &KahanSum) {
        // The other side's true total is sum minus its pending compensation.
        self.add(other.sum);
        self.add(-other.compensation);
    }

    pub fn value(&self) -> f64 {
        self.sum
    }
}

/// Running mean / second central moment / contributing count.
///
/// `update` is Welford's recurrence; `merge` is the parallel (Chan et al.)
/// combination of two groups' moments. Both avoid the catastrophic
/// cancellation of the naive sum-of-squares formula.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MomentState {
    mean: f64,
    m2: f64,
    count: u64,
}

impl MomentState {
    pub fn update(&mut self, value: f64) {
        let next = self.count + 1;
        let delta = value - self.mean;
        let r = delta / next as f64;
        self.mean += r;
        self.m2 += self.count as f64 * delta * r;
        self.count = next;
    }

    pub fn merge(&mut self, other: &MomentState) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        let delta = self.mean - other.mean;
        let count_self = self.count as f64;
        let count_other = other.count as f64;
        let sum_count = count_self + count_other;
        self.mean = other.mean + delta * (count_self / sum_count);
        self.m2 = other.m2 + self.m2 + (delta * delta) * (count_other * count_self / sum_count);
        self.count += other.count;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance. Defined as 0.0 for a single contributing value,
    /// absent for none.
    pub fn variance(&self) -> Option<f64> {
        match self.count {
            0 => None,
            1 => Some(0.0),
            n => Some(self.m2 / (n - 1) as f64),
        }
    }
}

/// Capabilities a column element type needs for numeric summarization:
/// natural ordering, NaN/infinity classification, and a widened accumulator
/// for the running sum.
pub trait NumericElement: Copy + PartialOrd + fmt::Debug {
    type Acc: Copy + fmt::Debug + Default;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn to_f64(self) -> f64;

    fn acc_add(acc: &mut Self::Acc, value: Self);
    fn acc_merge(acc: &mut Self::Acc, other: &Self::Acc);
    /// Narrow the widened sum back to the element type for the reported sum.
    fn acc_finish(acc: &Self::Acc) -> Self;
}

macro_rules! numeric_element_int {
    ($native:ty, $acc:ty) => {
        impl NumericElement for $native {
            type Acc = $acc;

            fn is_nan(self) -> bool {
                false
            }

            fn is_infinite(self) -> bool {
                false
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn acc_add(acc: &mut Self::Acc, value: Self) {
                *acc = acc.wrapping_add(value as $acc);
            }

            fn acc_merge(acc: &mut Self::Acc, other: &Self::Acc) {
                *acc = acc.wrapping_add(*other);
            }

            fn acc_finish(acc: &Self::Acc) -> Self {
                *acc as $native
            }
        }
    };
}

numeric_element_int!(i8, i64);
numeric_element_int!(i16, i64);
numeric_element_int!(i32, i64);
numeric_element_int!(i64, i64);
numeric_element_int!(u8, u64);
numeric_element_int!(u16, u64);
numeric_element_int!(u32, u64);
numeric_element_int!(u64, u64);

macro_rules! numeric_element_float {
    ($native:ty) => {
        impl NumericElement for $native {
            type Acc = KahanSum;

            fn is_nan(self) -> bool {
                <$native>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$native>::is_infinite(self)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn acc_add(acc: &mut Self::Acc, value: Self) {
                acc.add(value as f64);
            }

            fn acc_merge(acc: &mut Self::Acc, other: &Self::Acc) {
                acc.merge(other);
            }

            fn acc_finish(acc: &Self::Acc) -> Self {
                acc.value() as $native
            }
        }
    };
}

numeric_element_float!(f32);
numeric_element_float!(f64);

/// Online summary aggregator for one numeric column. One instance per
/// partition; independently accumulated instances merge with [`combine`]
/// in any order and grouping.
///
/// [`combine`]: NumericSummaryAggregator::combine
#[derive(Clone, Debug, Default)]
pub struct NumericSummaryAggregator<T: NumericElement> {
    null_count: u64,
    nan_count: u64,
    infinity_count: u64,
    min: Option<T>,
    max: Option<T>,
    sum: T::Acc,
    moments: MomentState,
}

impl<T: NumericElement> NumericSummaryAggregator<T> {
    pub fn new() -> Self {
        Self {
            null_count: 0,
            nan_count: 0,
            infinity_count: 0,
            min: None,
            max: None,
            sum: T::Acc::default(),
            moments: MomentState::default(),
        }
    }

    pub fn is_null(&self, value: Option<T>) -> bool {
        value.is_none()
    }

    pub fn is_nan(&self, value: Option<T>) -> bool {
        value.is_some_and(|v| v.is_nan())
    }

    pub fn is_infinite(&self, value: Option<T>) -> bool {
        value.is_some_and(|v| v.is_infinite())
    }

    /// Consume one element. Classification precedence: null, then NaN, then
    /// infinite, then contributing.
    pub fn aggregate(&mut self, value: Option<T>) {
        let Some(v) = value else {
            self.null_count += 1;
            return;
        };
        if v.is_nan() {
            self.nan_count += 1;
            return;
        }
        if v.is_infinite() {
            self.infinity_count += 1;
            return;
        }

        // NaN cannot reach these comparisons, so PartialOrd is total here.
        match self.min {
            Some(m) if m <= v => {}
            _ => self.min = Some(v),
        }
        match self.max {
            Some(m) if m >= v => {}
            _ => self.max = Some(v),
        }
        T::acc_add(&mut self.sum, v);
        self.moments.update(v.to_f64());
    }

    /// Merge another partition's partial state into this one. Associative
    /// and commutative over any grouping of a fixed input multiset.
    pub fn combine(&mut self, other: &Self) {
        self.null_count += other.null_count;
        self.nan_count += other.nan_count;
        self.infinity_count += other.infinity_count;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(if b < a { b } else { a }),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(if b > a { b } else { a }),
            (a, b) => a.or(b),
        };
        T::acc_merge(&mut self.sum, &other.sum);
        self.moments.merge(&other.moments);
    }

    /// Finalize into an immutable summary. Idempotent; the aggregator is
    /// left untouched.
    pub fn result(&self) -> NumericColumnSummary<T> {
        let count = self.moments.count();
        let variance = self.moments.variance();
        NumericColumnSummary {
            non_missing_count: count,
            null_count: self.null_count,
            nan_count: self.nan_count,
            infinity_count: self.infinity_count,
            min: self.min,
            max: self.max,
            sum: (count > 0).then(|| T::acc_finish(&self.sum)),
            mean: self.moments.mean(),
            variance,
            standard_deviation: variance.map(f64::sqrt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate_i64(values: &[Option<i64>]) -> NumericSummaryAggregator<i64> {
        let mut agg = NumericSummaryAggregator::new();
        for v in values {
            agg.aggregate(*v);
        }
        agg
    }

    #[test]
    fn test_welford_matches_two_pass_reference() {
        let values = [1.012376f64, 2.003453, 75.00005, 79.5, 10.0000001];
        let mut agg = NumericSummaryAggregator::<f64>::new();
        for v in values {
            agg.aggregate(Some(v));
        }
        let summary = agg.result();

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let m2 = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
        let variance = m2 / (n - 1.0);

        assert!((summary.mean.unwrap() - mean).abs() < 1e-12);
        assert!((summary.variance.unwrap() - variance).abs() < 1e-9);
    }

    #[test]
    fn test_combine_any_grouping() {
        let values: Vec<Option<i64>> = vec![
            Some(3),
            None,
            Some(-7),
            Some(12),
            Some(0),
            Some(5),
            None,
            Some(100),
        ];
        let single = aggregate_i64(&values).result();

        // Uneven split, one empty partial, merged in reversed order.
        let partials = [
            aggregate_i64(&values[..1]),
            aggregate_i64(&values[1..5]),
            aggregate_i64(&[]),
            aggregate_i64(&values[5..]),
        ];
        let mut merged = NumericSummaryAggregator::new();
        for partial in partials.iter().rev() {
            merged.combine(partial);
        }
        let merged = merged.result();

        assert_eq!(merged.non_missing_count, single.non_missing_count);
        assert_eq!(merged.null_count, single.null_count);
        assert_eq!(merged.min, single.min);
        assert_eq!(merged.max, single.max);
        assert_eq!(merged.sum, single.sum);
        assert!((merged.mean.unwrap() - single.mean.unwrap()).abs() < 1e-12);
        assert!((merged.variance.unwrap() - single.variance.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_single_value() {
        let summary = aggregate_i64(&[Some(42)]).result();
        assert_eq!(summary.min, Some(42));
        assert_eq!(summary.max, Some(42));
        assert_eq!(summary.sum, Some(42));
        assert_eq!(summary.mean, Some(42.0));
        assert_eq!(summary.variance, Some(0.0));
        assert_eq!(summary.standard_deviation, Some(0.0));
    }

    #[test]
    fn test_empty_is_absent_not_zero() {
        let summary = aggregate_i64(&[]).result();
        assert_eq!(summary.non_missing_count, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.sum, None);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.variance, None);
        assert_eq!(summary.standard_deviation, None);
    }

    #[test]
    fn test_float_classification_precedence() {
        let mut agg = NumericSummaryAggregator::<f64>::new();
        agg.aggregate(None);
        agg.aggregate(Some(f64::NAN));
        agg.aggregate(Some(f64::INFINITY));
        agg.aggregate(Some(f64::NEG_INFINITY));
        agg.aggregate(Some(1.5));
        let summary = agg.result();
        assert_eq!(summary.null_count, 1);
        assert_eq!(summary.nan_count, 1);
        assert_eq!(summary.infinity_count, 2);
        assert_eq!(summary.non_missing_count, 1);
        assert_eq!(summary.missing_count(), 4);
        assert_eq!(summary.non_null_count(), 4);
        assert_eq!(summary.total_count(), 5);
        assert_eq!(summary.min, Some(1.5));
        assert_eq!(summary.sum, Some(1.5));
    }

    #[test]
    fn test_kahan_merge_preserves_total() {
        let mut left = KahanSum::default();
        let mut right = KahanSum::default();
        for i in 0..1000 {
            left.add(0.1 + i as f64);
            right.add(0.2);
        }
        let mut merged = left;
        merged.merge(&right);

        let mut sequential = KahanSum::default();
        for i in 0..1000 {
            sequential.add(0.1 + i as f64);
        }
        for _ in 0..1000 {
            sequential.add(0.2);
        }
        assert!((merged.value() - sequential.value()).abs() < 1e-9);
    }
}
