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
use crate::summarize::summary::StringColumnSummary;

use super::numeric::MomentState;

/// Online summary aggregator for a string column: null and empty counts plus
/// min/max/mean length. Lengths are Unicode scalar value counts; the string
/// content itself is never aggregated.
#[derive(Clone, Debug, Default)]
pub struct StringSummaryAggregator {
    null_count: u64,
    empty_count: u64,
    min_length: Option<u64>,
    max_length: Option<u64>,
    lengths: MomentState,
}

impl StringSummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&mut self, value: Option<&str>) {
        let Some(s) = value else {
            self.null_count += 1;
            return;
        };
        let length = s.chars().count() as u64;
        if length == 0 {
            self.empty_count += 1;
        }
        match self.min_length {
            Some(m) if m <= length => {}
            _ => self.min_length = Some(length),
        }
        match self.max_length {
            Some(m) if m >= length => {}
            _ => self.max_length = Some(length),
        }
        self.lengths.update(length as f64);
    }

    pub fn combine(&mut self, other: &Self) {
        self.null_count += other.null_count;
        self.empty_count += other.empty_count;
        self.min_length = match (self.min_length, other.min_length) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_length = match (self.max_length, other.max_length) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.lengths.merge(&other.lengths);
    }

    pub fn result(&self) -> StringColumnSummary {
        StringColumnSummary {
            non_null_count: self.lengths.count(),
            null_count: self.null_count,
            empty_count: self.empty_count,
            min_string_length: self.min_length,
            max_string_length: self.max_length,
            mean_length: self.lengths.mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_and_empties() {
        let mut agg = StringSummaryAggregator::new();
        for v in [Some("ab"), Some(""), None, Some("héllo"), Some("x")] {
            agg.aggregate(v);
        }
        let summary = agg.result();
        assert_eq!(summary.non_null_count, 4);
        assert_eq!(summary.null_count, 1);
        assert_eq!(summary.empty_count, 1);
        assert_eq!(summary.min_string_length, Some(0));
        assert_eq!(summary.max_string_length, Some(5));
        assert_eq!(summary.mean_length, Some(2.0));
        assert_eq!(summary.total_count(), 5);
    }

    #[test]
    fn test_empty_input() {
        let summary = StringSummaryAggregator::new().result();
        assert_eq!(summary.min_string_length, None);
        assert_eq!(summary.max_string_length, None);
        assert_eq!(summary.mean_length, None);
    }
}
