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
use crate::summarize::summary::BooleanColumnSummary;

/// Online summary aggregator for a boolean column: true/false/null counts.
#[derive(Clone, Debug, Default)]
pub struct BooleanSummaryAggregator {
    true_count: u64,
    false_count: u64,
    null_count: u64,
}

impl BooleanSummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&mut self, value: Option<bool>) {
        match value {
            None => self.null_count += 1,
            Some(true) => self.true_count += 1,
            Some(false) => self.false_count += 1,
        }
    }

    pub fn combine(&mut self, other: &Self) {
        self.true_count += other.true_count;
        self.false_count += other.false_count;
        self.null_count += other.null_count;
    }

    pub fn result(&self) -> BooleanColumnSummary {
        BooleanColumnSummary {
            true_count: self.true_count,
            false_count: self.false_count,
            null_count: self.null_count,
        }
    }
}
