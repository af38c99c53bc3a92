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
use crate::summarize::summary::ObjectColumnSummary;

/// Fallback aggregator for element types with no specialized variant. Tracks
/// null and non-null counts only.
#[derive(Clone, Debug, Default)]
pub struct ObjectSummaryAggregator {
    non_null_count: u64,
    null_count: u64,
}

impl ObjectSummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&mut self, is_null: bool) {
        if is_null {
            self.null_count += 1;
        } else {
            self.non_null_count += 1;
        }
    }

    pub fn combine(&mut self, other: &Self) {
        self.non_null_count += other.non_null_count;
        self.null_count += other.null_count;
    }

    pub fn result(&self) -> ObjectColumnSummary {
        ObjectColumnSummary {
            non_null_count: self.non_null_count,
            null_count: self.null_count,
        }
    }
}
