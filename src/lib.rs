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
pub mod common;
pub mod dataset;
pub mod summarize;

pub use common::datum::Datum;
pub use common::logging as novaflow_logging;

pub use dataset::checksum::{checksum_hash_code, ChecksumHash, ChecksumHashCode};
pub use dataset::zip::{
    count_per_partition, zip_with_index, zip_with_index_from_counts, zip_with_unique_id,
    PartitionCounts,
};
pub use dataset::{PartitionedSource, ValuesSource};

pub use summarize::aggregation::{
    BooleanSummaryAggregator, DatumSummaryAggregator, NumericSummaryAggregator,
    ObjectSummaryAggregator, StringSummaryAggregator, SummaryAggregator,
};
pub use summarize::summary::{
    BooleanColumnSummary, ColumnSummary, NumericColumnSummary, ObjectColumnSummary,
    StringColumnSummary,
};
pub use summarize::{summarize, summarize_rows};
