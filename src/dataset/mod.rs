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
pub mod checksum;
pub mod zip;

/// A partitioned, parallel collection as exposed by the surrounding engine.
///
/// Partition identifiers are contiguous in `[0, partition_count())`.
///
/// Callers of the two-pass algorithms in [`zip`] must guarantee that
/// `partition(p)` replays the same elements in the same order every time it
/// is called. A source backed by a non-deterministic upstream violates this
/// precondition and produces incorrect indexes; the violation is not
/// detectable here.
pub trait PartitionedSource<T> {
    fn partition_count(&self) -> usize;

    /// Iterate one partition's elements in its stable local order.
    fn partition(&self, partition: usize) -> Box<dyn Iterator<Item = T> + '_>;
}

/// In-memory partitioned source. Reference implementation of
/// [`PartitionedSource`] and the test vehicle for the dataset algorithms;
/// engine-side sources wrap their own storage instead.
#[derive(Clone, Debug, Default)]
pub struct ValuesSource<T> {
    partitions: Vec<Vec<T>>,
}

impl<T> ValuesSource<T> {
    pub fn new(partitions: Vec<Vec<T>>) -> Self {
        Self { partitions }
    }

    /// A single-partition source, convenient for local execution.
    pub fn single(values: Vec<T>) -> Self {
        Self {
            partitions: vec![values],
        }
    }
}

impl<T: Clone> PartitionedSource<T> for ValuesSource<T> {
    fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    fn partition(&self, partition: usize) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.partitions[partition].iter().cloned())
    }
}
