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
use tracing::debug;

use super::PartitionedSource;

/// Per-partition element counts, the intermediate artifact between the two
/// passes of [`zip_with_index`]. Produced by the counting pass, shipped
/// through the engine's reduction machinery, consumed by the re-emit pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionCounts {
    counts: Vec<u64>,
}

impl PartitionCounts {
    pub fn new(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn partition_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Exclusive prefix sum in partition-id order: the dense starting offset
    /// of every partition.
    pub fn start_offsets(&self) -> Vec<u64> {
        let mut offsets = Vec::with_capacity(self.counts.len());
        let mut running = 0u64;
        for count in &self.counts {
            offsets.push(running);
            running += count;
        }
        offsets
    }
}

/// Counting pass: the number of elements in each partition, without
/// materializing the elements.
pub fn count_per_partition<T, S>(source: &S) -> PartitionCounts
where
    S: PartitionedSource<T>,
{
    let counts = (0..source.partition_count())
        .map(|p| source.partition(p).count() as u64)
        .collect();
    PartitionCounts { counts }
}

fn zip_indexed<T, S>(source: &S, offsets: &[u64]) -> Vec<Vec<(u64, T)>>
where
    S: PartitionedSource<T>,
{
    (0..source.partition_count())
        .map(|p| {
            let offset = offsets[p];
            source
                .partition(p)
                .enumerate()
                .map(|(local, element)| (offset + local as u64, element))
                .collect()
        })
        .collect()
}

/// Re-emit pass of [`zip_with_index`], driven by counts obtained from an
/// earlier [`count_per_partition`] over the same source. Errors if the counts
/// were taken over a source with a different partition layout.
pub fn zip_with_index_from_counts<T, S>(
    source: &S,
    counts: &PartitionCounts,
) -> Result<Vec<Vec<(u64, T)>>, String>
where
    S: PartitionedSource<T>,
{
    if counts.partition_count() != source.partition_count() {
        return Err(format!(
            "partition count mismatch: counts cover {} partitions, source has {}",
            counts.partition_count(),
            source.partition_count()
        ));
    }
    Ok(zip_indexed(source, &counts.start_offsets()))
}

/// Pair every element with a dense, globally consecutive 0-based index.
///
/// Two passes over the source with a prefix-sum synchronization point in
/// between; requires stable replay order per partition (see
/// [`PartitionedSource`]). Over N total elements the emitted index set is
/// exactly `{0, ..., N-1}`.
pub fn zip_with_index<T, S>(source: &S) -> Vec<Vec<(u64, T)>>
where
    S: PartitionedSource<T>,
{
    let counts = count_per_partition(source);
    debug!(
        "zip_with_index: {} elements across {} partitions",
        counts.total(),
        counts.partition_count()
    );
    zip_indexed(source, &counts.start_offsets())
}

/// Pair every element with a globally unique but not necessarily dense id,
/// in a single pass with no cross-partition coordination.
///
/// The k-th element of partition p gets `k * P + p`; ids congruent mod P
/// belong to exactly one partition, so no two elements collide. Prefer
/// [`zip_with_index`] when a dense range is required; prefer this when only
/// uniqueness matters and the synchronization round-trip is unwanted.
pub fn zip_with_unique_id<T, S>(source: &S) -> Vec<Vec<(u64, T)>>
where
    S: PartitionedSource<T>,
{
    let partitions = source.partition_count() as u64;
    (0..source.partition_count())
        .map(|p| {
            source
                .partition(p)
                .enumerate()
                .map(|(local, element)| (local as u64 * partitions + p as u64, element))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_offsets_exclusive() {
        let counts = PartitionCounts::new(vec![3, 0, 5, 1]);
        assert_eq!(counts.start_offsets(), vec![0, 3, 3, 8]);
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn test_start_offsets_empty() {
        let counts = PartitionCounts::new(vec![]);
        assert!(counts.start_offsets().is_empty());
        assert_eq!(counts.total(), 0);
    }
}
