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
use std::collections::HashSet;

use novaflow::{
    checksum_hash_code, count_per_partition, zip_with_index, zip_with_index_from_counts,
    zip_with_unique_id, Datum, ValuesSource,
};

/// 0..n split round-robin into `partitions` uneven chunks.
fn numbers_partitioned(n: u64, partitions: usize) -> ValuesSource<u64> {
    let mut parts = vec![Vec::new(); partitions];
    for v in 0..n {
        parts[(v as usize * 7 + 3) % partitions].push(v);
    }
    ValuesSource::new(parts)
}

#[test]
fn test_zip_with_index_is_dense() {
    for partitions in [1, 2, 3, 7] {
        let source = numbers_partitioned(100, partitions);
        let zipped = zip_with_index(&source);
        assert_eq!(zipped.len(), partitions);

        let mut pairs: Vec<(u64, u64)> = zipped.into_iter().flatten().collect();
        assert_eq!(pairs.len(), 100);
        pairs.sort_by_key(|(index, _)| *index);
        for (i, (index, _)) in pairs.iter().enumerate() {
            assert_eq!(*index, i as u64);
        }
    }
}

#[test]
fn test_zip_with_index_respects_partition_order() {
    let source = ValuesSource::new(vec![
        vec!["a", "b", "c"],
        vec![],
        vec!["d"],
        vec!["e", "f"],
    ]);
    let zipped = zip_with_index(&source);
    assert_eq!(
        zipped,
        vec![
            vec![(0, "a"), (1, "b"), (2, "c")],
            vec![],
            vec![(3, "d")],
            vec![(4, "e"), (5, "f")],
        ]
    );
}

#[test]
fn test_zip_with_index_two_stage() {
    let source = numbers_partitioned(50, 4);
    let counts = count_per_partition(&source);
    assert_eq!(counts.total(), 50);

    let staged = zip_with_index_from_counts(&source, &counts).unwrap();
    assert_eq!(staged, zip_with_index(&source));
}

#[test]
fn test_zip_with_index_from_counts_layout_mismatch() {
    let source = numbers_partitioned(50, 4);
    let other_counts = count_per_partition(&numbers_partitioned(50, 5));
    let err = zip_with_index_from_counts(&source, &other_counts).unwrap_err();
    assert!(err.contains("partition count mismatch"), "unexpected error: {err}");
}

#[test]
fn test_zip_with_unique_id_no_collisions() {
    for partitions in [1, 2, 3, 7] {
        let source = numbers_partitioned(100, partitions);
        let zipped = zip_with_unique_id(&source);

        let ids: HashSet<u64> = zipped.iter().flatten().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), 100);

        // The k-th element of partition p carries k * P + p.
        for (p, partition) in zipped.iter().enumerate() {
            for (k, (id, _)) in partition.iter().enumerate() {
                assert_eq!(*id, k as u64 * partitions as u64 + p as u64);
            }
        }
    }
}

#[test]
fn test_zip_with_unique_id_single_partition_is_dense() {
    let source = ValuesSource::single((0..10u64).collect());
    let zipped = zip_with_unique_id(&source);
    let ids: Vec<u64> = zipped[0].iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<u64>>());
}

#[test]
fn test_checksum_integer_dataset() {
    // Each integer k in 1..=5 appears k times: 15 elements, hash sum 55.
    let mut values = Vec::new();
    for k in 1i32..=5 {
        for _ in 0..k {
            values.push(k);
        }
    }

    for partitions in [1, 3, 5] {
        let mut parts = vec![Vec::new(); partitions];
        for (i, v) in values.iter().enumerate() {
            parts[i % partitions].push(*v);
        }
        let checksum = checksum_hash_code(&ValuesSource::new(parts));
        assert_eq!(checksum.count(), 15);
        assert_eq!(checksum.checksum(), 55);
    }
}

#[test]
fn test_checksum_empty() {
    let source: ValuesSource<i64> = ValuesSource::new(vec![vec![], vec![]]);
    let checksum = checksum_hash_code(&source);
    assert_eq!(checksum.count(), 0);
    assert_eq!(checksum.checksum(), 0);
}

#[test]
fn test_checksum_counts_every_element_kind() {
    let source = ValuesSource::new(vec![
        vec![Datum::Null, Datum::from("abc")],
        vec![Datum::from(1.5f64), Datum::from(true), Datum::from(-3i64)],
    ]);
    let checksum = checksum_hash_code(&source);
    assert_eq!(checksum.count(), 5);

    // Same multiset, different partitioning: identical reduction result.
    let repartitioned = ValuesSource::single(vec![
        Datum::from(true),
        Datum::from("abc"),
        Datum::Null,
        Datum::from(-3i64),
        Datum::from(1.5f64),
    ]);
    assert_eq!(checksum, checksum_hash_code(&repartitioned));
}
