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
use arrow::array::RecordBatch;
use arrow::datatypes::{DataType, SchemaRef};
use tracing::debug;

use crate::common::datum::Datum;
use crate::dataset::PartitionedSource;

pub mod aggregation;
pub mod summary;

use self::aggregation::{DatumSummaryAggregator, SummaryAggregator};
use self::summary::ColumnSummary;

/// Summarize every column of a partitioned columnar collection: one
/// [`ColumnSummary`] per schema column, in column order.
///
/// One aggregator bank per partition, fed per batch; partial banks fold with
/// `combine`, `result` runs once at the end. The merge is order-insensitive,
/// so an engine may substitute any combine tree for the fold used here. The
/// only error is a batch disagreeing with the schema.
pub fn summarize<S>(schema: &SchemaRef, source: &S) -> Result<Vec<ColumnSummary>, String>
where
    S: PartitionedSource<RecordBatch>,
{
    debug!(
        "summarize: {} columns over {} partitions",
        schema.fields().len(),
        source.partition_count()
    );

    let create_bank = || -> Vec<SummaryAggregator> {
        schema
            .fields()
            .iter()
            .map(|field| SummaryAggregator::create(field.data_type()))
            .collect()
    };

    let mut merged: Option<Vec<SummaryAggregator>> = None;
    for p in 0..source.partition_count() {
        let mut bank = create_bank();
        for batch in source.partition(p) {
            if batch.num_columns() != schema.fields().len() {
                return Err(format!(
                    "batch column count mismatch: expected {}, got {}",
                    schema.fields().len(),
                    batch.num_columns()
                ));
            }
            for (idx, field) in schema.fields().iter().enumerate() {
                let column = batch.column(idx);
                if column.data_type() != field.data_type() {
                    return Err(format!(
                        "column {} type mismatch: expected {:?}, got {:?}",
                        field.name(),
                        field.data_type(),
                        column.data_type()
                    ));
                }
                bank[idx].update_array(column)?;
            }
        }
        merged = match merged {
            None => Some(bank),
            Some(mut acc) => {
                for (left, right) in acc.iter_mut().zip(bank.iter()) {
                    left.combine(right)?;
                }
                Some(acc)
            }
        };
    }

    let bank = merged.unwrap_or_else(create_bank);
    Ok(bank.iter().map(|agg| agg.result()).collect())
}

/// Summarize a partitioned collection of boxed rows against the declared
/// column types; the row-oriented counterpart of [`summarize`].
pub fn summarize_rows<S>(types: &[DataType], source: &S) -> Result<Vec<ColumnSummary>, String>
where
    S: PartitionedSource<Vec<Datum>>,
{
    debug!(
        "summarize_rows: {} columns over {} partitions",
        types.len(),
        source.partition_count()
    );

    let create_bank = || -> Vec<DatumSummaryAggregator> {
        types.iter().map(DatumSummaryAggregator::create).collect()
    };

    let mut merged: Option<Vec<DatumSummaryAggregator>> = None;
    for p in 0..source.partition_count() {
        let mut bank = create_bank();
        for row in source.partition(p) {
            if row.len() != types.len() {
                return Err(format!(
                    "row arity mismatch: expected {}, got {}",
                    types.len(),
                    row.len()
                ));
            }
            for (idx, datum) in row.iter().enumerate() {
                bank[idx].aggregate(datum);
            }
        }
        merged = match merged {
            None => Some(bank),
            Some(mut acc) => {
                for (left, right) in acc.iter_mut().zip(bank.iter()) {
                    left.combine(right)?;
                }
                Some(acc)
            }
        };
    }

    let bank = merged.unwrap_or_else(create_bank);
    Ok(bank.iter().map(|agg| agg.result()).collect())
}
