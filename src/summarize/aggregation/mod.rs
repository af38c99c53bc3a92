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
use arrow::array::{Array, ArrayRef, BooleanArray, LargeStringArray, PrimitiveArray, StringArray};
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type,
    Int64Type, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};

use crate::summarize::summary::ColumnSummary;

mod boolean;
mod datum;
mod numeric;
mod object;
mod string;

pub use boolean::BooleanSummaryAggregator;
pub use datum::{DatumSummaryAggregator, FromDatum};
pub use numeric::{KahanSum, MomentState, NumericElement, NumericSummaryAggregator};
pub use object::ObjectSummaryAggregator;
pub use string::StringSummaryAggregator;

/// One column's online summary aggregator, tagged by element kind.
///
/// Created by the [`create`] factory, fed per Arrow array with
/// [`update_array`] (or element-at-a-time through the variant's inner
/// aggregator), merged across partitions with [`combine`], finalized with
/// [`result`].
///
/// [`create`]: SummaryAggregator::create
/// [`update_array`]: SummaryAggregator::update_array
/// [`combine`]: SummaryAggregator::combine
/// [`result`]: SummaryAggregator::result
#[derive(Clone, Debug)]
pub enum SummaryAggregator {
    Boolean(BooleanSummaryAggregator),
    Int8(NumericSummaryAggregator<i8>),
    Int16(NumericSummaryAggregator<i16>),
    Int32(NumericSummaryAggregator<i32>),
    Int64(NumericSummaryAggregator<i64>),
    UInt8(NumericSummaryAggregator<u8>),
    UInt16(NumericSummaryAggregator<u16>),
    UInt32(NumericSummaryAggregator<u32>),
    UInt64(NumericSummaryAggregator<u64>),
    Float32(NumericSummaryAggregator<f32>),
    Float64(NumericSummaryAggregator<f64>),
    Utf8(StringSummaryAggregator),
    Object(ObjectSummaryAggregator),
}

fn update_primitive<P>(
    agg: &mut NumericSummaryAggregator<P::Native>,
    array: &ArrayRef,
) -> Result<(), String>
where
    P: ArrowPrimitiveType,
    P::Native: NumericElement,
{
    let arr = array
        .as_any()
        .downcast_ref::<PrimitiveArray<P>>()
        .ok_or_else(|| format!("failed to downcast to {:?} array", P::DATA_TYPE))?;
    for row in 0..arr.len() {
        agg.aggregate((!arr.is_null(row)).then(|| arr.value(row)));
    }
    Ok(())
}

fn update_utf8(agg: &mut StringSummaryAggregator, array: &ArrayRef) -> Result<(), String> {
    match array.data_type() {
        DataType::Utf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| "failed to downcast to StringArray".to_string())?;
            for row in 0..arr.len() {
                agg.aggregate((!arr.is_null(row)).then(|| arr.value(row)));
            }
            Ok(())
        }
        DataType::LargeUtf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .ok_or_else(|| "failed to downcast to LargeStringArray".to_string())?;
            for row in 0..arr.len() {
                agg.aggregate((!arr.is_null(row)).then(|| arr.value(row)));
            }
            Ok(())
        }
        other => Err(format!("string summary input type mismatch: {:?}", other)),
    }
}

impl SummaryAggregator {
    /// Factory: map a column's type descriptor to a fresh aggregator. Total
    /// by construction; any type without a specialized variant falls back to
    /// the object aggregator, so no column type is ever rejected.
    pub fn create(data_type: &DataType) -> SummaryAggregator {
        match data_type {
            DataType::Boolean => SummaryAggregator::Boolean(BooleanSummaryAggregator::new()),
            DataType::Int8 => SummaryAggregator::Int8(NumericSummaryAggregator::new()),
            DataType::Int16 => SummaryAggregator::Int16(NumericSummaryAggregator::new()),
            DataType::Int32 => SummaryAggregator::Int32(NumericSummaryAggregator::new()),
            DataType::Int64 => SummaryAggregator::Int64(NumericSummaryAggregator::new()),
            DataType::UInt8 => SummaryAggregator::UInt8(NumericSummaryAggregator::new()),
            DataType::UInt16 => SummaryAggregator::UInt16(NumericSummaryAggregator::new()),
            DataType::UInt32 => SummaryAggregator::UInt32(NumericSummaryAggregator::new()),
            DataType::UInt64 => SummaryAggregator::UInt64(NumericSummaryAggregator::new()),
            DataType::Float32 => SummaryAggregator::Float32(NumericSummaryAggregator::new()),
            DataType::Float64 => SummaryAggregator::Float64(NumericSummaryAggregator::new()),
            DataType::Utf8 | DataType::LargeUtf8 => {
                SummaryAggregator::Utf8(StringSummaryAggregator::new())
            }
            _ => SummaryAggregator::Object(ObjectSummaryAggregator::new()),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SummaryAggregator::Boolean(_) => "boolean",
            SummaryAggregator::Int8(_) => "int8",
            SummaryAggregator::Int16(_) => "int16",
            SummaryAggregator::Int32(_) => "int32",
            SummaryAggregator::Int64(_) => "int64",
            SummaryAggregator::UInt8(_) => "uint8",
            SummaryAggregator::UInt16(_) => "uint16",
            SummaryAggregator::UInt32(_) => "uint32",
            SummaryAggregator::UInt64(_) => "uint64",
            SummaryAggregator::Float32(_) => "float32",
            SummaryAggregator::Float64(_) => "float64",
            SummaryAggregator::Utf8(_) => "utf8",
            SummaryAggregator::Object(_) => "object",
        }
    }

    /// Feed one Arrow array: every slot aggregates, validity-bitmap nulls as
    /// nulls. Errors only when the array's type does not match this
    /// aggregator's variant.
    pub fn update_array(&mut self, array: &ArrayRef) -> Result<(), String> {
        match self {
            SummaryAggregator::Boolean(agg) => {
                let arr = array
                    .as_any()
                    .downcast_ref::<BooleanArray>()
                    .ok_or_else(|| "failed to downcast to BooleanArray".to_string())?;
                for row in 0..arr.len() {
                    agg.aggregate((!arr.is_null(row)).then(|| arr.value(row)));
                }
                Ok(())
            }
            SummaryAggregator::Int8(agg) => update_primitive::<Int8Type>(agg, array),
            SummaryAggregator::Int16(agg) => update_primitive::<Int16Type>(agg, array),
            SummaryAggregator::Int32(agg) => update_primitive::<Int32Type>(agg, array),
            SummaryAggregator::Int64(agg) => update_primitive::<Int64Type>(agg, array),
            SummaryAggregator::UInt8(agg) => update_primitive::<UInt8Type>(agg, array),
            SummaryAggregator::UInt16(agg) => update_primitive::<UInt16Type>(agg, array),
            SummaryAggregator::UInt32(agg) => update_primitive::<UInt32Type>(agg, array),
            SummaryAggregator::UInt64(agg) => update_primitive::<UInt64Type>(agg, array),
            SummaryAggregator::Float32(agg) => update_primitive::<Float32Type>(agg, array),
            SummaryAggregator::Float64(agg) => update_primitive::<Float64Type>(agg, array),
            SummaryAggregator::Utf8(agg) => update_utf8(agg, array),
            SummaryAggregator::Object(agg) => {
                for row in 0..array.len() {
                    agg.aggregate(array.is_null(row));
                }
                Ok(())
            }
        }
    }

    /// Merge another partition's partial state. Errors only on variant
    /// mismatch.
    pub fn combine(&mut self, other: &SummaryAggregator) -> Result<(), String> {
        match (self, other) {
            (SummaryAggregator::Boolean(a), SummaryAggregator::Boolean(b)) => a.combine(b),
            (SummaryAggregator::Int8(a), SummaryAggregator::Int8(b)) => a.combine(b),
            (SummaryAggregator::Int16(a), SummaryAggregator::Int16(b)) => a.combine(b),
            (SummaryAggregator::Int32(a), SummaryAggregator::Int32(b)) => a.combine(b),
            (SummaryAggregator::Int64(a), SummaryAggregator::Int64(b)) => a.combine(b),
            (SummaryAggregator::UInt8(a), SummaryAggregator::UInt8(b)) => a.combine(b),
            (SummaryAggregator::UInt16(a), SummaryAggregator::UInt16(b)) => a.combine(b),
            (SummaryAggregator::UInt32(a), SummaryAggregator::UInt32(b)) => a.combine(b),
            (SummaryAggregator::UInt64(a), SummaryAggregator::UInt64(b)) => a.combine(b),
            (SummaryAggregator::Float32(a), SummaryAggregator::Float32(b)) => a.combine(b),
            (SummaryAggregator::Float64(a), SummaryAggregator::Float64(b)) => a.combine(b),
            (SummaryAggregator::Utf8(a), SummaryAggregator::Utf8(b)) => a.combine(b),
            (SummaryAggregator::Object(a), SummaryAggregator::Object(b)) => a.combine(b),
            (a, b) => {
                return Err(format!(
                    "summary aggregator variant mismatch: {} vs {}",
                    a.kind(),
                    b.kind()
                ));
            }
        }
        Ok(())
    }

    /// Finalize into an immutable summary. Idempotent.
    pub fn result(&self) -> ColumnSummary {
        match self {
            SummaryAggregator::Boolean(agg) => ColumnSummary::Boolean(agg.result()),
            SummaryAggregator::Int8(agg) => ColumnSummary::Int8(agg.result()),
            SummaryAggregator::Int16(agg) => ColumnSummary::Int16(agg.result()),
            SummaryAggregator::Int32(agg) => ColumnSummary::Int32(agg.result()),
            SummaryAggregator::Int64(agg) => ColumnSummary::Int64(agg.result()),
            SummaryAggregator::UInt8(agg) => ColumnSummary::UInt8(agg.result()),
            SummaryAggregator::UInt16(agg) => ColumnSummary::UInt16(agg.result()),
            SummaryAggregator::UInt32(agg) => ColumnSummary::UInt32(agg.result()),
            SummaryAggregator::UInt64(agg) => ColumnSummary::UInt64(agg.result()),
            SummaryAggregator::Float32(agg) => ColumnSummary::Float32(agg.result()),
            SummaryAggregator::Float64(agg) => ColumnSummary::Float64(agg.result()),
            SummaryAggregator::Utf8(agg) => ColumnSummary::Utf8(agg.result()),
            SummaryAggregator::Object(agg) => ColumnSummary::Object(agg.result()),
        }
    }
}
