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

//! Immutable per-column summary records. Statistical fields are `Option`s:
//! `None` means "no contributing values existed", which is distinct from a
//! computed zero.

/// Summary of a numeric column.
///
/// A value is "missing" when it is null, NaN, or infinite; missing values are
/// excluded from min/max/sum/mean/variance but counted separately. For
/// integral element types `nan_count` and `infinity_count` are always zero.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericColumnSummary<T> {
    pub non_missing_count: u64,
    pub null_count: u64,
    pub nan_count: u64,
    pub infinity_count: u64,
    pub min: Option<T>,
    pub max: Option<T>,
    pub sum: Option<T>,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub standard_deviation: Option<f64>,
}

impl<T> NumericColumnSummary<T> {
    pub fn missing_count(&self) -> u64 {
        self.null_count + self.nan_count + self.infinity_count
    }

    pub fn non_null_count(&self) -> u64 {
        self.non_missing_count + self.nan_count + self.infinity_count
    }

    pub fn total_count(&self) -> u64 {
        self.non_null_count() + self.null_count
    }
}

/// Summary of a string column. Lengths are counted in Unicode scalar values;
/// `empty_count` counts zero-length non-null values.
#[derive(Clone, Debug, PartialEq)]
pub struct StringColumnSummary {
    pub non_null_count: u64,
    pub null_count: u64,
    pub empty_count: u64,
    pub min_string_length: Option<u64>,
    pub max_string_length: Option<u64>,
    pub mean_length: Option<f64>,
}

impl StringColumnSummary {
    pub fn total_count(&self) -> u64 {
        self.non_null_count + self.null_count
    }
}

/// Summary of a boolean column: value counts only, no min/max/sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanColumnSummary {
    pub true_count: u64,
    pub false_count: u64,
    pub null_count: u64,
}

impl BooleanColumnSummary {
    pub fn non_null_count(&self) -> u64 {
        self.true_count + self.false_count
    }

    pub fn total_count(&self) -> u64 {
        self.non_null_count() + self.null_count
    }
}

/// Fallback summary for element types with no specialized aggregator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectColumnSummary {
    pub non_null_count: u64,
    pub null_count: u64,
}

impl ObjectColumnSummary {
    pub fn total_count(&self) -> u64 {
        self.non_null_count + self.null_count
    }
}

/// One column's summary, tagged by element kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnSummary {
    Boolean(BooleanColumnSummary),
    Int8(NumericColumnSummary<i8>),
    Int16(NumericColumnSummary<i16>),
    Int32(NumericColumnSummary<i32>),
    Int64(NumericColumnSummary<i64>),
    UInt8(NumericColumnSummary<u8>),
    UInt16(NumericColumnSummary<u16>),
    UInt32(NumericColumnSummary<u32>),
    UInt64(NumericColumnSummary<u64>),
    Float32(NumericColumnSummary<f32>),
    Float64(NumericColumnSummary<f64>),
    Utf8(StringColumnSummary),
    Object(ObjectColumnSummary),
}

impl ColumnSummary {
    pub fn total_count(&self) -> u64 {
        match self {
            ColumnSummary::Boolean(s) => s.total_count(),
            ColumnSummary::Int8(s) => s.total_count(),
            ColumnSummary::Int16(s) => s.total_count(),
            ColumnSummary::Int32(s) => s.total_count(),
            ColumnSummary::Int64(s) => s.total_count(),
            ColumnSummary::UInt8(s) => s.total_count(),
            ColumnSummary::UInt16(s) => s.total_count(),
            ColumnSummary::UInt32(s) => s.total_count(),
            ColumnSummary::UInt64(s) => s.total_count(),
            ColumnSummary::Float32(s) => s.total_count(),
            ColumnSummary::Float64(s) => s.total_count(),
            ColumnSummary::Utf8(s) => s.total_count(),
            ColumnSummary::Object(s) => s.total_count(),
        }
    }

    pub fn null_count(&self) -> u64 {
        match self {
            ColumnSummary::Boolean(s) => s.null_count,
            ColumnSummary::Int8(s) => s.null_count,
            ColumnSummary::Int16(s) => s.null_count,
            ColumnSummary::Int32(s) => s.null_count,
            ColumnSummary::Int64(s) => s.null_count,
            ColumnSummary::UInt8(s) => s.null_count,
            ColumnSummary::UInt16(s) => s.null_count,
            ColumnSummary::UInt32(s) => s.null_count,
            ColumnSummary::UInt64(s) => s.null_count,
            ColumnSummary::Float32(s) => s.null_count,
            ColumnSummary::Float64(s) => s.null_count,
            ColumnSummary::Utf8(s) => s.null_count,
            ColumnSummary::Object(s) => s.null_count,
        }
    }

    pub fn non_null_count(&self) -> u64 {
        self.total_count() - self.null_count()
    }
}
