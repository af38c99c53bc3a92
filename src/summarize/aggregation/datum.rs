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
use arrow::datatypes::DataType;

use crate::common::datum::Datum;
use crate::summarize::summary::ColumnSummary;

use super::SummaryAggregator;

/// Unwrap step from the type-erased [`Datum`] representation to a native
/// element. `None` for `Datum::Null` and for a payload variant that does not
/// match the expected type.
pub trait FromDatum: Sized {
    fn from_datum(datum: &Datum) -> Option<Self>;
}

macro_rules! from_datum {
    ($native:ty, $variant:ident) => {
        impl FromDatum for $native {
            fn from_datum(datum: &Datum) -> Option<Self> {
                match datum {
                    Datum::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

from_datum!(bool, Boolean);
from_datum!(i8, Int8);
from_datum!(i16, Int16);
from_datum!(i32, Int32);
from_datum!(i64, Int64);
from_datum!(u8, UInt8);
from_datum!(u16, UInt16);
from_datum!(u32, UInt32);
from_datum!(u64, UInt64);
from_datum!(f32, Float32);
from_datum!(f64, Float64);

/// The boxed-representation counterpart of [`SummaryAggregator`]: the same
/// aggregators behind a [`Datum`] unwrap step instead of Arrow arrays.
/// Aggregation semantics are identical; a datum whose payload does not match
/// the column's declared type counts as null, mirroring the factory's
/// never-reject stance (the engine's planner owns type agreement).
#[derive(Clone, Debug)]
pub struct DatumSummaryAggregator {
    inner: SummaryAggregator,
}

impl DatumSummaryAggregator {
    /// Factory over the same dispatch table as [`SummaryAggregator::create`].
    pub fn create(data_type: &DataType) -> DatumSummaryAggregator {
        DatumSummaryAggregator {
            inner: SummaryAggregator::create(data_type),
        }
    }

    pub fn aggregate(&mut self, datum: &Datum) {
        match &mut self.inner {
            SummaryAggregator::Boolean(agg) => agg.aggregate(bool::from_datum(datum)),
            SummaryAggregator::Int8(agg) => agg.aggregate(i8::from_datum(datum)),
            SummaryAggregator::Int16(agg) => agg.aggregate(i16::from_datum(datum)),
            SummaryAggregator::Int32(agg) => agg.aggregate(i32::from_datum(datum)),
            SummaryAggregator::Int64(agg) => agg.aggregate(i64::from_datum(datum)),
            SummaryAggregator::UInt8(agg) => agg.aggregate(u8::from_datum(datum)),
            SummaryAggregator::UInt16(agg) => agg.aggregate(u16::from_datum(datum)),
            SummaryAggregator::UInt32(agg) => agg.aggregate(u32::from_datum(datum)),
            SummaryAggregator::UInt64(agg) => agg.aggregate(u64::from_datum(datum)),
            SummaryAggregator::Float32(agg) => agg.aggregate(f32::from_datum(datum)),
            SummaryAggregator::Float64(agg) => agg.aggregate(f64::from_datum(datum)),
            SummaryAggregator::Utf8(agg) => agg.aggregate(match datum {
                Datum::Utf8(s) => Some(s.as_str()),
                _ => None,
            }),
            SummaryAggregator::Object(agg) => agg.aggregate(datum.is_null()),
        }
    }

    pub fn combine(&mut self, other: &DatumSummaryAggregator) -> Result<(), String> {
        self.inner.combine(&other.inner)
    }

    pub fn result(&self) -> ColumnSummary {
        self.inner.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_matches_native_semantics() {
        let mut agg = DatumSummaryAggregator::create(&DataType::Int32);
        for datum in [
            Datum::Int32(1),
            Datum::Null,
            Datum::Int32(-5),
            Datum::Utf8("stray".to_string()),
        ] {
            agg.aggregate(&datum);
        }
        let ColumnSummary::Int32(summary) = agg.result() else {
            panic!("expected int32 summary");
        };
        assert_eq!(summary.non_missing_count, 2);
        // The mismatched payload counts as null alongside the real null.
        assert_eq!(summary.null_count, 2);
        assert_eq!(summary.sum, Some(-4));
    }
}
