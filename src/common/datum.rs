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
use std::fmt;

/// Type-erased scalar value, the row-oriented element representation used
/// when column values travel through the engine one record at a time rather
/// than as Arrow arrays.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Utf8(String),
}

impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Null => write!(f, "NULL"),
            Datum::Boolean(v) => write!(f, "{v}"),
            Datum::Int8(v) => write!(f, "{v}"),
            Datum::Int16(v) => write!(f, "{v}"),
            Datum::Int32(v) => write!(f, "{v}"),
            Datum::Int64(v) => write!(f, "{v}"),
            Datum::UInt8(v) => write!(f, "{v}"),
            Datum::UInt16(v) => write!(f, "{v}"),
            Datum::UInt32(v) => write!(f, "{v}"),
            Datum::UInt64(v) => write!(f, "{v}"),
            Datum::Float32(v) => write!(f, "{v}"),
            Datum::Float64(v) => write!(f, "{v}"),
            Datum::Utf8(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! datum_from {
    ($native:ty, $variant:ident) => {
        impl From<$native> for Datum {
            fn from(value: $native) -> Self {
                Datum::$variant(value)
            }
        }
    };
}

datum_from!(bool, Boolean);
datum_from!(i8, Int8);
datum_from!(i16, Int16);
datum_from!(i32, Int32);
datum_from!(i64, Int64);
datum_from!(u8, UInt8);
datum_from!(u16, UInt16);
datum_from!(u32, UInt32);
datum_from!(u64, UInt64);
datum_from!(f32, Float32);
datum_from!(f64, Float64);
datum_from!(String, Utf8);

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Utf8(value.to_string())
    }
}

impl<T> From<Option<T>> for Datum
where
    T: Into<Datum>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Datum::Null,
        }
    }
}
