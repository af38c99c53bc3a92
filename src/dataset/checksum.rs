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
use crate::common::datum::Datum;

use super::PartitionedSource;

/// Hash code used by the checksum reduction. Integers hash to their own
/// value (sign-extended), so for a collection of distinct small non-negative
/// integers the checksum equals their sum.
pub trait ChecksumHash {
    fn checksum_hash(&self) -> u64;
}

macro_rules! checksum_hash_int {
    ($native:ty) => {
        impl ChecksumHash for $native {
            fn checksum_hash(&self) -> u64 {
                *self as i64 as u64
            }
        }
    };
}

checksum_hash_int!(i8);
checksum_hash_int!(i16);
checksum_hash_int!(i32);
checksum_hash_int!(i64);

macro_rules! checksum_hash_uint {
    ($native:ty) => {
        impl ChecksumHash for $native {
            fn checksum_hash(&self) -> u64 {
                *self as u64
            }
        }
    };
}

checksum_hash_uint!(u8);
checksum_hash_uint!(u16);
checksum_hash_uint!(u32);
checksum_hash_uint!(u64);

impl ChecksumHash for bool {
    fn checksum_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl ChecksumHash for f32 {
    fn checksum_hash(&self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl ChecksumHash for f64 {
    fn checksum_hash(&self) -> u64 {
        let bits = self.to_bits();
        bits ^ (bits >> 32)
    }
}

impl ChecksumHash for str {
    fn checksum_hash(&self) -> u64 {
        // Base-31 polynomial over scalar values.
        self.chars()
            .fold(0u64, |h, c| h.wrapping_mul(31).wrapping_add(c as u64))
    }
}

impl ChecksumHash for String {
    fn checksum_hash(&self) -> u64 {
        self.as_str().checksum_hash()
    }
}

impl ChecksumHash for Datum {
    fn checksum_hash(&self) -> u64 {
        match self {
            Datum::Null => 0,
            Datum::Boolean(v) => v.checksum_hash(),
            Datum::Int8(v) => v.checksum_hash(),
            Datum::Int16(v) => v.checksum_hash(),
            Datum::Int32(v) => v.checksum_hash(),
            Datum::Int64(v) => v.checksum_hash(),
            Datum::UInt8(v) => v.checksum_hash(),
            Datum::UInt16(v) => v.checksum_hash(),
            Datum::UInt32(v) => v.checksum_hash(),
            Datum::UInt64(v) => v.checksum_hash(),
            Datum::Float32(v) => v.checksum_hash(),
            Datum::Float64(v) => v.checksum_hash(),
            Datum::Utf8(v) => v.checksum_hash(),
        }
    }
}

/// Element count and combined hash checksum of a collection. Partial results
/// combine associatively and commutatively, so the engine may fold or
/// tree-merge them in any grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChecksumHashCode {
    count: u64,
    checksum: u64,
}

impl ChecksumHashCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn checksum(&self) -> u64 {
        self.checksum
    }

    pub fn add<T: ChecksumHash + ?Sized>(&mut self, element: &T) {
        self.count += 1;
        self.checksum = self.checksum.wrapping_add(element.checksum_hash());
    }

    pub fn combine(&mut self, other: &ChecksumHashCode) {
        self.count += other.count;
        self.checksum = self.checksum.wrapping_add(other.checksum);
    }
}

/// Reduce a partitioned collection to `(count, checksum)`. Never rejects
/// input; upstream failures are the engine's concern.
pub fn checksum_hash_code<T, S>(source: &S) -> ChecksumHashCode
where
    T: ChecksumHash,
    S: PartitionedSource<T>,
{
    let mut total = ChecksumHashCode::new();
    for p in 0..source.partition_count() {
        let mut partial = ChecksumHashCode::new();
        for element in source.partition(p) {
            partial.add(&element);
        }
        total.combine(&partial);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_hash_is_value() {
        assert_eq!(7i32.checksum_hash(), 7);
        assert_eq!(7u64.checksum_hash(), 7);
        assert_eq!((-1i32).checksum_hash(), u64::MAX);
    }

    #[test]
    fn test_combine_commutes() {
        let mut a = ChecksumHashCode::new();
        a.add(&1i64);
        a.add(&2i64);
        let mut b = ChecksumHashCode::new();
        b.add(&3i64);

        let mut ab = a;
        ab.combine(&b);
        let mut ba = b;
        ba.combine(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab.count(), 3);
        assert_eq!(ab.checksum(), 6);
    }

    #[test]
    fn test_checksum_wraps() {
        let mut acc = ChecksumHashCode::new();
        acc.add(&u64::MAX);
        acc.add(&2u64);
        assert_eq!(acc.checksum(), 1);
    }
}
