// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element type tags.

use std::fmt;
use std::str::FromStr;

use crate::Scalar;

/// The declared element representation of a [`NumArray`](crate::NumArray).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer; what integer literals infer to
    Int64,
    /// 32-bit IEEE float
    Float32,
    /// 64-bit IEEE float; what mixed or floating literals infer to
    Float64,
    /// Generic elements of any kind, stored as [`Scalar`]
    Object,
}

impl DType {
    /// The integer dtype chosen by inference.
    pub const DEFAULT_INT: DType = DType::Int64;
    /// The floating dtype chosen by inference.
    pub const DEFAULT_FLOAT: DType = DType::Float64;

    /// Name as printed by `repr` and `Display`, e.g. `"float32"`.
    pub fn name(self) -> &'static str {
        match self {
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Object => "object",
        }
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, DType::Int32 | DType::Int64)
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Whether NaN and infinities can be stored.
    #[inline]
    pub fn holds_special_values(self) -> bool {
        !self.is_integer()
    }

    /// Whether `repr` omits the `dtype=` suffix for this dtype.
    pub(crate) fn is_repr_default(self) -> bool {
        self == DType::DEFAULT_INT || self == DType::DEFAULT_FLOAT
    }

    /// Resolve the dtype of a literal sequence.
    ///
    /// All integers give the default integer dtype, any floating-point
    /// element (sentinels included) among numbers gives the default float
    /// dtype, and any text element gives `Object`. An empty sequence is
    /// floating point.
    pub fn infer(values: &[Scalar]) -> DType {
        let mut dtype = DType::DEFAULT_INT;
        for value in values {
            match value {
                Scalar::Int(_) => {}
                Scalar::Float(_) => dtype = DType::DEFAULT_FLOAT,
                Scalar::Text(_) => {
                    dtype = DType::Object;
                    break;
                }
            }
        }
        if values.is_empty() {
            dtype = DType::DEFAULT_FLOAT;
        }
        dtype
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown dtype name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDTypeError(String);

impl fmt::Display for ParseDTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dtype {:?}", self.0)
    }
}

impl std::error::Error for ParseDTypeError {}

impl FromStr for DType {
    type Err = ParseDTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int32" => Ok(DType::Int32),
            "int64" => Ok(DType::Int64),
            "float32" => Ok(DType::Float32),
            "float64" => Ok(DType::Float64),
            "object" => Ok(DType::Object),
            other => Err(ParseDTypeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NAN;

    #[test]
    fn infer_integers() {
        assert_eq!(DType::infer(&[Scalar::from(1), Scalar::from(2)]), DType::Int64);
    }

    #[test]
    fn infer_mixed() {
        assert_eq!(DType::infer(&[Scalar::from(0), Scalar::from(0.1)]), DType::Float64);
        assert_eq!(DType::infer(&[Scalar::from(NAN), Scalar::from(1)]), DType::Float64);
    }

    #[test]
    fn infer_text() {
        assert_eq!(DType::infer(&[Scalar::from(NAN), Scalar::from("abc")]), DType::Object);
    }

    #[test]
    fn infer_empty() {
        assert_eq!(DType::infer(&[]), DType::Float64);
    }

    #[test]
    fn name_round_trip() {
        for dtype in [DType::Int32, DType::Int64, DType::Float32, DType::Float64, DType::Object] {
            assert_eq!(dtype.name().parse::<DType>(), Ok(dtype));
        }
        assert!("complex128".parse::<DType>().is_err());
    }
}
