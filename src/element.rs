// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Checked conversion of literal values into typed storage.

use std::fmt;

use num_traits::NumCast;

use crate::data_repr::Buffer;
use crate::error::ErrorKind;
use crate::{DType, Scalar};

/// A primitive type that a numeric dtype stores its elements as.
///
/// This trait is sealed: it is implemented for `i32`, `i64`, `f32` and
/// `f64` only.
pub trait Element: Copy + PartialEq + fmt::Debug + fmt::Display + private::Sealed + 'static {
    /// The dtype whose storage holds `Self`.
    const DTYPE: DType;

    /// Convert a literal into `Self`.
    ///
    /// Integer targets reject NaN with `InvalidValue` and infinities or
    /// out-of-range values with `Overflow`; finite floats are truncated
    /// toward zero. Text is parsed.
    fn from_scalar(value: &Scalar) -> Result<Self, ErrorKind>;

    /// Widen back into a literal.
    fn into_scalar(self) -> Scalar;

    #[doc(hidden)]
    fn into_buffer(values: Vec<Self>) -> Buffer;

    #[doc(hidden)]
    fn slice_of(buffer: &Buffer) -> Option<&[Self]>;
}

mod private {
    pub trait Sealed {}
}

fn int_from_float<T: NumCast>(x: f64) -> Result<T, ErrorKind> {
    if x.is_nan() {
        return Err(ErrorKind::InvalidValue);
    }
    // NumCast truncates toward zero and refuses infinities and values
    // outside the target range.
    <T as NumCast>::from(x).ok_or(ErrorKind::Overflow)
}

fn int_from_scalar<T: NumCast>(value: &Scalar) -> Result<T, ErrorKind> {
    match *value {
        Scalar::Int(i) => <T as NumCast>::from(i).ok_or(ErrorKind::Overflow),
        Scalar::Float(x) => int_from_float(x),
        Scalar::Text(ref s) => {
            let i = s.trim().parse::<i64>().map_err(|_| ErrorKind::InvalidValue)?;
            <T as NumCast>::from(i).ok_or(ErrorKind::Overflow)
        }
    }
}

fn float_from_scalar(value: &Scalar) -> Result<f64, ErrorKind> {
    match *value {
        Scalar::Int(i) => Ok(i as f64),
        Scalar::Float(x) => Ok(x),
        Scalar::Text(ref s) => s.trim().parse::<f64>().map_err(|_| ErrorKind::InvalidValue),
    }
}

macro_rules! impl_int_element {
    ($ty:ty, $dtype:ident) => {
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn from_scalar(value: &Scalar) -> Result<Self, ErrorKind> {
                int_from_scalar(value)
            }

            #[inline]
            fn into_scalar(self) -> Scalar {
                Scalar::Int(<i64 as From<$ty>>::from(self))
            }

            fn into_buffer(values: Vec<Self>) -> Buffer {
                Buffer::$dtype(values)
            }

            fn slice_of(buffer: &Buffer) -> Option<&[Self]> {
                match buffer {
                    Buffer::$dtype(values) => Some(values),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:ident) => {
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn from_scalar(value: &Scalar) -> Result<Self, ErrorKind> {
                // narrowing to f32 rounds, and saturates to infinity
                float_from_scalar(value).map(|x| x as $ty)
            }

            #[inline]
            fn into_scalar(self) -> Scalar {
                Scalar::Float(<f64 as From<$ty>>::from(self))
            }

            fn into_buffer(values: Vec<Self>) -> Buffer {
                Buffer::$dtype(values)
            }

            fn slice_of(buffer: &Buffer) -> Option<&[Self]> {
                match buffer {
                    Buffer::$dtype(values) => Some(values),
                    _ => None,
                }
            }
        }
    };
}

impl_int_element!(i32, Int32);
impl_int_element!(i64, Int64);
impl_float_element!(f32, Float32);
impl_float_element!(f64, Float64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{INF, NAN, NEG_INF};

    #[test]
    fn nan_to_int_is_invalid() {
        assert_eq!(i32::from_scalar(&Scalar::from(NAN)), Err(ErrorKind::InvalidValue));
        assert_eq!(i64::from_scalar(&Scalar::from(NAN)), Err(ErrorKind::InvalidValue));
    }

    #[test]
    fn inf_to_int_overflows() {
        assert_eq!(i32::from_scalar(&Scalar::from(INF)), Err(ErrorKind::Overflow));
        assert_eq!(i32::from_scalar(&Scalar::from(NEG_INF)), Err(ErrorKind::Overflow));
        assert_eq!(i32::from_scalar(&Scalar::from(1e10)), Err(ErrorKind::Overflow));
        assert_eq!(i32::from_scalar(&Scalar::from(i64::MAX)), Err(ErrorKind::Overflow));
    }

    #[test]
    fn float_to_int_truncates_toward_zero() {
        assert_eq!(i32::from_scalar(&Scalar::from(2.9)), Ok(2));
        assert_eq!(i32::from_scalar(&Scalar::from(-2.9)), Ok(-2));
        assert_eq!(i64::from_scalar(&Scalar::from(-0.5)), Ok(0));
    }

    #[test]
    fn text_is_parsed() {
        assert_eq!(i32::from_scalar(&Scalar::from(" 42 ")), Ok(42));
        assert_eq!(i32::from_scalar(&Scalar::from("1.5")), Err(ErrorKind::InvalidValue));
        assert_eq!(f64::from_scalar(&Scalar::from("1.5")), Ok(1.5));
        assert!(f64::from_scalar(&Scalar::from("nan")).unwrap().is_nan());
        assert_eq!(f32::from_scalar(&Scalar::from("abc")), Err(ErrorKind::InvalidValue));
    }

    #[test]
    fn float_widening() {
        assert_eq!(f32::from_scalar(&Scalar::from(-1)), Ok(-1.));
        assert_eq!(f32::from_scalar(&Scalar::from(1e300)), Ok(f32::INFINITY));
        assert_eq!(0.5f32.into_scalar(), Scalar::Float(0.5));
    }

    #[test]
    fn into_scalar_widens() {
        assert_eq!((-7i32).into_scalar(), Scalar::Int(-7));
        assert_eq!(i64::MAX.into_scalar(), Scalar::Int(i64::MAX));
        assert!(f32::NAN.into_scalar().is_nan());
        assert_eq!(f64::NEG_INFINITY.into_scalar(), Scalar::Float(f64::NEG_INFINITY));
    }
}
