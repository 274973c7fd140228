// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::{DType, Element, Scalar};

/// Typed element storage; the variant is the dtype.
#[derive(Clone, Debug, PartialEq)]
pub enum Buffer {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Object(Vec<Scalar>),
}

/// Run `$body` with `$v` bound to the typed vector, whatever the variant.
macro_rules! with_buffer {
    ($buffer:expr, $v:ident => $body:expr) => {
        match $buffer {
            Buffer::Int32($v) => $body,
            Buffer::Int64($v) => $body,
            Buffer::Float32($v) => $body,
            Buffer::Float64($v) => $body,
            Buffer::Object($v) => $body,
        }
    };
}

fn collect<T: Element>(values: &[Scalar]) -> Result<Vec<T>, ArrayError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| T::from_scalar(value).map_err(|kind| from_kind(kind).at(i)))
        .collect()
}

impl Buffer {
    /// Build storage of `dtype` from literals, converting each one.
    pub fn from_scalars(values: &[Scalar], dtype: DType) -> Result<Buffer, ArrayError> {
        Ok(match dtype {
            DType::Int32 => Buffer::Int32(collect(values)?),
            DType::Int64 => Buffer::Int64(collect(values)?),
            DType::Float32 => Buffer::Float32(collect(values)?),
            DType::Float64 => Buffer::Float64(collect(values)?),
            DType::Object => Buffer::Object(values.to_vec()),
        })
    }

    /// Build storage for literals under the dtype `DType::infer` picks.
    ///
    /// Each dtype is tried in inference order, so a literal that does not
    /// fit one falls through to the next and none is ever converted lossily.
    pub fn infer(values: Vec<Scalar>) -> Buffer {
        if values.is_empty() {
            return Buffer::Float64(Vec::new());
        }
        let ints: Option<Vec<i64>> = values
            .iter()
            .map(|value| match *value {
                Scalar::Int(i) => Some(i),
                _ => None,
            })
            .collect();
        if let Some(ints) = ints {
            return Buffer::Int64(ints);
        }
        let floats: Option<Vec<f64>> = values.iter().map(Scalar::as_f64).collect();
        match floats {
            Some(floats) => Buffer::Float64(floats),
            None => Buffer::Object(values),
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Buffer::Int32(_) => DType::Int32,
            Buffer::Int64(_) => DType::Int64,
            Buffer::Float32(_) => DType::Float32,
            Buffer::Float64(_) => DType::Float64,
            Buffer::Object(_) => DType::Object,
        }
    }

    pub fn len(&self) -> usize {
        with_buffer!(self, v => v.len())
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        match self {
            Buffer::Int32(v) => v.get(index).map(|&x| x.into_scalar()),
            Buffer::Int64(v) => v.get(index).map(|&x| x.into_scalar()),
            Buffer::Float32(v) => v.get(index).map(|&x| x.into_scalar()),
            Buffer::Float64(v) => v.get(index).map(|&x| x.into_scalar()),
            Buffer::Object(v) => v.get(index).cloned(),
        }
    }

    /// Store `value` at `index`, converted to this buffer's dtype.
    pub fn set(&mut self, index: usize, value: &Scalar) -> Result<(), ArrayError> {
        fn store<T: Element>(v: &mut [T], index: usize, value: &Scalar) -> Result<(), ArrayError> {
            let slot = v.get_mut(index).ok_or_else(|| from_kind(ErrorKind::OutOfBounds).at(index))?;
            *slot = T::from_scalar(value).map_err(|kind| from_kind(kind).at(index))?;
            Ok(())
        }
        match self {
            Buffer::Int32(v) => store(v, index, value),
            Buffer::Int64(v) => store(v, index, value),
            Buffer::Float32(v) => store(v, index, value),
            Buffer::Float64(v) => store(v, index, value),
            Buffer::Object(v) => {
                let slot = v
                    .get_mut(index)
                    .ok_or_else(|| from_kind(ErrorKind::OutOfBounds).at(index))?;
                *slot = value.clone();
                Ok(())
            }
        }
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        match self {
            Buffer::Int32(v) => v.iter().map(|&x| x.into_scalar()).collect(),
            Buffer::Int64(v) => v.iter().map(|&x| x.into_scalar()).collect(),
            Buffer::Float32(v) => v.iter().map(|&x| x.into_scalar()).collect(),
            Buffer::Float64(v) => v.iter().map(|&x| x.into_scalar()).collect(),
            Buffer::Object(v) => v.clone(),
        }
    }

    /// Convert every element to `dtype` into fresh storage.
    pub fn cast(&self, dtype: DType) -> Result<Buffer, ArrayError> {
        if dtype == self.dtype() {
            return Ok(self.clone());
        }
        Buffer::from_scalars(&self.to_scalars(), dtype)
    }

    /// Apply `f` to each element viewed as `f64`; text maps to `false`.
    pub fn mask<F>(&self, f: F) -> Vec<bool>
    where
        F: Fn(f64) -> bool,
    {
        match self {
            Buffer::Int32(v) => v.iter().map(|&x| f(f64::from(x))).collect(),
            Buffer::Int64(v) => v.iter().map(|&x| f(x as f64)).collect(),
            Buffer::Float32(v) => v.iter().map(|&x| f(f64::from(x))).collect(),
            Buffer::Float64(v) => v.iter().map(|&x| f(x)).collect(),
            Buffer::Object(v) => v.iter().map(|x| x.as_f64().map_or(false, &f)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NAN;

    #[test]
    fn cast_reports_element_index() {
        let buffer = Buffer::Float64(vec![1., 2., NAN]);
        let err = buffer.cast(DType::Int32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.index(), Some(2));
    }

    #[test]
    fn set_out_of_bounds() {
        let mut buffer = Buffer::Int64(vec![0, 1]);
        let err = buffer.set(2, &Scalar::from(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(buffer, Buffer::Int64(vec![0, 1]));
    }

    #[test]
    fn rejected_set_leaves_element() {
        let mut buffer = Buffer::Int32(vec![7]);
        assert!(buffer.set(0, &Scalar::nan()).is_err());
        assert_eq!(buffer.get(0), Some(Scalar::Int(7)));
    }

    #[test]
    fn infer_agrees_with_dtype_rule() {
        let cases = vec![
            vec![],
            vec![Scalar::from(1), Scalar::from(-2)],
            vec![Scalar::from(0), Scalar::from(0.1), Scalar::from(2)],
            vec![Scalar::nan(), Scalar::from(1)],
            vec![Scalar::from(1), Scalar::from("abc"), Scalar::from(2.5)],
        ];
        for values in cases {
            let buffer = Buffer::infer(values.clone());
            assert_eq!(buffer.dtype(), DType::infer(&values));
            assert_eq!(buffer.len(), values.len());
        }
    }

    #[test]
    fn infer_converts_ints_beside_floats() {
        let buffer = Buffer::infer(vec![Scalar::from(i64::MAX), Scalar::from(0.5)]);
        assert_eq!(buffer, Buffer::Float64(vec![i64::MAX as f64, 0.5]));
        let buffer = Buffer::infer(vec![Scalar::from(3), Scalar::from("3")]);
        assert_eq!(buffer, Buffer::Object(vec![Scalar::Int(3), Scalar::from("3")]));
    }

    #[test]
    fn object_keeps_values() {
        let values = vec![Scalar::nan(), Scalar::from("abc")];
        let buffer = Buffer::from_scalars(&values, DType::Object).unwrap();
        assert_eq!(buffer.len(), 2);
        assert!(buffer.get(0).unwrap().is_nan());
        assert_eq!(buffer.get(1), Some(Scalar::from("abc")));
        assert_eq!(buffer.mask(f64::is_nan), vec![true, false]);
    }
}
