// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `NumArray`.

use tracing::debug;

use crate::data_repr::Buffer;
use crate::error::ArrayError;
use crate::{DType, Element, NumArray, Scalar};

/// # Constructor Methods
impl NumArray {
    /// Create an array from literal values, inferring the dtype.
    ///
    /// Integers alone give `int64`. Any float (NaN and the infinities
    /// included) among otherwise numeric values gives `float64`, and every
    /// integer is converted. Any text gives `object` and leaves every value
    /// as it was.
    ///
    /// ```
    /// use numarray::{DType, NumArray, Scalar};
    ///
    /// let a = NumArray::new(vec![Scalar::from(0), Scalar::from(0.1), Scalar::from(2)]);
    /// assert_eq!(a.dtype(), DType::Float64);
    /// assert_eq!(a.repr(), "array([0. , 0.1, 2. ])");
    /// ```
    pub fn new(values: Vec<Scalar>) -> NumArray {
        let buffer = Buffer::infer(values);
        debug!(len = buffer.len(), dtype = buffer.dtype().name(), "inferred dtype");
        NumArray::from_buffer(buffer)
    }

    /// Create an array from literal values with an explicit dtype.
    ///
    /// **Errors** with `ErrorKind::InvalidValue` if a value has no
    /// representation in `dtype` (NaN as an integer, unparsable text), and
    /// with `ErrorKind::Overflow` if it lies outside the range of `dtype`
    /// (an infinity as an integer).
    ///
    /// ```
    /// use numarray::{array, DType, ErrorKind};
    ///
    /// let a = array![-1, 2, 5; DType::Float32].unwrap();
    /// assert_eq!(a.repr(), "array([-1.,  2.,  5.], dtype=float32)");
    ///
    /// let err = array![numarray::NAN, 1, 2; DType::Int32].unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidValue);
    /// ```
    pub fn with_dtype(values: Vec<Scalar>, dtype: DType) -> Result<NumArray, ArrayError> {
        debug!(len = values.len(), dtype = dtype.name(), "constructing with explicit dtype");
        let buffer = match dtype {
            DType::Object => Buffer::Object(values),
            _ => Buffer::from_scalars(&values, dtype)?,
        };
        Ok(NumArray::from_buffer(buffer))
    }

    /// Create an array that takes ownership of typed values.
    ///
    /// ```
    /// use numarray::{DType, NumArray};
    ///
    /// let a = NumArray::from_vec(vec![1.5f32, 2.5]);
    /// assert_eq!(a.dtype(), DType::Float32);
    /// ```
    pub fn from_vec<T: Element>(values: Vec<T>) -> NumArray {
        NumArray::from_buffer(T::into_buffer(values))
    }
}

impl<T: Element> From<Vec<T>> for NumArray {
    fn from(values: Vec<T>) -> Self {
        NumArray::from_vec(values)
    }
}

impl FromIterator<Scalar> for NumArray {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Scalar>,
    {
        NumArray::new(iter.into_iter().collect())
    }
}
