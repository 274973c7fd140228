// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Element, NumArray};

/// Create a [**`NumArray`**](struct.NumArray.html) from literal elements.
///
/// Each element is converted with `Scalar::from`, so integers, floats,
/// the sentinels and strings can be mixed freely:
///
/// ```
/// use numarray::{array, DType, INF, NAN};
///
/// let a = array![0, 0.1, 2];
/// assert_eq!(a.dtype(), DType::Float64);
///
/// let b = array![NAN, "abc"];
/// assert_eq!(b.dtype(), DType::Object);
///
/// // An explicit dtype goes after a semicolon; the result is a `Result`.
/// let c = array![0, 1, 2; DType::Float32].unwrap();
/// assert_eq!(c.dtype(), DType::Float32);
///
/// assert!(array![INF, 3; DType::Int32].is_err());
/// ```
#[macro_export]
macro_rules! array {
    ($($x:expr),* ; $dtype:expr) => {{
        $crate::NumArray::with_dtype(vec![$($crate::Scalar::from($x),)*], $dtype)
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::NumArray::new(vec![$($crate::Scalar::from($x),)*])
    }};
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<A: Element>(xs: &[A]) -> NumArray {
    NumArray::from_vec(xs.to_vec())
}
