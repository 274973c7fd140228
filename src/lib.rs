// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/numarray/0.1/")]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `numarray` crate provides [`NumArray`], a one-dimensional array whose
//! element type (its *dtype*) is chosen at runtime, similar to numpy's
//! `ndarray` restricted to one axis.
//!
//! - **Dtype inference**: integers give `int64`, any float (including the
//!   sentinels [`NAN`], [`INF`] and [`NEG_INF`]) gives `float64`, and any
//!   text gives `object`
//! - **Aliasing**: assignment shares storage; [`NumArray::alias`] (or
//!   `clone()`) makes a second handle and writes through either are seen
//!   by both
//! - **Copying**: [`NumArray::copy`] gives independent storage
//! - **Casting**: [`NumArray::astype`] converts every element, refusing NaN
//!   and infinities for integer dtypes
//! - **Printing**: [`NumArray::repr`] and `Display` match numpy's `repr` and
//!   `str`
//!
//! ```
//! use numarray::{array, DType, ErrorKind, NAN};
//!
//! let a = array![0, 1];
//! let c = a.alias();
//! c.set(0, 5).unwrap();
//! assert_eq!(a.repr(), "array([5, 1])");
//!
//! let f = a.astype(DType::Float32).unwrap();
//! assert_eq!(f.repr(), "array([5., 1.], dtype=float32)");
//!
//! let err = array![NAN, 1, 2; DType::Int32].unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidValue);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization with version `1.x` of serde
//! - `approx`: `AbsDiffEq` and `RelativeEq` from version `0.5` of approx

use std::cell::RefCell;
use std::rc::Rc;

pub use crate::arrayformat::{LINE_WIDTH, PRINT_EDGE_ITEMS, PRINT_THRESHOLD};
pub use crate::dtype::{DType, ParseDTypeError};
pub use crate::element::Element;
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::free_functions::arr1;
pub use crate::scalar::{Scalar, INF, NAN, NEG_INF};

#[macro_use]
mod free_functions;

mod arrayformat;
#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
mod data_repr;
mod dtype;
mod element;
mod error;
mod impl_constructors;
mod impl_methods;
mod scalar;

/// A one-dimensional array with a runtime dtype and shared storage.
///
/// A `NumArray` is a handle: cloning it (or calling [`alias`](Self::alias))
/// gives another handle to the *same* elements, and writing an element
/// through one handle is visible through all of them. Use
/// [`copy`](Self::copy) to get independent storage.
///
/// Handles are reference counted and not thread safe.
///
/// ```
/// use numarray::{array, DType};
///
/// let a = array![0, 1, 2];
/// assert_eq!(a.dtype(), DType::Int64);
///
/// let a = a.astype(DType::Float32).unwrap();
/// assert_eq!(a.dtype(), DType::Float32);
/// assert_eq!(a.to_string(), "[0. 1. 2.]");
/// ```
pub struct NumArray {
    data: Rc<RefCell<data_repr::Buffer>>,
}
