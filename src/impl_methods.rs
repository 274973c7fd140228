// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::data_repr::Buffer;
use crate::error::ArrayError;
use crate::{DType, Element, NumArray, Scalar};

impl NumArray {
    pub(crate) fn from_buffer(buffer: Buffer) -> NumArray {
        NumArray {
            data: Rc::new(RefCell::new(buffer)),
        }
    }

    /// Return the element type of the array.
    pub fn dtype(&self) -> DType {
        self.data.borrow().dtype()
    }

    /// Return the number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the shape of the array; always one axis.
    pub fn shape(&self) -> [usize; 1] {
        [self.len()]
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        1
    }

    /// Return the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.data.borrow().get(index)
    }

    /// Assign `value` to the element at `index`, converting it to the
    /// array's dtype.
    ///
    /// The write goes to the shared storage, so every alias observes it.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` if `index` is out of
    /// bounds, and with the same kinds as [`NumArray::with_dtype`] if the
    /// value does not fit the dtype. The element is unchanged on error.
    pub fn set<V>(&self, index: usize, value: V) -> Result<(), ArrayError>
    where
        V: Into<Scalar>,
    {
        self.data.borrow_mut().set(index, &value.into())
    }

    /// Assign `value` to every element.
    pub fn fill<V>(&self, value: V) -> Result<(), ArrayError>
    where
        V: Into<Scalar>,
    {
        let value = value.into();
        let mut data = self.data.borrow_mut();
        for i in 0..data.len() {
            data.set(i, &value)?;
        }
        Ok(())
    }

    /// Return a second handle to the same storage.
    ///
    /// This is what assignment means for arrays: no data is copied, and a
    /// write through either handle is visible through the other. Same as
    /// `clone()`.
    ///
    /// ```
    /// use numarray::array;
    ///
    /// let a = array![0, 1];
    /// let c = a.alias();
    /// c.set(0, 5).unwrap();
    /// assert_eq!(a.repr(), "array([5, 1])");
    /// ```
    pub fn alias(&self) -> NumArray {
        NumArray {
            data: Rc::clone(&self.data),
        }
    }

    /// Return a deep copy with its own storage.
    ///
    /// ```
    /// use numarray::array;
    ///
    /// let b = array![9, 8];
    /// let d = b.copy();
    /// d.set(0, 6).unwrap();
    /// assert_eq!(b.repr(), "array([9, 8])");
    /// ```
    pub fn copy(&self) -> NumArray {
        NumArray::from_buffer(self.data.borrow().clone())
    }

    /// Return whether `self` and `other` are handles to the same storage.
    pub fn shares_storage(&self, other: &NumArray) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Return the number of handles referring to this array's storage.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.data)
    }

    /// Return a new array with every element converted to `dtype`.
    ///
    /// The result always has its own storage, even when `dtype` is the
    /// current dtype. Floats become integers by truncation toward zero.
    ///
    /// **Errors** with `ErrorKind::InvalidValue` for NaN and with
    /// `ErrorKind::Overflow` for an infinity or out-of-range value when
    /// `dtype` is an integer dtype.
    pub fn astype(&self, dtype: DType) -> Result<NumArray, ArrayError> {
        let data = self.data.borrow();
        trace!(from = data.dtype().name(), to = dtype.name(), len = data.len(), "astype");
        data.cast(dtype).map(NumArray::from_buffer)
    }

    /// Return the elements as literals.
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.data.borrow().to_scalars()
    }

    /// Return the elements as `T` if `T` is the array's storage type.
    pub fn to_typed_vec<T: Element>(&self) -> Option<Vec<T>> {
        T::slice_of(&self.data.borrow()).map(<[T]>::to_vec)
    }

    /// Elementwise NaN test; text elements are not NaN.
    pub fn is_nan(&self) -> Vec<bool> {
        self.data.borrow().mask(f64::is_nan)
    }

    /// Elementwise test for positive or negative infinity.
    pub fn is_infinite(&self) -> Vec<bool> {
        self.data.borrow().mask(f64::is_infinite)
    }

    /// Return `true` if any element is NaN.
    pub fn has_nan(&self) -> bool {
        self.is_nan().into_iter().any(|b| b)
    }
}

impl Clone for NumArray {
    /// Shares storage, see [`NumArray::alias`]; use
    /// [`NumArray::copy`] for independent storage.
    fn clone(&self) -> NumArray {
        self.alias()
    }
}

impl PartialEq for NumArray {
    /// Same dtype and elementwise equal; NaN never equals NaN.
    fn eq(&self, rhs: &NumArray) -> bool {
        *self.data.borrow() == *rhs.data.borrow()
    }
}
