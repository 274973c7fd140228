// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error produced when a value cannot be stored with the requested dtype,
/// or when an element index is out of range.
#[derive(Clone, Debug)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    index: Option<usize>,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Position of the offending element, when known.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Error code for an `ArrayError`.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// the value has no representation in the dtype (NaN as integer,
    /// unparsable text)
    InvalidValue,
    /// the value is outside the range of the dtype (infinity as integer)
    Overflow,
    /// element index out of bounds
    OutOfBounds,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError {
    ArrayError { repr: k, index: None }
}

impl From<ErrorKind> for ArrayError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        from_kind(kind)
    }
}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidValue => "value has no representation in the requested dtype",
            ErrorKind::Overflow => "value out of range for the requested dtype",
            ErrorKind::OutOfBounds => "index out of bounds",
        }
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr.description())?;
        if let Some(index) = self.index {
            write!(f, " (element {})", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_index() {
        let err = from_kind(ErrorKind::Overflow).at(3);
        assert_eq!(err.to_string(), "value out of range for the requested dtype (element 3)");
        assert_eq!(err.index(), Some(3));
    }

    #[test]
    fn equality_ignores_index() {
        assert_eq!(from_kind(ErrorKind::InvalidValue).at(0), from_kind(ErrorKind::InvalidValue));
        assert_ne!(from_kind(ErrorKind::InvalidValue), from_kind(ErrorKind::Overflow));
    }
}
