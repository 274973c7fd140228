// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::fmt;

/// Not-a-number, the placeholder for missing data.
pub const NAN: f64 = f64::NAN;
/// Positive infinity.
pub const INF: f64 = f64::INFINITY;
/// Negative infinity.
pub const NEG_INF: f64 = f64::NEG_INFINITY;

/// A single literal element.
///
/// `Scalar` is what arrays are built from, what `get` hands back, and what
/// an `Object` array stores directly.
///
/// Integers and floats compare by numeric value, so `Scalar::Int(1)` equals
/// `Scalar::Float(1.0)`; text never compares equal or ordered to a number.
#[derive(Clone, Debug)]
pub enum Scalar {
    Int(i64),
    /// Floating-point value, including NaN and the infinities
    Float(f64),
    Text(String),
}

impl Scalar {
    #[inline]
    pub fn nan() -> Self {
        Scalar::Float(NAN)
    }

    #[inline]
    pub fn inf() -> Self {
        Scalar::Float(INF)
    }

    #[inline]
    pub fn neg_inf() -> Self {
        Scalar::Float(NEG_INF)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(*self, Scalar::Float(x) if x.is_nan())
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(*self, Scalar::Float(x) if x.is_infinite())
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(*self, Scalar::Text(_))
    }

    /// The value as `f64`, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::Int(i) => Some(i as f64),
            Scalar::Float(x) => Some(x),
            Scalar::Text(_) => None,
        }
    }

    /// Python-style element repr: `1`, `1.0`, `nan`, `'abc'`.
    pub(crate) fn repr(&self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(x) => float_repr(*x),
            Scalar::Text(s) => text_repr(s),
        }
    }
}

/// Quoted text in the style of Python's `repr`: single quotes unless the
/// text holds a single quote and no double quote.
fn text_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Shortest round-trip text of a float in the style of Python's `repr`.
pub(crate) fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x > 0. { "inf" } else { "-inf" }.to_owned();
    }
    let s = format!("{:?}", x);
    if let Some((mantissa, exp)) = s.split_once('e') {
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exp),
        };
        let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }
    s
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => fmt::Display::fmt(i, f),
            Scalar::Float(x) => f.pad(&float_repr(*x)),
            Scalar::Text(s) => f.pad(s),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Text(_), _) | (_, Scalar::Text(_)) => false,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a.partial_cmp(b),
            (Scalar::Text(a), Scalar::Text(b)) => a.partial_cmp(b),
            (Scalar::Text(_), _) | (_, Scalar::Text(_)) => None,
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Scalar {
            #[inline]
            fn from(value: $ty) -> Self {
                Scalar::Int(i64::from(value))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    #[inline]
    fn from(value: f32) -> Self {
        Scalar::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}
