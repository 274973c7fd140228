// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::data_repr::Buffer;
use crate::{NumArray, Scalar};

/// Arrays with more elements than this are printed with only their
/// leading and trailing `PRINT_EDGE_ITEMS` elements.
pub const PRINT_THRESHOLD: usize = 1000;
/// Number of elements kept at each end of a summarised array.
pub const PRINT_EDGE_ITEMS: usize = 3;
/// Lines are wrapped so they do not exceed this many columns.
pub const LINE_WIDTH: usize = 75;

const FLOAT_PRECISION: usize = 8;
const REPR_PREFIX: &str = "array(";

fn edges<T: Clone>(v: &[T], summarize: bool) -> Vec<T> {
    if summarize {
        v[..PRINT_EDGE_ITEMS]
            .iter()
            .chain(&v[v.len() - PRINT_EDGE_ITEMS..])
            .cloned()
            .collect()
    } else {
        v.to_vec()
    }
}

/// Format each displayed element; the summary marker is one of the words.
fn element_words(buffer: &Buffer) -> Vec<String> {
    let summarize = buffer.len() > PRINT_THRESHOLD;
    let mut words = match buffer {
        Buffer::Int32(v) => format_ints(edges(v, summarize).into_iter().map(i64::from)),
        Buffer::Int64(v) => format_ints(edges(v, summarize).into_iter()),
        Buffer::Float32(v) => {
            let values: Vec<f64> = edges(v, summarize).into_iter().map(f64::from).collect();
            format_floats(&values, true)
        }
        Buffer::Float64(v) => format_floats(&edges(v, summarize), false),
        // text keeps its quotes in both repr and str
        Buffer::Object(v) => edges(v, summarize).iter().map(Scalar::repr).collect(),
    };
    if summarize {
        words.insert(PRINT_EDGE_ITEMS, "...".to_owned());
    }
    words
}

fn format_ints<I>(values: I) -> Vec<String>
where
    I: Iterator<Item = i64>,
{
    let strs: Vec<String> = values.map(|x| x.to_string()).collect();
    let width = strs.iter().map(String::len).max().unwrap_or(0);
    strs.into_iter().map(|s| format!("{:>width$}", s, width = width)).collect()
}

fn trim_fraction(s: &str) -> String {
    match s.split_once('.') {
        Some((int, frac)) => format!("{}.{}", int, frac.trim_end_matches('0')),
        None => s.to_owned(),
    }
}

/// Integer and fraction digits, at most `FLOAT_PRECISION` fraction digits.
fn positional(x: f64, single: bool) -> (String, String) {
    let shortest = if single { format!("{}", x as f32) } else { format!("{}", x) };
    let too_long = shortest
        .split_once('.')
        .map_or(false, |(_, frac)| frac.len() > FLOAT_PRECISION);
    let s = if too_long {
        let p = FLOAT_PRECISION;
        trim_fraction(&if single { format!("{:.p$}", x as f32) } else { format!("{:.p$}", x) })
    } else {
        shortest
    };
    if let Some((int, frac)) = s.split_once('.') {
        return (int.to_owned(), frac.to_owned());
    }
    (s, String::new())
}

/// Mantissa integer digit, mantissa fraction digits and exponent.
fn scientific(x: f64, single: bool) -> (String, String, i32) {
    let shortest = if single { format!("{:e}", x as f32) } else { format!("{:e}", x) };
    let frac_len = shortest
        .split_once('e')
        .and_then(|(m, _)| m.split_once('.'))
        .map_or(0, |(_, frac)| frac.len());
    let s = if frac_len > FLOAT_PRECISION {
        let p = FLOAT_PRECISION;
        let s = if single { format!("{:.p$e}", x as f32) } else { format!("{:.p$e}", x) };
        let (m, e) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        format!("{}e{}", trim_fraction(m), e)
    } else {
        shortest
    };
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp = exp.parse().unwrap_or(0);
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    (int.to_owned(), frac.to_owned(), exp)
}

fn non_finite_str(x: f64) -> &'static str {
    if x.is_nan() {
        "nan"
    } else if x > 0. {
        "inf"
    } else {
        "-inf"
    }
}

/// Format floats so that their decimal points line up.
///
/// Scientific notation is used when the largest nonzero magnitude is at
/// least 1e8, the smallest is below 1e-4, or they are more than three
/// orders of magnitude apart. NaN and the infinities are right-aligned to
/// the common width.
fn format_floats(values: &[f64], single: bool) -> Vec<String> {
    let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    let nonzero: Vec<f64> = finite.iter().map(|x| x.abs()).filter(|&x| x != 0.).collect();
    let use_exp = match (
        nonzero.iter().copied().reduce(f64::max),
        nonzero.iter().copied().reduce(f64::min),
    ) {
        (Some(max), Some(min)) => max >= 1e8 || min < 1e-4 || max / min > 1e3,
        _ => false,
    };

    let mut pad_left = 0;
    let mut pad_right = 0;
    let mut precision = 0;
    let mut exp_size = 0;
    if use_exp {
        let parts: Vec<_> = finite.iter().map(|&x| scientific(x, single)).collect();
        pad_left = parts.iter().map(|p| p.0.len()).max().unwrap_or(0);
        precision = parts.iter().map(|p| p.1.len()).max().unwrap_or(0);
        exp_size = parts
            .iter()
            .map(|p| p.2.unsigned_abs().to_string().len().max(2))
            .max()
            .unwrap_or(2);
        pad_right = exp_size + 2 + precision;
    } else if !finite.is_empty() {
        let parts: Vec<_> = finite.iter().map(|&x| positional(x, single)).collect();
        pad_left = parts.iter().map(|p| p.0.len()).max().unwrap_or(0);
        pad_right = parts.iter().map(|p| p.1.len()).max().unwrap_or(0);
    }
    if finite.len() != values.len() {
        let neg_inf = values.iter().any(|&x| x == f64::NEG_INFINITY);
        let offset = pad_right + 1;
        pad_left = pad_left
            .max(3usize.saturating_sub(offset))
            .max((3 + usize::from(neg_inf)).saturating_sub(offset));
    }

    values
        .iter()
        .map(|&x| {
            if !x.is_finite() {
                let width = pad_left + pad_right + 1;
                format!("{:>width$}", non_finite_str(x), width = width)
            } else if use_exp {
                let (int, frac, exp) = scientific(x, single);
                let sign = if exp < 0 { '-' } else { '+' };
                format!(
                    "{:>pl$}.{:0<prec$}e{}{:0>es$}",
                    int,
                    frac,
                    sign,
                    exp.unsigned_abs(),
                    pl = pad_left,
                    prec = precision,
                    es = exp_size
                )
            } else {
                let (int, frac) = positional(x, single);
                format!("{:>pl$}.{:<pr$}", int, frac, pl = pad_left, pr = pad_right)
            }
        })
        .collect()
}

fn extend_line(s: &mut String, line: &mut String, word: &str, width: usize, hanging_indent: &str) {
    // wrapping a line that holds only the indent would not help
    if line.len() + word.len() > width && line.len() > hanging_indent.len() {
        s.push_str(line.trim_end());
        s.push('\n');
        line.clear();
        line.push_str(hanging_indent);
    }
    line.push_str(word);
}

/// Join `words` into a bracketed list, wrapping at `line_width` with
/// continuation lines indented by `hanging` columns.
fn format_lines(words: &[String], separator: &str, hanging: usize, line_width: usize) -> String {
    let hanging_indent = " ".repeat(hanging);
    let elem_width = line_width - separator.trim_end().len().max(1);
    let mut s = String::new();
    let mut line = hanging_indent.clone();
    for (i, word) in words.iter().enumerate() {
        extend_line(&mut s, &mut line, word, elem_width, &hanging_indent);
        if i + 1 < words.len() {
            line.push_str(separator);
        }
    }
    s.push_str(&line);
    format!("[{}]", &s[hanging..])
}

impl NumArray {
    /// Return the printable representation: `array([...])`, followed by
    /// `dtype=...` unless the dtype is what inference would pick.
    ///
    /// ```
    /// use numarray::{array, NAN, NEG_INF};
    ///
    /// assert_eq!(array![NAN, 1, 2].repr(), "array([nan,  1.,  2.])");
    /// assert_eq!(array![NEG_INF, 1].repr(), "array([-inf,   1.])");
    /// assert_eq!(array![NAN, "abc"].repr(), "array([nan, 'abc'], dtype=object)");
    /// ```
    pub fn repr(&self) -> String {
        let data = self.data.borrow();
        let dtype = data.dtype();
        let words = element_words(&data);
        if words.is_empty() {
            return format!("{}[], dtype={})", REPR_PREFIX, dtype);
        }
        let skip_dtype = dtype.is_repr_default();
        let suffix = if skip_dtype { ")" } else { "," };
        let body = format_lines(&words, ", ", REPR_PREFIX.len() + 1, LINE_WIDTH - suffix.len());
        let mut out = format!("{}{}{}", REPR_PREFIX, body, suffix);
        if !skip_dtype {
            let dtype_str = format!("dtype={})", dtype);
            let last_line_len = out.len() - out.rfind('\n').map_or(0, |i| i + 1);
            if last_line_len + dtype_str.len() + 1 > LINE_WIDTH {
                out.push('\n');
                out.push_str(&" ".repeat(REPR_PREFIX.len()));
            } else {
                out.push(' ');
            }
            out.push_str(&dtype_str);
        }
        out
    }
}

/// Format the array as a space separated list, e.g. `[0.  0.1 2. ]`.
impl fmt::Display for NumArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = element_words(&self.data.borrow());
        f.write_str(&format_lines(&words, " ", 1, LINE_WIDTH))
    }
}

/// Format the array like `repr`, with extra information about its storage.
impl fmt::Debug for NumArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shape={:?}, dtype={}, handles={}",
            self.repr(),
            self.shape(),
            self.dtype(),
            self.handle_count()
        )
    }
}
