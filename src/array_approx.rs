// Copyright 2026 numarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::NumArray;

/// Compare elementwise as `f64` with `f`; text elements must match exactly.
/// Dtypes need not agree.
fn all_close<F>(a: &NumArray, b: &NumArray, f: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    let (a, b) = (a.to_vec(), b.to_vec());
    a.len() == b.len()
        && a.iter().zip(&b).all(|(x, y)| match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => f(x, y),
            (None, None) => x == y,
            _ => false,
        })
}

/// **Requires crate feature `"approx"`**
impl AbsDiffEq for NumArray {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NumArray, epsilon: f64) -> bool {
        all_close(self, other, |a, b| a.abs_diff_eq(&b, epsilon))
    }
}

/// **Requires crate feature `"approx"`**
impl RelativeEq for NumArray {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &NumArray, epsilon: f64, max_relative: f64) -> bool {
        all_close(self, other, |a, b| a.relative_eq(&b, epsilon, max_relative))
    }
}

/// **Requires crate feature `"approx"`**
impl UlpsEq for NumArray {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &NumArray, epsilon: f64, max_ulps: u32) -> bool {
        all_close(self, other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, DType};
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq};

    #[test]
    fn float32_cast_is_close() {
        let a = array![0, 0.1, 2];
        let b = a.astype(DType::Float32).unwrap();
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        assert_relative_eq!(a, b, max_relative = 1e-6);
    }

    #[test]
    fn text_must_match() {
        assert_ulps_eq!(array![1, "abc"], array![1., "abc"]);
        assert_abs_diff_ne!(array![1, "abc"], array![1, "abd"]);
        assert_abs_diff_ne!(array![1, 2], array![1]);
    }
}
