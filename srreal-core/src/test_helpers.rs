//! Assertions for floating-point tests.
//!
//! Absolute tolerances suit values of order one. When two code paths are meant
//! to perform the same multiplications in the same order, compare them in
//! units in the last place instead, usually with a budget of 0.

use crate::r3::{matrices_almost_equal, vectors_almost_equal, Matrix3, Vector3};

const SIGN_BIT: u64 = 1 << 63;

/// Bit pattern of `x` remapped so that unsigned order follows float order.
///
/// Negative floats have their bits inverted, non-negative ones get the sign
/// bit set. `-0.0` and `+0.0` land on adjacent values.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & SIGN_BIT == 0 {
        bits | SIGN_BIT
    } else {
        !bits
    }
}

/// Number of representable doubles between `a` and `b`.
#[inline]
pub fn ulps_between(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

/// Asserts `expected` and `actual` are at most `max_ulps` apart.
///
/// Signed zeros compare equal. Non-finite values always fail.
#[track_caller]
pub fn assert_ulps(expected: f64, actual: f64, max_ulps: u64, what: &str) {
    if expected == 0.0 && actual == 0.0 {
        return;
    }
    assert!(
        expected.is_finite() && actual.is_finite(),
        "{}: non-finite operand (expected {}, actual {})",
        what,
        expected,
        actual
    );
    let ulps = ulps_between(expected, actual);
    assert!(
        ulps <= max_ulps,
        "{}: {} ULPs apart, allowed {} (expected {:e} = {:#018x}, actual {:e} = {:#018x})",
        what,
        ulps,
        max_ulps,
        expected,
        expected.to_bits(),
        actual,
        actual.to_bits()
    );
}

/// Component-wise [`assert_ulps`].
#[track_caller]
pub fn assert_vector_ulps(expected: &Vector3, actual: &Vector3, max_ulps: u64, what: &str) {
    for i in 0..3 {
        assert_ulps(
            expected[i],
            actual[i],
            max_ulps,
            &format!("{} [component {}]", what, i),
        );
    }
}

#[track_caller]
pub fn assert_vector_near(expected: &Vector3, actual: &Vector3, tolerance: f64) {
    assert!(
        vectors_almost_equal(expected, actual, tolerance),
        "vectors differ by more than {:e}:\n  expected {}\n  actual   {}",
        tolerance,
        expected,
        actual
    );
}

#[track_caller]
pub fn assert_matrix_near(expected: &Matrix3, actual: &Matrix3, tolerance: f64) {
    assert!(
        matrices_almost_equal(expected, actual, tolerance),
        "matrices differ by {:e} (tolerance {:e}):\nexpected {}actual   {}",
        expected.max_difference(actual),
        tolerance,
        expected,
        actual
    );
}

/// [`assert_ulps`] with the compared expressions as the failure label.
#[macro_export]
macro_rules! assert_ulps_eq {
    ($expected:expr, $actual:expr, $max_ulps:expr) => {
        $crate::test_helpers::assert_ulps(
            $expected,
            $actual,
            $max_ulps,
            concat!(stringify!($expected), " vs ", stringify!($actual)),
        )
    };
    ($expected:expr, $actual:expr, $max_ulps:expr, $($ctx:tt)+) => {
        $crate::test_helpers::assert_ulps($expected, $actual, $max_ulps, &format!($($ctx)+))
    };
}
