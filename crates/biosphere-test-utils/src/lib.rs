//! Shared fixtures for Biosphere tests: the reference scoring scenario and
//! trimmed copies of real upstream payloads.

pub mod fixtures;

pub use pretty_assertions;

/// Assert two floats agree within `tol`.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() <= $tol, "expected {} ≈ {} (tolerance {})", l, r, $tol);
    }};
}
