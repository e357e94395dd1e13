//! Decimal rounding used for reported ratios, distances, and margins.
//!
//! Ties round to even on the scaled value, so `0.00005` at 4 places and
//! `72.5` at 0 places both round down.

/// Round `value` to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
