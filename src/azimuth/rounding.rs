//! Decimal rounding of azimuth values

/// Above this magnitude every f64 is already an integer
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round `value` to `digits` decimal places
///
/// Scales by 10^digits, rounds half to even, and scales back. Values that
/// would overflow when scaled, or that are already integral at that scale,
/// come back unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = match i32::try_from(digits) {
        Ok(exp) => 10f64.powi(exp),
        Err(_) => return value,
    };
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_LIMIT {
        return value;
    }

    scaled.round_ties_even() / factor
}
