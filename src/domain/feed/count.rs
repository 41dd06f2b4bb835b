// SPDX-License-Identifier: MPL-2.0
//! Compact engagement counts (`999`, `1.5K`, `2.3M`).

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Formats an engagement counter for display next to an action icon.
///
/// - `n >= 1_000_000`: millions with one decimal and an `M` suffix
/// - `1_000 <= n < 1_000_000`: thousands with one decimal and a `K` suffix
/// - otherwise the plain integer
///
/// The quotient is rounded after the division, so a value just below a bucket
/// boundary can round up to `1000.0K` without moving to the next suffix.
///
/// # Examples
///
/// ```
/// use iced_reel::domain::feed::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_500), "1.5K");
/// assert_eq!(format_count(2_300_000), "2.3M");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= MILLION {
        format!("{}M", one_decimal(n as f64 / MILLION as f64))
    } else if n >= THOUSAND {
        format!("{}K", one_decimal(n as f64 / THOUSAND as f64))
    } else {
        n.to_string()
    }
}

/// Renders `value` with exactly one decimal digit.
///
/// Rounding works on the exact binary value of the quotient and resolves exact
/// ties upward, so `1.25` becomes `1.3` while `1.45` (stored as
/// `1.4499999...`) becomes `1.4`.
fn one_decimal(value: f64) -> String {
    debug_assert!(value.is_finite() && value >= 1.0);

    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1_u64 << 52) - 1)) | (1_u64 << 52);

    // value * 10 == scaled * 2^exponent
    let scaled = u128::from(mantissa) * 10;
    let tenths = if exponent >= 0 {
        scaled << exponent
    } else {
        let shift = exponent.unsigned_abs();
        let floor = scaled >> shift;
        let remainder = scaled - (floor << shift);
        if remainder >= 1_u128 << (shift - 1) {
            floor + 1
        } else {
            floor
        }
    };

    format!("{}.{}", tenths / 10, tenths % 10)
}
