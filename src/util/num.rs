use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, Context, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Number of significant digits kept by arithmetic results.
pub const DEFAULT_PRECISION: usize = 28;

/// Largest adjusted exponent of a finite result.
pub const EMAX: i64 = 999_999;
/// Smallest adjusted exponent of a normal result.
pub const EMIN: i64 = -999_999;

/// Extra digits `ln` carries through its argument reduction.
const LN_GUARD_DIGITS: usize = 10;

fn pow10(exponent: usize) -> BigInt {
    num_traits::pow(BigInt::from(10), exponent)
}

/// Builds a half-even rounding context for `precision` significant digits.
///
/// A precision of zero is treated as one.
#[must_use]
pub fn context(precision: usize) -> Context {
    let digits = u64::try_from(precision).ok()
                                         .and_then(NonZeroU64::new)
                                         .unwrap_or(NonZeroU64::MIN);
    Context::new(digits, RoundingMode::HalfEven)
}

/// Exponent of the most significant digit, so `123.4` has `2` and `0.05`
/// has `-2`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::adjusted_exponent;
///
/// assert_eq!(adjusted_exponent(&BigDecimal::from_str("123.4").unwrap()), 2);
/// assert_eq!(adjusted_exponent(&BigDecimal::from_str("0.05").unwrap()), -2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn adjusted_exponent(value: &BigDecimal) -> i64 {
    value.digits() as i64 - 1 - value.fractional_digit_count()
}

/// Smallest exponent a subnormal result may carry at `precision` digits.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn etiny(precision: usize) -> i64 {
    EMIN - precision as i64 + 1
}

/// The zero an underflowing result collapses to, `0E-1000026` at the
/// default precision.
#[must_use]
pub fn underflow_zero(precision: usize) -> BigDecimal {
    BigDecimal::new(BigInt::zero(), -etiny(precision))
}

/// Rounds `value` to at most `precision` significant digits, half to even.
///
/// Values that already fit are returned unchanged, scale included.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::{fit_precision, format_decimal};
///
/// let v = BigDecimal::from_str("3.14159").unwrap();
/// assert_eq!(fit_precision(v, 3), BigDecimal::from_str("3.14").unwrap());
///
/// let tie = BigDecimal::from_str("2.5").unwrap();
/// assert_eq!(fit_precision(tie, 1), BigDecimal::from_str("2").unwrap());
///
/// let carry = BigDecimal::from_str("999.5").unwrap();
/// assert_eq!(format_decimal(&fit_precision(carry, 3)), "1.00E+3");
/// ```
#[must_use]
pub fn fit_precision(value: BigDecimal, precision: usize) -> BigDecimal {
    let limit = precision.max(1) as u64;
    if value.digits() <= limit {
        return value;
    }

    let ctx = context(precision);
    let rounded = ctx.round_decimal(value);
    // 999.5 -> 1000 gains a digit.
    if rounded.digits() > limit {
        ctx.round_decimal(rounded)
    } else {
        rounded
    }
}

/// Keeps `value` inside the exponent range.
///
/// Returns `None` when the adjusted exponent is above [`EMAX`]. Results
/// below [`EMIN`] lose digits until their exponent reaches
/// [`etiny`], and collapse to [`underflow_zero`] when nothing is left.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::{fit_exponent, format_decimal};
///
/// let huge = BigDecimal::from_str("1e1000000").unwrap();
/// assert!(fit_exponent(huge, 28).is_none());
///
/// let tiny = BigDecimal::from_str("1e-2000000").unwrap();
/// assert_eq!(format_decimal(&fit_exponent(tiny, 28).unwrap()), "0E-1000026");
/// ```
#[must_use]
pub fn fit_exponent(value: BigDecimal, precision: usize) -> Option<BigDecimal> {
    let etiny = etiny(precision);
    let scale = value.fractional_digit_count();

    if value.is_zero() {
        return Some(if -scale < etiny { underflow_zero(precision) } else { value });
    }

    let adjusted = adjusted_exponent(&value);
    if adjusted > EMAX {
        return None;
    }
    if -scale >= etiny {
        return Some(value);
    }
    if adjusted < etiny - 1 {
        return Some(underflow_zero(precision));
    }
    Some(value.with_scale_round(-etiny, RoundingMode::HalfEven))
}

/// Removes trailing fractional zeros while the scale is above `ideal_scale`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::{format_decimal, strip_trailing_zeros};
///
/// let v = BigDecimal::from_str("2.5000").unwrap();
/// assert_eq!(format_decimal(&strip_trailing_zeros(v, 0)), "2.5");
///
/// let v = BigDecimal::from_str("7.000").unwrap();
/// assert_eq!(format_decimal(&strip_trailing_zeros(v, 1)), "7.0");
/// ```
#[must_use]
pub fn strip_trailing_zeros(value: BigDecimal, ideal_scale: i64) -> BigDecimal {
    if value.fractional_digit_count() <= ideal_scale {
        return value;
    }
    if value.is_zero() {
        return value.with_scale(ideal_scale);
    }

    let normal = value.normalized();
    if normal.fractional_digit_count() >= ideal_scale {
        normal
    } else {
        normal.with_scale(ideal_scale)
    }
}

/// Divides two decimals with `precision` significant digits.
///
/// A quotient that terminates within the precision is exact and carries the
/// ideal scale (`scale(dividend) - scale(divisor)`), or the smallest scale
/// above it that represents the value. Other quotients are rounded half to
/// even.
///
/// The divisor must not be zero.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::{divide, format_decimal};
///
/// let one = BigDecimal::from_str("1").unwrap();
/// let four = BigDecimal::from_str("4").unwrap();
/// let three = BigDecimal::from_str("3").unwrap();
///
/// assert_eq!(format_decimal(&divide(&one, &four, 28)), "0.25");
/// assert_eq!(format_decimal(&divide(&one, &three, 5)), "0.33333");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn divide(dividend: &BigDecimal, divisor: &BigDecimal, precision: usize) -> BigDecimal {
    let (a, a_scale) = dividend.as_bigint_and_exponent();
    let (b, b_scale) = divisor.as_bigint_and_exponent();
    let ideal_scale = a_scale - b_scale;

    if a.is_zero() {
        return BigDecimal::new(a, ideal_scale);
    }

    let shift = (precision as u64 + 2 + divisor.digits()).saturating_sub(dividend.digits());
    let numerator = a * pow10(shift as usize);
    let quotient = &numerator / &b;
    let scale = ideal_scale + shift as i64;

    if &quotient * &b == numerator {
        fit_precision(strip_trailing_zeros(BigDecimal::new(quotient, scale), ideal_scale),
                      precision)
    } else {
        // Sticky digit: a truncated tail must never look like an exact tie.
        let sticky = &quotient * BigInt::from(10) + quotient.signum();
        fit_precision(BigDecimal::new(sticky, scale + 1), precision)
    }
}

/// Natural logarithm of a positive decimal to `precision` digits.
///
/// The argument is split into `m · 10^k`, `m` is pulled towards one by
/// repeated square roots and the remainder summed as
/// `2·atanh((m - 1) / (m + 1))`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::{format_decimal, ln};
///
/// let two = BigDecimal::from(2);
/// assert_eq!(format_decimal(&ln(&two, 20)), "0.69314718055994530942");
///
/// let one = BigDecimal::from(1);
/// assert_eq!(format_decimal(&ln(&one, 20)), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn ln(value: &BigDecimal, precision: usize) -> BigDecimal {
    let working = precision + LN_GUARD_DIGITS;
    let mut exponent = adjusted_exponent(value);
    // Values just below one would cancel against ln(10).
    if exponent == -1 {
        exponent = 0;
    }

    let (digits, scale) = value.as_bigint_and_exponent();
    let mantissa = BigDecimal::new(digits, scale + exponent);
    let mut result = ln_reduced(&mantissa, working);

    if exponent != 0 {
        let decades = ln_reduced(&BigDecimal::from(10), working) * BigDecimal::from(exponent);
        result = fit_precision(result + fit_precision(decades, working), working);
    }

    fit_precision(result, precision)
}

fn ln_reduced(value: &BigDecimal, working: usize) -> BigDecimal {
    let ctx = context(working);
    let one = BigDecimal::one();
    let tolerance = BigDecimal::new(BigInt::one(), 2);

    let mut x = value.clone();
    let mut halvings = 0_u32;
    while (&x - &one).abs() > tolerance {
        let Some(root) = x.sqrt_with_context(&ctx) else {
            break;
        };
        x = root;
        halvings += 1;
    }

    let y = divide(&(&x - &one), &(&x + &one), working);
    let y_squared = fit_precision(&y * &y, working);
    let mut term = y.clone();
    let mut sum = y;
    let mut denominator = 1_u32;

    loop {
        term = fit_precision(&term * &y_squared, working);
        denominator += 2;
        let delta = divide(&term, &BigDecimal::from(denominator), working);
        if delta.is_zero() || adjusted_exponent(&sum) - adjusted_exponent(&delta) > working as i64 {
            break;
        }
        sum = fit_precision(sum + delta, working);
    }

    let scale = BigDecimal::from(BigInt::one() << (halvings + 1));
    fit_precision(sum * scale, working)
}

/// Formats a decimal using the to-scientific-string rules.
///
/// Plain notation is used when the exponent is not positive and the adjusted
/// exponent is at least `-6`; otherwise one digit is kept before the point and
/// the exponent is appended as `E+n` or `E-n`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use calcparse::util::num::format_decimal;
///
/// let show = |s: &str| format_decimal(&BigDecimal::from_str(s).unwrap());
///
/// assert_eq!(show("1024"), "1024");
/// assert_eq!(show("12.50"), "12.50");
/// assert_eq!(show("0.0000001"), "1E-7");
/// assert_eq!(show("1.5e30"), "1.5E+30");
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn format_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let sign = if digits.is_negative() { "-" } else { "" };
    let coefficient = digits.magnitude().to_string();
    let len = coefficient.len() as i64;

    let exponent = -scale;
    let left_digits = exponent + len;
    let dot_place = if exponent <= 0 && left_digits > -6 {
        left_digits
    } else {
        1
    };

    let (int_part, frac_part) = if dot_place <= 0 {
        ("0".to_string(), format!(".{}{coefficient}", "0".repeat(dot_place.unsigned_abs() as usize)))
    } else if dot_place >= len {
        (format!("{coefficient}{}", "0".repeat((dot_place - len) as usize)), String::new())
    } else {
        let (int, frac) = coefficient.split_at(dot_place as usize);
        (int.to_string(), format!(".{frac}"))
    };

    let exp_part = if left_digits == dot_place {
        String::new()
    } else {
        format!("E{:+}", left_digits - dot_place)
    };

    format!("{sign}{int_part}{frac_part}{exp_part}")
}
