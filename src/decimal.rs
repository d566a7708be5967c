use crate::config::DEFAULT_HIGH_PRECISION_DIGITS;
use crate::error::{NumeralError, NumeralResult};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A decimal number in its single normalized textual form
///
/// The value is `±integer_digits.fractional_digits × 10^exponent`, where:
/// - `integer_digits` has no leading zeros (it is `"0"` when the integer part is zero)
/// - `fractional_digits` has no trailing zeros and may be empty
/// - `exponent` is 0 unless the number was promoted to exponential form, in
///   which case `integer_digits` is exactly one nonzero digit
///
/// Zero is never negative. Whether a value is promoted depends on the
/// high-precision threshold it was normalized with; see [`CanonicalNumber::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumber {
    negative: bool,
    integer_digits: String,
    fractional_digits: String,
    exponent: i64,
}

impl CanonicalNumber {
    /// The canonical zero
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer_digits: "0".to_string(),
            fractional_digits: String::new(),
            exponent: 0,
        }
    }

    /// Normalize a plain (`-12.50`) or exponential (`1.25E-3`) number string.
    ///
    /// Whitespace anywhere in `raw` is ignored. The result is promoted to
    /// exponential form when its most significant digit lies more than
    /// `high_precision_digits` digits away from the decimal point.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `raw` is not a number
    /// or its exponent does not fit in an `i64` after rebasing.
    pub fn normalize(raw: &str, high_precision_digits: usize) -> NumeralResult<Self> {
        Self::parse(raw, high_precision_digits).map_err(|e| e.into_format_error(raw))
    }

    fn parse(raw: &str, high_precision_digits: usize) -> NumeralResult<Self> {
        let s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = || NumeralError::InvalidNumberFormat(format!("{raw:?}"));

        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s.as_str()),
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], parse_exponent(&s[pos + 1..]).ok_or_else(invalid)??),
            None => (s, 0),
        };

        let (integer_part, fractional_part) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (mantissa, ""),
        };

        if integer_part.is_empty() && fractional_part.is_empty() {
            return Err(invalid());
        }
        if !integer_part
            .bytes()
            .chain(fractional_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        Self::from_parts(
            negative,
            integer_part,
            fractional_part,
            exponent,
            high_precision_digits,
        )
    }

    /// Build the canonical form of `±integer_part.fractional_part × 10^exponent`.
    ///
    /// Both digit strings must be ASCII digits only; either may be empty or
    /// carry redundant zeros.
    pub(crate) fn from_parts(
        negative: bool,
        integer_part: &str,
        fractional_part: &str,
        exponent: i64,
        high_precision_digits: usize,
    ) -> NumeralResult<Self> {
        let total_len = integer_part.len() + fractional_part.len();
        let leading_zeros = integer_part
            .bytes()
            .chain(fractional_part.bytes())
            .take_while(|&b| b == b'0')
            .count();
        if leading_zeros == total_len {
            return Ok(Self::zero());
        }
        let trailing_zeros = fractional_part
            .bytes()
            .rev()
            .chain(integer_part.bytes().rev())
            .take_while(|&b| b == b'0')
            .count();

        let digits: String = integer_part
            .chars()
            .chain(fractional_part.chars())
            .skip(leading_zeros)
            .take(total_len - leading_zeros - trailing_zeros)
            .collect();

        // value = 0.digits × 10^point
        let point = to_i64(integer_part.len())?
            .checked_sub(to_i64(leading_zeros)?)
            .and_then(|p| p.checked_add(exponent))
            .ok_or(NumeralError::ArithmeticOverflow)?;

        // Digits between the most significant digit and the decimal point
        let distance = if point > 0 {
            point.unsigned_abs()
        } else {
            point.unsigned_abs() + 1
        };

        if distance > high_precision_digits as u64 {
            trace!(distance, high_precision_digits, "promoting to exponential form");
            return Ok(Self {
                negative,
                integer_digits: digits[..1].to_string(),
                fractional_digits: digits[1..].to_string(),
                exponent: point.checked_sub(1).ok_or(NumeralError::ArithmeticOverflow)?,
            });
        }

        // distance is bounded by the threshold, so these fit in usize
        let (integer_digits, fractional_digits) = if point <= 0 {
            let zeros = usize::try_from(point.unsigned_abs())
                .map_err(|_| NumeralError::ArithmeticOverflow)?;
            ("0".to_string(), "0".repeat(zeros) + &digits)
        } else {
            let point =
                usize::try_from(point).map_err(|_| NumeralError::ArithmeticOverflow)?;
            if point >= digits.len() {
                (digits.clone() + &"0".repeat(point - digits.len()), String::new())
            } else {
                (digits[..point].to_string(), digits[point..].to_string())
            }
        };

        Ok(Self {
            negative,
            integer_digits,
            fractional_digits,
            exponent: 0,
        })
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    #[must_use]
    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }

    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer_digits == "0" && self.fractional_digits.is_empty()
    }

    /// Check if this number was promoted to exponential form
    #[must_use]
    pub const fn is_exponential(&self) -> bool {
        self.exponent != 0
    }

    /// Render in plain or exponential notation regardless of canonical form
    #[must_use]
    pub fn render(&self, exponential: bool) -> String {
        if exponential {
            self.to_scientific_string()
        } else {
            self.to_plain_string()
        }
    }

    /// Render with exactly one nonzero digit before the point: `-1.25E-3`
    #[must_use]
    pub fn to_scientific_string(&self) -> String {
        if self.is_zero() {
            return "0E0".to_string();
        }

        let (digits, scientific_exponent) = if self.exponent != 0 {
            (
                format!("{}{}", self.integer_digits, self.fractional_digits),
                self.exponent,
            )
        } else if self.integer_digits != "0" {
            let all = format!("{}{}", self.integer_digits, self.fractional_digits);
            let exponent = i64::try_from(self.integer_digits.len() - 1).unwrap_or(i64::MAX);
            (all.trim_end_matches('0').to_string(), exponent)
        } else {
            let significant = self.fractional_digits.trim_start_matches('0');
            let zeros = self.fractional_digits.len() - significant.len();
            let exponent = i64::try_from(zeros + 1).map_or(i64::MIN, |z| -z);
            (significant.to_string(), exponent)
        };

        let mut out = String::with_capacity(digits.len() + 24);
        if self.negative {
            out.push('-');
        }
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push_str(&scientific_exponent.to_string());
        out
    }

    /// Render without an exponent, expanding exponential form in full
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        if self.exponent == 0 {
            return self.to_string();
        }
        Self::from_parts(
            self.negative,
            &self.integer_digits,
            &self.fractional_digits,
            self.exponent,
            usize::MAX,
        )
        .map_or_else(|_| self.to_string(), |plain| plain.to_string())
    }
}

/// Parse an optionally signed run of digits, `None` on malformed input and
/// `Some(Err)` when it does not fit in an `i64`.
fn parse_exponent(s: &str) -> Option<NumeralResult<i64>> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value = 0i64;
    for b in digits.bytes() {
        let digit = i64::from(b - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => value = v,
            None => return Some(Err(NumeralError::ArithmeticOverflow)),
        }
    }
    Some(Ok(value))
}

fn to_i64(n: usize) -> NumeralResult<i64> {
    i64::try_from(n).map_err(|_| NumeralError::ArithmeticOverflow)
}

impl FromStr for CanonicalNumber {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s, DEFAULT_HIGH_PRECISION_DIGITS)
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer_digits)?;
        if !self.fractional_digits.is_empty() {
            write!(f, ".{}", self.fractional_digits)?;
        }
        if self.exponent != 0 {
            write!(f, "E{}", self.exponent)?;
        }
        Ok(())
    }
}

/// Core conversion: build a [`CanonicalNumber`] from an unsigned magnitude and a sign flag.
fn from_unsigned_with_sign(value: u128, negative: bool) -> CanonicalNumber {
    if value == 0 {
        return CanonicalNumber::zero();
    }
    // u128 has at most 39 digits, well under any sensible threshold, so the
    // integer is always kept in plain form.
    CanonicalNumber {
        negative,
        integer_digits: value.to_string(),
        fractional_digits: String::new(),
        exponent: 0,
    }
}

impl From<u64> for CanonicalNumber {
    fn from(value: u64) -> Self {
        from_unsigned_with_sign(u128::from(value), false)
    }
}

impl From<i64> for CanonicalNumber {
    fn from(value: i64) -> Self {
        from_unsigned_with_sign(u128::from(value.unsigned_abs()), value < 0)
    }
}

impl From<u128> for CanonicalNumber {
    fn from(value: u128) -> Self {
        from_unsigned_with_sign(value, false)
    }
}

impl From<i128> for CanonicalNumber {
    fn from(value: i128) -> Self {
        from_unsigned_with_sign(value.unsigned_abs(), value < 0)
    }
}

impl From<u32> for CanonicalNumber {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<i32> for CanonicalNumber {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}
