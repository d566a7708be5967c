//! Spelling canonical numbers out as English phrases

use crate::config::{FractionMode, NumeralConfig};
use crate::decimal::CanonicalNumber;
use crate::latin::latin_power_name;
use crate::vocabulary::{
    AND, DIGITS, EXPONENT, HUNDRED, NEGATIVE, ORDINAL, PLURAL, POINT, RECIPROCALS, TEENS, TENS,
    THOUSAND,
};
use std::borrow::Cow;
use tracing::debug;

type Words = Vec<Cow<'static, str>>;

/// Phrase a canonical number, switching to exponential phrasing when it
/// was promoted to exponential form.
#[must_use]
pub fn canonical_to_phrase(
    number: &CanonicalNumber,
    mode: FractionMode,
    config: &NumeralConfig,
) -> String {
    if number.is_exponential() {
        debug!(%number, "falling back to exponential phrasing");
        return exponential_phrase(number, config);
    }
    plain_phrase(number, mode, config).join(" ")
}

/// Phrase a number as `mantissa exponent power`, e.g. `"one point five exponent seventy"`.
///
/// The mantissa is always read digit-by-digit and the exponent as a plain integer.
#[must_use]
pub fn exponential_phrase(number: &CanonicalNumber, config: &NumeralConfig) -> String {
    let scientific = number.to_scientific_string();
    let (mantissa, exponent) = scientific
        .split_once('E')
        .unwrap_or((scientific.as_str(), "0"));

    // The mantissa has a single integer digit, so it never promotes
    let mantissa = CanonicalNumber::normalize(mantissa, usize::MAX)
        .unwrap_or_else(|_| CanonicalNumber::zero());
    let mut words = plain_phrase(&mantissa, FractionMode::Simple, config);

    words.push(EXPONENT.into());
    let exponent = match exponent.strip_prefix('-') {
        Some(magnitude) => {
            words.push(NEGATIVE.into());
            magnitude
        }
        None => exponent,
    };
    push_integer(&mut words, exponent);
    words.join(" ")
}

/// Words for a number in plain form; any exponent is ignored.
pub(crate) fn plain_phrase(
    number: &CanonicalNumber,
    mode: FractionMode,
    config: &NumeralConfig,
) -> Words {
    let mut words = Words::new();
    if number.is_negative() {
        words.push(NEGATIVE.into());
    }

    let integer = number.integer_digits();
    let fraction = number.fractional_digits();
    let digit_by_digit = config.reads_digit_by_digit(mode, fraction);

    if integer != "0" {
        push_integer(&mut words, integer);
    } else if fraction.is_empty() || digit_by_digit {
        words.push(DIGITS[0].into());
    }

    if fraction.is_empty() {
        return words;
    }
    if digit_by_digit {
        words.push(POINT.into());
        words.extend(fraction.bytes().map(|b| Cow::Borrowed(DIGITS[usize::from(b - b'0')])));
    } else {
        if integer != "0" {
            words.push(AND.into());
        }
        push_fraction_groups(&mut words, fraction);
    }
    words
}

/// Spell an unsigned digit string chunk by chunk, most significant first.
///
/// `"0"` (or any all-zero string) is spelled `zero`.
fn push_integer(words: &mut Words, digits: &str) {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        words.push(DIGITS[0].into());
        return;
    }

    let first_len = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    let mut group = (digits.len() - first_len) / 3;
    let mut start = 0;
    let mut end = first_len;
    while start < digits.len() {
        let chunk = chunk_value(&digits[start..end]);
        if chunk != 0 {
            push_small_number(words, chunk);
            if group > 0 {
                words.push(power_name(group as u64));
            }
        }
        start = end;
        end += 3;
        group = group.saturating_sub(1);
    }
}

/// Spell fractional digits as named units: `tenths`, `hundredths`, then one
/// group of three digits per `thousandth`, `millionth`, ...
fn push_fraction_groups(words: &mut Words, fraction: &str) {
    if fraction.len() <= 2 {
        let value = chunk_value(fraction);
        push_small_number(words, value);
        let mut unit = RECIPROCALS[fraction.len() - 1].to_string();
        if value > 1 {
            unit.push_str(PLURAL);
        }
        words.push(unit.into());
        return;
    }

    for (i, group) in fraction.as_bytes().chunks(3).enumerate() {
        let padded_value = group
            .iter()
            .chain(std::iter::repeat(&b'0'))
            .take(3)
            .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
        if padded_value != 0 {
            push_small_number(words, padded_value);
            words.push(fraction_unit_name(i as u64 + 1, padded_value > 1).into());
        }
    }
}

/// Name of the `group`-th fractional group of three digits: `1` →
/// `thousandth`, `2` → `millionth`.
#[must_use]
pub fn fraction_unit_name(group: u64, plural: bool) -> String {
    let mut name = power_name(group).into_owned();
    name.push_str(ORDINAL);
    if plural {
        name.push_str(PLURAL);
    }
    name
}

/// Word for the integer group `10^(3 * group)`, `group >= 1`
fn power_name(group: u64) -> Cow<'static, str> {
    if group == 1 {
        Cow::Borrowed(THOUSAND)
    } else {
        Cow::Owned(latin_power_name(group - 1))
    }
}

/// Spell a value below one thousand. Zero yields no words.
fn push_small_number(words: &mut Words, value: u16) {
    let hundreds = usize::from(value / 100 % 10);
    let tens = usize::from(value / 10 % 10);
    let ones = usize::from(value % 10);

    if hundreds > 0 {
        words.push(DIGITS[hundreds].into());
        words.push(HUNDRED.into());
    }
    if tens == 1 {
        words.push(TEENS[ones].into());
        return;
    }
    if tens > 1 {
        words.push(TENS[tens].into());
    }
    if ones > 0 {
        words.push(DIGITS[ones].into());
    }
}

fn chunk_value(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}
