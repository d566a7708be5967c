//! Reading numeral phrases back into canonical numbers
//!
//! Tokens are folded left to right into chunks below one thousand. A power
//! word closes the running chunk into the component for that power of one
//! thousand; fraction words close it into a negative power. Components are
//! then carried into range and reassembled into digits.

use crate::config::NumeralConfig;
use crate::decimal::CanonicalNumber;
use crate::error::{NumeralError, NumeralResult};
use crate::tokenizer::{reject, split_exponent, split_words, tokenize, Token};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Decode a numeral phrase into its canonical number.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidNumberPhrase`] for any phrase outside the
/// grammar; no partial result is produced.
pub fn phrase_to_canonical(phrase: &str, config: &NumeralConfig) -> NumeralResult<CanonicalNumber> {
    let words = split_words(phrase);
    if words.is_empty() {
        return Err(reject(phrase, "empty phrase"));
    }
    let (mantissa_words, exponent_words) = split_exponent(phrase, &words)?;

    let mantissa = decode_magnitude(phrase, &tokenize(phrase, mantissa_words, config)?)?;
    let exponent = match exponent_words {
        Some(words) => decode_magnitude(phrase, &tokenize(phrase, words, config)?)?
            .to_i64()
            .ok_or_else(|| reject(phrase, "exponent is not an integer in range"))?,
        None => 0,
    };

    let exponent = mantissa
        .exponent
        .checked_add(exponent)
        .ok_or_else(|| reject(phrase, "exponent out of range"))?;
    CanonicalNumber::from_parts(
        mantissa.negative,
        &mantissa.digits,
        "",
        exponent,
        config.high_precision_digits,
    )
    .map_err(|e| e.into_phrase_error(phrase))
}

/// `±digits × 10^exponent`, `digits` free of leading zeros
#[derive(Debug, Clone, PartialEq, Eq)]
struct Magnitude {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Magnitude {
    fn to_i64(&self) -> Option<i64> {
        if self.digits.is_empty() {
            return Some(0);
        }
        let scale = 10i64.checked_pow(u32::try_from(self.exponent).ok()?)?;
        let value = self.digits.parse::<i64>().ok()?.checked_mul(scale)?;
        Some(if self.negative { -value } else { value })
    }
}

/// Progress of the chunk being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkState {
    Empty,
    /// Ends in a ones digit or a teen; nothing but a multiplier may follow
    HasOnes,
    /// Ends in twenty..ninety; a ones digit may follow
    HasTens,
    /// Ends in `hundred`; tens, teens or ones may follow
    HasHundreds,
}

#[derive(Debug)]
struct Chunk {
    state: ChunkState,
    value: u64,
    /// Digits read after `point`, once it has been seen
    point_digits: Option<String>,
}

impl Chunk {
    const fn new() -> Self {
        Self {
            state: ChunkState::Empty,
            value: 0,
            point_digits: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.state == ChunkState::Empty && self.point_digits.is_none()
    }
}

/// Components keyed by power of one thousand (negative for fractions)
struct Accumulator<'p> {
    phrase: &'p str,
    components: BTreeMap<i64, u64>,
    chunk: Chunk,
    last_power: Option<i64>,
    seen_point: bool,
    seen_and: bool,
    closed_after_and: bool,
}

impl<'p> Accumulator<'p> {
    fn new(phrase: &'p str) -> Self {
        Self {
            phrase,
            components: BTreeMap::new(),
            chunk: Chunk::new(),
            last_power: None,
            seen_point: false,
            seen_and: false,
            closed_after_and: false,
        }
    }

    fn reject(&self, reason: impl std::fmt::Display) -> NumeralError {
        reject(self.phrase, reason)
    }

    fn push(&mut self, token: Token, first: bool, next: Option<Token>) -> NumeralResult<()> {
        if let Some(digits) = self.chunk.point_digits.as_mut() {
            return match token {
                Token::Digit(d) => {
                    digits.push(char::from(b'0' + d));
                    Ok(())
                }
                Token::Power(group) => self.close_power(group),
                _ => Err(self.reject(format_args!("{token:?} after point digits"))),
            };
        }

        match (token, self.chunk.state) {
            (Token::Digit(0), _) => {
                if !first || !matches!(next, None | Some(Token::Point | Token::And)) {
                    return Err(self.reject("zero inside a larger number"));
                }
                self.chunk.state = ChunkState::HasOnes;
            }
            (
                Token::Digit(d),
                ChunkState::Empty | ChunkState::HasTens | ChunkState::HasHundreds,
            ) => {
                self.chunk.value += u64::from(d);
                self.chunk.state = ChunkState::HasOnes;
            }
            (Token::Teen(v), ChunkState::Empty | ChunkState::HasHundreds) => {
                self.chunk.value += u64::from(v);
                self.chunk.state = ChunkState::HasOnes;
            }
            (Token::Tens(v), ChunkState::Empty | ChunkState::HasHundreds) => {
                self.chunk.value += u64::from(v);
                self.chunk.state = ChunkState::HasTens;
            }
            (Token::Hundred, ChunkState::HasOnes | ChunkState::HasTens)
                if (1..100).contains(&self.chunk.value) =>
            {
                self.chunk.value *= 100;
                self.chunk.state = ChunkState::HasHundreds;
            }
            (Token::Power(group), _) => self.close_power(group)?,
            (Token::Fraction { group, scale, plural }, _) => {
                self.close_fraction(group, scale, plural)?;
            }
            (Token::Point, _) => {
                if self.seen_point || self.seen_and {
                    return Err(self.reject("point after point or and"));
                }
                self.seen_point = true;
                self.chunk.point_digits = Some(String::new());
            }
            (Token::And, _) => {
                if self.seen_and || self.seen_point {
                    return Err(self.reject("and after and or point"));
                }
                if self.chunk.is_empty() && self.components.is_empty() {
                    return Err(self.reject("nothing before and"));
                }
                if !self.chunk.is_empty() {
                    self.close(0, 1)?;
                }
                self.seen_and = true;
            }
            (Token::Negative, _) => return Err(self.reject("misplaced negative")),
            (token, state) => {
                return Err(self.reject(format_args!("{token:?} cannot follow {state:?}")));
            }
        }
        Ok(())
    }

    fn close_power(&mut self, group: u64) -> NumeralResult<()> {
        if self.seen_and {
            return Err(self.reject("integer power after and"));
        }
        if self.chunk.is_empty() || self.chunk.point_digits.as_ref().is_some_and(String::is_empty)
        {
            return Err(self.reject("power word without a preceding magnitude"));
        }
        let power = i64::try_from(group).map_err(|_| self.reject("power out of range"))?;
        self.close(power, 1)
    }

    fn close_fraction(&mut self, group: u64, scale: u16, plural: bool) -> NumeralResult<()> {
        if self.chunk.state == ChunkState::Empty {
            return Err(self.reject("fraction word without a preceding magnitude"));
        }
        if plural != (self.chunk.value > 1) {
            return Err(self.reject("fraction word does not agree in number"));
        }
        let power = i64::try_from(group).map_err(|_| self.reject("power out of range"))?;
        self.close(-power, u64::from(scale))?;
        if self.seen_and {
            self.closed_after_and = true;
        }
        Ok(())
    }

    /// Add the running chunk, times `scale`, to the component at `power`.
    /// Point digits spill into the powers below it, and those powers are
    /// closed too: a later chunk must land below the last one they fill.
    fn close(&mut self, power: i64, scale: u64) -> NumeralResult<()> {
        if self.last_power.is_some_and(|last| power >= last) {
            return Err(self.reject("magnitudes out of order"));
        }
        self.last_power = Some(power);

        let chunk = std::mem::replace(&mut self.chunk, Chunk::new());
        let value = chunk
            .value
            .checked_mul(scale)
            .ok_or(NumeralError::ArithmeticOverflow)?;
        self.add(power, value)?;

        let digits = chunk.point_digits.unwrap_or_default();
        let mut below = power;
        for group in digits.as_bytes().chunks(3) {
            below = below.checked_sub(1).ok_or(NumeralError::ArithmeticOverflow)?;
            let value = group
                .iter()
                .chain(std::iter::repeat(&b'0'))
                .take(3)
                .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'));
            self.add(below, value)?;
        }
        self.last_power = Some(below);
        Ok(())
    }

    fn add(&mut self, power: i64, value: u64) -> NumeralResult<()> {
        let slot = self.components.entry(power).or_insert(0);
        *slot = slot
            .checked_add(value)
            .ok_or(NumeralError::ArithmeticOverflow)?;
        Ok(())
    }

    fn finish(mut self, negative: bool) -> NumeralResult<Magnitude> {
        if self.chunk.point_digits.as_ref().is_some_and(String::is_empty) {
            return Err(self.reject("no digits after point"));
        }
        if !self.chunk.is_empty() {
            if self.seen_and {
                return Err(self.reject("fraction after and has no unit"));
            }
            self.close(0, 1)?;
        }
        if self.seen_and && !self.closed_after_and {
            return Err(self.reject("nothing after and"));
        }
        if self.components.is_empty() {
            return Err(self.reject("no magnitude"));
        }
        let (digits, exponent) = reassemble(carry(self.components)?)?;
        Ok(Magnitude {
            negative,
            digits,
            exponent,
        })
    }
}

/// Fold every component into `0..1000`, carrying overflow to the next power
fn carry(components: BTreeMap<i64, u64>) -> NumeralResult<BTreeMap<i64, u64>> {
    let mut folded = BTreeMap::new();
    let mut carry = 0u64;
    let mut entries = components.into_iter().peekable();
    let Some(&(mut power, _)) = entries.peek() else {
        return Ok(folded);
    };

    loop {
        let value = if entries.peek().is_some_and(|&(p, _)| p == power) {
            entries.next().map_or(0, |(_, v)| v)
        } else {
            0
        };
        let total = value
            .checked_add(carry)
            .ok_or(NumeralError::ArithmeticOverflow)?;
        if total % 1000 != 0 {
            folded.insert(power, total % 1000);
        }
        carry = total / 1000;
        if carry == 0 {
            // Skip straight to the next component
            match entries.peek() {
                Some(&(p, _)) => power = p,
                None => break,
            }
        } else {
            power = power.checked_add(1).ok_or(NumeralError::ArithmeticOverflow)?;
        }
    }
    Ok(folded)
}

/// Zero-padded digits from the highest to the lowest nonzero component,
/// with the power of ten of the last digit.
fn reassemble(folded: BTreeMap<i64, u64>) -> NumeralResult<(String, i64)> {
    let (Some((&lowest, _)), Some((&highest, _))) =
        (folded.first_key_value(), folded.last_key_value())
    else {
        return Ok((String::new(), 0));
    };

    // Gaps between far-apart powers are spelled out in zeros; a span the
    // allocator cannot provide is reported rather than aborting
    let span = highest.abs_diff(lowest).saturating_add(1).saturating_mul(3);
    let mut digits = String::new();
    usize::try_from(span)
        .ok()
        .and_then(|span| digits.try_reserve_exact(span).ok())
        .ok_or(NumeralError::ArithmeticOverflow)?;
    for power in (lowest..=highest).rev() {
        let group = folded.get(&power).copied().unwrap_or(0);
        let _ = write!(digits, "{group:03}");
    }
    let digits = digits.trim_start_matches('0').to_string();
    let exponent = lowest
        .checked_mul(3)
        .ok_or(NumeralError::ArithmeticOverflow)?;
    Ok((digits, exponent))
}

/// Decode one side of the exponent marker
fn decode_magnitude(phrase: &str, tokens: &[Token]) -> NumeralResult<Magnitude> {
    let (negative, tokens) = match tokens.split_first() {
        Some((Token::Negative, rest)) => (true, rest),
        _ => (false, tokens),
    };
    if tokens.is_empty() {
        return Err(reject(phrase, "empty fragment after modifier"));
    }

    let mut acc = Accumulator::new(phrase);
    for (i, &token) in tokens.iter().enumerate() {
        acc.push(token, i == 0, tokens.get(i + 1).copied())
            .map_err(|e| e.into_phrase_error(phrase))?;
    }
    acc.finish(negative).map_err(|e| e.into_phrase_error(phrase))
}
