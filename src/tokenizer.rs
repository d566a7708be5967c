//! Splitting a numeral phrase into classified tokens

use crate::config::{FractionMode, NumeralConfig};
use crate::decimal::CanonicalNumber;
use crate::encoder::plain_phrase;
use crate::error::{NumeralError, NumeralResult};
use crate::latin::latin_power_name_to_latin_power;
use crate::vocabulary::{
    digit_of, AND, DIGITS, EXPONENT, HUNDRED, HUNDRED_FILLERS, NEGATIVE, NEGATIVE_ALIAS,
    ORDINAL, PLURAL, POINT, RECIPROCALS, SUFFIX_AFTER_VOWEL, TEENS, TENS, THOUSAND,
};
use tracing::debug;

/// One classified word of a numeral phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `zero` through `nine`
    Digit(u8),
    /// `ten` through `nineteen`, carrying the value
    Teen(u8),
    /// `twenty` through `ninety`, carrying the value
    Tens(u8),
    Hundred,
    /// `thousand` (group 1) or an `-illion` word (group = latin power + 1)
    Power(u64),
    /// A fractional unit. The chunk before it is multiplied by `scale` and
    /// lands in fractional group `group` (1 = thousandths).
    Fraction { group: u64, scale: u16, plural: bool },
    Negative,
    Point,
    And,
}

/// Build the error every malformed phrase ends in
pub(crate) fn reject(phrase: &str, reason: impl std::fmt::Display) -> NumeralError {
    debug!(phrase, %reason, "rejecting numeral phrase");
    NumeralError::InvalidNumberPhrase(format!("{reason} in {phrase:?}"))
}

/// Lowercase the phrase and split it into words on whitespace and commas.
/// A hyphen splits only between two letters ("thirty-four"); elsewhere it
/// stays in the word, so `-5` remains a signed literal. Spoken zeros before
/// `hundred` ("nineteen oh hundred") are dropped.
pub(crate) fn split_words(phrase: &str) -> Vec<String> {
    let chars: Vec<char> = phrase.chars().collect();
    let spaced: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let joins_words = c == '-'
                && i > 0
                && chars[i - 1].is_alphabetic()
                && chars.get(i + 1).is_some_and(|next| next.is_alphabetic());
            if joins_words || c == ',' {
                ' '
            } else {
                c
            }
        })
        .collect();
    let words: Vec<String> = spaced.split_whitespace().map(str::to_lowercase).collect();

    let mut out = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let before_hundred = words.get(i + 1).is_some_and(|next| next == HUNDRED);
        if before_hundred && HUNDRED_FILLERS.contains(&word.as_str()) {
            continue;
        }
        out.push(word.clone());
    }
    out
}

/// Split the words around the exponent marker into mantissa and exponent.
///
/// # Errors
///
/// Fails on a repeated marker or when either side of it is empty.
pub(crate) fn split_exponent<'a>(
    phrase: &str,
    words: &'a [String],
) -> NumeralResult<(&'a [String], Option<&'a [String]>)> {
    let mut markers = words.iter().enumerate().filter(|(_, w)| *w == EXPONENT);
    let Some((pos, _)) = markers.next() else {
        return Ok((words, None));
    };
    if markers.next().is_some() {
        return Err(reject(phrase, "repeated exponent marker"));
    }

    let (mantissa, exponent) = (&words[..pos], &words[pos + 1..]);
    if mantissa.is_empty() || exponent.is_empty() {
        return Err(reject(phrase, "empty fragment around exponent marker"));
    }
    Ok((mantissa, Some(exponent)))
}

/// Classify every word. Digit literals such as `"250"`, `"1.5"` or `"-3"` are
/// spelled out with the encoder and their words spliced in, so a signed
/// literal contributes a leading `negative`.
pub(crate) fn tokenize(
    phrase: &str,
    words: &[String],
    config: &NumeralConfig,
) -> NumeralResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(words.len());
    for word in words {
        if is_literal(word) {
            // Literals always expand in plain form so no exponent marker appears
            let literal = CanonicalNumber::normalize(word, usize::MAX)
                .map_err(|e| e.into_phrase_error(phrase))?;
            for spelled in plain_phrase(&literal, FractionMode::Simple, config) {
                tokens.push(classify(phrase, &spelled)?);
            }
        } else {
            tokens.push(classify(phrase, word)?);
        }
    }
    Ok(tokens)
}

/// `digits` or `digits.digits`, optionally preceded by `-`
fn is_literal(word: &str) -> bool {
    let unsigned = word.strip_prefix('-').unwrap_or(word);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    !int.is_empty()
        && !frac.is_empty()
        && int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
}

fn classify(phrase: &str, word: &str) -> NumeralResult<Token> {
    if let Some(d) = digit_of(&DIGITS, word) {
        return Ok(Token::Digit(d));
    }
    if let Some(d) = digit_of(&TEENS, word) {
        return Ok(Token::Teen(10 + d));
    }
    if let Some(d) = digit_of(&TENS, word) {
        return Ok(Token::Tens(10 * d));
    }
    match word {
        HUNDRED => return Ok(Token::Hundred),
        THOUSAND => return Ok(Token::Power(1)),
        NEGATIVE | NEGATIVE_ALIAS => return Ok(Token::Negative),
        POINT => return Ok(Token::Point),
        AND => return Ok(Token::And),
        EXPONENT => return Err(reject(phrase, "misplaced exponent marker")),
        _ => {}
    }

    let (singular, plural) = match word.strip_suffix(PLURAL) {
        Some(stem) if stem.ends_with(ORDINAL) => (stem, true),
        _ => (word, false),
    };
    if let Some(unit) = singular.strip_suffix(ORDINAL) {
        if let Some(i) = RECIPROCALS[..2].iter().position(|&r| r == singular) {
            // tenths and hundredths are read in thousandths
            let scale = if i == 0 { 100 } else { 10 };
            return Ok(Token::Fraction { group: 1, scale, plural });
        }
        let group = power_group(phrase, unit)?;
        return Ok(Token::Fraction { group, scale: 1, plural });
    }

    if word.ends_with(SUFFIX_AFTER_VOWEL) {
        return Ok(Token::Power(power_group(phrase, word)?));
    }
    Err(reject(phrase, format_args!("unknown word {word:?}")))
}

/// Group index of `thousand` or an `-illion` word
fn power_group(phrase: &str, word: &str) -> NumeralResult<u64> {
    if word == THOUSAND {
        return Ok(1);
    }
    latin_power_name_to_latin_power(word)
        .map_err(|e| e.into_phrase_error(phrase))?
        .checked_add(1)
        .ok_or_else(|| reject(phrase, format_args!("power {word:?} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(phrase: &str) -> NumeralResult<Vec<Token>> {
        let words = split_words(phrase);
        tokenize(phrase, &words, &NumeralConfig::default())
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("  Thirty-Four,  Thousand "),
            vec!["thirty", "four", "thousand"]
        );
        assert_eq!(
            split_words("nineteen oh hundred"),
            vec!["nineteen", "hundred"]
        );
        assert_eq!(split_words("six o hundred"), vec!["six", "hundred"]);
        // "o" not before "hundred" is left for the tokenizer to reject
        assert_eq!(split_words("o five"), vec!["o", "five"]);
    }

    #[test]
    fn test_classifies_vocabulary() {
        assert_eq!(
            tokens("zero nine eleven ninety hundred thousand").unwrap(),
            vec![
                Token::Digit(0),
                Token::Digit(9),
                Token::Teen(11),
                Token::Tens(90),
                Token::Hundred,
                Token::Power(1),
            ]
        );
        assert_eq!(
            tokens("minus negative point and").unwrap(),
            vec![Token::Negative, Token::Negative, Token::Point, Token::And]
        );
        assert_eq!(
            tokens("million decillion").unwrap(),
            vec![Token::Power(2), Token::Power(11)]
        );
    }

    #[test]
    fn test_classifies_fraction_units() {
        assert_eq!(
            tokens("tenth hundredths thousandth millionths").unwrap(),
            vec![
                Token::Fraction { group: 1, scale: 100, plural: false },
                Token::Fraction { group: 1, scale: 10, plural: true },
                Token::Fraction { group: 1, scale: 1, plural: false },
                Token::Fraction { group: 2, scale: 1, plural: true },
            ]
        );
    }

    #[test]
    fn test_literals_are_spelled_out() {
        assert_eq!(
            tokens("250 million").unwrap(),
            vec![
                Token::Digit(2),
                Token::Hundred,
                Token::Tens(50),
                Token::Power(2),
            ]
        );
        assert_eq!(
            tokens("1.5").unwrap(),
            vec![Token::Digit(1), Token::Point, Token::Digit(5)]
        );
    }

    #[test]
    fn test_hyphen_splits_only_between_letters() {
        assert_eq!(split_words("twenty-one"), vec!["twenty", "one"]);
        assert_eq!(split_words("-5"), vec!["-5"]);
        assert_eq!(split_words("one exponent -3"), vec!["one", "exponent", "-3"]);
        assert_eq!(split_words("-five"), vec!["-five"]);
        assert_eq!(split_words("minus-5"), vec!["minus-5"]);
        assert_eq!(split_words("twenty- one"), vec!["twenty-", "one"]);
    }

    #[test]
    fn test_signed_literals_keep_their_sign() {
        assert_eq!(tokens("-5").unwrap(), vec![Token::Negative, Token::Digit(5)]);
        assert_eq!(
            tokens("-1.5").unwrap(),
            vec![Token::Negative, Token::Digit(1), Token::Point, Token::Digit(5)]
        );
        // Negative zero has no sign to keep
        assert_eq!(tokens("-0").unwrap(), vec![Token::Digit(0)]);
    }

    #[test]
    fn test_rejects_unknown_words() {
        for bad in [
            "fourty", "gazillion", "thousands", "millions", "exponent", "1.", ".5", "tenthss", "-five",
            "minus-5", "5-", "--5", "-",
        ] {
            assert!(
                matches!(tokens(bad), Err(NumeralError::InvalidNumberPhrase(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_split_exponent() {
        let words = split_words("one point five exponent seventy");
        let (mantissa, exponent) = split_exponent("", &words).unwrap();
        assert_eq!(mantissa.len(), 3);
        assert_eq!(exponent.map(<[String]>::len), Some(1));

        let words = split_words("one exponent two exponent three");
        assert!(split_exponent("", &words).is_err());
        let words = split_words("one exponent");
        assert!(split_exponent("", &words).is_err());
    }
}
