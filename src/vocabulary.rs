//! Word tables for numeral phrases and latin power names.
//!
//! Every table is indexed by the digit it names, so index 0 is unused where
//! the category has no word for zero.

/// Digit words, `zero` through `nine`
pub const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for 10 through 19, indexed by the ones digit
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Multiples of ten from twenty up, indexed by the tens digit
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const HUNDRED: &str = "hundred";
pub const THOUSAND: &str = "thousand";

pub const NEGATIVE: &str = "negative";
pub const POINT: &str = "point";
pub const AND: &str = "and";
pub const EXPONENT: &str = "exponent";
pub const PLURAL: &str = "s";

/// Accepted spelling of [`NEGATIVE`] when decoding
pub const NEGATIVE_ALIAS: &str = "minus";
/// Spoken zeros that may precede [`HUNDRED`] and are dropped when decoding
pub const HUNDRED_FILLERS: [&str; 2] = ["oh", "o"];

/// Ordinal suffix turning a power word into a fraction word
pub const ORDINAL: &str = "th";

/// Reciprocal forms of the first fractional group, by number of digits
pub const RECIPROCALS: [&str; 3] = ["tenth", "hundredth", "thousandth"];

/// Stems of the reserved names `million` through `nonillion`
pub const LATIN_SPECIAL: [&str; 10] = [
    "ni", "mi", "bi", "tri", "quadri", "quinti", "sexti", "septi", "octi", "noni",
];

pub const LATIN_ONES: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quin", "sex", "septen", "octo", "novem",
];

pub const LATIN_TENS: [&str; 10] = [
    "",
    "dec",
    "vigint",
    "trigint",
    "quadragint",
    "quinquagint",
    "sexagint",
    "septuagint",
    "octogint",
    "nonagint",
];

pub const LATIN_HUNDREDS: [&str; 10] = [
    "",
    "cent",
    "ducent",
    "trecent",
    "quadringent",
    "quingent",
    "sescent",
    "septingent",
    "octingent",
    "nongent",
];

/// Separates base-1000 groups inside a latin power name
pub const LATIN_SEPARATOR: &str = "milli";

/// Suffix after a stem ending in a vowel (`mi` + `llion`)
pub const SUFFIX_AFTER_VOWEL: &str = "llion";
/// Suffix after a consonant-final prefix (`dec` + `illion`)
pub const SUFFIX_AFTER_CONSONANT: &str = "illion";
/// Vowel joining a consonant-final prefix to [`SUFFIX_AFTER_VOWEL`]
pub const LATIN_CONNECTIVE: &str = "i";

/// Look up a word in a digit-indexed table, ignoring the empty slots
#[must_use]
pub fn digit_of(table: &[&str; 10], word: &str) -> Option<u8> {
    table
        .iter()
        .position(|&w| !w.is_empty() && w == word)
        .and_then(|i| u8::try_from(i).ok())
}

/// One classified piece of a latin power name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatinPiece {
    Special(u8),
    Ones(u8),
    Tens(u8),
    Hundreds(u8),
    Separator,
}

/// Every latin piece with its spelling, longest spelling first
#[must_use]
pub fn latin_pieces_longest_first() -> &'static [(&'static str, LatinPiece)] {
    use std::sync::OnceLock;

    static PIECES: OnceLock<Vec<(&'static str, LatinPiece)>> = OnceLock::new();
    PIECES.get_or_init(|| {
        let mut pieces = vec![(LATIN_SEPARATOR, LatinPiece::Separator)];
        for digit in 0..10u8 {
            let i = usize::from(digit);
            pieces.push((LATIN_SPECIAL[i], LatinPiece::Special(digit)));
            if digit > 0 {
                pieces.push((LATIN_ONES[i], LatinPiece::Ones(digit)));
                pieces.push((LATIN_TENS[i], LatinPiece::Tens(digit)));
                pieces.push((LATIN_HUNDREDS[i], LatinPiece::Hundreds(digit)));
            }
        }
        pieces.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        pieces
    })
}
