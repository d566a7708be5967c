//! Names for powers of one thousand: `million`, `decillion`, `unmillinillion`, ...
//!
//! A latin power `p` names the group `10^(3p + 3)`, so `p = 1` is a million.
//! Powers 1 through 9 use reserved stems. From 10 upwards the power is split
//! into base-1000 triples; each triple is spelled hundreds, ones, tens and
//! followed by one `milli` per level above the lowest. Both directions walk
//! the triples in a loop, so stack use does not grow with the power.

use crate::error::{NumeralError, NumeralResult};
use crate::vocabulary::{
    latin_pieces_longest_first, LatinPiece, LATIN_CONNECTIVE, LATIN_HUNDREDS, LATIN_ONES,
    LATIN_SEPARATOR, LATIN_SPECIAL, LATIN_TENS, SUFFIX_AFTER_CONSONANT, SUFFIX_AFTER_VOWEL,
};

/// Spell out latin power `power` as a full word (`1` → `"million"`).
///
/// Power 0 has no latin name and yields an empty string. The bare stem
/// (`1` → `"mi"`) is [`latin_power_stem`].
#[must_use]
pub fn latin_power_name(power: u64) -> String {
    if power == 0 {
        return String::new();
    }
    let mut name = latin_power_stem(power);
    if name.ends_with(LATIN_CONNECTIVE) {
        name.push_str(SUFFIX_AFTER_VOWEL);
    } else {
        name.push_str(SUFFIX_AFTER_CONSONANT);
    }
    name
}

/// Spell out latin power `power` without its `-illion` suffix (`1` → `"mi"`).
#[must_use]
pub fn latin_power_stem(power: u64) -> String {
    if power == 0 {
        return String::new();
    }
    if power < 10 {
        return LATIN_SPECIAL[digit(power)].to_string();
    }

    let mut triples = Vec::new();
    let mut rest = power;
    while rest > 0 {
        triples.push(rest % 1000);
        rest /= 1000;
    }

    let mut stem = String::new();
    for (level, &triple) in triples.iter().enumerate().skip(1).rev() {
        if triple == 0 {
            continue;
        }
        push_triple(&mut stem, triple);
        for _ in 0..level {
            stem.push_str(LATIN_SEPARATOR);
        }
    }

    let lowest = triples[0];
    let (hundreds, tens, ones) = split_triple(lowest);
    if lowest == 0 {
        stem.push_str(LATIN_SPECIAL[0]);
    } else if tens == 0 && ones != 0 {
        stem.push_str(LATIN_HUNDREDS[hundreds]);
        stem.push_str(LATIN_SPECIAL[ones]);
    } else {
        push_triple(&mut stem, lowest);
    }
    stem
}

fn push_triple(out: &mut String, triple: u64) {
    let (hundreds, tens, ones) = split_triple(triple);
    out.push_str(LATIN_HUNDREDS[hundreds]);
    out.push_str(LATIN_ONES[ones]);
    out.push_str(LATIN_TENS[tens]);
}

fn split_triple(triple: u64) -> (usize, usize, usize) {
    (digit(triple / 100), digit(triple / 10 % 10), digit(triple % 10))
}

#[allow(clippy::cast_possible_truncation)]
const fn digit(value: u64) -> usize {
    (value % 10) as usize
}

/// Recover the latin power from its full name (`"decillion"` → `10`).
///
/// Matching is case-insensitive and only accepts the exact spelling
/// [`latin_power_name`] produces.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidLatinPowerName`] if `name` is not such a
/// spelling or names a power beyond `u64`.
pub fn latin_power_name_to_latin_power(name: &str) -> NumeralResult<u64> {
    let lower = name.trim().to_ascii_lowercase();
    let invalid = || NumeralError::InvalidLatinPowerName(name.to_string());

    let stem = lower
        .strip_suffix(SUFFIX_AFTER_VOWEL)
        .filter(|s| !s.is_empty())
        .ok_or_else(invalid)?;
    let pieces = tokenize(stem).ok_or_else(invalid)?;
    let power = assemble(&pieces).ok_or_else(invalid)?;

    // Reject spellings the namer would never produce (e.g. "unillion")
    if power == 0 || latin_power_name(power) != lower {
        return Err(invalid());
    }
    Ok(power)
}

/// Split a stem into latin pieces, longest piece first at each position.
///
/// A lone trailing `i` is the connective vowel and is dropped.
fn tokenize(stem: &str) -> Option<Vec<LatinPiece>> {
    let pieces = latin_pieces_longest_first();
    let mut out = Vec::new();
    let mut rest = stem;
    while !rest.is_empty() {
        if let Some((spelling, piece)) = pieces.iter().find(|(s, _)| rest.starts_with(s)) {
            out.push(*piece);
            rest = &rest[spelling.len()..];
        } else if rest == LATIN_CONNECTIVE && !out.is_empty() {
            break;
        } else {
            return None;
        }
    }
    Some(out)
}

/// Slot of a piece inside a triple: hundreds, then ones, then tens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Start,
    Hundreds,
    Ones,
    Tens,
}

/// Replay the triple decomposition from a piece sequence.
///
/// Levels are given by the length of each `milli` run and must strictly
/// decrease from left to right; the final triple has level 0.
fn assemble(pieces: &[LatinPiece]) -> Option<u64> {
    let mut total = 0u64;
    let mut triple = 0u64;
    let mut slot = Slot::Start;
    let mut run = 0u32;
    let mut previous_level: Option<u32> = None;

    let mut close = |triple: u64, level: u32| -> Option<()> {
        if previous_level.is_some_and(|prev| level >= prev) {
            return None;
        }
        previous_level = Some(level);
        let scaled = triple.checked_mul(1000u64.checked_pow(level)?)?;
        total = total.checked_add(scaled)?;
        Some(())
    };

    for (i, piece) in pieces.iter().enumerate() {
        if run > 0 && *piece != LatinPiece::Separator {
            close(triple, run)?;
            triple = 0;
            slot = Slot::Start;
            run = 0;
        }
        match *piece {
            LatinPiece::Separator => {
                if slot == Slot::Start {
                    return None;
                }
                run += 1;
            }
            LatinPiece::Hundreds(d) if slot < Slot::Hundreds => {
                triple += u64::from(d) * 100;
                slot = Slot::Hundreds;
            }
            LatinPiece::Ones(d) if slot < Slot::Ones => {
                triple += u64::from(d);
                slot = Slot::Ones;
            }
            LatinPiece::Tens(d) if slot < Slot::Tens => {
                triple += u64::from(d) * 10;
                slot = Slot::Tens;
            }
            LatinPiece::Special(d) if slot < Slot::Ones && i + 1 == pieces.len() => {
                triple += u64::from(d);
                slot = Slot::Ones;
            }
            _ => return None,
        }
    }

    if run > 0 || slot == Slot::Start {
        return None;
    }
    close(triple, 0)?;
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names() {
        let expected = [
            "", "million", "billion", "trillion", "quadrillion", "quintillion", "sextillion",
            "septillion", "octillion", "nonillion",
        ];
        for (power, name) in expected.iter().enumerate() {
            assert_eq!(latin_power_name(power as u64), *name, "power {power}");
        }
        assert_eq!(latin_power_stem(1), "mi");
        assert_eq!(latin_power_stem(9), "noni");
        assert_eq!(latin_power_stem(0), "");
    }

    #[test]
    fn test_compound_names() {
        let cases = [
            (10, "decillion"),
            (11, "undecillion"),
            (16, "sexdecillion"),
            (19, "novemdecillion"),
            (20, "vigintillion"),
            (21, "unvigintillion"),
            (30, "trigintillion"),
            (100, "centillion"),
            (101, "centmillion"),
            (110, "centdecillion"),
            (123, "centtrevigintillion"),
            (999, "nongentnovemnonagintillion"),
            (1000, "unmillinillion"),
            (1001, "unmillimillion"),
            (2000, "duomillinillion"),
            (1_000_000, "unmillimillinillion"),
            (1_000_010, "unmillimillidecillion"),
            (1_002_000, "unmillimilliduomillinillion"),
        ];
        for (power, name) in cases {
            assert_eq!(latin_power_name(power), name, "power {power}");
            assert_eq!(
                latin_power_name_to_latin_power(name),
                Ok(power),
                "name {name}"
            );
        }
    }

    #[test]
    fn test_roundtrip_first_two_thousand() {
        for power in 1..=2000 {
            let name = latin_power_name(power);
            assert_eq!(
                latin_power_name_to_latin_power(&name),
                Ok(power),
                "roundtrip failed for {power} ({name})"
            );
        }
    }

    #[test]
    fn test_roundtrip_sparse_large_powers() {
        for power in [
            999_999,
            1_000_001,
            123_456_789,
            1_000_000_000_000,
            u64::MAX / 3,
            u64::MAX,
        ] {
            let name = latin_power_name(power);
            assert_eq!(latin_power_name_to_latin_power(&name), Ok(power), "{name}");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(latin_power_name_to_latin_power("Million"), Ok(1));
        assert_eq!(latin_power_name_to_latin_power("DECILLION"), Ok(10));
    }

    #[test]
    fn test_rejects_unknown_and_non_canonical_names() {
        for bad in [
            "",
            "llion",
            "illion",
            "thousand",
            "gazillion",
            "millions",
            "unillion",
            "nillion",
            "decmillion",
            "milliunnillion",
            "unmillillion",
            "unmilliunmillinillion",
            "unmilliunmilliunmillinillion",
            "decdecillion",
            "decunillion",
            "centcentillion",
            "millimillion",
        ] {
            assert!(
                matches!(
                    latin_power_name_to_latin_power(bad),
                    Err(NumeralError::InvalidLatinPowerName(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overflowing_power() {
        // Seven levels of separators exceed u64
        let name = format!("un{}nillion", LATIN_SEPARATOR.repeat(7));
        assert!(latin_power_name_to_latin_power(&name).is_err());
    }
}
