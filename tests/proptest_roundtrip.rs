use numphrase::{
    latin_power_name, latin_power_name_to_latin_power, normalize_number_string, number_to_phrase,
    phrase_to_number, FractionMode, NumeralConfig, NumeralError, Numerals,
};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = FractionMode> {
    prop_oneof![
        Just(FractionMode::Default),
        Just(FractionMode::Simple),
        Just(FractionMode::Fancy),
    ]
}

/// Plain decimal strings with optional sign, redundant zeros and long fractions
fn plain_number() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{1,40}", proptest::option::of("[0-9]{1,30}")).prop_map(
        |(negative, int, frac)| {
            let sign = if negative { "-" } else { "" };
            match frac {
                Some(frac) => format!("{sign}{int}.{frac}"),
                None => format!("{sign}{int}"),
            }
        },
    )
}

/// Exponential strings far enough from the point to stay exponential
fn exponential_number() -> impl Strategy<Value = String> {
    ("[1-9]", "[0-9]{0,10}", 70i64..100_000, any::<bool>()).prop_map(
        |(lead, rest, exponent, negative_exponent)| {
            let exponent = if negative_exponent { -exponent } else { exponent };
            format!("{lead}.{rest}E{exponent}")
        },
    )
}

proptest! {
    #[test]
    fn plain_numbers_roundtrip(number in plain_number(), mode in mode()) {
        let numerals = Numerals::default();
        let phrase = numerals.number_to_phrase_with(&number, mode).unwrap();
        prop_assert_eq!(
            numerals.phrase_to_number(&phrase).unwrap(),
            normalize_number_string(&number).unwrap(),
            "phrase {:?}", phrase
        );
    }

    #[test]
    fn exponential_numbers_roundtrip(number in exponential_number(), mode in mode()) {
        let numerals = Numerals::default();
        let phrase = numerals.number_to_phrase_with(&number, mode).unwrap();
        prop_assert!(phrase.contains("exponent"), "{}", phrase);
        prop_assert_eq!(
            numerals.phrase_to_number(&phrase).unwrap(),
            normalize_number_string(&number).unwrap()
        );
    }

    #[test]
    fn exponential_phrase_roundtrip(number in plain_number()) {
        let numerals = Numerals::default();
        let phrase = numerals.number_to_exponential_phrase(&number).unwrap();
        prop_assert_eq!(
            numerals.phrase_to_number(&phrase).unwrap(),
            normalize_number_string(&number).unwrap(),
            "phrase {:?}", phrase
        );
    }

    #[test]
    fn small_thresholds_roundtrip(number in plain_number(), threshold in 0usize..8) {
        let numerals =
            Numerals::new(NumeralConfig::default().with_high_precision_digits(threshold));
        let phrase = numerals.number_to_phrase(&number).unwrap();
        prop_assert_eq!(
            numerals.phrase_to_number(&phrase).unwrap(),
            numerals.normalize_number_string(&number).unwrap()
        );
    }

    #[test]
    fn latin_powers_roundtrip(power in 1u64..) {
        let name = latin_power_name(power);
        prop_assert_eq!(latin_power_name_to_latin_power(&name), Ok(power));
    }

    #[test]
    fn minus_literal_is_negated_or_rejected(number in plain_number()) {
        let unsigned = number.trim_start_matches('-');
        let signed = format!("-{unsigned}");
        match phrase_to_number(&signed) {
            Ok(decoded) => {
                prop_assert_eq!(decoded, normalize_number_string(&signed).unwrap());
            }
            Err(e) => {
                prop_assert!(matches!(e, NumeralError::InvalidNumberPhrase(_)), "{:?}", e);
            }
        }
    }

    #[test]
    fn minus_glued_to_a_phrase_is_never_dropped(number in plain_number(), mode in mode()) {
        let unsigned = number.trim_start_matches('-');
        let phrase = number_to_phrase(unsigned, mode).unwrap();
        let positive = normalize_number_string(unsigned).unwrap();
        match phrase_to_number(&format!("-{phrase}")) {
            Ok(decoded) => {
                prop_assert!(decoded != positive || positive == "0", "{}", decoded);
            }
            Err(e) => {
                prop_assert!(matches!(e, NumeralError::InvalidNumberPhrase(_)), "{:?}", e);
            }
        }
    }

    #[test]
    fn phrase_decoding_never_panics(phrase in "[a-z0-9 .,-]{0,60}") {
        let _ = phrase_to_number(&phrase);
    }
}
