//! # numphrase
//!
//! A bidirectional codec between arbitrary-precision decimal numbers and
//! English numeral phrases.
//!
//! - **Arbitrary magnitude**: powers of one thousand are named with a
//!   generative latin scheme (`million`, `decillion`, `unmillinillion`, ...)
//!   so no number is too large to spell.
//! - **Exact**: numbers are handled as digit strings and never pass through
//!   floating point.
//! - **Round-trip**: every phrase the encoder produces decodes back to the
//!   canonical form of the number it came from.
//!
//! ## Examples
//!
//! ```rust
//! use numphrase::{number_to_phrase, phrase_to_number, FractionMode};
//!
//! let phrase = number_to_phrase("1234", FractionMode::Default).unwrap();
//! assert_eq!(phrase, "one thousand two hundred thirty four");
//! assert_eq!(phrase_to_number(&phrase).unwrap(), "1234");
//!
//! // Fractions can be read digit by digit or in named units
//! assert_eq!(
//!     number_to_phrase("3.5", FractionMode::Fancy).unwrap(),
//!     "three and five tenths"
//! );
//! assert_eq!(phrase_to_number("twelve hundred").unwrap(), "1200");
//! ```
//!
//! Thresholds live in [`NumeralConfig`]; [`Numerals`] binds one to every
//! operation:
//!
//! ```rust
//! use numphrase::{NumeralConfig, Numerals};
//!
//! let numerals = Numerals::new(NumeralConfig::default().with_high_precision_digits(3));
//! assert_eq!(
//!     numerals.number_to_phrase("12345").unwrap(),
//!     "one point two three four five exponent four"
//! );
//! ```
//!
//! ## Phrase grammar
//!
//! Integers are read in chunks below one thousand, each followed by the
//! name of its power of one thousand. Fractions are either read digit by
//! digit after `point`, or grouped into `tenths`, `hundredths`,
//! `thousandths`, `millionths`, ... after `and`. Numbers whose leading
//! digit lies too far from the decimal point are phrased as
//! `mantissa exponent power`.

pub mod config;
pub mod decimal;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub mod error;
pub mod latin;
pub(crate) mod tokenizer;
pub mod vocabulary;

pub use config::{FractionMode, NumeralConfig, DEFAULT_HIGH_PRECISION_DIGITS};
pub use decimal::CanonicalNumber;
pub use encoder::fraction_unit_name;
pub use error::{NumeralError, NumeralResult};
pub use latin::{latin_power_name, latin_power_name_to_latin_power, latin_power_stem};

/// Numeral codec bound to a [`NumeralConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numerals {
    config: NumeralConfig,
}

impl Numerals {
    #[must_use]
    pub const fn new(config: NumeralConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &NumeralConfig {
        &self.config
    }

    /// Parse and canonicalize a number string.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `raw` is not a
    /// plain or exponential decimal.
    pub fn normalize(&self, raw: &str) -> NumeralResult<CanonicalNumber> {
        CanonicalNumber::normalize(raw, self.config.high_precision_digits)
    }

    /// Canonical string form of `raw`, e.g. `"007.50"` → `"7.5"`.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `raw` is not a number.
    pub fn normalize_number_string(&self, raw: &str) -> NumeralResult<String> {
        self.normalize(raw).map(|n| n.to_string())
    }

    /// Spell a number out using the configured fraction mode.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `number` is not a number.
    pub fn number_to_phrase(&self, number: &str) -> NumeralResult<String> {
        self.number_to_phrase_with(number, self.config.fraction_mode)
    }

    /// Spell a number out with an explicit fraction mode.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `number` is not a number.
    pub fn number_to_phrase_with(&self, number: &str, mode: FractionMode) -> NumeralResult<String> {
        Ok(self.encode(&self.normalize(number)?, mode))
    }

    /// Spell a canonical number out.
    #[must_use]
    pub fn encode(&self, number: &CanonicalNumber, mode: FractionMode) -> String {
        encoder::canonical_to_phrase(number, mode, &self.config)
    }

    /// Spell a number out as `mantissa exponent power` regardless of its size.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberFormat`] if `number` is not a number.
    pub fn number_to_exponential_phrase(&self, number: &str) -> NumeralResult<String> {
        let number = self.normalize(number)?;
        Ok(encoder::exponential_phrase(&number, &self.config))
    }

    /// Read a phrase back into its canonical number string.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberPhrase`] if `phrase` is not a
    /// numeral phrase.
    pub fn phrase_to_number(&self, phrase: &str) -> NumeralResult<String> {
        self.decode(phrase).map(|n| n.to_string())
    }

    /// Read a phrase back into a canonical number.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InvalidNumberPhrase`] if `phrase` is not a
    /// numeral phrase.
    pub fn decode(&self, phrase: &str) -> NumeralResult<CanonicalNumber> {
        decoder::phrase_to_canonical(phrase, &self.config)
    }
}

/// Canonical string form of `raw` under the default configuration.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidNumberFormat`] if `raw` is not a number.
pub fn normalize_number_string(raw: &str) -> NumeralResult<String> {
    Numerals::default().normalize_number_string(raw)
}

/// Spell a number out under the default configuration.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidNumberFormat`] if `number` is not a number.
pub fn number_to_phrase(number: &str, mode: FractionMode) -> NumeralResult<String> {
    Numerals::default().number_to_phrase_with(number, mode)
}

/// Spell a number out in exponential form.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidNumberFormat`] if `number` is not a number.
pub fn number_to_exponential_phrase(number: &str) -> NumeralResult<String> {
    Numerals::default().number_to_exponential_phrase(number)
}

/// Read a phrase back into its canonical number string.
///
/// # Errors
///
/// Returns [`NumeralError::InvalidNumberPhrase`] if `phrase` is not a
/// numeral phrase.
pub fn phrase_to_number(phrase: &str) -> NumeralResult<String> {
    Numerals::default().phrase_to_number(phrase)
}
