use thiserror::Error;

/// Errors produced while converting between numbers and numeral phrases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("Invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("Invalid number phrase: {0}")]
    InvalidNumberPhrase(String),

    #[error("Invalid latin power name: {0:?}")]
    InvalidLatinPowerName(String),

    /// Exponent rebasing left the representable range. Never returned from the
    /// public API: callers see `InvalidNumberFormat` or `InvalidNumberPhrase`.
    #[error("Arithmetic overflow while rebasing an exponent")]
    ArithmeticOverflow,
}

impl NumeralError {
    /// Re-raise any error from a decoder sub-step as a phrase error
    pub(crate) fn into_phrase_error(self, phrase: &str) -> Self {
        match self {
            Self::InvalidNumberPhrase(_) => self,
            Self::ArithmeticOverflow => {
                Self::InvalidNumberPhrase(format!("magnitude out of range in {phrase:?}"))
            }
            other => Self::InvalidNumberPhrase(format!("{other} in {phrase:?}")),
        }
    }

    /// Escalate an internal overflow to a format error
    pub(crate) fn into_format_error(self, raw: &str) -> Self {
        match self {
            Self::ArithmeticOverflow => {
                Self::InvalidNumberFormat(format!("exponent out of range: {raw:?}"))
            }
            other => other,
        }
    }
}

/// Result type for numeral conversions
pub type NumeralResult<T> = Result<T, NumeralError>;
