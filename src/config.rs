/// How the fractional part of a number is phrased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FractionMode {
    /// Digit-by-digit for short fractions, grouped otherwise
    #[default]
    Default,
    /// Always digit-by-digit: "three point one four"
    Simple,
    /// Always grouped into named units: "three and fourteen hundredths"
    Fancy,
}

/// Default exponential promotion threshold, in digits
pub const DEFAULT_HIGH_PRECISION_DIGITS: usize = 64;

/// Tunables shared by the normalizer, the encoder and the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralConfig {
    /// Numbers whose most significant digit lies more than this many digits
    /// away from the decimal point are written in exponential form.
    pub high_precision_digits: usize,
    /// [`FractionMode::Default`] reads at most this many fractional digits
    /// one by one.
    pub max_point_digits: usize,
    /// [`FractionMode::Default`] switches to grouped phrasing when the
    /// fraction starts with more zeros than this.
    pub max_point_leading_zeros: usize,
    pub fraction_mode: FractionMode,
}

impl NumeralConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            high_precision_digits: DEFAULT_HIGH_PRECISION_DIGITS,
            max_point_digits: 6,
            max_point_leading_zeros: 2,
            fraction_mode: FractionMode::Default,
        }
    }

    #[must_use]
    pub const fn with_high_precision_digits(mut self, digits: usize) -> Self {
        self.high_precision_digits = digits;
        self
    }

    #[must_use]
    pub const fn with_max_point_digits(mut self, digits: usize) -> Self {
        self.max_point_digits = digits;
        self
    }

    #[must_use]
    pub const fn with_max_point_leading_zeros(mut self, zeros: usize) -> Self {
        self.max_point_leading_zeros = zeros;
        self
    }

    #[must_use]
    pub const fn with_fraction_mode(mut self, mode: FractionMode) -> Self {
        self.fraction_mode = mode;
        self
    }

    /// Whether `fraction` (no trailing zeros) is read digit-by-digit under `mode`
    pub(crate) fn reads_digit_by_digit(&self, mode: FractionMode, fraction: &str) -> bool {
        match mode {
            FractionMode::Simple => true,
            FractionMode::Fancy => false,
            FractionMode::Default => {
                let leading_zeros = fraction.bytes().take_while(|&b| b == b'0').count();
                fraction.len() <= self.max_point_digits
                    && leading_zeros <= self.max_point_leading_zeros
            }
        }
    }
}

impl Default for NumeralConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = NumeralConfig::default();
        assert_eq!(config.high_precision_digits, 64);
        assert_eq!(config.fraction_mode, FractionMode::Default);
    }

    #[test]
    fn test_default_mode_picks_point_form_for_short_fractions() {
        let config = NumeralConfig::default();
        assert!(config.reads_digit_by_digit(FractionMode::Default, "14"));
        assert!(config.reads_digit_by_digit(FractionMode::Default, "005"));
        assert!(!config.reads_digit_by_digit(FractionMode::Default, "0005"));
        assert!(!config.reads_digit_by_digit(FractionMode::Default, "1234567"));
        assert!(config.reads_digit_by_digit(FractionMode::Simple, "1234567"));
        assert!(!config.reads_digit_by_digit(FractionMode::Fancy, "5"));
    }
}
