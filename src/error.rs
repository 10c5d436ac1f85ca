use core::fmt;

/// Value reported by the classic C-style TMP102 drivers for any failure.
///
/// Kept for callers that log or forward a single status byte; see [`Error::sentinel`].
pub const ERROR_SENTINEL: u8 = 0xFF;

/// Failures of the pure conversion layer, before any bus traffic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Buffer of the wrong length, or a register address the sensor doesn't have.
    InvalidInput,
    /// Temperature outside of -40.0 ..= 128.0 °C (or NaN).
    OutOfRange,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput => f.write_str("invalid input"),
            ConversionError::OutOfRange => f.write_str("temperature out of range"),
        }
    }
}

/// TMP102 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Buffer of the wrong length, or an unknown register address
    InvalidInput,
    /// Temperature can't be represented in a threshold register
    OutOfRange,
    /// I²C bus error
    Bus(E),
}

impl<E> Error<E> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::InvalidInput => "Invalid input",
            Error::OutOfRange => "Out of range",
            Error::Bus(_) => "Bus error",
        }
    }

    /// Collapse into the single status byte used by C drivers.
    ///
    /// Every variant maps to [`ERROR_SENTINEL`].
    pub const fn sentinel(&self) -> u8 {
        ERROR_SENTINEL
    }

    pub fn is_bus(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

impl<E> From<ConversionError> for Error<E> {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidInput => Error::InvalidInput,
            ConversionError::OutOfRange => Error::OutOfRange,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "{}: {:?}", self.as_str(), e),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn conversion_error_lifts_into_driver_error() {
        let err: Error<()> = ConversionError::OutOfRange.into();
        assert_eq!(err, Error::OutOfRange);
        let err: Error<()> = ConversionError::InvalidInput.into();
        assert_eq!(err, Error::InvalidInput);
    }

    #[test]
    fn every_variant_shares_the_sentinel() {
        assert_eq!(Error::<()>::InvalidInput.sentinel(), 0xFF);
        assert_eq!(Error::<()>::OutOfRange.sentinel(), 0xFF);
        assert_eq!(Error::Bus(()).sentinel(), 0xFF);
    }

    #[test]
    fn display() {
        assert_eq!(Error::<u8>::OutOfRange.to_string(), "Out of range");
        assert_eq!(Error::Bus(3u8).to_string(), "Bus error: 3");
        assert_eq!(ConversionError::InvalidInput.to_string(), "invalid input");
    }
}
