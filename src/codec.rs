//! Conversion between Celsius and the TMP102 temperature register format.
//!
//! Temperature, T_LOW and T_HIGH all hold a 12-bit two's-complement value,
//! left-justified in 16 bits, MSB first on the wire. One LSB is 0.0625 °C.

use core::convert::TryFrom;

use num_traits::ToPrimitive;

use crate::error::ConversionError;

/// °C per LSB of the 12-bit value.
pub const RESOLUTION: f32 = 0.0625;
/// Lowest temperature accepted by [`encode`].
pub const MIN_TEMPERATURE: f32 = -40.0;
/// Highest temperature accepted by [`encode`].
pub const MAX_TEMPERATURE: f32 = 128.0;

const SIGN_BIT: u16 = 1 << 15;

/// Convert a register byte pair to °C.
#[inline]
pub fn from_register(raw: [u8; 2]) -> f32 {
    // arithmetic shift keeps the sign in the top 4 bits
    let counts = i16::from_be_bytes(raw) >> 4;
    counts as f32 * RESOLUTION
}

/// Convert bytes read from a temperature-format register to °C.
///
/// `bytes` must be exactly the two register bytes, MSB first.
pub fn decode(bytes: &[u8]) -> Result<f32, ConversionError> {
    let raw = <[u8; 2]>::try_from(bytes).map_err(|_| ConversionError::InvalidInput)?;
    Ok(from_register(raw))
}

/// Convert °C to the 16-bit register value.
///
/// The quotient by [`RESOLUTION`] is truncated toward zero, then bit 15 is
/// forced to the sign of the truncated value. As a consequence `128.0`, which
/// doesn't fit in 12 bits, encodes to `0x0000`. The low nibble is always zero.
pub fn encode(celsius: f32) -> Result<u16, ConversionError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&celsius) {
        return Err(ConversionError::OutOfRange);
    }

    let counts = (celsius / RESOLUTION).to_i16().ok_or(ConversionError::OutOfRange)?;
    let justified = (counts as u16) << 4;

    if counts < 0 {
        Ok(justified | SIGN_BIT)
    } else {
        Ok(justified & !SIGN_BIT)
    }
}

/// [`encode`], split into wire order.
#[inline]
pub fn to_register(celsius: f32) -> Result<[u8; 2], ConversionError> {
    encode(celsius).map(u16::to_be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_values() {
        assert_eq!(decode(&[0x00, 0x00]), Ok(0.0));
        assert_eq!(decode(&[0x7F, 0xF0]), Ok(127.9375));
        assert_eq!(decode(&[0xC9, 0x00]), Ok(-55.0));
        assert_eq!(decode(&[0xFF, 0xF0]), Ok(-0.0625));
        assert_eq!(decode(&[0x19, 0x00]), Ok(25.0));
        assert_eq!(decode(&[0x4B, 0x00]), Ok(75.0));
        assert_eq!(decode(&[0x50, 0x00]), Ok(80.0));
    }

    #[test]
    fn decode_ignores_low_nibble() {
        assert_eq!(decode(&[0x19, 0x0F]), Ok(25.0));
        assert_eq!(decode(&[0xFF, 0xFF]), Ok(-0.0625));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(decode(&[]), Err(ConversionError::InvalidInput));
        assert_eq!(decode(&[0x19]), Err(ConversionError::InvalidInput));
        assert_eq!(decode(&[0x19, 0x00, 0x00]), Err(ConversionError::InvalidInput));
    }

    #[test]
    fn encode_range_limits() {
        assert_eq!(encode(128.0625), Err(ConversionError::OutOfRange));
        assert_eq!(encode(-40.0625), Err(ConversionError::OutOfRange));
        assert_eq!(encode(f32::NAN), Err(ConversionError::OutOfRange));
        assert_eq!(encode(f32::INFINITY), Err(ConversionError::OutOfRange));
        assert_eq!(encode(-40.0), Ok(0xD800));
        // 2048 counts wraps into the sign bit, which is then cleared
        assert_eq!(encode(128.0), Ok(0x0000));
    }

    #[test]
    fn encode_known_values() {
        assert_eq!(encode(0.0), Ok(0x0000));
        assert_eq!(encode(25.0), Ok(0x1900));
        assert_eq!(encode(75.0), Ok(0x4B00));
        assert_eq!(encode(80.0), Ok(0x5000));
        assert_eq!(encode(127.9375), Ok(0x7FF0));
        assert_eq!(encode(-20.0), Ok(0xEC00));
        assert_eq!(encode(-0.0625), Ok(0xFFF0));
    }

    #[test]
    fn encode_truncates_toward_zero() {
        assert_eq!(encode(25.1), Ok(0x1910));
        assert_eq!(encode(-0.03), Ok(0x0000));
        assert_eq!(encode(0.03), Ok(0x0000));
        assert_eq!(encode(-20.1), Ok(0xEBF0));
    }

    #[test]
    fn encode_clears_low_nibble() {
        let mut celsius = MIN_TEMPERATURE;
        while celsius <= MAX_TEMPERATURE {
            let raw = encode(celsius).unwrap();
            assert_eq!(raw & 0x000F, 0, "{}", celsius);
            celsius += 0.01;
        }
    }

    #[test]
    fn round_trip_on_resolution_steps() {
        // -40.0 ..= 127.9375
        for step in -640i16..=2047 {
            let celsius = step as f32 * RESOLUTION;
            let raw = to_register(celsius).unwrap();
            assert_eq!(from_register(raw), celsius, "{:?}", raw);
        }
    }
}
