use core::convert::TryFrom;

use crate::error::ConversionError;

/// TMP102 register pointer values.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Temperature, read-only.
    Temperature = 0x00,
    /// Configuration, read/write.
    Config = 0x01,
    /// T_LOW alert threshold.
    TLow = 0x02,
    /// T_HIGH alert threshold.
    THigh = 0x03,
}

impl Register {
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.addr()
    }
}

impl TryFrom<u8> for Register {
    type Error = ConversionError;

    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        match addr {
            0x00 => Ok(Register::Temperature),
            0x01 => Ok(Register::Config),
            0x02 => Ok(Register::TLow),
            0x03 => Ok(Register::THigh),
            _ => Err(ConversionError::InvalidInput),
        }
    }
}
