//! TMP102 digital temperature sensor.
//!
//! - Resolution: 0.0625 °C (12 bit)
//! - Range: -40 to 125 °C operating, thresholds accept -40 to 128 °C
//! - Address(7bit): 0x48

use core::convert::TryFrom;

use embedded_hal_1::i2c::I2c;

use crate::codec;
use crate::config::Config;
use crate::error::Error;
use crate::register::Register;

/// ADD0 tied to GND.
pub const TMP102_I2CADDR: u8 = 0x48;

/// TMP102 driver.
///
/// Every method is one register access on the bus, nothing is cached. To share
/// the bus, pass `&mut` to it (or an `embedded-hal-bus` device) instead of
/// the bus itself.
pub struct TMP102<I2C> {
    i2c: I2C,
}

impl<I2C> TMP102<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        TMP102 { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Current temperature in °C.
    pub fn get_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = self.read_register(Register::Temperature)?;
        let celsius = codec::from_register(raw);
        trace!("tmp102: temperature {=f32}", celsius);
        Ok(celsius)
    }

    pub fn get_config(&mut self) -> Result<u16, Error<I2C::Error>> {
        let raw = self.read_register(Register::Config)?;
        Ok(u16::from_be_bytes(raw))
    }

    /// Write the configuration register as is.
    ///
    /// Read-only bits are ignored by the sensor, so reading back may not give `config`.
    pub fn set_config(&mut self, config: u16) -> Result<(), Error<I2C::Error>> {
        debug!("tmp102: config <- {=u16:#x}", config);
        self.write_register(Register::Config, config.to_be_bytes())
    }

    pub fn read_config(&mut self) -> Result<Config, Error<I2C::Error>> {
        self.get_config().map(Config::from_bits)
    }

    pub fn write_config(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.set_config(config.bits())
    }

    /// Set T_LOW, -40.0 ..= 128.0 °C.
    pub fn set_low_threshold(&mut self, celsius: f32) -> Result<(), Error<I2C::Error>> {
        let data = codec::to_register(celsius)?;
        self.write_register(Register::TLow, data)
    }

    /// Set T_HIGH, -40.0 ..= 128.0 °C.
    pub fn set_high_threshold(&mut self, celsius: f32) -> Result<(), Error<I2C::Error>> {
        let data = codec::to_register(celsius)?;
        self.write_register(Register::THigh, data)
    }

    pub fn get_low_threshold(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_register(Register::TLow).map(codec::from_register)
    }

    pub fn get_high_threshold(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_register(Register::THigh).map(codec::from_register)
    }

    /// Point at `register`, then read its two bytes.
    ///
    /// The read is skipped if setting the pointer fails.
    pub fn read_register(&mut self, register: Register) -> Result<[u8; 2], Error<I2C::Error>> {
        let mut data = [0u8; 2];
        self.i2c.write(TMP102_I2CADDR, &[register.addr()]).map_err(bus)?;
        self.i2c.read(TMP102_I2CADDR, &mut data).map_err(bus)?;
        trace!("tmp102: read {=u8:#x} -> {}", register.addr(), data);
        Ok(data)
    }

    /// Pointer byte and both data bytes in one write.
    pub fn write_register(&mut self, register: Register, data: [u8; 2]) -> Result<(), Error<I2C::Error>> {
        trace!("tmp102: write {=u8:#x} <- {}", register.addr(), data);
        self.i2c
            .write(TMP102_I2CADDR, &[register.addr(), data[0], data[1]])
            .map_err(bus)
    }

    /// [`read_register`](Self::read_register) on an unchecked pointer and buffer.
    ///
    /// Returns `Error::InvalidInput` without touching the bus if `address` is not
    /// a TMP102 register or `buffer` isn't 2 bytes long.
    pub fn read_register_raw(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        let register = Register::try_from(address)?;
        if buffer.len() != 2 {
            return Err(Error::InvalidInput);
        }
        let data = self.read_register(register)?;
        buffer.copy_from_slice(&data);
        Ok(())
    }

    /// [`write_register`](Self::write_register) on an unchecked pointer and payload.
    pub fn write_register_raw(&mut self, address: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        let register = Register::try_from(address)?;
        let data = <[u8; 2]>::try_from(data).map_err(|_| Error::InvalidInput)?;
        self.write_register(register, data)
    }
}

fn bus<E>(err: E) -> Error<E> {
    warn!("tmp102: i2c transaction failed");
    Error::Bus(err)
}
