//! Run the driver on a HAL that only implements `embedded-hal` 0.2.
//!
//! ```ignore
//! let mut tmp = TMP102::new(Compat::new(i2c));
//! let celsius = tmp.get_temperature()?;
//! let i2c = tmp.release().into_inner();
//! ```

use core::fmt::Debug;

use embedded_hal_02::blocking::i2c::{Read, Write};
use embedded_hal_1::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

/// `embedded-hal` 0.2 blocking I²C bus, seen as an `embedded-hal` 1.0 `I2c`.
///
/// Each operation of a transaction becomes its own 0.2 `write` or `read`, so
/// there is a STOP between them instead of a repeated START. The TMP102 keeps
/// its register pointer across a STOP, so this is all the driver needs.
#[derive(Debug)]
pub struct Compat<I> {
    bus: I,
}

impl<I> Compat<I> {
    pub fn new(bus: I) -> Self {
        Compat { bus }
    }

    pub fn into_inner(self) -> I {
        self.bus
    }
}

/// Error of the wrapped 0.2 bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatError<E>(pub E);

impl<E: Debug> i2c::Error for CompatError<E> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl<I, E> ErrorType for Compat<I>
where
    I: Read<Error = E> + Write<Error = E>,
    E: Debug,
{
    type Error = CompatError<E>;
}

impl<I, E> I2c<SevenBitAddress> for Compat<I>
where
    I: Read<Error = E> + Write<Error = E>,
    E: Debug,
{
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        for operation in operations.iter_mut() {
            match operation {
                Operation::Read(buffer) => Read::read(&mut self.bus, address, buffer).map_err(CompatError)?,
                Operation::Write(bytes) => Write::write(&mut self.bus, address, bytes).map_err(CompatError)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::io::ErrorKind;
    use std::vec;

    use super::{Compat, CompatError};
    use crate::error::Error;
    use crate::tmp102::{TMP102, TMP102_I2CADDR};
    use embedded_hal_mock::eh0::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh0::MockError;

    #[test]
    fn temperature_over_legacy_bus() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(TMP102_I2CADDR, vec![0x00]),
            I2cTransaction::read(TMP102_I2CADDR, vec![0xC9, 0x00]),
        ]);
        let mut tmp = TMP102::new(Compat::new(i2c));

        assert_eq!(tmp.get_temperature(), Ok(-55.0));
        tmp.release().into_inner().done();
    }

    #[test]
    fn threshold_over_legacy_bus() {
        let i2c = I2cMock::new(&[I2cTransaction::write(TMP102_I2CADDR, vec![0x02, 0xEC, 0x00])]);
        let mut tmp = TMP102::new(Compat::new(i2c));

        assert_eq!(tmp.set_low_threshold(-20.0), Ok(()));
        tmp.release().into_inner().done();
    }

    #[test]
    fn legacy_error_is_wrapped() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write(TMP102_I2CADDR, vec![0x01]).with_error(MockError::Io(ErrorKind::Other)),
        ]);
        let mut tmp = TMP102::new(Compat::new(i2c));

        assert_eq!(
            tmp.get_config(),
            Err(Error::Bus(CompatError(MockError::Io(ErrorKind::Other))))
        );
        tmp.release().into_inner().done();
    }
}
