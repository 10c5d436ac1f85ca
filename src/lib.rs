//! Platform-agnostic driver for the TI TMP102 digital temperature sensor.
//!
//! The TMP102 has four 16-bit registers behind a register pointer:
//!
//! | Pointer | Register    | Access | Format                                   |
//! |---------|-------------|--------|------------------------------------------|
//! | 0x00    | Temperature | R      | 12-bit two's complement, 0.0625 °C/LSB   |
//! | 0x01    | Config      | R/W    | bitfield, see [`config`]                 |
//! | 0x02    | T_LOW       | R/W    | same as temperature                      |
//! | 0x03    | T_HIGH      | R/W    | same as temperature                      |
//!
//! [`TMP102`] talks to the sensor through `embedded-hal` 1.0 [`I2c`]. Buses that
//! only implement `embedded-hal` 0.2 can be wrapped in [`Compat`]. The pure
//! conversions live in [`codec`].
//!
//! ```
//! use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! use tmp102_driver::TMP102;
//!
//! let mut i2c = Mock::new(&[
//!     Transaction::write(0x48, vec![0x00]),
//!     Transaction::read(0x48, vec![0x19, 0x00]),
//!     Transaction::write(0x48, vec![0x03, 0x50, 0x00]),
//! ]);
//! let mut tmp = TMP102::new(&mut i2c);
//!
//! assert_eq!(tmp.get_temperature(), Ok(25.0));
//! tmp.set_high_threshold(80.0).unwrap();
//! i2c.done();
//! ```
//!
//! [`I2c`]: embedded_hal_1::i2c::I2c
#![no_std]

#[macro_use]
mod fmt;

pub mod codec;
pub mod compat;
pub mod config;
mod error;
mod register;
mod tmp102;

pub use crate::compat::{Compat, CompatError};
pub use crate::config::Config;
pub use crate::error::{ConversionError, Error, ERROR_SENTINEL};
pub use crate::register::Register;
pub use crate::tmp102::{TMP102, TMP102_I2CADDR};
