//! TMP102 configuration register.
//!
//! ```text
//! byte 1: OS  R1  R0  F1  F0  POL TM  SD
//! byte 2: CR1 CR0 AL  EM  0   0   0   0
//! ```
//!
//! R1/R0 (resolution) and AL (alert) are read-only, the sensor ignores
//! writes to them.

/// Nothing set. Start here and `|` in field bits.
pub const EMPTY_CONFIG: u16 = 0x0000;
/// Power-on value of the configuration register.
pub const DEFAULT_CONFIG: u16 = 0x60A0;
/// Power-on value of T_LOW, 75 °C.
pub const DEFAULT_TLOW: u16 = 0x4B00;
/// Power-on value of T_HIGH, 80 °C.
pub const DEFAULT_THIGH: u16 = 0x5000;

/// Start a single conversion while in shutdown mode.
pub const ONE_SHOT: u16 = 1 << 15;
/// Shutdown mode, conversions stop.
pub const SHUTDOWN: u16 = 1 << 8;
/// 13-bit extended temperature format.
pub const EXTENDED_MODE: u16 = 1 << 4;

const RESOLUTION_MASK: u16 = 0b11 << 13;
const RESOLUTION_POS: u16 = 13;
const ALERT: u16 = 1 << 5;

const FAULT_QUEUE_POS: u16 = 11;
const POLARITY_POS: u16 = 10;
const THERMOSTAT_POS: u16 = 9;
const CONVERSION_RATE_POS: u16 = 6;

/// Consecutive faults needed to trigger the alert.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultQueue {
    One = 0b00,
    Two = 0b01,
    Four = 0b10,
    Six = 0b11,
}

impl FaultQueue {
    pub const fn bits(self) -> u16 {
        (self as u16) << FAULT_QUEUE_POS
    }

    fn from_bits(raw: u16) -> Self {
        match (raw >> FAULT_QUEUE_POS) & 0b11 {
            0b00 => FaultQueue::One,
            0b01 => FaultQueue::Two,
            0b10 => FaultQueue::Four,
            _ => FaultQueue::Six,
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            FaultQueue::One => 1,
            FaultQueue::Two => 2,
            FaultQueue::Four => 4,
            FaultQueue::Six => 6,
        }
    }
}

impl Default for FaultQueue {
    fn default() -> Self {
        FaultQueue::One
    }
}

/// Level of the ALERT pin when active.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

impl Polarity {
    pub const fn bits(self) -> u16 {
        (self as u16) << POLARITY_POS
    }

    fn from_bits(raw: u16) -> Self {
        if raw & (1 << POLARITY_POS) == 0 {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity::ActiveLow
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermostatMode {
    /// Alert stays active until temperature drops below T_LOW.
    Comparator = 0,
    /// Alert is cleared by any register read.
    Interrupt = 1,
}

impl ThermostatMode {
    pub const fn bits(self) -> u16 {
        (self as u16) << THERMOSTAT_POS
    }

    fn from_bits(raw: u16) -> Self {
        if raw & (1 << THERMOSTAT_POS) == 0 {
            ThermostatMode::Comparator
        } else {
            ThermostatMode::Interrupt
        }
    }
}

impl Default for ThermostatMode {
    fn default() -> Self {
        ThermostatMode::Comparator
    }
}

/// Continuous conversion rate.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionRate {
    /// 0.25Hz
    QuarterHz = 0b00,
    /// 1Hz
    OneHz = 0b01,
    /// 4Hz, power-on default
    FourHz = 0b10,
    /// 8Hz
    EightHz = 0b11,
}

impl ConversionRate {
    pub const fn bits(self) -> u16 {
        (self as u16) << CONVERSION_RATE_POS
    }

    fn from_bits(raw: u16) -> Self {
        match (raw >> CONVERSION_RATE_POS) & 0b11 {
            0b00 => ConversionRate::QuarterHz,
            0b01 => ConversionRate::OneHz,
            0b10 => ConversionRate::FourHz,
            _ => ConversionRate::EightHz,
        }
    }

    pub fn period_ms(&self) -> u32 {
        match self {
            ConversionRate::QuarterHz => 4000,
            ConversionRate::OneHz => 1000,
            ConversionRate::FourHz => 250,
            ConversionRate::EightHz => 125,
        }
    }
}

impl Default for ConversionRate {
    fn default() -> Self {
        ConversionRate::FourHz
    }
}

/// Decoded configuration register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub one_shot: bool,
    pub fault_queue: FaultQueue,
    pub polarity: Polarity,
    pub thermostat: ThermostatMode,
    pub shutdown: bool,
    pub conversion_rate: ConversionRate,
    pub extended: bool,
    resolution: u8,
    alert: bool,
}

impl Config {
    pub fn from_bits(raw: u16) -> Self {
        Config {
            one_shot: raw & ONE_SHOT != 0,
            fault_queue: FaultQueue::from_bits(raw),
            polarity: Polarity::from_bits(raw),
            thermostat: ThermostatMode::from_bits(raw),
            shutdown: raw & SHUTDOWN != 0,
            conversion_rate: ConversionRate::from_bits(raw),
            extended: raw & EXTENDED_MODE != 0,
            resolution: ((raw & RESOLUTION_MASK) >> RESOLUTION_POS) as u8,
            alert: raw & ALERT != 0,
        }
    }

    /// Register value, read-only bits included as last read.
    pub fn bits(&self) -> u16 {
        let mut raw = EMPTY_CONFIG;
        if self.one_shot {
            raw |= ONE_SHOT;
        }
        raw |= ((self.resolution as u16) << RESOLUTION_POS) & RESOLUTION_MASK;
        raw |= self.fault_queue.bits();
        raw |= self.polarity.bits();
        raw |= self.thermostat.bits();
        if self.shutdown {
            raw |= SHUTDOWN;
        }
        raw |= self.conversion_rate.bits();
        if self.alert {
            raw |= ALERT;
        }
        if self.extended {
            raw |= EXTENDED_MODE;
        }
        raw
    }

    /// R1/R0, always `0b11` (12 bits) on a real sensor.
    pub fn resolution(&self) -> u8 {
        self.resolution
    }

    /// AL bit. Its meaning depends on `polarity` and `thermostat`.
    pub fn alert(&self) -> bool {
        self.alert
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_bits(DEFAULT_CONFIG)
    }
}

impl From<u16> for Config {
    fn from(raw: u16) -> Self {
        Config::from_bits(raw)
    }
}

impl From<Config> for u16 {
    fn from(config: Config) -> u16 {
        config.bits()
    }
}
