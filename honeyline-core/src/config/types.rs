//! Configuration type definitions
//!
//! These types represent the device configuration. Configuration is
//! compiled into the firmware as TOML and parsed at boot.

use crate::traits::Geometry;

/// Default serial rate (bits per second)
pub const DEFAULT_BAUDRATE: u32 = 1200;

/// Default interval between input polls
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Longest allowed interval between input polls
pub const MAX_POLL_INTERVAL_MS: u32 = 499;

/// Default pause before the rejection message
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 350;

/// Smallest supported display
pub const MIN_DISPLAY: Geometry = Geometry {
    columns: 8,
    rows: 2,
};

/// Largest supported display
pub const MAX_DISPLAY: Geometry = Geometry {
    columns: 40,
    rows: 4,
};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate of zero
    ZeroBaudrate,
    /// Poll interval zero or too long to feel like blocking
    PollIntervalOutOfRange,
    /// Settle delay of zero
    ZeroSettleDelay,
    /// Display smaller than two rows or too narrow
    DisplayTooSmall,
    /// Display larger than an HD44780 can address
    DisplayTooLarge,
}

/// Serial line configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate (8N1 framing)
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

/// Character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Characters per row
    pub columns: u8,
    /// Number of rows
    pub rows: u8,
    /// Show the boot splash at power-on
    pub boot_splash: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 2,
            boot_splash: true,
        }
    }
}

impl DisplayConfig {
    /// Display size in character cells
    pub fn geometry(&self) -> Geometry {
        Geometry {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

/// Interaction engine timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Sleep between input polls while waiting for the caller
    pub poll_interval_ms: u32,
    /// Pause after the password before the rejection is sent
    pub settle_delay_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Check timing values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 || self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalOutOfRange);
        }
        if self.settle_delay_ms == 0 {
            return Err(ConfigError::ZeroSettleDelay);
        }
        Ok(())
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Serial line settings
    pub serial: SerialConfig,
    /// LCD settings
    pub display: DisplayConfig,
    /// Engine timing
    pub engine: EngineConfig,
}

impl DeviceConfig {
    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }

        let geometry = self.display.geometry();
        if geometry.columns < MIN_DISPLAY.columns || geometry.rows < MIN_DISPLAY.rows {
            return Err(ConfigError::DisplayTooSmall);
        }
        if geometry.columns > MAX_DISPLAY.columns || geometry.rows > MAX_DISPLAY.rows {
            return Err(ConfigError::DisplayTooLarge);
        }

        self.engine.validate()
    }
}
