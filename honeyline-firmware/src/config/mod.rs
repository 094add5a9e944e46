//! Configuration loading
//!
//! The device configuration is compiled in from device.toml and parsed at
//! boot by the `no_std` parser in honeyline-core.

use defmt::*;

use honeyline_core::config::{parse_config, DeviceConfig};

/// Embedded configuration (compiled into firmware)
/// Edit device.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../device.toml");

/// Parse the embedded configuration
///
/// Falls back to the built-in defaults if parsing fails. build.rs rejects
/// a bad device.toml, so the fallback only matters when the two checks
/// disagree.
pub fn load_config() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            DeviceConfig::default()
        }
    }
}

fn log_config_summary(config: &DeviceConfig) {
    info!("Serial: {} baud 8N1", config.serial.baudrate);
    info!(
        "Display: {}x{}, boot splash {}",
        config.display.columns, config.display.rows, config.display.boot_splash
    );
    debug!(
        "Engine: poll every {} ms, settle {} ms",
        config.engine.poll_interval_ms, config.engine.settle_delay_ms
    );
}
