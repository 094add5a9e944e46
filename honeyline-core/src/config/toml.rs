//! Simple TOML parser for device configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! Honeyline configuration. It does NOT support the full TOML language.
//!
//! Supported features:
//! - Key = value pairs (integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//! - Underscore digit separators in integers (115_200)
//!
//! Unknown keys inside a known section are skipped so that an older
//! firmware accepts a newer config file. The build script is strict about
//! them instead.

use super::types::{DeviceConfig, ConfigError};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key/value pair outside any section
    KeyOutsideSection,
    /// Line is neither a header nor a key/value pair
    InvalidLine,
    /// Invalid value type
    InvalidValue,
    /// Parsed values failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Serial,
    Display,
    Engine,
}

/// Parse TOML configuration into DeviceConfig
///
/// Missing sections and keys keep their defaults. The result is validated
/// before it is returned.
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

/// Drop everything from the first `#`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse section header like "serial" or " engine "
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "serial" => Ok(Section::Serial),
        "display" => Ok(Section::Display),
        "engine" => Ok(Section::Engine),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: heapless::String<16> = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::KeyOutsideSection),
        Section::Serial => {
            if key == "baudrate" {
                config.serial.baudrate = parse_int(value)?;
            }
        }
        Section::Display => match key {
            "columns" => config.display.columns = parse_int(value)?,
            "rows" => config.display.rows = parse_int(value)?,
            "boot_splash" => config.display.boot_splash = parse_bool(value)?,
            _ => {}
        },
        Section::Engine => match key {
            "poll_interval_ms" => config.engine.poll_interval_ms = parse_int(value)?,
            "settle_delay_ms" => config.engine.settle_delay_ms = parse_int(value)?,
            _ => {}
        },
    }
    Ok(())
}
