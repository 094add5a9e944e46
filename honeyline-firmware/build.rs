//! Build script for honeyline-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their expected type
const SCHEMA: &[(&str, &[(&str, Kind)])] = &[
    ("serial", &[("baudrate", Kind::Integer)]),
    (
        "display",
        &[
            ("columns", Kind::Integer),
            ("rows", Kind::Integer),
            ("boot_splash", Kind::Boolean),
        ],
    ),
    (
        "engine",
        &[
            ("poll_interval_ms", Kind::Integer),
            ("settle_delay_ms", Kind::Integer),
        ],
    ),
];

#[derive(Clone, Copy, PartialEq)]
enum Kind {
    Integer,
    Boolean,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate device.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the honeyline-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n\
                \n{}\n",
                e
            );
        }
    };

    let mut errors = Vec::new();
    check_schema(&config, &mut errors);
    check_ranges(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid device configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Reject unknown sections, unknown keys and values of the wrong type
///
/// The firmware's own parser skips unknown keys, so a typo here would
/// otherwise pass silently and leave the default in place.
fn check_schema(config: &toml::Value, errors: &mut Vec<String>) {
    let root = match config.as_table() {
        Some(t) => t,
        None => return,
    };

    for (section, body) in root {
        let keys = match SCHEMA.iter().find(|(name, _)| name == section) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let table = match body.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in table {
            match keys.iter().find(|(name, _)| name == key) {
                Some((_, Kind::Integer)) if value.as_integer().is_none() => {
                    errors.push(format!("[{}] {} must be an integer", section, key));
                }
                Some((_, Kind::Boolean)) if value.as_bool().is_none() => {
                    errors.push(format!("[{}] {} must be true or false", section, key));
                }
                Some(_) => {}
                None => errors.push(format!("[{}] unknown key '{}'", section, key)),
            }
        }
    }
}

/// Mirror of the checks in `DeviceConfig::validate`
fn check_ranges(config: &toml::Value, errors: &mut Vec<String>) {
    let int = |section: &str, key: &str| {
        config
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_integer())
    };

    if let Some(baud) = int("serial", "baudrate") {
        if baud <= 0 || baud > u32::MAX as i64 {
            errors.push("[serial] baudrate must be a positive 32-bit value".into());
        }
    }

    if let Some(columns) = int("display", "columns") {
        if !(8..=40).contains(&columns) {
            errors.push("[display] columns must be 8-40".into());
        }
    }

    if let Some(rows) = int("display", "rows") {
        if !(2..=4).contains(&rows) {
            errors.push("[display] rows must be 2-4".into());
        }
    }

    if let Some(poll) = int("engine", "poll_interval_ms") {
        if !(1..=499).contains(&poll) {
            errors.push("[engine] poll_interval_ms must be 1-499".into());
        }
    }

    if let Some(settle) = int("engine", "settle_delay_ms") {
        if settle <= 0 || settle > u32::MAX as i64 {
            errors.push("[engine] settle_delay_ms must be a positive 32-bit value".into());
        }
    }
}
