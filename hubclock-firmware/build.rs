//! Build script for hubclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// HUB75 signals, in connector order
const PANEL_PINS: [&str; 14] = [
    "r1", "g1", "b1", "r2", "g2", "b2", "a", "b", "c", "d", "e", "clk", "lat", "oe",
];

/// Output-enable must sit on the PWM channel the firmware drives
const OE_PIN: i64 = 13;

const GPIO_COUNT: i64 = 30;

const MAX_WIDTH: i64 = 128;
const MAX_HEIGHT: i64 = 64;

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
            ║  Please create one in the hubclock-firmware directory.           ║\n\
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

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_required_sections(&config);
    validate_panel(&config);
    validate_sensor(&config);
    validate_rtc(&config);

    println!("cargo:warning=device.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a boxed list of errors, if any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Parse `gpioN` with optional `!` (inverted) and `^` (pull-up) prefixes
fn parse_pin(value: &str) -> Option<i64> {
    let name = value.trim_start_matches(['!', '^']);
    name.strip_prefix("gpio")?.parse().ok()
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    if config.get("panel").is_none() {
        errors.push("Missing [panel] section".to_string());
    }
    if config.get("panel").and_then(|p| p.get("pins")).is_none() {
        errors.push("Missing [panel.pins] section".to_string());
    }
    if config.get("sensor").is_none() {
        errors.push("Missing [sensor] section".to_string());
    }

    report("Missing required sections in device.toml", &errors);
}

/// Validate panel geometry, brightness, color and pin assignment
fn validate_panel(config: &toml::Value) {
    let Some(panel) = config.get("panel").and_then(|p| p.as_table()) else {
        return;
    };

    let mut errors = Vec::new();

    match panel.get("width") {
        Some(toml::Value::Integer(w)) if *w > 0 && *w <= MAX_WIDTH => {}
        Some(_) => errors.push(format!("[panel] width must be 1-{}", MAX_WIDTH)),
        None => {}
    }

    match panel.get("height") {
        Some(toml::Value::Integer(h)) if *h > 0 && *h <= MAX_HEIGHT && h % 2 == 0 => {}
        Some(_) => errors.push(format!("[panel] height must be even and 2-{}", MAX_HEIGHT)),
        None => {}
    }

    match panel.get("brightness") {
        Some(toml::Value::Integer(b)) if (0..=255).contains(b) => {}
        Some(_) => errors.push("[panel] brightness must be 0-255".to_string()),
        None => {}
    }

    if let Some(color) = panel.get("text_color") {
        let valid = color.as_str().is_some_and(|c| {
            let hex = c.strip_prefix('#').unwrap_or(c);
            hex.len() == 6 && hex.chars().all(|ch| ch.is_ascii_hexdigit())
        });
        if !valid {
            errors.push("[panel] text_color must be \"#rrggbb\"".to_string());
        }
    }

    if let Some(pins) = panel.get("pins").and_then(|p| p.as_table()) {
        let mut used: Vec<(i64, &str)> = Vec::new();
        for name in PANEL_PINS {
            let Some(value) = pins.get(name) else {
                errors.push(format!("[panel.pins] missing '{}'", name));
                continue;
            };
            let Some(pin) = value.as_str().and_then(parse_pin) else {
                errors.push(format!("[panel.pins] {} must be \"gpioN\"", name));
                continue;
            };
            if !(0..GPIO_COUNT).contains(&pin) {
                errors.push(format!("[panel.pins] {} gpio{} out of range", name, pin));
                continue;
            }
            if let Some((_, other)) = used.iter().find(|(p, _)| *p == pin) {
                errors.push(format!(
                    "[panel.pins] {} and {} both use gpio{}",
                    other, name, pin
                ));
            }
            if name == "oe" && pin != OE_PIN {
                errors.push(format!("[panel.pins] oe must be gpio{} (PWM)", OE_PIN));
            }
            used.push((pin, name));
        }
    }

    report("Invalid panel configuration", &errors);
}

/// Validate sensor pin, type and interval
fn validate_sensor(config: &toml::Value) {
    let Some(sensor) = config.get("sensor").and_then(|s| s.as_table()) else {
        return;
    };

    let mut errors = Vec::new();

    match sensor.get("pin").map(|p| p.as_str().and_then(parse_pin)) {
        Some(Some(pin)) if (0..GPIO_COUNT).contains(&pin) => {}
        Some(_) => errors.push("[sensor] pin must be \"gpioN\" with N 0-29".to_string()),
        None => errors.push("[sensor] missing 'pin'".to_string()),
    }

    if let Some(kind) = sensor.get("type") {
        if !matches!(kind.as_str(), Some("dht11") | Some("dht22")) {
            errors.push("[sensor] type must be 'dht11' or 'dht22'".to_string());
        }
    }

    match sensor.get("interval_s") {
        Some(toml::Value::Integer(i)) if *i >= 1 && *i <= u16::MAX as i64 => {}
        Some(_) => errors.push("[sensor] interval_s must be at least 1".to_string()),
        None => {}
    }

    report("Invalid sensor configuration", &errors);
}

/// Validate RTC bus pins
fn validate_rtc(config: &toml::Value) {
    let Some(rtc) = config.get("rtc").and_then(|r| r.as_table()) else {
        return;
    };

    let mut errors = Vec::new();

    for key in ["sda_pin", "scl_pin"] {
        if let Some(value) = rtc.get(key) {
            match value.as_str().and_then(parse_pin) {
                Some(pin) if (0..GPIO_COUNT).contains(&pin) => {}
                _ => errors.push(format!("[rtc] {} must be \"gpioN\" with N 0-29", key)),
            }
        }
    }

    if let Some(offset) = rtc.get("timezone_offset") {
        if !matches!(offset, toml::Value::Integer(h) if (-12..=14).contains(h)) {
            errors.push("[rtc] timezone_offset must be -12 to 14".to_string());
        }
    }

    report("Invalid rtc configuration", &errors);
}
