// src/config/config_types.rs
//
// Config types for the app. Every field has a default so a partial
// config.toml is valid.

use nannou::prelude::*;
use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;
use crate::animation::DEFAULT_STEP;
use crate::models::DEFAULT_CAPACITY;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("circle creator"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub step: f32,    // scalar increment per tick
    pub tick_ms: u64, // tick period
    pub capacity: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tick_ms: 30,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AnimationConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub foreground: HexColor,
    pub background: HexColor,
    pub size_factor: f32,   // radius = min(w, h) / size_factor
    pub stroke_factor: f32, // stroke weight = min(w, h) / stroke_factor
    pub arc_resolution: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            foreground: HexColor::from_rgb8(0x4C, 0xAF, 0x50),
            background: HexColor::from_rgb8(0xBD, 0xBD, 0xBD),
            size_factor: 8.0,
            stroke_factor: 90.0,
            arc_resolution: 360,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    pub enabled: bool,
    pub interval: f32, // seconds between automatic admissions
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: 2.5,
        }
    }
}

/// A colour written as `#RRGGBB` in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Rgb<f32>);

impl HexColor {
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::Color(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}
