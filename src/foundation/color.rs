use std::str::FromStr;

use crate::foundation::{
    core::Rgba8Premul,
    error::{BoothError, BoothResult},
};

/// Flat background color of a composite, straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Default for FrameColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FrameColor {
    /// Pure white, the default frame color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive, leading `#` optional).
    pub fn parse(s: &str) -> BoothResult<Self> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(raw));
        }

        let byte = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| invalid(raw));
        let nibble = |c: &str| byte(c).map(|v| v * 17);

        match hex.len() {
            3 => Ok(Self::rgb(
                nibble(&hex[0..1])?,
                nibble(&hex[1..2])?,
                nibble(&hex[2..3])?,
            )),
            6 => Ok(Self::rgb(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
            )),
            8 => Ok(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => Err(invalid(raw)),
        }
    }

    /// Lowercase `#rrggbb` (or `#rrggbbaa` when translucent).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Premultiplied form, as stored in rendered surfaces.
    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for FrameColor {
    type Err = BoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn invalid(raw: &str) -> BoothError {
    BoothError::validation(format!(
        "frame color \"{raw}\" must be #RGB, #RRGGBB or #RRGGBBAA"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
