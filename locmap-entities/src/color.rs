use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// A RGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8, u8, u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid color '{0}': expected #RRGGBB")]
pub struct ColorParseError(pub String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A non-empty, ordered list of marker colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    /// Cycles through the palette if `index` exceeds its length.
    pub fn get(&self, index: usize) -> Color {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::rgb(0xFF, 0x00, 0x00),
            Color::rgb(0x00, 0xFF, 0x00),
            Color::rgb(0x00, 0x00, 0xFF),
            Color::rgb(0xFF, 0xA5, 0x00),
            Color::rgb(0x80, 0x00, 0x80),
            Color::rgb(0x00, 0x80, 0x80),
            Color::rgb(0xFF, 0x14, 0x93),
            Color::rgb(0xFF, 0xD7, 0x00),
            Color::rgb(0x00, 0xCE, 0xD1),
            Color::rgb(0xDC, 0x14, 0x3C),
        ])
    }
}

/// Company name → marker color.
pub type ColorMap = BTreeMap<String, Color>;
