//! Color values for map output.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, ensure, Error, Result};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY: Rgb = Rgb::new(0x80, 0x80, 0x80);
    pub const DARK_GRAY: Rgb = Rgb::new(0x33, 0x33, 0x33);

    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        ensure!(hex.len() == 6 && hex.is_ascii(), "[render::color] Expected #rrggbb, got {s:?}");

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| anyhow!("[render::color] Invalid hex color {s:?}"));
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}
