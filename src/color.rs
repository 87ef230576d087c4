//! RGB pen colours.

use crate::error::{LSystemError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit-per-channel pen colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a six digit `RRGGBB` hex string (no `#` prefix).
    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LSystemError::invalid(format!(
                "expected a colour as six hex digits (RRGGBB), got `{hex}`"
            )));
        }
        // All six bytes are ASCII hex digits, so byte slicing is on char boundaries.
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| LSystemError::invalid(format!("bad colour `{hex}`: {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Rgb {
    type Err = LSystemError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triples() {
        assert_eq!(Rgb::from_hex("00ff7F").unwrap(), Rgb::new(0, 255, 127));
        assert_eq!("000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "fff", "#00ff00", "00ff00ff", "zz0000", "00 ff0"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(LSystemError::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "ab0cff");
    }
}
