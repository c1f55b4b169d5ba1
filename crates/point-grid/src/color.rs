//! 8-bit RGB color used for overlay drawing.
//!
//! Overlay colors are configuration, so [`Rgb`] parses from the usual hex
//! notations (`#RRGGBB`, `#RGB`, with or without the leading hash).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const RED: Rgb = Rgb([255, 0, 0]);
    pub const GREEN: Rgb = Rgb([0, 255, 0]);

    /// Create a color from individual channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// The grey color with all three channels set to `v`.
    #[inline]
    pub const fn grey(v: u8) -> Self {
        Self([v, v, v])
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        self.0
    }

    /// Format as `#RRGGBB` (uppercase).
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepted forms: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`. Case-insensitive.
    ///
    /// ```
    /// use point_grid::Rgb;
    /// let c: Rgb = "#f80".parse().unwrap();
    /// assert_eq!(c, Rgb::new(0xFF, 0x88, 0x00));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)?;
                let g = u8::from_str_radix(&hex[2..4], 16)?;
                let b = u8::from_str_radix(&hex[4..6], 16)?;
                Ok(Self([r, g, b]))
            }
            3 => {
                // Each nibble is doubled: "f80" -> "ff8800"
                let r = u8::from_str_radix(&hex[0..1], 16)? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16)? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16)? * 17;
                Ok(Self([r, g, b]))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => write!(f, "invalid hex character: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}
