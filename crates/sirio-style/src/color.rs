#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color packed as `0xRRGGBBAA`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color from components including alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let len = digits.len();
        if len != 6 && len != 8 {
            return Err(ParseColorError::InvalidLength(len));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(hex.to_string()))?;
        if len == 6 {
            Ok(Self((value << 8) | 0xFF))
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Failure to parse a hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex color literal: {0:?}")]
    InvalidDigit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip_through_packing() {
        let c = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(c.0, 0x1234_5678);
    }

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::from_hex("#0066CC"), Ok(Color::rgb(0x00, 0x66, 0xCC)));
        assert_eq!(
            "0066CC80".parse::<Color>(),
            Ok(Color::rgba(0x00, 0x66, 0xCC, 0x80))
        );
    }

    #[test]
    fn rejects_bad_literals() {
        assert_eq!(Color::from_hex("#123"), Err(ParseColorError::InvalidLength(3)));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ParseColorError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("#+12345"),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn display_omits_opaque_alpha() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#FF0010");
        assert_eq!(Color::WHITE.with_alpha(0x40).to_string(), "#FFFFFF40");
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            ParseColorError::InvalidLength(4).to_string(),
            "hex color must have 6 or 8 digits, got 4"
        );
    }
}
