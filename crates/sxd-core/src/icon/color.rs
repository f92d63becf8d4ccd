//! `#RRGGBB` colors for config files and CLI flags.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IconError;

/// Opaque RGB color, written as `#RRGGBB` in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Rgb<u8>);

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb([r, g, b]))
    }

    pub fn rgb(self) -> Rgb<u8> {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let mut rgb = [0u8; 3];
        if digits.len() != 6 || hex::decode_to_slice(digits, &mut rgb).is_err() {
            return Err(IconError::InvalidColor(s.to_string()));
        }
        Ok(Self(Rgb(rgb)))
    }
}

impl TryFrom<String> for HexColor {
    type Error = IconError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0 .0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}
