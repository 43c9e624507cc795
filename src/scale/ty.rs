use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use rgb::RGB8;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{hex_to_rgb, rgb_to_hex, HexError, RGBColor};

/// A color of a [`PaletteScale`](crate::PaletteScale): its hex string
/// together with its RGB components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ColorData {
    hex: String, // Invariant: decodes to `rgb`
    rgb: RGB8,
}

impl ColorData {
    /// Color data for `rgb`, with a lowercase `#rrggbb` hex string.
    pub fn from_rgb(rgb: RGB8) -> Self {
        ColorData { hex: rgb_to_hex(rgb), rgb }
    }

    /// Keep `hex` as given.  The caller guarantees it decodes to `rgb`.
    pub(crate) fn verbatim(hex: &str, rgb: RGB8) -> Self {
        ColorData { hex: hex.to_string(), rgb }
    }

    /// The hex string of the color.
    #[inline]
    pub fn hex(&self) -> &str { &self.hex }

    /// The RGB components of the color.
    #[inline]
    pub fn rgb(&self) -> RGB8 { self.rgb }

    /// CSS functional notation, e.g. `rgb(59, 130, 246)`.
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

/// Parsing normalizes the hex string to lowercase `#rrggbb`.
impl FromStr for ColorData {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(ColorData::from_rgb)
    }
}

impl From<RGB8> for ColorData {
    #[inline]
    fn from(rgb: RGB8) -> Self { ColorData::from_rgb(rgb) }
}

impl fmt::Display for ColorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl RGBColor for ColorData {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { self.rgb }
}

/// How the color of a step is obtained from the base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mix {
    /// Mix white into the base color; the weight is the fraction of
    /// white, in \[0, 1\].
    Tint(f64),
    /// The base color itself, hex string included, unchanged.
    Base,
    /// Mix black into the base color; the weight is the fraction of
    /// black, in \[0, 1\].
    Shade(f64),
}

/// One step of a scale: its label and how its color is mixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    pub label: u16,
    pub mix: Mix,
}

impl Stop {
    #[inline]
    pub const fn tint(label: u16, white: f64) -> Self {
        Stop { label, mix: Mix::Tint(white) }
    }

    #[inline]
    pub const fn base(label: u16) -> Self { Stop { label, mix: Mix::Base } }

    #[inline]
    pub const fn shade(label: u16, black: f64) -> Self {
        Stop { label, mix: Mix::Shade(black) }
    }
}

/// Labels a scale step may carry.
pub const LABELS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

lazy_static! {
    /// The steps of [`generate_color_scale`](crate::generate_color_scale).
    ///
    /// Label 400 has no stop, so generated scales have 9 colors.  Pass a
    /// table with a 400 entry to
    /// [`generate_color_scale_with`](crate::generate_color_scale_with)
    /// for a 10-step scale.
    pub static ref STOPS: Vec<Stop> = vec![
        Stop::tint(50, 0.9),
        Stop::tint(100, 0.8),
        Stop::tint(200, 0.6),
        Stop::tint(300, 0.4),
        Stop::base(500),
        Stop::shade(600, 0.2),
        Stop::shade(700, 0.4),
        Stop::shade(800, 0.6),
        Stop::shade(900, 0.8),
    ];
}
