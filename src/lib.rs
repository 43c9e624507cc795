//! Tonal scales and WCAG contrast.
//!
//! - [`generate_color_scale`] derives a [`PaletteScale`] of tints and
//!   shades from one base color.
//! - [`luminance`] and [`contrast_ratio`] implement the WCAG 2.x
//!   definitions; [`wcag`] compares ratios against the AA/AAA levels.
//!
//! The color math ([`hex_to_rgb`], [`rgb_to_hex`], [`mix_colors`]) works
//! on [`RGB8`] from the `rgb` crate.  The [`RGBColor`] trait exposes the
//! same operations as methods on colors and palette entries.
//!
//! ```
//! use color_scale::{generate_color_scale, RGBColor};
//! let scale = generate_color_scale("#3b82f6")?;
//! let ratio = scale[50].contrast_ratio(&scale[900]);
//! assert!(ratio > 7.);
//! # Ok::<(), color_scale::HexError>(())
//! ```

use rgb::{RGB8, RGBA8};
use thiserror::Error;

mod scale;
pub use scale::{generate_color_scale, generate_color_scale_with,
                PaletteScale, ScaleState, BASE_LABEL, BLACK,
                DEFAULT_BASE, WHITE};
pub use scale::ty::{ColorData, Mix, Stop, LABELS, STOPS};

pub mod wcag;
use wcag::TextColor;

/// Reasons a string is not a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must start with '#'")]
    MissingHash,
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Decode a hex color.
///
/// The leading `#` is optional and digits are case-insensitive.  The
/// 3-digit shorthand doubles each digit (`abc` is `aabbcc`).
///
/// # Example
///
/// ```
/// use color_scale::hex_to_rgb;
/// use rgb::RGB8;
/// assert_eq!(hex_to_rgb("#3b82f6"), Ok(RGB8::new(59, 130, 246)));
/// assert_eq!(hex_to_rgb("FFF"), Ok(RGB8::new(255, 255, 255)));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<RGB8, HexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut nibbles = Vec::with_capacity(6);
    for c in digits.chars() {
        nibbles.push(c.to_digit(16).ok_or(HexError::InvalidDigit(c))?);
    }
    let n = match nibbles.len() {
        0 => return Err(HexError::Empty),
        3 => nibbles.iter().fold(0, |n, &d| (n << 8) | (d << 4) | d),
        6 => nibbles.iter().fold(0, |n, &d| (n << 4) | d),
        len => return Err(HexError::InvalidLength(len)),
    };
    Ok(RGB8 { r: ((n >> 16) & 255) as u8,
              g: ((n >> 8) & 255) as u8,
              b: (n & 255) as u8 })
}

/// Check that `hex` is `#` followed by 3 or 6 hex digits, the form
/// accepted from user input.  [`hex_to_rgb`] is more lenient.
pub fn validate_hex(hex: &str) -> Result<(), HexError> {
    if hex.is_empty() { return Err(HexError::Empty) }
    if !hex.starts_with('#') { return Err(HexError::MissingHash) }
    hex_to_rgb(hex).map(|_| ())
}

/// Says whether `hex` matches `^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$`.
#[inline]
pub fn is_valid_hex(hex: &str) -> bool { validate_hex(hex).is_ok() }

/// Encode a color as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: RGB8) -> String {
    let n = (1u32 << 24) + ((rgb.r as u32) << 16)
        + ((rgb.g as u32) << 8) + rgb.b as u32;
    // Drop the leading `1` that pads the digits to six.
    format!("#{}", &format!("{n:x}")[1..])
}

/// Mix two colors.  `weight` ∈ \[0, 1\] is the fraction of `c0` in the
/// result: `1.` gives `c0`, `0.` gives `c1` and `0.5` their midpoint.
/// Each channel is rounded to the nearest integer.  Weights outside
/// \[0, 1\] extrapolate and the channels are clamped to \[0, 255\].
pub fn mix_colors(c0: RGB8, c1: RGB8, weight: f64) -> RGB8 {
    let w = weight * 2. - 1.;
    let w0 = (w + 1.) / 2.;
    let w1 = 1. - w0;
    let mix = |x: u8, y: u8| {
        (w0 * x as f64 + w1 * y as f64).round().clamp(0., 255.) as u8
    };
    RGB8 { r: mix(c0.r, c1.r), g: mix(c0.g, c1.g), b: mix(c0.b, c1.b) }
}

/// sRGB channel to linear light, with the WCAG 2.x cut-off.
#[inline]
fn linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.;
    if v <= 0.03928 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

/// WCAG relative luminance of `rgb`, in \[0, 1\].
pub fn luminance(rgb: RGB8) -> f64 {
    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// WCAG contrast ratio between `c0` and `c1`, in \[1, 21\].  The order
/// of the arguments does not matter.
///
/// # Example
///
/// ```
/// use color_scale::{contrast_ratio, WHITE, BLACK};
/// assert!((contrast_ratio(WHITE, BLACK) - 21.).abs() < 1e-9);
/// ```
pub fn contrast_ratio(c0: RGB8, c1: RGB8) -> f64 {
    let l0 = luminance(c0);
    let l1 = luminance(c1);
    (l0.max(l1) + 0.05) / (l0.min(l1) + 0.05)
}

/// Colors the palette operations apply to.
pub trait RGBColor {
    /// Return the red, green and blue components of the color.
    fn to_rgb8(&self) -> RGB8;

    /// Lowercase `#rrggbb` form of the color.
    #[inline]
    fn to_hex(&self) -> String { rgb_to_hex(self.to_rgb8()) }

    /// See [`luminance`].
    #[inline]
    fn luminance(&self) -> f64 { crate::luminance(self.to_rgb8()) }

    /// See [`contrast_ratio`].
    #[inline]
    fn contrast_ratio(&self, other: &impl RGBColor) -> f64 {
        crate::contrast_ratio(self.to_rgb8(), other.to_rgb8())
    }

    /// Mix with `other`, `weight` being the fraction of `self`.  See
    /// [`mix_colors`].
    #[inline]
    fn mix(&self, other: &impl RGBColor, weight: f64) -> RGB8 {
        mix_colors(self.to_rgb8(), other.to_rgb8(), weight)
    }

    /// Text color readable over this color.
    #[inline]
    fn text_color(&self) -> TextColor { wcag::text_color(self.to_rgb8()) }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { *self }
}

/// The alpha channel is ignored: colors are taken to be opaque.
impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { RGB8 { r: self.r, g: self.g, b: self.b } }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        for r in (0 ..= 255).step_by(3) {
            for g in (0 ..= 255).step_by(5) {
                for b in 0 ..= 255 {
                    let c = RGB8 { r, g, b };
                    assert_eq!(hex_to_rgb(&rgb_to_hex(c)), Ok(c));
                }
            }
        }
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(RGB8::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(RGB8::new(255, 255, 255)), "#ffffff");
        assert_eq!(rgb_to_hex(RGB8::new(59, 130, 246)), "#3b82f6");
        assert_eq!(rgb_to_hex(RGB8::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn shorthand_expansion() {
        assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
        assert_eq!(hex_to_rgb("abc"), Ok(RGB8::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_rgb("#3B82F6"), hex_to_rgb("3b82f6"));
    }

    #[test]
    fn malformed_hex() {
        assert_eq!(hex_to_rgb(""), Err(HexError::Empty));
        assert_eq!(hex_to_rgb("#"), Err(HexError::Empty));
        assert_eq!(hex_to_rgb("#abcd"), Err(HexError::InvalidLength(4)));
        assert_eq!(hex_to_rgb("#12345g"), Err(HexError::InvalidDigit('g')));
        assert_eq!(hex_to_rgb("+12345"), Err(HexError::InvalidDigit('+')));
        assert_eq!(hex_to_rgb("##abc"), Err(HexError::InvalidDigit('#')));
    }

    #[test]
    fn validation_requires_hash() {
        assert!(is_valid_hex("#abc"));
        assert!(is_valid_hex("#A1b2C3"));
        assert!(!is_valid_hex("abc"));
        assert!(!is_valid_hex("#abcd"));
        assert!(!is_valid_hex("#ggg"));
        assert!(!is_valid_hex(""));
        assert_eq!(validate_hex("3b82f6"), Err(HexError::MissingHash));
        assert_eq!(validate_hex(""), Err(HexError::Empty));
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let c0 = RGB8::new(10, 20, 30);
        let c1 = RGB8::new(200, 100, 50);
        assert_eq!(mix_colors(c0, c1, 1.), c0);
        assert_eq!(mix_colors(c0, c1, 0.), c1);
        assert_eq!(mix_colors(RGB8::new(255, 0, 0), RGB8::new(0, 0, 255), 0.5),
                   RGB8::new(128, 0, 128));
    }

    #[test]
    fn mix_clamps_extrapolation() {
        let c = mix_colors(RGB8::new(255, 255, 255), RGB8::new(0, 0, 0), 1.5);
        assert_eq!(c, RGB8::new(255, 255, 255));
        let c = mix_colors(RGB8::new(255, 255, 255), RGB8::new(0, 0, 0), -0.5);
        assert_eq!(c, RGB8::new(0, 0, 0));
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(luminance(RGB8::new(0, 0, 0)), 0.);
        assert!((luminance(RGB8::new(255, 255, 255)) - 1.).abs() <= 1e-15);
        assert!((luminance(RGB8::new(59, 130, 246)) - 0.2354889).abs() < 1e-6);
    }

    #[test]
    fn contrast_bounds() {
        let white = RGB8::new(255, 255, 255);
        let black = RGB8::new(0, 0, 0);
        assert!((contrast_ratio(white, black) - 21.).abs() < 1e-9);
        for c in [white, black, RGB8::new(59, 130, 246), RGB8::new(7, 8, 9)] {
            assert_eq!(contrast_ratio(c, c), 1.);
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let colors = [RGB8::new(255, 0, 0), RGB8::new(0, 128, 0),
                      RGB8::new(59, 130, 246), RGB8::new(118, 118, 118),
                      RGB8::new(250, 250, 210)];
        for &a in &colors {
            for &b in &colors {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                assert!(contrast_ratio(a, b) >= 1.);
            }
        }
    }

    #[test]
    fn contrast_reference_values() {
        let white = RGB8::new(255, 255, 255);
        // #767676 is the darkest gray passing AA on white.
        let gray = RGB8::new(0x76, 0x76, 0x76);
        assert!((contrast_ratio(gray, white) - 4.5422).abs() < 1e-3);
        let blue = RGB8::new(59, 130, 246);
        assert!((contrast_ratio(blue, white) - 3.6779).abs() < 1e-3);
    }

    #[test]
    fn trait_methods_match_functions() {
        let blue = RGB8::new(59, 130, 246);
        let rgba = RGBA8::new(59, 130, 246, 10);
        assert_eq!(rgba.to_hex(), "#3b82f6");
        assert_eq!(rgba.luminance(), blue.luminance());
        assert_eq!(blue.contrast_ratio(&WHITE), contrast_ratio(blue, WHITE));
        assert_eq!(WHITE.mix(&blue, 0.9), mix_colors(WHITE, blue, 0.9));
        assert_eq!(WHITE.text_color(), TextColor::Black);
        assert_eq!(BLACK.text_color(), TextColor::White);
    }
}
