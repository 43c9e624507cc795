//! Tint/shade scales built from one base color.

use std::collections::BTreeMap;
use std::ops::Index;
use log::{debug, trace, warn};
use rgb::RGB8;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{hex_to_rgb, mix_colors, validate_hex, HexError};
use crate::wcag::ContrastGrid;

pub(crate) mod ty;
use ty::{ColorData, Mix, Stop, STOPS};

/// Base color of a fresh [`ScaleState`].
pub const DEFAULT_BASE: &str = "#3b82f6";

/// Label of the base color in the default scale.
pub const BASE_LABEL: u16 = 500;

pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Colors of a scale, indexed by step label.
///
/// Created by [`generate_color_scale`].  Iteration is in increasing
/// label order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct PaletteScale {
    colors: BTreeMap<u16, ColorData>,
}

impl PaletteScale {
    /// Returns the number of colors in the scale.
    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The color at step `label`, if the scale has one.
    #[inline]
    pub fn get(&self, label: u16) -> Option<&ColorData> {
        self.colors.get(&label)
    }

    /// The base color (step [`BASE_LABEL`]).
    #[inline]
    pub fn base(&self) -> Option<&ColorData> { self.get(BASE_LABEL) }

    /// The labels present, in increasing order.
    pub fn labels(&self) -> impl Iterator<Item = u16> + '_ {
        self.colors.keys().copied()
    }

    /// The steps with their colors, in increasing label order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &ColorData)> + '_ {
        self.colors.iter().map(|(&l, c)| (l, c))
    }

    /// Contrast ratio of text in color `fg` over a background of color
    /// `bg`.  Returns `None` if either label is missing.
    pub fn contrast(&self, bg: u16, fg: u16) -> Option<f64> {
        let bg = self.get(bg)?;
        let fg = self.get(fg)?;
        Some(crate::contrast_ratio(bg.rgb(), fg.rgb()))
    }

    /// Pairwise contrast ratios between the colors of the scale.
    #[inline]
    pub fn contrast_grid(&self) -> ContrastGrid { ContrastGrid::new(self) }
}

/// # Panics
///
/// If the scale has no color at step `label`.
impl Index<u16> for PaletteScale {
    type Output = ColorData;

    fn index(&self, label: u16) -> &ColorData {
        match self.colors.get(&label) {
            Some(c) => c,
            None => panic!("no color at step {label}"),
        }
    }
}

/// Generate the scale of `base` following [`STOPS`]: tints 50–300,
/// the base color at 500 and shades 600–900.  There is no step 400.
///
/// The entry at 500 keeps `base` verbatim (no `#` added, case
/// preserved).  The other hex strings are lowercase `#rrggbb`.
///
/// # Example
///
/// ```
/// use color_scale::generate_color_scale;
/// let scale = generate_color_scale("#3b82f6")?;
/// assert_eq!(scale[500].hex(), "#3b82f6");
/// assert_eq!(scale[600].hex(), "#2f68c5");
/// assert!(scale.get(400).is_none());
/// # Ok::<(), color_scale::HexError>(())
/// ```
#[inline]
pub fn generate_color_scale(base: &str) -> Result<PaletteScale, HexError> {
    generate_color_scale_with(base, &STOPS)
}

/// Generate the scale of `base` with the steps `stops`.  When several
/// stops share a label, the last one wins.
pub fn generate_color_scale_with(
    base: &str, stops: &[Stop]) -> Result<PaletteScale, HexError> {
    let base_rgb = hex_to_rgb(base)?;
    let colors: BTreeMap<_, _> = stops.iter().map(|stop| {
        let color = match stop.mix {
            Mix::Tint(w) => ColorData::from_rgb(mix_colors(WHITE, base_rgb, w)),
            Mix::Base => ColorData::verbatim(base, base_rgb),
            Mix::Shade(w) => ColorData::from_rgb(mix_colors(BLACK, base_rgb, w)),
        };
        trace!("step {}: {:?} -> {}", stop.label, stop.mix, color);
        (stop.label, color)
    }).collect();
    debug!("generated {}-step scale from {}", colors.len(), base);
    Ok(PaletteScale { colors })
}

/// The last successfully generated scale.
///
/// [`regenerate`](ScaleState::regenerate) replaces it only when the new
/// base color is valid, so a bad input never clears what is shown.
#[derive(Clone, Debug)]
pub struct ScaleState {
    base: String,
    scale: PaletteScale,
}

impl ScaleState {
    /// State holding the scale of `base`.
    pub fn new(base: &str) -> Result<Self, HexError> {
        validate_hex(base)?;
        let scale = generate_color_scale(base)?;
        Ok(ScaleState { base: base.to_string(), scale })
    }

    /// Base color of the current scale.
    #[inline]
    pub fn base(&self) -> &str { &self.base }

    #[inline]
    pub fn scale(&self) -> &PaletteScale { &self.scale }

    /// Replace the scale by the one of `base`.  On error the previous
    /// scale is kept.
    pub fn regenerate(&mut self, base: &str)
                      -> Result<&PaletteScale, HexError> {
        match validate_hex(base).and_then(|_| generate_color_scale(base)) {
            Ok(scale) => {
                self.base = base.to_string();
                self.scale = scale;
                Ok(&self.scale)
            }
            Err(e) => {
                warn!("failed to generate palette from {base:?}: {e}; \
                       keeping {}", self.base);
                Err(e)
            }
        }
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        ScaleState { base: DEFAULT_BASE.to_string(),
                     scale: generate_color_scale(DEFAULT_BASE)
                         .unwrap_or_default() }
    }
}
