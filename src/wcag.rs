//! WCAG 2.x conformance levels for contrast ratios.

use rgb::RGB8;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PaletteScale;

/// Minimum contrast ratios of the WCAG conformance levels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thresholds {
    /// AA, normal text.
    pub aa_normal: f64,
    /// AA, large text (18pt, or 14pt bold).
    pub aa_large: f64,
    /// AAA, normal text.
    pub aaa_normal: f64,
    /// AAA, large text.
    pub aaa_large: f64,
}

/// The levels of WCAG 2.x.
pub const WCAG: Thresholds = Thresholds {
    aa_normal: 4.5,
    aa_large: 3.,
    aaa_normal: 7.,
    aaa_large: 4.5,
};

impl Default for Thresholds {
    #[inline]
    fn default() -> Self { WCAG }
}

/// Which levels a contrast ratio reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Checks {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

/// Summary rating of a ratio for normal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rating {
    Fail,
    Aa,
    Aaa,
}

impl Thresholds {
    /// Compare `ratio` against each level (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use color_scale::wcag::WCAG;
    /// let c = WCAG.check(4.5);
    /// assert!(c.aa_normal && c.aa_large && c.aaa_large && !c.aaa_normal);
    /// ```
    pub fn check(&self, ratio: f64) -> Checks {
        Checks { aa_normal: ratio >= self.aa_normal,
                 aa_large: ratio >= self.aa_large,
                 aaa_normal: ratio >= self.aaa_normal,
                 aaa_large: ratio >= self.aaa_large }
    }

    /// [`Rating::Aaa`] from AAA normal, [`Rating::Aa`] from AA normal.
    pub fn rate(&self, ratio: f64) -> Rating {
        if ratio >= self.aaa_normal { Rating::Aaa }
        else if ratio >= self.aa_normal { Rating::Aa }
        else { Rating::Fail }
    }
}

/// Text color to write over a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    #[inline]
    pub fn rgb(self) -> RGB8 {
        match self {
            TextColor::Black => crate::BLACK,
            TextColor::White => crate::WHITE,
        }
    }
}

/// Black text over colors of luminance above 0.5, white otherwise.
pub fn text_color(background: RGB8) -> TextColor {
    if crate::luminance(background) > 0.5 { TextColor::Black }
    else { TextColor::White }
}

/// Contrast ratios between all pairs of colors of a [`PaletteScale`].
///
/// Rows are backgrounds and columns text colors, both in increasing
/// label order.  A color is not compared with itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastGrid {
    labels: Vec<u16>,
    cells: Vec<Option<f64>>, // row-major, `labels.len()²` cells
}

impl ContrastGrid {
    pub fn new(scale: &PaletteScale) -> Self {
        let labels: Vec<u16> = scale.labels().collect();
        let cells = scale.iter().flat_map(|(row, bg)| {
            scale.iter().map(move |(col, fg)| {
                if row == col { None }
                else { Some(crate::contrast_ratio(bg.rgb(), fg.rgb())) }
            })
        }).collect();
        ContrastGrid { labels, cells }
    }

    /// Labels of the rows (and columns).
    #[inline]
    pub fn labels(&self) -> &[u16] { &self.labels }

    /// Number of rows (and columns).
    #[inline]
    pub fn len(&self) -> usize { self.labels.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Contrast of text `fg` over background `bg`.  `None` on the
    /// diagonal or if a label is missing.
    pub fn get(&self, bg: u16, fg: u16) -> Option<f64> {
        let i = self.labels.iter().position(|&l| l == bg)?;
        let j = self.labels.iter().position(|&l| l == fg)?;
        self.cells[i * self.len() + j]
    }

    /// Rows of the grid with their background label.
    pub fn rows(&self) -> impl Iterator<Item = (u16, &[Option<f64>])> + '_ {
        // `chunks` panics on 0.
        let n = self.len().max(1);
        self.labels.iter().copied().zip(self.cells.chunks(n))
    }
}
