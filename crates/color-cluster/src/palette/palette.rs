//! Named color palette with nearest-name matching.
//!
//! A [`Palette`] is an ordered list of `(code, name)` entries. Order matters:
//! nearest-name queries break distance ties in favour of the earlier entry.

use std::collections::{HashMap, HashSet};

use super::convention::NamingConvention;
use super::error::PaletteError;
use crate::color::Rgb;

/// The CSS2 basic colors, in the order the HTML4/CSS2 tables list them.
const CSS2_COLORS: [(&str, Rgb); 16] = [
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
];

/// One named color of a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Color code
    pub rgb: Rgb,
    /// Human-readable name
    pub name: String,
}

/// An immutable, ordered set of named colors.
///
/// # Example
///
/// ```
/// use color_cluster::{Palette, Rgb};
///
/// let palette = Palette::css2();
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.nearest_name([250.0, 10.0, 5.0]), "red");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    label: String,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from `(code, name)` entries.
    ///
    /// `label` names the palette in reports (e.g. `"css2"`).
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateColor`] if a code appears twice
    pub fn new(
        label: impl Into<String>,
        entries: impl IntoIterator<Item = (Rgb, String)>,
    ) -> Result<Self, PaletteError> {
        let entries: Vec<PaletteEntry> = entries
            .into_iter()
            .map(|(rgb, name)| PaletteEntry { rgb, name })
            .collect();

        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.rgb) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self {
            label: label.into(),
            entries,
        })
    }

    /// The 16 CSS2 basic colors.
    pub fn css2() -> Self {
        Self {
            label: NamingConvention::Css2.to_string(),
            entries: CSS2_COLORS
                .iter()
                .map(|&(name, rgb)| PaletteEntry {
                    rgb,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Parse the xkcd color survey list (`rgb.txt`).
    ///
    /// Each data line is `name<TAB>#hex`, optionally followed by more
    /// tabs. Lines starting with `#` and blank lines are skipped. When a hex
    /// code appears more than once, the entry keeps the position of its
    /// first occurrence and the name of its last.
    ///
    /// # Errors
    ///
    /// [`PaletteError::MalformedLine`] for a line without a name and code,
    /// [`PaletteError::ParseColor`] for an invalid code, and
    /// [`PaletteError::EmptyPalette`] if no entries remain.
    ///
    /// ```
    /// use color_cluster::{Palette, Rgb};
    ///
    /// let text = "# License: CC0\ncloudy blue\t#acc2d9\t\ndark pastel green\t#56ae57\n";
    /// let palette = Palette::from_xkcd_text(text).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.nearest_name([0x56 as f64, 0xae as f64, 0x57 as f64]), "dark pastel green");
    /// ```
    pub fn from_xkcd_text(text: &str) -> Result<Self, PaletteError> {
        let mut entries: Vec<(Rgb, String)> = Vec::new();
        let mut positions: HashMap<Rgb, usize> = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t').map(str::trim);
            let (name, code) = match (fields.next(), fields.next()) {
                (Some(name), Some(code)) if !name.is_empty() && !code.is_empty() => (name, code),
                _ => {
                    return Err(PaletteError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    })
                }
            };

            let rgb: Rgb = code.parse()?;
            match positions.get(&rgb) {
                Some(&pos) => entries[pos].1 = name.to_string(),
                None => {
                    positions.insert(rgb, entries.len());
                    entries.push((rgb, name.to_string()));
                }
            }
        }

        Self::new(NamingConvention::Xkcd.to_string(), entries)
    }

    /// Label of the palette, used as `color_space` in reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in palette order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Find the entry closest to `rgb` by Euclidean distance in RGB space.
    ///
    /// `rgb` is in the 0..=255 range but need not be integral, so centroids
    /// can be named without rounding first. Distance ties go to the entry
    /// listed first. This is a linear scan; palettes hold at most about a
    /// thousand entries and a report asks for a handful of names.
    ///
    /// Returns `(index, squared_distance)`.
    pub fn find_nearest(&self, rgb: [f64; 3]) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, entry) in self.entries.iter().enumerate() {
            let code = entry.rgb.to_f64();
            let dist = (0..3).map(|c| (code[c] - rgb[c]).powi(2)).sum::<f64>();
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Entry closest to `rgb`.
    pub fn nearest(&self, rgb: [f64; 3]) -> &PaletteEntry {
        let (idx, _) = self.find_nearest(rgb);
        &self.entries[idx]
    }

    /// Name of the entry closest to `rgb`.
    pub fn nearest_name(&self, rgb: [f64; 3]) -> &str {
        &self.nearest(rgb).name
    }
}
