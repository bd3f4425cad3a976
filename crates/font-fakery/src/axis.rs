//! Per-face variable axis capabilities.

use std::{
    collections::{BTreeMap, btree_map},
    fmt::{self, Display, Formatter},
};

use font_variation::Tag;
use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider};

use crate::error::Result;

/// Supported range and default of one variable axis.
///
/// `min <= default <= max` is expected but not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Display for AxisRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} (default: {})", self.min, self.max, self.default)
    }
}

/// The axes a face supports, keyed by tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTable {
    axes: BTreeMap<Tag, AxisRange>,
}

impl AxisTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the axes advertised in the font's `fvar` table.
    ///
    /// A font without `fvar` is static and yields an empty table.
    pub fn from_font(font: &FontRef) -> Result<Self> {
        let fvar = match font.fvar() {
            Ok(fvar) => fvar,
            Err(ReadError::TableIsMissing(_)) => {
                debug!("no fvar table, font has no variable axes");
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(fvar
            .axes()?
            .iter()
            .map(|axis| {
                let range = AxisRange::new(
                    axis.min_value().to_f64() as f32,
                    axis.max_value().to_f64() as f32,
                    axis.default_value().to_f64() as f32,
                );
                (axis.axis_tag(), range)
            })
            .collect())
    }

    /// Parse `data` as a font and read its axes.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        Self::from_font(&FontRef::new(data)?)
    }

    /// Add or replace the entry for `tag`.
    pub fn insert(&mut self, tag: Tag, range: AxisRange) -> Option<AxisRange> {
        self.axes.insert(tag, range)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.axes.contains_key(&tag)
    }

    /// Entry for `tag`, or `None` when the face does not support the axis.
    pub fn get(&self, tag: Tag) -> Option<&AxisRange> {
        self.axes.get(&tag)
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Tag, AxisRange> {
        self.axes.iter()
    }
}

impl FromIterator<(Tag, AxisRange)> for AxisTable {
    fn from_iter<I: IntoIterator<Item = (Tag, AxisRange)>>(iter: I) -> Self {
        Self { axes: iter.into_iter().collect() }
    }
}

impl<const N: usize> From<[(Tag, AxisRange); N]> for AxisTable {
    fn from(axes: [(Tag, AxisRange); N]) -> Self {
        axes.into_iter().collect()
    }
}

impl Extend<(Tag, AxisRange)> for AxisTable {
    fn extend<I: IntoIterator<Item = (Tag, AxisRange)>>(&mut self, iter: I) {
        self.axes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AxisTable {
    type Item = (&'a Tag, &'a AxisRange);
    type IntoIter = btree_map::Iter<'a, Tag, AxisRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}

#[cfg(test)]
mod tests {
    use font_variation::{TAG_ITAL, TAG_SLNT, TAG_WGHT};

    use super::*;
    use crate::Error;

    #[test]
    fn clamp_to_range() {
        let range = AxisRange::new(100.0, 700.0, 400.0);
        assert_eq!(range.clamp(50.0), 100.0);
        assert_eq!(range.clamp(500.0), 500.0);
        assert_eq!(range.clamp(900.0), 700.0);
        assert!(range.contains(700.0));
        assert!(!range.contains(701.0));
    }

    #[test]
    fn lookup_distinguishes_missing_from_zero() {
        let table = AxisTable::from([(TAG_SLNT, AxisRange::new(-10.0, 0.0, 0.0))]);

        assert!(table.contains(TAG_SLNT));
        assert_eq!(table.get(TAG_SLNT), Some(&AxisRange::new(-10.0, 0.0, 0.0)));
        assert!(!table.contains(TAG_ITAL));
        assert_eq!(table.get(TAG_ITAL), None);
    }

    #[test]
    fn insert_replaces() {
        let mut table = AxisTable::new();
        assert!(table.is_empty());
        assert_eq!(table.insert(TAG_WGHT, AxisRange::new(100.0, 900.0, 400.0)), None);
        let old = table.insert(TAG_WGHT, AxisRange::new(300.0, 700.0, 400.0));
        assert_eq!(old, Some(AxisRange::new(100.0, 900.0, 400.0)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(TAG_WGHT).map(|r| r.max), Some(700.0));
    }

    #[test]
    fn iterates_in_tag_order() {
        let table = AxisTable::from([
            (TAG_WGHT, AxisRange::new(100.0, 900.0, 400.0)),
            (TAG_ITAL, AxisRange::new(0.0, 1.0, 0.0)),
        ]);
        let tags: Vec<_> = table.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(tags, [TAG_ITAL, TAG_WGHT]);
    }

    #[test]
    fn reads_fvar_axes() {
        let table = AxisTable::from_data(font_test_data::VAZIRMATN_VAR).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(TAG_WGHT), Some(&AxisRange::new(100.0, 900.0, 400.0)));
    }

    #[test]
    fn static_font_has_no_axes() {
        let table = AxisTable::from_data(font_test_data::SIMPLE_GLYF).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(AxisTable::from_data(b"not a font"), Err(Error::Parse(_))));
    }

    #[test]
    fn display_range() {
        assert_eq!(AxisRange::new(-10.0, 0.0, 0.0).to_string(), "-10..0 (default: 0)");
    }
}
