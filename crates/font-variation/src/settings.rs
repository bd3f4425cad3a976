//! Immutable, tag-sorted variation settings.

use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    ops::Index,
    slice,
    str::FromStr,
};

use log::debug;
use read_fonts::types::Tag;

use crate::variation::AxisVariation;

/// A set of axis variations, sorted ascending by tag with no repeated tag.
///
/// Built from any sequence of [`AxisVariation`]s; when a tag appears more than
/// once, the last value supplied wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariationSettings {
    variations: Vec<AxisVariation>,
}

impl VariationSettings {
    /// An empty set.
    pub const fn new() -> Self {
        Self { variations: Vec::new() }
    }

    /// Wrap a vector that is already strictly ascending by tag.
    ///
    /// The ordering is only checked in debug builds.
    pub fn from_sorted(variations: Vec<AxisVariation>) -> Self {
        debug_assert!(
            variations.windows(2).all(|pair| pair[0].tag < pair[1].tag),
            "variations must be strictly ascending by tag"
        );
        Self { variations }
    }

    /// Parse comma separated `'XXXX' value` items.
    ///
    /// Items that fail to parse are skipped; the rest are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use font_variation::VariationSettings;
    ///
    /// let settings = VariationSettings::parse("'wght' 700, bogus, 'ital' 1");
    /// assert_eq!(settings.to_string(), "'ital' 1, 'wght' 700");
    /// ```
    pub fn parse(s: &str) -> Self {
        s.split(',')
            .filter(|item| !item.trim().is_empty())
            .filter_map(|item| match item.parse::<AxisVariation>() {
                Ok(variation) => Some(variation),
                Err(e) => {
                    debug!("skipping variation {item:?}: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Value for `tag`, if present.
    pub fn get(&self, tag: Tag) -> Option<f32> {
        self.variations
            .binary_search_by(|v| v.tag.cmp(&tag))
            .ok()
            .map(|idx| self.variations[idx].value)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.get(tag).is_some()
    }

    pub fn iter(&self) -> slice::Iter<'_, AxisVariation> {
        self.variations.iter()
    }

    pub fn as_slice(&self) -> &[AxisVariation] {
        &self.variations
    }
}

impl From<Vec<AxisVariation>> for VariationSettings {
    fn from(mut variations: Vec<AxisVariation>) -> Self {
        // Stable sort keeps supply order within a tag, so the last one wins below.
        variations.sort_by_key(|v| v.tag);

        let mut deduped: Vec<AxisVariation> = Vec::with_capacity(variations.len());
        for variation in variations {
            match deduped.last_mut() {
                Some(last) if last.tag == variation.tag => *last = variation,
                _ => deduped.push(variation),
            }
        }
        Self { variations: deduped }
    }
}

impl<const N: usize> From<[AxisVariation; N]> for VariationSettings {
    fn from(variations: [AxisVariation; N]) -> Self {
        Self::from(Vec::from(variations))
    }
}

impl FromIterator<AxisVariation> for VariationSettings {
    fn from_iter<I: IntoIterator<Item = AxisVariation>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl FromStr for VariationSettings {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Index<usize> for VariationSettings {
    type Output = AxisVariation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.variations[index]
    }
}

impl<'a> IntoIterator for &'a VariationSettings {
    type Item = &'a AxisVariation;
    type IntoIter = slice::Iter<'a, AxisVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.variations.iter()
    }
}

impl Display for VariationSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, variation) in self.variations.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{variation}")?;
        }
        Ok(())
    }
}
