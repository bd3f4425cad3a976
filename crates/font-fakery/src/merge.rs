//! Merging base and target variation settings with a requested style.
//!
//! The face selected for a run of text comes with its own variation settings
//! (base) and style. The caller may request a different style and add explicit
//! overrides (target). [`merge`] combines the three sources into the settings
//! to apply to the face, and decides whether bold or italic must be faked
//! because the face's axes cannot express the request.

use std::cmp::Ordering;

use font_variation::{AxisVariation, TAG_ITAL, TAG_SLNT, TAG_WGHT, Tag, VariationSettings};
use log::{debug, trace};

use crate::{
    axis::AxisTable,
    config::{FAKE_BOLD_MIN_WEIGHT, FAKE_BOLD_WEIGHT_GAP},
    fakery::FontFakery,
    style::{FontStyle, Weight},
};

/// Compute the variation settings and fakery for rendering `target_style` with
/// a face whose axes are `axes`.
///
/// - Explicit values win over style-derived ones, and `target` wins over
///   `base`.
/// - Axes missing from `axes` are dropped. Values are clamped to the axis range.
/// - A style-derived value equal to the axis default is dropped; explicit
///   values are kept even when they equal the default.
///
/// # Example
///
/// ```
/// use font_fakery::{AxisRange, AxisTable, FontStyle, Slant, Weight, merge};
/// use font_variation::{TAG_SLNT, TAG_WGHT, VariationSettings};
///
/// let axes = AxisTable::from([
///     (TAG_WGHT, AxisRange::new(100.0, 900.0, 400.0)),
///     (TAG_SLNT, AxisRange::new(-10.0, 0.0, 0.0)),
/// ]);
/// let fakery = merge(
///     &axes,
///     &VariationSettings::parse("'wght' 650"),
///     &VariationSettings::parse("'wght' 750"),
///     FontStyle::default(),
///     FontStyle::new(Weight::NORMAL, Slant::Italic),
/// );
/// assert_eq!(fakery.variation_settings().to_string(), "'slnt' -10, 'wght' 750");
/// assert!(!fakery.is_fake_bold());
/// assert!(!fakery.is_fake_italic());
/// ```
pub fn merge(
    axes: &AxisTable,
    base: &VariationSettings,
    target: &VariationSettings,
    base_style: FontStyle,
    target_style: FontStyle,
) -> FontFakery {
    let style_vars = style_variations(axes, target_style);

    let mut base_cursor = Cursor::new(base.as_slice());
    let mut target_cursor = Cursor::new(target.as_slice());
    let mut style_cursor = Cursor::new(&style_vars);

    let mut adjusted = Vec::with_capacity(base.len() + target.len() + 2);
    let mut clamped_weight = None;

    while let Some(pick) = Pick::next(base_cursor.head(), target_cursor.head(), style_cursor.head())
    {
        let base_var = pick.takes_base().then(|| base_cursor.advance()).flatten();
        let target_var = pick.takes_target().then(|| target_cursor.advance()).flatten();
        let style_var = pick.takes_style().then(|| style_cursor.advance()).flatten();
        let Some(AxisVariation { tag, value }) = target_var.or(base_var).or(style_var) else {
            break;
        };
        let from_style = pick.value_from_style();

        let Some(range) = axes.get(tag) else {
            trace!("dropping {tag}: not supported by the face");
            continue;
        };
        if from_style && value == range.default {
            trace!("dropping {tag}: style value {value} is the axis default");
            continue;
        }

        let clamped = range.clamp(value);
        trace!("{tag} = {clamped} (requested {value}, {pick:?})");
        adjusted.push(AxisVariation::new(tag, clamped));
        if tag == TAG_WGHT {
            clamped_weight = Some(clamped);
        }
    }

    let fake_bold = match (axes.get(TAG_WGHT), clamped_weight) {
        (Some(_), Some(weight)) => needs_fake_bold(target_style.weight, weight),
        // Elided weight: the face renders at the axis default.
        (Some(range), None) => needs_fake_bold(target_style.weight, range.default),
        (None, _) => needs_fake_bold(target_style.weight, base_style.weight.as_f32()),
    };

    let fake_italic = target_style.is_italic()
        && !axes.contains(TAG_ITAL)
        && !axes.contains(TAG_SLNT)
        && !base_style.is_italic();

    let settings = VariationSettings::from_sorted(adjusted);
    let fakery = FontFakery::with_variations(fake_bold, fake_italic, settings);
    debug!("merged {base_style} -> {target_style}: {fakery}");
    fakery
}

/// Axis values implied by the requested style, ascending by tag.
///
/// `slnt` is preferred over `ital` when a face has both; only one of them is
/// ever produced.
fn style_variations(axes: &AxisTable, style: FontStyle) -> Vec<AxisVariation> {
    let mut vars = Vec::with_capacity(2);
    if axes.contains(TAG_SLNT) {
        vars.push(AxisVariation::new(TAG_SLNT, style.slant.slnt()));
    } else if axes.contains(TAG_ITAL) {
        vars.push(AxisVariation::new(TAG_ITAL, style.slant.ital()));
    }
    if axes.contains(TAG_WGHT) {
        vars.push(AxisVariation::new(TAG_WGHT, style.weight.as_f32()));
    }
    vars
}

fn needs_fake_bold(requested: Weight, rendered: f32) -> bool {
    requested.value() >= FAKE_BOLD_MIN_WEIGHT
        && requested.as_f32() - rendered >= FAKE_BOLD_WEIGHT_GAP
}

/// Next tag of a sorted source. `End` orders after every tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Head {
    Tag(Tag),
    End,
}

struct Cursor<'a> {
    items: &'a [AxisVariation],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(items: &'a [AxisVariation]) -> Self {
        Self { items, pos: 0 }
    }

    fn head(&self) -> Head {
        self.items.get(self.pos).map_or(Head::End, |v| Head::Tag(v.tag))
    }

    fn advance(&mut self) -> Option<AxisVariation> {
        let item = self.items.get(self.pos).copied();
        self.pos += 1;
        item
    }
}

/// Which sources hold the smallest pending tag and get consumed this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Style,
    Base,
    Target,
    BaseStyle,
    TargetStyle,
    BaseTarget,
    All,
}

impl Pick {
    /// Decide the next step from the three heads, or `None` once all are done.
    fn next(base: Head, target: Head, style: Head) -> Option<Self> {
        use Ordering::*;

        if base == Head::End && target == Head::End && style == Head::End {
            return None;
        }
        let pick = match base.cmp(&target) {
            Less => match style.cmp(&base) {
                Less => Pick::Style,
                Equal => Pick::BaseStyle,
                Greater => Pick::Base,
            },
            Greater => match style.cmp(&target) {
                Less => Pick::Style,
                Equal => Pick::TargetStyle,
                Greater => Pick::Target,
            },
            Equal => match style.cmp(&base) {
                Less => Pick::Style,
                Equal => Pick::All,
                Greater => Pick::BaseTarget,
            },
        };
        Some(pick)
    }

    fn takes_base(self) -> bool {
        matches!(self, Pick::Base | Pick::BaseStyle | Pick::BaseTarget | Pick::All)
    }

    fn takes_target(self) -> bool {
        matches!(self, Pick::Target | Pick::TargetStyle | Pick::BaseTarget | Pick::All)
    }

    fn takes_style(self) -> bool {
        matches!(self, Pick::Style | Pick::BaseStyle | Pick::TargetStyle | Pick::All)
    }

    /// The value comes from the style only when no explicit source has the tag.
    fn value_from_style(self) -> bool {
        self == Pick::Style
    }
}
