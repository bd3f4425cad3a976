//! # Font Variation
//!
//! Axis tag / value pairs and the sorted, tag-unique settings built from them.
//!
//! ## Example
//!
//! ```
//! use font_variation::{AxisVariation, TAG_WGHT, VariationSettings};
//!
//! let settings = VariationSettings::parse("'wght' 700, 'ital' 1");
//! assert_eq!(settings.len(), 2);
//! assert_eq!(settings.get(TAG_WGHT), Some(700.0));
//! assert_eq!(settings[1], AxisVariation::new(TAG_WGHT, 700.0));
//! ```

mod error;
mod settings;
mod tag;
mod variation;

pub use error::{Error, Result};
pub use read_fonts::types::Tag;
pub use settings::VariationSettings;
pub use tag::{TAG_ITAL, TAG_SLNT, TAG_WGHT, parse_tag};
pub use variation::AxisVariation;
