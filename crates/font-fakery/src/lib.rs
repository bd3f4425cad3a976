//! # Font Fakery
//!
//! Decide how to render a requested style with a variable font face.
//!
//! Given the axes a face supports, the variation settings and style the face
//! was selected with, and the style (plus optional overrides) the text asks
//! for, [`merge`] returns the clamped settings to apply to the face and whether
//! bold or italic still has to be synthesized.
//!
//! ## Example
//!
//! ```
//! use font_fakery::{AxisTable, FontStyle, Slant, Weight, merge};
//! use font_variation::VariationSettings;
//!
//! // A static face: nothing can be expressed through axes.
//! let axes = AxisTable::new();
//! let none = VariationSettings::new();
//! let fakery = merge(
//!     &axes,
//!     &none,
//!     &none,
//!     FontStyle::default(),
//!     FontStyle::new(Weight::BLACK, Slant::Italic),
//! );
//! assert!(fakery.is_fake_bold());
//! assert!(fakery.is_fake_italic());
//! assert!(fakery.variation_settings().is_empty());
//! ```
//!
//! Axes can also be read from a font binary:
//!
//! ```no_run
//! use font_fakery::AxisTable;
//!
//! let data = std::fs::read("variable.ttf").unwrap();
//! let axes = AxisTable::from_data(&data).unwrap();
//! for (tag, range) in &axes {
//!     println!("{tag} {range}");
//! }
//! ```

mod axis;
pub mod config;
mod error;
mod fakery;
mod merge;
mod style;

pub use axis::{AxisRange, AxisTable};
pub use error::{Error, Result};
pub use fakery::FontFakery;
pub use merge::merge;
pub use style::{FontStyle, Slant, Weight};
