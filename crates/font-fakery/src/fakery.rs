//! The outcome of a style merge: variation settings plus synthesis flags.

use std::fmt::{self, Display, Formatter};

use font_variation::VariationSettings;

/// How a face should be rendered for a requested style: the variation
/// settings to apply, plus whether bold and italic must be synthesized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontFakery {
    fake_bold: bool,
    fake_italic: bool,
    variation_settings: VariationSettings,
}

impl FontFakery {
    pub const fn new(fake_bold: bool, fake_italic: bool) -> Self {
        Self::with_variations(fake_bold, fake_italic, VariationSettings::new())
    }

    pub const fn with_variations(
        fake_bold: bool,
        fake_italic: bool,
        variation_settings: VariationSettings,
    ) -> Self {
        Self { fake_bold, fake_italic, variation_settings }
    }

    pub fn is_fake_bold(&self) -> bool {
        self.fake_bold
    }

    pub fn is_fake_italic(&self) -> bool {
        self.fake_italic
    }

    pub fn variation_settings(&self) -> &VariationSettings {
        &self.variation_settings
    }

    pub fn into_variation_settings(self) -> VariationSettings {
        self.variation_settings
    }
}

impl Display for FontFakery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fake bold: {}, fake italic: {}, variations: [{}]",
            self.fake_bold, self.fake_italic, self.variation_settings
        )
    }
}
