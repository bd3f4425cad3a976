//! Requested text style.

use std::fmt::{self, Display, Formatter};

use crate::config::{ITALIC_FLAG, ITALIC_SLANT, UPRIGHT_FLAG, UPRIGHT_SLANT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Slant {
    #[default]
    Upright,
    Italic,
}

impl Slant {
    /// Value for the `slnt` axis.
    pub const fn slnt(self) -> f32 {
        match self {
            Slant::Upright => UPRIGHT_SLANT,
            Slant::Italic => ITALIC_SLANT,
        }
    }

    /// Value for the `ital` axis.
    pub const fn ital(self) -> f32 {
        match self {
            Slant::Upright => UPRIGHT_FLAG,
            Slant::Italic => ITALIC_FLAG,
        }
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Slant::Italic)
    }
}

/// CSS-style numeric weight, conventionally 100 to 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(pub u16);

impl Weight {
    pub const THIN: Weight = Weight(100);
    pub const EXTRA_LIGHT: Weight = Weight(200);
    pub const LIGHT: Weight = Weight(300);
    pub const NORMAL: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const SEMI_BOLD: Weight = Weight(600);
    pub const BOLD: Weight = Weight(700);
    pub const EXTRA_BOLD: Weight = Weight(800);
    pub const BLACK: Weight = Weight(900);

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::NORMAL
    }
}

impl From<u16> for Weight {
    fn from(weight: u16) -> Self {
        Weight(weight)
    }
}

/// A weight and slant pair, as requested by text or baked into a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub weight: Weight,
    pub slant: Slant,
}

impl FontStyle {
    pub const fn new(weight: Weight, slant: Slant) -> Self {
        Self { weight, slant }
    }

    pub const fn is_italic(&self) -> bool {
        self.slant.is_italic()
    }
}

impl Display for FontStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.slant {
            Slant::Upright => write!(f, "{}", self.weight.0),
            Slant::Italic => write!(f, "{} italic", self.weight.0),
        }
    }
}
