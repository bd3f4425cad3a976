//! Constants that drive style synthesis.

/// Requested weights below this never get fake bold.
pub const FAKE_BOLD_MIN_WEIGHT: u16 = 600;

/// Fake bold needs the requested weight to exceed the rendered weight by at
/// least this much.
pub const FAKE_BOLD_WEIGHT_GAP: f32 = 200.0;

/// `slnt` value used for an italic request.
pub const ITALIC_SLANT: f32 = -10.0;

/// `slnt` value used for an upright request.
pub const UPRIGHT_SLANT: f32 = 0.0;

/// `ital` value used for an italic request.
pub const ITALIC_FLAG: f32 = 1.0;

/// `ital` value used for an upright request.
pub const UPRIGHT_FLAG: f32 = 0.0;
