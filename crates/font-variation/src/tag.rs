//! Axis tags.
//!
//! Tags order by their big-endian 32-bit value, which for four ASCII bytes is
//! the same as byte-wise order. Every sorted structure in this crate relies on
//! that ordering.

use read_fonts::types::Tag;

use crate::error::{Error, Result};

/// Italic flag axis (`0` upright, `1` italic).
pub const TAG_ITAL: Tag = Tag::new(b"ital");

/// Slant axis, in counter-clockwise degrees.
pub const TAG_SLNT: Tag = Tag::new(b"slnt");

/// Weight axis, in CSS weight units.
pub const TAG_WGHT: Tag = Tag::new(b"wght");

/// Parse an axis tag of one to four printable ASCII characters.
///
/// Shorter tags are padded with trailing spaces, so `"ab"` becomes `"ab  "`.
///
/// # Example
///
/// ```
/// use font_variation::{TAG_WGHT, parse_tag};
/// assert_eq!(parse_tag("wght").unwrap(), TAG_WGHT);
/// ```
pub fn parse_tag(s: &str) -> Result<Tag> {
    if s.is_empty() {
        return Err(Error::EmptyTag);
    }
    if s.len() > 4 {
        return Err(Error::InvalidTag(s.to_string()));
    }

    let mut bytes = [b' '; 4];
    let mut seen_space = false;
    for (i, (dst, &src)) in bytes.iter_mut().zip(s.as_bytes()).enumerate() {
        match src {
            b' ' if i == 0 => return Err(Error::InvalidTag(s.to_string())),
            b' ' => seen_space = true,
            0x21..=0x7e if !seen_space => {}
            _ => return Err(Error::InvalidTag(s.to_string())),
        }
        *dst = src;
    }
    Ok(Tag::new(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_tags_are_ordered() {
        assert!(TAG_ITAL < TAG_SLNT);
        assert!(TAG_SLNT < TAG_WGHT);
    }

    #[test]
    fn tag_order_matches_u32_order() {
        let upper = Tag::new(b"ABCD");
        assert!(upper < TAG_ITAL);
        assert!(
            u32::from_be_bytes(upper.to_be_bytes()) < u32::from_be_bytes(TAG_ITAL.to_be_bytes())
        );
    }

    #[test]
    fn parse_pads_short_tags() {
        assert_eq!(parse_tag("ab").unwrap(), Tag::new(b"ab  "));
        assert_eq!(parse_tag("ab ").unwrap(), Tag::new(b"ab  "));
    }

    #[test]
    fn parse_rejects_bad_tags() {
        assert_eq!(parse_tag(""), Err(Error::EmptyTag));
        assert!(matches!(parse_tag("wghtx"), Err(Error::InvalidTag(_))));
        assert!(matches!(parse_tag(" wgh"), Err(Error::InvalidTag(_))));
        assert!(matches!(parse_tag("w gh"), Err(Error::InvalidTag(_))));
        assert!(matches!(parse_tag("wg\u{7f}"), Err(Error::InvalidTag(_))));
    }
}
