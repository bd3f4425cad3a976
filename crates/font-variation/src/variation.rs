//! A single axis tag / value pair.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use read_fonts::types::Tag;

use crate::{
    error::{Error, Result},
    tag::parse_tag,
};

/// An axis tag paired with a user-space value, e.g. `wght` at `700`.
///
/// Ordering looks at the tag alone while equality compares tag and value.
/// Sorted sequences therefore hold at most one entry per tag, and two
/// sequences only compare equal when their values match too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisVariation {
    pub tag: Tag,
    pub value: f32,
}

impl AxisVariation {
    pub const fn new(tag: Tag, value: f32) -> Self {
        Self { tag, value }
    }
}

impl PartialOrd for AxisVariation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.tag.cmp(&other.tag))
    }
}

impl From<(Tag, f32)> for AxisVariation {
    fn from((tag, value): (Tag, f32)) -> Self {
        Self { tag, value }
    }
}

impl From<(&[u8; 4], f32)> for AxisVariation {
    fn from((tag, value): (&[u8; 4], f32)) -> Self {
        Self { tag: Tag::new(tag), value }
    }
}

/// Tags shorter than four characters are padded with spaces.
impl TryFrom<(&str, f32)> for AxisVariation {
    type Error = Error;

    fn try_from((tag, value): (&str, f32)) -> Result<Self> {
        Ok(Self { tag: parse_tag(tag)?, value })
    }
}

impl Display for AxisVariation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.tag, self.value)
    }
}

/// Parses `'wght' 700`, `"wght" 700`, `wght 700` or `wght=700`.
impl FromStr for AxisVariation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (raw_tag, rest) = split_tag(s.trim())?;
        let tag = parse_tag(raw_tag)?;

        let rest = rest.trim_start();
        let value = rest.strip_prefix('=').unwrap_or(rest).trim();
        if value.is_empty() {
            return Err(Error::MissingValue(raw_tag.to_string()));
        }
        let value = value
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidValue(value.to_string()))?;

        Ok(Self { tag, value })
    }
}

fn split_tag(s: &str) -> Result<(&str, &str)> {
    match s.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let body = &s[1..];
            let end = body.find(quote).ok_or_else(|| Error::UnterminatedQuote(s.to_string()))?;
            Ok((&body[..end], &body[end + 1..]))
        }
        _ => {
            let end = s.find(|c: char| c.is_whitespace() || c == '=').unwrap_or(s.len());
            Ok(s.split_at(end))
        }
    }
}
