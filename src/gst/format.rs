//! GSTIN normalization and structural validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::resolve::GstError;

/// Length of a GST identification number.
pub const GST_LEN: usize = 15;

/// Prefixes that never identify a registration state.
pub const RESERVED_PREFIXES: [&str; 2] = ["97", "99"];

/// Upper-case `raw` and keep at most [`GST_LEN`] characters.
///
/// Longer input (e.g. a paste with trailing text) is cut silently.
pub fn normalize_gst(raw: &str) -> String {
    raw.to_uppercase().chars().take(GST_LEN).collect()
}

/// Whether `value` starts with a reserved prefix ("97" or "99").
pub fn has_reserved_prefix(value: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|p| value.starts_with(p))
}

/// Check the 15-character GSTIN layout:
/// 2 digits, 5 letters, 4 digits, 1 letter, 1 alphanumeric, 'Z', 1 alphanumeric.
///
/// Only upper-case ASCII letters are accepted; normalize first.
pub fn is_valid_gst_format(value: &str) -> bool {
    let b = value.as_bytes();
    if b.len() != GST_LEN {
        return false;
    }
    let upper_alnum = |c: &u8| c.is_ascii_digit() || c.is_ascii_uppercase();

    b[..2].iter().all(u8::is_ascii_digit)
        && b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase()
        && upper_alnum(&b[12])
        && b[13] == b'Z'
        && upper_alnum(&b[14])
}

/// A structurally valid, normalized GST number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GstCode(String);

impl GstCode {
    /// Two-digit state prefix.
    pub fn state_prefix(&self) -> &str {
        &self.0[..2]
    }

    /// The 10-character PAN embedded in positions 3–12.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GstCode {
    type Err = GstError;

    /// Normalizes and validates. Reserved prefixes are rejected before the
    /// layout is checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_gst(s);
        if has_reserved_prefix(&normalized) {
            return Err(GstError::ReservedPrefix);
        }
        if !is_valid_gst_format(&normalized) {
            return Err(GstError::InvalidFormat);
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for GstCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GstCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for GstCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GstCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
