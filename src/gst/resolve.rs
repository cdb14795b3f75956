//! Derive the billing state from a GST number.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::format::{has_reserved_prefix, is_valid_gst_format, normalize_gst};
use crate::core::gst_codes::{GstStateMapping, NO_FIXED_STATE, gst_state_codes, state_for_prefix};
use crate::core::states::{StateEntry, indian_states, state_by_name};

/// Why a GST number was not accepted. Shown inline under the GST field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GstError {
    /// Prefix "97" or "99": not tied to a registration state.
    #[error("Please enter a GST number for a different state")]
    ReservedPrefix,
    /// The value does not have the 15-character GSTIN layout.
    #[error("Invalid GST Number format")]
    InvalidFormat,
}

/// Outcome of resolving one GST input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Upper-cased input, at most 15 characters. Kept even when invalid so
    /// the field shows what the customer typed.
    pub normalized: String,
    /// Derived state name, `"-"` for prefixes without a fixed state, or empty.
    pub state: String,
    /// Derived state code, or empty.
    pub state_code: String,
    pub error: Option<GstError>,
}

impl Resolution {
    fn cleared(normalized: String, error: Option<GstError>) -> Self {
        Self {
            normalized,
            state: String::new(),
            state_code: String::new(),
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Resolves GST numbers against a state list and a prefix table.
#[derive(Debug, Clone, Copy)]
pub struct GstResolver<'a> {
    states: &'a [StateEntry],
    gst_codes: &'a [GstStateMapping],
}

impl GstResolver<'static> {
    /// Resolver over the built-in Indian tables.
    pub fn india() -> Self {
        Self::new(indian_states(), gst_state_codes())
    }
}

impl Default for GstResolver<'static> {
    fn default() -> Self {
        Self::india()
    }
}

impl<'a> GstResolver<'a> {
    /// `gst_codes` must be sorted by prefix.
    pub fn new(states: &'a [StateEntry], gst_codes: &'a [GstStateMapping]) -> Self {
        Self { states, gst_codes }
    }

    /// Normalize `raw` and derive `state` / `state_code` from its prefix.
    ///
    /// The reserved-prefix check runs before the layout check, so "99…"
    /// always reports [`GstError::ReservedPrefix`]. A valid number whose
    /// prefix is unknown, or whose state name is missing from the state
    /// list, resolves with both fields cleared and no error.
    pub fn resolve(&self, raw: &str) -> Resolution {
        let normalized = normalize_gst(raw);

        if normalized.is_empty() {
            return Resolution::cleared(normalized, None);
        }
        if has_reserved_prefix(&normalized) {
            debug!(gst_no = %normalized, "reserved GST prefix");
            return Resolution::cleared(normalized, Some(GstError::ReservedPrefix));
        }
        if !is_valid_gst_format(&normalized) {
            return Resolution::cleared(normalized, Some(GstError::InvalidFormat));
        }

        let prefix = &normalized[..2];
        match state_for_prefix(self.gst_codes, prefix) {
            Some(NO_FIXED_STATE) => Resolution {
                state: NO_FIXED_STATE.to_string(),
                state_code: String::new(),
                error: None,
                normalized,
            },
            Some(name) => match state_by_name(self.states, name) {
                Some(entry) => {
                    debug!(gst_no = %normalized, state = entry.name, "GST state resolved");
                    Resolution {
                        state: entry.name.to_string(),
                        state_code: entry.code.to_string(),
                        error: None,
                        normalized,
                    }
                }
                None => {
                    debug!(prefix, state = name, "GST state missing from state list");
                    Resolution::cleared(normalized, None)
                }
            },
            None => {
                debug!(prefix, "GST prefix not mapped to a state");
                Resolution::cleared(normalized, None)
            }
        }
    }
}

/// Resolve `raw` against the built-in tables.
pub fn resolve(raw: &str) -> Resolution {
    GstResolver::india().resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_clears_without_error() {
        let r = resolve("");
        assert_eq!(r, Resolution::default());
    }

    #[test]
    fn delhi() {
        let r = resolve("07AAAAA0000A1Z5");
        assert_eq!(r.normalized, "07AAAAA0000A1Z5");
        assert_eq!(r.state, "Delhi");
        assert_eq!(r.state_code, "DL");
        assert!(r.is_ok());
    }

    #[test]
    fn lower_case_input_is_normalized() {
        let r = resolve("27aapfu0939f1zv");
        assert_eq!(r.normalized, "27AAPFU0939F1ZV");
        assert_eq!(r.state, "Maharashtra");
        assert_eq!(r.state_code, "MH");
    }

    #[test]
    fn reserved_prefixes() {
        for raw in ["97AAAAA0000A1Z5", "99AAAAA0000A1Z5", "99", "97x", "99!!!"] {
            let r = resolve(raw);
            assert_eq!(r.error, Some(GstError::ReservedPrefix), "{raw}");
            assert!(r.state.is_empty());
            assert!(r.state_code.is_empty());
        }
    }

    #[test]
    fn partial_input_is_invalid_format() {
        let r = resolve("07AAA");
        assert_eq!(r.normalized, "07AAA");
        assert_eq!(r.error, Some(GstError::InvalidFormat));
        assert!(r.state.is_empty());
    }

    #[test]
    fn sentinel_prefix() {
        let r = resolve("25AAAAA0000A1Z5");
        assert_eq!(r.state, "-");
        assert_eq!(r.state_code, "");
        assert!(r.is_ok());
    }

    #[test]
    fn unmapped_prefix_clears_silently() {
        let r = resolve("45AAAAA0000A1Z5");
        assert!(r.is_ok());
        assert!(r.state.is_empty());
        assert!(r.state_code.is_empty());
    }

    #[test]
    fn state_missing_from_reference_list_clears_silently() {
        static STATES: &[StateEntry] = &[StateEntry::new("DL", "Delhi")];
        static CODES: &[GstStateMapping] = &[("07", "Delhi"), ("27", "Maharashtra")];
        let resolver = GstResolver::new(STATES, CODES);

        let r = resolver.resolve("27AAPFU0939F1ZV");
        assert!(r.is_ok());
        assert!(r.state.is_empty());
        assert!(r.state_code.is_empty());

        let r = resolver.resolve("07AAAAA0000A1Z5");
        assert_eq!(r.state_code, "DL");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GstError::ReservedPrefix.to_string(),
            "Please enter a GST number for a different state"
        );
        assert_eq!(GstError::InvalidFormat.to_string(), "Invalid GST Number format");
    }
}
