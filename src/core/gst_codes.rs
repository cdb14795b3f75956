//! GST state codes.
//!
//! The first two digits of a GSTIN identify the state of registration.
//! Prefixes that no longer (or never did) correspond to exactly one state
//! map to [`NO_FIXED_STATE`].

/// Sentinel state name for prefixes without a single canonical state.
pub const NO_FIXED_STATE: &str = "-";

/// A GST prefix and the state name it stands for.
pub type GstStateMapping = (&'static str, &'static str);

/// The built-in prefix table, sorted by prefix.
pub fn gst_state_codes() -> &'static [GstStateMapping] {
    GST_STATE_CODES
}

/// Look up the state name for a 2-digit prefix.
///
/// `table` must be sorted by prefix. Returns [`NO_FIXED_STATE`] for reserved
/// prefixes and `None` when the prefix is not in the table at all.
pub fn state_for_prefix<'a>(table: &'a [GstStateMapping], prefix: &str) -> Option<&'a str> {
    table
        .binary_search_by(|(code, _)| (*code).cmp(prefix))
        .ok()
        .map(|idx| table[idx].1)
}

static GST_STATE_CODES: &[GstStateMapping] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    // Daman and Diu, merged into 26 in 2020
    ("25", NO_FIXED_STATE),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    // Andhra Pradesh before bifurcation
    ("28", NO_FIXED_STATE),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    // Other Territory
    ("97", NO_FIXED_STATE),
    // Centre Jurisdiction
    ("99", NO_FIXED_STATE),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::states::{indian_states, state_by_name};

    #[test]
    fn known_prefixes() {
        let table = gst_state_codes();
        assert_eq!(state_for_prefix(table, "07"), Some("Delhi"));
        assert_eq!(state_for_prefix(table, "27"), Some("Maharashtra"));
        assert_eq!(state_for_prefix(table, "29"), Some("Karnataka"));
        assert_eq!(state_for_prefix(table, "25"), Some(NO_FIXED_STATE));
    }

    #[test]
    fn unknown_prefixes() {
        let table = gst_state_codes();
        assert_eq!(state_for_prefix(table, "00"), None);
        assert_eq!(state_for_prefix(table, "39"), None);
        assert_eq!(state_for_prefix(table, "7"), None);
        assert_eq!(state_for_prefix(table, ""), None);
    }

    #[test]
    fn lookup_covers_every_entry() {
        let table = gst_state_codes();
        for (prefix, name) in table {
            assert_eq!(state_for_prefix(table, prefix), Some(*name), "prefix {prefix}");
        }
    }

    #[test]
    fn table_is_sorted() {
        for window in GST_STATE_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "prefixes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn every_named_prefix_has_a_reference_state() {
        let states = indian_states();
        for (prefix, name) in GST_STATE_CODES {
            if *name == NO_FIXED_STATE {
                continue;
            }
            assert!(
                state_by_name(states, name).is_some(),
                "prefix {prefix} maps to '{name}' which is not in the state list"
            );
        }
    }
}
