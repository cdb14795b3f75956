//! Indian states and union territories.
//!
//! Reference list of first-level subdivisions used to fill `state` and
//! `state_code` on billing and shipping addresses.

use serde::Serialize;

/// One state or union territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateEntry {
    /// Short state code (e.g. "DL").
    pub code: &'static str,
    /// Canonical state name (e.g. "Delhi").
    pub name: &'static str,
}

impl StateEntry {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// All states and union territories, sorted by name.
pub fn indian_states() -> &'static [StateEntry] {
    INDIAN_STATES
}

/// Find the entry for a canonical state name (exact match).
pub fn state_by_name<'a>(states: &'a [StateEntry], name: &str) -> Option<&'a StateEntry> {
    states.iter().find(|s| s.name == name)
}

/// Find the entry for a state code (exact match).
pub fn state_by_code<'a>(states: &'a [StateEntry], code: &str) -> Option<&'a StateEntry> {
    states.iter().find(|s| s.code == code)
}

static INDIAN_STATES: &[StateEntry] = &[
    StateEntry::new("AN", "Andaman and Nicobar Islands"),
    StateEntry::new("AP", "Andhra Pradesh"),
    StateEntry::new("AR", "Arunachal Pradesh"),
    StateEntry::new("AS", "Assam"),
    StateEntry::new("BR", "Bihar"),
    StateEntry::new("CH", "Chandigarh"),
    StateEntry::new("CT", "Chhattisgarh"),
    StateEntry::new("DH", "Dadra and Nagar Haveli and Daman and Diu"),
    StateEntry::new("DL", "Delhi"),
    StateEntry::new("GA", "Goa"),
    StateEntry::new("GJ", "Gujarat"),
    StateEntry::new("HR", "Haryana"),
    StateEntry::new("HP", "Himachal Pradesh"),
    StateEntry::new("JK", "Jammu and Kashmir"),
    StateEntry::new("JH", "Jharkhand"),
    StateEntry::new("KA", "Karnataka"),
    StateEntry::new("KL", "Kerala"),
    StateEntry::new("LA", "Ladakh"),
    StateEntry::new("LD", "Lakshadweep"),
    StateEntry::new("MP", "Madhya Pradesh"),
    StateEntry::new("MH", "Maharashtra"),
    StateEntry::new("MN", "Manipur"),
    StateEntry::new("ML", "Meghalaya"),
    StateEntry::new("MZ", "Mizoram"),
    StateEntry::new("NL", "Nagaland"),
    StateEntry::new("OR", "Odisha"),
    StateEntry::new("PY", "Puducherry"),
    StateEntry::new("PB", "Punjab"),
    StateEntry::new("RJ", "Rajasthan"),
    StateEntry::new("SK", "Sikkim"),
    StateEntry::new("TN", "Tamil Nadu"),
    StateEntry::new("TG", "Telangana"),
    StateEntry::new("TR", "Tripura"),
    StateEntry::new("UP", "Uttar Pradesh"),
    StateEntry::new("UT", "Uttarakhand"),
    StateEntry::new("WB", "West Bengal"),
];
