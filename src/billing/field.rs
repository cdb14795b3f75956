use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::StorefrontError;

/// Editable fields of the billing address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingField {
    Attention,
    Address,
    Street2,
    City,
    /// Derived from the GST number; read-only.
    State,
    /// Derived from the GST number; read-only.
    StateCode,
    Country,
    CountryCode,
    Zip,
    Phone,
    Fax,
    GstNo,
    Email,
}

impl BillingField {
    pub const ALL: [BillingField; 13] = [
        Self::Attention,
        Self::Address,
        Self::Street2,
        Self::City,
        Self::State,
        Self::StateCode,
        Self::Country,
        Self::CountryCode,
        Self::Zip,
        Self::Phone,
        Self::Fax,
        Self::GstNo,
        Self::Email,
    ];

    /// Form field name as used by the UI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Attention => "attention",
            Self::Address => "address",
            Self::Street2 => "street2",
            Self::City => "city",
            Self::State => "state",
            Self::StateCode => "state_code",
            Self::Country => "country",
            Self::CountryCode => "country_code",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Fax => "fax",
            Self::GstNo => "gst_no",
            Self::Email => "email",
        }
    }

    /// Fields only ever written by GST resolution.
    pub fn is_derived(self) -> bool {
        matches!(self, Self::State | Self::StateCode)
    }
}

impl fmt::Display for BillingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BillingField {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| StorefrontError::Validation(format!("unknown billing field '{s}'")))
    }
}
