use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Country name filled into new addresses.
pub const DEFAULT_COUNTRY: &str = "India";
/// ISO 3166-1 alpha-2 code matching [`DEFAULT_COUNTRY`].
pub const DEFAULT_COUNTRY_CODE: &str = "IN";

/// Billing address as edited in the billing form.
///
/// `state` and `state_code` are derived from `gst_no` and are never typed
/// by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddressDraft {
    /// Contact person or company name.
    pub attention: String,
    /// First address line.
    pub address: String,
    /// Second address line.
    pub street2: String,
    pub city: String,
    /// Derived state name, or `"-"` for prefixes without a fixed state.
    pub state: String,
    /// Derived state code (e.g. "DL").
    pub state_code: String,
    pub country: String,
    pub country_code: String,
    /// Postal (PIN) code.
    pub zip: String,
    pub phone: String,
    pub fax: String,
    /// Normalized GST number (upper-cased, at most 15 characters).
    pub gst_no: String,
    pub email: String,
}

/// Shipping address as edited in the shipping form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddressDraft {
    pub attention: String,
    pub address: String,
    pub street2: String,
    pub city: String,
    /// State name chosen from the reference list.
    pub state: String,
    /// Code of `state`, derived on selection.
    pub state_code: String,
    pub country: String,
    pub country_code: String,
    pub zip: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
}

/// A product in the fixed storefront catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier (SKU).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price per unit, tax inclusive.
    pub unit_price: Decimal,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}
