//! Billing and shipping address forms.
//!
//! Each form owns a draft and the last confirmed address. Edits go through
//! an explicit reducer; confirmed addresses are handed to a store, and a
//! failed save rolls the form back to the previous confirmed address.
//!
//! # Example
//!
//! ```
//! use storefront::billing::*;
//! use storefront::core::*;
//!
//! let mut form = BillingForm::new(BillingAddressDraft::default());
//! form.on_named_field_change("attention", "Asha Traders").unwrap();
//! form.on_named_field_change("address", "12 MG Road").unwrap();
//! form.on_named_field_change("city", "New Delhi").unwrap();
//! form.on_named_field_change("gst_no", "07AAAAA0000A1Z5").unwrap();
//!
//! let mut store = |_: &BillingAddressDraft, _: &str| -> Result<(), PersistError> {
//!     Err(PersistError::Network("offline".into()))
//! };
//! assert!(form.save(&mut store).is_err());
//! assert_eq!(form.notice(), Some(BILLING_SAVE_FAILED));
//! assert!(form.draft().gst_no.is_empty());
//! ```

mod field;
mod form;
mod reducer;
mod shipping;
mod store;

pub use field::BillingField;
pub use form::BillingForm;
pub use reducer::{FormAction, reduce};
pub use shipping::{ShippingField, ShippingForm, is_valid_pin_code};
pub use store::{
    BILLING_SAVE_FAILED, BillingAddressStore, PendingSave, SHIPPING_SAVE_FAILED,
    ShippingAddressStore,
};
