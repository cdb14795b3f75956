//! Hand-off of confirmed addresses to the backend.

use crate::core::{BillingAddressDraft, PersistError, ShippingAddressDraft};

/// Notice shown when the backend did not store the billing address.
pub const BILLING_SAVE_FAILED: &str = "Failed to update billing address. Please try again.";
/// Notice shown when the backend did not store the shipping address.
pub const SHIPPING_SAVE_FAILED: &str = "Failed to update shipping address. Please try again.";

/// Persists confirmed billing addresses.
pub trait BillingAddressStore {
    fn save_billing_address(
        &mut self,
        address: &BillingAddressDraft,
        gst_no: &str,
    ) -> Result<(), PersistError>;
}

impl<F> BillingAddressStore for F
where
    F: FnMut(&BillingAddressDraft, &str) -> Result<(), PersistError>,
{
    fn save_billing_address(
        &mut self,
        address: &BillingAddressDraft,
        gst_no: &str,
    ) -> Result<(), PersistError> {
        self(address, gst_no)
    }
}

/// Persists confirmed shipping addresses.
pub trait ShippingAddressStore {
    fn save_shipping_address(&mut self, address: &ShippingAddressDraft) -> Result<(), PersistError>;
}

impl<F> ShippingAddressStore for F
where
    F: FnMut(&ShippingAddressDraft) -> Result<(), PersistError>,
{
    fn save_shipping_address(&mut self, address: &ShippingAddressDraft) -> Result<(), PersistError> {
        self(address)
    }
}

/// An address promoted to confirmed while its save is in flight.
///
/// Hand it back to the form's `settle` together with the backend's answer;
/// a failed save restores `previous`.
#[derive(Debug, Clone)]
#[must_use = "a pending save must be settled"]
pub struct PendingSave<T> {
    address: T,
    previous: T,
}

impl<T> PendingSave<T> {
    pub(crate) fn new(address: T, previous: T) -> Self {
        Self { address, previous }
    }

    /// The address being saved.
    pub fn address(&self) -> &T {
        &self.address
    }

    /// The confirmed address before this save.
    pub fn previous(&self) -> &T {
        &self.previous
    }

    pub(crate) fn into_previous(self) -> T {
        self.previous
    }
}
