//! Shipping address form.
//!
//! Same edit lifecycle as the billing form, without a GST number: the
//! customer picks the state from the reference list and its code follows.

use std::mem;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::store::{PendingSave, SHIPPING_SAVE_FAILED, ShippingAddressStore};
use crate::core::{
    PersistError, ShippingAddressDraft, StateEntry, StorefrontError, ValidationError,
    indian_states, state_by_name,
};

/// Editable fields of the shipping address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingField {
    Attention,
    Address,
    Street2,
    City,
    /// Set through [`ShippingForm::select_state`].
    State,
    /// Derived from the selected state.
    StateCode,
    Country,
    CountryCode,
    Zip,
    Phone,
    Fax,
    Email,
}

impl ShippingField {
    pub const ALL: [ShippingField; 12] = [
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
        Self::Email,
    ];

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
            Self::Email => "email",
        }
    }
}

impl FromStr for ShippingField {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| StorefrontError::Validation(format!("unknown shipping field '{s}'")))
    }
}

/// Whether `zip` is a 6-digit Indian PIN code (first digit 1–9).
pub fn is_valid_pin_code(zip: &str) -> bool {
    let b = zip.as_bytes();
    b.len() == 6 && b.iter().all(u8::is_ascii_digit) && b[0] != b'0'
}

/// Controller for one shipping-address edit session.
#[derive(Debug, Clone)]
pub struct ShippingForm<'a> {
    states: &'a [StateEntry],
    confirmed: ShippingAddressDraft,
    draft: ShippingAddressDraft,
    notice: Option<String>,
}

impl ShippingForm<'static> {
    pub fn new(confirmed: ShippingAddressDraft) -> Self {
        Self::with_states(indian_states(), confirmed)
    }
}

impl<'a> ShippingForm<'a> {
    pub fn with_states(states: &'a [StateEntry], confirmed: ShippingAddressDraft) -> Self {
        Self {
            states,
            draft: confirmed.clone(),
            confirmed,
            notice: None,
        }
    }

    pub fn draft(&self) -> &ShippingAddressDraft {
        &self.draft
    }

    pub fn confirmed(&self) -> &ShippingAddressDraft {
        &self.confirmed
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The states the customer can pick from.
    pub fn state_options(&self) -> &'a [StateEntry] {
        self.states
    }

    /// Apply one edit from the UI. The state is chosen with
    /// [`ShippingForm::select_state`]; direct edits of `state` or
    /// `state_code` are rejected.
    pub fn on_field_change(
        &mut self,
        field: ShippingField,
        value: impl Into<String>,
    ) -> Result<(), StorefrontError> {
        let slot = match field {
            ShippingField::State | ShippingField::StateCode => {
                return Err(StorefrontError::ReadOnlyField(field.name().to_string()));
            }
            ShippingField::Attention => &mut self.draft.attention,
            ShippingField::Address => &mut self.draft.address,
            ShippingField::Street2 => &mut self.draft.street2,
            ShippingField::City => &mut self.draft.city,
            ShippingField::Country => &mut self.draft.country,
            ShippingField::CountryCode => &mut self.draft.country_code,
            ShippingField::Zip => &mut self.draft.zip,
            ShippingField::Phone => &mut self.draft.phone,
            ShippingField::Fax => &mut self.draft.fax,
            ShippingField::Email => &mut self.draft.email,
        };
        *slot = value.into();
        Ok(())
    }

    pub fn on_named_field_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), StorefrontError> {
        let field: ShippingField = name.parse()?;
        self.on_field_change(field, value)
    }

    /// Pick the state by its canonical name; the code is taken from the
    /// reference list.
    pub fn select_state(&mut self, name: &str) -> Result<(), StorefrontError> {
        let entry = state_by_name(self.states, name)
            .ok_or_else(|| StorefrontError::UnknownState(name.to_string()))?;
        self.draft.state = entry.name.to_string();
        self.draft.state_code = entry.code.to_string();
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let required = [
            (ShippingField::Attention, &self.draft.attention, "Attention is required"),
            (ShippingField::Address, &self.draft.address, "Address is required"),
            (ShippingField::City, &self.draft.city, "City is required"),
            (ShippingField::State, &self.draft.state, "State is required"),
            (ShippingField::Zip, &self.draft.zip, "PIN code is required"),
        ];
        for (field, value, message) in required {
            if value.is_empty() {
                errors.push(ValidationError::new(field.name(), message));
            }
        }
        if !self.draft.zip.is_empty() && !is_valid_pin_code(&self.draft.zip) {
            errors.push(ValidationError::new(
                ShippingField::Zip.name(),
                "PIN code must be 6 digits",
            ));
        }
        errors
    }

    pub fn submit(&self) -> Result<ShippingAddressDraft, StorefrontError> {
        let errors = self.validation_errors();
        if !errors.is_empty() {
            return Err(StorefrontError::from_validation_errors(&errors));
        }
        Ok(self.draft.clone())
    }

    pub fn cancel(&mut self) {
        debug!("shipping form cancelled");
        self.draft = self.confirmed.clone();
        self.notice = None;
    }

    pub fn confirm(&mut self) -> Result<PendingSave<ShippingAddressDraft>, StorefrontError> {
        let address = self.submit()?;
        let previous = mem::replace(&mut self.confirmed, address.clone());
        self.notice = None;
        Ok(PendingSave::new(address, previous))
    }

    pub fn settle(
        &mut self,
        pending: PendingSave<ShippingAddressDraft>,
        outcome: Result<(), PersistError>,
    ) -> Result<ShippingAddressDraft, StorefrontError> {
        match outcome {
            Ok(()) => {
                info!(state = %pending.address().state, "shipping address saved");
                Ok(self.confirmed.clone())
            }
            Err(err) => {
                warn!(error = %err, "shipping address save failed, rolling back");
                self.confirmed = pending.into_previous();
                self.draft = self.confirmed.clone();
                self.notice = Some(SHIPPING_SAVE_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    pub fn save<S>(&mut self, store: &mut S) -> Result<ShippingAddressDraft, StorefrontError>
    where
        S: ShippingAddressStore + ?Sized,
    {
        let pending = self.confirm()?;
        let outcome = store.save_shipping_address(pending.address());
        self.settle(pending, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_codes() {
        assert!(is_valid_pin_code("110001"));
        assert!(is_valid_pin_code("560034"));
        assert!(!is_valid_pin_code("011000"));
        assert!(!is_valid_pin_code("11000"));
        assert!(!is_valid_pin_code("1100011"));
        assert!(!is_valid_pin_code("11OOO1"));
    }

    #[test]
    fn select_state_sets_code() {
        let mut form = ShippingForm::new(ShippingAddressDraft::default());
        form.select_state("Karnataka").unwrap();
        assert_eq!(form.draft().state, "Karnataka");
        assert_eq!(form.draft().state_code, "KA");

        let err = form.select_state("Atlantis").unwrap_err();
        assert!(matches!(err, StorefrontError::UnknownState(_)));
        assert_eq!(form.draft().state_code, "KA");
    }

    #[test]
    fn state_code_is_read_only() {
        let mut form = ShippingForm::new(ShippingAddressDraft::default());
        assert!(form.on_field_change(ShippingField::StateCode, "KA").is_err());
        assert!(form.on_named_field_change("state", "Goa").is_err());
    }

    #[test]
    fn validity() {
        let mut form = ShippingForm::new(ShippingAddressDraft::default());
        assert_eq!(form.validation_errors().len(), 5);
        form.on_field_change(ShippingField::Attention, "Ravi").unwrap();
        form.on_field_change(ShippingField::Address, "4 Park St").unwrap();
        form.on_field_change(ShippingField::City, "Kolkata").unwrap();
        form.select_state("West Bengal").unwrap();
        form.on_field_change(ShippingField::Zip, "70001").unwrap();
        assert!(!form.is_valid());
        form.on_field_change(ShippingField::Zip, "700016").unwrap();
        assert!(form.is_valid());
        assert_eq!(form.submit().unwrap().state_code, "WB");
    }
}
