use std::mem;

use tracing::{debug, info, warn};

use super::field::BillingField;
use super::reducer::{FormAction, reduce};
use super::store::{BILLING_SAVE_FAILED, BillingAddressStore, PendingSave};
use crate::core::{BillingAddressDraft, PersistError, StorefrontError, ValidationError};
use crate::gst::{GstError, GstResolver};

/// Controller for one billing-address edit session.
///
/// Owns the draft being edited and the last confirmed address. Every edit
/// of the GST field re-derives `state` / `state_code`; submission is gated
/// on [`BillingForm::is_valid`].
///
/// ```
/// use storefront::billing::{BillingField, BillingForm};
/// use storefront::core::BillingAddressDraft;
///
/// let mut form = BillingForm::new(BillingAddressDraft::default());
/// form.on_field_change(BillingField::Attention, "Asha Traders").unwrap();
/// form.on_field_change(BillingField::Address, "12 MG Road").unwrap();
/// form.on_field_change(BillingField::City, "New Delhi").unwrap();
/// form.on_field_change(BillingField::GstNo, "07aaaaa0000a1z5").unwrap();
///
/// assert_eq!(form.draft().state, "Delhi");
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct BillingForm<'a> {
    resolver: GstResolver<'a>,
    confirmed: BillingAddressDraft,
    draft: BillingAddressDraft,
    gst_error: Option<GstError>,
    notice: Option<String>,
}

impl BillingForm<'static> {
    /// Start editing `confirmed` with the built-in GST tables.
    pub fn new(confirmed: BillingAddressDraft) -> Self {
        Self::with_resolver(GstResolver::india(), confirmed)
    }
}

impl<'a> BillingForm<'a> {
    pub fn with_resolver(resolver: GstResolver<'a>, confirmed: BillingAddressDraft) -> Self {
        let mut form = Self {
            resolver,
            draft: confirmed.clone(),
            confirmed,
            gst_error: None,
            notice: None,
        };
        form.begin_edit();
        form
    }

    /// Reset the draft to the confirmed address and re-derive its state
    /// from the stored GST number.
    pub fn begin_edit(&mut self) {
        self.draft = self.confirmed.clone();
        self.gst_error = None;
        self.notice = None;
        if !self.draft.gst_no.is_empty() {
            let raw = self.draft.gst_no.clone();
            self.apply_gst(&raw);
        }
    }

    /// Apply one edit from the UI.
    ///
    /// `state` and `state_code` are derived from the GST number and
    /// cannot be edited; such edits fail with
    /// [`StorefrontError::ReadOnlyField`] and leave the draft untouched.
    pub fn on_field_change(
        &mut self,
        field: BillingField,
        value: impl Into<String>,
    ) -> Result<(), StorefrontError> {
        if field.is_derived() {
            return Err(StorefrontError::ReadOnlyField(field.name().to_string()));
        }
        let value = value.into();
        if field == BillingField::GstNo {
            self.apply_gst(&value);
        } else {
            self.dispatch(FormAction::FieldEdited { field, value });
        }
        Ok(())
    }

    /// Like [`BillingForm::on_field_change`], with the field given by its
    /// form name (e.g. `"gst_no"`).
    pub fn on_named_field_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), StorefrontError> {
        let field: BillingField = name.parse()?;
        self.on_field_change(field, value)
    }

    fn apply_gst(&mut self, raw: &str) {
        let resolution = self.resolver.resolve(raw);
        self.gst_error = resolution.error;
        self.dispatch(FormAction::GstResolved(resolution));
    }

    fn dispatch(&mut self, action: FormAction) {
        let draft = mem::take(&mut self.draft);
        self.draft = reduce(draft, action);
    }

    pub fn draft(&self) -> &BillingAddressDraft {
        &self.draft
    }

    pub fn confirmed(&self) -> &BillingAddressDraft {
        &self.confirmed
    }

    /// Pending GST error, shown under the GST field.
    pub fn gst_error(&self) -> Option<GstError> {
        self.gst_error
    }

    /// User-visible message left by the last failed save.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the draft may be submitted: attention, GST number, address,
    /// city and state are filled in and no GST error is pending.
    pub fn is_valid(&self) -> bool {
        self.gst_error.is_none()
            && [
                &self.draft.attention,
                &self.draft.gst_no,
                &self.draft.address,
                &self.draft.city,
                &self.draft.state,
            ]
            .iter()
            .all(|v| !v.is_empty())
    }

    /// Every reason the draft cannot be submitted, in form order.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let required = [
            (BillingField::Attention, &self.draft.attention, "Attention is required"),
            (BillingField::GstNo, &self.draft.gst_no, "GST number is required"),
            (BillingField::Address, &self.draft.address, "Address is required"),
            (BillingField::City, &self.draft.city, "City is required"),
        ];
        for (field, value, message) in required {
            if value.is_empty() {
                errors.push(ValidationError::new(field.name(), message));
            }
        }
        if let Some(err) = self.gst_error {
            errors.push(ValidationError::new(BillingField::GstNo.name(), err.to_string()));
        } else if self.draft.state.is_empty() && !self.draft.gst_no.is_empty() {
            errors.push(ValidationError::new(
                BillingField::State.name(),
                "State could not be derived from the GST number",
            ));
        }
        if self.draft.state.is_empty() && self.draft.gst_no.is_empty() {
            errors.push(ValidationError::new(
                BillingField::State.name(),
                "State is required",
            ));
        }
        errors
    }

    /// Return the current draft if it may be submitted.
    pub fn submit(&self) -> Result<BillingAddressDraft, StorefrontError> {
        if !self.is_valid() {
            return Err(StorefrontError::from_validation_errors(
                &self.validation_errors(),
            ));
        }
        Ok(self.draft.clone())
    }

    /// Discard edits and return to the confirmed address.
    pub fn cancel(&mut self) {
        debug!("billing form cancelled");
        self.begin_edit();
    }

    /// Promote a valid draft to confirmed before handing it to the backend.
    ///
    /// The returned token must be passed to [`BillingForm::settle`] once the
    /// backend has answered.
    pub fn confirm(&mut self) -> Result<PendingSave<BillingAddressDraft>, StorefrontError> {
        let address = self.submit()?;
        let previous = mem::replace(&mut self.confirmed, address.clone());
        self.notice = None;
        debug!(gst_no = %address.gst_no, "billing address confirmed");
        Ok(PendingSave::new(address, previous))
    }

    /// Record the backend's answer for `pending`.
    ///
    /// On failure the previous confirmed address is restored, the draft is
    /// reset to it and the failure notice is set. Nothing is retried.
    pub fn settle(
        &mut self,
        pending: PendingSave<BillingAddressDraft>,
        outcome: Result<(), PersistError>,
    ) -> Result<BillingAddressDraft, StorefrontError> {
        match outcome {
            Ok(()) => {
                info!(gst_no = %pending.address().gst_no, "billing address saved");
                Ok(self.confirmed.clone())
            }
            Err(err) => {
                warn!(error = %err, "billing address save failed, rolling back");
                self.confirmed = pending.into_previous();
                self.begin_edit();
                self.notice = Some(BILLING_SAVE_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    /// Confirm, store and settle in one step.
    pub fn save<S>(&mut self, store: &mut S) -> Result<BillingAddressDraft, StorefrontError>
    where
        S: BillingAddressStore + ?Sized,
    {
        let pending = self.confirm()?;
        let address = pending.address();
        let outcome = store.save_billing_address(address, &address.gst_no);
        self.settle(pending, outcome)
    }
}
