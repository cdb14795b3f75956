//! Draft state transitions for the billing form.

use super::field::BillingField;
use crate::core::BillingAddressDraft;
use crate::gst::Resolution;

/// A change applied to a billing draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// The customer typed into a plain field.
    FieldEdited { field: BillingField, value: String },
    /// The GST field was resolved; carries the normalized number and the
    /// derived state.
    GstResolved(Resolution),
}

/// Apply `action` to `draft`.
///
/// Edits to the derived `state` / `state_code` fields are ignored; they only
/// change through [`FormAction::GstResolved`]. A plain edit of `gst_no`
/// stores the value verbatim without deriving anything.
pub fn reduce(mut draft: BillingAddressDraft, action: FormAction) -> BillingAddressDraft {
    match action {
        FormAction::FieldEdited { field, value } => {
            let slot = match field {
                BillingField::State | BillingField::StateCode => return draft,
                BillingField::Attention => &mut draft.attention,
                BillingField::Address => &mut draft.address,
                BillingField::Street2 => &mut draft.street2,
                BillingField::City => &mut draft.city,
                BillingField::Country => &mut draft.country,
                BillingField::CountryCode => &mut draft.country_code,
                BillingField::Zip => &mut draft.zip,
                BillingField::Phone => &mut draft.phone,
                BillingField::Fax => &mut draft.fax,
                BillingField::GstNo => &mut draft.gst_no,
                BillingField::Email => &mut draft.email,
            };
            *slot = value;
        }
        FormAction::GstResolved(resolution) => {
            draft.gst_no = resolution.normalized;
            draft.state = resolution.state;
            draft.state_code = resolution.state_code;
        }
    }
    draft
}
