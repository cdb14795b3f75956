//! Core storefront types, errors and reference data.
//!
//! Holds the address drafts shared by the forms, the fixed product catalog,
//! and the static state and GST prefix tables.

mod builder;
pub mod catalog;
mod error;
pub mod gst_codes;
pub mod states;
mod types;

pub use builder::*;
pub use catalog::Catalog;
pub use error::*;
pub use gst_codes::{GstStateMapping, NO_FIXED_STATE, gst_state_codes, state_for_prefix};
pub use states::{StateEntry, indian_states, state_by_code, state_by_name};
pub use types::*;
