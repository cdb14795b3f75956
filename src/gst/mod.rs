//! GST number validation and state resolution.
//!
//! A GSTIN's first two digits name the state of registration. The
//! resolver normalizes raw input on every keystroke, checks the layout and
//! derives the billing `state` / `state_code` from the prefix.
//!
//! # Example
//!
//! ```
//! use storefront::gst::*;
//!
//! let r = resolve("07aaaaa0000a1z5");
//! assert_eq!(r.normalized, "07AAAAA0000A1Z5");
//! assert_eq!(r.state, "Delhi");
//! assert_eq!(r.state_code, "DL");
//!
//! assert_eq!(resolve("99AAAAA0000A1Z5").error, Some(GstError::ReservedPrefix));
//! assert_eq!(resolve("07AB").error, Some(GstError::InvalidFormat));
//! ```

mod format;
mod resolve;

pub use format::{
    GST_LEN, GstCode, RESERVED_PREFIXES, has_reserved_prefix, is_valid_gst_format, normalize_gst,
};
pub use resolve::{GstError, GstResolver, Resolution, resolve};
