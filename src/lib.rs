//! # storefront
//!
//! Storefront core for Indian e-commerce: GST-aware billing addresses,
//! shipping addresses, a fixed product catalog, the shopping cart and the
//! client side of OTP login.
//!
//! Everything is plain, synchronous logic driven by UI events. Prices use
//! [`rust_decimal::Decimal`]; the only network code is the optional `api`
//! client.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront::gst::{GstError, resolve};
//!
//! let r = resolve("07AAAAA0000A1Z5");
//! assert_eq!((r.state.as_str(), r.state_code.as_str()), ("Delhi", "DL"));
//! assert_eq!(resolve("97AAAAA0000A1Z5").error, Some(GstError::ReservedPrefix));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Address types, errors, state and GST prefix tables, catalog |
//! | `gst` (default) | GST number validation and state resolution |
//! | `billing` | Billing and shipping address forms |
//! | `cart` | Shopping cart reducer |
//! | `otp` | OTP login identifier, code entry and resend countdown |
//! | `api` | Async backend client for saving addresses |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "billing")]
pub mod billing;

#[cfg(feature = "cart")]
pub mod cart;

#[cfg(feature = "otp")]
pub mod otp;

#[cfg(feature = "api")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
