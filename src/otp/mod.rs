//! OTP login flow.
//!
//! The backend sends and checks the one-time password; this module covers
//! the client side: validating the login identifier, sanitising the code
//! the customer types and the countdown before another code may be sent.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use storefront::otp::*;
//!
//! let id = LoginIdentifier::parse("+91 98765 43210").unwrap();
//! let mut session = OtpSession::new(id);
//! let t0 = Utc::now();
//! session.request_code(t0).unwrap();
//! assert!(session.request_code(t0 + Duration::seconds(10)).is_err());
//! assert_eq!(session.seconds_until_resend(t0 + Duration::seconds(10)), 20);
//!
//! session.enter_code("12 34-56");
//! assert!(session.can_submit());
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::StorefrontError;

/// Number of digits in a one-time password.
pub const OTP_LENGTH: usize = 6;
/// Seconds before another code may be requested.
pub const RESEND_COOLDOWN_SECS: i64 = 30;

/// Who is logging in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LoginIdentifier {
    /// 10-digit Indian mobile number without country prefix.
    Mobile(String),
    Email(String),
}

impl LoginIdentifier {
    /// Accept a mobile number (optionally with `+91` / `0` prefix, spaces
    /// or dashes) or an e-mail address.
    pub fn parse(input: &str) -> Result<Self, StorefrontError> {
        let input = input.trim();
        if input.contains('@') {
            return if is_plausible_email(input) {
                Ok(Self::Email(input.to_lowercase()))
            } else {
                Err(StorefrontError::Validation(format!(
                    "invalid e-mail address '{input}'"
                )))
            };
        }

        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let digits = compact
            .strip_prefix("+91")
            .or_else(|| (compact.len() == 11).then(|| compact.strip_prefix('0')).flatten())
            .unwrap_or(&compact);

        let b = digits.as_bytes();
        if b.len() == 10 && b.iter().all(u8::is_ascii_digit) && (b'6'..=b'9').contains(&b[0]) {
            Ok(Self::Mobile(digits.to_string()))
        } else {
            Err(StorefrontError::Validation(format!(
                "invalid mobile number '{input}'"
            )))
        }
    }
}

impl fmt::Display for LoginIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile(m) => write!(f, "+91 {m}"),
            Self::Email(e) => f.write_str(e),
        }
    }
}

fn is_plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .rsplit_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && tld.len() >= 2)
}

/// Client-side state of one OTP login attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpSession {
    identifier: LoginIdentifier,
    code: String,
    last_sent: Option<DateTime<Utc>>,
    verified: bool,
}

impl OtpSession {
    pub fn new(identifier: LoginIdentifier) -> Self {
        Self {
            identifier,
            code: String::new(),
            last_sent: None,
            verified: false,
        }
    }

    pub fn identifier(&self) -> &LoginIdentifier {
        &self.identifier
    }

    /// Record that a code is being sent at `now`.
    ///
    /// Fails with [`StorefrontError::ResendCooldown`] while the previous
    /// code's countdown is still running. Clears any entered code.
    pub fn request_code(&mut self, now: DateTime<Utc>) -> Result<(), StorefrontError> {
        let remaining_secs = self.seconds_until_resend(now);
        if remaining_secs > 0 {
            return Err(StorefrontError::ResendCooldown { remaining_secs });
        }
        debug!(identifier = %self.identifier, "OTP requested");
        self.last_sent = Some(now);
        self.code.clear();
        self.verified = false;
        Ok(())
    }

    /// Whole seconds left on the resend countdown, 0 when a code may be sent.
    pub fn seconds_until_resend(&self, now: DateTime<Utc>) -> i64 {
        let Some(sent) = self.last_sent else {
            return 0;
        };
        let ready_at = sent + Duration::seconds(RESEND_COOLDOWN_SECS);
        let left = ready_at - now;
        // round partial seconds up so the countdown never shows 0 early
        let secs = left.num_seconds() + i64::from(left.subsec_nanos() > 0);
        secs.clamp(0, RESEND_COOLDOWN_SECS)
    }

    pub fn can_resend(&self, now: DateTime<Utc>) -> bool {
        self.seconds_until_resend(now) == 0
    }

    pub fn code_requested(&self) -> bool {
        self.last_sent.is_some()
    }

    /// Replace the entered code with the digits of `input`, keeping at most
    /// [`OTP_LENGTH`].
    pub fn enter_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect();
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn reset_code(&mut self) {
        self.code.clear();
    }

    /// A full code has been typed for a requested, unverified session.
    pub fn can_submit(&self) -> bool {
        self.code_requested() && !self.verified && self.code.len() == OTP_LENGTH
    }

    /// Record that the backend accepted the code.
    pub fn mark_verified(&mut self) {
        debug!(identifier = %self.identifier, "OTP verified");
        self.verified = true;
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }
}
