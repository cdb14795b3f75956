#![cfg(feature = "otp")]

use chrono::{DateTime, Duration, TimeZone, Utc};
use storefront::core::StorefrontError;
use storefront::otp::*;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap() + Duration::seconds(secs)
}

#[test]
fn login_with_mobile() {
    let id = LoginIdentifier::parse("+91 91234 56789").unwrap();
    assert_eq!(id.to_string(), "+91 9123456789");

    let mut session = OtpSession::new(id);
    assert!(!session.code_requested());
    session.request_code(at(0)).unwrap();
    session.enter_code("4821");
    assert!(!session.can_submit());
    session.enter_code("482193");
    assert!(session.can_submit());
    session.mark_verified();
    assert!(session.is_verified());
}

#[test]
fn resend_blocked_during_countdown() {
    let mut session = OtpSession::new(LoginIdentifier::parse("asha@example.in").unwrap());
    session.request_code(at(0)).unwrap();

    for (t, left) in [(1, 29), (15, 15), (29, 1)] {
        assert_eq!(session.seconds_until_resend(at(t)), left);
        let err = session.request_code(at(t)).unwrap_err();
        assert!(matches!(err, StorefrontError::ResendCooldown { remaining_secs } if remaining_secs == left));
    }

    assert!(session.can_resend(at(RESEND_COOLDOWN_SECS)));
    session.request_code(at(RESEND_COOLDOWN_SECS)).unwrap();
    // countdown restarts from the new request
    assert_eq!(session.seconds_until_resend(at(RESEND_COOLDOWN_SECS + 5)), 25);
}

#[test]
fn resend_clears_entered_code() {
    let mut session = OtpSession::new(LoginIdentifier::parse("9876543210").unwrap());
    session.request_code(at(0)).unwrap();
    session.enter_code("111111");
    session.request_code(at(40)).unwrap();
    assert_eq!(session.code(), "");
    assert!(!session.can_submit());
}

#[test]
fn code_never_exceeds_length() {
    let mut session = OtpSession::new(LoginIdentifier::parse("9876543210").unwrap());
    session.enter_code("1234567890");
    assert_eq!(session.code().len(), OTP_LENGTH);
    session.reset_code();
    assert!(session.code().is_empty());
}

#[test]
fn cooldown_message() {
    let err = StorefrontError::ResendCooldown { remaining_secs: 12 };
    insta::assert_snapshot!(err.to_string(), @"please wait 12s before requesting a new code");
}

#[test]
fn identifier_serialization() {
    let json = serde_json::to_string(&LoginIdentifier::Mobile("9876543210".into())).unwrap();
    assert_eq!(json, r#"{"kind":"mobile","value":"9876543210"}"#);
}
