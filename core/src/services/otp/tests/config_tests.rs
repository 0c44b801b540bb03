//! Unit tests for OTP service configuration

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::OtpEntry;
use crate::services::otp::config::{OtpServiceConfig, MAX_EXPIRATION_MINUTES};

#[test]
fn test_default_config() {
    let config = OtpServiceConfig::default();

    assert_eq!(config.code_expiration_minutes, 5);
    assert_eq!(config.validity(), Duration::minutes(5));
    assert_eq!(config.max_attempts, None);
    assert!(!config.sweeper_enabled());
}

// Env-driven cases share process state, so they run in one test.
#[test]
fn test_from_env_bounds_expiry() {
    std::env::set_var("OTP_EXPIRY_MINUTES", "200000000000000");
    let config = OtpServiceConfig::from_env();
    assert_eq!(config.code_expiration_minutes, MAX_EXPIRATION_MINUTES);
    assert_eq!(config.validity(), Duration::hours(24));

    std::env::set_var("OTP_EXPIRY_MINUTES", "0");
    assert_eq!(OtpServiceConfig::from_env().code_expiration_minutes, 1);

    std::env::set_var("OTP_EXPIRY_MINUTES", "15");
    assert_eq!(OtpServiceConfig::from_env().validity(), Duration::minutes(15));

    std::env::set_var("OTP_EXPIRY_MINUTES", "not-a-number");
    assert_eq!(OtpServiceConfig::from_env().code_expiration_minutes, 5);

    std::env::remove_var("OTP_EXPIRY_MINUTES");
}

#[test]
fn test_validity_clamps_out_of_range_field() {
    let config = OtpServiceConfig {
        code_expiration_minutes: i64::MAX,
        ..OtpServiceConfig::default()
    };

    assert_eq!(config.validity(), Duration::minutes(MAX_EXPIRATION_MINUTES));
}

#[test]
fn test_expires_at_saturates_instead_of_overflowing() {
    let issued_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let entry = OtpEntry::new("jane@example.com", "123456", issued_at);

    let expires_at = entry.expires_at(Duration::MAX);

    assert_eq!(expires_at, chrono::DateTime::<Utc>::MAX_UTC);
}
