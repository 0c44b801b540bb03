use pa_shared::utils::email::is_valid_email;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Recipient address
    #[validate(custom(
        function = "validate_email_address",
        message = "A valid email address is required"
    ))]
    pub email: String,
}

/// Same address rule the OTP service enforces
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

impl SendOtpRequest {
    /// Copy with surrounding whitespace removed, so padded input validates
    pub fn trimmed(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Submitted code; compared after trimming
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
    /// Normalized address the code was sent to
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_otp_request_validation() {
        let padded = SendOtpRequest {
            email: " Jane@Example.com ".to_string(),
        };
        assert!(padded.trimmed().validate().is_ok());
        assert_eq!(padded.trimmed().email, "Jane@Example.com");

        let invalid = SendOtpRequest {
            email: "jane-at-example.com".to_string(),
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_send_otp_request_requires_domain_suffix() {
        for email in ["jane@example", "jane..doe@example.com", "jane@@example.com"] {
            let request = SendOtpRequest {
                email: email.to_string(),
            };
            assert!(request.validate().is_err(), "{} should be rejected", email);
        }

        let request = SendOtpRequest {
            email: "jane.doe+portfolio@mail.example.co.uk".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_verify_otp_request_requires_fields() {
        let request = VerifyOtpRequest {
            email: String::new(),
            otp: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("otp"));
    }
}
