use crate::api::{normalize_otp, validate_password, validate_phone, ApiError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResetStep {
    #[default]
    RequestCode,
    EnterCode {
        phone: String,
    },
    Done,
}

pub fn validate_phone_input(raw: &str) -> Result<String, ApiError> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Err(ApiError::validation("Please enter your phone number"));
    }
    validate_phone(phone)?;
    Ok(phone.to_string())
}

/// Returns the normalized code once the new password is acceptable.
pub fn validate_reset(code: &str, password: &str, confirm: &str) -> Result<String, ApiError> {
    let code = normalize_otp(code)?;
    validate_password(password)?;
    if password != confirm {
        return Err(ApiError::validation("Passwords don't match"));
    }
    Ok(code)
}
