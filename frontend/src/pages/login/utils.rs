use crate::api::{ApiError, LoginRequest};
use leptos::*;

/// Where a successful sign-in lands.
pub const AFTER_LOGIN_ROUTE: &str = "/";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            phone: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    /// The request as typed, or the first local validation failure.
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let request = LoginRequest {
            phone: self.phone.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}
