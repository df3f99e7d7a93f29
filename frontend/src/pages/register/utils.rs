use crate::api::{ApiError, RegisterRequest};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegisterStep {
    #[default]
    Details,
    /// Account created; waiting for the code sent to this phone.
    VerifyPhone { phone: String },
}

impl RegisterStep {
    pub fn phone(&self) -> Option<&str> {
        match self {
            RegisterStep::Details => None,
            RegisterStep::VerifyPhone { phone } => Some(phone),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
    pub re_password: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            re_password: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        let request = RegisterRequest {
            email: self.email.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            re_password: self.re_password.get_untracked(),
            phone: self.phone.get_untracked().trim().to_string(),
            full_name: self.full_name.get_untracked().trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    fn filled() -> RegisterFormState {
        let form = RegisterFormState::default();
        form.full_name.set(" Asha Rao ".into());
        form.email.set("asha@example.com".into());
        form.phone.set("9999999999".into());
        form.password.set("s3cret-pass".into());
        form.re_password.set("s3cret-pass".into());
        form
    }

    #[test]
    fn complete_form_builds_a_trimmed_request() {
        with_runtime(|| {
            let request = filled().to_request().unwrap();
            assert_eq!(request.full_name, "Asha Rao");
            assert_eq!(request.re_password, request.password);
        });
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        with_runtime(|| {
            let form = filled();
            form.re_password.set("different-pass".into());
            assert_eq!(form.to_request().unwrap_err().error, "Passwords don't match");
        });
    }

    #[test]
    fn step_exposes_the_phone_being_verified() {
        assert_eq!(RegisterStep::Details.phone(), None);
        let step = RegisterStep::VerifyPhone {
            phone: "9999999999".into(),
        };
        assert_eq!(step.phone(), Some("9999999999"));
    }
}
