use super::utils::{LoginFormState, AFTER_LOGIN_ROUTE};
use crate::api::{ApiError, LoginRequest, User};
use crate::state::auth::use_session;
use crate::utils::navigation::go_to;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

impl LoginViewModel {
    /// Validates locally first; nothing is sent when a field is missing.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_session();
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = create_action(move |request: &LoginRequest| {
        let session = session.clone();
        let request = request.clone();
        async move { session.login(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    log::info!("signed in as {}", user.id);
                    error.set(None);
                    form.clear_password();
                    go_to(AFTER_LOGIN_ROUTE);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
