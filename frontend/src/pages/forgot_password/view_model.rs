use super::utils::{validate_phone_input, validate_reset, ResetStep};
use crate::api::{ApiError, CodePurpose, MessageResponse};
use crate::state::auth::use_session;
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetPayload {
    pub phone: String,
    pub code: String,
    pub password: String,
}

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub phone: RwSignal<String>,
    pub code: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub step: RwSignal<ResetStep>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub send_action: Action<String, Result<MessageResponse, ApiError>>,
    pub reset_action: Action<ResetPayload, Result<(), ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn request_code(&self) {
        match validate_phone_input(&self.phone.get_untracked()) {
            Ok(phone) => {
                self.error.set(None);
                self.send_action.dispatch(phone);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn submit_reset(&self) {
        let ResetStep::EnterCode { phone } = self.step.get_untracked() else {
            return;
        };
        let password = self.password.get_untracked();
        match validate_reset(&self.code.get_untracked(), &password, &self.confirm.get_untracked()) {
            Ok(code) => {
                self.error.set(None);
                self.reset_action.dispatch(ResetPayload {
                    phone,
                    code,
                    password,
                });
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let session = use_session();
    let phone = create_rw_signal(String::new());
    let code = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let step = create_rw_signal(ResetStep::RequestCode);
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);

    let send_session = session.clone();
    let send_action = create_action(move |phone: &String| {
        let session = send_session.clone();
        let phone = phone.clone();
        async move {
            session
                .send_verification_code(&phone, CodePurpose::PasswordReset)
                .await
        }
    });

    let reset_action = create_action(move |payload: &ResetPayload| {
        let session = session.clone();
        let payload = payload.clone();
        async move {
            session
                .reset_password(&payload.phone, &payload.code, &payload.password)
                .await
        }
    });

    create_effect(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(response) => {
                    let sent_to = phone.get_untracked().trim().to_string();
                    notice.set(Some(
                        response
                            .detail
                            .unwrap_or_else(|| format!("We sent a code to {sent_to}")),
                    ));
                    step.set(ResetStep::EnterCode { phone: sent_to });
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    password.set(String::new());
                    confirm.set(String::new());
                    notice.set(Some("Your password has been reset".to_string()));
                    step.set(ResetStep::Done);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    ForgotPasswordViewModel {
        phone,
        code,
        password,
        confirm,
        step,
        error,
        notice,
        send_action,
        reset_action,
    }
}
