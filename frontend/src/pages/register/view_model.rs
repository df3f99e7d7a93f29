use super::utils::{RegisterFormState, RegisterStep};
use crate::api::{normalize_otp, ApiError, CodePurpose, MessageResponse, RegisterRequest};
use crate::state::auth::use_session;
use crate::utils::navigation::{go_to, LOGIN_ROUTE};
use leptos::*;

pub const CODE_SENT_MESSAGE: &str = "Registration successful! Please verify with OTP";
const CODE_RESENT_MESSAGE: &str = "A new code is on its way";

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub step: RwSignal<RegisterStep>,
    pub otp: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<serde_json::Value, ApiError>>,
    pub verify_action: Action<(String, String), Result<(), ApiError>>,
    pub resend_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl RegisterViewModel {
    pub fn submit_details(&self) {
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn submit_code(&self) {
        let Some(phone) = self.step.with_untracked(|step| step.phone().map(str::to_string)) else {
            return;
        };
        match normalize_otp(&self.otp.get_untracked()) {
            Ok(code) => {
                self.error.set(None);
                self.verify_action.dispatch((phone, code));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn resend_code(&self) {
        if let Some(phone) = self.step.with_untracked(|step| step.phone().map(str::to_string)) {
            self.resend_action.dispatch(phone);
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        let (register, verify, resend) = (
            self.register_action.pending(),
            self.verify_action.pending(),
            self.resend_action.pending(),
        );
        Signal::derive(move || register.get() || verify.get() || resend.get())
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let session = use_session();
    let form = RegisterFormState::default();
    let step = create_rw_signal(RegisterStep::Details);
    let otp = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);

    let register_session = session.clone();
    let register_action = create_action(move |request: &RegisterRequest| {
        let session = register_session.clone();
        let request = request.clone();
        async move { session.register(request).await }
    });

    let verify_session = session.clone();
    let verify_action = create_action(move |(phone, code): &(String, String)| {
        let session = verify_session.clone();
        let (phone, code) = (phone.clone(), code.clone());
        async move { session.verify_phone(&phone, &code).await }
    });

    let resend_action = create_action(move |phone: &String| {
        let session = session.clone();
        let phone = phone.clone();
        async move {
            session
                .send_verification_code(&phone, CodePurpose::Registration)
                .await
        }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    let phone = form.phone.get_untracked().trim().to_string();
                    step.set(RegisterStep::VerifyPhone { phone });
                    notice.set(Some(CODE_SENT_MESSAGE.to_string()));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => go_to(LOGIN_ROUTE),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(response) => notice.set(Some(
                    response
                        .detail
                        .unwrap_or_else(|| CODE_RESENT_MESSAGE.to_string()),
                )),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        step,
        otp,
        error,
        notice,
        register_action,
        verify_action,
        resend_action,
    }
}
