use crate::api::{
    ApiClient, ApiError, CodePurpose, LoginRequest, MessageResponse, RegisterRequest, User,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Initializing,
    Authenticated,
    /// Startup check failed; one refresh is in flight.
    Refreshing,
    Anonymous,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub phase: SessionPhase,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
            phase: SessionPhase::Authenticated,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            ..Self::default()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// The signed-in user as seen by the view layer, paired with the client
/// that owns the stored tokens.
#[derive(Clone)]
pub struct Session {
    api: ApiClient,
    state: RwSignal<AuthState>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        let state = create_rw_signal(AuthState::default());
        api.on_session_end(move || {
            if state.try_set(AuthState::anonymous()).is_some() {
                log::debug!("session state disposed before the session ended");
            }
        });
        Self { api, state }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(|state| state.is_authenticated)
    }

    fn set_loading(&self, loading: bool) {
        self.state.update(|state| state.loading = loading);
    }

    fn begin_startup(&self) {
        self.state.update(|state| {
            state.phase = SessionPhase::Initializing;
            state.loading = true;
        });
    }

    fn become_anonymous(&self) {
        self.state.set(AuthState::anonymous());
    }

    /// Restores the stored session at startup.
    ///
    /// The cached user is shown immediately, then the access token is checked
    /// once. A rejected check gets exactly one refresh attempt; if that fails
    /// the stored session is dropped without leaving the current page.
    pub async fn initialize(&self) -> SessionPhase {
        self.begin_startup();

        let tokens = self.api.tokens();
        let (Some(user), Some(_)) = (tokens.user(), tokens.access_token()) else {
            log::debug!("no stored session");
            tokens.clear();
            self.become_anonymous();
            return SessionPhase::Anonymous;
        };

        self.state.set(AuthState {
            loading: true,
            ..AuthState::signed_in(user.clone())
        });

        if let Err(err) = self.api.verify_session().await {
            log::info!("stored session rejected ({err}); refreshing");
            self.state.update(|state| state.phase = SessionPhase::Refreshing);
            if let Err(err) = self.api.refresh_access_token().await {
                log::warn!("could not restore session: {err}");
                tokens.clear();
                self.become_anonymous();
                return SessionPhase::Anonymous;
            }
        }

        self.state.set(AuthState::signed_in(user));
        SessionPhase::Authenticated
    }

    pub async fn login(&self, request: LoginRequest) -> Result<User, ApiError> {
        self.set_loading(true);
        match self.api.login(request).await {
            Ok(session) => {
                self.state.set(AuthState::signed_in(session.user.clone()));
                Ok(session.user)
            }
            Err(err) => {
                self.set_loading(false);
                Err(err)
            }
        }
    }

    /// Creates the account; signing in is a separate step.
    pub async fn register(&self, request: RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.set_loading(true);
        let result = self.api.register(request).await;
        self.set_loading(false);
        result
    }

    pub async fn verify_phone(&self, phone: &str, code: &str) -> Result<(), ApiError> {
        self.set_loading(true);
        let result = self.api.verify_phone(phone, code).await;
        self.set_loading(false);
        result
    }

    pub async fn send_verification_code(
        &self,
        phone: &str,
        purpose: CodePurpose,
    ) -> Result<MessageResponse, ApiError> {
        self.set_loading(true);
        let result = self.api.send_verification_code(phone, purpose).await;
        self.set_loading(false);
        result
    }

    pub async fn reset_password(
        &self,
        phone: &str,
        code: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.set_loading(true);
        let result = self.api.reset_password(phone, code, password).await;
        self.set_loading(false);
        result
    }

    /// Drops the session and reloads into the login page.
    pub fn logout(&self) {
        self.become_anonymous();
        self.api.end_session();
    }

    /// Changes the role on the cached profile only. The backend is not told.
    pub fn update_role(&self, role: &str) -> Result<User, ApiError> {
        let mut user = self
            .state
            .with_untracked(|state| state.user.clone())
            .ok_or_else(|| ApiError::authentication("Not signed in"))?;
        user.role = role.trim().to_string();
        self.api.tokens().save_user(&user)?;
        self.state.update(|state| state.user = Some(user.clone()));
        Ok(user)
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = Session::new(api);
    provide_context(session.clone());
    // Guards rendered below must see a pending session, not an anonymous one.
    session.begin_startup();

    let startup = session.clone();
    spawn_local(async move {
        let phase = startup.initialize().await;
        log::debug!("session ready: {phase:?}");
    });

    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| Session::new(ApiClient::new()))
}

pub fn use_auth_state() -> RwSignal<AuthState> {
    use_session().state()
}
