use std::{cell::RefCell, rc::Rc};

use futures::lock::Mutex;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::{
        error::ApiError,
        types::{RefreshRequest, RefreshResponse},
    },
    config,
    utils::{
        navigation::{default_navigator, Navigator, LOGIN_ROUTE},
        storage::{default_store, KeyValueStore},
        token_store::TokenStore,
    },
};

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/auth/users/";
pub const VERIFY_PHONE_PATH: &str = "/api/auth/verify-phone/";
pub const SEND_CODE_PATH: &str = "/api/auth/send-verification-code/";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password/";
pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";

/// Paths that never carry a bearer token and never trigger a refresh.
pub const PUBLIC_PATHS: [&str; 6] = [
    LOGIN_PATH,
    REGISTER_PATH,
    VERIFY_PHONE_PATH,
    SEND_CODE_PATH,
    RESET_PASSWORD_PATH,
    REFRESH_PATH,
];

pub fn is_public_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    PUBLIC_PATHS.contains(&path)
}

/// Percent-encodes one path segment such as a listing id.
pub(crate) fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: TokenStore,
    navigator: Rc<dyn Navigator>,
    refresh_gate: Rc<Mutex<()>>,
    session_end_hooks: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: TokenStore::new(default_store()),
            navigator: default_navigator(),
            refresh_gate: Rc::new(Mutex::new(())),
            session_end_hooks: Rc::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.tokens = TokenStore::new(storage);
        self
    }

    pub fn with_navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Registers a callback run whenever the stored session is dropped,
    /// including after a failed token refresh. Shared by all clones.
    pub fn on_session_end(&self, hook: impl Fn() + 'static) {
        self.session_end_hooks.borrow_mut().push(Rc::new(hook));
    }

    /// Clears the stored session and leaves the app for the login screen.
    pub fn end_session(&self) {
        log::info!("ending session");
        self.tokens.clear();
        let hooks = self.session_end_hooks.borrow().clone();
        for hook in hooks {
            hook();
        }
        self.navigator.hard_redirect(LOGIN_ROUTE);
    }

    async fn dispatch(
        &self,
        builder: RequestBuilder,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let builder = match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        builder
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
    }

    /// Sends once with the stored bearer token (unless `path` is public),
    /// without refresh handling.
    pub(crate) async fn send_once<F>(&self, path: &str, build: F) -> Result<Response, ApiError>
    where
        F: Fn(&str) -> Result<RequestBuilder, ApiError>,
    {
        let url = self.endpoint(path).await;
        let token = if is_public_path(path) {
            None
        } else {
            self.tokens.access_token()
        };
        log::debug!("sending {path}");
        self.dispatch(build(&url)?, token.as_deref()).await
    }

    /// Sends a request built by `build`, refreshing the access token and
    /// replaying the request once when it is rejected with 401.
    pub(crate) async fn send_with_refresh<F>(
        &self,
        path: &str,
        build: F,
    ) -> Result<Response, ApiError>
    where
        F: Fn(&str) -> Result<RequestBuilder, ApiError>,
    {
        let url = self.endpoint(path).await;
        let public = is_public_path(path);
        let token = if public {
            None
        } else {
            self.tokens.access_token()
        };
        log::debug!("sending {path}");
        let response = self.dispatch(build(&url)?, token.as_deref()).await?;
        if public || response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        log::info!("{path} was rejected with 401; refreshing access token");
        let fresh = self.refresh_after_unauthorized(token.as_deref()).await?;
        let retried = self.dispatch(build(&url)?, Some(&fresh)).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            log::warn!("{path} was rejected again after refresh");
            self.end_session();
            return Err(ApiError::session_expired());
        }
        Ok(retried)
    }

    /// One refresh at a time. A caller that waited behind another refresh
    /// reuses the token that refresh stored instead of refreshing again.
    async fn refresh_after_unauthorized(&self, rejected: Option<&str>) -> Result<String, ApiError> {
        let _gate = self.refresh_gate.lock().await;
        if let Some(current) = self.tokens.access_token() {
            if rejected != Some(current.as_str()) {
                return Ok(current);
            }
        }
        match self.refresh_access_token().await {
            Ok(token) => Ok(token),
            Err(err) => {
                log::warn!("token refresh failed: {err}");
                self.end_session();
                Err(err)
            }
        }
    }

    /// Exchanges the stored refresh token for a new access token and stores
    /// it. Rotated refresh tokens are stored as well.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or_else(|| ApiError::authentication("No refresh token available"))?;
        let url = self.endpoint(REFRESH_PATH).await;
        let response = self
            .dispatch(
                self.client.post(&url).json(&RefreshRequest { refresh }),
                None,
            )
            .await?;
        let body: RefreshResponse = parse_json(response).await?;
        let access = body
            .access
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::invalid_response("No access token in refresh response"))?;
        self.tokens.set_access_token(&access)?;
        if let Some(rotated) = body.refresh.filter(|token| !token.is_empty()) {
            self.tokens.set_refresh_token(&rotated)?;
        }
        log::info!("access token refreshed");
        Ok(access)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .send_with_refresh(path, |url| Ok(self.http_client().get(url)))
            .await?;
        parse_json(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .send_with_refresh(path, |url| Ok(self.http_client().post(url)))
            .await?;
        expect_success(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .send_with_refresh(path, |url| Ok(self.http_client().delete(url)))
            .await?;
        expect_success(response).await
    }
}

pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status, &body)
}
