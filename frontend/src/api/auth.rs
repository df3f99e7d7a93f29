use super::{
    client::{
        error_from_response, expect_success, ApiClient, LOGIN_PATH, REGISTER_PATH,
        RESET_PASSWORD_PATH, SEND_CODE_PATH, VERIFY_PHONE_PATH,
    },
    error::ApiError,
    types::{
        normalize_otp, validate_password, validate_phone, AuthSession, CodePurpose, Listing,
        LoginRequest, LoginResponse, MessageResponse, Property, RegisterRequest,
        ResetPasswordRequest, SendCodeRequest, User, VerifyPhoneRequest,
    },
};

const CURRENT_USER_PATH: &str = "/api/properties/my_listings/";

impl ApiClient {
    /// Signs in with phone and password and persists tokens and profile.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, ApiError> {
        request.validate()?;
        let response = self
            .send_with_refresh(LOGIN_PATH, |url| {
                Ok(self.http_client().post(url).json(&request))
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_login_rejection(status.as_u16(), &body));
        }

        let login_response: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
        let session = match login_response {
            LoginResponse {
                access: Some(access),
                refresh: Some(refresh),
                user: Some(user),
            } if !access.is_empty() && !refresh.is_empty() => AuthSession {
                access,
                refresh,
                user,
            },
            _ => {
                log::error!("login response is missing tokens or user");
                return Err(ApiError::invalid_response("Invalid response from server"));
            }
        };

        self.tokens()
            .save_session(&session.access, &session.refresh, &session.user)?;
        log::info!("signed in as user {}", session.user.id);
        Ok(session)
    }

    /// Creates an account. Does not sign in.
    pub async fn register(&self, request: RegisterRequest) -> Result<serde_json::Value, ApiError> {
        request.validate()?;
        let response = self
            .send_with_refresh(REGISTER_PATH, |url| {
                Ok(self.http_client().post(url).json(&request))
            })
            .await?;
        let status = response.status();
        if status.is_success() {
            // Djoser answers 201 with the created user; the body is informational.
            Ok(response.json().await.unwrap_or(serde_json::Value::Null))
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn verify_phone(&self, phone: &str, code: &str) -> Result<(), ApiError> {
        validate_phone(phone)?;
        let code = normalize_otp(code)?;
        let payload = VerifyPhoneRequest {
            phone: phone.trim().to_string(),
            code,
        };
        let response = self
            .send_with_refresh(VERIFY_PHONE_PATH, |url| {
                Ok(self.http_client().post(url).json(&payload))
            })
            .await?;
        expect_success(response).await
    }

    pub async fn send_verification_code(
        &self,
        phone: &str,
        purpose: CodePurpose,
    ) -> Result<MessageResponse, ApiError> {
        validate_phone(phone)?;
        let payload = SendCodeRequest {
            phone: phone.trim().to_string(),
            purpose: purpose.as_str().to_string(),
        };
        let response = self
            .send_with_refresh(SEND_CODE_PATH, |url| {
                Ok(self.http_client().post(url).json(&payload))
            })
            .await?;
        if response.status().is_success() {
            Ok(response.json().await.unwrap_or_default())
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn reset_password(
        &self,
        phone: &str,
        code: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        validate_phone(phone)?;
        let code = normalize_otp(code)?;
        validate_password(password)?;
        let payload = ResetPasswordRequest {
            phone: phone.trim().to_string(),
            code,
            password: password.to_string(),
        };
        let response = self
            .send_with_refresh(RESET_PASSWORD_PATH, |url| {
                Ok(self.http_client().post(url).json(&payload))
            })
            .await?;
        expect_success(response).await
    }

    /// Probes the stored access token without refresh handling. The
    /// backend has no profile endpoint; the caller's own listings stand in.
    pub async fn verify_session(&self) -> Result<(), ApiError> {
        let response = self
            .send_once(CURRENT_USER_PATH, |url| Ok(self.http_client().get(url)))
            .await?;
        expect_success(response).await
    }

    pub async fn get_current_user_listings(&self) -> Result<Vec<Property>, ApiError> {
        let listing: Listing<Property> = self.get_json(CURRENT_USER_PATH).await?;
        Ok(listing.into_items())
    }
}
