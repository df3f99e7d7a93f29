use std::rc::Rc;

use crate::{
    api::{ApiError, User},
    utils::storage::KeyValueStore,
};

pub const ACCESS_TOKEN_KEY: &str = "auth_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";
pub const FAVORITES_KEY: &str = "favorites";

const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Typed access to the persisted session: access token, refresh token and
/// the cached user profile.
#[derive(Clone)]
pub struct TokenStore {
    storage: Rc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.storage)
    }

    pub fn access_token(&self) -> Option<String> {
        non_empty(self.storage.get(ACCESS_TOKEN_KEY))
    }

    pub fn refresh_token(&self) -> Option<String> {
        non_empty(self.storage.get(REFRESH_TOKEN_KEY))
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("discarding unreadable cached user: {err}");
                None
            }
        }
    }

    pub fn has_session(&self) -> bool {
        self.access_token().is_some() && self.user().is_some()
    }

    /// Writes all three values or none of them.
    pub fn save_session(&self, access: &str, refresh: &str, user: &User) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| ApiError::storage(format!("Failed to serialize user: {e}")))?;
        let result = self
            .storage
            .set(ACCESS_TOKEN_KEY, access)
            .and_then(|_| self.storage.set(REFRESH_TOKEN_KEY, refresh))
            .and_then(|_| self.storage.set(USER_KEY, &user_json));
        if let Err(err) = result {
            self.clear();
            return Err(err.into());
        }
        Ok(())
    }

    pub fn set_access_token(&self, token: &str) -> Result<(), ApiError> {
        Ok(self.storage.set(ACCESS_TOKEN_KEY, token)?)
    }

    pub fn set_refresh_token(&self, token: &str) -> Result<(), ApiError> {
        Ok(self.storage.set(REFRESH_TOKEN_KEY, token)?)
    }

    pub fn save_user(&self, user: &User) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| ApiError::storage(format!("Failed to serialize user: {e}")))?;
        Ok(self.storage.set(USER_KEY, &user_json)?)
    }

    /// Removes the session keys. Favorites are kept.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
