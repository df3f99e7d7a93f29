use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    serde_json::from_str(raw).context("config.json is not a valid runtime config")
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First usable URL in precedence order, else the default.
pub fn pick_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|url| normalize_base_url(&url))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{parse_runtime_config, RuntimeConfig};

    fn read_global(object: &str, keys: [&str; 2]) -> Option<String> {
        // window.__REALTY_ENV = { API_BASE_URL: "..." } (env.js)
        // window.__REALTY_CONFIG = { api_base_url: "..." }
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
        })
    }

    pub fn from_env_js() -> Option<String> {
        read_global("__REALTY_ENV", ["API_BASE_URL", "api_base_url"])
    }

    pub fn from_window_config() -> Option<String> {
        read_global("__REALTY_CONFIG", ["api_base_url", "API_BASE_URL"])
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{origin}/config.json")).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let raw = resp.text().await.ok()?;
        match parse_runtime_config(&raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("{err:#}");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = [browser::from_env_js(), browser::from_window_config()];
    if globals.iter().any(Option::is_some) {
        return cache_base_url(pick_base_url(globals));
    }
    let fetched = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url);
    cache_base_url(pick_base_url([fetched]))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_base_url(pick_base_url([None]))
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {url}");
}
