//! One-shot loading of the frontend configuration over HTTP.
//!
//! The transport is abstracted behind [`ConfigSource`] so the same procedure
//! runs against `gloo-net` in the browser and against stubs in tests.

use tracing::{debug, info, warn};
use crate::{
    config::{FallbackPolicy, LoaderSettings},
    error::{ConfigError, Result},
    models::FrontendConfig,
};

#[allow(async_fn_in_trait)]
pub trait ConfigResponse {
    fn status(&self) -> u16;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Consumes the response and reads the whole body as text.
    async fn text(self) -> Result<String>;
}

#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    type Response: ConfigResponse;

    /// Issues a bodiless GET. Errors only when no response was obtained.
    async fn get(&self, path: &str) -> Result<Self::Response>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    type Response = S::Response;

    async fn get(&self, path: &str) -> Result<Self::Response> {
        (**self).get(path).await
    }
}

/// Fetches the endpoint without applying any fallback.
///
/// The body is only read for a successful response and is returned verbatim.
pub async fn fetch_user_api_endpoint<S: ConfigSource>(source: &S, path: &str) -> Result<String> {
    debug!(path, "Requesting user API endpoint");
    let response = source.get(path).await?;

    if !response.ok() {
        return Err(ConfigError::NonSuccessStatus { code: response.status() });
    }

    response.text().await
}

pub fn resolve(result: Result<String>, settings: &LoaderSettings) -> Result<FrontendConfig> {
    let endpoint = match result {
        Ok(endpoint) => endpoint,
        Err(e) if should_fall_back(&e, settings.fallback) => {
            warn!(
                error = %e,
                fallback = %settings.default_endpoint,
                "User API endpoint unavailable, using default"
            );
            settings.default_endpoint.to_string()
        }
        Err(e) => return Err(e),
    };

    info!(endpoint = %endpoint, "User API endpoint resolved");
    Ok(FrontendConfig::new(endpoint))
}

fn should_fall_back(error: &ConfigError, policy: FallbackPolicy) -> bool {
    match error {
        ConfigError::NonSuccessStatus { .. } => policy.covers_status(),
        ConfigError::RequestFailed(_) => policy.covers_transport(),
    }
}

pub async fn load_frontend_config<S: ConfigSource>(source: &S, settings: &LoaderSettings) -> Result<FrontendConfig> {
    let result = fetch_user_api_endpoint(source, &settings.path).await;
    resolve(result, settings)
}

/// Loads the configuration once and hands out the cached record afterwards.
pub struct ConfigLoader<S> {
    source: S,
    settings: LoaderSettings,
    config: Option<FrontendConfig>,
}

impl<S: ConfigSource> ConfigLoader<S> {
    pub fn new(source: S, settings: LoaderSettings) -> Self {
        Self { source, settings, config: None }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    pub fn config(&self) -> Option<&FrontendConfig> {
        self.config.as_ref()
    }

    /// Failed loads are not cached, so a later call issues a fresh request.
    pub async fn load(&mut self) -> Result<&FrontendConfig> {
        match self.config {
            Some(ref config) => Ok(config),
            None => {
                let config = load_frontend_config(&self.source, &self.settings).await?;
                Ok(self.config.insert(config))
            }
        }
    }

    pub fn into_config(self) -> Option<FrontendConfig> {
        self.config
    }
}
