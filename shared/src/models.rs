use serde::{Serialize, Deserialize};
use crate::config::DEFAULT_USER_API_ENDPOINT;

/// Runtime configuration handed to the rest of the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrontendConfig {
    user_api_endpoint: String,
}

impl FrontendConfig {
    pub fn new(user_api_endpoint: impl Into<String>) -> Self {
        Self { user_api_endpoint: user_api_endpoint.into() }
    }

    pub fn fallback() -> Self {
        Self::new(DEFAULT_USER_API_ENDPOINT)
    }

    pub fn user_api_endpoint(&self) -> &str {
        &self.user_api_endpoint
    }
}
