use serde::{Serialize, Deserialize};
use std::borrow::Cow;

pub const USER_API_ENDPOINT_PATH: &str = "/config/user-api-endpoint";
pub const DEFAULT_USER_API_ENDPOINT: &str = "http://localhost:4000";

/// Which failures are replaced by the default endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FallbackPolicy {
    /// Non-2xx responses fall back; transport failures are returned.
    #[default]
    OnNonSuccessStatus,
    OnAnyFailure,
    Never,
}

impl FallbackPolicy {
    pub const fn covers_status(self) -> bool {
        matches!(self, Self::OnNonSuccessStatus | Self::OnAnyFailure)
    }

    pub const fn covers_transport(self) -> bool {
        matches!(self, Self::OnAnyFailure)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderSettings {
    pub path: Cow<'static, str>,
    pub default_endpoint: Cow<'static, str>,
    pub fallback: FallbackPolicy,
}

impl LoaderSettings {
    pub const fn new() -> Self {
        Self {
            path: Cow::Borrowed(USER_API_ENDPOINT_PATH),
            default_endpoint: Cow::Borrowed(DEFAULT_USER_API_ENDPOINT),
            fallback: FallbackPolicy::OnNonSuccessStatus,
        }
    }

    pub fn with_path(mut self, path: impl Into<Cow<'static, str>>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_default_endpoint(mut self, endpoint: impl Into<Cow<'static, str>>) -> Self {
        self.default_endpoint = endpoint.into();
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self::new()
    }
}
