use gloo_net::http::{Request, Response};
use shared::{ConfigError, ConfigResponse, ConfigSource, LoaderSettings, Result};

pub const LOADER_SETTINGS: LoaderSettings = LoaderSettings::new();

/// Browser fetch; relative paths resolve against the page origin.
pub struct GlooConfigSource;

pub struct GlooConfigResponse(Response);

impl ConfigResponse for GlooConfigResponse {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn ok(&self) -> bool {
        self.0.ok()
    }

    async fn text(self) -> Result<String> {
        self.0.text().await.map_err(|e| ConfigError::request_failed(e.to_string()))
    }
}

impl ConfigSource for GlooConfigSource {
    type Response = GlooConfigResponse;

    async fn get(&self, path: &str) -> Result<GlooConfigResponse> {
        Request::get(path)
            .send()
            .await
            .map(GlooConfigResponse)
            .map_err(|e| ConfigError::request_failed(e.to_string()))
    }
}
