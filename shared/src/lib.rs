pub mod error;
pub mod models;
pub mod config;
pub mod loader;

pub use error::{ConfigError, Result};
pub use models::FrontendConfig;
pub use config::{FallbackPolicy, LoaderSettings, DEFAULT_USER_API_ENDPOINT, USER_API_ENDPOINT_PATH};
pub use loader::{ConfigLoader, ConfigResponse, ConfigSource, fetch_user_api_endpoint, load_frontend_config, resolve};
