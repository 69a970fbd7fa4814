use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }

    /// Base URL advertised in the OpenAPI document.
    pub fn public_url(&self) -> String {
        format!("http://{}", self.server.bind_address())
    }
}
