use super::{auth_config::AuthConfig, cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    /// `None` when JWT_SECRET is unset.
    pub auth: Option<AuthConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env(),
        }
    }
}
