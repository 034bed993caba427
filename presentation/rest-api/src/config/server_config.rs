use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let ip = ip
            .filter(|ip| !ip.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = match port.as_deref().map(str::parse::<u16>) {
            Some(Ok(port)) => port,
            Some(Err(_)) => {
                tracing::warn!(default = DEFAULT_PORT, "SERVICE_PORT is not a valid port");
                DEFAULT_PORT
            }
            None => DEFAULT_PORT,
        };

        Self { ip, port }
    }

    /// "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig::from_values(Some("0.0.0.0".to_string()), Some("9000".to_string()));

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn should_use_defaults_when_unset() {
        let config = ServerConfig::from_values(None, None);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_fall_back_to_default_port_when_not_a_number() {
        let config = ServerConfig::from_values(None, Some("http".to_string()));

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
