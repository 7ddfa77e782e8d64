//! Configuration types.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Assistant configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct AssistConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Session database file. `None` keeps sessions in memory.
    pub db_path: Option<PathBuf>,
    /// Opportunity catalog JSON file. `None` starts with an empty catalog.
    pub catalog_path: Option<PathBuf>,
    /// Outbound SMS gateway endpoint + token. `None` logs outbound sends.
    pub gateway: Option<GatewayConfig>,
}

/// Outbound gateway credentials.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub token: SecretString,
}

impl AssistConfig {
    /// Read configuration from `SMS_ASSIST_*` environment variables.
    ///
    /// The gateway is enabled only when both the endpoint and the token
    /// are present; an endpoint without a token is a configuration error
    /// rather than a silent downgrade to log-only sending.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("SMS_ASSIST_BIND").ok();
        let db_path = std::env::var("SMS_ASSIST_DB_PATH").ok().map(PathBuf::from);
        let catalog_path = std::env::var("SMS_ASSIST_CATALOG").ok().map(PathBuf::from);

        let gateway = match std::env::var("SMS_ASSIST_GATEWAY_URL").ok() {
            Some(endpoint) => {
                let token = std::env::var("SMS_ASSIST_GATEWAY_TOKEN").map_err(|_| {
                    ConfigError::MissingEnvVar("SMS_ASSIST_GATEWAY_TOKEN".to_string())
                })?;
                Some(GatewayConfig {
                    endpoint,
                    token: SecretString::from(token),
                })
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            db_path,
            catalog_path,
            gateway,
        })
    }

    /// Bind address with the default applied.
    pub fn bind_addr_or_default(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or("0.0.0.0:8001")
    }
}
