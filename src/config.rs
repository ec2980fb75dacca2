use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub forward: ForwardConfig,
}

/// Downstream settings. Either may be missing; the intake handler refuses
/// requests until both are set.
#[derive(Debug, Clone, Default)]
pub struct ForwardConfig {
    pub shared_token: Option<String>,
    pub url: Option<String>,
}

impl ForwardConfig {
    /// Both settings, or `None` if either is missing.
    pub fn resolve(&self) -> Option<(&str, &str)> {
        match (self.shared_token.as_deref(), self.url.as_deref()) {
            (Some(token), Some(url)) => Some((token, url)),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        // Unset and blank are both treated as absent.
        let env_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let forward = ForwardConfig {
            shared_token: env_optional("SHARED_TOKEN"),
            url: env_optional("APPS_SCRIPT_URL"),
        };

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            forward,
        })
    }
}
