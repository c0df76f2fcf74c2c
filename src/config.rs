use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Upper bound on accepted request bodies, in bytes.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("MAX_BODY_BYTES").ok(),
        )?;

        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Max body size: {} bytes", config.max_body_bytes);

        Ok(config)
    }

    fn from_vars(port: Option<String>, max_body_bytes: Option<String>) -> anyhow::Result<Self> {
        let port = match port.filter(|p| !p.trim().is_empty()) {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or_else(|| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            None => DEFAULT_PORT,
        };

        let max_body_bytes = match max_body_bytes.filter(|b| !b.trim().is_empty()) {
            Some(b) => b
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a positive integer"))
                .and_then(|n| {
                    if n == 0 {
                        anyhow::bail!("MAX_BODY_BYTES cannot be zero");
                    }
                    Ok(n)
                })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            port,
            max_body_bytes,
        })
    }
}
