use std::env;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origin clients reach this server at; document locators are built on it
    pub public_origin: String,
    /// Remote JSON blob service the viewers read from instead of the local store
    pub upstream_store_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;
        let public_origin = env::var("PUBLIC_ORIGIN")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        let upstream_store_url = env::var("UPSTREAM_STORE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Ok(Self::new(host, port, public_origin, upstream_store_url))
    }

    pub fn new(
        host: impl Into<String>,
        port: u16,
        public_origin: impl Into<String>,
        upstream_store_url: Option<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            public_origin: public_origin.into().trim_end_matches('/').to_string(),
            upstream_store_url,
        }
    }
}
