use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WasteConfig {
    pub reduction_percent: u32,
    pub estimated_savings: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub waste: WasteConfig,
}

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparseable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("APP_PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let waste = WasteConfig {
            reduction_percent: lookup("WASTE_REDUCTION_PERCENT")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(40),
            estimated_savings: lookup("ESTIMATED_SAVINGS")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(15.50),
        };

        anyhow::ensure!(!host.trim().is_empty(), "APP_HOST must not be empty");

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            waste,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
