//! Server Settings
//!
//! Layered configuration: defaults, an optional `dashboard.toml`, a
//! `DASHBOARD__`-prefixed environment overlay, and the conventional
//! upstream key variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Bind address, e.g. `0.0.0.0:8080`.
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketingSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub marketing: MarketingSettings,
    pub ai: AiSettings,
}

impl Settings {
    /// Load settings with sane defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.address", "0.0.0.0:8080")?
            .set_default("marketing.base_url", "https://a.klaviyo.com/api")?
            .set_default("ai.base_url", "https://api.openai.com/v1")?
            .set_default("ai.model", "gpt-4")?
            .add_source(File::with_name("dashboard").required(false))
            .add_source(Environment::with_prefix("DASHBOARD").separator("__"));

        // Deployment parity: the upstream services are commonly configured
        // through their own well-known variables.
        if let Ok(key) = std::env::var("KLAVIYO_API_KEY") {
            builder = builder.set_override("marketing.api_key", key)?;
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.set_override("ai.api_key", key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Demo mode: no upstream marketing key, or a `xxxx` placeholder left
    /// in a config template. All proxy endpoints then serve sample data.
    pub fn demo_mode(&self) -> bool {
        match &self.marketing.api_key {
            Some(key) => key.is_empty() || key.contains("xxxx"),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> Settings {
        Settings {
            server: ServerSettings {
                address: "127.0.0.1:0".to_string(),
            },
            marketing: MarketingSettings {
                api_key: api_key.map(String::from),
                base_url: "https://a.klaviyo.com/api".to_string(),
            },
            ai: AiSettings {
                api_key: None,
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4".to_string(),
            },
        }
    }

    #[test]
    fn test_demo_mode_detection() {
        assert!(settings(None).demo_mode());
        assert!(settings(Some("")).demo_mode());
        assert!(settings(Some("pk_xxxxxxxx")).demo_mode());
        assert!(!settings(Some("pk_live_0123456789")).demo_mode());
    }
}
