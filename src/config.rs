use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub phones: PhoneConfig,
    pub logo: LogoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// E.164 bounds on total digits per candidate.
    pub min_digits: usize,
    pub max_digits: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Identity aliases, most significant first; earlier tokens score higher.
    pub identity_tokens: Vec<String>,
    /// Elements within this many positions of the document start get the
    /// early bonus (logos conventionally sit near the top).
    pub early_cutoff: usize,
    pub early_bonus: u32,
    pub landmark_bonus: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            // Some sites reject empty or default client agents.
            user_agent: "Mozilla/5.0 (compatible; ContactScout/1.0)".to_string(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            identity_tokens: ["logo", "brand", "site", "company", "name"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            early_cutoff: 150,
            early_bonus: 2,
            landmark_bonus: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub async fn load_config(path: &str) -> crate::models::Result<Config> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_e164_bounds() {
        let config = Config::default();
        assert_eq!(config.phones.min_digits, 7);
        assert_eq!(config.phones.max_digits, 15);
        assert_eq!(config.logo.identity_tokens[0], "logo");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("fetch:\n  timeout_seconds: 5\n").unwrap();
        assert_eq!(config.fetch.timeout_seconds, 5);
        assert_eq!(config.phones.min_digits, 7);
    }

    #[tokio::test]
    async fn malformed_config_file_surfaces_an_error() {
        let path = std::env::temp_dir().join("contact-scout-malformed-config.yml");
        tokio::fs::write(&path, "fetch: [not, a, map]\n").await.unwrap();
        let loaded = load_config(path.to_str().unwrap()).await;
        assert!(loaded.is_err());
    }
}
