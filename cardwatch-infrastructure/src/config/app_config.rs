use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use cardwatch_domain::{
    DbConfig, RuntimeConfig, DEFAULT_MAP_ROW_LIMIT, DEFAULT_MAP_STYLE, DEFAULT_TABLE_ROW_LIMIT,
};

use crate::config::validate_table_name;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub transactions_table: String,
    pub map_row_limit: usize,
    pub table_row_limit: usize,
    pub map_style: String,
    pub mapbox_token: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8501".to_string(),
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "cc_fins".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            transactions_table: "creditcard_transactions".to_string(),
            map_row_limit: DEFAULT_MAP_ROW_LIMIT,
            table_row_limit: DEFAULT_TABLE_ROW_LIMIT,
            map_style: DEFAULT_MAP_STYLE.to_string(),
            mapbox_token: None,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("CARDWATCH_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        self.clickhouse_user = non_blank(self.clickhouse_user.take());
        self.clickhouse_password = non_blank(self.clickhouse_password.take());
        self.mapbox_token = non_blank(self.mapbox_token.take());
        self.transactions_table = self.transactions_table.trim().to_string();
        if self.map_style.trim().is_empty() {
            self.map_style = DEFAULT_MAP_STYLE.to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.clickhouse_url.trim().is_empty() {
            return Err(anyhow!("clickhouse_url must not be empty"));
        }
        validate_table_name(&self.transactions_table)?;
        if self.map_row_limit == 0 {
            return Err(anyhow!("map_row_limit must be greater than 0"));
        }
        if self.table_row_limit > self.map_row_limit {
            return Err(anyhow!(
                "table_row_limit ({}) must not exceed map_row_limit ({})",
                self.table_row_limit,
                self.map_row_limit
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            map_row_limit: self.map_row_limit,
            table_row_limit: self.table_row_limit,
            map_style: self.map_style.clone(),
            mapbox_token: self.mapbox_token.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
            transactions_table: self.transactions_table.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("CARDWATCH_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("CARDWATCH_CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Some(value) = lookup("CARDWATCH_CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Some(value) = lookup("CARDWATCH_CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Some(value) = lookup("CARDWATCH_CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Some(value) = lookup("CARDWATCH_TRANSACTIONS_TABLE") {
            self.transactions_table = value;
        }
        if let Some(value) = lookup("CARDWATCH_MAP_ROW_LIMIT") {
            self.map_row_limit = value.parse().unwrap_or(self.map_row_limit);
        }
        if let Some(value) = lookup("CARDWATCH_TABLE_ROW_LIMIT") {
            self.table_row_limit = value.parse().unwrap_or(self.table_row_limit);
        }
        if let Some(value) = lookup("CARDWATCH_MAP_STYLE") {
            self.map_style = value;
        }
        if let Some(value) = lookup("CARDWATCH_MAPBOX_TOKEN") {
            self.mapbox_token = Some(value);
        }
        if let Some(value) = lookup("CARDWATCH_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().expect("valid defaults");
        assert_eq!(config.map_row_limit, 500);
        assert_eq!(config.table_row_limit, 300);
        assert_eq!(config.map_style, "mapbox://styles/mapbox/light-v9");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
bind_addr = "0.0.0.0:9000"
clickhouse_database = "analytics"
map_row_limit = 200
table_row_limit = 100
"#,
        )
        .expect("parse");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.clickhouse_database, "analytics");
        assert_eq!(config.clickhouse_url, "http://127.0.0.1:8123");
        assert_eq!(config.transactions_table, "creditcard_transactions");
        assert_eq!(config.map_row_limit, 200);
        config.validate().expect("valid");
    }

    #[test]
    fn overrides_and_normalize_drop_blank_secrets() {
        let vars: HashMap<&str, &str> = [
            ("CARDWATCH_CLICKHOUSE_USER", "reader"),
            ("CARDWATCH_CLICKHOUSE_PASSWORD", "   "),
            ("CARDWATCH_MAPBOX_TOKEN", ""),
            ("CARDWATCH_MAP_ROW_LIMIT", "not-a-number"),
            ("CARDWATCH_TABLE_ROW_LIMIT", "250"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));
        config.normalize();

        assert_eq!(config.clickhouse_user.as_deref(), Some("reader"));
        assert_eq!(config.clickhouse_password, None);
        assert_eq!(config.mapbox_token, None);
        assert_eq!(config.map_row_limit, 500);
        assert_eq!(config.table_row_limit, 250);
    }

    #[test]
    fn validate_rejects_table_limit_above_map_limit() {
        let config = AppConfig {
            map_row_limit: 100,
            table_row_limit: 300,
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("reject");
        assert!(err.to_string().contains("table_row_limit"));
    }

    #[test]
    fn validate_rejects_bad_bind_addr_and_table() {
        let config = AppConfig {
            bind_addr: "localhost".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            transactions_table: "t; DROP TABLE t".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn split_configs_carry_their_fields() {
        let config = AppConfig::default();
        let runtime = config.to_runtime_config();
        let db = config.to_db_config();
        assert_eq!(runtime.map_row_limit, config.map_row_limit);
        assert_eq!(runtime.request_timeout_seconds, 15);
        assert_eq!(db.transactions_table, "creditcard_transactions");
        assert_eq!(db.clickhouse_database, "cc_fins");
    }

    #[tokio::test]
    async fn missing_config_file_falls_back_to_defaults() {
        let missing = env::temp_dir().join("cardwatch-missing-config.toml");
        assert!(!missing.exists());
        env::set_var("CARDWATCH_CONFIG", &missing);
        let config = AppConfig::load().await.expect("defaults");
        env::remove_var("CARDWATCH_CONFIG");

        assert_eq!(config.bind_addr, "127.0.0.1:8501");
        assert_eq!(config.clickhouse_database, "cc_fins");
        assert_eq!(config.transactions_table, "creditcard_transactions");
        assert_eq!(config.map_row_limit, 500);
        assert_eq!(config.table_row_limit, 300);
        assert_eq!(config.request_timeout_seconds, 15);
    }
}
