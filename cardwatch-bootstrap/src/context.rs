use std::sync::Arc;

use anyhow::Result;
use clickhouse::Client;
use tracing::info;

use cardwatch_application::{AppState, Metrics};
use cardwatch_infrastructure::{AppConfig, ClickhouseRepo};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();
        info!(
            clickhouse_url = %db_config.clickhouse_url,
            clickhouse_database = %db_config.clickhouse_database,
            clickhouse_user = %db_config
                .clickhouse_user
                .as_deref()
                .unwrap_or("<none>"),
            clickhouse_password_set = db_config.clickhouse_password.is_some(),
            transactions_table = %db_config.transactions_table,
            "config loaded"
        );

        let mut clickhouse = Client::default()
            .with_url(&db_config.clickhouse_url)
            .with_database(&db_config.clickhouse_database);
        if let Some(user) = &db_config.clickhouse_user {
            clickhouse = clickhouse.with_user(user);
        }
        if let Some(password) = &db_config.clickhouse_password {
            clickhouse = clickhouse.with_password(password);
        }

        let repo = Arc::new(ClickhouseRepo::new(
            clickhouse,
            db_config.transactions_table.clone(),
        ));

        let state = AppState {
            config: runtime_config,
            transaction_repo: repo,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
