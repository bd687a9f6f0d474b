use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cardwatch_application::{AppState, Metrics};
use cardwatch_domain::{RawTransaction, RuntimeConfig, TransactionRepository, DEFAULT_MAP_STYLE};

pub struct StaticRepo(pub Vec<RawTransaction>);

#[async_trait]
impl TransactionRepository for StaticRepo {
    async fn fetch_transactions(&self) -> anyhow::Result<Vec<RawTransaction>> {
        Ok(self.0.clone())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FailingRepo;

#[async_trait]
impl TransactionRepository for FailingRepo {
    async fn fetch_transactions(&self) -> anyhow::Result<Vec<RawTransaction>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Sleeps for the given duration before answering.
pub struct SlowRepo(pub Duration);

#[async_trait]
impl TransactionRepository for SlowRepo {
    async fn fetch_transactions(&self) -> anyhow::Result<Vec<RawTransaction>> {
        tokio::time::sleep(self.0).await;
        Ok(Vec::new())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        tokio::time::sleep(self.0).await;
        Ok(())
    }
}

pub fn state_with(repo: impl TransactionRepository + 'static) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:8501".to_string(),
            map_row_limit: 500,
            table_row_limit: 300,
            map_style: DEFAULT_MAP_STYLE.to_string(),
            mapbox_token: Some("pk.test".to_string()),
            request_timeout_seconds: 1,
        },
        transaction_repo: Arc::new(repo),
        metrics: Arc::new(Metrics::default()),
    }
}

pub fn row(id: &str, location: &str, latitude: &str) -> RawTransaction {
    RawTransaction {
        transaction_id: id.to_string(),
        transaction_date: "01/01/24 09:00".to_string(),
        location: location.to_string(),
        latitude: latitude.to_string(),
        longitude: "37.61".to_string(),
    }
}
