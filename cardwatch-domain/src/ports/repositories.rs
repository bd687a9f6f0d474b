use async_trait::async_trait;

use crate::entities::RawTransaction;

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Runs the fixed read-only query and returns the whole result set.
    async fn fetch_transactions(&self) -> anyhow::Result<Vec<RawTransaction>>;
    async fn ping(&self) -> anyhow::Result<()>;
}
