use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Client;
use tracing::info;

use cardwatch_domain::{RawTransaction, TransactionRepository};

#[derive(Clone)]
pub struct ClickhouseRepo {
    client: Client,
    table: String,
}

impl ClickhouseRepo {
    pub fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }
}

/// Read-only query for the transactions table. Columns are cast to text in
/// the order of `RawTransaction`'s fields; coordinate coercion happens later.
pub fn transactions_query(table: &str) -> String {
    format!(
        "SELECT toString(TRANSACTION_ID) AS transaction_id, \
         toString(TRANSACTION_DATE) AS transaction_date, \
         toString(LOCATION) AS location, \
         toString(LATITUDE) AS latitude, \
         toString(LONGITUDE) AS longitude \
         FROM {}",
        table
    )
}

#[async_trait]
impl TransactionRepository for ClickhouseRepo {
    async fn fetch_transactions(&self) -> Result<Vec<RawTransaction>> {
        let query = transactions_query(&self.table);
        let rows = self.client.query(&query).fetch_all::<RawTransaction>().await?;
        info!(table = %self.table, rows = rows.len(), "transactions fetched");
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}
