use std::sync::Arc;

use cardwatch_domain::ports::TransactionRepository;
use cardwatch_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub transaction_repo: Arc<dyn TransactionRepository>,
    pub metrics: Arc<Metrics>,
}
