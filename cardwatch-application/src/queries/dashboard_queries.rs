use chrono::{Local, NaiveDate};
use tracing::{debug, error};

use cardwatch_domain::{build_dashboard, yesterday_of, Dashboard, DashboardLimits, DashboardQuery};

use crate::{AppError, AppState};

pub async fn load_dashboard(state: &AppState, query: DashboardQuery) -> Result<Dashboard, AppError> {
    let yesterday = yesterday_of(Local::now().date_naive());
    load_dashboard_for(state, query, yesterday).await
}

/// Runs fetch, transform and bounding for a fixed "yesterday".
pub async fn load_dashboard_for(
    state: &AppState,
    query: DashboardQuery,
    yesterday: NaiveDate,
) -> Result<Dashboard, AppError> {
    let limits = resolve_limits(state, &query);

    let rows = state.transaction_repo.fetch_transactions().await.map_err(|err| {
        error!("failed to fetch transactions: {}", err);
        state.metrics.record_render_error();
        AppError::Internal(err)
    })?;
    debug!(rows = rows.len(), "transactions fetched");

    let dashboard = build_dashboard(rows, yesterday, limits, &state.config.map_style).map_err(
        |err| {
            error!("failed to build dashboard: {}", err);
            state.metrics.record_render_error();
            AppError::Internal(err.into())
        },
    )?;

    state
        .metrics
        .record_render(dashboard.summary.fetched_rows, dashboard.summary.fraudulent);
    debug!(
        map_rows = dashboard.summary.map_rows,
        table_rows = dashboard.summary.table_rows,
        fraudulent = dashboard.summary.fraudulent,
        "dashboard built"
    );
    Ok(dashboard)
}

fn resolve_limits(state: &AppState, query: &DashboardQuery) -> DashboardLimits {
    let max_rows = state.config.map_row_limit.max(1);
    let map_rows = query.limit.unwrap_or(max_rows).clamp(1, max_rows);
    DashboardLimits::new(map_rows, state.config.table_row_limit)
}
