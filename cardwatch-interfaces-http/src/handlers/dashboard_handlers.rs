use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use tracing::{error, warn};

use cardwatch_application::queries::dashboard_queries;
use cardwatch_application::AppState;
use cardwatch_domain::{Dashboard, DashboardQuery};

use crate::error::HttpError;
use crate::views::render_dashboard_page;

pub async fn dashboard_page(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Html<String>, HttpError> {
    let query = dashboard_query(query)?;
    let dashboard = dashboard_queries::load_dashboard(&state, query).await?;
    let page = render_dashboard_page(&dashboard, state.config.mapbox_token.as_deref()).map_err(
        |err| {
            error!("failed to render dashboard page: {}", err);
            HttpError::Internal(err.to_string())
        },
    )?;
    Ok(Html(page))
}

pub async fn dashboard_json(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<Dashboard>, HttpError> {
    let query = dashboard_query(query)?;
    let dashboard = dashboard_queries::load_dashboard(&state, query).await?;
    Ok(Json(dashboard))
}

pub async fn not_found() -> HttpError {
    HttpError::NotFound
}

fn dashboard_query(
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<DashboardQuery, HttpError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            warn!("rejected dashboard query: {}", rejection.body_text());
            Err(HttpError::BadRequest(rejection.body_text()))
        }
    }
}
