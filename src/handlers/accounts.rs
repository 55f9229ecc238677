use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::db::models::{Account, AccountWithPayments};
use crate::error::ApiError;
use crate::router::AppState;
use crate::types::params::{AccountPatch, ListQuery, NewAccount};

pub async fn list_accounts(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.storage.list_accounts(&params).await?;
    Ok(Json(accounts))
}

/// Single account with its payments attached.
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountWithPayments>, ApiError> {
    let account = state.storage.get_account(id).await?;
    let payments = state.storage.payments_for_account(id).await?;
    Ok(Json(AccountWithPayments { account, payments }))
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let account = state.storage.create_account(&body).await?;
    info!(id = account.id, name = %account.name, "account created");
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AccountPatch>,
) -> Result<Json<Account>, ApiError> {
    let account = state.storage.update_account(id, &body).await?;
    info!(id, "account updated");
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_account(id).await?;
    info!(id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
