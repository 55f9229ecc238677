use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::db::models::{Payment, PaymentWithAccount};
use crate::error::ApiError;
use crate::router::AppState;
use crate::types::params::{ListQuery, NewPayment, PaymentPatch};

/// Payments with the owning account's name joined in for display.
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<PaymentWithAccount>>, ApiError> {
    let payments = state.storage.list_payments(&params).await?;
    Ok(Json(payments))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Payment>, ApiError> {
    // Storage reports absence as None; the HTTP boundary answers 404 either way.
    let payment = state
        .storage
        .get_payment(id)
        .await?
        .ok_or(ApiError::not_found("payment", id))?;
    Ok(Json(payment))
}

pub async fn create_payment(
    State(state): State<AppState>,
    Json(body): Json<NewPayment>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    let payment = state.storage.create_payment(&body).await?;
    info!(
        id = payment.id,
        account_id = payment.account_id,
        amount = %payment.amount,
        "payment created"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<PaymentPatch>,
) -> Result<Json<Payment>, ApiError> {
    let payment = state.storage.update_payment(id, &body).await?;
    info!(id, status = payment.status.label(), "payment updated");
    Ok(Json(payment))
}

pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_payment(id).await?;
    info!(id, "payment deleted");
    Ok(StatusCode::NO_CONTENT)
}
