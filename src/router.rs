use axum::routing::get;
use axum::Router;

use crate::db::RegistryStorage;
use crate::handlers::accounts::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
use crate::handlers::payments::{
    create_payment, delete_payment, get_payment, list_payments, update_payment,
};

#[derive(Clone)]
pub struct AppState {
    pub storage: RegistryStorage,
}

impl AppState {
    pub fn new(storage: RegistryStorage) -> Self {
        Self { storage }
    }
}

pub fn registry_router(state: AppState) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/payments", get(list_payments).post(create_payment))
        .route(
            "/payments/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .with_state(state)
}
