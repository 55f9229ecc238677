use reqwest::{Client, Response, StatusCode};
use thiserror::Error as ThisError;
use url::Url;

use crate::client::forms::{AccountForm, PaymentForm};
use crate::client::views::{sort_accounts, sort_payments};
use crate::db::models::{Account, AccountWithPayments, Payment, PaymentWithAccount};

#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Thin JSON client over the registry's HTTP surface. One request per call,
/// no retries; a non-2xx status becomes a single `ClientError::Status`.
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn check(resp: Response) -> Result<Response, ClientError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ClientError::Status(resp.status()))
        }
    }

    /// Full account list, sorted alphabetically by name for display.
    pub async fn fetch_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let resp = self.http.get(self.endpoint("accounts")?).send().await?;
        let accounts: Vec<Account> = Self::check(resp)?.json().await?;
        Ok(sort_accounts(accounts))
    }

    pub async fn fetch_account_with_payments(
        &self,
        id: i64,
    ) -> Result<AccountWithPayments, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(&format!("accounts/{id}"))?)
            .send()
            .await?;
        Ok(Self::check(resp)?.json().await?)
    }

    /// Full payment list (with owning account names), sorted ascending by id.
    pub async fn fetch_payments(&self) -> Result<Vec<PaymentWithAccount>, ClientError> {
        let resp = self.http.get(self.endpoint("payments")?).send().await?;
        let payments: Vec<PaymentWithAccount> = Self::check(resp)?.json().await?;
        Ok(sort_payments(payments))
    }

    /// POST when the form carries no id (create), PUT when it does (edit).
    /// Callers are expected to have run `form.validate()` first; an invalid
    /// form never reaches this method in the console flows.
    pub async fn save_account(&self, form: &AccountForm) -> Result<Account, ClientError> {
        let payload = form.to_payload();
        let resp = match form.id {
            Some(id) => {
                self.http
                    .put(self.endpoint(&format!("accounts/{id}"))?)
                    .json(&payload)
                    .send()
                    .await?
            }
            None => {
                self.http
                    .post(self.endpoint("accounts")?)
                    .json(&payload)
                    .send()
                    .await?
            }
        };
        Ok(Self::check(resp)?.json().await?)
    }

    pub async fn save_payment(&self, form: &PaymentForm) -> Result<Payment, ClientError> {
        let payload = form.to_payload();
        let resp = match form.id {
            Some(id) => {
                self.http
                    .put(self.endpoint(&format!("payments/{id}"))?)
                    .json(&payload)
                    .send()
                    .await?
            }
            None => {
                self.http
                    .post(self.endpoint("payments")?)
                    .json(&payload)
                    .send()
                    .await?
            }
        };
        Ok(Self::check(resp)?.json().await?)
    }

    pub async fn delete_account(&self, id: i64) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("accounts/{id}"))?)
            .send()
            .await?;
        Self::check(resp)?;
        Ok(())
    }

    pub async fn delete_payment(&self, id: i64) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&format!("payments/{id}"))?)
            .send()
            .await?;
        Self::check(resp)?;
        Ok(())
    }
}
