//! List views: one fetch-and-render state machine shared by the list and
//! detail contexts, with the per-item presentation injected as a closure.

use crate::client::api::ClientError;
use crate::db::models::{Account, PaymentWithAccount};
use tracing::error;

pub const NO_ACCOUNTS: &str = "No accounts registered.";
pub const NO_PAYMENTS: &str = "No Payments registered.";
pub const LOAD_ACCOUNTS_FAILED: &str = "Failed to load accounts";
pub const LOAD_PAYMENTS_FAILED: &str = "Failed to load Payments";

/// Accounts display alphabetically by name.
pub fn sort_accounts(mut accounts: Vec<Account>) -> Vec<Account> {
    accounts.sort_by(|a, b| a.name.cmp(&b.name));
    accounts
}

/// Payments display in ascending id order.
pub fn sort_payments(mut payments: Vec<PaymentWithAccount>) -> Vec<PaymentWithAccount> {
    payments.sort_by_key(|p| p.payment.id);
    payments
}

/// The four mutually exclusive visual states of a fetched list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Loading,
    Error(String),
    Empty(&'static str),
    Populated(Vec<T>),
}

impl<T> ListView<T> {
    pub fn loading() -> Self {
        ListView::Loading
    }

    /// Resolve a fetch result into the matching state. Failures are logged
    /// and collapsed into the single on-screen message; an empty result is
    /// not an error.
    pub fn from_fetch(
        result: Result<Vec<T>, ClientError>,
        empty_text: &'static str,
        error_text: &str,
    ) -> Self {
        match result {
            Ok(items) if items.is_empty() => ListView::Empty(empty_text),
            Ok(items) => ListView::Populated(items),
            Err(e) => {
                error!(error = %e, "list fetch failed");
                ListView::Error(error_text.to_string())
            }
        }
    }

    /// Render to display lines using the injected per-item formatter.
    pub fn render(&self, render_item: impl Fn(&T) -> String) -> Vec<String> {
        match self {
            ListView::Loading => vec!["Loading...".to_string()],
            ListView::Error(message) => vec![message.clone()],
            ListView::Empty(placeholder) => vec![placeholder.to_string()],
            ListView::Populated(items) => items.iter().map(render_item).collect(),
        }
    }
}

/// Default one-line account rendering: name, then the optional details
/// joined with a separator, mirroring the original list item.
pub fn account_line(account: &Account) -> String {
    let mut details = vec![account.address.clone(), account.phone_number.clone()];
    if let Some(ban) = account.bank_account_number {
        details.push(format!("Bank Acc: {ban}"));
    }
    format!("{} | {}", account.name, details.join(" * "))
}

pub fn payment_line(entry: &PaymentWithAccount) -> String {
    let p = &entry.payment;
    format!(
        "#{} {} -> {} ({}) [{}]",
        p.id,
        entry.account.name,
        p.recipient_name,
        p.amount,
        p.status.label()
    )
}
