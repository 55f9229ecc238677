//! Request bodies and query parameters for the HTTP surface.
//! Wire names are camelCase to match the original JSON contract.

use crate::db::models::PaymentStatus;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub bank_account_number: Option<i64>,
}

/// Partial account update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub bank_account_number: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub account_id: i64,
    pub amount: Decimal,
    pub recipient_name: String,
    pub recipient_bank: String,
    #[serde(rename = "recipientBAN")]
    pub recipient_ban: i64,
    pub status: PaymentStatus,
    /// Omitted notes are stored as NULL, not as an empty string.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial payment update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    pub account_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub recipient_name: Option<String>,
    pub recipient_bank: Option<String>,
    #[serde(rename = "recipientBAN")]
    pub recipient_ban: Option<i64>,
    pub status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

/// Pagination/filter/sort parameters shared by both list endpoints.
///
/// `cursor` starts the listing at the row with `id >= cursor`, applied
/// before `skip`/`take`. `name` is a substring filter (accounts only);
/// `account_id` an equality filter (payments only).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub take: Option<i64>,
    pub cursor: Option<i64>,
    pub name: Option<String>,
    pub account_id: Option<i64>,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub dir: SortDir,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}
