use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// A registered account that owns payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub bank_account_number: Option<i64>,
}

/// Account with its payments attached, as returned by `GET /accounts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountWithPayments {
    #[serde(flatten)]
    pub account: Account,
    pub payments: Vec<Payment>,
}

/// Lifecycle state of a payment. Stored and transmitted as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending = 1,
    Approved = 2,
    Cancelled = 3,
}

#[derive(Debug, ThisError)]
#[error("invalid payment status code: {0}")]
pub struct InvalidStatusCode(pub i64);

impl PaymentStatus {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Approved => "Approved",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }
}

impl TryFrom<i64> for PaymentStatus {
    type Error = InvalidStatusCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PaymentStatus::Pending),
            2 => Ok(PaymentStatus::Approved),
            3 => Ok(PaymentStatus::Cancelled),
            other => Err(InvalidStatusCode(other)),
        }
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        PaymentStatus::try_from(code).map_err(D::Error::custom)
    }
}

/// A monetary transfer tied to exactly one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub account_id: i64,
    pub amount: Decimal,
    pub recipient_name: String,
    pub recipient_bank: String,
    #[serde(rename = "recipientBAN")]
    pub recipient_ban: i64,
    pub status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payment joined with the owning account's name, for list displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentWithAccount {
    #[serde(flatten)]
    pub payment: Payment,
    pub account: AccountName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountName {
    pub name: String,
}
