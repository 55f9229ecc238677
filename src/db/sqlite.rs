use crate::db::models::{Account, AccountName, Payment, PaymentStatus, PaymentWithAccount};
use crate::db::schema::SQLITE_INIT;
use crate::error::{is_fk_violation, ApiError};
use crate::types::params::{AccountPatch, ListQuery, NewAccount, NewPayment, PaymentPatch, SortField};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the database behind `database_url`, run the
/// bundled DDL and hand back a ready storage. Foreign keys are enforced on
/// every connection; the delete policies in the schema depend on it.
pub async fn connect(database_url: &str) -> Result<RegistryStorage, ApiError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    let storage = RegistryStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

const ACCOUNT_COLUMNS: &str = "id, name, address, phone_number, bank_account_number";
const PAYMENT_COLUMNS: &str = "id, account_id, amount, recipient_name, recipient_bank, \
     recipient_ban, status, notes, created_at";

#[derive(Clone)]
pub struct RegistryStorage {
    pool: SqlitePool,
}

impl RegistryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ----- accounts -----

    /// Fetch one account. An absent id is an error here; contrast with
    /// `get_payment`, which reports absence as `Ok(None)`.
    pub async fn get_account(&self, id: i64) -> Result<Account, ApiError> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        match row {
            Some(row) => Self::account_from_row(row),
            None => Err(ApiError::not_found("account", id)),
        }
    }

    pub async fn list_accounts(&self, params: &ListQuery) -> Result<Vec<Account>, ApiError> {
        let mut sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE 1=1");
        if params.cursor.is_some() {
            sql.push_str(" AND id >= ?");
        }
        if params.name.is_some() {
            sql.push_str(" AND name LIKE ?");
        }
        let column = match params.sort {
            SortField::Id => "id",
            SortField::Name => "name",
        };
        sql.push_str(&format!(
            " ORDER BY {column} {} LIMIT ? OFFSET ?",
            params.dir.sql()
        ));

        let mut query = sqlx::query(&sql);
        if let Some(cursor) = params.cursor {
            query = query.bind(cursor);
        }
        if let Some(name) = &params.name {
            query = query.bind(format!("%{name}%"));
        }
        // LIMIT -1 means "no limit" in SQLite; OFFSET still applies.
        query = query.bind(params.take.unwrap_or(-1)).bind(params.skip.unwrap_or(0));

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::account_from_row).collect()
    }

    pub async fn create_account(&self, data: &NewAccount) -> Result<Account, ApiError> {
        let result = sqlx::query(
            "INSERT INTO accounts (name, address, phone_number, bank_account_number) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone_number)
        .bind(data.bank_account_number)
        .execute(&self.pool)
        .await?;
        self.get_account(result.last_insert_rowid()).await
    }

    /// Read-merge-write partial update. Returns the updated row; NotFound
    /// when the id does not exist.
    pub async fn update_account(&self, id: i64, patch: &AccountPatch) -> Result<Account, ApiError> {
        let mut account = self.get_account(id).await?;
        if let Some(name) = &patch.name {
            account.name = name.clone();
        }
        if let Some(address) = &patch.address {
            account.address = address.clone();
        }
        if let Some(phone_number) = &patch.phone_number {
            account.phone_number = phone_number.clone();
        }
        if let Some(ban) = patch.bank_account_number {
            account.bank_account_number = Some(ban);
        }

        sqlx::query(
            "UPDATE accounts SET name = ?, address = ?, phone_number = ?, \
             bank_account_number = ? WHERE id = ?",
        )
        .bind(&account.name)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.bank_account_number)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(account)
    }

    /// Delete an account and return the deleted row. Fails with
    /// `AccountInUse` while payments still reference it (RESTRICT policy).
    pub async fn delete_account(&self, id: i64) -> Result<Account, ApiError> {
        let account = self.get_account(id).await?;
        sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_fk_violation(&e) {
                    ApiError::AccountInUse(id)
                } else {
                    ApiError::Database(e)
                }
            })?;
        Ok(account)
    }

    // ----- payments -----

    /// Fetch one payment; absence is `Ok(None)`, not an error.
    pub async fn get_payment(&self, id: i64) -> Result<Option<Payment>, ApiError> {
        let sql = format!("SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(Self::payment_from_row).transpose()
    }

    /// List payments with the owning account's name joined in.
    pub async fn list_payments(
        &self,
        params: &ListQuery,
    ) -> Result<Vec<PaymentWithAccount>, ApiError> {
        let mut sql = String::from(
            "SELECT p.id, p.account_id, p.amount, p.recipient_name, p.recipient_bank, \
             p.recipient_ban, p.status, p.notes, p.created_at, a.name AS account_name \
             FROM payments p JOIN accounts a ON a.id = p.account_id WHERE 1=1",
        );
        if params.cursor.is_some() {
            sql.push_str(" AND p.id >= ?");
        }
        if params.account_id.is_some() {
            sql.push_str(" AND p.account_id = ?");
        }
        let column = match params.sort {
            SortField::Id => "p.id",
            SortField::Name => "a.name",
        };
        sql.push_str(&format!(
            " ORDER BY {column} {} LIMIT ? OFFSET ?",
            params.dir.sql()
        ));

        let mut query = sqlx::query(&sql);
        if let Some(cursor) = params.cursor {
            query = query.bind(cursor);
        }
        if let Some(account_id) = params.account_id {
            query = query.bind(account_id);
        }
        query = query.bind(params.take.unwrap_or(-1)).bind(params.skip.unwrap_or(0));

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|row| {
                let name: String = row.try_get("account_name")?;
                Ok(PaymentWithAccount {
                    payment: Self::payment_from_row(row)?,
                    account: AccountName { name },
                })
            })
            .collect()
    }

    /// All payments owned by one account, oldest first. Used by the
    /// account detail view; no join needed.
    pub async fn payments_for_account(&self, account_id: i64) -> Result<Vec<Payment>, ApiError> {
        let sql =
            format!("SELECT {PAYMENT_COLUMNS} FROM payments WHERE account_id = ? ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(account_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::payment_from_row).collect()
    }

    /// Create a payment. `created_at` is assigned here; a dead `account_id`
    /// trips the foreign-key constraint and maps to `MissingAccount`.
    pub async fn create_payment(&self, data: &NewPayment) -> Result<Payment, ApiError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO payments (account_id, amount, recipient_name, recipient_bank, \
             recipient_ban, status, notes, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(data.account_id)
        .bind(data.amount.to_string())
        .bind(&data.recipient_name)
        .bind(&data.recipient_bank)
        .bind(data.recipient_ban)
        .bind(data.status.code())
        .bind(&data.notes)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_fk_violation(&e) {
                ApiError::MissingAccount(data.account_id)
            } else {
                ApiError::Database(e)
            }
        })?;

        let id = result.last_insert_rowid();
        self.get_payment(id)
            .await?
            .ok_or(ApiError::not_found("payment", id))
    }

    pub async fn update_payment(&self, id: i64, patch: &PaymentPatch) -> Result<Payment, ApiError> {
        let mut payment = self
            .get_payment(id)
            .await?
            .ok_or(ApiError::not_found("payment", id))?;
        if let Some(account_id) = patch.account_id {
            payment.account_id = account_id;
        }
        if let Some(amount) = patch.amount {
            payment.amount = amount;
        }
        if let Some(recipient_name) = &patch.recipient_name {
            payment.recipient_name = recipient_name.clone();
        }
        if let Some(recipient_bank) = &patch.recipient_bank {
            payment.recipient_bank = recipient_bank.clone();
        }
        if let Some(recipient_ban) = patch.recipient_ban {
            payment.recipient_ban = recipient_ban;
        }
        if let Some(status) = patch.status {
            payment.status = status;
        }
        if let Some(notes) = &patch.notes {
            payment.notes = Some(notes.clone());
        }

        sqlx::query(
            "UPDATE payments SET account_id = ?, amount = ?, recipient_name = ?, \
             recipient_bank = ?, recipient_ban = ?, status = ?, notes = ? WHERE id = ?",
        )
        .bind(payment.account_id)
        .bind(payment.amount.to_string())
        .bind(&payment.recipient_name)
        .bind(&payment.recipient_bank)
        .bind(payment.recipient_ban)
        .bind(payment.status.code())
        .bind(&payment.notes)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_fk_violation(&e) {
                ApiError::MissingAccount(payment.account_id)
            } else {
                ApiError::Database(e)
            }
        })?;
        Ok(payment)
    }

    pub async fn delete_payment(&self, id: i64) -> Result<Payment, ApiError> {
        let payment = self
            .get_payment(id)
            .await?
            .ok_or(ApiError::not_found("payment", id))?;
        sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(payment)
    }

    // ----- row decoding -----

    fn account_from_row(row: SqliteRow) -> Result<Account, ApiError> {
        Ok(Account {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone_number: row.try_get("phone_number")?,
            bank_account_number: row.try_get("bank_account_number")?,
        })
    }

    fn payment_from_row(row: SqliteRow) -> Result<Payment, ApiError> {
        let amount_str: String = row.try_get("amount")?;
        let amount = Decimal::from_str(&amount_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        let status_code: i64 = row.try_get("status")?;
        let status = PaymentStatus::try_from(status_code)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Payment {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            amount,
            recipient_name: row.try_get("recipient_name")?,
            recipient_bank: row.try_get("recipient_bank")?,
            recipient_ban: row.try_get("recipient_ban")?,
            status,
            notes: row.try_get("notes")?,
            created_at,
        })
    }
}
