//! SQL DDL for initializing the account/payment registry.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on both tables
/// - `payments.account_id` foreign key with RESTRICT delete policy, so an
///   account cannot disappear while payments still reference it
/// - `amount` stored as TEXT (decimal string, parsed by the row decoder)
/// - `created_at` stored as TEXT (RFC3339)
/// - `status` as INTEGER (1=Pending, 2=Approved, 3=Cancelled)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    bank_account_number INTEGER NULL
);

CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL REFERENCES accounts(id) ON DELETE RESTRICT,
    amount TEXT NOT NULL,
    recipient_name TEXT NOT NULL,
    recipient_bank TEXT NOT NULL,
    recipient_ban INTEGER NOT NULL,
    status INTEGER NOT NULL DEFAULT 1,
    notes TEXT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_payments_account_id ON payments(account_id);
"#;
