pub mod params;

pub use params::{AccountPatch, ListQuery, NewAccount, NewPayment, PaymentPatch, SortDir, SortField};
