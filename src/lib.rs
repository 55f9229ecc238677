pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use db::RegistryStorage;
pub use error::ApiError;
