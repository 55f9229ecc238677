//! Console client: the counterpart of the original browser frontend.
//!
//! Layout:
//! - `api.rs`: HTTP client over the registry's JSON surface
//! - `forms.rs`: write forms with client-side validation
//! - `views.rs`: list-view state machine with injectable item rendering
//! - `pages.rs`: per-page UI state (selection, dialog, refresh counter)

pub mod api;
pub mod forms;
pub mod pages;
pub mod views;

pub use api::{ApiClient, ClientError};
pub use forms::{AccountForm, PaymentForm};
pub use pages::PageState;
pub use views::ListView;
