//! View-state controller: the explicit state the dashboard renders from and
//! the operator intents that change it.

pub mod controller;
pub mod state;

pub use controller::{Controller, SendReceipt, SENT_NOTICE};
pub use state::{Section, ViewState};
