mod client;
mod types;

pub use client::WhatsAppClient;
pub use types::{DispatchErrorKind, DispatchResult};
