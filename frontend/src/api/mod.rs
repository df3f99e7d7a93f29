mod auth;
pub mod client;
pub mod error;
mod inquiries;
mod properties;
pub mod types;

pub use client::*;
pub use error::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
