//! Typed HTTP client for the notes backend.
//!
//! One async function per server operation, grouped by resource. Every
//! function issues exactly one request and surfaces any failure as an
//! [`ApiError`] carrying the HTTP status and a static per-operation message.

pub mod core;
pub mod generate;
pub mod notes;
pub mod templates;

#[cfg(test)]
mod tests;

pub use core::{ApiError, DeleteAck, API_BASE_URL};
pub use generate::*;
pub use notes::*;
pub use templates::*;
