// --- File: crates/consultify_common/src/lib.rs ---
//! Shared building blocks for the Consultify crates: the common error
//! taxonomy, tracing initialization, and small domain utilities.

pub mod error;
pub mod logging;
pub mod phone;

pub use error::{
    config_error, conflict, internal_error, not_found, validation_error, ConsultifyError,
    HttpStatusCode,
};
pub use phone::format_phone_number;
