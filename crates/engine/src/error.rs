//! The module contains the errors the engine can return.
//!
//! Balance aggregation and settlement matching never fail: the errors below
//! come from parsing amounts and from validating a snapshot before it is handed
//! to the engine.
//!
//! - [`InvalidAmount`] thrown when an amount cannot be parsed or is too small.
//! - [`InvalidExpense`] thrown when participants or payer are inconsistent.
//! - [`KeyNotFound`] thrown when an expense references an unknown person.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidExpense`]: EngineError::InvalidExpense
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid person: {0}")]
    InvalidPerson(String),
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Owner mismatch: {0}")]
    OwnerMismatch(String),
}
