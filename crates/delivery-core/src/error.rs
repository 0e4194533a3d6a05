//! Simulator error type.
//!
//! The reference simulation path is infallible: unknown instruction symbols
//! are tolerated as no-op steps.  Errors only arise from the opt-in strict
//! route parser and from out-of-range agent lookups.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for the `delivery-*` crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("unknown instruction symbol {symbol:?} at index {index}")]
    UnknownSymbol { symbol: char, index: usize },

    #[error("agent {0} not found in roster")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `delivery-*` crates.
pub type DeliveryResult<T> = Result<T, DeliveryError>;
