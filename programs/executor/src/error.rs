use executor_avm::{AvmError, ErrorCategory};
use executor_requests::QuoteError;
use thiserror::Error;

/// Abort reasons of the Executor program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    /// Quote failed to parse or validate
    #[error("{0}")]
    Quote(#[from] QuoteError),
    /// Fee payment was not sent by the caller
    #[error("Fee txn must be from same sender")]
    FeeSenderMismatch,
    /// Fee payment was not sent to this application
    #[error("Unknown fee payment receiver")]
    FeeReceiverMismatch,
    #[error(transparent)]
    Avm(#[from] AvmError),
}

impl ExecutorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExecutorError::Quote(_) => ErrorCategory::Validation,
            ExecutorError::FeeSenderMismatch | ExecutorError::FeeReceiverMismatch => {
                ErrorCategory::Authorization
            }
            ExecutorError::Avm(e) => e.category(),
        }
    }
}
