use executor::ExecutorError;
use executor_avm::{AvmError, ErrorCategory};
use executor_requests::QuoteError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenPaymentExecutorError {
    #[error("{0}")]
    Quote(#[from] QuoteError),
    #[error("Fee txn must be from same sender")]
    FeeSenderMismatch,
    #[error("Unknown fee payment receiver")]
    FeeReceiverMismatch,
    /// Fee asset differs from the token named in the quote
    #[error("Unknown asset id")]
    UnknownAsset,
    #[error("Executor address unknown")]
    ExecutorAddressUnknown,
    /// The nested request to the Executor failed
    #[error(transparent)]
    Executor(#[from] ExecutorError),
    #[error(transparent)]
    Avm(#[from] AvmError),
}

impl TokenPaymentExecutorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TokenPaymentExecutorError::Quote(_) | TokenPaymentExecutorError::UnknownAsset => {
                ErrorCategory::Validation
            }
            TokenPaymentExecutorError::FeeSenderMismatch
            | TokenPaymentExecutorError::FeeReceiverMismatch => ErrorCategory::Authorization,
            TokenPaymentExecutorError::ExecutorAddressUnknown => ErrorCategory::Configuration,
            TokenPaymentExecutorError::Executor(e) => e.category(),
            TokenPaymentExecutorError::Avm(e) => e.category(),
        }
    }
}
