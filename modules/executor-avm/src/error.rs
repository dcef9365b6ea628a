use thiserror::Error;

use crate::txn::TxnType;
use crate::types::AppId;

/// Coarse classification of an abort reason.
///
/// Every failure aborts the whole group the same way; the category only
/// matters to logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A configured collaborator cannot be resolved.
    Configuration,
    /// Chain, expiry, selector, layout or amount mismatch.
    Validation,
    /// Sender or receiver identity mismatch.
    Authorization,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvmError {
    #[error("transaction type is {expected}")]
    WrongTransactionType { expected: TxnType, found: TxnType },
    #[error("invalid group size: expected {expected} transactions, got {found}")]
    GroupSize { expected: usize, found: usize },
    #[error("invalid app arg index {0}")]
    MissingAppArg(usize),
    #[error("no logs")]
    NoLogs,
    #[error("btoi arg too long, got {0} bytes")]
    BtoiTooLong(usize),
    #[error("value of {0} bytes exceeds the arc4 length limit")]
    ValueTooLong(usize),
    #[error("application {0} does not exist")]
    UnknownApplication(AppId),
    #[error("invalid application state")]
    InvalidState,
    #[error("invalid application state discriminator")]
    InvalidDiscriminator,
}

impl AvmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AvmError::UnknownApplication(_)
            | AvmError::InvalidState
            | AvmError::InvalidDiscriminator => ErrorCategory::Configuration,
            _ => ErrorCategory::Validation,
        }
    }
}
