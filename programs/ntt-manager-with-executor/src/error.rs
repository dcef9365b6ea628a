use executor::ExecutorError;
use executor_avm::{AvmError, ErrorCategory};
use thiserror::Error;
use token_payment_executor::TokenPaymentExecutorError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Incorrect app on completion")]
    IncorrectOnCompletion,
    #[error("Incorrect method")]
    IncorrectMethod,
    /// Last log of the transfer call is not an ABI return of a message id
    #[error("Incorrect ntt transfer return value")]
    MissingMessageId,
    #[error("Recipient chain out of range")]
    RecipientChainOutOfRange,
    #[error("Pay executor txn must be from same sender")]
    PayExecutorSenderMismatch,
    #[error("Unknown pay executor receiver")]
    PayExecutorReceiverMismatch,
    #[error("Unknown pay referrer asset")]
    PayReferrerAssetMismatch,
    #[error("Pay referrer txn must be from same sender")]
    PayReferrerSenderMismatch,
    #[error("Unknown pay referrer receiver")]
    PayReferrerReceiverMismatch,
    #[error("Incorrect pay referrer amount")]
    IncorrectReferrerAmount,
    #[error("Incorrect ntt transfer amount")]
    IncorrectTransferAmount,
    #[error("Executor address unknown")]
    ExecutorAddressUnknown,
    /// Transfer manager has no peer on the recipient chain
    #[error("Unknown peer chain {0}")]
    UnknownPeerChain(u16),
    #[error(transparent)]
    Executor(#[from] ExecutorError),
    #[error(transparent)]
    TokenPaymentExecutor(#[from] TokenPaymentExecutorError),
    #[error(transparent)]
    Avm(#[from] AvmError),
}

impl TransferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransferError::PayExecutorSenderMismatch
            | TransferError::PayExecutorReceiverMismatch
            | TransferError::PayReferrerSenderMismatch
            | TransferError::PayReferrerReceiverMismatch => ErrorCategory::Authorization,
            TransferError::ExecutorAddressUnknown | TransferError::UnknownPeerChain(_) => {
                ErrorCategory::Configuration
            }
            TransferError::Executor(e) => e.category(),
            TransferError::TokenPaymentExecutor(e) => e.category(),
            TransferError::Avm(e) => e.category(),
            _ => ErrorCategory::Validation,
        }
    }
}
