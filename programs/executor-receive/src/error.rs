use executor_avm::{AvmError, ErrorCategory};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiveError {
    /// The receive call targets an application that does not exist
    #[error("Contract address unknown")]
    ContractAddressUnknown,
    /// Gas payment does not fund the receiving application
    #[error("Gas receiver unknown")]
    GasReceiverUnknown,
    #[error("Incorrect app on completion")]
    IncorrectOnCompletion,
    #[error("Incorrect method")]
    IncorrectMethod,
    #[error(transparent)]
    Avm(#[from] AvmError),
}

impl ReceiveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReceiveError::ContractAddressUnknown => ErrorCategory::Configuration,
            ReceiveError::GasReceiverUnknown => ErrorCategory::Authorization,
            ReceiveError::IncorrectOnCompletion | ReceiveError::IncorrectMethod => {
                ErrorCategory::Validation
            }
            ReceiveError::Avm(e) => e.category(),
        }
    }
}
