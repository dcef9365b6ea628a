//! Ledger model the executor programs run against.

pub mod abi;
pub mod context;
pub mod directory;
pub mod error;
pub mod state;
pub mod txn;
pub mod types;

pub use abi::{abi_return, btoi, encode_tuple, method_selector, Arc4Value, Event, RETURN_PREFIX};
pub use context::{execute, CallContext, Effects, Env, InnerTxn, Log};
pub use directory::{AppDirectory, Applications};
pub use error::{AvmError, ErrorCategory};
pub use state::{load_state, store_state, Discriminator};
pub use txn::{AppCallTxn, AssetTransferTxn, OnComplete, PaymentTxn, Transaction, TxnType};
pub use types::{application_address, Address, AppId, AssetId};
