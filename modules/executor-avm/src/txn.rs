use core::fmt;

use crate::error::AvmError;
use crate::types::{Address, AppId, AssetId};

/// Action an application call performs on completion.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnComplete {
    #[default]
    NoOp = 0,
    OptIn = 1,
    CloseOut = 2,
    ClearState = 3,
    UpdateApplication = 4,
    DeleteApplication = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnType {
    Payment,
    AssetTransfer,
    ApplicationCall,
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TxnType::Payment => "pay",
            TxnType::AssetTransfer => "axfer",
            TxnType::ApplicationCall => "appl",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTxn {
    pub sender: Address,
    pub receiver: Address,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTransferTxn {
    pub sender: Address,
    pub asset_receiver: Address,
    pub xfer_asset: AssetId,
    pub asset_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppCallTxn {
    pub sender: Address,
    pub app_id: AppId,
    pub on_completion: OnComplete,
    pub app_args: Vec<Vec<u8>>,
    /// Logs the call produced, in order. The last one carries an ABI return.
    pub logs: Vec<Vec<u8>>,
}

impl AppCallTxn {
    pub fn app_arg(&self, index: usize) -> Result<&[u8], AvmError> {
        self.app_args
            .get(index)
            .map(Vec::as_slice)
            .ok_or(AvmError::MissingAppArg(index))
    }

    pub fn last_log(&self) -> Result<&[u8], AvmError> {
        self.logs.last().map(Vec::as_slice).ok_or(AvmError::NoLogs)
    }
}

/// One transaction of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Payment(PaymentTxn),
    AssetTransfer(AssetTransferTxn),
    ApplicationCall(AppCallTxn),
}

impl Transaction {
    pub fn txn_type(&self) -> TxnType {
        match self {
            Transaction::Payment(_) => TxnType::Payment,
            Transaction::AssetTransfer(_) => TxnType::AssetTransfer,
            Transaction::ApplicationCall(_) => TxnType::ApplicationCall,
        }
    }

    pub fn sender(&self) -> Address {
        match self {
            Transaction::Payment(txn) => txn.sender,
            Transaction::AssetTransfer(txn) => txn.sender,
            Transaction::ApplicationCall(txn) => txn.sender,
        }
    }

    pub fn as_payment(&self) -> Result<&PaymentTxn, AvmError> {
        match self {
            Transaction::Payment(txn) => Ok(txn),
            other => Err(other.type_mismatch(TxnType::Payment)),
        }
    }

    pub fn as_asset_transfer(&self) -> Result<&AssetTransferTxn, AvmError> {
        match self {
            Transaction::AssetTransfer(txn) => Ok(txn),
            other => Err(other.type_mismatch(TxnType::AssetTransfer)),
        }
    }

    pub fn as_app_call(&self) -> Result<&AppCallTxn, AvmError> {
        match self {
            Transaction::ApplicationCall(txn) => Ok(txn),
            other => Err(other.type_mismatch(TxnType::ApplicationCall)),
        }
    }

    fn type_mismatch(&self, expected: TxnType) -> AvmError {
        AvmError::WrongTransactionType {
            expected,
            found: self.txn_type(),
        }
    }
}

impl From<PaymentTxn> for Transaction {
    fn from(txn: PaymentTxn) -> Self {
        Transaction::Payment(txn)
    }
}

impl From<AssetTransferTxn> for Transaction {
    fn from(txn: AssetTransferTxn) -> Self {
        Transaction::AssetTransfer(txn)
    }
}

impl From<AppCallTxn> for Transaction {
    fn from(txn: AppCallTxn) -> Self {
        Transaction::ApplicationCall(txn)
    }
}
