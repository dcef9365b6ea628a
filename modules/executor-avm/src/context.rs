//! Execution of a single top-level application call.
//!
//! Effects (inner transactions and logs) are buffered while the call runs and
//! only handed back when the call succeeds, so a failed call leaves nothing
//! behind. Nested calls share the buffer and are unwound if they fail.

use tracing::{debug, trace};

use crate::abi::Event;
use crate::error::AvmError;
use crate::txn::{AssetTransferTxn, PaymentTxn};
use crate::types::{application_address, Address, AppId, AssetId};

/// A transaction issued by an application during its execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnerTxn {
    Payment(PaymentTxn),
    AssetTransfer(AssetTransferTxn),
    ApplicationCall {
        sender: Address,
        app_id: AppId,
        selector: [u8; 4],
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub app_id: AppId,
    pub data: Vec<u8>,
}

/// Everything a committed call did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Effects {
    pub inner_txns: Vec<InnerTxn>,
    pub logs: Vec<Log>,
}

impl Effects {
    /// Logs written by `app_id`, in order.
    pub fn logs_of(&self, app_id: AppId) -> impl Iterator<Item = &[u8]> {
        self.logs
            .iter()
            .filter(move |log| log.app_id == app_id)
            .map(|log| log.data.as_slice())
    }

    pub fn payments(&self) -> impl Iterator<Item = &PaymentTxn> {
        self.inner_txns.iter().filter_map(|txn| match txn {
            InnerTxn::Payment(payment) => Some(payment),
            _ => None,
        })
    }

    pub fn asset_transfers(&self) -> impl Iterator<Item = &AssetTransferTxn> {
        self.inner_txns.iter().filter_map(|txn| match txn {
            InnerTxn::AssetTransfer(transfer) => Some(transfer),
            _ => None,
        })
    }
}

/// Ledger values visible to a top-level call.
#[derive(Debug, Clone, Copy)]
pub struct Env {
    /// The application being called.
    pub app_id: AppId,
    /// Sender of the application call transaction.
    pub sender: Address,
    /// Timestamp of the latest committed block.
    pub latest_timestamp: u64,
}

pub struct CallContext<'e> {
    app_id: AppId,
    sender: Address,
    latest_timestamp: u64,
    effects: &'e mut Effects,
}

impl<'e> CallContext<'e> {
    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    /// The account of the executing application.
    pub fn app_address(&self) -> Address {
        application_address(self.app_id)
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn latest_timestamp(&self) -> u64 {
        self.latest_timestamp
    }

    /// Issues a payment from the application account. The inner fee is zero.
    pub fn pay(&mut self, receiver: Address, amount: u64) {
        let payment = PaymentTxn {
            sender: self.app_address(),
            receiver,
            amount,
        };
        trace!(app_id = %self.app_id, amount, "inner payment");
        self.effects.inner_txns.push(InnerTxn::Payment(payment));
    }

    /// Issues an asset transfer from the application account.
    pub fn transfer_asset(&mut self, asset: AssetId, receiver: Address, amount: u64) {
        let transfer = AssetTransferTxn {
            sender: self.app_address(),
            asset_receiver: receiver,
            xfer_asset: asset,
            asset_amount: amount,
        };
        trace!(app_id = %self.app_id, asset = asset.0, amount, "inner asset transfer");
        self.effects.inner_txns.push(InnerTxn::AssetTransfer(transfer));
    }

    pub fn emit<E: Event>(&mut self, event: &E) -> Result<(), AvmError> {
        let data = event.to_log()?;
        self.effects.logs.push(Log {
            app_id: self.app_id,
            data,
        });
        Ok(())
    }

    /// Calls method `selector` of `app_id` with this application as sender.
    ///
    /// Effects of a failed nested call are discarded before the error is
    /// returned.
    pub fn call<T, E>(
        &mut self,
        app_id: AppId,
        selector: [u8; 4],
        f: impl FnOnce(&mut CallContext<'_>) -> Result<T, E>,
    ) -> Result<T, E> {
        let sender = self.app_address();
        let inner_len = self.effects.inner_txns.len();
        let logs_len = self.effects.logs.len();

        debug!(caller = %self.app_id, callee = %app_id, "inner application call");
        self.effects.inner_txns.push(InnerTxn::ApplicationCall {
            sender,
            app_id,
            selector,
        });

        let mut inner = CallContext {
            app_id,
            sender,
            latest_timestamp: self.latest_timestamp,
            effects: &mut *self.effects,
        };
        let result = f(&mut inner);

        if result.is_err() {
            self.effects.inner_txns.truncate(inner_len);
            self.effects.logs.truncate(logs_len);
        }
        result
    }
}

/// Runs one top-level call. Its effects are returned only if it succeeds.
pub fn execute<T, E>(
    env: Env,
    f: impl FnOnce(&mut CallContext<'_>) -> Result<T, E>,
) -> Result<(T, Effects), E> {
    let mut effects = Effects::default();
    let value = {
        let mut ctx = CallContext {
            app_id: env.app_id,
            sender: env.sender,
            latest_timestamp: env.latest_timestamp,
            effects: &mut effects,
        };
        f(&mut ctx)?
    };
    Ok((value, effects))
}
