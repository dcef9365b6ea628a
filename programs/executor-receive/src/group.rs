//! Delivery group layout and the checks run against it.
//!
//! A delivery is five transactions in a fixed order:
//!
//! | slot | transaction  | type |
//! |------|--------------|------|
//! | 0    | gas          | pay  |
//! | 1    | verify_sigs  | appl |
//! | 2    | verify_vaa   | appl |
//! | 3    | receive      | appl |
//! | 4    | gas_drop_off | pay  |
//!
//! verify_sigs is required by the verify_vaa call itself, so it is not
//! checked again here. The gas drop-off may carry any amount to any
//! recipient.

use executor_avm::{
    AppCallTxn, AppDirectory, AvmError, OnComplete, PaymentTxn, Transaction,
};
use tracing::debug;

use crate::error::ReceiveError;

/// A delivery group with every slot checked for its transaction type.
#[derive(Debug, Clone, Copy)]
pub struct ReceiveGroup<'a> {
    pub gas: &'a PaymentTxn,
    pub verify_sigs: &'a AppCallTxn,
    pub verify_vaa: &'a AppCallTxn,
    pub receive: &'a AppCallTxn,
    pub gas_drop_off: &'a PaymentTxn,
}

impl<'a> ReceiveGroup<'a> {
    pub const SIZE: usize = 5;

    pub fn from_transactions(txns: &'a [Transaction]) -> Result<Self, AvmError> {
        let [gas, verify_sigs, verify_vaa, receive, gas_drop_off] = txns else {
            return Err(AvmError::GroupSize {
                expected: Self::SIZE,
                found: txns.len(),
            });
        };
        Ok(Self {
            gas: gas.as_payment()?,
            verify_sigs: verify_sigs.as_app_call()?,
            verify_vaa: verify_vaa.as_app_call()?,
            receive: receive.as_app_call()?,
            gas_drop_off: gas_drop_off.as_payment()?,
        })
    }
}

/// One independent check over a typed delivery group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCheck {
    /// Gas payment goes to the account of the application being called.
    GasFundsReceiver,
    /// Receive call performs no lifecycle action.
    ReceiveIsNoOp,
    /// Receive call invokes the expected method.
    ReceiveMethod,
}

impl SlotCheck {
    /// Checks in the order they run.
    pub const ALL: [SlotCheck; 3] = [
        SlotCheck::GasFundsReceiver,
        SlotCheck::ReceiveIsNoOp,
        SlotCheck::ReceiveMethod,
    ];

    pub fn check<D: AppDirectory>(
        &self,
        group: &ReceiveGroup<'_>,
        selector: [u8; 4],
        directory: &D,
    ) -> Result<(), ReceiveError> {
        match self {
            SlotCheck::GasFundsReceiver => {
                let contract_address = directory
                    .app_address(group.receive.app_id)
                    .ok_or(ReceiveError::ContractAddressUnknown)?;
                if group.gas.receiver != contract_address {
                    return Err(ReceiveError::GasReceiverUnknown);
                }
            }
            SlotCheck::ReceiveIsNoOp => {
                if group.receive.on_completion != OnComplete::NoOp {
                    return Err(ReceiveError::IncorrectOnCompletion);
                }
            }
            SlotCheck::ReceiveMethod => {
                if group.receive.app_arg(0)? != selector.as_slice() {
                    return Err(ReceiveError::IncorrectMethod);
                }
            }
        }
        Ok(())
    }
}

/// Runs every check in order, stopping at the first failure.
pub fn validate_group<D: AppDirectory>(
    group: &ReceiveGroup<'_>,
    selector: [u8; 4],
    directory: &D,
) -> Result<(), ReceiveError> {
    for check in SlotCheck::ALL {
        check.check(group, selector, directory)?;
        debug!(?check, "slot check passed");
    }
    Ok(())
}
