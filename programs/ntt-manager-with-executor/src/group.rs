//! Transactions a transfer is submitted with, and the checks tying them
//! together.

use executor_avm::{
    btoi, method_selector, Address, AppCallTxn, AppId, AssetTransferTxn, AvmError, CallContext,
    OnComplete, PaymentTxn, Transaction, RETURN_PREFIX,
};
use executor_requests::calculate_fee;
use tracing::debug;

use crate::error::TransferError;
use crate::manager::{
    NTT_TRANSFER_FULL_SIGNATURE, NTT_TRANSFER_SIGNATURE, TRANSFER_AMOUNT_ARG,
    TRANSFER_RECIPIENT_CHAIN_ARG,
};
use crate::FeeArgs;

/// Transaction type the executor is paid with.
pub trait ExecutorPayment {
    fn from_transaction(txn: &Transaction) -> Result<&Self, AvmError>;
    fn sender(&self) -> Address;
    fn receiver(&self) -> Address;
}

impl ExecutorPayment for PaymentTxn {
    fn from_transaction(txn: &Transaction) -> Result<&Self, AvmError> {
        txn.as_payment()
    }

    fn sender(&self) -> Address {
        self.sender
    }

    fn receiver(&self) -> Address {
        self.receiver
    }
}

impl ExecutorPayment for AssetTransferTxn {
    fn from_transaction(txn: &Transaction) -> Result<&Self, AvmError> {
        txn.as_asset_transfer()
    }

    fn sender(&self) -> Address {
        self.sender
    }

    fn receiver(&self) -> Address {
        self.asset_receiver
    }
}

/// The transfer group: the token sent to the manager, the manager's transfer
/// call, the executor payment and the referrer fee.
#[derive(Debug)]
pub struct TransferGroup<'a, P> {
    /// Checked by the transfer call itself
    pub ntt_send_token: &'a AssetTransferTxn,
    pub ntt_transfer: &'a AppCallTxn,
    pub pay_executor: &'a P,
    pub pay_referrer: &'a AssetTransferTxn,
}

/// What a checked transfer group commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub manager: AppId,
    pub message_id: [u8; 32],
    pub recipient_chain: u16,
}

impl<'a, P: ExecutorPayment> TransferGroup<'a, P> {
    pub const SIZE: usize = 4;

    pub fn from_transactions(txns: &'a [Transaction]) -> Result<Self, AvmError> {
        let [ntt_send_token, ntt_transfer, pay_executor, pay_referrer] = txns else {
            return Err(AvmError::GroupSize {
                expected: Self::SIZE,
                found: txns.len(),
            });
        };
        Ok(Self {
            ntt_send_token: ntt_send_token.as_asset_transfer()?,
            ntt_transfer: ntt_transfer.as_app_call()?,
            pay_executor: P::from_transaction(pay_executor)?,
            pay_referrer: pay_referrer.as_asset_transfer()?,
        })
    }

    /// Checks the group against the caller and the referrer fee. `amount`
    /// is the total sent: the referrer fee plus the amount transferred.
    pub fn validate(
        &self,
        ctx: &CallContext<'_>,
        amount: u64,
        fee_args: &FeeArgs,
    ) -> Result<ValidatedTransfer, TransferError> {
        let ntt_transfer = self.ntt_transfer;
        if ntt_transfer.on_completion != OnComplete::NoOp {
            return Err(TransferError::IncorrectOnCompletion);
        }
        let method = ntt_transfer.app_arg(0)?;
        if method != method_selector(NTT_TRANSFER_SIGNATURE).as_slice()
            && method != method_selector(NTT_TRANSFER_FULL_SIGNATURE).as_slice()
        {
            return Err(TransferError::IncorrectMethod);
        }
        let message_id = message_id(ntt_transfer.last_log()?)?;
        let recipient_chain = u16::try_from(btoi(
            ntt_transfer.app_arg(TRANSFER_RECIPIENT_CHAIN_ARG)?,
        )?)
        .map_err(|_| TransferError::RecipientChainOutOfRange)?;

        // executor payment is forwarded, amount is not checked
        if self.pay_executor.sender() != ctx.sender() {
            return Err(TransferError::PayExecutorSenderMismatch);
        }
        if self.pay_executor.receiver() != ctx.app_address() {
            return Err(TransferError::PayExecutorReceiverMismatch);
        }

        let pay_referrer = self.pay_referrer;
        if pay_referrer.xfer_asset != self.ntt_send_token.xfer_asset {
            return Err(TransferError::PayReferrerAssetMismatch);
        }
        if pay_referrer.sender != self.ntt_send_token.sender {
            return Err(TransferError::PayReferrerSenderMismatch);
        }
        if pay_referrer.asset_receiver != fee_args.payee {
            return Err(TransferError::PayReferrerReceiverMismatch);
        }

        let referrer_fee = calculate_fee(amount, fee_args.dbps);
        if pay_referrer.asset_amount != referrer_fee {
            return Err(TransferError::IncorrectReferrerAmount);
        }
        // fee never exceeds amount as dbps < 100_000
        if btoi(ntt_transfer.app_arg(TRANSFER_AMOUNT_ARG)?)? != amount - referrer_fee {
            return Err(TransferError::IncorrectTransferAmount);
        }
        debug!(
            amount,
            referrer_fee,
            recipient_chain,
            "transfer group accepted"
        );

        Ok(ValidatedTransfer {
            manager: ntt_transfer.app_id,
            message_id,
            recipient_chain,
        })
    }
}

/// Extracts the message id from the transfer call's ABI return log.
fn message_id(log: &[u8]) -> Result<[u8; 32], TransferError> {
    let value = log
        .strip_prefix(RETURN_PREFIX.as_slice())
        .ok_or(TransferError::MissingMessageId)?;
    value.try_into().map_err(|_| TransferError::MissingMessageId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use executor_avm::abi_return;

    #[test]
    fn test_message_id() {
        assert_eq!(message_id(&abi_return(&[0x07; 32])), Ok([0x07; 32]));
        assert_eq!(
            message_id(&[0x07; 36]),
            Err(TransferError::MissingMessageId)
        );
        assert_eq!(
            message_id(&abi_return(&[0x07; 31])),
            Err(TransferError::MissingMessageId)
        );
        assert_eq!(message_id(&RETURN_PREFIX), Err(TransferError::MissingMessageId));
    }

    #[test]
    fn test_group_slot_types() {
        let sender = Address([1; 32]);
        let axfer = Transaction::from(AssetTransferTxn {
            sender,
            asset_receiver: sender,
            xfer_asset: executor_avm::AssetId(1),
            asset_amount: 0,
        });
        let appl = Transaction::from(AppCallTxn::default());
        let pay = Transaction::from(PaymentTxn {
            sender,
            receiver: sender,
            amount: 0,
        });

        let native = [axfer.clone(), appl.clone(), pay.clone(), axfer.clone()];
        assert!(TransferGroup::<PaymentTxn>::from_transactions(&native).is_ok());
        assert_eq!(
            TransferGroup::<AssetTransferTxn>::from_transactions(&native)
                .err()
                .map(|e| e.to_string()),
            Some("transaction type is axfer".to_string())
        );
        assert_eq!(
            TransferGroup::<PaymentTxn>::from_transactions(&native[..3])
                .err()
                .map(|e| e.to_string()),
            Some("invalid group size: expected 4 transactions, got 3".to_string())
        );

        let swapped = [appl, axfer.clone(), pay, axfer];
        assert_eq!(
            TransferGroup::<PaymentTxn>::from_transactions(&swapped)
                .err()
                .map(|e| e.to_string()),
            Some("transaction type is axfer".to_string())
        );
    }
}
