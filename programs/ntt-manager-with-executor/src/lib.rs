//! NTT Manager with Executor.
//!
//! Wraps a transfer manager's `transfer` call: checks the referrer fee paid
//! alongside it, looks up the manager's peer on the recipient chain and asks
//! the Executor to relay the transfer message there.

use executor::{Executor, ExecutorApp, RequestForExecutionArgs};
use executor_avm::{
    load_state, method_selector, store_state, Address, AppDirectory, AppId, AvmError,
    CallContext, PaymentTxn, Transaction,
};
use executor_requests::{bytes32_from_u64, make_ntt_v1_request};
use tracing::info;

pub mod error;
pub mod group;
pub mod manager;
pub mod state;
pub mod token;

pub use error::TransferError;
pub use group::{ExecutorPayment, TransferGroup, ValidatedTransfer};
pub use manager::{NttManagerPeer, TransferManager};
pub use state::Config;
pub use token::NttManagerWithTokenPaymentExecutor;

pub const EXECUTOR_VERSION: &str = "NttManagerWithExecutor-0.0.1";

/// Arguments passed through to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorArgs {
    pub refund_address: Address,
    pub signed_quote_bytes: Vec<u8>,
    pub relay_instructions: Vec<u8>,
}

/// Referrer fee terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeArgs {
    /// The fee in tenths of basis points.
    pub dbps: u16,
    /// To whom the fee should be paid (the "referrer").
    pub payee: Address,
}

pub struct NttManagerWithExecutor<E, D> {
    app_id: AppId,
    config: Config,
    executor: E,
    directory: D,
}

impl<E: ExecutorApp, D: AppDirectory> NttManagerWithExecutor<E, D> {
    pub fn create(app_id: AppId, our_chain: u16, executor: E, directory: D) -> Self {
        Self {
            app_id,
            config: Config::new(our_chain, executor.app_id()),
            executor,
            directory,
        }
    }

    pub fn load(app_id: AppId, state: &[u8], executor: E, directory: D) -> Result<Self, AvmError> {
        let config = load_state::<Config>(state)?;
        if config.executor() != executor.app_id() {
            return Err(AvmError::UnknownApplication(executor.app_id()));
        }
        Ok(Self {
            app_id,
            config,
            executor,
            directory,
        })
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    pub fn state(&self) -> Vec<u8> {
        store_state(&self.config)
    }

    pub fn our_chain(&self) -> u16 {
        self.config.our_chain
    }

    pub fn executor(&self) -> AppId {
        self.config.executor()
    }

    /// Transfers `amount` (referrer fee included) to the recipient chain.
    ///
    /// `group` is `[ntt_send_token, ntt_transfer, pay_executor, pay_referrer]`
    /// and `manager` the transfer manager `ntt_transfer` calls.
    pub fn transfer<M: TransferManager>(
        &self,
        ctx: &mut CallContext<'_>,
        manager: &M,
        group: &[Transaction],
        amount: u64,
        executor_args: &ExecutorArgs,
        fee_args: &FeeArgs,
    ) -> Result<(), TransferError> {
        let group = TransferGroup::<PaymentTxn>::from_transactions(group)?;
        let transfer = group.validate(ctx, amount, fee_args)?;

        let executor_app = self.config.executor();
        let executor_address = self
            .directory
            .app_address(executor_app)
            .ok_or(TransferError::ExecutorAddressUnknown)?;
        let args = ntt_request_args(ctx, manager, self.config.our_chain, &transfer, executor_args)?;

        let amount = group.pay_executor.amount;
        ctx.pay(executor_address, amount);
        let executor = &self.executor;
        ctx.call(executor_app, Executor::selector(), |inner| {
            let payment = PaymentTxn {
                sender: inner.sender(),
                receiver: executor_address,
                amount,
            };
            executor.request_execution(inner, &payment, &args)
        })?;
        info!(
            manager = %transfer.manager,
            recipient_chain = transfer.recipient_chain,
            "transfer relayed through executor"
        );

        Ok(())
    }
}

/// Looks up the manager's peer and builds the executor request for the
/// transfer message.
pub(crate) fn ntt_request_args<M: TransferManager>(
    ctx: &mut CallContext<'_>,
    manager: &M,
    our_chain: u16,
    transfer: &ValidatedTransfer,
    executor_args: &ExecutorArgs,
) -> Result<RequestForExecutionArgs, TransferError> {
    if manager.app_id() != transfer.manager {
        return Err(AvmError::UnknownApplication(transfer.manager).into());
    }
    let chain = transfer.recipient_chain;
    let selector = method_selector(manager::GET_NTT_MANAGER_PEER_SIGNATURE);
    let peer = ctx.call(transfer.manager, selector, |_| {
        manager
            .get_ntt_manager_peer(chain)
            .ok_or(TransferError::UnknownPeerChain(chain))
    })?;

    let source_manager = bytes32_from_u64(transfer.manager.0);
    Ok(RequestForExecutionArgs {
        dst_chain: chain,
        dst_addr: peer.peer_contract,
        refund_addr: executor_args.refund_address,
        signed_quote_bytes: executor_args.signed_quote_bytes.clone(),
        request_bytes: make_ntt_v1_request(our_chain, source_manager, transfer.message_id),
        relay_instructions: executor_args.relay_instructions.clone(),
    })
}
