//! NTT Manager with Token Payment Executor.
//!
//! Same checks as the native integration, but the executor is paid with an
//! asset transfer that is forwarded to the Token Payment Executor.

use executor_avm::{
    load_state, method_selector, store_state, AppDirectory, AppId, AssetTransferTxn, AvmError,
    CallContext, Transaction,
};
use token_payment_executor::{
    TokenPaymentExecutorApp, REQUEST_EXECUTION_WITH_TOKEN_PAYMENT_SIGNATURE,
};
use tracing::info;

use crate::error::TransferError;
use crate::group::TransferGroup;
use crate::manager::TransferManager;
use crate::state::Config;
use crate::{ntt_request_args, ExecutorArgs, FeeArgs};

pub const EXECUTOR_VERSION: &str = "NttManagerWithTokenPaymentExecutor-0.0.1";

pub struct NttManagerWithTokenPaymentExecutor<T, D> {
    app_id: AppId,
    config: Config,
    executor: T,
    directory: D,
}

impl<T: TokenPaymentExecutorApp, D: AppDirectory> NttManagerWithTokenPaymentExecutor<T, D> {
    pub fn create(app_id: AppId, our_chain: u16, executor: T, directory: D) -> Self {
        Self {
            app_id,
            config: Config::new(our_chain, executor.app_id()),
            executor,
            directory,
        }
    }

    pub fn load(app_id: AppId, state: &[u8], executor: T, directory: D) -> Result<Self, AvmError> {
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
    /// where `pay_executor` is an asset transfer.
    pub fn transfer<M: TransferManager>(
        &self,
        ctx: &mut CallContext<'_>,
        manager: &M,
        group: &[Transaction],
        amount: u64,
        executor_args: &ExecutorArgs,
        fee_args: &FeeArgs,
    ) -> Result<(), TransferError> {
        let group = TransferGroup::<AssetTransferTxn>::from_transactions(group)?;
        let transfer = group.validate(ctx, amount, fee_args)?;

        let executor_app = self.config.executor();
        let executor_address = self
            .directory
            .app_address(executor_app)
            .ok_or(TransferError::ExecutorAddressUnknown)?;
        let args = ntt_request_args(ctx, manager, self.config.our_chain, &transfer, executor_args)?;

        let asset = group.pay_executor.xfer_asset;
        let amount = group.pay_executor.asset_amount;
        ctx.transfer_asset(asset, executor_address, amount);
        let executor = &self.executor;
        let selector = method_selector(REQUEST_EXECUTION_WITH_TOKEN_PAYMENT_SIGNATURE);
        ctx.call(executor_app, selector, |inner| {
            let payment = AssetTransferTxn {
                sender: inner.sender(),
                asset_receiver: executor_address,
                xfer_asset: asset,
                asset_amount: amount,
            };
            executor.request_execution_with_token_payment(inner, &payment, &args)
        })?;
        info!(
            manager = %transfer.manager,
            recipient_chain = transfer.recipient_chain,
            asset = asset.0,
            "transfer relayed through token payment executor"
        );

        Ok(())
    }
}
