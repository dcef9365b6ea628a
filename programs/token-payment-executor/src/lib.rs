//! Token Payment Executor program.
//!
//! Accepts an execution fee paid in an asset named by an `EQC1` quote,
//! forwards it to the payee and then asks the Executor to record the request
//! with a zero native payment. Chain and expiry checks happen inside the
//! Executor call, so a rejected quote still aborts the whole group.

use executor::{Executor, ExecutorApp, RequestForExecutionArgs};
use executor_avm::{
    load_state, method_selector, store_state, Address, AppDirectory, AppId, AssetId,
    AssetTransferTxn, AvmError, CallContext, PaymentTxn,
};
use executor_requests::{QuoteError, SignedQuote};
use tracing::{debug, info};

pub mod error;
pub mod event;
pub mod state;

pub use error::TokenPaymentExecutorError;
pub use event::PaymentInToken;
pub use state::Config;

pub const EXECUTOR_VERSION: &str = "TokenPaymentExecutor-0.0.1";

pub const REQUEST_EXECUTION_WITH_TOKEN_PAYMENT_SIGNATURE: &str =
    "request_execution_with_token_payment(axfer,uint16,byte[32],address,byte[],byte[],byte[])void";

/// Request execution paid in an asset.
pub trait TokenPaymentExecutorApp {
    fn app_id(&self) -> AppId;

    fn request_execution_with_token_payment(
        &self,
        ctx: &mut CallContext<'_>,
        fee_payment: &AssetTransferTxn,
        args: &RequestForExecutionArgs,
    ) -> Result<(), TokenPaymentExecutorError>;
}

pub struct TokenPaymentExecutor<E, D> {
    app_id: AppId,
    config: Config,
    executor: E,
    directory: D,
}

impl<E: ExecutorApp, D: AppDirectory> TokenPaymentExecutor<E, D> {
    pub fn create(app_id: AppId, executor: E, directory: D) -> Self {
        Self {
            app_id,
            config: Config::new(executor.app_id()),
            executor,
            directory,
        }
    }

    /// Restores the program from its persisted configuration. `executor` must
    /// be the application the configuration names.
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

    pub fn state(&self) -> Vec<u8> {
        store_state(&self.config)
    }

    pub fn executor(&self) -> AppId {
        self.config.executor()
    }

    pub fn selector() -> [u8; 4] {
        method_selector(REQUEST_EXECUTION_WITH_TOKEN_PAYMENT_SIGNATURE)
    }
}

impl<E: ExecutorApp, D: AppDirectory> TokenPaymentExecutorApp for TokenPaymentExecutor<E, D> {
    fn app_id(&self) -> AppId {
        self.app_id
    }

    fn request_execution_with_token_payment(
        &self,
        ctx: &mut CallContext<'_>,
        fee_payment: &AssetTransferTxn,
        args: &RequestForExecutionArgs,
    ) -> Result<(), TokenPaymentExecutorError> {
        let quote = SignedQuote::parse(&args.signed_quote_bytes)?;
        if !quote.is_token_fee() {
            return Err(QuoteError::PrefixMismatch.into());
        }
        let payee = Address(quote.header().payee_address);
        let asset = AssetId(quote.token_asset_id()?);

        // forward payment to payee, amount is not checked
        if fee_payment.sender != ctx.sender() {
            return Err(TokenPaymentExecutorError::FeeSenderMismatch);
        }
        if fee_payment.asset_receiver != ctx.app_address() {
            return Err(TokenPaymentExecutorError::FeeReceiverMismatch);
        }
        if fee_payment.xfer_asset != asset {
            return Err(TokenPaymentExecutorError::UnknownAsset);
        }
        ctx.transfer_asset(asset, payee, fee_payment.asset_amount);
        ctx.emit(&PaymentInToken {
            asset_id: asset.0,
            amt_paid: fee_payment.asset_amount,
        })?;
        debug!(asset = asset.0, amount = fee_payment.asset_amount, "token fee forwarded");

        // zero native payment, the token payment covers the cost
        let executor_app = self.config.executor();
        let executor_address = self
            .directory
            .app_address(executor_app)
            .ok_or(TokenPaymentExecutorError::ExecutorAddressUnknown)?;
        ctx.pay(executor_address, 0);

        let executor = &self.executor;
        ctx.call(executor_app, Executor::selector(), |inner| {
            let payment = PaymentTxn {
                sender: inner.sender(),
                receiver: executor_address,
                amount: 0,
            };
            executor.request_execution(inner, &payment, args)
        })?;
        info!(
            dst_chain = args.dst_chain,
            asset = asset.0,
            amt_paid = fee_payment.asset_amount,
            "request for execution with token payment"
        );

        Ok(())
    }
}
