//! Executor program.
//!
//! Accepts a native-currency fee payment together with a signed quote,
//! forwards the whole payment to the quoted payee and records the request for
//! the relay network. The amount paid is not checked against the quote; the
//! relay network decides whether a request is worth fulfilling.

use executor_avm::{
    load_state, method_selector, store_state, Address, AppId, AvmError, CallContext, PaymentTxn,
};
use executor_requests::SignedQuote;
use tracing::{debug, info};

pub mod error;
pub mod event;
pub mod state;

pub use error::ExecutorError;
pub use event::RequestForExecution;
pub use state::Config;

pub const EXECUTOR_VERSION: &str = "Executor-0.0.1";

pub const REQUEST_EXECUTION_SIGNATURE: &str =
    "request_execution(pay,uint16,byte[32],address,byte[],byte[],byte[])void";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForExecutionArgs {
    pub dst_chain: u16,
    pub dst_addr: [u8; 32],
    pub refund_addr: Address,
    pub signed_quote_bytes: Vec<u8>,
    pub request_bytes: Vec<u8>,
    pub relay_instructions: Vec<u8>,
}

/// Request execution paid in native currency.
pub trait ExecutorApp {
    fn app_id(&self) -> AppId;

    fn request_execution(
        &self,
        ctx: &mut CallContext<'_>,
        fee_payment: &PaymentTxn,
        args: &RequestForExecutionArgs,
    ) -> Result<(), ExecutorError>;
}

#[derive(Debug, Clone)]
pub struct Executor {
    app_id: AppId,
    config: Config,
}

impl Executor {
    pub fn create(app_id: AppId, our_chain: u16) -> Self {
        Self {
            app_id,
            config: Config::new(our_chain),
        }
    }

    /// Restores the program from its persisted configuration.
    pub fn load(app_id: AppId, state: &[u8]) -> Result<Self, AvmError> {
        Ok(Self {
            app_id,
            config: load_state::<Config>(state)?,
        })
    }

    pub fn state(&self) -> Vec<u8> {
        store_state(&self.config)
    }

    pub fn our_chain(&self) -> u16 {
        self.config.our_chain
    }

    pub fn selector() -> [u8; 4] {
        method_selector(REQUEST_EXECUTION_SIGNATURE)
    }
}

impl ExecutorApp for Executor {
    fn app_id(&self) -> AppId {
        self.app_id
    }

    fn request_execution(
        &self,
        ctx: &mut CallContext<'_>,
        fee_payment: &PaymentTxn,
        args: &RequestForExecutionArgs,
    ) -> Result<(), ExecutorError> {
        let quote = SignedQuote::parse(&args.signed_quote_bytes)?.validate(
            self.config.our_chain,
            args.dst_chain,
            ctx.latest_timestamp(),
        )?;
        debug!(dst_chain = args.dst_chain, "quote accepted");

        // forward payment to payee, amount is not checked
        if fee_payment.sender != ctx.sender() {
            return Err(ExecutorError::FeeSenderMismatch);
        }
        if fee_payment.receiver != ctx.app_address() {
            return Err(ExecutorError::FeeReceiverMismatch);
        }
        ctx.pay(Address(quote.payee_address), fee_payment.amount);

        ctx.emit(&RequestForExecution {
            quoter_address: quote.quoter_address,
            amt_paid: fee_payment.amount,
            dst_chain: args.dst_chain,
            dst_addr: args.dst_addr,
            refund_addr: args.refund_addr,
            signed_quote_bytes: args.signed_quote_bytes.clone(),
            request_bytes: args.request_bytes.clone(),
            relay_instructions: args.relay_instructions.clone(),
        })?;
        info!(
            dst_chain = args.dst_chain,
            amt_paid = fee_payment.amount,
            "request for execution"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        let executor = Executor::create(AppId(7), 8);
        let state = executor.state();
        assert_eq!(state.len(), Config::LEN);

        let loaded = Executor::load(AppId(7), &state).unwrap();
        assert_eq!(loaded.our_chain(), 8);
        assert_eq!(loaded.app_id(), AppId(7));
    }

    #[test]
    fn test_load_rejects_foreign_state() {
        let mut state = Executor::create(AppId(7), 8).state();
        state[0] = 0xFF;
        assert_eq!(
            Executor::load(AppId(7), &state).err(),
            Some(AvmError::InvalidDiscriminator)
        );
        assert_eq!(
            Executor::load(AppId(7), &state[..2]).err(),
            Some(AvmError::InvalidState)
        );
    }
}
