//! Receive with gas drop-off.
//!
//! Validates the group a relayer submits to deliver a message and records
//! the outcome. Relayers report deliveries they could not complete through
//! `report_error`, which records a failure without inspecting any group.

use core::marker::PhantomData;

use executor_avm::{method_selector, AppDirectory, AppId, CallContext, Transaction};
use tracing::{info, warn};

pub mod error;
pub mod event;
pub mod group;
pub mod kind;

pub use error::ReceiveError;
pub use event::MessageReceived;
pub use group::{validate_group, ReceiveGroup, SlotCheck};
pub use kind::{MessageKind, NttV1, VaaV1};

pub const RECEIVE_MESSAGE_SIGNATURE: &str = "receive_message(pay,appl,appl,appl,pay,byte[32])void";
pub const REPORT_ERROR_SIGNATURE: &str = "report_error(byte[32],byte[])void";

pub type VaaV1ReceiveWithGasDropOff<D> = ReceiveWithGasDropOff<VaaV1, D>;
pub type NttV1ReceiveWithGasDropOff<D> = ReceiveWithGasDropOff<NttV1, D>;

pub struct ReceiveWithGasDropOff<K, D> {
    app_id: AppId,
    directory: D,
    kind: PhantomData<K>,
}

impl<K: MessageKind, D: AppDirectory> ReceiveWithGasDropOff<K, D> {
    pub fn new(app_id: AppId, directory: D) -> Self {
        Self {
            app_id,
            directory,
            kind: PhantomData,
        }
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    /// Selector the receive call in slot 3 must carry as its first argument.
    pub fn receive_selector() -> [u8; 4] {
        method_selector(K::RECEIVE_SIGNATURE)
    }

    pub fn receive_message(
        &self,
        ctx: &mut CallContext<'_>,
        group: &[Transaction],
        request_for_execution_id: [u8; 32],
    ) -> Result<(), ReceiveError> {
        let group = ReceiveGroup::from_transactions(group)?;
        validate_group(&group, Self::receive_selector(), &self.directory)?;

        ctx.emit(&MessageReceived::<K>::succeeded(request_for_execution_id))?;
        info!(
            kind = K::NAME,
            receiver = %group.receive.app_id,
            gas = group.gas.amount,
            "message received"
        );
        Ok(())
    }

    /// Records a failed delivery. The report is not checked against any
    /// delivery attempt.
    pub fn report_error(
        &self,
        ctx: &mut CallContext<'_>,
        request_for_execution_id: [u8; 32],
        error_reason: &[u8],
    ) -> Result<(), ReceiveError> {
        warn!(
            kind = K::NAME,
            reason = %String::from_utf8_lossy(error_reason),
            "delivery failure reported"
        );
        ctx.emit(&MessageReceived::<K>::failed(
            request_for_execution_id,
            error_reason,
        ))?;
        Ok(())
    }
}
