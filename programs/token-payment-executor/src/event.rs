use executor_avm::{Arc4Value, Event};

/// Emitted when a fee paid in an asset has been forwarded to the payee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentInToken {
    pub asset_id: u64,
    pub amt_paid: u64,
}

impl Event for PaymentInToken {
    const SIGNATURE: &'static str = "PaymentInToken(uint64,uint64)";

    fn fields(&self) -> Vec<Arc4Value<'_>> {
        vec![Arc4Value::Uint64(self.asset_id), Arc4Value::Uint64(self.amt_paid)]
    }
}
