use executor_avm::{Address, Arc4Value, Event};

/// Emitted once per accepted request; consumed by the relay network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForExecution {
    pub quoter_address: [u8; 20],
    pub amt_paid: u64,
    pub dst_chain: u16,
    pub dst_addr: [u8; 32],
    pub refund_addr: Address,
    pub signed_quote_bytes: Vec<u8>,
    pub request_bytes: Vec<u8>,
    pub relay_instructions: Vec<u8>,
}

impl Event for RequestForExecution {
    const SIGNATURE: &'static str =
        "RequestForExecution(byte[20],uint64,uint16,byte[32],address,byte[],byte[],byte[])";

    fn fields(&self) -> Vec<Arc4Value<'_>> {
        vec![
            Arc4Value::Static(&self.quoter_address),
            Arc4Value::Uint64(self.amt_paid),
            Arc4Value::Uint16(self.dst_chain),
            Arc4Value::Static(&self.dst_addr),
            Arc4Value::Static(self.refund_addr.as_bytes()),
            Arc4Value::DynamicBytes(&self.signed_quote_bytes),
            Arc4Value::DynamicBytes(&self.request_bytes),
            Arc4Value::DynamicBytes(&self.relay_instructions),
        ]
    }
}
