#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bytes;
pub mod fees;
pub mod messages;
pub mod quote;
pub mod relay_instructions;

pub use bytes::{bytes32_from_u64, u64_from_bytes32};
pub use fees::{calculate_fee, DBPS_DENOMINATOR};
pub use messages::{make_ntt_v1_request, make_vaa_v1_request, ExecutorMessage, REQ_NTT_V1, REQ_VAA_V1};
pub use quote::{
    make_signed_quote, QuoteError, SignedQuote, SignedQuoteHeader, ValidatedQuote,
    QUOTE_PREFIX_EQ01, QUOTE_PREFIX_EQ02, QUOTE_PREFIX_EQC1, SIGNED_QUOTE_HEADER_LEN,
};
pub use relay_instructions::{
    decode_relay_instructions, make_relay_instruction_gas, make_relay_instruction_gas_drop_off,
    parse_relay_instructions, RelayInstruction, RelayInstructionsBuilder, RelayParseError,
    RelayTotals, RELAY_IX_GAS, RELAY_IX_GAS_DROP_OFF,
};
