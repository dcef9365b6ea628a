// Relay instructions tell the executor what to do after delivery. The format
// matches the Wormhole SDK `relayInstructionsLayout`.
//
// Instructions are concatenated together. Each instruction starts with a
// 1-byte type discriminator followed by type-specific data. All multi-byte
// integers are big-endian. A list may repeat a type; consumers sum the
// values of same-typed instructions instead of keeping the last one.

use alloc::vec::Vec;

/// Relay instruction type discriminators
pub const RELAY_IX_GAS: u8 = 1;
pub const RELAY_IX_GAS_DROP_OFF: u8 = 2;

const GAS_IX_LEN: usize = 1 + 16 + 16;
const GAS_DROP_OFF_IX_LEN: usize = 1 + 16 + 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayInstruction {
    /// Gas limit and extra native value handed to the executor.
    Gas { gas_limit: u128, msg_value: u128 },
    /// Native currency dropped off at `recipient` alongside delivery.
    GasDropOff { amount: u128, recipient: [u8; 32] },
}

impl RelayInstruction {
    pub fn discriminant(&self) -> u8 {
        match self {
            RelayInstruction::Gas { .. } => RELAY_IX_GAS,
            RelayInstruction::GasDropOff { .. } => RELAY_IX_GAS_DROP_OFF,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            RelayInstruction::Gas {
                gas_limit,
                msg_value,
            } => make_relay_instruction_gas(*gas_limit, *msg_value),
            RelayInstruction::GasDropOff { amount, recipient } => {
                make_relay_instruction_gas_drop_off(*amount, recipient)
            }
        }
    }
}

/// Encodes a GasInstruction relay instruction.
///
/// Layout (33 bytes):
/// - type: u8 = 1
/// - gas_limit: u128 be (16 bytes)
/// - msg_value: u128 be (16 bytes)
pub fn make_relay_instruction_gas(gas_limit: u128, msg_value: u128) -> Vec<u8> {
    let mut out = Vec::with_capacity(GAS_IX_LEN);
    out.push(RELAY_IX_GAS);
    out.extend_from_slice(&gas_limit.to_be_bytes());
    out.extend_from_slice(&msg_value.to_be_bytes());
    out
}

/// Encodes a GasDropOffInstruction relay instruction.
///
/// Layout (49 bytes):
/// - type: u8 = 2
/// - drop_off: u128 be (16 bytes)
/// - recipient: [u8; 32] (universal address)
pub fn make_relay_instruction_gas_drop_off(drop_off: u128, recipient: &[u8; 32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(GAS_DROP_OFF_IX_LEN);
    out.push(RELAY_IX_GAS_DROP_OFF);
    out.extend_from_slice(&drop_off.to_be_bytes());
    out.extend_from_slice(recipient);
    out
}

/// Builder for constructing relay instructions.
#[derive(Default)]
pub struct RelayInstructionsBuilder {
    data: Vec<u8>,
}

impl RelayInstructionsBuilder {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with(mut self, instruction: RelayInstruction) -> Self {
        self.data.extend(instruction.encode());
        self
    }

    pub fn with_gas(self, gas_limit: u128, msg_value: u128) -> Self {
        self.with(RelayInstruction::Gas {
            gas_limit,
            msg_value,
        })
    }

    pub fn with_gas_drop_off(self, amount: u128, recipient: &[u8; 32]) -> Self {
        self.with(RelayInstruction::GasDropOff {
            amount,
            recipient: *recipient,
        })
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Relay instruction parsing errors.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayParseError {
    /// Unknown relay instruction type
    UnsupportedType = 0,
    /// Arithmetic overflow when accumulating values
    Overflow = 1,
    /// Instruction data truncated / not enough bytes
    Truncated = 2,
}

/// Sums of every instruction in a relay instruction list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelayTotals {
    pub gas_limit: u128,
    /// Gas `msg_value` plus every drop-off amount.
    pub msg_value: u128,
    pub drop_off: u128,
}

/// Decodes a concatenated instruction list into its individual instructions.
pub fn decode_relay_instructions(data: &[u8]) -> Result<Vec<RelayInstruction>, RelayParseError> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let ix_type = data[offset];
        offset += 1;

        match ix_type {
            RELAY_IX_GAS => {
                let body = data
                    .get(offset..offset + 32)
                    .ok_or(RelayParseError::Truncated)?;
                out.push(RelayInstruction::Gas {
                    gas_limit: read_u128(&body[..16]),
                    msg_value: read_u128(&body[16..]),
                });
                offset += 32;
            }
            RELAY_IX_GAS_DROP_OFF => {
                let body = data
                    .get(offset..offset + 48)
                    .ok_or(RelayParseError::Truncated)?;
                let mut recipient = [0u8; 32];
                recipient.copy_from_slice(&body[16..]);
                out.push(RelayInstruction::GasDropOff {
                    amount: read_u128(&body[..16]),
                    recipient,
                });
                offset += 48;
            }
            _ => return Err(RelayParseError::UnsupportedType),
        }
    }

    Ok(out)
}

/// Parses relay instructions and sums same-typed instructions.
pub fn parse_relay_instructions(data: &[u8]) -> Result<RelayTotals, RelayParseError> {
    let mut totals = RelayTotals::default();

    for instruction in decode_relay_instructions(data)? {
        match instruction {
            RelayInstruction::Gas {
                gas_limit,
                msg_value,
            } => {
                totals.gas_limit = totals
                    .gas_limit
                    .checked_add(gas_limit)
                    .ok_or(RelayParseError::Overflow)?;
                totals.msg_value = totals
                    .msg_value
                    .checked_add(msg_value)
                    .ok_or(RelayParseError::Overflow)?;
            }
            RelayInstruction::GasDropOff { amount, .. } => {
                totals.drop_off = totals
                    .drop_off
                    .checked_add(amount)
                    .ok_or(RelayParseError::Overflow)?;
                totals.msg_value = totals
                    .msg_value
                    .checked_add(amount)
                    .ok_or(RelayParseError::Overflow)?;
            }
        }
    }

    Ok(totals)
}

fn read_u128(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(bytes);
    u128::from_be_bytes(buf)
}
