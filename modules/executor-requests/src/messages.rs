use alloc::vec::Vec;

// Request type prefixes
pub const REQ_VAA_V1: &[u8; 4] = b"ERV1";
pub const REQ_NTT_V1: &[u8; 4] = b"ERN1";

/// A message the executor is asked to deliver on the destination chain.
///
/// Every field is fixed width once the tag is known, so the encoding carries
/// no length prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorMessage {
    /// A VAA identified by its emitter and sequence.
    VaaV1 {
        source_chain: u16,
        emitter_address: [u8; 32],
        sequence: u64,
    },
    /// An NTT transfer identified by its source manager and message id.
    NttV1 {
        source_chain: u16,
        source_manager: [u8; 32],
        message_id: [u8; 32],
    },
}

impl ExecutorMessage {
    /// The 4-byte ASCII tag that prefixes the encoding.
    pub fn tag(&self) -> &'static [u8; 4] {
        match self {
            ExecutorMessage::VaaV1 { .. } => REQ_VAA_V1,
            ExecutorMessage::NttV1 { .. } => REQ_NTT_V1,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match *self {
            ExecutorMessage::VaaV1 {
                source_chain,
                emitter_address,
                sequence,
            } => make_vaa_v1_request(source_chain, emitter_address, sequence),
            ExecutorMessage::NttV1 {
                source_chain,
                source_manager,
                message_id,
            } => make_ntt_v1_request(source_chain, source_manager, message_id),
        }
    }
}

/// Encodes a version 1 VAA request payload.
pub fn make_vaa_v1_request(chain: u16, address: [u8; 32], sequence: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity({
        4 // type
        + 2 // chain
        + 32 // address
        + 8 // sequence
    });
    out.extend_from_slice(REQ_VAA_V1);
    out.extend_from_slice(&chain.to_be_bytes());
    out.extend_from_slice(&address);
    out.extend_from_slice(&sequence.to_be_bytes());
    out
}

/// Encodes a version 1 NTT request payload.
pub fn make_ntt_v1_request(
    source_chain: u16,
    source_manager: [u8; 32],
    message_id: [u8; 32],
) -> Vec<u8> {
    let mut out = Vec::with_capacity({
        4 // type
        + 2 // source chain
        + 32 // source_manager
        + 32 // message_id
    });
    out.extend_from_slice(REQ_NTT_V1);
    out.extend_from_slice(&source_chain.to_be_bytes());
    out.extend_from_slice(&source_manager);
    out.extend_from_slice(&message_id);
    out
}
