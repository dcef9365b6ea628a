//! ABI method selectors, return values and ARC-4 tuple encoding.

use sha2::{Digest, Sha512_256};

use crate::error::AvmError;

/// Prefix of the log carrying an ABI method's return value.
pub const RETURN_PREFIX: [u8; 4] = [0x15, 0x1f, 0x7c, 0x75];

/// First four bytes of SHA-512/256 of a method or event signature.
pub fn method_selector(signature: &str) -> [u8; 4] {
    let digest = Sha512_256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

/// The log an ABI method writes to return `value`.
pub fn abi_return(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(RETURN_PREFIX.len() + value.len());
    out.extend_from_slice(&RETURN_PREFIX);
    out.extend_from_slice(value);
    out
}

/// Decodes a big-endian unsigned integer of at most 8 bytes.
pub fn btoi(bytes: &[u8]) -> Result<u64, AvmError> {
    if bytes.len() > 8 {
        return Err(AvmError::BtoiTooLong(bytes.len()));
    }
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64))
}

/// One element of an ARC-4 tuple.
#[derive(Debug, Clone, Copy)]
pub enum Arc4Value<'a> {
    Uint16(u16),
    Uint64(u64),
    /// Fixed-width bytes encoded inline (`byte[N]`, `address`).
    Static(&'a [u8]),
    Bool(bool),
    /// `byte[]`: a head offset pointing at `u16 length || bytes`.
    DynamicBytes(&'a [u8]),
}

impl Arc4Value<'_> {
    fn head_len(&self) -> usize {
        match self {
            Arc4Value::Uint16(_) => 2,
            Arc4Value::Uint64(_) => 8,
            Arc4Value::Static(bytes) => bytes.len(),
            Arc4Value::Bool(_) => 1,
            Arc4Value::DynamicBytes(_) => 2,
        }
    }
}

/// Encodes a tuple of values. Consecutive bools are not bit-packed, so
/// callers never place two of them side by side.
pub fn encode_tuple(values: &[Arc4Value<'_>]) -> Result<Vec<u8>, AvmError> {
    let head_len: usize = values.iter().map(Arc4Value::head_len).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for value in values {
        match value {
            Arc4Value::Uint16(value) => head.extend_from_slice(&value.to_be_bytes()),
            Arc4Value::Uint64(value) => head.extend_from_slice(&value.to_be_bytes()),
            Arc4Value::Static(bytes) => head.extend_from_slice(bytes),
            Arc4Value::Bool(flag) => head.push(if *flag { 0x80 } else { 0x00 }),
            Arc4Value::DynamicBytes(bytes) => {
                let offset = u16::try_from(head_len + tail.len())
                    .map_err(|_| AvmError::ValueTooLong(head_len + tail.len()))?;
                let len =
                    u16::try_from(bytes.len()).map_err(|_| AvmError::ValueTooLong(bytes.len()))?;
                head.extend_from_slice(&offset.to_be_bytes());
                tail.extend_from_slice(&len.to_be_bytes());
                tail.extend_from_slice(bytes);
            }
        }
    }

    head.extend(tail);
    Ok(head)
}

/// An ARC-28 event: a log of the signature's selector and the ARC-4 fields.
pub trait Event {
    const SIGNATURE: &'static str;

    fn fields(&self) -> Vec<Arc4Value<'_>>;

    fn to_log(&self) -> Result<Vec<u8>, AvmError> {
        let mut out = method_selector(Self::SIGNATURE).to_vec();
        out.extend(encode_tuple(&self.fields())?);
        Ok(out)
    }
}
