/// Left-pads a `u64` into the 32-byte universal form.
pub fn bytes32_from_u64(value: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Narrows a 32-byte universal value to a `u64`.
///
/// Returns `None` unless the upper 24 bytes are zero.
pub fn u64_from_bytes32(bytes: &[u8; 32]) -> Option<u64> {
    if bytes[..24].iter().any(|b| *b != 0) {
        return None;
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&bytes[24..]);
    Some(u64::from_be_bytes(low))
}
