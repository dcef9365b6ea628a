//! Application state persisted as a single `Pod` record.

use bytemuck::Pod;

use crate::error::AvmError;

/// Trait for state records with a discriminator byte at offset 0.
pub trait Discriminator {
    const DISCRIMINATOR: u8;
}

/// Load a typed state record, validating its length and discriminator.
/// Returns a copy of the record.
pub fn load_state<T: Pod + Discriminator>(data: &[u8]) -> Result<T, AvmError> {
    let len = core::mem::size_of::<T>();
    if data.len() < len {
        return Err(AvmError::InvalidState);
    }

    if data[0] != T::DISCRIMINATOR {
        return Err(AvmError::InvalidDiscriminator);
    }

    bytemuck::try_pod_read_unaligned::<T>(&data[..len]).map_err(|_| AvmError::InvalidState)
}

pub fn store_state<T: Pod>(state: &T) -> Vec<u8> {
    bytemuck::bytes_of(state).to_vec()
}
