use bytemuck::{Pod, Zeroable};
use executor_avm::Discriminator;

pub const CONFIG_DISCRIMINATOR: u8 = 1;

/// Executor configuration, written once at creation.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Discriminator for state type validation
    pub discriminator: u8,
    /// Padding for alignment
    pub _padding: u8,
    /// Our chain ID (Wormhole chain ID of this ledger)
    pub our_chain: u16,
    /// Reserved
    pub _reserved: [u8; 4],
}

impl Discriminator for Config {
    const DISCRIMINATOR: u8 = CONFIG_DISCRIMINATOR;
}

impl Config {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn new(our_chain: u16) -> Self {
        Self {
            discriminator: CONFIG_DISCRIMINATOR,
            _padding: 0,
            our_chain,
            _reserved: [0; 4],
        }
    }
}
