use bytemuck::{Pod, Zeroable};
use executor_avm::{AppId, Discriminator};

pub const CONFIG_DISCRIMINATOR: u8 = 3;

/// Configuration shared by both transfer integrations, written once at
/// creation.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub discriminator: u8,
    pub _padding: u8,
    /// Wormhole chain ID of this ledger
    pub our_chain: u16,
    pub _reserved: [u8; 4],
    /// Application id of the executor that relays requests
    pub executor: u64,
}

impl Discriminator for Config {
    const DISCRIMINATOR: u8 = CONFIG_DISCRIMINATOR;
}

impl Config {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn new(our_chain: u16, executor: AppId) -> Self {
        Self {
            discriminator: CONFIG_DISCRIMINATOR,
            _padding: 0,
            our_chain,
            _reserved: [0; 4],
            executor: executor.0,
        }
    }

    pub fn executor(&self) -> AppId {
        AppId(self.executor)
    }
}
