use bytemuck::{Pod, Zeroable};
use executor_avm::{AppId, Discriminator};

pub const CONFIG_DISCRIMINATOR: u8 = 2;

/// Token payment executor configuration, written once at creation.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub discriminator: u8,
    pub _padding: [u8; 7],
    /// Application id of the Executor requests are forwarded to
    pub executor: u64,
}

impl Discriminator for Config {
    const DISCRIMINATOR: u8 = CONFIG_DISCRIMINATOR;
}

impl Config {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn new(executor: AppId) -> Self {
        Self {
            discriminator: CONFIG_DISCRIMINATOR,
            _padding: [0; 7],
            executor: executor.0,
        }
    }

    pub fn executor(&self) -> AppId {
        AppId(self.executor)
    }
}
