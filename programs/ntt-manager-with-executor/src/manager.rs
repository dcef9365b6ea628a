//! The transfer manager the integration wraps.

use executor_avm::AppId;

pub const NTT_TRANSFER_SIGNATURE: &str = "transfer(pay,axfer,uint64,uint16,byte[32])byte[32]";
pub const NTT_TRANSFER_FULL_SIGNATURE: &str =
    "transfer_full(pay,axfer,uint64,uint16,byte[32],bool,(uint8,byte[])[])byte[32]";
pub const GET_NTT_MANAGER_PEER_SIGNATURE: &str = "get_ntt_manager_peer(uint16)(byte[32],uint8)";

/// Transfer call argument holding the amount sent.
pub const TRANSFER_AMOUNT_ARG: usize = 1;
/// Transfer call argument holding the recipient chain.
pub const TRANSFER_RECIPIENT_CHAIN_ARG: usize = 2;

/// Manager of the same token on another chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NttManagerPeer {
    pub peer_contract: [u8; 32],
    pub decimals: u8,
}

/// Read-only view of a transfer manager.
pub trait TransferManager {
    fn app_id(&self) -> AppId;

    /// `None` if no peer is registered for `chain_id`.
    fn get_ntt_manager_peer(&self, chain_id: u16) -> Option<NttManagerPeer>;
}
