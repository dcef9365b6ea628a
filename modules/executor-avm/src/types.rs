use core::fmt;
use sha2::{Digest, Sha512_256};

/// A 32-byte ledger account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const ZERO: Address = Address([0; 32]);

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(")?;
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AppId(pub u64);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AssetId(pub u64);

/// Domain separator for application account addresses.
const APP_ID_PREFIX: &[u8] = b"appID";

/// The account address controlled by application `app`.
pub fn application_address(app: AppId) -> Address {
    let mut hasher = Sha512_256::new();
    hasher.update(APP_ID_PREFIX);
    hasher.update(app.0.to_be_bytes());
    Address(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_address_is_stable_and_distinct() {
        assert_eq!(application_address(AppId(1)), application_address(AppId(1)));
        assert_ne!(application_address(AppId(1)), application_address(AppId(2)));
        assert_ne!(application_address(AppId(0)), Address::ZERO);
    }
}
