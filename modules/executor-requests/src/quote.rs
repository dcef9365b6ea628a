//! Signed quote layout and validation.
//!
//! Header layout (68 bytes, big-endian):
//! - bytes 0-3:   prefix (4 bytes)
//! - bytes 4-23:  quoter_address (20 bytes, Ethereum address)
//! - bytes 24-55: payee_address (32 bytes, universal address)
//! - bytes 56-57: src_chain (u16)
//! - bytes 58-59: dst_chain (u16)
//! - bytes 60-67: expiry_time (u64)
//!
//! The prefix selects the body that follows. `EQ01` and `EQ02` carry a 32-byte
//! quote body; `EQC1` carries the quote body followed by the 32-byte universal
//! address of the token the fee is paid in.

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use core::fmt;

use crate::bytes::u64_from_bytes32;

/// Off-chain signed quote prefix
pub const QUOTE_PREFIX_EQ01: &[u8; 4] = b"EQ01";
/// On-chain router quote prefix
pub const QUOTE_PREFIX_EQ02: &[u8; 4] = b"EQ02";
/// Token fee quote prefix
pub const QUOTE_PREFIX_EQC1: &[u8; 4] = b"EQC1";

pub const SIGNED_QUOTE_HEADER_LEN: usize = 68;

/// Offset of the token address in an `EQC1` quote.
pub const TOKEN_ADDRESS_OFFSET: usize = 100;

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedQuoteHeader {
    pub prefix: [u8; 4],
    pub quoter_address: [u8; 20],
    pub payee_address: [u8; 32],
    pub src_chain: [u8; 2],
    pub dst_chain: [u8; 2],
    pub expiry_time: [u8; 8],
}

impl SignedQuoteHeader {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn src_chain(&self) -> u16 {
        u16::from_be_bytes(self.src_chain)
    }

    pub fn dst_chain(&self) -> u16 {
        u16::from_be_bytes(self.dst_chain)
    }

    pub fn expiry_time(&self) -> u64 {
        u64::from_be_bytes(self.expiry_time)
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    /// Quote shorter than its layout requires
    InvalidLength = 0,
    /// Embedded source chain is not this chain
    SrcChainMismatch = 1,
    /// Embedded destination chain is not the requested one
    DstChainMismatch = 2,
    /// Current time is at or past the expiry
    Expired = 3,
    /// Prefix does not select the expected layout
    PrefixMismatch = 4,
    /// Token address does not fit a local asset id
    UnsafeTokenConversion = 5,
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuoteError::InvalidLength => "Invalid signed quote",
            QuoteError::SrcChainMismatch => "Quote source chain mismatch",
            QuoteError::DstChainMismatch => "Quote destination chain mismatch",
            QuoteError::Expired => "Quote expired",
            QuoteError::PrefixMismatch => "Prefix mismatch",
            QuoteError::UnsafeTokenConversion => "Unsafe conversion of bytes32 to uint64",
        })
    }
}

impl core::error::Error for QuoteError {}

/// A borrowed signed quote with its header decoded.
#[derive(Debug, Clone, Copy)]
pub struct SignedQuote<'a> {
    bytes: &'a [u8],
    header: SignedQuoteHeader,
}

/// Fields a request needs once a quote has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuote {
    pub quoter_address: [u8; 20],
    pub payee_address: [u8; 32],
    /// Local asset id of the fee token, `EQC1` quotes only.
    pub token: Option<u64>,
}

impl<'a> SignedQuote<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self, QuoteError> {
        let header_bytes = bytes
            .get(..SignedQuoteHeader::LEN)
            .ok_or(QuoteError::InvalidLength)?;
        let header: SignedQuoteHeader = bytemuck::try_pod_read_unaligned(header_bytes)
            .map_err(|_| QuoteError::InvalidLength)?;
        Ok(Self { bytes, header })
    }

    pub fn header(&self) -> &SignedQuoteHeader {
        &self.header
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn prefix(&self) -> &[u8; 4] {
        &self.header.prefix
    }

    pub fn is_token_fee(&self) -> bool {
        &self.header.prefix == QUOTE_PREFIX_EQC1
    }

    /// The 32-byte universal address of the fee token of an `EQC1` quote.
    pub fn token_address(&self) -> Result<[u8; 32], QuoteError> {
        if !self.is_token_fee() {
            return Err(QuoteError::PrefixMismatch);
        }
        let slice = self
            .bytes
            .get(TOKEN_ADDRESS_OFFSET..TOKEN_ADDRESS_OFFSET + 32)
            .ok_or(QuoteError::InvalidLength)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// The fee token of an `EQC1` quote as a local asset id.
    pub fn token_asset_id(&self) -> Result<u64, QuoteError> {
        u64_from_bytes32(&self.token_address()?).ok_or(QuoteError::UnsafeTokenConversion)
    }

    /// Checks the quote was issued for `our_chain -> dst_chain` and has not
    /// expired. Expiry is exclusive: a quote is rejected at `now == expiry`.
    pub fn validate(&self, our_chain: u16, dst_chain: u16, now: u64) -> Result<ValidatedQuote, QuoteError> {
        if self.header.src_chain() != our_chain {
            return Err(QuoteError::SrcChainMismatch);
        }
        if self.header.dst_chain() != dst_chain {
            return Err(QuoteError::DstChainMismatch);
        }
        if now >= self.header.expiry_time() {
            return Err(QuoteError::Expired);
        }

        let token = if self.is_token_fee() {
            Some(self.token_asset_id()?)
        } else {
            None
        };

        Ok(ValidatedQuote {
            quoter_address: self.header.quoter_address,
            payee_address: self.header.payee_address,
            token,
        })
    }
}

/// Constructs a signed quote from its header fields and body.
///
/// The body is appended verbatim; for `EQC1` it must place the token address
/// at `TOKEN_ADDRESS_OFFSET`.
pub fn make_signed_quote(
    prefix: &[u8; 4],
    quoter_address: &[u8; 20],
    payee_address: &[u8; 32],
    src_chain: u16,
    dst_chain: u16,
    expiry_time: u64,
    body: &[u8],
) -> Vec<u8> {
    let header = SignedQuoteHeader {
        prefix: *prefix,
        quoter_address: *quoter_address,
        payee_address: *payee_address,
        src_chain: src_chain.to_be_bytes(),
        dst_chain: dst_chain.to_be_bytes(),
        expiry_time: expiry_time.to_be_bytes(),
    };
    let mut out = Vec::with_capacity(SignedQuoteHeader::LEN + body.len());
    out.extend_from_slice(bytemuck::bytes_of(&header));
    out.extend_from_slice(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::bytes32_from_u64;
    use alloc::vec;

    const OUR_CHAIN: u16 = 8;
    const DST_CHAIN: u16 = 5;
    const EXPIRY: u64 = 1_700_000_000;

    fn quote(prefix: &[u8; 4], src: u16, dst: u16, expiry: u64, body: &[u8]) -> Vec<u8> {
        make_signed_quote(prefix, &[0x11; 20], &[0x22; 32], src, dst, expiry, body)
    }

    fn token_body(token: [u8; 32]) -> Vec<u8> {
        let mut body = vec![0u8; 32];
        body.extend_from_slice(&token);
        body.extend_from_slice(&[0xEE; 65]);
        body
    }

    #[test]
    fn test_header_layout() {
        assert_eq!(SignedQuoteHeader::LEN, SIGNED_QUOTE_HEADER_LEN);
        let bytes = quote(QUOTE_PREFIX_EQ01, 0x0102, 0x0304, 0x05060708090a0b0c, &[]);
        assert_eq!(&bytes[0..4], b"EQ01");
        assert_eq!(&bytes[4..24], &[0x11; 20]);
        assert_eq!(&bytes[24..56], &[0x22; 32]);
        assert_eq!(&bytes[56..58], &[0x01, 0x02]);
        assert_eq!(&bytes[58..60], &[0x03, 0x04]);
        assert_eq!(&bytes[60..68], &[0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c]);
    }

    #[test]
    fn test_accepts_valid_quote() {
        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN, DST_CHAIN, EXPIRY, &[0; 32]);
        let validated = SignedQuote::parse(&bytes)
            .unwrap()
            .validate(OUR_CHAIN, DST_CHAIN, EXPIRY - 1)
            .unwrap();
        assert_eq!(validated.quoter_address, [0x11; 20]);
        assert_eq!(validated.payee_address, [0x22; 32]);
        assert_eq!(validated.token, None);
    }

    #[test]
    fn test_expiry_is_exclusive() {
        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN, DST_CHAIN, EXPIRY, &[]);
        let quote = SignedQuote::parse(&bytes).unwrap();
        assert!(quote.validate(OUR_CHAIN, DST_CHAIN, EXPIRY - 1).is_ok());
        assert_eq!(quote.validate(OUR_CHAIN, DST_CHAIN, EXPIRY), Err(QuoteError::Expired));
        assert_eq!(quote.validate(OUR_CHAIN, DST_CHAIN, EXPIRY + 1), Err(QuoteError::Expired));
    }

    #[test]
    fn test_rejects_chain_mismatch() {
        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN + 1, DST_CHAIN, EXPIRY, &[]);
        assert_eq!(
            SignedQuote::parse(&bytes).unwrap().validate(OUR_CHAIN, DST_CHAIN, 0),
            Err(QuoteError::SrcChainMismatch)
        );

        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN, DST_CHAIN + 1, EXPIRY, &[]);
        assert_eq!(
            SignedQuote::parse(&bytes).unwrap().validate(OUR_CHAIN, DST_CHAIN, 0),
            Err(QuoteError::DstChainMismatch)
        );
    }

    #[test]
    fn test_rejects_short_quote() {
        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN, DST_CHAIN, EXPIRY, &[]);
        assert_eq!(
            SignedQuote::parse(&bytes[..SIGNED_QUOTE_HEADER_LEN - 1]).err(),
            Some(QuoteError::InvalidLength)
        );
    }

    #[test]
    fn test_token_fee_quote() {
        let bytes = quote(
            QUOTE_PREFIX_EQC1,
            OUR_CHAIN,
            DST_CHAIN,
            EXPIRY,
            &token_body(bytes32_from_u64(31_566_704)),
        );
        let quote = SignedQuote::parse(&bytes).unwrap();
        assert!(quote.is_token_fee());
        assert_eq!(quote.token_asset_id(), Ok(31_566_704));
        assert_eq!(
            quote.validate(OUR_CHAIN, DST_CHAIN, 0).unwrap().token,
            Some(31_566_704)
        );
    }

    #[test]
    fn test_token_fee_quote_rejects_foreign_token() {
        let bytes = quote(QUOTE_PREFIX_EQC1, OUR_CHAIN, DST_CHAIN, EXPIRY, &token_body([0x77; 32]));
        assert_eq!(
            SignedQuote::parse(&bytes).unwrap().token_asset_id(),
            Err(QuoteError::UnsafeTokenConversion)
        );
    }

    #[test]
    fn test_token_address_requires_token_prefix() {
        let bytes = quote(QUOTE_PREFIX_EQ01, OUR_CHAIN, DST_CHAIN, EXPIRY, &token_body([0; 32]));
        assert_eq!(
            SignedQuote::parse(&bytes).unwrap().token_address(),
            Err(QuoteError::PrefixMismatch)
        );

        let bytes = quote(QUOTE_PREFIX_EQC1, OUR_CHAIN, DST_CHAIN, EXPIRY, &[0; 32]);
        assert_eq!(
            SignedQuote::parse(&bytes).unwrap().token_address(),
            Err(QuoteError::InvalidLength)
        );
    }
}
