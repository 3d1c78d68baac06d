//! # Addresses and Key Material
//!
//! Value objects for on-chain account identity.
//!
//! [`BlockchainAddress`] is an immutable, chain-specific address string.
//! [`PrivateKey`] wraps unencrypted signing key material: it is zeroized on
//! drop, redacted from `Debug` output, and never serialized, so it cannot
//! leak through logs or wire formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An on-chain account or contract address.
///
/// The string form is chain-specific; this type does not validate the
/// format (the owning chain's adapter does, via
/// [`ChainAdapter::is_valid_address`](crate::infrastructure::chains::traits::ChainAdapter::is_valid_address)).
///
/// # Examples
///
/// ```
/// use pantos_client::domain::value_objects::BlockchainAddress;
///
/// let address = BlockchainAddress::new("0xaAaAaAaaAaAaAaaAaAAAAAAAAaaaAaAaAaaAaaAa");
/// assert!(address.as_str().starts_with("0x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockchainAddress(String);

impl BlockchainAddress {
    /// Creates a new address from its chain-specific string form.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockchainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockchainAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for BlockchainAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// Unencrypted private key material.
///
/// The lifetime of a `PrivateKey` is scoped to the call that uses it: the
/// backing memory is zeroized when the value is dropped. `Debug` and
/// `Display` never print the material.
///
/// # Examples
///
/// ```
/// use pantos_client::domain::value_objects::PrivateKey;
///
/// let key = PrivateKey::new("4c0883a69102937d6231471b5dbb6204fe512961708279f2e3e8a5d4b8e3e974");
/// assert_eq!(format!("{key:?}"), "PrivateKey(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Wraps raw unencrypted key material.
    #[must_use]
    pub fn new(material: impl Into<String>) -> Self {
        Self(material.into())
    }

    /// Exposes the raw key material.
    ///
    /// Only chain adapters should call this, immediately before signing.
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Identifies a blockchain account by address or by private key.
///
/// Balance queries accept either form; the adapter derives the address
/// from a key before any chain interaction, so downstream logic never
/// branches on the original form.
#[derive(Debug, Clone)]
pub enum AccountId {
    /// The account's address.
    Address(BlockchainAddress),
    /// The account's unencrypted private key.
    Key(PrivateKey),
}

impl From<BlockchainAddress> for AccountId {
    fn from(address: BlockchainAddress) -> Self {
        Self::Address(address)
    }
}

impl From<PrivateKey> for AccountId {
    fn from(key: PrivateKey) -> Self {
        Self::Key(key)
    }
}
