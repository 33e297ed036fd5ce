//! Ecosystem Constants for the Token Vault
//!
//! Pallet identifiers and shared numeric types re-used by the vault pallet
//! and by runtime configurations.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Identifier of a vault instance.
pub type VaultId = u32;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_sub_account_truncating()`
/// to deterministically generate custody accounts.
pub mod pallet_ids {
  /// Token Vault pallet ID (custody accounts are sub-accounts of it)
  pub const TOKEN_VAULT_PALLET_ID: &[u8; 8] = b"py/vault";
}
