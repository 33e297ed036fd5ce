//! Custody accounts and the authority to spend from them.

use codec::{Decode, Encode};
use frame::deps::{frame_support::PalletId, sp_runtime::traits::AccountIdConversion};
use primitives::VaultId;

/// Right to move funds out of one vault's custody account.
///
/// The constructor is crate-private and the type is neither `Clone` nor `Copy`:
/// callers of the pallet can never obtain one, and each ledger operation derives
/// its own.
pub struct CustodyAuthority<AccountId> {
  vault_id: VaultId,
  account: AccountId,
}

impl<AccountId: Encode + Decode> CustodyAuthority<AccountId> {
  pub(crate) fn derive(pallet_id: PalletId, vault_id: VaultId) -> Self {
    Self {
      vault_id,
      account: custody_account_id(pallet_id, vault_id),
    }
  }

  pub fn vault_id(&self) -> VaultId {
    self.vault_id
  }

  pub fn account(&self) -> &AccountId {
    &self.account
  }
}

/// Deterministic custody account of `vault_id`.
pub fn custody_account_id<AccountId: Encode + Decode>(
  pallet_id: PalletId,
  vault_id: VaultId,
) -> AccountId {
  let seed = frame::hashing::blake2_256(&(b"vault", vault_id).encode());
  // Small AccountId types keep only the PalletId bytes after truncation, so the seed lives there
  let mut id_bytes = pallet_id.0;
  for (i, b) in seed.iter().enumerate() {
    id_bytes[i % 8] ^= b;
  }
  PalletId(id_bytes).into_sub_account_truncating(vault_id)
}
