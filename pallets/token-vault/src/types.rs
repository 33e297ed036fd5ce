use frame::deps::sp_runtime::traits::Saturating;
use frame::prelude::*;

/// Ledger state of a single vault.
#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
pub struct VaultInfo<AccountId, AssetId, Balance> {
  /// Only identity allowed to deposit, allocate, withdraw and hand over the vault
  pub admin: AccountId,
  /// Account physically holding the asset; fixed at creation
  pub custody: AccountId,
  pub asset: AssetId,
  /// Units held in custody on behalf of the vault
  pub total_balance: Balance,
  /// Sum of all outstanding allocations
  pub total_allocated: Balance,
}

impl<AccountId: PartialEq, AssetId, Balance: Saturating + Copy>
  VaultInfo<AccountId, AssetId, Balance>
{
  /// Balance not earmarked for any beneficiary.
  pub fn available(&self) -> Balance {
    self.total_balance.saturating_sub(self.total_allocated)
  }

  pub fn is_admin(&self, who: &AccountId) -> bool {
    self.admin == *who
  }
}
