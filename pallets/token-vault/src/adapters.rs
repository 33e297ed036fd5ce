//! Asset adapters for the token vault
//!
//! The vault never touches balances directly. Every movement into or out of
//! custody goes through [`VaultAssets`], which keeps the pallet generic over
//! how the runtime stores its assets.

use core::marker::PhantomData;
use frame::deps::frame_support::traits::{
  fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
  fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
  tokens::{Preservation, Provenance},
};
use frame::prelude::*;
use primitives::AssetKind;

/// Transfer primitive consumed by the vault ledger.
pub trait VaultAssets<AccountId, AssetId, Balance> {
  /// Move `amount` of `asset` from `from` to `to`.
  fn transfer(asset: AssetId, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;

  /// Fails when `who` cannot hold `amount` of `asset` (unknown asset, below minimum
  /// balance, account cannot be created, ...).
  fn ensure_can_receive(asset: AssetId, who: &AccountId, amount: Balance) -> DispatchResult;

  fn balance(asset: AssetId, who: &AccountId) -> Balance;

  /// Smallest non-zero balance an account may hold of `asset`.
  fn minimum_balance(asset: AssetId) -> Balance;
}

/// `VaultAssets` over `AssetKind`: native through `fungible`, local and foreign
/// assets through `fungibles`.
///
/// A transfer either drains the sender completely or leaves it at or above the
/// minimum balance. A transfer that would leave less fails with `FundsUnavailable`
/// instead of sweeping the dust, so the ledger checks residues up front.
pub struct FungibleAssets<Currency, Assets>(PhantomData<(Currency, Assets)>);

impl<AccountId, Balance, Currency, Assets> VaultAssets<AccountId, AssetKind, Balance>
  for FungibleAssets<Currency, Assets>
where
  Currency: NativeMutate<AccountId, Balance = Balance>,
  Assets: FungiblesMutate<AccountId, AssetId = u32, Balance = Balance>,
  AccountId: Eq,
  Balance: PartialEq,
{
  fn transfer(
    asset: AssetKind,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult {
    match asset.local_id() {
      None => {
        let preservation =
          preservation_for(<Currency as NativeInspect<AccountId>>::balance(from) == amount);
        <Currency as NativeMutate<AccountId>>::transfer(from, to, amount, preservation)?;
      }
      Some(id) => {
        let preservation =
          preservation_for(<Assets as FungiblesInspect<AccountId>>::balance(id, from) == amount);
        <Assets as FungiblesMutate<AccountId>>::transfer(id, from, to, amount, preservation)?;
      }
    }
    Ok(())
  }

  fn ensure_can_receive(asset: AssetKind, who: &AccountId, amount: Balance) -> DispatchResult {
    let consequence = match asset.local_id() {
      None => <Currency as NativeInspect<AccountId>>::can_deposit(who, amount, Provenance::Extant),
      Some(id) => {
        <Assets as FungiblesInspect<AccountId>>::can_deposit(id, who, amount, Provenance::Extant)
      }
    };
    consequence.into_result().map_err(Into::into)
  }

  fn balance(asset: AssetKind, who: &AccountId) -> Balance {
    match asset.local_id() {
      None => <Currency as NativeInspect<AccountId>>::balance(who),
      Some(id) => <Assets as FungiblesInspect<AccountId>>::balance(id, who),
    }
  }

  fn minimum_balance(asset: AssetKind) -> Balance {
    match asset.local_id() {
      None => <Currency as NativeInspect<AccountId>>::minimum_balance(),
      Some(id) => <Assets as FungiblesInspect<AccountId>>::minimum_balance(id),
    }
  }
}

fn preservation_for(drains_sender: bool) -> Preservation {
  if drains_sender {
    Preservation::Expendable
  } else {
    Preservation::Preserve
  }
}
