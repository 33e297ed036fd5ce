#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use frame::prelude::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;

fn units<T: Config>(amount: u32) -> BalanceOf<T> {
  amount.into()
}

/// Vault administered by a funded `admin` with `deposit` already in custody.
fn funded_vault<T: Config>(admin: &T::AccountId, deposit: u32) -> Result<VaultId, BenchmarkError> {
  let asset = T::BenchmarkHelper::asset();
  T::BenchmarkHelper::fund(admin, asset, units::<T>(deposit.saturating_mul(2)))
    .map_err(|_| BenchmarkError::Stop("admin funding failed"))?;
  let vault_id = Pallet::<T>::do_create_vault(admin.clone(), asset)
    .map_err(|_| BenchmarkError::Stop("vault creation failed"))?;
  if deposit > 0 {
    Pallet::<T>::do_deposit(admin, vault_id, units::<T>(deposit))
      .map_err(|_| BenchmarkError::Stop("deposit failed"))?;
  }
  Ok(vault_id)
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_vault() -> Result<(), BenchmarkError> {
    let origin =
      T::CreateOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let asset = T::BenchmarkHelper::asset();

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, asset);

    assert_eq!(NextVaultId::<T>::get(), 1);
    Ok(())
  }

  #[benchmark]
  fn deposit() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let vault_id = funded_vault::<T>(&admin, 0)?;
    let asset = T::BenchmarkHelper::asset();
    T::BenchmarkHelper::fund(&admin, asset, units::<T>(1_000))
      .map_err(|_| BenchmarkError::Stop("admin funding failed"))?;

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id, units::<T>(1_000));

    assert_eq!(Pallet::<T>::balance(vault_id), Ok(units::<T>(1_000)));
    Ok(())
  }

  #[benchmark]
  fn allocate() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let beneficiary: T::AccountId = account("beneficiary", 0, 0);
    let vault_id = funded_vault::<T>(&admin, 1_000)?;
    // Existing entry: the additive path
    Pallet::<T>::do_allocate(&admin, vault_id, &beneficiary, units::<T>(100))
      .map_err(|_| BenchmarkError::Stop("allocation failed"))?;

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id, beneficiary.clone(), units::<T>(400));

    assert_eq!(Pallet::<T>::allocation(vault_id, &beneficiary), Ok(units::<T>(500)));
    Ok(())
  }

  #[benchmark]
  fn claim() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = account("admin", 0, 0);
    let beneficiary: T::AccountId = whitelisted_caller();
    let vault_id = funded_vault::<T>(&admin, 1_000)?;
    Pallet::<T>::do_allocate(&admin, vault_id, &beneficiary, units::<T>(500))
      .map_err(|_| BenchmarkError::Stop("allocation failed"))?;

    #[extrinsic_call]
    _(RawOrigin::Signed(beneficiary.clone()), vault_id);

    assert_eq!(Pallet::<T>::allocation(vault_id, &beneficiary), Ok(Zero::zero()));
    assert_eq!(Pallet::<T>::balance(vault_id), Ok(units::<T>(500)));
    Ok(())
  }

  #[benchmark]
  fn withdraw() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let beneficiary: T::AccountId = account("beneficiary", 0, 0);
    let vault_id = funded_vault::<T>(&admin, 1_000)?;
    Pallet::<T>::do_allocate(&admin, vault_id, &beneficiary, units::<T>(100))
      .map_err(|_| BenchmarkError::Stop("allocation failed"))?;

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id, units::<T>(500));

    assert_eq!(Pallet::<T>::balance(vault_id), Ok(units::<T>(500)));
    Ok(())
  }

  #[benchmark]
  fn transfer_ownership() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let new_admin: T::AccountId = account("new_admin", 0, 0);
    let vault_id = funded_vault::<T>(&admin, 0)?;
    // Pending proposal gets cleared as well
    PendingAdmin::<T>::insert(vault_id, account::<T::AccountId>("candidate", 0, 0));

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id, new_admin.clone());

    assert!(Pallet::<T>::vault(vault_id).is_some_and(|vault| vault.admin == new_admin));
    assert!(PendingAdmin::<T>::get(vault_id).is_none());
    Ok(())
  }

  #[benchmark]
  fn propose_admin() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let candidate: T::AccountId = account("candidate", 0, 0);
    let vault_id = funded_vault::<T>(&admin, 0)?;

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id, candidate.clone());

    assert_eq!(PendingAdmin::<T>::get(vault_id), Some(candidate));
    Ok(())
  }

  #[benchmark]
  fn accept_admin() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = account("admin", 0, 0);
    let candidate: T::AccountId = whitelisted_caller();
    let vault_id = funded_vault::<T>(&admin, 0)?;
    PendingAdmin::<T>::insert(vault_id, &candidate);

    #[extrinsic_call]
    _(RawOrigin::Signed(candidate.clone()), vault_id);

    assert!(Pallet::<T>::vault(vault_id).is_some_and(|vault| vault.admin == candidate));
    Ok(())
  }

  #[benchmark]
  fn cancel_admin_proposal() -> Result<(), BenchmarkError> {
    let admin: T::AccountId = whitelisted_caller();
    let vault_id = funded_vault::<T>(&admin, 0)?;
    PendingAdmin::<T>::insert(vault_id, account::<T::AccountId>("candidate", 0, 0));

    #[extrinsic_call]
    _(RawOrigin::Signed(admin), vault_id);

    assert!(PendingAdmin::<T>::get(vault_id).is_none());
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
