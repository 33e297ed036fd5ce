//! Token Vault Pallet
//!
//! Custodial vault for a single fungible asset. The vault admin deposits a pooled
//! balance into a pallet-derived custody account, earmarks (allocates) parts of it
//! for beneficiaries without moving funds, and each beneficiary later claims its
//! earmarked amount out of custody. The admin can only withdraw what is not
//! earmarked.
//!
//! Ledger invariants, checked by `try_state`:
//!  - `total_balance >= total_allocated`
//!  - `total_allocated` equals the sum of the allocation table of the vault
//!  - no zero allocation is ever stored
//!  - custody holds at least `total_balance` of the vault asset

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{FungibleAssets, VaultAssets};

pub mod custody;
pub use custody::CustodyAuthority;

pub mod types;
pub use types::VaultInfo;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::token-vault";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, AssetId, Balance> {
  /// Asset the benchmarked vaults are denominated in
  fn asset() -> AssetId;
  /// Credit `who` with at least `amount` of `asset` on top of what keeps the account alive
  fn fund(who: &AccountId, asset: AssetId, amount: Balance)
    -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{CustodyAuthority, LOG_TARGET, VaultAssets, VaultInfo, WeightInfo};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{PalletId, storage::with_storage_layer, traits::DefensiveOption},
    sp_runtime::traits::{AtLeast32BitUnsigned, CheckedAdd, CheckedSub, Saturating, Zero},
  };
  use frame::prelude::*;

  pub use primitives::VaultId;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Asset a vault is denominated in
    type AssetId: Parameter + Member + Copy + MaybeSerializeDeserialize + MaxEncodedLen;

    type Balance: Parameter
      + Member
      + AtLeast32BitUnsigned
      + Default
      + Copy
      + MaybeSerializeDeserialize
      + MaxEncodedLen;

    /// Transfer primitive used for every movement into and out of custody
    type Assets: VaultAssets<Self::AccountId, Self::AssetId, Self::Balance>;

    /// Custody accounts are derived from this id
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Origin allowed to open a vault; the resolved account becomes its admin
    type CreateOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Self::AssetId, Self::Balance>;
  }

  pub type BalanceOf<T> = <T as Config>::Balance;

  pub type VaultInfoOf<T> =
    VaultInfo<<T as frame_system::Config>::AccountId, <T as Config>::AssetId, BalanceOf<T>>;

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  #[pallet::getter(fn next_vault_id)]
  pub type NextVaultId<T> = StorageValue<_, VaultId, ValueQuery>;

  /// Ledger of every vault
  #[pallet::storage]
  pub type Vaults<T: Config> = StorageMap<_, Blake2_128Concat, VaultId, VaultInfoOf<T>, OptionQuery>;

  /// Allocation table: (vault, beneficiary) -> earmarked amount. Zero is never stored.
  #[pallet::storage]
  pub type Allocations<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    VaultId,
    Blake2_128Concat,
    T::AccountId,
    BalanceOf<T>,
    OptionQuery,
  >;

  /// Reverse index of custody accounts, guards against derivation collisions
  #[pallet::storage]
  pub type CustodyIndex<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, VaultId, OptionQuery>;

  /// Candidate admin waiting to accept a two-step handover
  #[pallet::storage]
  pub type PendingAdmin<T: Config> =
    StorageMap<_, Blake2_128Concat, VaultId, T::AccountId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A vault was opened
    VaultCreated {
      vault_id: VaultId,
      admin: T::AccountId,
      custody: T::AccountId,
      asset: T::AssetId,
    },
    /// Admin moved funds into custody
    Deposited {
      vault_id: VaultId,
      from: T::AccountId,
      amount: BalanceOf<T>,
      total_balance: BalanceOf<T>,
    },
    /// Funds earmarked for a beneficiary
    AllocationMade {
      vault_id: VaultId,
      beneficiary: T::AccountId,
      amount: BalanceOf<T>,
      allocation: BalanceOf<T>,
      total_allocated: BalanceOf<T>,
    },
    /// Beneficiary received its whole allocation
    Claimed {
      vault_id: VaultId,
      beneficiary: T::AccountId,
      amount: BalanceOf<T>,
    },
    /// Admin took unallocated funds out of custody
    Withdrawn {
      vault_id: VaultId,
      to: T::AccountId,
      amount: BalanceOf<T>,
      total_balance: BalanceOf<T>,
    },
    /// Admin role changed hands
    OwnershipTransferred {
      vault_id: VaultId,
      old_admin: T::AccountId,
      new_admin: T::AccountId,
    },
    AdminProposed {
      vault_id: VaultId,
      candidate: T::AccountId,
    },
    AdminProposalCancelled {
      vault_id: VaultId,
      candidate: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the vault admin
    NotAdmin,
    /// Operation would earmark or move more than the unallocated balance
    InsufficientBalance,
    /// Caller has nothing allocated in this vault
    NoAllocation,
    /// No vault with this id
    VaultNotFound,
    /// Zero amount not allowed
    ZeroAmount,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
    /// Vault ids are exhausted
    VaultIdOverflow,
    /// Derived custody account is already in use
    CustodyAccountCollision,
    /// No admin handover is pending for this vault
    NoPendingAdmin,
    /// Caller is not the proposed admin
    NotPendingAdmin,
    /// Payout would leave custody holding less than the asset's minimum balance
    CustodyResidueBelowMinimum,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), DispatchError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Open a vault for `asset`. The caller becomes its admin.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_vault())]
    pub fn create_vault(origin: OriginFor<T>, asset: T::AssetId) -> DispatchResult {
      let admin = T::CreateOrigin::ensure_origin(origin)?;
      Self::do_create_vault(admin, asset).map(|_| ())
    }

    /// Move `amount` from the admin into custody.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::deposit())]
    pub fn deposit(origin: OriginFor<T>, vault_id: VaultId, amount: BalanceOf<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_deposit(&who, vault_id, amount).map(|_| ())
    }

    /// Earmark `amount` of the unallocated balance for `beneficiary`.
    ///
    /// Repeated allocations to the same beneficiary accumulate.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::allocate())]
    pub fn allocate(
      origin: OriginFor<T>,
      vault_id: VaultId,
      beneficiary: T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_allocate(&who, vault_id, &beneficiary, amount).map(|_| ())
    }

    /// Transfer the caller's whole allocation out of custody.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::claim())]
    pub fn claim(origin: OriginFor<T>, vault_id: VaultId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_claim(&who, vault_id).map(|_| ())
    }

    /// Move `amount` of the unallocated balance back to the admin.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::withdraw())]
    pub fn withdraw(origin: OriginFor<T>, vault_id: VaultId, amount: BalanceOf<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_withdraw(&who, vault_id, amount).map(|_| ())
    }

    /// Hand the admin role to `new_admin` in one step.
    ///
    /// `new_admin` is not validated and the change cannot be undone by the old
    /// admin. `propose_admin` + `accept_admin` is the safer path.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(
      origin: OriginFor<T>,
      vault_id: VaultId,
      new_admin: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_transfer_ownership(&who, vault_id, new_admin)
    }

    /// Nominate `candidate` as the next admin. Replaces any earlier nomination.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::propose_admin())]
    pub fn propose_admin(
      origin: OriginFor<T>,
      vault_id: VaultId,
      candidate: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let vault = Self::vault(vault_id).ok_or(Error::<T>::VaultNotFound)?;
      Self::ensure_admin(&vault, &who)?;
      PendingAdmin::<T>::insert(vault_id, &candidate);
      Self::deposit_event(Event::AdminProposed {
        vault_id,
        candidate,
      });
      Ok(())
    }

    /// Take over the admin role after being nominated.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::accept_admin())]
    pub fn accept_admin(origin: OriginFor<T>, vault_id: VaultId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(
        Vaults::<T>::contains_key(vault_id),
        Error::<T>::VaultNotFound
      );
      let candidate = PendingAdmin::<T>::get(vault_id).ok_or(Error::<T>::NoPendingAdmin)?;
      ensure!(candidate == who, Error::<T>::NotPendingAdmin);
      Self::set_admin(vault_id, who)
    }

    /// Withdraw a pending nomination.
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::cancel_admin_proposal())]
    pub fn cancel_admin_proposal(origin: OriginFor<T>, vault_id: VaultId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let vault = Self::vault(vault_id).ok_or(Error::<T>::VaultNotFound)?;
      Self::ensure_admin(&vault, &who)?;
      let candidate = PendingAdmin::<T>::take(vault_id).ok_or(Error::<T>::NoPendingAdmin)?;
      Self::deposit_event(Event::AdminProposalCancelled {
        vault_id,
        candidate,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Custody account of `vault_id`.
    pub fn custody_account(vault_id: VaultId) -> T::AccountId {
      crate::custody::custody_account_id(T::PalletId::get(), vault_id)
    }

    fn custody_authority(vault_id: VaultId) -> CustodyAuthority<T::AccountId> {
      CustodyAuthority::derive(T::PalletId::get(), vault_id)
    }

    /// Access guard of every admin-only operation.
    pub fn ensure_admin(vault: &VaultInfoOf<T>, who: &T::AccountId) -> DispatchResult {
      ensure!(vault.is_admin(who), Error::<T>::NotAdmin);
      Ok(())
    }

    /// Open a vault for `asset` administered by `admin`. Returns the new vault id.
    pub fn do_create_vault(admin: T::AccountId, asset: T::AssetId) -> Result<VaultId, DispatchError> {
      let vault_id = NextVaultId::<T>::get();
      let next_id = vault_id.checked_add(1).ok_or(Error::<T>::VaultIdOverflow)?;
      let custody = Self::custody_account(vault_id);
      ensure!(
        custody != admin && !CustodyIndex::<T>::contains_key(&custody),
        Error::<T>::CustodyAccountCollision
      );
      // Custody survives a zero balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&custody);
      CustodyIndex::<T>::insert(&custody, vault_id);
      Vaults::<T>::insert(
        vault_id,
        VaultInfo {
          admin: admin.clone(),
          custody: custody.clone(),
          asset,
          total_balance: Zero::zero(),
          total_allocated: Zero::zero(),
        },
      );
      NextVaultId::<T>::put(next_id);
      log::debug!(target: LOG_TARGET, "vault {} opened, admin={:?}", vault_id, admin);
      Self::deposit_event(Event::VaultCreated {
        vault_id,
        admin,
        custody,
        asset,
      });
      Ok(vault_id)
    }

    /// Deposit from the admin into custody. Returns the new `total_balance`.
    pub fn do_deposit(
      who: &T::AccountId,
      vault_id: VaultId,
      amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
      Vaults::<T>::try_mutate(vault_id, |maybe| -> Result<BalanceOf<T>, DispatchError> {
        let vault = maybe.as_mut().ok_or(Error::<T>::VaultNotFound)?;
        Self::ensure_admin(vault, who)?;
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        let total_balance = vault
          .total_balance
          .checked_add(&amount)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        T::Assets::transfer(vault.asset, who, &vault.custody, amount)?;
        vault.total_balance = total_balance;
        log::debug!(
          target: LOG_TARGET,
          "vault {} deposit amount={:?} total_balance={:?}",
          vault_id,
          amount,
          total_balance
        );
        Self::deposit_event(Event::Deposited {
          vault_id,
          from: who.clone(),
          amount,
          total_balance,
        });
        Ok(total_balance)
      })
    }

    /// Earmark `amount` for `beneficiary`. Returns the new `total_allocated`.
    pub fn do_allocate(
      who: &T::AccountId,
      vault_id: VaultId,
      beneficiary: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
      Vaults::<T>::try_mutate(vault_id, |maybe| -> Result<BalanceOf<T>, DispatchError> {
        let vault = maybe.as_mut().ok_or(Error::<T>::VaultNotFound)?;
        Self::ensure_admin(vault, who)?;
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        let total_allocated = vault
          .total_allocated
          .checked_add(&amount)
          .filter(|total| *total <= vault.total_balance)
          .ok_or(Error::<T>::InsufficientBalance)?;
        let allocation = Self::allocation_after(vault_id, beneficiary, amount)?;
        // Claiming this entry against the current balance must stay payable
        Self::ensure_payable_residue(vault.asset, vault.total_balance, allocation)?;
        Allocations::<T>::insert(vault_id, beneficiary, allocation);
        vault.total_allocated = total_allocated;
        log::debug!(
          target: LOG_TARGET,
          "vault {} allocate beneficiary={:?} amount={:?} total_allocated={:?}",
          vault_id,
          beneficiary,
          amount,
          total_allocated
        );
        Self::deposit_event(Event::AllocationMade {
          vault_id,
          beneficiary: beneficiary.clone(),
          amount,
          allocation,
          total_allocated,
        });
        Ok(total_allocated)
      })
    }

    /// Pay `who` its whole allocation. Returns the amount transferred.
    ///
    /// Entry removal, ledger update and the payout run in one storage layer: a
    /// failed payout leaves the allocation and both totals untouched.
    pub fn do_claim(who: &T::AccountId, vault_id: VaultId) -> Result<BalanceOf<T>, DispatchError> {
      with_storage_layer(|| -> Result<BalanceOf<T>, DispatchError> {
        let mut vault = Self::vault(vault_id).ok_or(Error::<T>::VaultNotFound)?;
        let amount = Self::take_allocation(vault_id, who).ok_or(Error::<T>::NoAllocation)?;
        vault.total_allocated = vault
          .total_allocated
          .checked_sub(&amount)
          .defensive_ok_or(Error::<T>::InsufficientBalance)?;
        vault.total_balance = vault
          .total_balance
          .checked_sub(&amount)
          .defensive_ok_or(Error::<T>::InsufficientBalance)?;
        T::Assets::ensure_can_receive(vault.asset, who, amount)?;
        Self::pay_out(&Self::custody_authority(vault_id), vault.asset, who, amount)?;
        Vaults::<T>::insert(vault_id, &vault);
        log::debug!(
          target: LOG_TARGET,
          "vault {} claim beneficiary={:?} amount={:?}",
          vault_id,
          who,
          amount
        );
        Self::deposit_event(Event::Claimed {
          vault_id,
          beneficiary: who.clone(),
          amount,
        });
        Ok(amount)
      })
    }

    /// Withdraw unallocated funds to the admin. Returns the new `total_balance`.
    pub fn do_withdraw(
      who: &T::AccountId,
      vault_id: VaultId,
      amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
      Vaults::<T>::try_mutate(vault_id, |maybe| -> Result<BalanceOf<T>, DispatchError> {
        let vault = maybe.as_mut().ok_or(Error::<T>::VaultNotFound)?;
        Self::ensure_admin(vault, who)?;
        ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
        ensure!(amount <= vault.available(), Error::<T>::InsufficientBalance);
        let total_balance = vault
          .total_balance
          .checked_sub(&amount)
          .defensive_ok_or(Error::<T>::InsufficientBalance)?;
        Self::pay_out(&Self::custody_authority(vault_id), vault.asset, who, amount)?;
        vault.total_balance = total_balance;
        log::debug!(
          target: LOG_TARGET,
          "vault {} withdraw amount={:?} total_balance={:?}",
          vault_id,
          amount,
          total_balance
        );
        Self::deposit_event(Event::Withdrawn {
          vault_id,
          to: who.clone(),
          amount,
          total_balance,
        });
        Ok(total_balance)
      })
    }

    /// Single-step admin handover, no validation of `new_admin`.
    pub fn do_transfer_ownership(
      who: &T::AccountId,
      vault_id: VaultId,
      new_admin: T::AccountId,
    ) -> DispatchResult {
      let vault = Self::vault(vault_id).ok_or(Error::<T>::VaultNotFound)?;
      Self::ensure_admin(&vault, who)?;
      Self::set_admin(vault_id, new_admin)
    }

    fn set_admin(vault_id: VaultId, new_admin: T::AccountId) -> DispatchResult {
      let old_admin = Vaults::<T>::try_mutate(vault_id, |maybe| -> Result<_, DispatchError> {
        let vault = maybe.as_mut().ok_or(Error::<T>::VaultNotFound)?;
        Ok(core::mem::replace(&mut vault.admin, new_admin.clone()))
      })?;
      PendingAdmin::<T>::remove(vault_id);
      log::debug!(
        target: LOG_TARGET,
        "vault {} admin {:?} -> {:?}",
        vault_id,
        old_admin,
        new_admin
      );
      Self::deposit_event(Event::OwnershipTransferred {
        vault_id,
        old_admin,
        new_admin,
      });
      Ok(())
    }

    /// Only path out of custody; spending requires the vault's authority.
    ///
    /// Custody is either drained or left at or above the asset minimum. A payout that
    /// would strand a smaller residue fails with `CustodyResidueBelowMinimum`; a deposit
    /// or a withdrawal of the leftover by the admin makes it payable again.
    fn pay_out(
      authority: &CustodyAuthority<T::AccountId>,
      asset: T::AssetId,
      to: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let held = T::Assets::balance(asset, authority.account());
      Self::ensure_payable_residue(asset, held, amount)?;
      log::debug!(
        target: LOG_TARGET,
        "vault {} pays out {:?} to {:?}",
        authority.vault_id(),
        amount,
        to
      );
      T::Assets::transfer(asset, authority.account(), to, amount)
    }

    fn ensure_payable_residue(
      asset: T::AssetId,
      held: BalanceOf<T>,
      amount: BalanceOf<T>,
    ) -> DispatchResult {
      let residue = held.saturating_sub(amount);
      ensure!(
        residue.is_zero() || residue >= T::Assets::minimum_balance(asset),
        Error::<T>::CustodyResidueBelowMinimum
      );
      Ok(())
    }

    /// Allocation of `beneficiary` once `amount` is added to it.
    fn allocation_after(
      vault_id: VaultId,
      beneficiary: &T::AccountId,
      amount: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
      Allocations::<T>::get(vault_id, beneficiary)
        .unwrap_or_default()
        .checked_add(&amount)
        .ok_or(Error::<T>::ArithmeticOverflow.into())
    }

    /// Remove the allocation of `beneficiary` and return it.
    fn take_allocation(vault_id: VaultId, beneficiary: &T::AccountId) -> Option<BalanceOf<T>> {
      Allocations::<T>::take(vault_id, beneficiary).filter(|amount| !amount.is_zero())
    }

    pub fn vault(vault_id: VaultId) -> Option<VaultInfoOf<T>> {
      Vaults::<T>::get(vault_id)
    }

    /// Units held in custody for `vault_id`.
    pub fn balance(vault_id: VaultId) -> Result<BalanceOf<T>, DispatchError> {
      Self::vault(vault_id)
        .map(|vault| vault.total_balance)
        .ok_or(Error::<T>::VaultNotFound.into())
    }

    pub fn total_allocated(vault_id: VaultId) -> Result<BalanceOf<T>, DispatchError> {
      Self::vault(vault_id)
        .map(|vault| vault.total_allocated)
        .ok_or(Error::<T>::VaultNotFound.into())
    }

    /// Unallocated part of the vault balance, the most the admin can withdraw.
    pub fn available(vault_id: VaultId) -> Result<BalanceOf<T>, DispatchError> {
      Self::vault(vault_id)
        .map(|vault| vault.available())
        .ok_or(Error::<T>::VaultNotFound.into())
    }

    /// Amount earmarked for `who`, zero when nothing is allocated.
    pub fn allocation(vault_id: VaultId, who: &T::AccountId) -> Result<BalanceOf<T>, DispatchError> {
      ensure!(
        Vaults::<T>::contains_key(vault_id),
        Error::<T>::VaultNotFound
      );
      Ok(Allocations::<T>::get(vault_id, who).unwrap_or_default())
    }

    pub fn pending_admin(vault_id: VaultId) -> Option<T::AccountId> {
      PendingAdmin::<T>::get(vault_id)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
      for (vault_id, vault) in Vaults::<T>::iter() {
        let mut allocated = BalanceOf::<T>::zero();
        for (_, amount) in Allocations::<T>::iter_prefix(vault_id) {
          ensure!(!amount.is_zero(), "zero allocation stored");
          allocated = allocated
            .checked_add(&amount)
            .ok_or("allocation table overflows")?;
        }
        ensure!(
          allocated == vault.total_allocated,
          "total_allocated differs from the allocation table"
        );
        ensure!(
          vault.total_balance >= vault.total_allocated,
          "vault allocates more than it holds"
        );
        ensure!(
          T::Assets::balance(vault.asset, &vault.custody) >= vault.total_balance,
          "custody holds less than the ledger balance"
        );
        ensure!(
          CustodyIndex::<T>::get(&vault.custody) == Some(vault_id),
          "custody index out of sync"
        );
      }
      Ok(())
    }
  }

  /// Vaults opened at chain start
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// `(admin, asset)` pairs; vault ids are assigned in order from zero
    pub vaults: Vec<(T::AccountId, T::AssetId)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (admin, asset) in &self.vaults {
        Pallet::<T>::do_create_vault(admin.clone(), *asset)
          .expect("genesis vault must be creatable");
      }
    }
  }
}
