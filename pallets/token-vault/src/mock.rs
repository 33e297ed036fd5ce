extern crate alloc;

use crate as pallet_token_vault;
use crate::{FungibleAssets, VaultAssets};
use alloc::{vec, vec::Vec};
use core::cell::RefCell;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU128},
};
use polkadot_sdk::frame_system::{self, EnsureSigned};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::AssetKind;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = primitives::Balance;

pub const ADMIN: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const CAROL: AccountId = 4;
/// Holds nothing on any ledger
pub const DAVE: AccountId = 5;

/// Sufficient asset, any account can receive it
pub const USDX_ID: u32 = 7;
pub const USDX: AssetKind = AssetKind::Local(USDX_ID);
pub const USDX_MIN_BALANCE: Balance = 5;

/// Non-sufficient asset, recipients need a native provider first
pub const GOLD_ID: u32 = 8;
pub const GOLD: AssetKind = AssetKind::Local(GOLD_ID);

pub const INITIAL_NATIVE: Balance = 10_000;
pub const INITIAL_USDX: Balance = 10_000;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    TokenVault: pallet_token_vault,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = Balance;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

thread_local! {
  // When set, every transfer fails as if the asset layer refused it
  pub static REJECT_TRANSFERS: RefCell<bool> = const { RefCell::new(false) };
}

pub fn reject_transfers(reject: bool) {
  REJECT_TRANSFERS.with(|r| *r.borrow_mut() = reject);
}

type RuntimeAssets = FungibleAssets<Balances, Assets>;

/// Real asset pallets behind a switch that can fail transfers on demand.
pub struct MockVaultAssets;
impl VaultAssets<AccountId, AssetKind, Balance> for MockVaultAssets {
  fn transfer(
    asset: AssetKind,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult {
    if REJECT_TRANSFERS.with(|r| *r.borrow()) {
      return Err(DispatchError::Other("transfer rejected"));
    }
    <RuntimeAssets as VaultAssets<AccountId, AssetKind, Balance>>::transfer(asset, from, to, amount)
  }

  fn ensure_can_receive(asset: AssetKind, who: &AccountId, amount: Balance) -> DispatchResult {
    <RuntimeAssets as VaultAssets<AccountId, AssetKind, Balance>>::ensure_can_receive(
      asset, who, amount,
    )
  }

  fn balance(asset: AssetKind, who: &AccountId) -> Balance {
    <RuntimeAssets as VaultAssets<AccountId, AssetKind, Balance>>::balance(asset, who)
  }

  fn minimum_balance(asset: AssetKind) -> Balance {
    <RuntimeAssets as VaultAssets<AccountId, AssetKind, Balance>>::minimum_balance(asset)
  }
}

parameter_types! {
  pub const VaultPalletId: PalletId = PalletId(*primitives::pallet_ids::TOKEN_VAULT_PALLET_ID);
}

#[cfg(feature = "runtime-benchmarks")]
pub struct VaultBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId, AssetKind, Balance> for VaultBenchmarkHelper {
  fn asset() -> AssetKind {
    USDX
  }

  fn fund(who: &AccountId, asset: AssetKind, amount: Balance) -> DispatchResult {
    use polkadot_sdk::frame_support::traits::{fungible, fungibles};
    match asset {
      AssetKind::Native => {
        <Balances as fungible::Mutate<AccountId>>::mint_into(who, amount.saturating_add(1))?;
      }
      AssetKind::Local(id) | AssetKind::Foreign(id) => {
        <Assets as fungibles::Mutate<AccountId>>::mint_into(
          id,
          who,
          amount.saturating_add(USDX_MIN_BALANCE),
        )?;
      }
    }
    Ok(())
  }
}

impl pallet_token_vault::Config for Test {
  type AssetId = AssetKind;
  type Balance = Balance;
  type Assets = MockVaultAssets;
  type PalletId = VaultPalletId;
  type CreateOrigin = EnsureSigned<AccountId>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = VaultBenchmarkHelper;
}

#[derive(Default)]
pub struct ExtBuilder {
  vaults: Vec<(AccountId, AssetKind)>,
}

impl ExtBuilder {
  /// Vaults created by genesis
  pub fn with_vaults(mut self, vaults: Vec<(AccountId, AssetKind)>) -> Self {
    self.vaults = vaults;
    self
  }

  pub fn build(self) -> polkadot_sdk::sp_io::TestExternalities {
    reject_transfers(false);

    let mut t = frame_system::GenesisConfig::<Test>::default()
      .build_storage()
      .unwrap();

    polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
      balances: vec![
        (ADMIN, INITIAL_NATIVE),
        (ALICE, 1_000),
        (BOB, 1_000),
        (CAROL, 1_000),
      ],
      dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
      assets: vec![
        (USDX_ID, ADMIN, true, USDX_MIN_BALANCE),
        (GOLD_ID, ADMIN, false, 1),
      ],
      metadata: vec![],
      accounts: vec![(USDX_ID, ADMIN, INITIAL_USDX), (GOLD_ID, ADMIN, 1_000)],
      reserves: vec![],
      next_asset_id: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_token_vault::GenesisConfig::<Test> {
      vaults: self.vaults,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
    ext.execute_with(|| System::set_block_number(1));
    ext
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  ExtBuilder::default().build()
}
