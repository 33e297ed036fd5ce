use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Asset a vault is denominated in.
///
/// - `Native`: The system's native token (managed by pallet-balances).
/// - `Local(u32)`: Local assets (managed by pallet-assets).
/// - `Foreign(u32)`: Foreign assets mirrored into pallet-assets.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  /// Native token managed by pallet-balances
  #[default]
  Native,
  /// Local asset managed by pallet-assets
  Local(u32),
  /// Foreign asset mirrored into pallet-assets
  Foreign(u32),
}

impl From<u32> for AssetKind {
  fn from(asset_id: u32) -> Self {
    AssetKind::Local(asset_id)
  }
}

impl AssetKind {
  /// Id inside pallet-assets, `None` for the native token
  pub fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) | AssetKind::Foreign(id) => Some(*id),
      AssetKind::Native => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn local_id_skips_native() {
    assert_eq!(AssetKind::Native.local_id(), None);
    assert_eq!(AssetKind::Local(7).local_id(), Some(7));
    assert_eq!(AssetKind::Foreign(9).local_id(), Some(9));
  }

  #[test]
  fn plain_ids_are_local() {
    assert_eq!(AssetKind::from(3), AssetKind::Local(3));
    assert_eq!(AssetKind::default(), AssetKind::Native);
  }
}
