// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Substrate Asset Transfer.

// Substrate Asset Transfer is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Substrate Asset Transfer is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Substrate Asset Transfer.  If not, see <http://www.gnu.org/licenses/>.

//! Version 4 of the location and asset data structures.
//!
//! Junctions are unchanged from V3; the `Multi` prefix is dropped from the
//! type names and an asset id is now always a concrete location, the
//! abstract form having been removed.

use serde::{Deserialize, Serialize};

use super::v3::{
	AssetId as OldAssetId, MultiAsset as OldAsset, MultiAssets as OldAssets,
	MultiLocation as OldLocation,
};

pub use super::v3::{AssetInstance, Fungibility, Junction, Junctions, NetworkId};

/// A relative path in the consensus topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	pub parents: u8,
	pub interior: Junctions,
}

impl Location {
	pub fn new(parents: u8, interior: Junctions) -> Self {
		Location { parents, interior }
	}

	/// The chain's own context.
	pub fn here() -> Self {
		Location { parents: 0, interior: Junctions::Here }
	}
}

impl From<OldLocation> for Location {
	fn from(old: OldLocation) -> Self {
		Location { parents: old.parents, interior: old.interior }
	}
}

impl From<Location> for OldLocation {
	fn from(new: Location) -> Self {
		OldLocation { parents: new.parents, interior: new.interior }
	}
}

/// Identifier of an asset: always a concrete location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetId(pub Location);

impl TryFrom<OldAssetId> for AssetId {
	type Error = ();
	fn try_from(old: OldAssetId) -> Result<Self, Self::Error> {
		match old {
			OldAssetId::Concrete(location) => Ok(AssetId(location.into())),
			OldAssetId::Abstract(_) => Err(()),
		}
	}
}

/// A single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
	pub id: AssetId,
	pub fun: Fungibility,
}

impl TryFrom<OldAsset> for Asset {
	type Error = ();
	fn try_from(old: OldAsset) -> Result<Self, Self::Error> {
		Ok(Asset { id: old.id.try_into()?, fun: old.fun })
	}
}

/// The asset set attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets(pub Vec<Asset>);

impl Assets {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl TryFrom<OldAssets> for Assets {
	type Error = ();
	fn try_from(old: OldAssets) -> Result<Self, Self::Error> {
		Ok(Assets(old.0.into_iter().map(TryInto::try_into).collect::<Result<_, _>>()?))
	}
}
