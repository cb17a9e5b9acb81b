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

//! Version 3 of the location and asset data structures.
//!
//! Account junctions gain an optional network scope (omitted from the wire
//! when absent) and locations gain the `GlobalConsensus` junction for
//! bridged destinations. Neither is expressible in V2, so conversion back
//! is fallible.

use serde::{Deserialize, Serialize};

use super::v2::{
	AssetId as OldAssetId, AssetInstance as OldAssetInstance, Fungibility as OldFungibility,
	Junction as OldJunction, Junctions as OldJunctions, MultiAsset as OldMultiAsset,
	MultiAssets as OldMultiAssets, MultiLocation as OldMultiLocation, NetworkId as OldNetworkId,
};

/// Network scope of an account junction, or a global consensus system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkId {
	Polkadot,
	Kusama,
	Westend,
}

impl TryFrom<OldNetworkId> for Option<NetworkId> {
	type Error = ();
	fn try_from(old: OldNetworkId) -> Result<Self, Self::Error> {
		Ok(match old {
			OldNetworkId::Any => None,
			OldNetworkId::Polkadot => Some(NetworkId::Polkadot),
			OldNetworkId::Kusama => Some(NetworkId::Kusama),
		})
	}
}

/// A single item in a location path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Junction {
	Parachain(u32),
	/// A 32-byte account. Unlike V2 the network scope is optional and the
	/// field is absent from the wire when unset.
	AccountId32 {
		#[serde(skip_serializing_if = "Option::is_none", default)]
		network: Option<NetworkId>,
		id: String,
	},
	PalletInstance(u8),
	GeneralIndex(u128),
	GeneralKey(String),
	/// A global consensus system, used to address across bridges.
	GlobalConsensus(NetworkId),
}

impl TryFrom<OldJunction> for Junction {
	type Error = ();
	fn try_from(old: OldJunction) -> Result<Self, Self::Error> {
		Ok(match old {
			OldJunction::Parachain(id) => Junction::Parachain(id),
			OldJunction::AccountId32 { network, id } =>
				Junction::AccountId32 { network: network.try_into()?, id },
			OldJunction::PalletInstance(index) => Junction::PalletInstance(index),
			OldJunction::GeneralIndex(index) => Junction::GeneralIndex(index),
			OldJunction::GeneralKey(key) => Junction::GeneralKey(key),
		})
	}
}

impl TryFrom<Junction> for OldJunction {
	type Error = ();
	fn try_from(new: Junction) -> Result<Self, Self::Error> {
		Ok(match new {
			Junction::Parachain(id) => OldJunction::Parachain(id),
			Junction::AccountId32 { network, id } => OldJunction::AccountId32 {
				network: match network {
					None => OldNetworkId::Any,
					Some(NetworkId::Polkadot) => OldNetworkId::Polkadot,
					Some(NetworkId::Kusama) => OldNetworkId::Kusama,
					Some(NetworkId::Westend) => return Err(()),
				},
				id,
			},
			Junction::PalletInstance(index) => OldJunction::PalletInstance(index),
			Junction::GeneralIndex(index) => OldJunction::GeneralIndex(index),
			Junction::GeneralKey(key) => OldJunction::GeneralKey(key),
			Junction::GlobalConsensus(_) => return Err(()),
		})
	}
}

/// Non-parent junctions of a location, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Junctions {
	Here,
	X1(Junction),
	X2(Junction, Junction),
	X3(Junction, Junction, Junction),
	X4(Junction, Junction, Junction, Junction),
}

impl TryFrom<OldJunctions> for Junctions {
	type Error = ();
	fn try_from(old: OldJunctions) -> Result<Self, Self::Error> {
		Ok(match old {
			OldJunctions::Here => Junctions::Here,
			OldJunctions::X1(a) => Junctions::X1(a.try_into()?),
			OldJunctions::X2(a, b) => Junctions::X2(a.try_into()?, b.try_into()?),
			OldJunctions::X3(a, b, c) =>
				Junctions::X3(a.try_into()?, b.try_into()?, c.try_into()?),
			OldJunctions::X4(a, b, c, d) =>
				Junctions::X4(a.try_into()?, b.try_into()?, c.try_into()?, d.try_into()?),
		})
	}
}

impl TryFrom<Junctions> for OldJunctions {
	type Error = ();
	fn try_from(new: Junctions) -> Result<Self, Self::Error> {
		Ok(match new {
			Junctions::Here => OldJunctions::Here,
			Junctions::X1(a) => OldJunctions::X1(a.try_into()?),
			Junctions::X2(a, b) => OldJunctions::X2(a.try_into()?, b.try_into()?),
			Junctions::X3(a, b, c) =>
				OldJunctions::X3(a.try_into()?, b.try_into()?, c.try_into()?),
			Junctions::X4(a, b, c, d) =>
				OldJunctions::X4(a.try_into()?, b.try_into()?, c.try_into()?, d.try_into()?),
		})
	}
}

/// A relative path in the consensus topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLocation {
	pub parents: u8,
	pub interior: Junctions,
}

impl MultiLocation {
	pub fn new(parents: u8, interior: Junctions) -> Self {
		MultiLocation { parents, interior }
	}

	/// The chain's own context.
	pub fn here() -> Self {
		MultiLocation { parents: 0, interior: Junctions::Here }
	}
}

impl TryFrom<OldMultiLocation> for MultiLocation {
	type Error = ();
	fn try_from(old: OldMultiLocation) -> Result<Self, Self::Error> {
		Ok(MultiLocation { parents: old.parents, interior: old.interior.try_into()? })
	}
}

impl TryFrom<MultiLocation> for OldMultiLocation {
	type Error = ();
	fn try_from(new: MultiLocation) -> Result<Self, Self::Error> {
		Ok(OldMultiLocation { parents: new.parents, interior: new.interior.try_into()? })
	}
}

/// Identifier of an asset: a concrete location or an abstract label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetId {
	Concrete(MultiLocation),
	Abstract(String),
}

impl TryFrom<OldAssetId> for AssetId {
	type Error = ();
	fn try_from(old: OldAssetId) -> Result<Self, Self::Error> {
		Ok(match old {
			OldAssetId::Concrete(location) => AssetId::Concrete(location.try_into()?),
			OldAssetId::Abstract(label) => AssetId::Abstract(label),
		})
	}
}

/// An instance identifier within a non-fungible class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetInstance {
	Undefined,
	Index(u128),
}

impl From<OldAssetInstance> for AssetInstance {
	fn from(old: OldAssetInstance) -> Self {
		match old {
			OldAssetInstance::Undefined => AssetInstance::Undefined,
			OldAssetInstance::Index(index) => AssetInstance::Index(index),
		}
	}
}

/// Fungibility of an asset, with the amount or instance it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fungibility {
	Fungible(u128),
	NonFungible(AssetInstance),
}

impl From<OldFungibility> for Fungibility {
	fn from(old: OldFungibility) -> Self {
		match old {
			OldFungibility::Fungible(amount) => Fungibility::Fungible(amount),
			OldFungibility::NonFungible(instance) => Fungibility::NonFungible(instance.into()),
		}
	}
}

/// A single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAsset {
	pub id: AssetId,
	pub fun: Fungibility,
}

impl TryFrom<OldMultiAsset> for MultiAsset {
	type Error = ();
	fn try_from(old: OldMultiAsset) -> Result<Self, Self::Error> {
		Ok(MultiAsset { id: old.id.try_into()?, fun: old.fun.into() })
	}
}

/// The asset set attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAssets(pub Vec<MultiAsset>);

impl MultiAssets {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl TryFrom<OldMultiAssets> for MultiAssets {
	type Error = ();
	fn try_from(old: OldMultiAssets) -> Result<Self, Self::Error> {
		Ok(MultiAssets(old.0.into_iter().map(TryInto::try_into).collect::<Result<_, _>>()?))
	}
}
