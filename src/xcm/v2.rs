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

//! Version 2 of the location and asset data structures.
//!
//! The defining trait of this version is the mandatory `network` scope on
//! account junctions: an `AccountId32` always carries a [`NetworkId`], with
//! [`NetworkId::Any`] as the catch-all. Later versions make the scope
//! optional and omit it from the wire when absent. Chains still running V2
//! reject the later shape, so both are reproduced exactly.

use serde::{Deserialize, Serialize};

/// Network scope of an account junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkId {
	/// Unrestricted: any network.
	Any,
	Polkadot,
	Kusama,
}

/// A single item in a location path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Junction {
	/// An indexed parachain belonging to the consensus system one level up.
	Parachain(u32),
	/// A 32-byte account. The id is carried as supplied by the caller; byte
	/// encoding belongs to the chain client.
	AccountId32 { network: NetworkId, id: String },
	/// An instanced pallet on the chain.
	PalletInstance(u8),
	/// A nondescript index within the context one level up.
	GeneralIndex(u128),
	/// A nondescript datum within the context one level up.
	GeneralKey(String),
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

/// Identifier of an asset: a concrete location or an abstract label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetId {
	Concrete(MultiLocation),
	Abstract(String),
}

/// An instance identifier within a non-fungible class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetInstance {
	Undefined,
	Index(u128),
}

/// Fungibility of an asset, with the amount or instance it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fungibility {
	Fungible(u128),
	NonFungible(AssetInstance),
}

/// A single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAsset {
	pub id: AssetId,
	pub fun: Fungibility,
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
