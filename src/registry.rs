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

//! Static, versioned knowledge base of chain topology.
//!
//! The registry maps a relay-scoped chain id to everything the transfer
//! pipeline knows about the chain without touching the network: its spec
//! name, native tokens, local assets table and registered foreign assets.
//! It is loaded once from the snapshot bundled with the crate and is
//! read-only afterwards. The snapshot goes stale between releases; a miss
//! here is not an error, callers fall back to the live [`ChainClient`]
//! (see [`crate::assets`]).
//!
//! [`ChainClient`]: crate::client::ChainClient

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Relay-scoped chain id. Zero is the relay chain itself.
pub type ChainId = u32;

/// Id band the relay reserves for its system parachains.
const SYSTEM_PARACHAIN_IDS: std::ops::RangeInclusive<ChainId> = 1000..=1999;

/// Bundled registry snapshot, keyed by relay-chain name.
const SNAPSHOT: &str = include_str!("registry/snapshot.json");

/// Where a chain sits in the relay topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainRole {
	/// The root coordinating chain of the network.
	Relay,
	/// A parachain providing shared system services (e.g. asset issuance).
	SystemParachain,
	/// Any other parachain.
	Parachain,
}

impl ChainRole {
	/// Role encoded by the relay-scoped id band.
	pub fn of(chain_id: ChainId) -> Self {
		if chain_id == 0 {
			ChainRole::Relay
		} else if SYSTEM_PARACHAIN_IDS.contains(&chain_id) {
			ChainRole::SystemParachain
		} else {
			ChainRole::Parachain
		}
	}
}

/// Registered foreign asset: issued by another chain, identified by its
/// multi-location rather than a local integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignAssetInfo {
	pub symbol: String,
	pub name: String,
	/// Multi-location of the asset, as a JSON string.
	pub multi_location: String,
}

/// Topology record of a single chain. Immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
	/// Runtime spec name, e.g. `asset-hub-kusama`.
	pub spec_name: String,
	/// Relay-scoped id of this chain; zero for the relay itself.
	#[serde(skip)]
	pub chain_id: ChainId,
	/// Native token symbols, most significant first.
	#[serde(default)]
	pub tokens: Vec<String>,
	/// Local `pallet-assets` table, keyed by the decimal form of the integer
	/// asset id.
	#[serde(default)]
	pub assets_info: BTreeMap<String, String>,
	/// Registered foreign assets, keyed by multi-location.
	#[serde(default)]
	pub foreign_assets_info: BTreeMap<String, ForeignAssetInfo>,
}

impl ChainInfo {
	/// Where this chain sits in the relay topology.
	pub fn role(&self) -> ChainRole {
		ChainRole::of(self.chain_id)
	}

	/// True if `symbol` names one of the chain's native tokens.
	pub fn is_native_token(&self, symbol: &str) -> bool {
		self.tokens.iter().any(|token| token.eq_ignore_ascii_case(symbol))
	}

	/// Look the local assets table up by integer id.
	///
	/// Keys are stored in decimal string form and compared as
	/// case-insensitive strings, matching how the snapshot is produced.
	pub fn asset_symbol_by_id(&self, id: &str) -> Option<&str> {
		self.assets_info
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(id))
			.map(|(_, symbol)| symbol.as_str())
	}

	/// Reverse lookup: resolve an asset symbol to its integer id.
	pub fn asset_id_by_symbol(&self, symbol: &str) -> Option<u128> {
		self.assets_info
			.iter()
			.find(|(_, candidate)| candidate.eq_ignore_ascii_case(symbol))
			.and_then(|(key, _)| key.parse().ok())
	}

	/// True if the given multi-location is a registered foreign asset.
	pub fn has_foreign_asset(&self, location: &str) -> bool {
		self.foreign_assets_info.keys().any(|key| key.eq_ignore_ascii_case(location))
	}
}

/// Per-relay chain registry loaded from the bundled snapshot.
#[derive(Debug, Clone)]
pub struct Registry {
	relay: String,
	chains: BTreeMap<ChainId, ChainInfo>,
}

/// On-disk snapshot layout: relay name to chain-id (decimal string) to record.
type Snapshot = BTreeMap<String, BTreeMap<String, ChainInfo>>;

impl Registry {
	/// Load the registry of the given relay (`polkadot`, `kusama` or
	/// `westend`) from the bundled snapshot.
	pub fn from_snapshot(relay: &str) -> Result<Self, Error> {
		let mut snapshot: Snapshot = serde_json::from_str(SNAPSHOT)
			.map_err(|e| Error::InvalidInput(format!("malformed registry snapshot: {e}")))?;
		let raw_chains = snapshot
			.remove(&relay.to_ascii_lowercase())
			.ok_or_else(|| Error::UnknownChain(format!("no relay named {relay} in the registry snapshot")))?;

		let mut chains = BTreeMap::new();
		for (raw_id, mut info) in raw_chains {
			let chain_id: ChainId = raw_id.parse().map_err(|_| {
				Error::InvalidInput(format!("malformed chain id {raw_id} in the registry snapshot"))
			})?;
			info.chain_id = chain_id;
			chains.insert(chain_id, info);
		}
		Ok(Registry { relay: relay.to_ascii_lowercase(), chains })
	}

	/// The Polkadot relay registry.
	pub fn polkadot() -> Result<Self, Error> {
		Self::from_snapshot("polkadot")
	}

	/// The Kusama relay registry.
	pub fn kusama() -> Result<Self, Error> {
		Self::from_snapshot("kusama")
	}

	/// The Westend relay registry.
	pub fn westend() -> Result<Self, Error> {
		Self::from_snapshot("westend")
	}

	/// Name of the relay this registry is scoped to.
	pub fn relay(&self) -> &str {
		&self.relay
	}

	/// Topology record of the given chain, if the snapshot knows it.
	///
	/// Absence means "not in the snapshot", not "does not exist"; callers
	/// needing certainty must consult the live chain.
	pub fn lookup(&self, chain_id: ChainId) -> Option<&ChainInfo> {
		self.chains.get(&chain_id)
	}

	/// Resolve a runtime spec name to its relay-scoped chain id.
	pub fn chain_id_by_spec_name(&self, spec_name: &str) -> Result<ChainId, Error> {
		self.chains
			.iter()
			.find(|(_, info)| info.spec_name.eq_ignore_ascii_case(spec_name))
			.map(|(id, _)| *id)
			.ok_or_else(|| {
				Error::UnknownChain(format!(
					"no chain with spec name {spec_name} in the {} registry",
					self.relay
				))
			})
	}

	/// Topology record of the chain with the given runtime spec name.
	pub fn chain_info_by_spec_name(&self, spec_name: &str) -> Result<&ChainInfo, Error> {
		let chain_id = self.chain_id_by_spec_name(spec_name)?;
		self.lookup(chain_id).ok_or_else(|| {
			Error::UnknownChain(format!(
				"no chain with spec name {spec_name} in the {} registry",
				self.relay
			))
		})
	}
}
