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

//! Classification of transfer requests.
//!
//! A request is classified exactly once: either into a [`TransferKind`]
//! naming the local pallet that executes it, or into a cross-chain
//! [`Direction`] that selects the XCM builder. Input shape is validated
//! before any resolution work and the decision order below is first match
//! wins, mirroring the asset-kind priority the chains themselves enforce.

use log::debug;

use crate::{
	assets::{self, ResolvedAsset},
	client::ChainClient,
	error::Error,
	registry::{ChainRole, Registry},
};

const LOG_TARGET: &str = "asset-transfer";

/// Local transfer category, carrying the resolved asset it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferKind {
	/// Native-token transfer through `pallet-balances`.
	LocalBalances,
	/// Transfer of a local asset through `pallet-assets`.
	LocalAssets(u128),
	/// Transfer of a foreign asset, identified by multi-location.
	LocalForeignAssets(String),
	/// Transfer of a liquidity-pool token through `pallet-pool-assets`.
	LocalPoolAssets(u128),
}

impl TransferKind {
	/// Extrinsic selector for this transfer: `(pallet, call)`.
	pub fn call(&self) -> (&'static str, &'static str) {
		match self {
			TransferKind::LocalBalances => ("Balances", "transfer_keep_alive"),
			TransferKind::LocalAssets(_) => ("Assets", "transfer"),
			TransferKind::LocalForeignAssets(_) => ("ForeignAssets", "transfer"),
			TransferKind::LocalPoolAssets(_) => ("PoolAssets", "transfer"),
		}
	}
}

/// Cross-chain route, classified once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	RelayToSystem,
	RelayToPara,
	SystemToRelay,
	SystemToSystem,
	SystemToPara,
	ParaToRelay,
	ParaToSystem,
	ParaToPara,
}

impl Direction {
	/// Pure lookup from the `(source, dest)` role pair. An unsupported pair
	/// fails rather than defaulting.
	pub fn classify(source: ChainRole, dest: ChainRole) -> Result<Self, Error> {
		use ChainRole::*;
		Ok(match (source, dest) {
			(Relay, SystemParachain) => Direction::RelayToSystem,
			(Relay, Parachain) => Direction::RelayToPara,
			(SystemParachain, Relay) => Direction::SystemToRelay,
			(SystemParachain, SystemParachain) => Direction::SystemToSystem,
			(SystemParachain, Parachain) => Direction::SystemToPara,
			(Parachain, Relay) => Direction::ParaToRelay,
			(Parachain, SystemParachain) => Direction::ParaToSystem,
			(Parachain, Parachain) => Direction::ParaToPara,
			(Relay, Relay) => return Err(Error::UnsupportedRoute { origin: source, dest }),
		})
	}
}

/// Classify a local transfer request.
///
/// The registry is consulted first for every lookup; `client` is only
/// reached for assets the snapshot does not know.
pub async fn classify_local_transfer(
	client: &dyn ChainClient,
	asset_ids: &[String],
	amounts: &[String],
	spec_name: &str,
	registry: &Registry,
	is_foreign_assets_transfer: bool,
	is_liquid_token_transfer: bool,
) -> Result<TransferKind, Error> {
	check_shape(asset_ids, amounts, is_foreign_assets_transfer)?;
	let chain = registry.chain_info_by_spec_name(spec_name)?;

	if is_foreign_assets_transfer {
		let location = assets::resolve_foreign(client, &asset_ids[0], chain).await?;
		return Ok(TransferKind::LocalForeignAssets(location))
	}

	if is_liquid_token_transfer {
		let raw = asset_ids.first().ok_or_else(|| {
			Error::InvalidInput("liquid token transfers require an asset id".to_string())
		})?;
		let id: u128 = raw.parse().map_err(|_| {
			Error::InvalidInput(format!("liquid token transfers take an integer asset id, got {raw}"))
		})?;
		// The validity check is owned by the pool collaborator; its error
		// kind propagates unchanged.
		client.liquid_pool_validity(chain, id).await?;
		return Ok(TransferKind::LocalPoolAssets(id))
	}

	let raw = match asset_ids.first() {
		None => {
			debug!(target: LOG_TARGET, "empty asset id list on {spec_name}: native transfer");
			return Ok(TransferKind::LocalBalances)
		},
		Some(raw) if raw.is_empty() => return Ok(TransferKind::LocalBalances),
		Some(raw) => raw,
	};

	match assets::resolve(client, raw, chain, false).await? {
		ResolvedAsset::Native(_) => Ok(TransferKind::LocalBalances),
		ResolvedAsset::Local(id) => Ok(TransferKind::LocalAssets(id)),
		ResolvedAsset::Foreign(location) => Ok(TransferKind::LocalForeignAssets(location)),
	}
}

/// Fail-fast shape validation, run before any resolution work.
fn check_shape(
	asset_ids: &[String],
	amounts: &[String],
	is_foreign_assets_transfer: bool,
) -> Result<(), Error> {
	if asset_ids.len() > 1 {
		return Err(Error::InvalidInput(format!(
			"local transfers take at most one asset id, got {}",
			asset_ids.len()
		)))
	}
	if amounts.len() != 1 {
		return Err(Error::InvalidInput(format!(
			"local transfers take exactly one amount, got {}",
			amounts.len()
		)))
	}
	for amount in amounts {
		amount.parse::<u128>().map_err(|_| {
			Error::InvalidInput(format!("amount {amount} is not an unsigned integer"))
		})?;
	}
	if is_foreign_assets_transfer && asset_ids.len() != 1 {
		return Err(Error::InvalidInput(
			"foreign-asset transfers require a multi-location asset id".to_string(),
		))
	}
	Ok(())
}
