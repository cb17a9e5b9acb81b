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

//! Per-direction construction of the XCM payload fragments.
//!
//! Every [`Direction`] has one [`DirectionBuilder`] implementor. The
//! builders share a four-operation contract (beneficiary, destination,
//! assets, weight limit) plus the fee-asset index, and differ only where the
//! wire demands it: the parent count of the destination, the concrete
//! location substituted for each asset, and which asset pays the fees. New
//! directions are added as new implementors, never by branching inside a
//! shared function.

use async_trait::async_trait;

use super::{v2, v3, v4, VersionedAssets, VersionedLocation, Weight, WeightLimit, XcmVersion};
use crate::{client::ChainClient, error::Error, registry::ChainId, transfers::Direction};

/// Instance index of `pallet-assets` on the system parachains.
const ASSETS_PALLET_INSTANCE: u8 = 50;

/// Everything the caller needs to populate a cross-chain transfer extrinsic.
///
/// Version-homogeneous by construction: beneficiary, destination and assets
/// always carry the same version tag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XcmPayload {
	pub beneficiary: VersionedLocation,
	pub destination: VersionedLocation,
	pub assets: VersionedAssets,
	pub weight_limit: WeightLimit,
	pub fee_asset_item: u32,
}

/// Caller-facing description of a cross-chain transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequest {
	/// Receiving account on the destination chain, as supplied by the caller.
	pub beneficiary: String,
	/// Relay-scoped id of the destination chain; zero for the relay itself.
	pub dest_chain_id: ChainId,
	/// Asset selectors: resolved integer ids or multi-location JSON strings.
	/// Empty means the source chain's native asset.
	pub asset_ids: Vec<String>,
	/// One amount per transferred asset, in decimal string form.
	pub amounts: Vec<String>,
	/// Requested execution budget on the destination side.
	pub weight_limit: WeightLimitOption,
}

/// Caller's weight-limit request.
///
/// A limited weight needs `is_limited` plus both components; anything less
/// silently downgrades to `Unlimited`. Partial input is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightLimitOption {
	pub is_limited: bool,
	pub ref_time: Option<u64>,
	pub proof_size: Option<u64>,
}

/// The contract every direction implements.
///
/// All operations are pure functions of their inputs; only the fee-asset
/// index may additionally issue a read-only chain query.
#[async_trait]
pub trait DirectionBuilder: Send + Sync {
	/// Location of the receiving account on the destination chain.
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error>;

	/// Location of the destination chain as seen from the source chain.
	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error>;

	/// The transferred asset set, one fungible entry per amount.
	fn assets(&self, request: &TransferRequest, version: XcmVersion)
		-> Result<VersionedAssets, Error>;

	/// Execution budget declared for the destination side.
	fn weight_limit(&self, option: &WeightLimitOption) -> WeightLimit {
		match (option.is_limited, option.ref_time, option.proof_size) {
			(true, Some(ref_time), Some(proof_size)) =>
				WeightLimit::Limited(Weight { ref_time, proof_size }),
			_ => WeightLimit::Unlimited,
		}
	}

	/// Index into the asset set naming the entry that pays fees.
	async fn fee_asset_item(
		&self,
		client: &dyn ChainClient,
		request: &TransferRequest,
	) -> Result<u32, Error>;
}

/// The builder for the given direction.
pub fn builder_for(direction: Direction) -> &'static dyn DirectionBuilder {
	match direction {
		Direction::RelayToSystem => &RelayToSystem,
		Direction::RelayToPara => &RelayToPara,
		Direction::SystemToRelay => &SystemToRelay,
		Direction::SystemToSystem => &SystemToSystem,
		Direction::SystemToPara => &SystemToPara,
		Direction::ParaToRelay => &ParaToRelay,
		Direction::ParaToSystem => &ParaToSystem,
		Direction::ParaToPara => &ParaToPara,
	}
}

/// Run the full builder pipeline for one request.
pub async fn build_cross_chain_payload(
	client: &dyn ChainClient,
	direction: Direction,
	request: &TransferRequest,
	version: XcmVersion,
) -> Result<XcmPayload, Error> {
	let builder = builder_for(direction);
	Ok(XcmPayload {
		beneficiary: builder.beneficiary(&request.beneficiary, version)?,
		destination: builder.destination(request.dest_chain_id, version)?,
		assets: builder.assets(request, version)?,
		weight_limit: builder.weight_limit(&request.weight_limit),
		fee_asset_item: builder.fee_asset_item(client, request).await?,
	})
}

/// Relay chain to one of its system parachains.
pub struct RelayToSystem;

/// Relay chain to a common parachain.
pub struct RelayToPara;

/// System parachain up to its relay chain.
pub struct SystemToRelay;

/// System parachain to a sibling system parachain.
pub struct SystemToSystem;

/// System parachain to a sibling common parachain.
pub struct SystemToPara;

/// Common parachain up to its relay chain.
pub struct ParaToRelay;

/// Common parachain to a sibling system parachain.
pub struct ParaToSystem;

/// Common parachain to a sibling common parachain.
pub struct ParaToPara;

#[async_trait]
impl DirectionBuilder for RelayToSystem {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(0, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		here_assets(0, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		_request: &TransferRequest,
	) -> Result<u32, Error> {
		Ok(0)
	}
}

#[async_trait]
impl DirectionBuilder for RelayToPara {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(0, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		here_assets(0, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		_request: &TransferRequest,
	) -> Result<u32, Error> {
		Ok(0)
	}
}

#[async_trait]
impl DirectionBuilder for SystemToRelay {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, _dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(relay_destination(version))
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		// The relay's native asset, addressed one level up.
		here_assets(1, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		_request: &TransferRequest,
	) -> Result<u32, Error> {
		Ok(0)
	}
}

#[async_trait]
impl DirectionBuilder for SystemToSystem {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(1, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		system_origin_assets(request, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		request: &TransferRequest,
	) -> Result<u32, Error> {
		last_asset_index(request)
	}
}

#[async_trait]
impl DirectionBuilder for SystemToPara {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(1, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		system_origin_assets(request, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		request: &TransferRequest,
	) -> Result<u32, Error> {
		last_asset_index(request)
	}
}

#[async_trait]
impl DirectionBuilder for ParaToRelay {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, _dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(relay_destination(version))
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		// The relay's native asset, seen from the parachain.
		here_assets(1, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		_request: &TransferRequest,
	) -> Result<u32, Error> {
		Ok(0)
	}
}

#[async_trait]
impl DirectionBuilder for ParaToSystem {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(1, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		here_assets(0, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		request: &TransferRequest,
	) -> Result<u32, Error> {
		last_asset_index(request)
	}
}

#[async_trait]
impl DirectionBuilder for ParaToPara {
	fn beneficiary(&self, account: &str, version: XcmVersion) -> Result<VersionedLocation, Error> {
		Ok(account_location(account, version))
	}

	fn destination(&self, dest: ChainId, version: XcmVersion) -> Result<VersionedLocation, Error> {
		parachain_destination(1, dest, version)
	}

	fn assets(
		&self,
		request: &TransferRequest,
		version: XcmVersion,
	) -> Result<VersionedAssets, Error> {
		here_assets(0, &parse_amounts(&request.amounts)?, version)
	}

	async fn fee_asset_item(
		&self,
		_client: &dyn ChainClient,
		request: &TransferRequest,
	) -> Result<u32, Error> {
		last_asset_index(request)
	}
}

/// Single-junction account location, `parents: 0`.
///
/// The V2 account junction carries the mandatory `Any` network scope; V3 and
/// V4 leave the scope unset and omit the field from the wire.
fn account_location(account: &str, version: XcmVersion) -> VersionedLocation {
	match version {
		XcmVersion::V2 => VersionedLocation::V2(v2::MultiLocation::new(
			0,
			v2::Junctions::X1(v2::Junction::AccountId32 {
				network: v2::NetworkId::Any,
				id: account.to_string(),
			}),
		)),
		XcmVersion::V3 => VersionedLocation::V3(v3::MultiLocation::new(
			0,
			v3::Junctions::X1(v3::Junction::AccountId32 { network: None, id: account.to_string() }),
		)),
		XcmVersion::V4 => VersionedLocation::V4(v4::Location::new(
			0,
			v4::Junctions::X1(v4::Junction::AccountId32 { network: None, id: account.to_string() }),
		)),
	}
}

/// Single-junction parachain destination with the given parent count.
fn parachain_destination(
	parents: u8,
	dest: ChainId,
	version: XcmVersion,
) -> Result<VersionedLocation, Error> {
	if dest == 0 {
		return Err(Error::InvalidInput(
			"destination chain id 0 names the relay, not a parachain".to_string(),
		))
	}
	Ok(match version {
		XcmVersion::V2 => VersionedLocation::V2(v2::MultiLocation::new(
			parents,
			v2::Junctions::X1(v2::Junction::Parachain(dest)),
		)),
		XcmVersion::V3 => VersionedLocation::V3(v3::MultiLocation::new(
			parents,
			v3::Junctions::X1(v3::Junction::Parachain(dest)),
		)),
		XcmVersion::V4 => VersionedLocation::V4(v4::Location::new(
			parents,
			v4::Junctions::X1(v4::Junction::Parachain(dest)),
		)),
	})
}

/// The relay chain as seen from one of its parachains.
fn relay_destination(version: XcmVersion) -> VersionedLocation {
	match version {
		XcmVersion::V2 => VersionedLocation::V2(v2::MultiLocation::new(1, v2::Junctions::Here)),
		XcmVersion::V3 => VersionedLocation::V3(v3::MultiLocation::new(1, v3::Junctions::Here)),
		XcmVersion::V4 => VersionedLocation::V4(v4::Location::new(1, v4::Junctions::Here)),
	}
}

/// One fungible entry per amount, all at `(parents, Here)`.
fn here_assets(
	parents: u8,
	amounts: &[u128],
	version: XcmVersion,
) -> Result<VersionedAssets, Error> {
	Ok(match version {
		XcmVersion::V2 => VersionedAssets::V2(v2::MultiAssets(
			amounts
				.iter()
				.map(|&amount| v2::MultiAsset {
					id: v2::AssetId::Concrete(v2::MultiLocation::new(parents, v2::Junctions::Here)),
					fun: v2::Fungibility::Fungible(amount),
				})
				.collect(),
		)),
		XcmVersion::V3 => VersionedAssets::V3(v3::MultiAssets(
			amounts
				.iter()
				.map(|&amount| v3::MultiAsset {
					id: v3::AssetId::Concrete(v3::MultiLocation::new(parents, v3::Junctions::Here)),
					fun: v3::Fungibility::Fungible(amount),
				})
				.collect(),
		)),
		XcmVersion::V4 => VersionedAssets::V4(v4::Assets(
			amounts
				.iter()
				.map(|&amount| v4::Asset {
					id: v4::AssetId(v4::Location::new(parents, v4::Junctions::Here)),
					fun: v4::Fungibility::Fungible(amount),
				})
				.collect(),
		)),
	})
}

/// Asset selector on a system parachain, decided per entry. An empty
/// selector list short-circuits to the native asset before parsing.
enum SystemAsset {
	/// A `pallet-assets` asset: `X2(PalletInstance(50), GeneralIndex(id))`.
	PalletAsset(u128),
	/// A foreign asset at its own multi-location.
	Foreign(String),
}

impl SystemAsset {
	fn parse(raw: &str) -> Result<Self, Error> {
		if let Ok(id) = raw.parse::<u128>() {
			return Ok(SystemAsset::PalletAsset(id))
		}
		if raw.trim_start().starts_with('{') {
			return Ok(SystemAsset::Foreign(raw.to_string()))
		}
		Err(Error::InvalidInput(format!(
			"asset id {raw} must be resolved to an integer id or a multi-location before building"
		)))
	}
}

/// Assets sent from a system parachain: the concrete location is substituted
/// per entry depending on what the selector names.
fn system_origin_assets(
	request: &TransferRequest,
	version: XcmVersion,
) -> Result<VersionedAssets, Error> {
	let amounts = parse_amounts(&request.amounts)?;
	if request.asset_ids.is_empty() {
		return here_assets(1, &amounts, version)
	}
	if request.asset_ids.len() != amounts.len() {
		return Err(Error::InvalidInput(format!(
			"{} asset ids for {} amounts",
			request.asset_ids.len(),
			amounts.len()
		)))
	}

	match version {
		XcmVersion::V2 => {
			let mut assets = Vec::with_capacity(amounts.len());
			for (raw, &amount) in request.asset_ids.iter().zip(&amounts) {
				let location = match SystemAsset::parse(raw)? {
					SystemAsset::PalletAsset(id) => v2::MultiLocation::new(
						0,
						v2::Junctions::X2(
							v2::Junction::PalletInstance(ASSETS_PALLET_INSTANCE),
							v2::Junction::GeneralIndex(id),
						),
					),
					SystemAsset::Foreign(raw_location) => parse_location(&raw_location)?,
				};
				assets.push(v2::MultiAsset {
					id: v2::AssetId::Concrete(location),
					fun: v2::Fungibility::Fungible(amount),
				});
			}
			Ok(VersionedAssets::V2(v2::MultiAssets(assets)))
		},
		XcmVersion::V3 => {
			let mut assets = Vec::with_capacity(amounts.len());
			for (raw, &amount) in request.asset_ids.iter().zip(&amounts) {
				let location = match SystemAsset::parse(raw)? {
					SystemAsset::PalletAsset(id) => v3::MultiLocation::new(
						0,
						v3::Junctions::X2(
							v3::Junction::PalletInstance(ASSETS_PALLET_INSTANCE),
							v3::Junction::GeneralIndex(id),
						),
					),
					SystemAsset::Foreign(raw_location) => parse_location(&raw_location)?,
				};
				assets.push(v3::MultiAsset {
					id: v3::AssetId::Concrete(location),
					fun: v3::Fungibility::Fungible(amount),
				});
			}
			Ok(VersionedAssets::V3(v3::MultiAssets(assets)))
		},
		XcmVersion::V4 => {
			let mut assets = Vec::with_capacity(amounts.len());
			for (raw, &amount) in request.asset_ids.iter().zip(&amounts) {
				let location = match SystemAsset::parse(raw)? {
					SystemAsset::PalletAsset(id) => v4::Location::new(
						0,
						v4::Junctions::X2(
							v4::Junction::PalletInstance(ASSETS_PALLET_INSTANCE),
							v4::Junction::GeneralIndex(id),
						),
					),
					SystemAsset::Foreign(raw_location) => parse_location(&raw_location)?,
				};
				assets.push(v4::Asset {
					id: v4::AssetId(location),
					fun: v4::Fungibility::Fungible(amount),
				});
			}
			Ok(VersionedAssets::V4(v4::Assets(assets)))
		},
	}
}

/// Parse a multi-location JSON string into the requested version's type.
fn parse_location<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, Error> {
	serde_json::from_str(raw)
		.map_err(|e| Error::InvalidInput(format!("malformed multi-location {raw}: {e}")))
}

fn parse_amounts(amounts: &[String]) -> Result<Vec<u128>, Error> {
	if amounts.is_empty() {
		return Err(Error::InvalidInput("at least one amount is required".to_string()))
	}
	amounts
		.iter()
		.map(|amount| {
			amount.parse().map_err(|_| {
				Error::InvalidInput(format!("amount {amount} is not an unsigned integer"))
			})
		})
		.collect()
}

/// The fee asset must be visible on the receiving side, so lateral transfers
/// name the last entry of the (already ordered) asset set.
fn last_asset_index(request: &TransferRequest) -> Result<u32, Error> {
	if request.amounts.is_empty() {
		return Err(Error::InvalidInput("at least one amount is required".to_string()))
	}
	Ok((request.amounts.len() - 1) as u32)
}
