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

//! Capability trait connecting the transfer pipeline to a live chain.

use async_trait::async_trait;

use crate::{error::Error, registry::ChainInfo};

/// On-chain record of a `pallet-assets` asset, as reported by the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRecord {
	/// Asset symbol from the chain metadata, if set.
	pub symbol: Option<String>,
	/// Asset decimals from the chain metadata, if set.
	pub decimals: Option<u8>,
}

/// Read-only view of a running chain from the transfer pipeline's point of
/// view.
///
/// The implementation owns connection management, metadata decoding, timeouts
/// and retry policy. This crate issues at most one query at a time per request
/// and treats every reported failure as terminal.
#[async_trait]
pub trait ChainClient: Send + Sync {
	/// Return the asset record for the given integer id, if the chain knows
	/// the asset.
	async fn asset_exists(&self, asset_id: u128) -> Result<Option<AssetRecord>, Error>;

	/// Return true if the given multi-location is registered as a foreign
	/// asset on the chain.
	async fn foreign_asset_exists(&self, location: &str) -> Result<bool, Error>;

	/// Check that the given asset id denotes a valid liquidity-pool token on
	/// `chain`. A failed check is reported as [`Error::LiquidTokenInvalid`]
	/// and surfaced to the caller unchanged.
	async fn liquid_pool_validity(&self, chain: &ChainInfo, asset_id: u128) -> Result<(), Error>;

	/// Next free nonce of the given account.
	async fn account_nonce(&self, address: &str) -> Result<u64, Error>;
}
