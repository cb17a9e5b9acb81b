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

//! Chain client mock shared by the unit tests.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

use crate::{
	client::{AssetRecord, ChainClient},
	error::Error,
	registry::ChainInfo,
};

/// In-memory [`ChainClient`] with a configurable chain state.
#[derive(Debug, Default)]
pub struct MockClient {
	assets: BTreeMap<u128, AssetRecord>,
	foreign_assets: BTreeSet<String>,
	invalid_pool_assets: BTreeSet<u128>,
	failure: Option<String>,
}

impl MockClient {
	/// A client whose every query fails with the given message.
	pub fn failing(message: &str) -> Self {
		MockClient { failure: Some(message.to_string()), ..Default::default() }
	}

	pub fn add_asset(&mut self, id: u128, symbol: &str) {
		self.assets
			.insert(id, AssetRecord { symbol: Some(symbol.to_string()), decimals: Some(10) });
	}

	pub fn add_foreign_asset(&mut self, location: &str) {
		self.foreign_assets.insert(location.to_string());
	}

	pub fn invalidate_pool_asset(&mut self, id: u128) {
		self.invalid_pool_assets.insert(id);
	}

	fn check_failure(&self) -> Result<(), Error> {
		match &self.failure {
			Some(message) => Err(Error::Client(message.clone())),
			None => Ok(()),
		}
	}
}

#[async_trait]
impl ChainClient for MockClient {
	async fn asset_exists(&self, asset_id: u128) -> Result<Option<AssetRecord>, Error> {
		self.check_failure()?;
		Ok(self.assets.get(&asset_id).cloned())
	}

	async fn foreign_asset_exists(&self, location: &str) -> Result<bool, Error> {
		self.check_failure()?;
		Ok(self.foreign_assets.contains(location))
	}

	async fn liquid_pool_validity(&self, chain: &ChainInfo, asset_id: u128) -> Result<(), Error> {
		self.check_failure()?;
		if self.invalid_pool_assets.contains(&asset_id) {
			return Err(Error::LiquidTokenInvalid(format!(
				"asset {asset_id} is not a pool asset on {}",
				chain.spec_name
			)))
		}
		Ok(())
	}

	async fn account_nonce(&self, _address: &str) -> Result<u64, Error> {
		self.check_failure()?;
		Ok(0)
	}
}
