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

//! Caller-supplied asset identifiers and their resolution.
//!
//! Raw asset identifiers arrive as strings and are parsed exactly once, at
//! the boundary, into the [`AssetIdentifier`] union. Resolution then tries an
//! ordered sequence of sources: the bundled registry first, the live chain
//! second. Every source is consulted before the asset is declared unknown.
//! All symbol and id comparisons are case-insensitive and the resolver never
//! performs writes.

use log::debug;

use crate::{client::ChainClient, error::Error, registry::ChainInfo};

const LOG_TARGET: &str = "asset-transfer";

/// A caller-supplied asset identifier, parsed once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetIdentifier {
	/// A token symbol, e.g. `KSM` or `USDT`.
	Symbol(String),
	/// An integer id into the chain's local assets table.
	Id(u128),
	/// A multi-location, as a JSON string.
	Location(String),
}

impl AssetIdentifier {
	/// Parse a raw identifier.
	///
	/// Foreign-asset transfers always carry a multi-location; otherwise a
	/// string that parses as an unsigned integer is an id and anything else
	/// is a symbol.
	pub fn parse(raw: &str, is_foreign_assets_transfer: bool) -> Self {
		if is_foreign_assets_transfer {
			AssetIdentifier::Location(raw.to_string())
		} else if let Ok(id) = raw.parse::<u128>() {
			AssetIdentifier::Id(id)
		} else {
			AssetIdentifier::Symbol(raw.to_string())
		}
	}
}

/// The canonical outcome of resolving an [`AssetIdentifier`] against a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAsset {
	/// One of the chain's native tokens.
	Native(String),
	/// An existing asset in the chain's local assets table.
	Local(u128),
	/// A registered foreign asset, by multi-location.
	Foreign(String),
}

/// Resolve `raw` against `chain`, falling back to a live query through
/// `client` when the bundled registry misses.
pub async fn resolve(
	client: &dyn ChainClient,
	raw: &str,
	chain: &ChainInfo,
	is_foreign_assets_transfer: bool,
) -> Result<ResolvedAsset, Error> {
	match AssetIdentifier::parse(raw, is_foreign_assets_transfer) {
		AssetIdentifier::Location(location) => {
			resolve_foreign(client, &location, chain).await.map(ResolvedAsset::Foreign)
		},
		AssetIdentifier::Id(id) => resolve_id(client, raw, id, chain).await.map(ResolvedAsset::Local),
		AssetIdentifier::Symbol(symbol) => resolve_symbol(&symbol, chain),
	}
}

/// Resolve a foreign-asset multi-location: registry table first, then the
/// live foreign-assets query.
pub(crate) async fn resolve_foreign(
	client: &dyn ChainClient,
	location: &str,
	chain: &ChainInfo,
) -> Result<String, Error> {
	if chain.has_foreign_asset(location) {
		debug!(
			target: LOG_TARGET,
			"foreign asset {location} found in the {} registry", chain.spec_name
		);
		return Ok(location.to_string())
	}
	if client.foreign_asset_exists(location).await? {
		debug!(
			target: LOG_TARGET,
			"foreign asset {location} confirmed live on {}", chain.spec_name
		);
		return Ok(location.to_string())
	}
	Err(Error::AssetNotFound(format!(
		"foreign asset {location} is not registered on {}",
		chain.spec_name
	)))
}

/// Resolve an integer asset id: registry table by (string) key first, then
/// the live assets query.
async fn resolve_id(
	client: &dyn ChainClient,
	raw: &str,
	id: u128,
	chain: &ChainInfo,
) -> Result<u128, Error> {
	if chain.asset_symbol_by_id(raw).is_some() {
		debug!(target: LOG_TARGET, "asset id {id} found in the {} registry", chain.spec_name);
		return Ok(id)
	}
	if client.asset_exists(id).await?.is_some() {
		debug!(target: LOG_TARGET, "asset id {id} confirmed live on {}", chain.spec_name);
		return Ok(id)
	}
	Err(Error::AssetNotFound(format!("asset id {id} does not exist on {}", chain.spec_name)))
}

/// Resolve a symbol: native tokens first, then the registry assets table.
///
/// No live query is issued here. Anything that parses as an integer is routed
/// to [`resolve_id`] at the boundary, and that path already retries against
/// the chain; a non-numeric symbol the registry does not know has nowhere
/// else to exist.
fn resolve_symbol(symbol: &str, chain: &ChainInfo) -> Result<ResolvedAsset, Error> {
	if chain.is_native_token(symbol) {
		debug!(target: LOG_TARGET, "{symbol} is a native token of {}", chain.spec_name);
		return Ok(ResolvedAsset::Native(symbol.to_string()))
	}
	if let Some(id) = chain.asset_id_by_symbol(symbol) {
		debug!(
			target: LOG_TARGET,
			"symbol {symbol} resolves to asset id {id} in the {} registry", chain.spec_name
		);
		return Ok(ResolvedAsset::Local(id))
	}
	Err(Error::AssetNotFound(format!(
		"{symbol} is neither a native token nor a known asset of {}",
		chain.spec_name
	)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ErrorKind, mock::MockClient, registry::Registry};
	use async_std::task::block_on;

	fn asset_hub() -> ChainInfo {
		Registry::kusama().unwrap().lookup(1000).unwrap().clone()
	}

	#[test]
	fn parse_produces_the_union_once() {
		assert_eq!(AssetIdentifier::parse("1984", false), AssetIdentifier::Id(1984));
		assert_eq!(AssetIdentifier::parse("USDT", false), AssetIdentifier::Symbol("USDT".into()));
		assert_eq!(
			AssetIdentifier::parse("1984", true),
			AssetIdentifier::Location("1984".into())
		);
	}

	#[test]
	fn native_symbols_resolve_case_insensitively() {
		let client = MockClient::default();
		let chain = asset_hub();
		for symbol in ["KSM", "ksm", "kSm"] {
			let resolved = block_on(resolve(&client, symbol, &chain, false)).unwrap();
			assert_eq!(resolved, ResolvedAsset::Native(symbol.to_string()));
		}
	}

	#[test]
	fn registry_symbol_promotes_to_integer_id() {
		let client = MockClient::default();
		let resolved = block_on(resolve(&client, "usdt", &asset_hub(), false)).unwrap();
		assert_eq!(resolved, ResolvedAsset::Local(1984));
	}

	#[test]
	fn registry_id_hit_avoids_the_client() {
		// The failing client proves no live query is issued.
		let client = MockClient::failing("unreachable");
		let resolved = block_on(resolve(&client, "1984", &asset_hub(), false)).unwrap();
		assert_eq!(resolved, ResolvedAsset::Local(1984));
	}

	#[test]
	fn unknown_id_falls_back_to_the_chain() {
		let mut client = MockClient::default();
		client.add_asset(123456, "TEST");
		let resolved = block_on(resolve(&client, "123456", &asset_hub(), false)).unwrap();
		assert_eq!(resolved, ResolvedAsset::Local(123456));
	}

	#[test]
	fn absent_everywhere_is_asset_not_found() {
		let client = MockClient::default();
		let err = block_on(resolve(&client, "999999", &asset_hub(), false)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::AssetNotFound);

		let err = block_on(resolve(&client, "NOPE", &asset_hub(), false)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::AssetNotFound);
	}

	#[test]
	fn unknown_symbol_never_reaches_the_client() {
		// Numeric input takes the id path before this one, so a symbol miss
		// is terminal without a live query.
		let client = MockClient::failing("unreachable");
		let err = block_on(resolve(&client, "NOPE", &asset_hub(), false)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::AssetNotFound);
	}

	#[test]
	fn foreign_registry_hit_avoids_the_client() {
		let client = MockClient::failing("unreachable");
		let location = r#"{"parents":1,"interior":{"X1":{"Parachain":2125}}}"#;
		let resolved = block_on(resolve(&client, location, &asset_hub(), true)).unwrap();
		assert_eq!(resolved, ResolvedAsset::Foreign(location.to_string()));
	}

	#[test]
	fn foreign_miss_falls_back_to_the_chain() {
		let location = r#"{"parents":1,"interior":{"X1":{"Parachain":3000}}}"#;
		let mut client = MockClient::default();
		client.add_foreign_asset(location);
		let resolved = block_on(resolve(&client, location, &asset_hub(), true)).unwrap();
		assert_eq!(resolved, ResolvedAsset::Foreign(location.to_string()));

		let client = MockClient::default();
		let err = block_on(resolve(&client, location, &asset_hub(), true)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::AssetNotFound);
	}

	#[test]
	fn client_failures_surface_verbatim() {
		let client = MockClient::failing("connection reset");
		let err = block_on(resolve(&client, "999999", &asset_hub(), false)).unwrap_err();
		assert_eq!(err, Error::Client("connection reset".into()));
	}
}
