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

//! End-to-end classification and payload construction scenarios.

use async_std::task::block_on;
use async_trait::async_trait;
use serde_json::json;

use substrate_asset_transfer::{
	build_cross_chain_payload, classify_local_transfer, AssetRecord, ChainClient, ChainInfo,
	ChainRole, Direction, Error, ErrorKind, Registry, TransferKind, TransferRequest, WeightLimit,
	WeightLimitOption, XcmVersion,
};

const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

/// Chain client over a fixed set of live assets.
#[derive(Default)]
struct StaticClient {
	assets: Vec<u128>,
	foreign_assets: Vec<String>,
}

#[async_trait]
impl ChainClient for StaticClient {
	async fn asset_exists(&self, asset_id: u128) -> Result<Option<AssetRecord>, Error> {
		Ok(self.assets.contains(&asset_id).then(AssetRecord::default))
	}

	async fn foreign_asset_exists(&self, location: &str) -> Result<bool, Error> {
		Ok(self.foreign_assets.iter().any(|known| known == location))
	}

	async fn liquid_pool_validity(&self, chain: &ChainInfo, asset_id: u128) -> Result<(), Error> {
		if asset_id > 1000 {
			return Err(Error::LiquidTokenInvalid(format!(
				"no pool for asset {asset_id} on {}",
				chain.spec_name
			)))
		}
		Ok(())
	}

	async fn account_nonce(&self, _address: &str) -> Result<u64, Error> {
		Ok(0)
	}
}

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|item| item.to_string()).collect()
}

fn classify(client: &StaticClient, asset_ids: &[&str], foreign: bool) -> Result<TransferKind, Error> {
	block_on(classify_local_transfer(
		client,
		&strings(asset_ids),
		&strings(&["1000"]),
		"asset-hub-kusama",
		&Registry::kusama().unwrap(),
		foreign,
		false,
	))
}

#[test]
fn empty_asset_ids_resolve_to_a_balances_transfer() {
	init_logger();
	let client = StaticClient::default();
	assert_eq!(classify(&client, &[], false).unwrap(), TransferKind::LocalBalances);
}

#[test]
fn registry_symbols_resolve_to_an_assets_transfer() {
	init_logger();
	let client = StaticClient::default();
	assert_eq!(classify(&client, &["USDT"], false).unwrap(), TransferKind::LocalAssets(1984));
	assert_eq!(classify(&client, &["USDT"], false).unwrap().call(), ("Assets", "transfer"));
}

#[test]
fn live_only_assets_resolve_through_the_client() {
	init_logger();
	let client = StaticClient { assets: vec![654321], ..Default::default() };
	assert_eq!(classify(&client, &["654321"], false).unwrap(), TransferKind::LocalAssets(654321));
}

#[test]
fn assets_absent_everywhere_are_not_found() {
	init_logger();
	let client = StaticClient::default();
	let err = classify(&client, &["999999"], false).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::AssetNotFound);
}

#[test]
fn foreign_assets_resolve_from_registry_or_chain() {
	init_logger();
	let registered = r#"{"parents":1,"interior":{"X1":{"Parachain":2125}}}"#;
	let live_only = r#"{"parents":1,"interior":{"X1":{"Parachain":2001}}}"#;
	let client =
		StaticClient { foreign_assets: vec![live_only.to_string()], ..Default::default() };

	for location in [registered, live_only] {
		assert_eq!(
			classify(&client, &[location], true).unwrap(),
			TransferKind::LocalForeignAssets(location.to_string()),
		);
	}

	let unknown = r#"{"parents":1,"interior":{"X1":{"Parachain":9999}}}"#;
	assert_eq!(classify(&client, &[unknown], true).unwrap_err().kind(), ErrorKind::AssetNotFound);
}

#[test]
fn relay_to_system_v2_payload_matches_the_v2_wire_shape() {
	init_logger();
	let client = StaticClient::default();
	let request = TransferRequest {
		beneficiary: ALICE.to_string(),
		dest_chain_id: 1000,
		asset_ids: vec![],
		amounts: strings(&["1000000000000"]),
		weight_limit: WeightLimitOption::default(),
	};
	let direction =
		Direction::classify(ChainRole::Relay, ChainRole::SystemParachain).unwrap();
	assert_eq!(direction, Direction::RelayToSystem);

	let payload =
		block_on(build_cross_chain_payload(&client, direction, &request, XcmVersion::V2)).unwrap();

	assert_eq!(
		serde_json::to_value(&payload.beneficiary).unwrap(),
		json!({
			"V2": {
				"parents": 0,
				"interior": { "X1": { "AccountId32": { "network": "Any", "id": ALICE } } },
			}
		}),
	);
	assert_eq!(
		serde_json::to_value(&payload.destination).unwrap(),
		json!({ "V2": { "parents": 0, "interior": { "X1": { "Parachain": 1000 } } } }),
	);
	assert_eq!(payload.weight_limit, WeightLimit::Unlimited);
	assert_eq!(payload.fee_asset_item, 0);
}

#[test]
fn system_to_para_v3_payload_carries_the_assets_pallet_location() {
	init_logger();
	let client = StaticClient::default();
	let request = TransferRequest {
		beneficiary: ALICE.to_string(),
		dest_chain_id: 2023,
		asset_ids: strings(&["1984"]),
		amounts: strings(&["500000"]),
		weight_limit: WeightLimitOption {
			is_limited: true,
			ref_time: Some(4_000_000_000),
			proof_size: Some(65_536),
		},
	};
	let direction =
		Direction::classify(ChainRole::SystemParachain, ChainRole::Parachain).unwrap();

	let payload =
		block_on(build_cross_chain_payload(&client, direction, &request, XcmVersion::V3)).unwrap();

	assert_eq!(
		serde_json::to_value(&payload.assets).unwrap(),
		json!({
			"V3": [{
				"id": { "Concrete": {
					"parents": 0,
					"interior": { "X2": [ { "PalletInstance": 50 }, { "GeneralIndex": 1984 } ] },
				} },
				"fun": { "Fungible": 500000 },
			}]
		}),
	);
	assert_eq!(
		serde_json::to_value(&payload.weight_limit).unwrap(),
		json!({ "Limited": { "refTime": 4000000000u64, "proofSize": 65536 } }),
	);
	assert_eq!(payload.fee_asset_item, 0);
}

#[test]
fn partial_weight_limits_downgrade_across_the_pipeline() {
	init_logger();
	let client = StaticClient::default();
	let request = TransferRequest {
		beneficiary: ALICE.to_string(),
		dest_chain_id: 1000,
		asset_ids: vec![],
		amounts: strings(&["1000"]),
		weight_limit: WeightLimitOption {
			is_limited: true,
			ref_time: Some(100),
			proof_size: None,
		},
	};
	let payload = block_on(build_cross_chain_payload(
		&client,
		Direction::RelayToSystem,
		&request,
		XcmVersion::V4,
	))
	.unwrap();
	assert_eq!(payload.weight_limit, WeightLimit::Unlimited);
}

#[test]
fn every_direction_builds_a_version_homogeneous_payload() {
	init_logger();
	let client = StaticClient::default();
	let directions = [
		Direction::RelayToSystem,
		Direction::RelayToPara,
		Direction::SystemToRelay,
		Direction::SystemToSystem,
		Direction::SystemToPara,
		Direction::ParaToRelay,
		Direction::ParaToSystem,
		Direction::ParaToPara,
	];
	for direction in directions {
		for version in [XcmVersion::V2, XcmVersion::V3, XcmVersion::V4] {
			let request = TransferRequest {
				beneficiary: ALICE.to_string(),
				dest_chain_id: 2000,
				asset_ids: vec![],
				amounts: strings(&["1000"]),
				weight_limit: WeightLimitOption::default(),
			};
			let payload =
				block_on(build_cross_chain_payload(&client, direction, &request, version))
					.unwrap();
			assert_eq!(payload.beneficiary.version(), version);
			assert_eq!(payload.destination.version(), version);
			assert_eq!(payload.assets.version(), version);
		}
	}
}
