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

//! Resolution of asset transfer requests into local extrinsic call selectors
//! or version-correct XCM payloads.
//!
//! The pipeline is an ordered sequence with no internal parallelism:
//!
//! 1. [`classify_local_transfer`] validates the request shape and decides the
//!    local pallet category, consulting the bundled [`Registry`] first and
//!    the live [`ChainClient`] only on a registry miss;
//! 2. for cross-chain requests, [`Direction::classify`] maps the source and
//!    destination chain roles onto a supported route;
//! 3. [`build_cross_chain_payload`] runs the route's builder and returns the
//!    [`XcmPayload`] fragments: beneficiary, destination, assets, weight
//!    limit and fee-asset index, all tagged with one [`XcmVersion`].
//!
//! Connection management, signing, submission and SCALE encoding live behind
//! the [`ChainClient`] capability supplied by the caller; this crate opens no
//! sockets and keeps no mutable state beyond the immutable registry snapshot.

pub mod assets;
pub mod client;
pub mod error;
pub mod registry;
pub mod transfers;
pub mod xcm;

#[cfg(test)]
mod mock;

pub use assets::{resolve, AssetIdentifier, ResolvedAsset};
pub use client::{AssetRecord, ChainClient};
pub use error::{Error, ErrorKind};
pub use registry::{ChainId, ChainInfo, ChainRole, ForeignAssetInfo, Registry};
pub use transfers::{classify_local_transfer, Direction, TransferKind};
pub use xcm::{
	builders::{
		build_cross_chain_payload, builder_for, DirectionBuilder, TransferRequest,
		WeightLimitOption, XcmPayload,
	},
	VersionedAssets, VersionedLocation, Weight, WeightLimit, XcmVersion,
};
