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

//! Versioned cross-consensus location and asset data structures.
//!
//! The wire versions are structurally incompatible and must never be mixed
//! within one payload; every produced fragment is wrapped in a version tag
//! and the builders guarantee version homogeneity across a payload.

pub mod builders;
pub mod v2;
pub mod v3;
pub mod v4;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported wire versions of the message format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum XcmVersion {
	V2,
	V3,
	V4,
}

impl TryFrom<u32> for XcmVersion {
	type Error = Error;

	fn try_from(version: u32) -> Result<Self, Error> {
		match version {
			2 => Ok(XcmVersion::V2),
			3 => Ok(XcmVersion::V3),
			4 => Ok(XcmVersion::V4),
			_ => Err(Error::InvalidInput(format!("unsupported XCM version {version}"))),
		}
	}
}

/// A location tagged with the version it is encoded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionedLocation {
	V2(v2::MultiLocation),
	V3(v3::MultiLocation),
	V4(v4::Location),
}

impl VersionedLocation {
	/// The version this location is encoded for.
	pub fn version(&self) -> XcmVersion {
		match self {
			VersionedLocation::V2(_) => XcmVersion::V2,
			VersionedLocation::V3(_) => XcmVersion::V3,
			VersionedLocation::V4(_) => XcmVersion::V4,
		}
	}
}

/// An asset set tagged with the version it is encoded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionedAssets {
	V2(v2::MultiAssets),
	V3(v3::MultiAssets),
	V4(v4::Assets),
}

impl VersionedAssets {
	/// The version this asset set is encoded for.
	pub fn version(&self) -> XcmVersion {
		match self {
			VersionedAssets::V2(_) => XcmVersion::V2,
			VersionedAssets::V3(_) => XcmVersion::V3,
			VersionedAssets::V4(_) => XcmVersion::V4,
		}
	}

	/// Number of assets in the set.
	pub fn len(&self) -> usize {
		match self {
			VersionedAssets::V2(assets) => assets.len(),
			VersionedAssets::V3(assets) => assets.len(),
			VersionedAssets::V4(assets) => assets.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Execution cost of a message: computation time and proof footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
	pub ref_time: u64,
	pub proof_size: u64,
}

/// Execution budget declared for the destination side.
///
/// The enclosing extrinsic always takes the current representation, so this
/// is the one type here that carries no version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightLimit {
	Unlimited,
	Limited(Weight),
}
