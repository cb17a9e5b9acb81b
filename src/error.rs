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

//! Failure taxonomy shared by every operation of the crate.
//!
//! Every failure is a value of the closed [`Error`] enum, constructed once at
//! the failure site and propagated unchanged. Nothing in this crate retries:
//! a failed request is terminal and retry policy belongs to the caller.

use crate::registry::ChainRole;

/// Machine-readable class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The request shape is invalid (asset id/amount arity, malformed values).
	InvalidInput,
	/// The asset is unknown to both the registry and the live chain.
	AssetNotFound,
	/// The chain is not present in the loaded registry snapshot.
	UnknownChain,
	/// No route exists between the given pair of chain roles.
	UnsupportedRoute,
	/// The asset failed the liquidity-pool validity check.
	LiquidTokenInvalid,
	/// The chain client reported a failure; surfaced verbatim.
	Client,
}

/// Transfer resolution error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid input: {0}")]
	InvalidInput(String),
	#[error("asset not found: {0}")]
	AssetNotFound(String),
	#[error("unknown chain: {0}")]
	UnknownChain(String),
	// The origin role is deliberately not named `source`: `thiserror` treats a
	// field of that name as the chained error source.
	#[error("unsupported route: {origin:?} to {dest:?}")]
	UnsupportedRoute { origin: ChainRole, dest: ChainRole },
	#[error("liquid token invalid: {0}")]
	LiquidTokenInvalid(String),
	#[error("chain client error: {0}")]
	Client(String),
}

impl Error {
	/// Machine-readable kind of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::InvalidInput(_) => ErrorKind::InvalidInput,
			Error::AssetNotFound(_) => ErrorKind::AssetNotFound,
			Error::UnknownChain(_) => ErrorKind::UnknownChain,
			Error::UnsupportedRoute { .. } => ErrorKind::UnsupportedRoute,
			Error::LiquidTokenInvalid(_) => ErrorKind::LiquidTokenInvalid,
			Error::Client(_) => ErrorKind::Client,
		}
	}
}
