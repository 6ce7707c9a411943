// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer Core - Fee Configuration & Affordability Validation
//!
//! In-process core consumed by the wallet service before a transfer is
//! signed and broadcast. It derives a safe (gas price, gas limit) pair from
//! the user's request and injected per-chain bounds, optionally refines the
//! price from a live estimate, and decides whether the sending account can
//! afford the transfer, fee included.
//!
//! Signing, broadcast, nonce management, and balance fetching stay with the
//! surrounding service; [`transfer::AccountBalances`] and
//! [`transfer::GasPriceEstimator`] are the seams to them.
//!
//! ## Modules
//!
//! - `amount` - smallest-unit parsing and formatting
//! - `error` - crate error type
//! - `transfer` - configurator, fee bounds, estimation seam, balance validation

pub mod amount;
pub mod error;
pub mod transfer;

pub use error::ConfiguratorError;
pub use transfer::{
    AccountBalances, AssetKind, FeeBounds, FeeConfiguration, GasPriceEstimator, OperationKind,
    Refinement, TransactionConfigurator, TransferRequest,
};
