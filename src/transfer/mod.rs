// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer fee configuration and affordability validation.
//!
//! This module provides functionality for:
//! - Deriving a bounded (gas price, gas limit) pair for a pending transfer
//! - Refining the gas price from a live estimate, at most once per session
//! - Deciding whether the sending account can afford value plus fee

pub mod bounds;
pub mod configurator;
pub mod estimator;
pub mod types;
pub mod validator;

pub use bounds::FeeBounds;
pub use configurator::{FeeConfiguration, Refinement, TransactionConfigurator};
pub use estimator::{FixedGasPriceEstimator, GasPriceEstimator, DEFAULT_ESTIMATE_TIMEOUT};
pub use types::*;
