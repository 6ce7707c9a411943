// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fee configuration for a single transfer-building session.
//!
//! A [`TransactionConfigurator`] is created per transfer attempt, seeds a
//! usable [`FeeConfiguration`] synchronously from the request and the
//! injected [`FeeBounds`], and may refine the gas price once from a live
//! estimate before the transfer is signed. It is discarded after the
//! transfer is submitted or cancelled.

use std::time::Duration;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfiguratorError;

use super::bounds::FeeBounds;
use super::estimator::{GasPriceEstimator, DEFAULT_ESTIMATE_TIMEOUT};
use super::types::{AccountBalances, TransferRequest};
use super::validator;

/// Configured fee parameters for one transfer.
///
/// Invariant: `gas_price` is always within the bounds it was configured
/// against; `gas_limit` is positive whenever the bounds' defaults are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfiguration {
    /// Gas price in wei.
    pub gas_price: U256,
    /// Gas limit in units of work.
    pub gas_limit: U256,
}

impl FeeConfiguration {
    /// Total fee in wei: `gas_price * gas_limit`.
    ///
    /// Checked multiplication; a 256-bit overflow here means the caller fed
    /// an absurd explicit gas limit, and must not wrap silently.
    pub fn fee(&self) -> Result<U256, ConfiguratorError> {
        self.gas_price.checked_mul(self.gas_limit).ok_or_else(|| {
            ConfiguratorError::FeeOverflow(format!(
                "gas price {} * gas limit {}",
                self.gas_price, self.gas_limit
            ))
        })
    }
}

/// Outcome of one gas price refinement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    /// The clamped estimate was stored as the new gas price.
    Applied(U256),
    /// The user pinned an explicit gas price; the estimate was ignored.
    UserPinned,
    /// The estimator produced nothing in time; the current price stands.
    EstimatorSilent,
    /// The configuration was already refined or retired; the estimate
    /// arrived too late and was discarded.
    Discarded,
}

/// Derives and owns the fee parameters for one transfer-building session.
pub struct TransactionConfigurator {
    request: TransferRequest,
    bounds: FeeBounds,
    configuration: FeeConfiguration,
    price_pinned: bool,
    refined: bool,
    retired: bool,
    estimate_timeout: Duration,
}

impl TransactionConfigurator {
    /// Seed a configuration from `request` against `bounds`.
    ///
    /// Synchronous and side-effect free: an explicit gas price is clamped
    /// into range, an absent one falls back to the default; the gas limit is
    /// taken as given or defaulted per operation kind, never clamped. Two
    /// calls with identical inputs yield identical configurations.
    pub fn new(request: TransferRequest, bounds: FeeBounds) -> Self {
        let (gas_price, price_pinned) = match request.gas_price {
            Some(requested) => {
                let clamped = bounds.clamp_gas_price(requested);
                if clamped != requested {
                    debug!(
                        requested = %requested,
                        clamped = %clamped,
                        "Requested gas price outside bounds, clamped"
                    );
                }
                (clamped, true)
            }
            None => (bounds.default_gas_price, false),
        };

        let gas_limit = request
            .gas_limit
            .unwrap_or_else(|| bounds.default_gas_limit(request.operation));

        Self {
            request,
            bounds,
            configuration: FeeConfiguration {
                gas_price,
                gas_limit,
            },
            price_pinned,
            refined: false,
            retired: false,
            estimate_timeout: DEFAULT_ESTIMATE_TIMEOUT,
        }
    }

    /// Override how long [`refine_from`](Self::refine_from) waits for an
    /// estimate.
    pub fn with_estimate_timeout(mut self, timeout: Duration) -> Self {
        self.estimate_timeout = timeout;
        self
    }

    /// The transfer this session is configuring.
    pub fn request(&self) -> &TransferRequest {
        &self.request
    }

    /// The current fee configuration.
    pub fn configuration(&self) -> &FeeConfiguration {
        &self.configuration
    }

    /// The bounds this session was constructed with.
    pub fn bounds(&self) -> &FeeBounds {
        &self.bounds
    }

    /// Total fee in wei for the current configuration.
    pub fn fee(&self) -> Result<U256, ConfiguratorError> {
        self.configuration.fee()
    }

    /// Apply a gas price estimate that arrived from the session layer.
    ///
    /// The estimate only lands when the user did not pin an explicit price,
    /// at most once, and never after [`retire`](Self::retire); it passes
    /// through the same clamp as a user value.
    pub fn refine_with_estimate(&mut self, estimate: U256) -> Refinement {
        if self.retired || self.refined {
            debug!(estimate = %estimate, "Late gas price estimate discarded");
            return Refinement::Discarded;
        }
        if self.price_pinned {
            return Refinement::UserPinned;
        }

        let clamped = self.bounds.clamp_gas_price(estimate);
        self.configuration.gas_price = clamped;
        self.refined = true;
        debug!(estimate = %estimate, gas_price = %clamped, "Gas price refined from estimate");
        Refinement::Applied(clamped)
    }

    /// Drive one refinement from `estimator`, bounded by the estimate
    /// timeout.
    ///
    /// An estimator that fails, returns nothing, or outlives the timeout
    /// leaves the configuration on its current price; the caller always gets
    /// a terminal [`Refinement`], never an error.
    pub async fn refine_from(&mut self, estimator: &dyn GasPriceEstimator) -> Refinement {
        match tokio::time::timeout(self.estimate_timeout, estimator.estimate_gas_price()).await {
            Ok(Some(estimate)) => self.refine_with_estimate(estimate),
            Ok(None) => {
                debug!("Gas price estimator returned no estimate, keeping current price");
                Refinement::EstimatorSilent
            }
            Err(_) => {
                debug!(
                    timeout_secs = self.estimate_timeout.as_secs(),
                    "Gas price estimate timed out, keeping current price"
                );
                Refinement::EstimatorSilent
            }
        }
    }

    /// Mark this session as submitted or cancelled.
    ///
    /// Any estimate arriving afterwards is discarded rather than mutating a
    /// retired configuration.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    /// Whether the session has been retired.
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Whether the sending account can afford this transfer, per `balances`.
    ///
    /// See [`validator::is_affordable`] for the exact rules.
    pub fn is_affordable(&self, balances: &AccountBalances) -> Result<bool, ConfiguratorError> {
        validator::is_affordable(&self.configuration, &self.request, balances)
    }
}
