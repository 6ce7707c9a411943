// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gas price estimation seam.
//!
//! The live estimator is a network concern owned by the session layer; this
//! module only defines the trait the configurator consumes. An estimator is
//! allowed to produce nothing at all (RPC failure, timeout), which the
//! configurator treats as "keep the default", never as an error.

use std::time::Duration;

use alloy::primitives::U256;
use async_trait::async_trait;

/// Upper bound on how long a refinement waits for an estimate. A result
/// arriving later than this is simply never applied.
pub const DEFAULT_ESTIMATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of live gas price estimates.
#[async_trait]
pub trait GasPriceEstimator: Send + Sync {
    /// Current recommended gas price in wei, or `None` when no estimate
    /// is available.
    async fn estimate_gas_price(&self) -> Option<U256>;
}

/// Estimator that always returns a fixed price.
///
/// Useful for chains with flat fee markets and for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedGasPriceEstimator {
    price: U256,
}

impl FixedGasPriceEstimator {
    /// Estimator that always recommends `price` wei.
    pub fn new(price: U256) -> Self {
        Self { price }
    }
}

#[async_trait]
impl GasPriceEstimator for FixedGasPriceEstimator {
    async fn estimate_gas_price(&self) -> Option<U256> {
        Some(self.price)
    }
}
