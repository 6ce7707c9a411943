// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fee bounds and per-operation gas limit defaults.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::amount::gwei;

use super::types::OperationKind;

/// Hard safety bounds and defaults for fee configuration.
///
/// Immutable for the lifetime of a configurator; injected at construction so
/// per-chain or per-environment values stay a deployment concern. Bounding
/// the gas price protects against both stuck-pending transactions and a
/// runaway estimate or fat-fingered override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBounds {
    /// Gas price used when the user set none and no estimate arrived, in wei.
    pub default_gas_price: U256,
    /// Floor for any gas price, user-supplied or estimated.
    pub min_gas_price: U256,
    /// Ceiling for any gas price, user-supplied or estimated.
    pub max_gas_price: U256,
    /// Default gas limit for a plain native transfer.
    pub transfer_gas_limit: U256,
    /// Default gas limit for an ERC-20 transfer.
    pub token_transfer_gas_limit: U256,
    /// Default gas limit for an arbitrary contract call.
    pub contract_call_gas_limit: U256,
}

impl Default for FeeBounds {
    fn default() -> Self {
        Self {
            default_gas_price: gwei(25),
            min_gas_price: gwei(1),
            max_gas_price: gwei(500),
            transfer_gas_limit: U256::from(90_000u64),
            token_transfer_gas_limit: U256::from(144_000u64),
            contract_call_gas_limit: U256::from(300_000u64),
        }
    }
}

impl FeeBounds {
    /// Clamp `price` into `[min_gas_price, max_gas_price]`.
    ///
    /// Applied identically to user overrides and live estimates.
    pub fn clamp_gas_price(&self, price: U256) -> U256 {
        self.min_gas_price.max(self.max_gas_price.min(price))
    }

    /// Default gas limit for the given operation kind.
    pub fn default_gas_limit(&self, operation: OperationKind) -> U256 {
        match operation {
            OperationKind::Transfer => self.transfer_gas_limit,
            OperationKind::TokenTransfer => self.token_transfer_gas_limit,
            OperationKind::ContractCall => self.contract_call_gas_limit,
        }
    }
}
