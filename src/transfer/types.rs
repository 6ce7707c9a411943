// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer request and balance snapshot types.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Asset being transferred.
///
/// Fees are always paid in the native coin, whichever variant is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// The chain's intrinsic coin.
    Native,
    /// ERC-20 token tracked by the given contract.
    Token { contract: Address },
}

/// Kind of operation, used to pick a default gas limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    /// Plain native-coin transfer.
    Transfer,
    /// ERC-20 `transfer(to, amount)` call.
    TokenTransfer,
    /// Arbitrary contract interaction.
    ContractCall,
}

/// Immutable description of an intended transfer, as captured from the user.
///
/// `gas_price`/`gas_limit` of `None` mean "no explicit override": the
/// configurator fills them from [`FeeBounds`](super::FeeBounds) defaults and,
/// for the price, may later refine from a live estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Asset to move.
    pub asset: AssetKind,
    /// Recipient address.
    pub recipient: Address,
    /// Amount in the asset's smallest unit.
    pub value: U256,
    /// Explicit gas price in wei, if the user set one.
    pub gas_price: Option<U256>,
    /// Explicit gas limit, if the user set one.
    pub gas_limit: Option<U256>,
    /// Operation kind; derived from `asset` by the constructors.
    pub operation: OperationKind,
}

impl TransferRequest {
    /// Describe a native-coin transfer of `value` wei.
    pub fn native(recipient: Address, value: U256) -> Self {
        Self {
            asset: AssetKind::Native,
            recipient,
            value,
            gas_price: None,
            gas_limit: None,
            operation: OperationKind::Transfer,
        }
    }

    /// Describe an ERC-20 transfer of `value` token units.
    pub fn token(contract: Address, recipient: Address, value: U256) -> Self {
        Self {
            asset: AssetKind::Token { contract },
            recipient,
            value,
            gas_price: None,
            gas_limit: None,
            operation: OperationKind::TokenTransfer,
        }
    }

    /// Describe a native-coin contract interaction of `value` wei.
    pub fn contract_call(recipient: Address, value: U256) -> Self {
        Self {
            operation: OperationKind::ContractCall,
            ..Self::native(recipient, value)
        }
    }

    /// Set an explicit gas price override in wei.
    pub fn with_gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Set an explicit gas limit.
    pub fn with_gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// Read-only balance snapshot for the sending account.
///
/// Supplied by the network session at validation time; this core never
/// initiates a balance fetch. `native: None` means "not yet fetched", which
/// is distinct from a recorded balance of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalances {
    /// Native-coin balance in wei, if known.
    pub native: Option<U256>,
    /// Known token balances keyed by contract address.
    tokens: HashMap<Address, U256>,
}

impl AccountBalances {
    /// Snapshot with nothing fetched yet.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Snapshot with a known native balance.
    pub fn with_native(native: U256) -> Self {
        Self {
            native: Some(native),
            tokens: HashMap::new(),
        }
    }

    /// Record a token balance for `contract`.
    pub fn with_token(mut self, contract: Address, balance: U256) -> Self {
        self.tokens.insert(contract, balance);
        self
    }

    /// Known balance for `contract`, or `None` when no record exists.
    pub fn token_balance(&self, contract: &Address) -> Option<U256> {
        self.tokens.get(contract).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_derive_operation_kind() {
        let recipient = Address::repeat_byte(0x11);
        let contract = Address::repeat_byte(0x22);

        let native = TransferRequest::native(recipient, U256::from(1u64));
        assert_eq!(native.operation, OperationKind::Transfer);
        assert_eq!(native.asset, AssetKind::Native);

        let token = TransferRequest::token(contract, recipient, U256::from(1u64));
        assert_eq!(token.operation, OperationKind::TokenTransfer);
        assert_eq!(token.asset, AssetKind::Token { contract });

        let call = TransferRequest::contract_call(recipient, U256::ZERO);
        assert_eq!(call.operation, OperationKind::ContractCall);
    }

    #[test]
    fn unknown_balance_is_not_zero() {
        let unknown = AccountBalances::unknown();
        assert_eq!(unknown.native, None);

        let zero = AccountBalances::with_native(U256::ZERO);
        assert_eq!(zero.native, Some(U256::ZERO));
        assert_ne!(unknown, zero);
    }

    #[test]
    fn token_balance_lookup() {
        let contract = Address::repeat_byte(0x22);
        let other = Address::repeat_byte(0x33);
        let balances = AccountBalances::with_native(U256::from(10u64))
            .with_token(contract, U256::from(500u64));

        assert_eq!(balances.token_balance(&contract), Some(U256::from(500u64)));
        assert_eq!(balances.token_balance(&other), None);
    }
}
