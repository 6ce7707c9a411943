// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Balance affordability checks.

use tracing::debug;

use crate::amount::{format_amount, NATIVE_DECIMALS};
use crate::error::ConfiguratorError;

use super::configurator::FeeConfiguration;
use super::types::{AccountBalances, AssetKind, TransferRequest};

/// Whether `balances` can cover `request` under `configuration`.
///
/// The fee (`gas_price * gas_limit`) is paid in the native coin even for
/// token transfers. An unfetched native balance validates `true`: a
/// transient network gap must not block the user, and broadcast is the
/// authoritative enforcement point. An unrecorded token balance validates
/// `false`. All comparisons are exact; only a 256-bit overflow is an error.
pub fn is_affordable(
    configuration: &FeeConfiguration,
    request: &TransferRequest,
    balances: &AccountBalances,
) -> Result<bool, ConfiguratorError> {
    let fee = configuration.fee()?;

    let Some(native) = balances.native else {
        debug!("Native balance not yet fetched, assuming affordable until broadcast");
        return Ok(true);
    };

    match request.asset {
        AssetKind::Native => {
            let required = request.value.checked_add(fee).ok_or_else(|| {
                ConfiguratorError::RequirementOverflow(format!(
                    "value {} + fee {}",
                    request.value, fee
                ))
            })?;
            Ok(native >= required)
        }
        AssetKind::Token { contract } => {
            if native < fee {
                debug!(
                    fee = %format_amount(fee, NATIVE_DECIMALS),
                    "Native balance cannot cover the fee for a token transfer"
                );
                return Ok(false);
            }
            match balances.token_balance(&contract) {
                Some(token) => Ok(token >= request.value),
                None => {
                    debug!(contract = %contract, "No balance record for token, treating as insufficient");
                    Ok(false)
                }
            }
        }
    }
}
