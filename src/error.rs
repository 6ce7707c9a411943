// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Errors surfaced by the transfer core.
//!
//! The happy path is deliberately error-free: out-of-range gas prices are
//! clamped, a silent estimator keeps the default, and an unfetched native
//! balance validates optimistically. What remains is arithmetic that must
//! never wrap silently on fixed-width integers.

/// Errors that can occur while configuring or validating a transfer.
#[derive(Debug, thiserror::Error)]
pub enum ConfiguratorError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Fee overflow: {0}")]
    FeeOverflow(String),

    #[error("Required balance overflow: {0}")]
    RequirementOverflow(String),
}
