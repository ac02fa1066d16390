// ABOUTME: Logging configuration and structured logging setup for the fittrack binaries
// ABOUTME: Configures log level filtering with RUST_LOG override support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Structured logging setup.
//!
//! Binaries call [`init_logging`] once at startup. The default level is
//! `info`, raised to `debug` in verbose mode; a `RUST_LOG` environment
//! variable overrides both.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the process.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
