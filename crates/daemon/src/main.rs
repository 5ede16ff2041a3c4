// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tvh-relay daemon (tvrd)
//!
//! Powers a DVB tuner through a relay when TVHeadend has recordings due,
//! and keeps its over-the-air guide data fresh.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod lifecycle;
mod logging;

use std::path::PathBuf;

use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use tvr_core::Cancellation;
use tvr_engine::RunExit;

use crate::config::{Config, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = Config::load(&config_path)?;

    let log_guard = logging::setup(&config.paths.log_file, &config.logging)?;

    info!(
        config = %config_path.display(),
        log_file = %config.paths.log_file.display(),
        "starting tvrd"
    );

    let cancel = Cancellation::new();
    listen_for_shutdown(cancel.clone())?;

    let exit = match lifecycle::run(&config, &cancel).await {
        Ok(exit) => exit,
        Err(e) => {
            error!("failed to start: {}", e);
            // Flushes the non-blocking writer
            drop(log_guard);
            return Err(e.into());
        }
    };

    info!("daemon stopped");
    drop(log_guard);

    match exit {
        RunExit::Cancelled => Ok(()),
        RunExit::Faulted(e) => Err(e.into()),
    }
}

/// Set the cancellation on SIGTERM or SIGINT
fn listen_for_shutdown(cancel: Cancellation) -> std::io::Result<()> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("received SIGINT, shutting down"),
        }
        cancel.set();
    });

    Ok(())
}
