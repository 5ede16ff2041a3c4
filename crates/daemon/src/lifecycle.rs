// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle: hardware setup, supervision, power-down on exit.

use thiserror::Error;
use tracing::{info, warn};
use tvr_adapters::{
    Credentials, ErrorIndicator, FileTimestampStore, GpioIndicator, GpioLine, GpioRelay,
    IndicatorError, KernelModuleReset, NoOpIndicator, NoOpResetAdapter, PowerAdapter, PowerError,
    ResetAdapter, ResettingPower, TracedPower, TracedService, TvheadendClient,
};
use tvr_core::{Cancellation, SystemClock};
use tvr_engine::{Controller, ControllerDeps, RunExit};

use crate::config::Config;

/// Errors that prevent the controller from starting
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("relay setup failed: {0}")]
    Power(#[from] PowerError),
    #[error("error led setup failed: {0}")]
    Indicator(#[from] IndicatorError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("log path does not name a file")]
    NoLogDir,
    #[error("log file: {0}")]
    LogInit(#[from] tracing_appender::rolling::InitError),
}

/// Configure the hardware, run the controller until shutdown, then power
/// the tuner down.
pub async fn run(config: &Config, cancel: &Cancellation) -> Result<RunExit, LifecycleError> {
    let gpio = &config.gpio;
    let relay = GpioRelay::open(GpioLine::new(
        gpio.chip_path.clone(),
        gpio.relay_line,
        gpio.relay_active_low,
    ))
    .await?;

    let device = &config.device;
    if device.reset_before_power_off {
        let reset = KernelModuleReset::new(device.kernel_module.clone())
            .with_service(device.backend_service.clone())
            .with_sudo(device.use_sudo);
        with_power(config, ResettingPower::new(relay, reset), cancel).await
    } else {
        info!("driver reset before power off is disabled");
        with_power(config, ResettingPower::new(relay, NoOpResetAdapter::new()), cancel).await
    }
}

async fn with_power<R: ResetAdapter>(
    config: &Config,
    power: ResettingPower<GpioRelay, R>,
    cancel: &Cancellation,
) -> Result<RunExit, LifecycleError> {
    let power = TracedPower::new(power);

    match config.gpio.error_led_line {
        Some(line) => {
            // LED is wired active-high
            let led = GpioIndicator::open(GpioLine::new(
                config.gpio.chip_path.clone(),
                line,
                false,
            ))
            .await?;
            Ok(supervise(config, power, led, cancel).await)
        }
        None => {
            info!("no error led configured, faults are only logged");
            Ok(supervise(config, power, NoOpIndicator, cancel).await)
        }
    }
}

async fn supervise<P: PowerAdapter, I: ErrorIndicator>(
    config: &Config,
    power: P,
    indicator: I,
    cancel: &Cancellation,
) -> RunExit {
    let tvh = &config.tvheadend;
    let credentials = Credentials::new(tvh.username.clone(), tvh.password.clone());
    let service = TracedService::new(TvheadendClient::new(
        &tvh.url,
        &credentials,
        tvh.request_timeout,
    ));

    let mut controller = Controller::new(
        config.controller_config(),
        ControllerDeps {
            service,
            power: power.clone(),
            store: FileTimestampStore::new(config.paths.state_file.clone()),
            indicator,
            clock: SystemClock,
        },
    );

    info!(url = %tvh.url, "controller running");
    let exit = controller.run(cancel).await;

    info!("powering tuner down");
    if let Err(e) = power.power_off().await {
        warn!(error = %e, "failed to power tuner down on exit");
    }

    exit
}
