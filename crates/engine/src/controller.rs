// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check cycle and fail-stop supervisor
//!
//! Each cycle first runs the guide scan if it is due, then decides from the
//! recording schedule whether the tuner should be powered. Cycles repeat
//! every check interval until shutdown. The first error halts automation:
//! the error indicator is engaged and the supervisor idles until shutdown.

use crate::availability::{Availability, AvailabilityPoller};
use crate::enablement::DeviceEnabler;
use crate::error::ControlError;
use crate::maintenance::StalenessTracker;
use std::time::Duration;
use tvr_adapters::{ErrorIndicator, PowerAdapter, SchedulerService, TimestampStore};
use tvr_core::{evaluate, Cancellation, Clock, PowerDecision};

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Power up this long before the next enabled recording
    pub max_upcoming_lead: Duration,
    /// Pause between check cycles
    pub check_interval: Duration,
    /// How long a guide scan is given to finish
    pub maintenance_settle: Duration,
    pub maintenance_max_age_days: u32,
    pub availability_poll_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_upcoming_lead: Duration::from_secs(10 * 60),
            check_interval: Duration::from_secs(60),
            maintenance_settle: Duration::from_secs(10 * 60),
            maintenance_max_age_days: 7,
            availability_poll_interval: Duration::from_secs(5),
        }
    }
}

impl ControllerConfig {
    pub fn with_max_upcoming_lead(mut self, lead: Duration) -> Self {
        self.max_upcoming_lead = lead;
        self
    }

    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    pub fn with_maintenance_settle(mut self, settle: Duration) -> Self {
        self.maintenance_settle = settle;
        self
    }

    pub fn with_maintenance_max_age_days(mut self, days: u32) -> Self {
        self.maintenance_max_age_days = days;
        self
    }

    pub fn with_availability_poll_interval(mut self, interval: Duration) -> Self {
        self.availability_poll_interval = interval;
        self
    }
}

/// Adapters the controller drives
pub struct ControllerDeps<S, P, T, I, C> {
    pub service: S,
    pub power: P,
    pub store: T,
    pub indicator: I,
    pub clock: C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between cycles
    Idle,
    Checking,
    PoweringOn,
    PoweringOff,
    /// The cycle was cut short by shutdown
    NoOp,
    /// Automation halted after an error
    Faulted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    PoweredOn(PowerDecision),
    PoweredOff(PowerDecision),
    /// Shutdown interrupted a wait; nothing further was changed
    Interrupted,
}

#[derive(Debug)]
pub enum RunExit {
    Cancelled,
    Faulted(ControlError),
}

pub struct Controller<S, P, T, I, C> {
    config: ControllerConfig,
    service: S,
    power: P,
    indicator: I,
    clock: C,
    staleness: StalenessTracker<T, C>,
    availability: AvailabilityPoller<S>,
    enabler: DeviceEnabler<S>,
    phase: Phase,
    cycles: u64,
}

impl<S, P, T, I, C> Controller<S, P, T, I, C>
where
    S: SchedulerService,
    P: PowerAdapter,
    T: TimestampStore,
    I: ErrorIndicator,
    C: Clock,
{
    pub fn new(config: ControllerConfig, deps: ControllerDeps<S, P, T, I, C>) -> Self {
        let ControllerDeps {
            service,
            power,
            store,
            indicator,
            clock,
        } = deps;

        Self {
            staleness: StalenessTracker::new(
                store,
                clock.clone(),
                config.maintenance_max_age_days,
            ),
            availability: AvailabilityPoller::new(
                service.clone(),
                config.availability_poll_interval,
            ),
            enabler: DeviceEnabler::new(service.clone()),
            config,
            service,
            power,
            indicator,
            clock,
            phase: Phase::Idle,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of cycles started
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run cycles until shutdown or the first error
    pub async fn run(&mut self, cancel: &Cancellation) -> RunExit {
        loop {
            if cancel.is_set() {
                return RunExit::Cancelled;
            }

            self.cycles += 1;
            match self.run_cycle(cancel).await {
                Ok(outcome) => {
                    tracing::debug!(cycle = self.cycles, ?outcome, "check cycle complete")
                }
                Err(error) => return self.fail_stop(error, cancel).await,
            }

            self.phase = Phase::Idle;
            if cancel.wait_timeout(self.config.check_interval).await {
                return RunExit::Cancelled;
            }
        }
    }

    /// One pass: guide scan if due, then the power decision.
    ///
    /// On success the phase is left at the branch the cycle took.
    pub async fn run_cycle(
        &mut self,
        cancel: &Cancellation,
    ) -> Result<CycleOutcome, ControlError> {
        self.phase = Phase::Checking;

        if self.staleness.is_maintenance_due().await? && !self.run_maintenance(cancel).await? {
            self.phase = Phase::NoOp;
            return Ok(CycleOutcome::Interrupted);
        }

        let entries = self.service.upcoming_entries().await?;
        let decision = evaluate(&entries, self.config.max_upcoming_lead, self.clock.now());
        tracing::info!(entries = entries.len(), %decision, "power decision");

        if decision.is_required() {
            self.phase = Phase::PoweringOn;
            if !self.bring_up(cancel).await? {
                self.phase = Phase::NoOp;
                return Ok(CycleOutcome::Interrupted);
            }
            Ok(CycleOutcome::PoweredOn(decision))
        } else {
            self.phase = Phase::PoweringOff;
            self.enabler.set_enabled(false).await?;
            self.power.power_off().await?;
            Ok(CycleOutcome::PoweredOff(decision))
        }
    }

    /// Power the tuner, wait for it to register, enable its frontends.
    /// Returns false if shutdown interrupted the wait.
    async fn bring_up(&self, cancel: &Cancellation) -> Result<bool, ControlError> {
        self.power.power_on().await?;
        match self.availability.wait_until_available(cancel).await? {
            Availability::Available => {}
            Availability::Cancelled => return Ok(false),
        }
        self.enabler.set_enabled(true).await?;
        Ok(true)
    }

    /// Returns false if shutdown interrupted the scan, in which case it is
    /// not recorded as done.
    async fn run_maintenance(&self, cancel: &Cancellation) -> Result<bool, ControlError> {
        tracing::info!(settle = ?self.config.maintenance_settle, "starting guide scan");

        if !self.bring_up(cancel).await? {
            return Ok(false);
        }

        self.service
            .trigger_maintenance(self.config.maintenance_settle)
            .await?;
        if cancel.wait_timeout(self.config.maintenance_settle).await {
            tracing::info!("guide scan interrupted by shutdown, not recording it");
            return Ok(false);
        }

        self.staleness.record_maintenance_performed().await?;
        Ok(true)
    }

    async fn fail_stop(&mut self, error: ControlError, cancel: &Cancellation) -> RunExit {
        self.phase = Phase::Faulted;
        tracing::error!(
            error = %error,
            kind = ?error.kind(),
            cycle = self.cycles,
            "automation halted, waiting for shutdown"
        );

        if let Err(e) = self.indicator.engage().await {
            tracing::warn!(error = %e, "failed to engage error indicator");
        }

        cancel.wait().await;
        RunExit::Faulted(error)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
