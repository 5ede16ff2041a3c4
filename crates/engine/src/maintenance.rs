// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttling for the periodic guide scan

use crate::error::ControlError;
use chrono::NaiveDateTime;
use tvr_adapters::TimestampStore;
use tvr_core::{format_timestamp, is_stale, parse_timestamp, Clock};

/// Decides whether the guide scan is due, from the persisted timestamp of
/// the last completed one
pub struct StalenessTracker<T, C> {
    store: T,
    clock: C,
    max_age_days: u32,
}

impl<T: TimestampStore, C: Clock> StalenessTracker<T, C> {
    pub fn new(store: T, clock: C, max_age_days: u32) -> Self {
        Self {
            store,
            clock,
            max_age_days,
        }
    }

    /// When maintenance last completed, if ever
    pub async fn last_performed(&self) -> Result<Option<NaiveDateTime>, ControlError> {
        match self.store.get().await? {
            None => Ok(None),
            Some(text) => Ok(Some(parse_timestamp(&text)?)),
        }
    }

    pub async fn is_maintenance_due(&self) -> Result<bool, ControlError> {
        let last = self.last_performed().await?;
        let due = is_stale(last, self.clock.now_local(), self.max_age_days);

        match last {
            None => tracing::info!("no record of a previous guide scan, scan is due"),
            Some(last) if due => tracing::info!(
                last = %format_timestamp(last),
                max_age_days = self.max_age_days,
                "guide scan is due"
            ),
            Some(last) => tracing::info!(
                last = %format_timestamp(last),
                "guide scan is recent enough"
            ),
        }

        Ok(due)
    }

    /// Persist the current time as the last completed maintenance
    pub async fn record_maintenance_performed(&self) -> Result<(), ControlError> {
        let stamp = format_timestamp(self.clock.now_local());
        self.store.set(&stamp).await?;
        tracing::info!(stamp, "recorded guide scan");
        Ok(())
    }
}

#[cfg(test)]
#[path = "maintenance_tests.rs"]
mod tests;
