// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled recording entries as reported by the recording scheduler

use chrono::{DateTime, Utc};

/// Scheduling status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Not currently recording (scheduled, waiting, ...)
    Idle,
    /// The tuner is recording this entry right now
    Recording,
}

impl EntryStatus {
    /// Map the scheduler's status string. Anything but `recording` is idle.
    pub fn from_sched_status(status: &str) -> Self {
        if status == "recording" {
            EntryStatus::Recording
        } else {
            EntryStatus::Idle
        }
    }
}

/// One upcoming or active recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: String,
    pub title: String,
    pub enabled: bool,
    pub status: EntryStatus,
    pub start: DateTime<Utc>,
}

impl ScheduleEntry {
    /// An enabled, idle entry starting at `start`
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            enabled: true,
            status: EntryStatus::Idle,
            start,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_recording(&self) -> bool {
        self.status == EntryStatus::Recording
    }
}
