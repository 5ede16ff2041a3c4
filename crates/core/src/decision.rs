// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Power decision over the scheduled recordings
//!
//! The tuner must be powered while anything records, and ahead of the
//! earliest enabled entry once it is within the configured lead time.
//! Entries whose start already passed but which have not transitioned to
//! recording yet have a negative lead and still require power.

use crate::schedule::ScheduleEntry;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;
use std::time::Duration;

/// Outcome of evaluating the schedule, with the entry that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerDecision {
    /// An entry is recording right now
    ActiveRecording { title: String },
    /// The next enabled entry starts within the lead time
    Upcoming { title: String, lead: TimeDelta },
    /// The next enabled entry starts later than the lead time
    TooFarAhead { title: String, lead: TimeDelta },
    /// Nothing enabled is scheduled
    NoEnabledEntries,
}

impl PowerDecision {
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            PowerDecision::ActiveRecording { .. } | PowerDecision::Upcoming { .. }
        )
    }
}

impl fmt::Display for PowerDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerDecision::ActiveRecording { title } => {
                write!(f, "active recording \"{}\"", title)
            }
            PowerDecision::Upcoming { title, lead } => {
                write!(f, "\"{}\" starts in {}s", title, lead.num_seconds())
            }
            PowerDecision::TooFarAhead { title, lead } => {
                write!(
                    f,
                    "next recording \"{}\" starts in {}s, too far ahead",
                    title,
                    lead.num_seconds()
                )
            }
            PowerDecision::NoEnabledEntries => write!(f, "no enabled recording entries"),
        }
    }
}

/// Evaluate the schedule in the order the scheduler supplied it.
///
/// The first recording entry wins outright. Otherwise the enabled entry with
/// the earliest start is compared against `max_lead`; on equal starts the
/// first one encountered is kept.
pub fn evaluate(
    entries: &[ScheduleEntry],
    max_lead: Duration,
    now: DateTime<Utc>,
) -> PowerDecision {
    let mut next: Option<&ScheduleEntry> = None;

    for entry in entries {
        if entry.is_recording() {
            return PowerDecision::ActiveRecording {
                title: entry.title.clone(),
            };
        }

        if entry.enabled && next.is_none_or(|n| entry.start < n.start) {
            next = Some(entry);
        }
    }

    let Some(next) = next else {
        return PowerDecision::NoEnabledEntries;
    };

    let max_lead = TimeDelta::from_std(max_lead).unwrap_or(TimeDelta::MAX);
    let lead = next.start - now;
    let title = next.title.clone();

    if lead <= max_lead {
        PowerDecision::Upcoming { title, lead }
    } else {
        PowerDecision::TooFarAhead { title, lead }
    }
}

/// Whether the tuner must be powered for the given schedule
pub fn is_device_required(
    entries: &[ScheduleEntry],
    max_lead: Duration,
    now: DateTime<Utc>,
) -> bool {
    evaluate(entries, max_lead, now).is_required()
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;
