// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance timestamp format and staleness arithmetic

use chrono::NaiveDateTime;
use thiserror::Error;

/// Textual format of the persisted maintenance timestamp (local wall clock)
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("invalid maintenance timestamp {text:?}: {source}")]
    Invalid {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp, ignoring surrounding whitespace
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = text.trim();
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|source| {
        TimestampError::Invalid {
            text: trimmed.to_string(),
            source,
        }
    })
}

/// Whether maintenance is due.
///
/// Only whole elapsed days count: a stamp 6 days 23 hours old is not stale
/// for `max_age_days = 7`. A missing stamp is always stale.
pub fn is_stale(last: Option<NaiveDateTime>, now: NaiveDateTime, max_age_days: u32) -> bool {
    match last {
        None => true,
        Some(last) => (now - last).num_days() >= i64::from(max_age_days),
    }
}

#[cfg(test)]
#[path = "staleness_tests.rs"]
mod tests;
