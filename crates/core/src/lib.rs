// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tvr-core: pure building blocks for the tvh-relay daemon
//!
//! This crate provides:
//! - A fakeable wall clock
//! - The cooperative cancellation signal every wait goes through
//! - The schedule and device-tree data model
//! - The power decision over scheduled recordings
//! - Staleness arithmetic for the maintenance timestamp

pub mod cancel;
pub mod clock;
pub mod decision;
pub mod device;
pub mod schedule;
pub mod staleness;

// Re-exports
pub use cancel::Cancellation;
pub use clock::{Clock, FakeClock, SystemClock};
pub use decision::{evaluate, is_device_required, PowerDecision};
pub use device::{DeviceNode, ParentRef, ROOT_SENTINEL};
pub use schedule::{EntryStatus, ScheduleEntry};
pub use staleness::{
    format_timestamp, is_stale, parse_timestamp, TimestampError, TIMESTAMP_FORMAT,
};
