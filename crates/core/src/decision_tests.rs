// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::schedule::EntryStatus;
use proptest::prelude::*;
use yare::parameterized;

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).unwrap()
}

fn entry_in(id: &str, seconds: i64) -> ScheduleEntry {
    ScheduleEntry::new(id, format!("Show {}", id), now() + TimeDelta::seconds(seconds))
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn empty_schedule_needs_no_power() {
    let decision = evaluate(&[], secs(600), now());
    assert_eq!(decision, PowerDecision::NoEnabledEntries);
    assert!(!decision.is_required());
}

#[test]
fn recording_entry_wins_regardless_of_other_entries() {
    let entries = vec![
        entry_in("far", 86_400),
        entry_in("rec", 86_400 * 3).with_status(EntryStatus::Recording),
        entry_in("near", 5),
    ];

    let decision = evaluate(&entries, secs(0), now());

    assert_eq!(
        decision,
        PowerDecision::ActiveRecording {
            title: "Show rec".to_string()
        }
    );
}

#[test]
fn disabled_recording_entry_still_requires_power() {
    let entries = vec![entry_in("rec", 3600)
        .with_enabled(false)
        .with_status(EntryStatus::Recording)];
    assert!(is_device_required(&entries, secs(10), now()));
}

#[test]
fn first_recording_entry_is_reported() {
    let entries = vec![
        entry_in("a", 0).with_status(EntryStatus::Recording),
        entry_in("b", 0).with_status(EntryStatus::Recording),
    ];
    assert_eq!(
        evaluate(&entries, secs(10), now()),
        PowerDecision::ActiveRecording {
            title: "Show a".to_string()
        }
    );
}

#[test]
fn only_disabled_entries_need_no_power() {
    let entries = vec![
        entry_in("a", 1).with_enabled(false),
        entry_in("b", -30).with_enabled(false),
    ];
    assert_eq!(
        evaluate(&entries, secs(3600), now()),
        PowerDecision::NoEnabledEntries
    );
}

#[test]
fn earliest_enabled_entry_decides() {
    let entries = vec![
        entry_in("later", 7200),
        entry_in("disabled-soon", 10).with_enabled(false),
        entry_in("soon", 300),
    ];

    let decision = evaluate(&entries, secs(600), now());

    assert_eq!(
        decision,
        PowerDecision::Upcoming {
            title: "Show soon".to_string(),
            lead: TimeDelta::seconds(300),
        }
    );
}

#[test]
fn equal_start_times_keep_first_encountered() {
    let entries = vec![entry_in("first", 120), entry_in("second", 120)];

    let decision = evaluate(&entries, secs(10), now());

    assert_eq!(
        decision,
        PowerDecision::TooFarAhead {
            title: "Show first".to_string(),
            lead: TimeDelta::seconds(120),
        }
    );
}

#[test]
fn overdue_entry_not_yet_recording_requires_power() {
    let entries = vec![entry_in("late", -90)];
    assert!(is_device_required(&entries, secs(60), now()));
}

#[parameterized(
    well_within = { 30, 60, true },
    just_outside = { 30, 10, false },
    exactly_at_boundary = { 60, 60, true },
    one_past_boundary = { 61, 60, false },
    zero_lead_now = { 0, 0, true },
)]
fn lead_time_boundary(start_in: i64, max_lead: u64, expected: bool) {
    let entries = vec![entry_in("x", start_in)];
    assert_eq!(is_device_required(&entries, secs(max_lead), now()), expected);
}

#[test]
fn display_names_the_deciding_entry() {
    let decision = PowerDecision::TooFarAhead {
        title: "News".to_string(),
        lead: TimeDelta::seconds(4000),
    };
    assert_eq!(
        decision.to_string(),
        "next recording \"News\" starts in 4000s, too far ahead"
    );
}

fn arb_entry() -> impl Strategy<Value = ScheduleEntry> {
    (any::<bool>(), any::<bool>(), -86_400i64..86_400).prop_map(|(enabled, recording, offset)| {
        let status = if recording {
            EntryStatus::Recording
        } else {
            EntryStatus::Idle
        };
        entry_in("p", offset)
            .with_enabled(enabled)
            .with_status(status)
    })
}

proptest! {
    #[test]
    fn any_recording_entry_requires_power(
        mut entries in proptest::collection::vec(arb_entry(), 0..12),
        position in any::<prop::sample::Index>(),
        max_lead in 0u64..7200,
    ) {
        let recording = entry_in("rec", 999_999).with_status(EntryStatus::Recording);
        let index = position.index(entries.len() + 1);
        entries.insert(index, recording);

        prop_assert!(is_device_required(&entries, secs(max_lead), now()));
    }

    #[test]
    fn no_enabled_idle_entries_never_require_power(
        offsets in proptest::collection::vec(-86_400i64..86_400, 0..12),
        max_lead in 0u64..7200,
    ) {
        let entries: Vec<_> = offsets
            .iter()
            .map(|offset| entry_in("d", *offset).with_enabled(false))
            .collect();

        prop_assert!(!is_device_required(&entries, secs(max_lead), now()));
    }
}
