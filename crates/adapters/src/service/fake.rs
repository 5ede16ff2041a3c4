// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake scheduler service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SchedulerService, ServiceError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tvr_core::{DeviceNode, ParentRef, ScheduleEntry};

/// Recorded service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    UpcomingEntries,
    TriggerMaintenance { settle: Duration },
    DeviceTree { parent: String },
    SetEnabled { uuid: String, enabled: bool },
}

#[derive(Default)]
struct FakeServiceState {
    entries: Vec<ScheduleEntry>,
    roots: Vec<String>,
    children: HashMap<String, Vec<String>>,
    /// Root queries that still report no devices
    hidden_root_polls: usize,
    failing_nodes: HashSet<String>,
    fail_upcoming: bool,
    garble_upcoming: bool,
    fail_trigger: bool,
    calls: Vec<ServiceCall>,
}

/// In-memory scheduler with a configurable hardware tree
#[derive(Clone, Default)]
pub struct FakeSchedulerService {
    inner: Arc<Mutex<FakeServiceState>>,
}

impl FakeSchedulerService {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeServiceState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_entries(&self, entries: Vec<ScheduleEntry>) {
        self.state().entries = entries;
    }

    /// Add a root device with the given child devices
    pub fn add_root(&self, uuid: &str, children: &[&str]) {
        let mut state = self.state();
        state.roots.push(uuid.to_string());
        state.children.insert(
            uuid.to_string(),
            children.iter().map(|c| c.to_string()).collect(),
        );
    }

    /// Report an empty root list for the next `polls` root queries
    pub fn hide_roots_for(&self, polls: usize) {
        self.state().hidden_root_polls = polls;
    }

    pub fn fail_set_enabled_for(&self, uuid: &str) {
        self.state().failing_nodes.insert(uuid.to_string());
    }

    pub fn fail_upcoming(&self) {
        self.state().fail_upcoming = true;
    }

    /// Answer upcoming queries with an undecodable payload
    pub fn garble_upcoming(&self) {
        self.state().garble_upcoming = true;
    }

    pub fn fail_trigger(&self) {
        self.state().fail_trigger = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.state().calls.clone()
    }

    /// The `SetEnabled` calls, in order
    pub fn enable_requests(&self) -> Vec<(String, bool)> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                ServiceCall::SetEnabled { uuid, enabled } => Some((uuid.clone(), *enabled)),
                _ => None,
            })
            .collect()
    }

    /// Number of root tree queries issued
    pub fn root_queries(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|call| matches!(call, ServiceCall::DeviceTree { parent } if parent == "root"))
            .count()
    }
}

fn unavailable(endpoint: &str) -> ServiceError {
    ServiceError::Status {
        endpoint: endpoint.to_string(),
        status: 503,
    }
}

#[async_trait]
impl SchedulerService for FakeSchedulerService {
    async fn upcoming_entries(&self) -> Result<Vec<ScheduleEntry>, ServiceError> {
        let mut state = self.state();
        state.calls.push(ServiceCall::UpcomingEntries);
        if state.fail_upcoming {
            return Err(unavailable("upcoming"));
        }
        if state.garble_upcoming {
            return Err(ServiceError::Malformed {
                endpoint: "upcoming".to_string(),
                message: "missing field `entries`".to_string(),
            });
        }
        Ok(state.entries.clone())
    }

    async fn trigger_maintenance(&self, settle: Duration) -> Result<(), ServiceError> {
        let mut state = self.state();
        state.calls.push(ServiceCall::TriggerMaintenance { settle });
        if state.fail_trigger {
            return Err(unavailable("trigger"));
        }
        Ok(())
    }

    async fn device_tree(&self, parent: &ParentRef) -> Result<Vec<DeviceNode>, ServiceError> {
        let mut state = self.state();
        state.calls.push(ServiceCall::DeviceTree {
            parent: parent.as_query().to_string(),
        });

        let nodes = match parent {
            ParentRef::Root => {
                if state.hidden_root_polls > 0 {
                    state.hidden_root_polls -= 1;
                    return Ok(Vec::new());
                }
                state.roots.iter().map(DeviceNode::root).collect()
            }
            ParentRef::Node(uuid) => state
                .children
                .get(uuid)
                .map(|children| {
                    children
                        .iter()
                        .map(|child| DeviceNode::child(child, uuid.as_str()))
                        .collect()
                })
                .unwrap_or_default(),
        };
        Ok(nodes)
    }

    async fn set_device_enabled(&self, uuid: &str, enabled: bool) -> Result<(), ServiceError> {
        let mut state = self.state();
        state.calls.push(ServiceCall::SetEnabled {
            uuid: uuid.to_string(),
            enabled,
        });
        if state.failing_nodes.contains(uuid) {
            return Err(unavailable("idnode/save"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
