// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TVHeadend HTTP API client
//!
//! Requests are blocking (ureq) and run on the blocking pool so the
//! cancellation signal keeps being served while a call is in flight.

use super::{SchedulerService, ServiceError};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::DateTime;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tvr_core::{DeviceNode, EntryStatus, ParentRef, ScheduleEntry};

const UPCOMING: &str = "/api/dvr/entry/grid_upcoming";
const OTA_TRIGGER: &str = "/api/epggrab/ota/trigger";
const HARDWARE_TREE: &str = "/api/hardware/tree";
const IDNODE_SAVE: &str = "/api/idnode/save";

/// Fixed credential pair for HTTP basic auth
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the TVHeadend JSON API
#[derive(Clone)]
pub struct TvheadendClient {
    base_url: String,
    authorization: String,
    agent: ureq::Agent,
}

impl TvheadendClient {
    /// `timeout` bounds each whole request; `None` keeps the transport default
    pub fn new(base_url: &str, credentials: &Credentials, timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: credentials.authorization(),
            agent: config.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, endpoint: &'static str, query: &str) -> Result<String, ServiceError> {
        self.execute(endpoint, format!("{}{}{}", self.base_url, endpoint, query), None)
            .await
    }

    async fn post_form(
        &self,
        endpoint: &'static str,
        form: Vec<(&'static str, String)>,
    ) -> Result<String, ServiceError> {
        self.execute(endpoint, format!("{}{}", self.base_url, endpoint), Some(form))
            .await
    }

    async fn execute(
        &self,
        endpoint: &'static str,
        url: String,
        form: Option<Vec<(&'static str, String)>>,
    ) -> Result<String, ServiceError> {
        let agent = self.agent.clone();
        let authorization = self.authorization.clone();

        tokio::task::spawn_blocking(move || {
            let result = match form {
                None => agent
                    .get(url.as_str())
                    .header("Authorization", authorization.as_str())
                    .call(),
                Some(fields) => agent
                    .post(url.as_str())
                    .header("Authorization", authorization.as_str())
                    .send_form(fields.iter().map(|(k, v)| (*k, v.as_str()))),
            };

            let mut response = result.map_err(|e| request_error(endpoint, e))?;
            response
                .body_mut()
                .read_to_string()
                .map_err(|e| ServiceError::Transport {
                    endpoint: endpoint.to_string(),
                    message: format!("failed to read response: {}", e),
                })
        })
        .await
        .map_err(|e| ServiceError::Transport {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?
    }
}

fn request_error(endpoint: &str, error: ureq::Error) -> ServiceError {
    match error {
        ureq::Error::StatusCode(status) => ServiceError::Status {
            endpoint: endpoint.to_string(),
            status,
        },
        other => ServiceError::Transport {
            endpoint: endpoint.to_string(),
            message: other.to_string(),
        },
    }
}

fn malformed(endpoint: &str, message: impl fmt::Display) -> ServiceError {
    ServiceError::Malformed {
        endpoint: endpoint.to_string(),
        message: message.to_string(),
    }
}

#[async_trait]
impl SchedulerService for TvheadendClient {
    async fn upcoming_entries(&self) -> Result<Vec<ScheduleEntry>, ServiceError> {
        let body = self.get(UPCOMING, "").await?;
        decode_upcoming(&body).map_err(|e| malformed(UPCOMING, e))
    }

    async fn trigger_maintenance(&self, settle: Duration) -> Result<(), ServiceError> {
        self.get(OTA_TRIGGER, &format!("?trigger={}", settle.as_secs()))
            .await?;
        Ok(())
    }

    async fn device_tree(&self, parent: &ParentRef) -> Result<Vec<DeviceNode>, ServiceError> {
        let body = self
            .post_form(HARDWARE_TREE, vec![("uuid", parent.as_query().to_string())])
            .await?;
        decode_tree(&body, parent).map_err(|e| malformed(HARDWARE_TREE, e))
    }

    async fn set_device_enabled(&self, uuid: &str, enabled: bool) -> Result<(), ServiceError> {
        self.post_form(IDNODE_SAVE, vec![("node", encode_enabled_node(uuid, enabled))])
            .await?;
        Ok(())
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Deserialize)]
struct UpcomingGrid {
    entries: Vec<UpcomingRow>,
}

#[derive(Deserialize)]
struct UpcomingRow {
    uuid: String,
    #[serde(default)]
    disp_title: Option<String>,
    /// Language code to title, e.g. `{"ger": "Tagesschau"}`
    #[serde(default)]
    title: BTreeMap<String, String>,
    enabled: bool,
    sched_status: String,
    start_real: i64,
}

#[derive(Deserialize)]
struct TreeRow {
    uuid: String,
}

fn decode_upcoming(body: &str) -> Result<Vec<ScheduleEntry>, String> {
    let grid: UpcomingGrid = serde_json::from_str(body).map_err(|e| e.to_string())?;

    grid.entries
        .into_iter()
        .map(|row| {
            let start = DateTime::from_timestamp(row.start_real, 0)
                .ok_or_else(|| format!("entry {}: start {} out of range", row.uuid, row.start_real))?;
            let title = row
                .disp_title
                .filter(|t| !t.is_empty())
                .or_else(|| row.title.into_values().next())
                .unwrap_or_else(|| row.uuid.clone());

            Ok(ScheduleEntry {
                id: row.uuid,
                title,
                enabled: row.enabled,
                status: EntryStatus::from_sched_status(&row.sched_status),
                start,
            })
        })
        .collect()
}

fn decode_tree(body: &str, parent: &ParentRef) -> Result<Vec<DeviceNode>, String> {
    let rows: Vec<TreeRow> = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Ok(rows
        .into_iter()
        .map(|row| DeviceNode {
            uuid: row.uuid,
            parent: parent.clone(),
        })
        .collect())
}

fn encode_enabled_node(uuid: &str, enabled: bool) -> String {
    serde_json::json!({ "uuid": uuid, "enabled": enabled }).to_string()
}

#[cfg(test)]
#[path = "tvheadend_tests.rs"]
mod tests;
