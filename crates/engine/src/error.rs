// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the control engine

use thiserror::Error;
use tvr_adapters::{PowerError, ServiceError, StoreError};
use tvr_core::TimestampError;

/// Any failure that aborts a check cycle
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("scheduler request failed: {0}")]
    Remote(ServiceError),
    #[error("unexpected scheduler response: {0}")]
    Malformed(ServiceError),
    #[error("maintenance timestamp store: {0}")]
    Store(#[from] StoreError),
    #[error("maintenance timestamp: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("tuner power: {0}")]
    Power(#[from] PowerError),
}

/// Failure class, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransientRemote,
    MalformedResponse,
    Persistence,
    Hardware,
}

impl ControlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ControlError::Remote(_) => ErrorKind::TransientRemote,
            ControlError::Malformed(_) => ErrorKind::MalformedResponse,
            ControlError::Store(_) | ControlError::Timestamp(_) => ErrorKind::Persistence,
            ControlError::Power(_) => ErrorKind::Hardware,
        }
    }
}

impl From<ServiceError> for ControlError {
    fn from(error: ServiceError) -> Self {
        if error.is_malformed() {
            ControlError::Malformed(error)
        } else {
            ControlError::Remote(error)
        }
    }
}
