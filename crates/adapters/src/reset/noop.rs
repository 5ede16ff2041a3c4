// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op reset adapter for tuners whose driver survives power loss.

use super::{ResetAdapter, ResetError};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpResetAdapter;

impl NoOpResetAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResetAdapter for NoOpResetAdapter {
    async fn reset(&self) -> Result<(), ResetError> {
        Ok(())
    }
}
