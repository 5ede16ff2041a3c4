// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake error indicator for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ErrorIndicator, IndicatorError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fake indicator counting engagements
#[derive(Clone, Default)]
pub struct FakeIndicator {
    engaged: Arc<AtomicUsize>,
}

impl FakeIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engaged(&self) -> usize {
        self.engaged.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ErrorIndicator for FakeIndicator {
    async fn engage(&self) -> Result<(), IndicatorError> {
        self.engaged.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
