// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nodes of the scheduler's hardware tree

use std::fmt;

/// Identifier the scheduler uses for the top of its hardware tree
pub const ROOT_SENTINEL: &str = "root";

/// Parent of a device node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentRef {
    Root,
    Node(String),
}

impl ParentRef {
    /// Value sent to the tree query for this parent
    pub fn as_query(&self) -> &str {
        match self {
            ParentRef::Root => ROOT_SENTINEL,
            ParentRef::Node(uuid) => uuid,
        }
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

/// A node in the two-level device hierarchy (adapters and their frontends)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceNode {
    pub uuid: String,
    pub parent: ParentRef,
}

impl DeviceNode {
    pub fn root(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            parent: ParentRef::Root,
        }
    }

    pub fn child(uuid: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            parent: ParentRef::Node(parent.into()),
        }
    }

    /// Reference to this node as the parent of a further query
    pub fn as_parent(&self) -> ParentRef {
        ParentRef::Node(self.uuid.clone())
    }
}
