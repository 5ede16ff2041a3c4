// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kernel module reset via systemctl and modprobe

use super::{ResetAdapter, ResetError};
use async_trait::async_trait;
use tokio::process::Command;

/// Unloads the tuner's kernel module, pausing the backend service around it
/// so it releases the device first.
#[derive(Clone, Debug)]
pub struct KernelModuleReset {
    module: String,
    service: Option<String>,
    use_sudo: bool,
}

impl KernelModuleReset {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            service: None,
            use_sudo: false,
        }
    }

    /// Stop this systemd unit before unloading and start it again afterwards
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Command lines run by `reset`, in order
    pub fn commands(&self) -> Vec<Vec<String>> {
        let mut commands = Vec::new();
        if let Some(service) = &self.service {
            commands.push(self.command(&["systemctl", "stop", service]));
        }
        commands.push(self.command(&["modprobe", "-r", &self.module]));
        if let Some(service) = &self.service {
            commands.push(self.command(&["systemctl", "start", service]));
        }
        commands
    }

    fn command(&self, args: &[&str]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        if self.use_sudo {
            argv.push("sudo".to_string());
        }
        argv.extend(args.iter().map(|a| a.to_string()));
        argv
    }
}

async fn run(argv: &[String]) -> Result<(), ResetError> {
    let cmd = argv.join(" ");
    let Some((program, args)) = argv.split_first() else {
        return Ok(());
    };

    tracing::info!(cmd, "running");
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| ResetError::Spawn {
            cmd: cmd.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ResetError::CommandFailed { cmd, stderr });
    }

    tracing::info!(cmd, "succeeded");
    Ok(())
}

#[async_trait]
impl ResetAdapter for KernelModuleReset {
    async fn reset(&self) -> Result<(), ResetError> {
        for argv in self.commands() {
            run(&argv).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "modprobe_tests.rs"]
mod tests;
