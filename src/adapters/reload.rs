use crate::domain::ports::Reloader;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use tokio::process::Command;

pub const DEFAULT_RELOAD_COMMAND: [&str; 3] = ["systemctl", "reload", "icinga2"];

/// 執行重新載入指令，預設為 `systemctl reload icinga2`
#[derive(Debug, Clone)]
pub struct CommandReloader {
    command: Vec<String>,
}

impl CommandReloader {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Default for CommandReloader {
    fn default() -> Self {
        Self::new(DEFAULT_RELOAD_COMMAND.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl Reloader for CommandReloader {
    async fn reload(&self) -> Result<()> {
        let (program, args) = self.command.split_first().ok_or_else(|| EtlError::MissingConfigError {
            field: "reload_command".to_string(),
        })?;

        tracing::info!("🔄 Reloading Icinga2 ...");
        tracing::debug!("Reload command: {:?}", self.command);

        let output = Command::new(program).args(args).output().await?;
        if !output.status.success() {
            tracing::debug!(
                "Reload command stdout: {}",
                String::from_utf8_lossy(&output.stdout).trim()
            );
            return Err(EtlError::CommandFailed {
                command: self.command.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!("Icinga2 successfully reloaded!");
        Ok(())
    }
}
