use crate::domain::ports::ListingSource;
use crate::utils::error::{EtlError, Result};
use std::path::PathBuf;
use tokio::process::Command;

/// 執行外部程式取得列表，例如 `pwsh -NoProfile -Command <cmd>` 或 `ssh host powershell -Command <cmd>`。
/// 列表指令會附加在 `args` 之後作為最後一個參數。
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ListingSource for CommandSource {
    async fn fetch_listing(&self, command: &str) -> Result<String> {
        tracing::debug!(
            "Executing the command: {} {} \"{}\"",
            self.program,
            self.args.join(" "),
            command
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(command)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(EtlError::CommandFailed {
                command: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!("Command output: {} bytes", stdout.len());
        Ok(stdout)
    }
}

/// 讀取事先擷取好的列表檔案；忽略列表指令
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for FileSource {
    async fn fetch_listing(&self, _command: &str) -> Result<String> {
        tracing::debug!("Reading the listing from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

/// 依設定選擇的來源；讓 CLI 不必對每種來源各寫一次泛型管線
#[derive(Debug, Clone)]
pub enum AnySource {
    Command(CommandSource),
    File(FileSource),
}

impl ListingSource for AnySource {
    async fn fetch_listing(&self, command: &str) -> Result<String> {
        match self {
            AnySource::Command(source) => source.fetch_listing(command).await,
            AnySource::File(source) => source.fetch_listing(command).await,
        }
    }
}
