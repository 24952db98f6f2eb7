//! External downloader invocation
//!
//! Wraps the gallery-dl executable: availability check with one automatic
//! pip install attempt, and the actual download invocation. No retry and no
//! structured error parsing; exit status is the whole contract.

use std::fs;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::{info, warn};

use crate::account::AccountIdentifier;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Runner for the external download tool.
pub struct ToolRunner {
    command: String,
    install_command: String,
    output_dir: PathBuf,
}

impl ToolRunner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            command: settings.tool_command.clone(),
            install_command: settings.install_command.clone(),
            output_dir: settings.output_dir.clone(),
        }
    }

    /// Check whether the tool responds to `--version`.
    pub async fn is_installed(&self) -> bool {
        match Command::new(&self.command).arg("--version").output().await {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }

    /// Ensure the tool is available, attempting one automatic installation.
    pub async fn ensure_installed(&self) -> Result<()> {
        if self.is_installed().await {
            info!(tool = %self.command, "Download tool is available");
            return Ok(());
        }

        warn!(tool = %self.command, "Download tool not found, attempting installation");
        println!("Installing {}...", self.command);

        let install = Command::new("sh")
            .arg("-c")
            .arg(&self.install_command)
            .output()
            .await;

        match install {
            Ok(out) if out.status.success() => {
                info!(tool = %self.command, "Installation command succeeded");
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                warn!(stderr = %stderr, "Installation command failed");
            }
            Err(e) => {
                warn!(error = %e, "Could not run installation command");
            }
        }

        if self.is_installed().await {
            Ok(())
        } else {
            Err(Error::ToolMissing(format!(
                "{} (install it manually, e.g. `{}`)",
                self.command, self.install_command
            )))
        }
    }

    /// Invoke the tool against the account's profile URL.
    ///
    /// The media directory is created first; the tool's own progress output
    /// goes straight to the console. Returns the media directory on success.
    pub async fn download(&self, account: &AccountIdentifier) -> Result<PathBuf> {
        let media_dir = self.output_dir.join(account.media_dir());
        fs::create_dir_all(&media_dir)?;

        let url = account.profile_url();
        info!(url = %url, "Starting download");

        let status = Command::new(&self.command)
            .arg(&url)
            .status()
            .await
            .map_err(|e| Error::DownloadFailed(format!("could not run {}: {}", self.command, e)))?;

        if status.success() {
            info!(dir = %media_dir.display(), "Download completed");
            Ok(media_dir)
        } else {
            Err(Error::DownloadFailed(format!(
                "{} exited with {}",
                self.command, status
            )))
        }
    }

    /// User-facing hints printed when a download fails.
    pub fn troubleshooting(&self, account: &AccountIdentifier) -> String {
        format!(
            "Troubleshooting tips:\n\
             1. Verify your Twitter credentials are correct\n\
             2. Check if your account has access to the profile\n\
             3. Ensure the target account exists and is not private\n\
             4. Try running with verbose output: {} -v {}",
            self.command,
            account.profile_url()
        )
    }
}
