//! Download metadata sidecar
//!
//! Writes `<handle>_metadata.json` next to the downloaded media, recording
//! the account's profile addresses, the attempt status, and tooling notes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::account::AccountIdentifier;
use crate::error::Result;

pub const STATUS_READY: &str = "ready_for_download";
pub const SCRIPT_VERSION: &str = "flexible_v1.0";

const NOTES: &str = "Please respect the account owner's rights and Twitter's \
                     Terms of Service when downloading content.";

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub account: AccountSection,
    pub download_info: DownloadInfo,
    pub recommended_tools: Vec<RecommendedTool>,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountSection {
    pub username: String,
    pub profile_url: String,
    pub alt_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub attempted_date: String,
    pub status: String,
    pub tool_used: String,
    pub script_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendedTool {
    pub name: String,
    pub method: String,
    pub authentication_required: bool,
    pub reliability: String,
}

impl Metadata {
    /// Build the sidecar record for an account, stamped with today's date.
    pub fn for_account(account: &AccountIdentifier) -> Self {
        Self {
            account: AccountSection {
                username: account.handle().to_string(),
                profile_url: account.profile_url(),
                alt_url: account.alt_url(),
            },
            download_info: DownloadInfo {
                attempted_date: Utc::now().format("%Y-%m-%d").to_string(),
                status: STATUS_READY.to_string(),
                tool_used: "gallery-dl".to_string(),
                script_version: SCRIPT_VERSION.to_string(),
            },
            recommended_tools: vec![
                RecommendedTool {
                    name: "gallery-dl".to_string(),
                    method: "command_line".to_string(),
                    authentication_required: true,
                    reliability: "high".to_string(),
                },
                RecommendedTool {
                    name: "X Media Downloader".to_string(),
                    method: "browser_extension".to_string(),
                    authentication_required: false,
                    reliability: "medium".to_string(),
                },
            ],
            notes: NOTES.to_string(),
        }
    }
}

/// Write the metadata sidecar into `output_dir`. Returns the path written.
pub fn write_metadata(output_dir: &Path, account: &AccountIdentifier) -> Result<PathBuf> {
    let metadata = Metadata::for_account(account);
    let json = serde_json::to_string_pretty(&metadata)?;

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(account.metadata_filename());
    fs::write(&path, json)?;

    tracing::info!(path = %path.display(), "Metadata sidecar written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(handle: &str) -> AccountIdentifier {
        AccountIdentifier::parse(handle).unwrap()
    }

    #[test]
    fn metadata_records_both_profile_urls() {
        let metadata = Metadata::for_account(&account("alice"));

        assert_eq!(metadata.account.username, "alice");
        assert_eq!(metadata.account.profile_url, "https://twitter.com/alice");
        assert_eq!(metadata.account.alt_url, "https://x.com/alice");
    }

    #[test]
    fn metadata_download_info_defaults() {
        let metadata = Metadata::for_account(&account("alice"));

        assert_eq!(metadata.download_info.status, STATUS_READY);
        assert_eq!(metadata.download_info.tool_used, "gallery-dl");
        assert_eq!(metadata.download_info.script_version, SCRIPT_VERSION);
    }

    #[test]
    fn attempted_date_is_iso_day() {
        let metadata = Metadata::for_account(&account("alice"));
        let date = &metadata.download_info.attempted_date;

        // YYYY-MM-DD
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn metadata_lists_recommended_tools() {
        let metadata = Metadata::for_account(&account("alice"));

        assert_eq!(metadata.recommended_tools.len(), 2);
        assert_eq!(metadata.recommended_tools[0].name, "gallery-dl");
        assert!(metadata.recommended_tools[0].authentication_required);
        assert_eq!(metadata.recommended_tools[1].method, "browser_extension");
        assert!(!metadata.recommended_tools[1].authentication_required);
    }

    #[test]
    fn metadata_serializes_to_expected_shape() {
        let metadata = Metadata::for_account(&account("alice"));
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&metadata).unwrap()).unwrap();

        assert_eq!(value["account"]["username"], "alice");
        assert_eq!(value["account"]["profile_url"], "https://twitter.com/alice");
        assert_eq!(value["download_info"]["status"], "ready_for_download");
        assert_eq!(value["recommended_tools"][0]["reliability"], "high");
        assert!(value["notes"].as_str().unwrap().contains("Terms of Service"));
    }

    #[test]
    fn write_metadata_uses_handle_derived_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_metadata(dir.path(), &account("alice")).unwrap();

        assert!(path.ends_with("alice_metadata.json"));
        assert!(path.exists());
    }

    #[test]
    fn written_metadata_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_metadata(dir.path(), &account("alice")).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let parsed: Metadata = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed.account.profile_url, "https://twitter.com/alice");
        assert_eq!(parsed.account.alt_url, "https://x.com/alice");
    }

    #[test]
    fn write_metadata_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("archive").join("runs");

        let path = write_metadata(&nested, &account("bob")).unwrap();
        assert!(path.exists());
    }
}
