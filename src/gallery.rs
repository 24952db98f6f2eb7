//! gallery-dl configuration file generation
//!
//! Builds the JSON configuration the external downloader reads, scoped to
//! one target account, and writes it to the configured location.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::account::AccountIdentifier;
use crate::error::Result;
use crate::settings::Settings;

#[derive(Debug, Serialize)]
pub struct GalleryDlConfig {
    extractor: ExtractorSection,
    output: OutputSection,
    downloader: DownloaderSection,
}

#[derive(Debug, Serialize)]
struct ExtractorSection {
    twitter: TwitterExtractor,
}

#[derive(Debug, Serialize)]
struct TwitterExtractor {
    directory: Vec<String>,
    filename: String,
    retweets: bool,
    videos: bool,
    cards: bool,
    quoted: bool,
    replies: bool,
    twitpic: bool,
    postprocessors: Vec<Postprocessor>,
}

#[derive(Debug, Serialize)]
struct Postprocessor {
    name: String,
    mode: String,
}

#[derive(Debug, Serialize)]
struct OutputSection {
    progress: bool,
    log: LogSection,
}

#[derive(Debug, Serialize)]
struct LogSection {
    level: String,
}

#[derive(Debug, Serialize)]
struct DownloaderSection {
    retries: u32,
    timeout: u32,
    rate: String,
}

impl GalleryDlConfig {
    /// Build the downloader configuration for one target account.
    ///
    /// All content types are included; the metadata postprocessor exports a
    /// JSON record next to every downloaded file.
    pub fn for_account(settings: &Settings, account: &AccountIdentifier) -> Self {
        Self {
            extractor: ExtractorSection {
                twitter: TwitterExtractor {
                    directory: vec![
                        account.media_dir(),
                        "{category}".to_string(),
                        "{date:%Y-%m-%d}".to_string(),
                    ],
                    filename: "{tweet_id}_{num:>02}.{extension}".to_string(),
                    retweets: true,
                    videos: true,
                    cards: true,
                    quoted: true,
                    replies: true,
                    twitpic: true,
                    postprocessors: vec![Postprocessor {
                        name: "metadata".to_string(),
                        mode: "json".to_string(),
                    }],
                },
            },
            output: OutputSection {
                progress: true,
                log: LogSection {
                    level: "info".to_string(),
                },
            },
            downloader: DownloaderSection {
                retries: settings.retries,
                timeout: settings.timeout_secs,
                rate: settings.rate_limit.clone(),
            },
        }
    }
}

/// Write the gallery-dl configuration for the account.
///
/// Parent directories are created as needed; the file is written in a
/// single whole-file write. Returns the path written.
pub fn write_config(settings: &Settings, account: &AccountIdentifier) -> Result<PathBuf> {
    let config = GalleryDlConfig::for_account(settings, account);
    let json = serde_json::to_string_pretty(&config)?;

    if let Some(parent) = settings.gallery_config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&settings.gallery_config_path, json)?;

    tracing::info!(
        path = %settings.gallery_config_path.display(),
        account = %account,
        "Downloader configuration written"
    );

    Ok(settings.gallery_config_path.clone())
}
