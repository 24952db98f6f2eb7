//! Tests for write_config and metadata commands

use twitter_fetcher::commands::{metadata, write_config};
use twitter_fetcher::{Error, Settings};

#[test]
fn write_config_accepts_url_reference() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::defaults();
    settings.gallery_config_path = dir.path().join("config.json");

    write_config::run(&settings, "https://x.com/alice?src=test").unwrap();

    let content = std::fs::read_to_string(&settings.gallery_config_path).unwrap();
    assert!(content.contains("alice_media"));
}

#[test]
fn write_config_rejects_url_without_segment() {
    let settings = Settings::defaults();
    let err = write_config::run(&settings, "https://x.com/").unwrap_err();
    assert!(matches!(err, Error::InvalidAccount(_)));
}

#[test]
fn metadata_command_writes_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::defaults();
    settings.output_dir = dir.path().to_path_buf();

    metadata::run(&settings, "alice").unwrap();

    let content = std::fs::read_to_string(dir.path().join("alice_metadata.json")).unwrap();
    assert!(content.contains("https://twitter.com/alice"));
    assert!(content.contains("https://x.com/alice"));
}
