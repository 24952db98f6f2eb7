//! Tests for fetch command

use std::io::Cursor;

use twitter_fetcher::commands::{fetch, FetchOptions};
use twitter_fetcher::{Error, Prompter, Settings};

fn test_settings(dir: &std::path::Path) -> Settings {
    let mut settings = Settings::defaults();
    settings.netrc_path = dir.join("netrc");
    settings.gallery_config_path = dir.join("gallery-dl").join("config.json");
    settings.output_dir = dir.join("out");
    settings.lock_file = dir.join("run.lock");
    settings.tool_command = "true".to_string();
    settings.install_command = "true".to_string();
    settings.prompt_attempts = 3;
    settings
}

#[tokio::test]
async fn fetch_pipeline_produces_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());

    let options = FetchOptions {
        account: Some("https://twitter.com/alice".to_string()),
        assume_yes: true,
        setup_auth: false,
    };
    let mut prompter = Prompter::new(Cursor::new(String::new()), Vec::new(), 3);

    fetch::run_with(&settings, options, &mut prompter)
        .await
        .unwrap();

    assert!(settings.gallery_config_path.exists());
    assert!(settings.output_dir.join("alice_metadata.json").exists());
    assert!(settings.output_dir.join("alice_media").is_dir());
}

#[tokio::test]
async fn fetch_reprompts_until_account_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());

    let input = "not a handle\nalice\nn\ny\n";
    let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new(), 3);

    fetch::run_with(&settings, FetchOptions::default(), &mut prompter)
        .await
        .unwrap();

    assert!(settings.output_dir.join("alice_metadata.json").exists());
}

#[tokio::test]
async fn fetch_fails_when_prompt_attempts_run_out() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());

    let input = "!\n!\n!\n";
    let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new(), 3);

    let err = fetch::run_with(&settings, FetchOptions::default(), &mut prompter)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AttemptsExhausted(3)));
}
