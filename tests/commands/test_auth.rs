//! Tests for auth command

use std::io::Cursor;

use twitter_fetcher::commands::auth;
use twitter_fetcher::{Prompter, Settings};

#[test]
fn auth_appends_to_existing_netrc() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::defaults();
    settings.netrc_path = dir.path().join("netrc");

    std::fs::write(
        &settings.netrc_path,
        "machine example.org login bob password x\n",
    )
    .unwrap();

    let mut prompter = Prompter::new(Cursor::new("alice\ns3cret\n".to_string()), Vec::new(), 3);
    auth::run_with(&settings, &mut prompter).unwrap();

    let content = std::fs::read_to_string(&settings.netrc_path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.ends_with("machine twitter.com login alice password s3cret\n"));
}

#[cfg(unix)]
#[test]
fn auth_restricts_netrc_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::defaults();
    settings.netrc_path = dir.path().join("netrc");

    let mut prompter = Prompter::new(Cursor::new("alice\ns3cret\n".to_string()), Vec::new(), 3);
    auth::run_with(&settings, &mut prompter).unwrap();

    let mode = std::fs::metadata(&settings.netrc_path)
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
