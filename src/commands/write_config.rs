//! Standalone downloader-config generation command

use crate::account::AccountIdentifier;
use crate::error::Result;
use crate::gallery;
use crate::settings::Settings;

pub fn run(settings: &Settings, account_ref: &str) -> Result<()> {
    let account = AccountIdentifier::parse(account_ref)?;
    let path = gallery::write_config(settings, &account)?;
    println!(
        "Configuration file created for @{}: {}",
        account,
        path.display()
    );
    Ok(())
}
