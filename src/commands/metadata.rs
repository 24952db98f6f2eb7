//! Standalone metadata sidecar generation command

use crate::account::AccountIdentifier;
use crate::error::Result;
use crate::metadata::write_metadata;
use crate::settings::Settings;

pub fn run(settings: &Settings, account_ref: &str) -> Result<()> {
    let account = AccountIdentifier::parse(account_ref)?;
    let path = write_metadata(&settings.output_dir, &account)?;
    println!("Metadata file created: {}", path.display());
    Ok(())
}
