//! Credential setup command

use std::io::{BufRead, Write};

use crate::credentials;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::settings::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let mut prompter = Prompter::stdio(settings.prompt_attempts);
    run_with(settings, &mut prompter)
}

pub fn run_with<R: BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    println!("You need to provide your Twitter credentials for authentication.");
    println!(
        "They will be stored in {} with owner-only permissions.",
        settings.netrc_path.display()
    );

    let creds = prompter.ask_credentials()?;
    credentials::append_netrc(&settings.netrc_path, &creds)?;

    println!("Authentication configured");
    Ok(())
}
