//! Full fetch pipeline command
//!
//! Sequential flow: resolve account, take the run lock, ensure the tool is
//! installed, optionally store credentials, write the downloader config and
//! the metadata sidecar, confirm, download.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::account::AccountIdentifier;
use crate::credentials;
use crate::error::Result;
use crate::gallery;
use crate::lock::RunLock;
use crate::metadata;
use crate::metrics;
use crate::prompt::Prompter;
use crate::settings::Settings;
use crate::tool::ToolRunner;

#[derive(Debug, Default, Clone)]
pub struct FetchOptions {
    /// Account reference from the command line; prompted for when absent.
    pub account: Option<String>,
    /// Skip all confirmations (non-interactive use).
    pub assume_yes: bool,
    /// Force the credential setup step without asking.
    pub setup_auth: bool,
}

/// Run the pipeline against the process console.
pub async fn run(settings: &Settings, options: FetchOptions) -> Result<()> {
    let mut prompter = Prompter::stdio(settings.prompt_attempts);
    run_with(settings, options, &mut prompter).await
}

/// Run the pipeline with an injected prompter.
pub async fn run_with<R: BufRead, W: Write>(
    settings: &Settings,
    options: FetchOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    // A reference passed on the command line is parsed once and failure is
    // final; only interactive input gets the bounded re-prompt loop.
    let account = match options.account.as_deref() {
        Some(raw) => AccountIdentifier::parse(raw)?,
        None => prompter.ask_account()?,
    };

    println!("Target account: @{}", account);
    println!("Profile URL: {}", account.profile_url());

    let _lock = RunLock::acquire(&settings.lock_file)?;

    let runner = ToolRunner::new(settings);
    runner.ensure_installed().await?;

    let wants_auth = options.setup_auth
        || (!options.assume_yes
            && prompter.confirm("\nDo you need to set up Twitter authentication?")?);
    if wants_auth {
        let creds = prompter.ask_credentials()?;
        credentials::append_netrc(&settings.netrc_path, &creds)?;
        println!("Authentication configured");
    }

    gallery::write_config(settings, &account)?;
    println!("Configuration file created for @{}", account);

    let sidecar = metadata::write_metadata(&settings.output_dir, &account)?;
    println!("Metadata file created: {}", sidecar.display());

    println!("\nSummary:");
    println!("   Target: @{}", account);
    println!("   Output folder: {}/", account.media_dir());
    println!("   Tool: {}", settings.tool_command);

    let proceed = options.assume_yes
        || prompter.confirm(&format!("\nReady to download all media from @{}?", account))?;
    if !proceed {
        println!("Download cancelled.");
        println!("Configuration saved for future downloads of @{}", account);
        return Ok(());
    }

    let start = Instant::now();
    match runner.download(&account).await {
        Ok(dir) => {
            metrics::record_download(start.elapsed(), true);
            println!("Download completed successfully!");
            println!("Media files have been saved to: {}/", dir.display());
            Ok(())
        }
        Err(e) => {
            metrics::record_download(start.elapsed(), false);
            eprintln!("Download failed: {}", e);
            eprintln!("\n{}", runner.troubleshooting(&account));
            Err(e)
        }
    }
}
