//! netrc credential store
//!
//! Appends a `machine twitter.com` record to the configured netrc file and
//! restricts it to owner-only access.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Machine name the downloader looks up in the netrc file.
pub const NETRC_MACHINE: &str = "twitter.com";

/// Validated login/password pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    /// Validate and construct a credential pair.
    ///
    /// The login must be non-empty and contain no whitespace; the password
    /// must be non-empty and contain no line breaks. A newline in either
    /// field would corrupt the single-line netrc record.
    pub fn new(login: &str, password: &str) -> Result<Self> {
        let login = login.trim();
        if login.is_empty() {
            return Err(Error::InvalidCredentials("login is empty".to_string()));
        }
        if login.chars().any(char::is_whitespace) {
            return Err(Error::InvalidCredentials(
                "login must not contain whitespace".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(Error::InvalidCredentials("password is empty".to_string()));
        }
        if password.contains('\n') || password.contains('\r') {
            return Err(Error::InvalidCredentials(
                "password must not contain line breaks".to_string(),
            ));
        }

        Ok(Self {
            login: login.to_string(),
            password: password.to_string(),
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// Single netrc record for the Twitter machine.
    fn netrc_line(&self) -> String {
        format!(
            "machine {} login {} password {}\n",
            NETRC_MACHINE, self.login, self.password
        )
    }
}

/// Append the credential record to the netrc file at `path` and restrict
/// the file to owner-only read/write.
pub fn append_netrc(path: &Path, credentials: &Credentials) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(credentials.netrc_line().as_bytes())?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    tracing::info!(path = %path.display(), login = %credentials.login, "Credentials stored");
    Ok(())
}
