//! Account reference parsing and validation
//!
//! Normalizes heterogeneous user input (bare handle, @handle, or a profile
//! URL on twitter.com / x.com) into a canonical account handle.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Extracts the path segment following either known profile domain.
static URL_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:twitter\.com/|x\.com/)([^/?]+)").unwrap());

/// Valid handles: letters, digits and underscores only, full match.
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAccountError {
    #[error("account reference is empty")]
    Empty,

    #[error("could not extract a username from URL: {0}")]
    UnparseableUrl(String),

    #[error("invalid username '{0}': only letters, numbers, and underscores are allowed")]
    InvalidHandle(String),
}

/// A validated Twitter/X account handle.
///
/// Once constructed the handle contains no protocol prefix, no domain,
/// no leading `@`, and no path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountIdentifier {
    handle: String,
}

impl AccountIdentifier {
    /// Parse one line of free-form text into a validated account handle.
    ///
    /// URL-form detection takes precedence over the `@`-prefix, which takes
    /// precedence over bare-handle interpretation. A string that looks like
    /// a URL but yields no path segment is rejected, never reinterpreted as
    /// a bare handle.
    pub fn parse(input: &str) -> Result<Self, ParseAccountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseAccountError::Empty);
        }

        let candidate = if trimmed.contains("twitter.com/") || trimmed.contains("x.com/") {
            URL_HANDLE_RE
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| ParseAccountError::UnparseableUrl(trimmed.to_string()))?
        } else if let Some(rest) = trimmed.strip_prefix('@') {
            rest.to_string()
        } else {
            trimmed.to_string()
        };

        if !HANDLE_RE.is_match(&candidate) {
            return Err(ParseAccountError::InvalidHandle(candidate));
        }

        Ok(Self { handle: candidate })
    }

    /// Canonical handle without any decoration.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Canonical profile page address.
    pub fn profile_url(&self) -> String {
        format!("https://twitter.com/{}", self.handle)
    }

    /// Profile address on the renamed domain.
    pub fn alt_url(&self) -> String {
        format!("https://x.com/{}", self.handle)
    }

    /// Directory name downloaded media is stored under.
    pub fn media_dir(&self) -> String {
        format!("{}_media", self.handle)
    }

    /// Name of the JSON sidecar describing the download attempt.
    pub fn metadata_filename(&self) -> String {
        format!("{}_metadata.json", self.handle)
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}
