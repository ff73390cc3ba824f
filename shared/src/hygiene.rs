//! Configuration hygiene checks and a redacted view of the settings.
//!
//! Nothing here changes a resolved value; risky configuration is only
//! reported so the host can decide what to do.

use std::fmt;

use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::config::{Settings, DEFAULT_DATABASE_URL, SECRET_KEY_VAR};

const REDACTED: &str = "<redacted>";
const DEFAULT_MARKER: &str = "<default>";

/// A non-fatal observation about the resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HygieneFinding {
    /// Session cookies are signed with the key every unconfigured deployment shares.
    DefaultSessionSecret,
    /// The database is the local sqlite file.
    LocalDatabase,
    /// Some, but not all, media hosting variables are set.
    MediaPartiallyConfigured { missing: Vec<&'static str> },
}

impl fmt::Display for HygieneFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HygieneFinding::DefaultSessionSecret => write!(
                f,
                "sessions are signed with the built-in default key, set {SECRET_KEY_VAR} to a unique value"
            ),
            HygieneFinding::LocalDatabase => {
                write!(f, "using local database {DEFAULT_DATABASE_URL}")
            }
            HygieneFinding::MediaPartiallyConfigured { missing } => write!(
                f,
                "media hosting partially configured, missing: {}",
                missing.join(", ")
            ),
        }
    }
}

/// Settings with every credential masked, safe to log or print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub session_secret: &'static str,
    pub database_uri: String,
    pub media_cloud_name: Option<String>,
    pub media_api_key: Option<&'static str>,
    pub media_api_secret: Option<&'static str>,
    pub track_modifications: bool,
    pub media_uploads_enabled: bool,
}

/// Replaces the password of a URL-shaped connection string with `***`.
/// Strings that do not parse as URLs may still carry a password (a libpq
/// `key=value` DSN, a URL with a bad port), so they are masked entirely.
pub fn redact_database_uri(uri: &str) -> String {
    let Ok(mut url) = Url::parse(uri) else {
        return REDACTED.to_string();
    };
    if url.password().is_none() {
        return uri.to_string();
    }
    match url.set_password(Some("***")) {
        Ok(()) => url.to_string(),
        Err(()) => REDACTED.to_string(),
    }
}

impl Settings {
    pub fn hygiene_findings(&self) -> Vec<HygieneFinding> {
        let mut findings = Vec::new();
        if self.uses_default_session_secret() {
            findings.push(HygieneFinding::DefaultSessionSecret);
        }
        if self.database_uri() == DEFAULT_DATABASE_URL {
            findings.push(HygieneFinding::LocalDatabase);
        }
        let missing = self.missing_media_vars();
        if !missing.is_empty() && missing.len() < 3 {
            findings.push(HygieneFinding::MediaPartiallyConfigured { missing });
        }
        findings
    }

    /// Emits one warning per hygiene finding. Meant to be called by the host
    /// once logging is up.
    pub fn log_hygiene(&self) {
        for finding in self.hygiene_findings() {
            match &finding {
                HygieneFinding::DefaultSessionSecret => {
                    warn!(variable = SECRET_KEY_VAR, "{finding}")
                }
                HygieneFinding::LocalDatabase => warn!("{finding}"),
                HygieneFinding::MediaPartiallyConfigured { missing } => {
                    warn!(missing = ?missing, "media uploads disabled: {finding}")
                }
            }
        }
    }

    pub fn summary(&self) -> SettingsSummary {
        let mask = |v: Option<&str>| v.map(|_| REDACTED);
        SettingsSummary {
            session_secret: if self.uses_default_session_secret() {
                DEFAULT_MARKER
            } else {
                REDACTED
            },
            database_uri: redact_database_uri(self.database_uri()),
            media_cloud_name: self.media_cloud_name().map(str::to_string),
            media_api_key: mask(self.media_api_key()),
            media_api_secret: mask(self.media_api_secret()),
            track_modifications: self.track_modifications(),
            media_uploads_enabled: self.media_uploads_enabled(),
        }
    }
}
