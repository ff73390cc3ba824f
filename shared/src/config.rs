//! Runtime settings resolved from the process environment.
//!
//! Every value has either a compiled-in fallback or an explicit "absent"
//! state, so resolution cannot fail. Hosts resolve once at startup and hand
//! the [`Settings`] to whatever needs it.

use std::fmt;

use crate::env::{EnvSource, MapEnv, ProcessEnv};

pub const SECRET_KEY_VAR: &str = "SECRET_KEY";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const CLOUDINARY_CLOUD_NAME_VAR: &str = "CLOUDINARY_CLOUD_NAME";
pub const CLOUDINARY_API_KEY_VAR: &str = "CLOUDINARY_API_KEY";
pub const CLOUDINARY_API_SECRET_VAR: &str = "CLOUDINARY_API_SECRET";

/// Session signing key used when `SECRET_KEY` is not set. Shared by every
/// deployment that leaves it unset.
pub const DEFAULT_SECRET_KEY: &str = "streamflix-secret-key-2024";
/// Local file database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///app.db";
/// ORM change tracking. Fixed, never read from the environment.
pub const TRACK_MODIFICATIONS: bool = false;

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.into()
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.into()
}

/// Immutable bundle of resolved settings for one process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    session_secret: String,
    database_uri: String,
    media_cloud_name: Option<String>,
    media_api_key: Option<String>,
    media_api_secret: Option<String>,
}

impl Settings {
    /// Resolves settings from the live process environment.
    pub fn from_env() -> Self {
        ConfigResolver::process().resolve()
    }

    /// Key used by the session layer to sign cookies.
    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    /// Connection string for the persistence layer.
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    pub fn media_cloud_name(&self) -> Option<&str> {
        self.media_cloud_name.as_deref()
    }

    pub fn media_api_key(&self) -> Option<&str> {
        self.media_api_key.as_deref()
    }

    pub fn media_api_secret(&self) -> Option<&str> {
        self.media_api_secret.as_deref()
    }

    pub fn track_modifications(&self) -> bool {
        TRACK_MODIFICATIONS
    }

    /// True when the session secret is the built-in default, whether it came
    /// from the fallback or was set to the same literal.
    pub fn uses_default_session_secret(&self) -> bool {
        self.session_secret == DEFAULT_SECRET_KEY
    }
}

impl Default for Settings {
    /// Settings as resolved from an empty environment.
    fn default() -> Self {
        ConfigResolver::new(MapEnv::new()).resolve()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redacted(v: &Option<String>) -> Option<&'static str> {
            v.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("Settings")
            .field("session_secret", &"<redacted>")
            .field("database_uri", &crate::hygiene::redact_database_uri(&self.database_uri))
            .field("media_cloud_name", &self.media_cloud_name)
            .field("media_api_key", &redacted(&self.media_api_key))
            .field("media_api_secret", &redacted(&self.media_api_secret))
            .finish()
    }
}

/// Builds [`Settings`] from an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver<E = ProcessEnv> {
    source: E,
}

impl ConfigResolver<ProcessEnv> {
    pub fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<E: EnvSource> ConfigResolver<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Looks up each setting, keeping present values verbatim (empty strings
    /// included) and falling back to the defaults otherwise.
    pub fn resolve(&self) -> Settings {
        let get = |name: &str| self.source.get(name);

        Settings {
            session_secret: get(SECRET_KEY_VAR).unwrap_or_else(default_secret_key),
            database_uri: get(DATABASE_URL_VAR).unwrap_or_else(default_database_url),
            media_cloud_name: get(CLOUDINARY_CLOUD_NAME_VAR),
            media_api_key: get(CLOUDINARY_API_KEY_VAR),
            media_api_secret: get(CLOUDINARY_API_SECRET_VAR),
        }
    }
}
