use thiserror::Error;

/// Errors raised by collaborators checking resolved settings.
///
/// Resolving settings never fails; these only come from helpers that ask
/// whether an optional feature is fully configured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("media hosting not configured, missing: {}", .missing.join(", "))]
    MissingMediaCredentials { missing: Vec<&'static str> },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
