//! Runtime settings shared by the StreamFlix services: the session secret,
//! the database locator and the media hosting credentials, resolved once
//! from the environment and passed to whatever consumes them.

pub mod config;
pub mod env;
pub mod error;
pub mod hygiene;
pub mod media;

pub use config::{ConfigResolver, Settings};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::SettingsError;
pub use hygiene::{HygieneFinding, SettingsSummary};
pub use media::MediaCredentials;
