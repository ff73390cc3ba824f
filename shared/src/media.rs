//! Media hosting (Cloudinary) credentials as seen by the upload layer.

use std::fmt;

use crate::config::{
    Settings, CLOUDINARY_API_KEY_VAR, CLOUDINARY_API_SECRET_VAR, CLOUDINARY_CLOUD_NAME_VAR,
};
use crate::error::{Result, SettingsError};

/// Complete set of media hosting credentials. Only exists when all three
/// values were provided.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaCredentials {
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl MediaCredentials {
    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for MediaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// Names of the media variables that were not set, in declaration order.
    pub fn missing_media_vars(&self) -> Vec<&'static str> {
        [
            (CLOUDINARY_CLOUD_NAME_VAR, self.media_cloud_name()),
            (CLOUDINARY_API_KEY_VAR, self.media_api_key()),
            (CLOUDINARY_API_SECRET_VAR, self.media_api_secret()),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    /// Returns the credentials when all three are present. Empty values count
    /// as present; the format is never checked.
    pub fn media_credentials(&self) -> Result<MediaCredentials> {
        match (
            self.media_cloud_name(),
            self.media_api_key(),
            self.media_api_secret(),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(MediaCredentials {
                cloud_name: cloud_name.to_string(),
                api_key: api_key.to_string(),
                api_secret: api_secret.to_string(),
            }),
            _ => Err(SettingsError::MissingMediaCredentials {
                missing: self.missing_media_vars(),
            }),
        }
    }

    pub fn media_uploads_enabled(&self) -> bool {
        self.media_credentials().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigResolver;
    use crate::env::MapEnv;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        ConfigResolver::new(pairs.iter().copied().collect::<MapEnv>()).resolve()
    }

    #[test]
    fn all_three_present_yields_credentials() {
        let s = settings(&[
            ("CLOUDINARY_CLOUD_NAME", "acme"),
            ("CLOUDINARY_API_KEY", "key"),
            ("CLOUDINARY_API_SECRET", "secret"),
        ]);
        let creds = s.media_credentials().unwrap();
        assert_eq!(creds.cloud_name(), "acme");
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.api_secret(), "secret");
        assert!(s.media_uploads_enabled());
    }

    #[test]
    fn none_present_lists_every_variable() {
        let err = Settings::default().media_credentials().unwrap_err();
        assert_eq!(
            err,
            SettingsError::MissingMediaCredentials {
                missing: vec![
                    "CLOUDINARY_CLOUD_NAME",
                    "CLOUDINARY_API_KEY",
                    "CLOUDINARY_API_SECRET"
                ]
            }
        );
        assert_eq!(
            err.to_string(),
            "media hosting not configured, missing: CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET"
        );
    }

    #[test]
    fn partial_configuration_lists_only_missing() {
        let s = settings(&[("CLOUDINARY_CLOUD_NAME", "acme")]);
        assert!(!s.media_uploads_enabled());
        assert_eq!(
            s.missing_media_vars(),
            vec!["CLOUDINARY_API_KEY", "CLOUDINARY_API_SECRET"]
        );
    }

    #[test]
    fn empty_values_count_as_present() {
        let s = settings(&[
            ("CLOUDINARY_CLOUD_NAME", ""),
            ("CLOUDINARY_API_KEY", ""),
            ("CLOUDINARY_API_SECRET", ""),
        ]);
        assert!(s.media_uploads_enabled());
        assert!(s.missing_media_vars().is_empty());
    }

    #[test]
    fn debug_hides_key_and_secret() {
        let s = settings(&[
            ("CLOUDINARY_CLOUD_NAME", "acme"),
            ("CLOUDINARY_API_KEY", "key-abc"),
            ("CLOUDINARY_API_SECRET", "secret-xyz"),
        ]);
        let out = format!("{:?}", s.media_credentials().unwrap());
        assert!(out.contains("acme"));
        assert!(!out.contains("key-abc"));
        assert!(!out.contains("secret-xyz"));
    }
}
