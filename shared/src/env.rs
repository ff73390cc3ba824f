//! Environment sources the settings resolver reads from.

use std::collections::HashMap;

/// Read-only lookup of environment variables by name.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when the variable is not set.
    ///
    /// [`ProcessEnv`] converts values that are not valid Unicode lossily,
    /// so such a value comes back with U+FFFD in place of the bad bytes.
    fn get(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // non-unicode values are still "set"
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// In-memory environment snapshot, used by tests and by hosts that inject
/// their own variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
