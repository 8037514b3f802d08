//! Capability-driven format registry.
//!
//! Responsibilities:
//! - Record which formats are actually available in this build.
//! - Resolve a user-supplied format tag to a `Format`, treating a format
//!   compiled out of the crate exactly like an unknown tag.
//!
//! Does NOT handle:
//! - Parsing (see `formats`), stream reading (see `reader`).
//!
//! Invariants:
//! - Built once, read-only afterwards. There is no registration API after
//!   construction and no interior mutability.
//! - `ini` and `env` have no backing decoder dependency and are always
//!   registered. `json` and `yaml` depend on their cargo features.

use crate::formats::Format;

/// Which optional decoders this build carries.
///
/// `detect()` reads the compile-time feature flags; tests construct this
/// directly to simulate a build with a decoder missing.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub json: bool,
    pub yaml: bool,
}

impl Capabilities {
    /// Capabilities of the current build.
    pub fn detect() -> Self {
        Capabilities {
            json: cfg!(feature = "json"),
            yaml: cfg!(feature = "yaml"),
        }
    }
}

/// The set of formats requests can resolve to.
#[derive(Debug, Clone)]
pub struct Registry {
    formats: Vec<Format>,
}

impl Registry {
    /// Build a registry from an explicit capability table.
    pub fn build(caps: Capabilities) -> Self {
        let formats = Format::ALL
            .into_iter()
            .filter(|format| match format {
                Format::Ini | Format::Env => true,
                Format::Json => caps.json,
                Format::Yaml => caps.yaml,
            })
            .collect();
        Registry { formats }
    }

    /// Build the registry for the current build's capabilities.
    pub fn detect() -> Self {
        Self::build(Capabilities::detect())
    }

    /// Resolve a format tag. Unknown tags and unavailable formats both
    /// return `None`; callers cannot tell the two apart.
    pub fn lookup(&self, tag: &str) -> Option<Format> {
        tag.parse::<Format>()
            .ok()
            .filter(|format| self.formats.contains(format))
    }

    /// The registered formats, in declaration order.
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ini_and_env_are_always_registered() {
        let registry = Registry::build(Capabilities {
            json: false,
            yaml: false,
        });
        assert_eq!(registry.lookup("ini"), Some(Format::Ini));
        assert_eq!(registry.lookup("env"), Some(Format::Env));
        assert_eq!(registry.formats(), [Format::Ini, Format::Env]);
    }

    #[test]
    fn test_missing_capability_looks_like_unknown_tag() {
        let registry = Registry::build(Capabilities {
            json: false,
            yaml: true,
        });
        assert_eq!(registry.lookup("json"), None);
        assert_eq!(registry.lookup("nonsense"), None);
        assert_eq!(registry.lookup("yaml"), Some(Format::Yaml));
    }

    #[test]
    fn test_detect_matches_compiled_features() {
        let registry = Registry::detect();
        assert_eq!(
            registry.lookup("json").is_some(),
            cfg!(feature = "json")
        );
        assert_eq!(
            registry.lookup("yaml").is_some(),
            cfg!(feature = "yaml")
        );
    }
}
