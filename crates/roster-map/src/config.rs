//! Operator configuration file.
//!
//! ```toml
//! [defaults]
//! Status = "Active"
//!
//! [fallback]
//! Person_key = "Id"
//!
//! [mapping.general]
//! EMail = "Email"
//! MName = ""        # deliberately unmapped
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use roster_model::{RequiredDefaults, TemplateKind};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolve::ManualOverrides;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Additions to / replacements of the built-in required-field defaults.
    pub defaults: BTreeMap<String, String>,
    /// Destination → source hints for the general-info template.
    pub fallback: BTreeMap<String, String>,
    /// Manual overrides per template; see [`MappingOverrides`].
    pub mapping: MappingOverrides,
}

/// Manual overrides per template.
///
/// Only `general` changes output. The required-docs and specialty tables are
/// built from the fixed `Id`, `Allied Certifications` and
/// `Allied/Ancillary Specialty N` columns, so their overrides are validated
/// and shown by `roster-mapper map` but never read by the expanders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingOverrides {
    pub general: ManualOverrides,
    pub required_docs: ManualOverrides,
    pub specialty: ManualOverrides,
}

impl MappingOverrides {
    pub fn for_kind(&self, kind: TemplateKind) -> &ManualOverrides {
        match kind {
            TemplateKind::General => &self.general,
            TemplateKind::RequiredDocs => &self.required_docs,
            TemplateKind::Specialty => &self.specialty,
        }
    }
}

impl RosterConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in defaults with this file's `[defaults]` applied on top.
    pub fn required_defaults(&self) -> RequiredDefaults {
        let mut defaults = RequiredDefaults::default();
        for (field, value) in &self.defaults {
            defaults.set(field.clone(), value.clone());
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let config: RosterConfig = toml::from_str(
            r#"
            [defaults]
            Status = "Pending"
            Category = "Allied"

            [fallback]
            Person_key = "Id"

            [mapping.general]
            EMail = "Email"
            MName = ""

            [mapping.specialty]
            Specialty = "Allied/Ancillary Specialty 1"
            "#,
        )
        .unwrap();

        assert_eq!(config.fallback.get("Person_key").map(String::as_str), Some("Id"));
        assert_eq!(config.mapping.general.len(), 2);
        assert!(config.mapping.required_docs.is_empty());
        assert_eq!(
            config.mapping.for_kind(TemplateKind::Specialty).len(),
            1
        );

        let defaults = config.required_defaults();
        assert_eq!(defaults.get("Status"), Some("Pending"));
        assert_eq!(defaults.get("Category"), Some("Allied"));
        assert_eq!(defaults.get("Region"), Some("Unknown Region"));
    }

    #[test]
    fn empty_file_is_default() {
        let config: RosterConfig = toml::from_str("").unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.required_defaults(), RequiredDefaults::default());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        assert!(toml::from_str::<RosterConfig>("[mappings]\n").is_err());
    }
}
