//! Fallback values for required general-info fields.

use serde::{Deserialize, Serialize};

/// Destination field → constant written when the projected value is blank.
///
/// Keeps declaration order so logs and summaries are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDefaults {
    fields: Vec<(String, String)>,
}

impl RequiredDefaults {
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets (or replaces) the fallback for one field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for RequiredDefaults {
    fn default() -> Self {
        Self::empty()
            .with("Region", "Unknown Region")
            .with("Fname", "Not Provided")
            .with("Lname", "Not Provided")
            .with("Category", "Not Provided")
            .with("Status", "Active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let defaults = RequiredDefaults::default();
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults.get("Status"), Some("Active"));
        assert_eq!(defaults.get("Region"), Some("Unknown Region"));
        assert_eq!(defaults.get("MName"), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let defaults = RequiredDefaults::default().with("Status", "Inactive");
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults.get("Status"), Some("Inactive"));
        let order: Vec<&str> = defaults.iter().map(|(k, _)| k).collect();
        assert_eq!(order, ["Region", "Fname", "Lname", "Category", "Status"]);
    }
}
