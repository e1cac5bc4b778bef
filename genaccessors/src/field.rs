//! Field names and ordered field lists.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EmitError;

/// Fields generated when no other list is supplied.
pub const DEFAULT_FIELDS: &[&str] = &["newJob", "title", "period", "urgencyGrowth"];

/// Words that cannot be used as Elm value names.
const RESERVED_WORDS: &[&str] = &[
    "if", "then", "else", "case", "of", "let", "in", "type", "module", "where", "import",
    "exposing", "as", "port", "alias", "infix", "effect",
];

/// Name of a record field targeted by a generated accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the name is a lowercase Elm identifier.
    ///
    /// The emitter itself never calls this; it is only used when the caller
    /// asks for strict checking.
    pub fn validate(&self) -> Result<(), EmitError> {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return Err(EmitError::invalid(&self.0, "name is empty"));
        };
        if !first.is_ascii_lowercase() {
            return Err(EmitError::invalid(&self.0, "must start with a lowercase letter"));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(EmitError::invalid(
                &self.0,
                "may only contain letters, digits and underscores",
            ));
        }
        if RESERVED_WORDS.contains(&self.0.as_str()) {
            return Err(EmitError::invalid(&self.0, "is a reserved word"));
        }
        Ok(())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered list of fields; order decides emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList(Vec<FieldName>);

impl FieldList {
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[FieldName] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldName> {
        self.0.iter()
    }

    /// Validate every name and reject duplicates, stopping at the first problem.
    pub fn validate_all(&self) -> Result<(), EmitError> {
        let mut seen = HashSet::new();
        for name in &self.0 {
            name.validate()?;
            if !seen.insert(name.as_str()) {
                return Err(EmitError::DuplicateFieldName {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS.iter().copied())
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_order() {
        let fields = FieldList::default();
        let names: Vec<&str> = fields.iter().map(FieldName::as_str).collect();
        assert_eq!(names, ["newJob", "title", "period", "urgencyGrowth"]);
    }

    #[test]
    fn test_validate_accepts_identifiers() {
        for name in ["x", "newJob", "urgencyGrowth", "field_2"] {
            assert!(FieldName::new(name).validate().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        for name in ["", "Title", "9lives", "has space", "dash-ed", "type", "let"] {
            assert!(
                matches!(
                    FieldName::new(name).validate(),
                    Err(EmitError::InvalidFieldName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_all_rejects_duplicates() {
        let fields = FieldList::new(["title", "period", "title"]);
        match fields.validate_all() {
            Err(EmitError::DuplicateFieldName { name }) => assert_eq!(name, "title"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_list_deserializes_from_array() {
        #[derive(Deserialize)]
        struct Wrapper {
            fields: FieldList,
        }

        let wrapper: Wrapper = toml::from_str(r#"fields = ["a", "b"]"#).unwrap();
        assert_eq!(wrapper.fields, FieldList::new(["a", "b"]));
    }
}
