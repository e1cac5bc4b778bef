//! Builder that renders the accessor module into a file.

use anyhow::{Context, Result};
use genaccessors::{FieldList, FieldName, emit, write_if_changed};
use std::path::{Path, PathBuf};

/// Builder for configuring and running the accessor generator.
pub struct AccessorGenerator {
    fields: Vec<FieldName>,
    output_file: PathBuf,
    strict: bool,
}

impl AccessorGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            output_file: PathBuf::from("src/GenAccessors.elm"),
            strict: false,
        }
    }

    /// Add one field. Fields are emitted in the order they are added.
    pub fn field(mut self, name: impl Into<FieldName>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Add several fields, keeping their order.
    pub fn fields<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the output file path for the generated module.
    ///
    /// Default: `src/GenAccessors.elm`
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Validate field names before generating.
    ///
    /// Default: `false`
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path the module will be written to.
    pub fn output_path(&self) -> &Path {
        &self.output_file
    }

    /// Run the generator.
    ///
    /// Uses the built-in field list when no fields were added. Returns
    /// whether the output file was (re)written.
    pub fn run(self) -> Result<bool> {
        let fields = if self.fields.is_empty() {
            FieldList::default()
        } else {
            FieldList::new(self.fields)
        };

        if self.strict {
            fields.validate_all().context("Invalid accessor field list")?;
        }

        let code = emit(fields.as_slice());

        let written = write_if_changed(&self.output_file, &code)
            .with_context(|| format!("Failed to write {}", self.output_file.display()))?;

        if written {
            log::info!(
                "genaccessors-build: Generated {} with {} accessors",
                self.output_file.display(),
                fields.len()
            );
        }

        Ok(written)
    }
}

impl Default for AccessorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genaccessors::{DEFAULT_FIELDS, HEADER, render_entry};
    use std::fs;

    #[test]
    fn test_defaults_to_builtin_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("GenAccessors.elm");

        let written = AccessorGenerator::new().output_file(&path).run().unwrap();

        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), emit(DEFAULT_FIELDS));
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Gen.elm");

        AccessorGenerator::new()
            .field("zeta")
            .fields(["alpha", "mid"])
            .output_file(&path)
            .run()
            .unwrap();

        let expected = format!(
            "{HEADER}{}{}{}",
            render_entry("zeta"),
            render_entry("alpha"),
            render_entry("mid")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_second_run_does_not_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Gen.elm");

        assert!(generate(&path, "title").run().unwrap());
        assert!(!generate(&path, "title").run().unwrap());
        assert!(generate(&path, "period").run().unwrap());
    }

    #[test]
    fn test_strict_rejects_invalid_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Gen.elm");

        let result = generate(&path, "Not Valid").strict(true).run();

        assert!(result.is_err());
        assert!(!path.exists());
    }

    fn generate(path: &Path, field: &str) -> AccessorGenerator {
        AccessorGenerator::new().field(field).output_file(path)
    }
}
