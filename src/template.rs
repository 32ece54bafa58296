use std::path::Path;

use anyhow::Context;

/// Shader source with a placeholder token that gets replaced by a variant index.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    placeholder: String,
}

impl Template {
    pub fn load(path: &Path, placeholder: &str) -> anyhow::Result<Template> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("could not open template '{}'", path.display()))?;

        Ok(Template::from_source(source, placeholder))
    }

    pub fn from_source(source: impl Into<String>, placeholder: &str) -> Template {
        Template {
            source: source.into(),
            placeholder: placeholder.to_owned(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn placeholder_count(&self) -> usize {
        // an empty pattern would match between every char
        if self.placeholder.is_empty() {
            return 0;
        }
        self.source.matches(self.placeholder.as_str()).count()
    }

    pub fn instantiate(&self, index: u32) -> String {
        if self.placeholder.is_empty() {
            return self.source.clone();
        }
        self.source.replace(&self.placeholder, &index.to_string())
    }
}
