use std::path::PathBuf;

/// Everything a generator run needs to know. The binary only ever uses
/// [`GeneratorConfig::default`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// All shader paths below are relative to this directory.
    pub root: PathBuf,
    pub template: PathBuf,
    pub placeholder: String,
    pub prefix: String,
    pub suffix: String,
    pub count: u32,
    pub compiler: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            root: PathBuf::from("src"),
            template: PathBuf::from("shaders/Template.vert"),
            placeholder: "REPLACE".into(),
            prefix: "shaders/Pt".into(),
            suffix: ".vert".into(),
            count: 64,
            compiler: "glslc".into(),
        }
    }
}

impl GeneratorConfig {
    /// Uses the default settings with every path placed under `root`.
    #[allow(dead_code)]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }

    /// Name of the variant as referenced by its compile command.
    pub fn variant_name(&self, index: u32) -> String {
        format!("{}{}{}", self.prefix, index, self.suffix)
    }

    pub fn variant_path(&self, index: u32) -> PathBuf {
        self.root.join(self.variant_name(index))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn default_paths_match_shader_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.template_path(), Path::new("src/shaders/Template.vert"));
        assert_eq!(config.variant_name(0), "shaders/Pt0.vert");
        assert_eq!(config.variant_path(63), Path::new("src/shaders/Pt63.vert"));
        assert_eq!(config.count, 64);
    }

    #[test]
    fn with_root_keeps_naming_scheme() {
        let config = GeneratorConfig::with_root("/tmp/out");
        assert_eq!(config.root, Path::new("/tmp/out"));
        assert_eq!(config.variant_path(7), Path::new("/tmp/out/shaders/Pt7.vert"));
        assert_eq!(config.placeholder, "REPLACE");
    }
}
