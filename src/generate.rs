use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{command::CompileCommand, config::GeneratorConfig, template::Template};

/// Paths written by a successful run, in index order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

pub struct Generator {
    config: GeneratorConfig,
    template: Template,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Generator> {
        let path = config.template_path();
        let template = Template::load(&path, &config.placeholder)?;

        let occurrences = template.placeholder_count();
        if occurrences == 0 {
            warn!(
                path = %path.display(),
                placeholder = %config.placeholder,
                "template has no placeholder, every variant will be an exact copy"
            );
        }
        debug!(
            path = %path.display(),
            bytes = template.source().len(),
            occurrences,
            "loaded template"
        );

        Ok(Generator { config, template })
    }

    /// Writes every variant to disk and prints its compile command to `out`.
    ///
    /// Stops at the first failure; variants written before it are left in place.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<GenerationReport> {
        let mut report = GenerationReport::default();

        for index in 0..self.config.count {
            let name = self.config.variant_name(index);
            let path = self.config.variant_path(index);

            write_variant(&path, &self.template.instantiate(index))?;
            debug!(index, path = %path.display(), "wrote variant");

            writeln!(out, "{}", CompileCommand::new(&self.config.compiler, &name))
                .context("could not print compile command")?;

            report.written.push(path);
        }

        out.flush().context("could not flush compile commands")?;

        info!(count = report.written.len(), "generated shader variants");
        Ok(report)
    }
}

fn write_variant(path: &Path, content: &str) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("could not create '{}'", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("could not write '{}'", path.display()))?;
    file.sync_all()
        .with_context(|| format!("could not flush '{}'", path.display()))?;
    Ok(())
}
