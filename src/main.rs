mod command;
mod config;
mod generate;
mod template;

use anyhow::Context;
use config::GeneratorConfig;
use generate::Generator;
use tracing_subscriber::filter::LevelFilter;

#[macro_use]
extern crate tracing;

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the compile commands
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::default();
    info!(
        template = %config.template_path().display(),
        count = config.count,
        "generating shader variants"
    );

    let generator = Generator::new(config).context("could not load shader template")?;

    let stdout = std::io::stdout();
    generator
        .run(&mut stdout.lock())
        .context("could not generate shader variants")?;

    Ok(())
}
