use anyhow::Context;
use crudstamp::{ConfigService, ResourceName, Scaffold, StampConfig, TemplateSource};
use std::io::Write;
use std::path::PathBuf;

pub struct GenerateOptions {
    pub names: Vec<String>,
    pub template: Option<String>,
    pub out: Option<PathBuf>,
    pub force: bool,
    pub stdout: bool,
}

/// Stamp one router per name. Every name is validated before anything is
/// written.
///
/// Settings given as flags are never read from `config`, so a broken
/// environment value only matters when its flag is absent.
pub fn run(options: &GenerateOptions, config: &ConfigService, out: &mut impl Write) -> anyhow::Result<()> {
    let names = options
        .names
        .iter()
        .map(|name| ResourceName::new(name.as_str()))
        .collect::<crudstamp::Result<Vec<_>>>()?;

    let source = match &options.template {
        Some(value) => TemplateSource::parse(value)?,
        None => StampConfig::template(config)?,
    };
    let stencil = source.load()?;
    tracing::debug!(
        template = stencil.name(),
        placeholders = stencil.placeholder_count(),
        "Loaded stencil"
    );

    if options.stdout {
        for name in &names {
            stencil.check(name)?;
        }
        for name in &names {
            let rendered = stencil.render(name)?;
            if names.len() > 1 {
                writeln!(out, "// {}", rendered.file_name)?;
            }
            write!(out, "{}", rendered.contents)?;
        }
        return Ok(());
    }

    let dir = match &options.out {
        Some(dir) => dir.clone(),
        None => StampConfig::routes_dir(config),
    };
    let scaffold = Scaffold::new(&dir).force(options.force);
    let written = scaffold
        .write_all(&stencil, &names)
        .with_context(|| format!("failed to stamp routers into {}", dir.display()))?;

    for path in &written {
        writeln!(out, "Created {}", path.display())?;
    }
    Ok(())
}
