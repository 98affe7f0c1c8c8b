use super::{ResourceName, Stencil};
use crate::error::{Result, StampError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Writes stamped router files into a routes directory.
#[derive(Debug, Clone)]
pub struct Scaffold {
    out_dir: PathBuf,
    force: bool,
}

impl Scaffold {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            force: false,
        }
    }

    /// Overwrite files that already exist.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Render `stencil` for `resource` and write it to `<out_dir>/<file_name>`.
    pub fn write(&self, stencil: &Stencil, resource: &ResourceName) -> Result<PathBuf> {
        let rendered = stencil.render(resource)?;
        let dest = self.out_dir.join(&rendered.file_name);

        fs::create_dir_all(&self.out_dir).map_err(|e| StampError::io(&self.out_dir, e))?;
        if self.force {
            fs::write(&dest, &rendered.contents).map_err(|e| StampError::io(&dest, e))?;
        } else {
            // create_new fails on anything already at `dest`, dangling symlinks included
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&dest) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    return Err(StampError::TargetExists { path: dest });
                }
                Err(e) => return Err(StampError::io(&dest, e)),
            };
            file.write_all(rendered.contents.as_bytes())
                .map_err(|e| StampError::io(&dest, e))?;
        }

        tracing::info!(
            resource = %resource,
            template = stencil.name(),
            path = %dest.display(),
            "Stamped router"
        );
        Ok(dest)
    }

    /// Stamp every resource in order, stopping at the first failure.
    ///
    /// Every name is checked against the stencil before the first file is
    /// written.
    pub fn write_all(&self, stencil: &Stencil, resources: &[ResourceName]) -> Result<Vec<PathBuf>> {
        for resource in resources {
            stencil.check(resource)?;
        }
        resources
            .iter()
            .map(|resource| self.write(stencil, resource))
            .collect()
    }
}
