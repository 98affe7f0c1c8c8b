//! Router stencils: route files with a `{controllerName}` placeholder that
//! get stamped out once per resource.

use crate::error::{Result, StampError};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

mod reserved;
pub mod scaffold;

pub use reserved::Dialect;
pub use scaffold::Scaffold;

/// Token replaced by the resource name.
pub const PLACEHOLDER: &str = "{controllerName}";

const EXPRESS_ROUTER: &str = include_str!("../../templates/express_router.js.tmpl");
const AXUM_ROUTER: &str = include_str!("../../templates/axum_router.rs.tmpl");

/// Templates embedded in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateKind {
    /// Express router requiring `../controllers/<name>.js`.
    Express,
    /// axum module calling into `crate::controllers::<name>`.
    Axum,
}

impl TemplateKind {
    pub fn extension(self) -> &'static str {
        match self {
            TemplateKind::Express => "js",
            TemplateKind::Axum => "rs",
        }
    }

    fn source(self) -> &'static str {
        match self {
            TemplateKind::Express => EXPRESS_ROUTER,
            TemplateKind::Axum => AXUM_ROUTER,
        }
    }

    fn bindings(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Express => reserved::EXPRESS_BINDINGS,
            TemplateKind::Axum => reserved::AXUM_BINDINGS,
        }
    }
}

/// A resource name shaped like an identifier, so it is safe as a file name.
///
/// Whether the name is usable in a particular template is decided by
/// [`Stencil::check`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| StampError::InvalidResourceName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("name cannot be empty")),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                return Err(invalid("must start with an ASCII letter or '_'"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("only ASCII letters, digits and '_' are allowed"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceName {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stamped router file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub file_name: String,
    pub contents: String,
}

/// A router template.
#[derive(Debug, Clone)]
pub struct Stencil {
    name: String,
    source: Cow<'static, str>,
    extension: String,
    dialect: Dialect,
    bindings: &'static [&'static str],
}

impl Stencil {
    pub fn builtin(kind: TemplateKind) -> Self {
        Self {
            name: kind.to_string(),
            source: Cow::Borrowed(kind.source()),
            extension: kind.extension().to_string(),
            dialect: Dialect::for_extension(kind.extension()),
            bindings: kind.bindings(),
        }
    }

    /// Load a template from disk.
    ///
    /// Output files take the template's extension once a trailing `.tmpl` is
    /// removed, so `router.js.tmpl` produces `<name>.js`. Without one, `js` is
    /// assumed. The extension also picks the keyword list names are checked
    /// against.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| StampError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let stem = name.strip_suffix(".tmpl").unwrap_or(&name);
        let extension = Path::new(stem)
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "js".to_string());

        Self::from_source(name, source, extension)
    }

    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let source = source.into();
        if !source.contains(PLACEHOLDER) {
            return Err(StampError::MissingPlaceholder { template: name });
        }
        let extension = extension.into();
        Ok(Self {
            name,
            source: Cow::Owned(source),
            dialect: Dialect::for_extension(&extension),
            extension,
            bindings: &[],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn placeholder_count(&self) -> usize {
        self.source.matches(PLACEHOLDER).count()
    }

    /// Reject names the stamped file could not use: keywords of the output
    /// language and identifiers the template declares itself.
    pub fn check(&self, resource: &ResourceName) -> Result<()> {
        let name = resource.as_str();
        let reason = if self.dialect.keywords().contains(&name) {
            format!("is a reserved word in {:?}", self.dialect)
        } else if self.bindings.contains(&name) {
            format!("clashes with a binding in the {} template", self.name)
        } else {
            return Ok(());
        };
        Err(StampError::InvalidResourceName {
            name: name.to_string(),
            reason,
        })
    }

    /// Substitute every placeholder with `resource`.
    pub fn render(&self, resource: &ResourceName) -> Result<Rendered> {
        self.check(resource)?;
        Ok(Rendered {
            file_name: format!("{}.{}", resource, self.extension),
            contents: self.source.replace(PLACEHOLDER, resource.as_str()),
        })
    }
}

/// Where a stencil comes from: a built-in name or a template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin(TemplateKind),
    File(PathBuf),
}

impl TemplateSource {
    pub fn parse(value: &str) -> Result<Self> {
        if let Ok(kind) = TemplateKind::from_str(value) {
            return Ok(TemplateSource::Builtin(kind));
        }
        let path = Path::new(value);
        if path.extension().is_some() || path.components().count() > 1 {
            return Ok(TemplateSource::File(path.to_path_buf()));
        }
        Err(StampError::UnknownTemplate(value.to_string()))
    }

    pub fn load(&self) -> Result<Stencil> {
        match self {
            TemplateSource::Builtin(kind) => Ok(Stencil::builtin(*kind)),
            TemplateSource::File(path) => Stencil::from_file(path),
        }
    }
}

impl FromStr for TemplateSource {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
