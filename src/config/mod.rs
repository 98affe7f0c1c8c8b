use crate::error::{Result, StampError};
use crate::stencil::TemplateSource;
use dashmap::DashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const ROUTES_DIR: &str = "CRUDSTAMP_ROUTES_DIR";
pub const TEMPLATE: &str = "CRUDSTAMP_TEMPLATE";

/// Configuration service
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot of the process environment.
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse `key` if it is set.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>().map_err(|e| StampError::Config {
                    key: key.to_string(),
                    message: format!("{:?}: {}", raw, e),
                })
            })
            .transpose()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Typed settings shared by the CLI and servers.
#[derive(Debug, Clone, PartialEq)]
pub struct StampConfig {
    pub host: String,
    pub port: u16,
    pub routes_dir: PathBuf,
    pub template: TemplateSource,
}

impl StampConfig {
    pub fn load(config: &ConfigService) -> Result<Self> {
        Ok(Self {
            host: config.get_or(HOST, "0.0.0.0"),
            port: Self::port(config)?,
            routes_dir: Self::routes_dir(config),
            template: Self::template(config)?,
        })
    }

    pub fn port(config: &ConfigService) -> Result<u16> {
        Ok(config.get_parsed(PORT)?.unwrap_or(3000))
    }

    pub fn routes_dir(config: &ConfigService) -> PathBuf {
        PathBuf::from(config.get_or(ROUTES_DIR, "routes"))
    }

    pub fn template(config: &ConfigService) -> Result<TemplateSource> {
        match config.get(TEMPLATE) {
            Some(value) => TemplateSource::parse(&value).map_err(|e| StampError::Config {
                key: TEMPLATE.to_string(),
                message: e.to_string(),
            }),
            None => Ok(TemplateSource::Builtin(crate::stencil::TemplateKind::Express)),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::load(&ConfigService::new())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stencil::TemplateKind;

    #[test]
    fn test_defaults() {
        let config = StampConfig::load(&ConfigService::default()).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.routes_dir, PathBuf::from("routes"));
        assert_eq!(config.template, TemplateSource::Builtin(TemplateKind::Express));
    }

    #[test]
    fn test_overrides() {
        let service = ConfigService::default();
        service.set(HOST, "127.0.0.1");
        service.set(PORT, "8080");
        service.set(ROUTES_DIR, "src/routes");
        service.set(TEMPLATE, "axum");

        let config = StampConfig::load(&service).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.routes_dir, PathBuf::from("src/routes"));
        assert_eq!(config.template, TemplateSource::Builtin(TemplateKind::Axum));
    }

    #[test]
    fn test_bad_port_is_reported() {
        let service = ConfigService::default();
        service.set(PORT, "eighty");

        match StampConfig::load(&service) {
            Err(StampError::Config { key, .. }) => assert_eq!(key, PORT),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_template_is_reported() {
        let service = ConfigService::default();
        service.set(TEMPLATE, "koa");

        assert!(matches!(
            StampConfig::load(&service),
            Err(StampError::Config { .. })
        ));
    }

    #[test]
    fn test_fields_resolve_independently() {
        let service = ConfigService::default();
        service.set(PORT, "eighty");
        service.set(ROUTES_DIR, "web/routes");

        assert_eq!(StampConfig::routes_dir(&service), PathBuf::from("web/routes"));
        assert_eq!(
            StampConfig::template(&service).unwrap(),
            TemplateSource::Builtin(TemplateKind::Express)
        );
        assert!(StampConfig::port(&service).is_err());
    }

    #[test]
    fn test_new_reads_environment() {
        let service = ConfigService::new();
        if let Ok(path) = env::var("PATH") {
            assert_eq!(service.get("PATH"), Some(path));
        }
    }
}
