use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    artifact::{ArtifactServer, Buildfarm},
    release::ReleaseBuilder,
    runtime::Runtime,
    table::{Catalog, VersionTable},
    variables::Variables,
};

/// Settings shared by all commands.
pub struct Config<R: Runtime> {
    pub runtime: R,
    pub builder: ReleaseBuilder,
    pub versions: Option<PathBuf>,
}

impl<R: Runtime> Config<R> {
    pub fn new(
        runtime: R,
        artifacts_url: Option<String>,
        buildfarm_url: Option<String>,
        versions: Option<PathBuf>,
    ) -> Self {
        let artifacts = artifacts_url.map(ArtifactServer::new).unwrap_or_default();
        let buildfarm = buildfarm_url.map(Buildfarm::new).unwrap_or_default();
        debug!(
            "Using artifact server {} and buildfarm {}",
            artifacts.base_url(),
            buildfarm.base_url()
        );

        Self {
            runtime,
            builder: ReleaseBuilder::new(artifacts, buildfarm),
            versions,
        }
    }

    /// Release table and development version, from the catalog file if one
    /// was given and the built-in table otherwise.
    pub fn catalog(&self) -> Result<(VersionTable, String)> {
        let catalog = match &self.versions {
            Some(path) => {
                debug!("Loading release catalog from {:?}", path);
                Catalog::load(&self.runtime, path)?
            }
            None => Catalog::default(),
        };
        catalog.into_parts()
    }

    pub fn variables(&self) -> Result<Variables> {
        let (table, development) = self.catalog()?;
        Ok(Variables::define(&table, &development, &self.builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    #[test]
    fn test_defaults_use_builtin_catalog() {
        let config = Config::new(MockRuntime::new(), None, None, None);
        let vars = config.variables().unwrap();

        assert_eq!(vars.release("rel").unwrap().version, "2.5.16");
        assert!(
            vars.artifacts_releases
                .starts_with("https://artifacts.metaborg.org/")
        );
    }

    #[test]
    fn test_custom_servers() {
        let config = Config::new(
            MockRuntime::new(),
            Some("http://nexus.local".into()),
            Some("http://ci.local".into()),
            None,
        );
        let vars = config.variables().unwrap();

        assert_eq!(
            vars.artifacts_releases,
            "http://nexus.local/content/repositories/releases/org/metaborg/"
        );
        assert!(
            vars.release("dev")
                .unwrap()
                .eclipse
                .repository
                .starts_with("http://ci.local/")
        );
    }

    #[test_log::test]
    fn test_catalog_file() {
        let path = PathBuf::from("/docs/releases.json");
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| {
                Ok(r#"{"releases": [{"version": "9.9.9", "date": "01-01-2030"}]}"#.to_string())
            });

        let config = Config::new(runtime, None, None, Some(path));
        let vars = config.variables().unwrap();

        let labels: Vec<_> = vars.release.keys().map(String::as_str).collect();
        assert_eq!(labels, ["9.9.9", "rel", "dev"]);
        assert_eq!(vars.release("rel").unwrap().date.as_deref(), Some("01-01-2030"));
    }
}
