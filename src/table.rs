//! Published Spoofax versions and their release dates.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::runtime::Runtime;

/// Version currently under development on the buildfarm.
pub const DEVELOPMENT_VERSION: &str = "2.6.0-SNAPSHOT";

const BUILTIN_RELEASES: &[(&str, &str)] = &[
    ("2.5.16", "04-06-2021"),
    ("2.5.15", "11-05-2021"),
    ("2.5.14", "16-12-2020"),
    ("2.5.13", "20-11-2020"),
    ("2.5.12", "08-10-2020"),
    ("2.5.11", "17-07-2020"),
    ("2.5.10", "07-07-2020"),
    ("2.5.9", "08-05-2020"),
    ("2.5.8", "28-04-2020"),
    ("2.5.7", "26-06-2019"),
    ("2.5.6", "24-05-2019"),
    ("2.5.5", "23-05-2019"),
    ("2.5.4", "08-05-2019"),
    ("2.5.3", "02-05-2019"),
    ("2.5.2", "12-03-2019"),
    ("2.5.1", "02-10-2018"),
    ("2.5.0", "11-09-2018"),
    ("2.4.1", "29-01-2018"),
    ("2.4.0", "09-01-2018"),
    ("2.3.0", "29-09-2017"),
    ("2.2.1", "04-05-2017"),
    ("2.2.0", "18-04-2017"),
    ("2.1.0", "10-01-2017"),
    ("2.0.0", "08-07-2016"),
    ("2.0.0-beta1", "07-04-2016"),
    ("1.5.0", "18-12-2015"),
    ("1.4.0", "06-03-2015"),
    ("1.3.1", "09-12-2014"),
    ("1.3.0", "12-11-2014"),
    ("1.2.0", "13-08-2014"),
    ("1.1.0", "25-03-2013"),
    ("1.0.2", "15-02-2012"),
    ("1.0.0", "28-12-2011"),
];

/// A released version and the day it was published (`DD-MM-YYYY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub version: String,
    pub date: String,
}

/// Released versions, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionTable {
    rows: Vec<ReleaseDate>,
}

impl VersionTable {
    pub fn builtin() -> Self {
        Self {
            rows: BUILTIN_RELEASES
                .iter()
                .map(|(version, date)| ReleaseDate {
                    version: version.to_string(),
                    date: date.to_string(),
                })
                .collect(),
        }
    }

    /// Build a table from rows given newest first.
    ///
    /// Fails when the same version appears twice.
    pub fn from_rows(rows: Vec<ReleaseDate>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for row in &rows {
                if !seen.insert(row.version.as_str()) {
                    bail!("Duplicate version '{}' in release table", row.version);
                }
            }
        }
        Ok(Self { rows })
    }

    /// The most recent release.
    pub fn latest(&self) -> Option<&ReleaseDate> {
        self.rows.first()
    }

    pub fn get(&self, version: &str) -> Option<&ReleaseDate> {
        self.rows.iter().find(|r| r.version == version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReleaseDate> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Release table plus development version, as stored in a catalog file.
///
/// ```json
/// {
///   "development": "2.6.0-SNAPSHOT",
///   "releases": [{ "version": "2.5.16", "date": "04-06-2021" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_development")]
    pub development: String,
    #[serde(default)]
    pub releases: Vec<ReleaseDate>,
}

fn default_development() -> String {
    DEVELOPMENT_VERSION.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            development: default_development(),
            releases: VersionTable::builtin().rows,
        }
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read release catalog {:?}", path))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse release catalog {:?}", path))?;
        Ok(catalog)
    }

    /// Split into a validated table and the development version.
    pub fn into_parts(self) -> Result<(VersionTable, String)> {
        Ok((VersionTable::from_rows(self.releases)?, self.development))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_table_order() {
        let table = VersionTable::builtin();
        assert_eq!(table.len(), 33);
        assert_eq!(table.latest().unwrap().version, "2.5.16");
        assert_eq!(table.latest().unwrap().date, "04-06-2021");
        assert_eq!(table.iter().last().unwrap().version, "1.0.0");
    }

    #[test]
    fn test_builtin_table_has_no_snapshots() {
        assert!(
            VersionTable::builtin()
                .iter()
                .all(|r| !crate::release::is_snapshot(&r.version))
        );
    }

    #[test]
    fn test_get() {
        let table = VersionTable::builtin();
        assert_eq!(table.get("2.0.0-beta1").unwrap().date, "07-04-2016");
        assert!(table.get("3.0.0").is_none());
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let row = ReleaseDate {
            version: "1.0.0".into(),
            date: "01-01-2020".into(),
        };
        let err = VersionTable::from_rows(vec![row.clone(), row]).unwrap_err();
        assert!(err.to_string().contains("Duplicate version '1.0.0'"));
    }

    #[test]
    fn test_empty_table() {
        let table = VersionTable::from_rows(vec![]).unwrap();
        assert!(table.is_empty());
        assert!(table.latest().is_none());
    }

    #[test]
    fn test_catalog_load_preserves_order() {
        let path = PathBuf::from("/docs/releases.json");
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| {
                Ok(r#"{
                    "development": "3.0.0-SNAPSHOT",
                    "releases": [
                        { "version": "2.0.0", "date": "02-02-2022" },
                        { "version": "10.0.0", "date": "01-01-2021" }
                    ]
                }"#
                .to_string())
            });

        let catalog = Catalog::load(&runtime, &path).unwrap();
        let (table, development) = catalog.into_parts().unwrap();

        assert_eq!(development, "3.0.0-SNAPSHOT");
        let versions: Vec<_> = table.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, ["2.0.0", "10.0.0"]);
    }

    #[test]
    fn test_catalog_defaults_development_version() {
        let catalog: Catalog = serde_json::from_str(r#"{ "releases": [] }"#).unwrap();
        assert_eq!(catalog.development, DEVELOPMENT_VERSION);
    }

    #[test]
    fn test_catalog_load_invalid_json() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("{ not json".to_string()));

        let err = Catalog::load(&runtime, Path::new("/bad.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to parse release catalog"));
    }

    #[test]
    fn test_default_catalog_is_builtin() {
        let (table, development) = Catalog::default().into_parts().unwrap();
        assert_eq!(table, VersionTable::builtin());
        assert_eq!(development, DEVELOPMENT_VERSION);
    }
}
