//! Download URL builders.
//!
//! Released artifacts are served by a Nexus artifact server through its Maven
//! redirect endpoint. Snapshot artifacts come straight from the output of the
//! last successful buildfarm job.

use std::fmt;

pub const DEFAULT_ARTIFACTS_URL: &str = "https://artifacts.metaborg.org";
pub const DEFAULT_BUILDFARM_URL: &str = "https://buildfarm.metaborg.org";

pub const DEFAULT_GROUP: &str = "org.metaborg";
pub const DEFAULT_PACKAGING: &str = "jar";
pub const LATEST_VERSION: &str = "LATEST";

/// Maven repository on the artifact server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repository {
    Releases,
    Snapshots,
}

impl Repository {
    pub fn for_version(version: &str) -> Self {
        if crate::release::is_snapshot(version) {
            Repository::Snapshots
        } else {
            Repository::Releases
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Repository::Releases => "releases",
            Repository::Snapshots => "snapshots",
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maven coordinates of a single downloadable file.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub repository: Repository,
    pub group: String,
    pub artifact: String,
    pub classifier: Option<String>,
    pub packaging: String,
    pub version: String,
}

impl Coordinate {
    /// A `jar` of the latest version in the `org.metaborg` group.
    pub fn new(repository: Repository, artifact: impl Into<String>) -> Self {
        Self {
            repository,
            group: DEFAULT_GROUP.to_string(),
            artifact: artifact.into(),
            classifier: None,
            packaging: DEFAULT_PACKAGING.to_string(),
            version: LATEST_VERSION.to_string(),
        }
    }

    pub fn classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// URL builder for the artifact server.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactServer {
    base_url: String,
}

impl Default for ArtifactServer {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_URL)
    }
}

impl ArtifactServer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Redirect endpoint resolving `coord` to the stored file.
    pub fn redirect(&self, coord: &Coordinate) -> String {
        let classifier = coord
            .classifier
            .as_deref()
            .map(|c| format!("&c={}", c))
            .unwrap_or_default();
        format!(
            "{}/service/local/artifact/maven/redirect?r={}&g={}&a={}{}&p={}&v={}",
            self.base_url,
            coord.repository,
            coord.group,
            coord.artifact,
            classifier,
            coord.packaging,
            coord.version
        )
    }

    /// Browsable directory of all released `org.metaborg` artifacts.
    pub fn releases_index(&self) -> String {
        format!(
            "{}/content/repositories/releases/org/metaborg/",
            self.base_url
        )
    }

    /// Unpacked Eclipse update site of a released version.
    pub fn unzipped_update_site(&self, version: &str) -> String {
        format!(
            "{base}/content/unzip/releases-unzipped/org/metaborg/org.metaborg.spoofax.eclipse.updatesite/{v}/org.metaborg.spoofax.eclipse.updatesite-{v}-assembly.zip-unzip/",
            base = self.base_url,
            v = version
        )
    }
}

/// URL builder for artifacts of the last successful `spoofax-releng` build.
#[derive(Debug, Clone, PartialEq)]
pub struct Buildfarm {
    base_url: String,
}

impl Default for Buildfarm {
    fn default() -> Self {
        Self::new(DEFAULT_BUILDFARM_URL)
    }
}

impl Buildfarm {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn download(&self, path: &str) -> String {
        format!(
            "{}/job/metaborg/job/spoofax-releng/job/master/lastSuccessfulBuild/artifact/{}",
            self.base_url, path
        )
    }
}
