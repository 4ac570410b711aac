use log::debug;

use super::{
    Downloads, Eclipse, EclipseInstall, Intellij, PerPlatform, ReleaseEntry, is_snapshot,
};
use crate::{
    artifact::{ArtifactServer, Buildfarm, Coordinate, Repository},
    markdown::{download_link, link, optional_link},
    platform::{Bundle, PlatformVariant},
};

const ECLIPSE_DIST: &str = "org.metaborg.spoofax.eclipse.dist";
const ECLIPSE_UPDATESITE: &str = "org.metaborg.spoofax.eclipse.updatesite";
const INTELLIJ_DIST: &str = "org.metaborg.intellij.dist";
const SUNSHINE: &str = "org.metaborg.sunshine2";
const SPT_CMD: &str = "org.metaborg.spt.cmd";
const SPOOFAX_CORE_UBER: &str = "org.metaborg.spoofax.core.uber";
const STRATEGOXT_DISTRIB: &str = "strategoxt-distrib";
const STRATEGOXT_JAR: &str = "strategoxt-jar";

/// Raw URLs of one version before links are rendered.
struct Sources {
    jre: PerPlatform<String>,
    base: PerPlatform<String>,
    repository: String,
    repository_archive: Option<String>,
    intellij_update_site: String,
    sunshine_jar: Option<String>,
    spt_testrunner_jar: Option<String>,
    spoofax_core_uber_jar: Option<String>,
    strategoxt_distrib: String,
    strategoxt_jar: String,
}

/// Builds [`ReleaseEntry`] values against a pair of download servers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseBuilder {
    artifacts: ArtifactServer,
    buildfarm: Buildfarm,
}

impl ReleaseBuilder {
    pub fn new(artifacts: ArtifactServer, buildfarm: Buildfarm) -> Self {
        Self {
            artifacts,
            buildfarm,
        }
    }

    pub fn artifacts(&self) -> &ArtifactServer {
        &self.artifacts
    }

    /// Build the entry for `version`.
    ///
    /// `download_version` is the version requested from the artifact server
    /// (`LATEST` for the development entry). Snapshot versions ignore it and
    /// point at the buildfarm instead.
    pub fn build(&self, version: &str, download_version: &str, date: Option<&str>) -> ReleaseEntry {
        let sources = if is_snapshot(version) {
            debug!("Building snapshot entry for {}", version);
            self.snapshot_sources()
        } else {
            debug!("Building release entry for {} ({})", version, download_version);
            self.release_sources(version, download_version)
        };

        ReleaseEntry {
            date: date.map(String::from),
            version: version.to_string(),
            eclipse: Eclipse {
                install: EclipseInstall {
                    jvm: with_links(sources.jre, Bundle::Jre),
                    base: with_links(sources.base, Bundle::Base),
                },
                repository_archive_link: optional_link(
                    "Eclipse update site archive",
                    sources.repository_archive.as_deref(),
                ),
                repository: sources.repository,
                repository_archive: sources.repository_archive,
            },
            intellij: Intellij {
                update_site_link: link(
                    "IntelliJ update site archive",
                    &sources.intellij_update_site,
                ),
                update_site: sources.intellij_update_site,
            },
            sunshine_jar_link: optional_link("Sunshine JAR", sources.sunshine_jar.as_deref()),
            sunshine_jar: sources.sunshine_jar,
            spt_testrunner_jar_link: optional_link(
                "SPT testrunner JAR",
                sources.spt_testrunner_jar.as_deref(),
            ),
            spt_testrunner_jar: sources.spt_testrunner_jar,
            spoofax_core_uber_jar_link: optional_link(
                "Spoofax Core Uber JAR",
                sources.spoofax_core_uber_jar.as_deref(),
            ),
            spoofax_core_uber_jar: sources.spoofax_core_uber_jar,
            spoofax_core_uber_jar_artifact: format!(
                "org.metaborg:{}:{}",
                SPOOFAX_CORE_UBER, download_version
            ),
            strategoxt_distrib_link: link("Stratego/XT distribution", &sources.strategoxt_distrib),
            strategoxt_distrib: sources.strategoxt_distrib,
            strategoxt_jar_link: link("Stratego/XT JAR", &sources.strategoxt_jar),
            strategoxt_jar: sources.strategoxt_jar,
        }
    }

    fn snapshot_sources(&self) -> Sources {
        let eclipse = |variant: PlatformVariant, bundle: Bundle| {
            self.buildfarm.download(&format!(
                "dist/spoofax/eclipse/spoofax-{}.{}",
                variant.classifier(bundle),
                variant.archive_ext()
            ))
        };

        Sources {
            jre: PerPlatform::from_fn(|v| eclipse(v, Bundle::Jre)),
            base: PerPlatform::from_fn(|v| eclipse(v, Bundle::Base)),
            repository: self.buildfarm.download("dist/spoofax/eclipse/site/"),
            repository_archive: None,
            intellij_update_site: self.buildfarm.download("dist/spoofax/intellij/plugin.zip"),
            sunshine_jar: None,
            spt_testrunner_jar: None,
            spoofax_core_uber_jar: None,
            strategoxt_distrib: self.buildfarm.download("dist/strategoxt/distrib.tar"),
            strategoxt_jar: self.buildfarm.download("dist/strategoxt/strategoxt.jar"),
        }
    }

    fn release_sources(&self, version: &str, download_version: &str) -> Sources {
        let repo = Repository::for_version(version);
        let url = |coord: Coordinate| self.artifacts.redirect(&coord.version(download_version));
        let eclipse = |variant: PlatformVariant, bundle: Bundle| {
            url(Coordinate::new(repo, ECLIPSE_DIST)
                .classifier(variant.classifier(bundle))
                .packaging(variant.archive_ext()))
        };

        Sources {
            jre: PerPlatform::from_fn(|v| eclipse(v, Bundle::Jre)),
            base: PerPlatform::from_fn(|v| eclipse(v, Bundle::Base)),
            repository: self.artifacts.unzipped_update_site(version),
            repository_archive: Some(url(Coordinate::new(repo, ECLIPSE_UPDATESITE)
                .classifier("assembly")
                .packaging("zip"))),
            intellij_update_site: url(Coordinate::new(repo, INTELLIJ_DIST).packaging("zip")),
            sunshine_jar: Some(url(Coordinate::new(repo, SUNSHINE))),
            spt_testrunner_jar: Some(url(Coordinate::new(repo, SPT_CMD))),
            spoofax_core_uber_jar: Some(url(Coordinate::new(repo, SPOOFAX_CORE_UBER))),
            strategoxt_distrib: url(Coordinate::new(repo, STRATEGOXT_DISTRIB)
                .classifier("bin")
                .packaging("tar")),
            strategoxt_jar: url(Coordinate::new(repo, STRATEGOXT_JAR)),
        }
    }
}

fn with_links(url: PerPlatform<String>, bundle: Bundle) -> Downloads {
    Downloads {
        link: PerPlatform::from_fn(|v| download_link(v.os().icon(), &v.label(bundle), url.get(v))),
        url,
    }
}
