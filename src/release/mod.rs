//! Release entries: every download URL and link of one Spoofax version.

mod builder;

use serde::Serialize;

use crate::platform::{Bundle, PlatformVariant};

pub use builder::ReleaseBuilder;

/// Marker identifying continuously built, unreleased versions.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

pub fn is_snapshot(version: &str) -> bool {
    version.contains(SNAPSHOT_MARKER)
}

/// One value per platform variant, serialized under the variant keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerPlatform<T> {
    pub macos_64: T,
    pub linux_64: T,
    pub windows_64: T,
    pub windows_32: T,
}

impl<T> PerPlatform<T> {
    pub fn from_fn(mut f: impl FnMut(PlatformVariant) -> T) -> Self {
        Self {
            macos_64: f(PlatformVariant::MacosX64),
            linux_64: f(PlatformVariant::LinuxX64),
            windows_64: f(PlatformVariant::WindowsX64),
            windows_32: f(PlatformVariant::WindowsX86),
        }
    }

    pub fn get(&self, variant: PlatformVariant) -> &T {
        match variant {
            PlatformVariant::MacosX64 => &self.macos_64,
            PlatformVariant::LinuxX64 => &self.linux_64,
            PlatformVariant::WindowsX64 => &self.windows_64,
            PlatformVariant::WindowsX86 => &self.windows_32,
        }
    }
}

/// Eclipse downloads of one bundle kind, with their Markdown links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Downloads {
    pub link: PerPlatform<String>,
    #[serde(flatten)]
    pub url: PerPlatform<String>,
}

/// Eclipse installations. Downloads without a JVM sit at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EclipseInstall {
    pub jvm: Downloads,
    #[serde(flatten)]
    pub base: Downloads,
}

impl EclipseInstall {
    pub fn downloads(&self, bundle: Bundle) -> &Downloads {
        match bundle {
            Bundle::Base => &self.base,
            Bundle::Jre => &self.jvm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eclipse {
    pub install: EclipseInstall,
    pub repository: String,
    pub repository_archive: Option<String>,
    pub repository_archive_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intellij {
    pub update_site: String,
    pub update_site_link: String,
}

/// Download metadata of a single version, as seen by page templates.
///
/// Artifacts that are only published for released versions are `None`
/// (serialized as `null`) for snapshots, and so are their links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseEntry {
    pub date: Option<String>,
    pub version: String,
    pub eclipse: Eclipse,
    pub intellij: Intellij,
    pub sunshine_jar: Option<String>,
    pub sunshine_jar_link: Option<String>,
    pub spt_testrunner_jar: Option<String>,
    pub spt_testrunner_jar_link: Option<String>,
    pub spoofax_core_uber_jar: Option<String>,
    pub spoofax_core_uber_jar_link: Option<String>,
    pub spoofax_core_uber_jar_artifact: String,
    pub strategoxt_distrib: String,
    pub strategoxt_distrib_link: String,
    pub strategoxt_jar: String,
    pub strategoxt_jar_link: String,
}

impl ReleaseEntry {
    pub fn is_snapshot(&self) -> bool {
        is_snapshot(&self.version)
    }

    /// Eclipse download URL for one platform.
    pub fn download(&self, variant: PlatformVariant, bundle: Bundle) -> &str {
        self.eclipse.install.downloads(bundle).url.get(variant)
    }

    /// Markdown link of the Eclipse download for one platform.
    pub fn download_link(&self, variant: PlatformVariant, bundle: Bundle) -> &str {
        self.eclipse.install.downloads(bundle).link.get(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_snapshot() {
        assert!(is_snapshot("2.6.0-SNAPSHOT"));
        assert!(is_snapshot("SNAPSHOT"));
        assert!(!is_snapshot("2.5.16"));
        assert!(!is_snapshot("2.0.0-beta1"));
        // Case sensitive, like the artifact server.
        assert!(!is_snapshot("2.6.0-snapshot"));
    }

    #[test]
    fn test_per_platform_keys_match_variant_keys() {
        let values = PerPlatform::from_fn(|v| v.classifier_stem());
        let json = serde_json::to_value(&values).unwrap();
        for variant in PlatformVariant::ALL {
            assert_eq!(json[variant.key()], variant.classifier_stem());
            assert_eq!(*values.get(variant), variant.classifier_stem());
        }
    }

    #[test]
    fn test_eclipse_install_serialized_shape() {
        let downloads = |tag: &str| Downloads {
            link: PerPlatform::from_fn(|v| format!("{}-link-{}", tag, v)),
            url: PerPlatform::from_fn(|v| format!("{}-url-{}", tag, v)),
        };
        let install = EclipseInstall {
            jvm: downloads("jvm"),
            base: downloads("base"),
        };

        let json = serde_json::to_value(&install).unwrap();
        assert_eq!(json["jvm"]["macos_64"], "jvm-url-macos_64");
        assert_eq!(json["jvm"]["link"]["windows_32"], "jvm-link-windows_32");
        assert_eq!(json["linux_64"], "base-url-linux_64");
        assert_eq!(json["link"]["windows_64"], "base-link-windows_64");
        assert!(json.get("base").is_none());
    }
}
