//! Platform model for Eclipse distribution downloads.
//!
//! Spoofax ships the Eclipse language workbench for four OS/architecture
//! combinations, each with and without an embedded JVM. This module names
//! those combinations and knows how each one is packaged.

mod detection;

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use detection::{HostDetector, PlatformDetector};

/// Operating systems shown in download tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Linux,
    Macos,
}

impl Os {
    /// Font Awesome icon shortcode rendered by the documentation theme.
    pub fn icon(self) -> &'static str {
        match self {
            Os::Windows => ":fontawesome-brands-windows:",
            Os::Linux => ":fontawesome-brands-linux:",
            Os::Macos => ":fontawesome-brands-apple:",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Os::Windows => "Windows",
            Os::Linux => "Linux",
            Os::Macos => "macOS",
        }
    }

    /// Icon followed by the OS name, e.g. `:fontawesome-brands-linux: Linux`.
    pub fn label(self) -> String {
        format!("{} {}", self.icon(), self.name())
    }
}

/// Display labels per OS, exposed to templates as `os`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsLabels {
    pub windows: String,
    pub linux: String,
    pub macos: String,
}

impl Default for OsLabels {
    fn default() -> Self {
        Self {
            windows: Os::Windows.label(),
            linux: Os::Linux.label(),
            macos: Os::Macos.label(),
        }
    }
}

/// Whether an Eclipse download embeds a JVM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bundle {
    #[default]
    Base,
    Jre,
}

/// A distributable OS/architecture combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformVariant {
    MacosX64,
    LinuxX64,
    WindowsX64,
    WindowsX86,
}

impl PlatformVariant {
    /// All variants, in the order download tables list them.
    pub const ALL: [PlatformVariant; 4] = [
        PlatformVariant::MacosX64,
        PlatformVariant::LinuxX64,
        PlatformVariant::WindowsX64,
        PlatformVariant::WindowsX86,
    ];

    pub fn os(self) -> Os {
        match self {
            PlatformVariant::MacosX64 => Os::Macos,
            PlatformVariant::LinuxX64 => Os::Linux,
            PlatformVariant::WindowsX64 | PlatformVariant::WindowsX86 => Os::Windows,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            PlatformVariant::WindowsX86 => 32,
            _ => 64,
        }
    }

    /// Key used for this variant in template variables (`macos_64`, ...).
    pub fn key(self) -> &'static str {
        match self {
            PlatformVariant::MacosX64 => "macos_64",
            PlatformVariant::LinuxX64 => "linux_64",
            PlatformVariant::WindowsX64 => "windows_64",
            PlatformVariant::WindowsX86 => "windows_32",
        }
    }

    /// Maven classifier stem of the Eclipse distribution.
    pub fn classifier_stem(self) -> &'static str {
        match self {
            PlatformVariant::MacosX64 => "macosx-x64",
            PlatformVariant::LinuxX64 => "linux-x64",
            PlatformVariant::WindowsX64 => "windows-x64",
            PlatformVariant::WindowsX86 => "windows-x86",
        }
    }

    /// Maven classifier, with the `-jre` suffix for JVM bundles.
    pub fn classifier(self, bundle: Bundle) -> String {
        match bundle {
            Bundle::Base => self.classifier_stem().to_string(),
            Bundle::Jre => format!("{}-jre", self.classifier_stem()),
        }
    }

    pub fn archive_ext(self) -> &'static str {
        match self.os() {
            Os::Macos | Os::Linux => "tar.gz",
            Os::Windows => "zip",
        }
    }

    /// Human readable link text, e.g. `Windows 32-bit with embedded JVM`.
    pub fn label(self, bundle: Bundle) -> String {
        let base = format!("{} {}-bit", self.os().name(), self.bits());
        match bundle {
            Bundle::Base => base,
            Bundle::Jre => format!("{} with embedded JVM", base),
        }
    }
}

impl fmt::Display for PlatformVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlatformVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        PlatformVariant::ALL
            .into_iter()
            .find(|v| v.key() == needle || v.classifier_stem() == needle)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown platform '{}'. Expected one of: macos_64, linux_64, windows_64, windows_32",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_labels() {
        let labels = OsLabels::default();
        assert_eq!(labels.windows, ":fontawesome-brands-windows: Windows");
        assert_eq!(labels.linux, ":fontawesome-brands-linux: Linux");
        assert_eq!(labels.macos, ":fontawesome-brands-apple: macOS");
    }

    #[test]
    fn test_classifier_with_jre() {
        assert_eq!(
            PlatformVariant::MacosX64.classifier(Bundle::Jre),
            "macosx-x64-jre"
        );
        assert_eq!(
            PlatformVariant::WindowsX86.classifier(Bundle::Base),
            "windows-x86"
        );
    }

    #[test]
    fn test_archive_ext_per_os() {
        assert_eq!(PlatformVariant::MacosX64.archive_ext(), "tar.gz");
        assert_eq!(PlatformVariant::LinuxX64.archive_ext(), "tar.gz");
        assert_eq!(PlatformVariant::WindowsX64.archive_ext(), "zip");
        assert_eq!(PlatformVariant::WindowsX86.archive_ext(), "zip");
    }

    #[test]
    fn test_labels() {
        assert_eq!(PlatformVariant::MacosX64.label(Bundle::Base), "macOS 64-bit");
        assert_eq!(
            PlatformVariant::WindowsX86.label(Bundle::Jre),
            "Windows 32-bit with embedded JVM"
        );
    }

    #[test]
    fn test_from_str_accepts_keys_and_classifiers() {
        assert_eq!(
            "linux_64".parse::<PlatformVariant>().unwrap(),
            PlatformVariant::LinuxX64
        );
        assert_eq!(
            "Windows-X86".parse::<PlatformVariant>().unwrap(),
            PlatformVariant::WindowsX86
        );
        assert!("solaris_64".parse::<PlatformVariant>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for variant in PlatformVariant::ALL {
            assert_eq!(variant.to_string().parse::<PlatformVariant>().unwrap(), variant);
        }
    }
}
