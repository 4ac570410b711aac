use super::PlatformVariant;

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector {
    fn detect(&self) -> Option<PlatformVariant>;
}

/// Detects the variant matching the host this binary was compiled for.
pub struct HostDetector;

impl PlatformDetector for HostDetector {
    fn detect(&self) -> Option<PlatformVariant> {
        PlatformVariant::detect()
    }
}

impl PlatformVariant {
    /// Map the current host to a download variant.
    ///
    /// Apple Silicon hosts get the x64 build, which is the only macOS build
    /// published. Returns `None` for other OS/architecture pairs.
    pub fn detect() -> Option<Self> {
        from_target(std::env::consts::OS, std::env::consts::ARCH)
    }
}

fn from_target(os: &str, arch: &str) -> Option<PlatformVariant> {
    match (os, arch) {
        ("macos", "x86_64" | "aarch64") => Some(PlatformVariant::MacosX64),
        ("linux", "x86_64") => Some(PlatformVariant::LinuxX64),
        ("windows", "x86_64") => Some(PlatformVariant::WindowsX64),
        ("windows", "x86") => Some(PlatformVariant::WindowsX86),
        _ => None,
    }
}
