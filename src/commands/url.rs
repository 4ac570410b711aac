use anyhow::{Context, Result};
use log::debug;

use crate::{
    platform::{Bundle, PlatformDetector, PlatformVariant},
    runtime::Runtime,
};

use super::config::Config;

/// Options of the `url` command.
#[derive(Debug, Clone)]
pub struct UrlOptions {
    pub label: String,
    /// Target platform; detected from the host when absent.
    pub platform: Option<PlatformVariant>,
    pub bundle: Bundle,
    /// Print the Markdown link instead of the bare URL.
    pub markdown: bool,
}

/// Print the Eclipse download of one release for one platform.
#[tracing::instrument(skip(config, detector))]
pub fn url<R: Runtime, D: PlatformDetector>(
    config: &Config<R>,
    detector: &D,
    options: &UrlOptions,
) -> Result<()> {
    let variant = match options.platform {
        Some(variant) => variant,
        None => detector.detect().context(
            "Could not detect a supported platform for this host; pass --platform explicitly",
        )?,
    };
    debug!("Resolving {} download for {}", variant, options.label);

    let vars = config.variables()?;
    let entry = vars
        .release(&options.label)
        .with_context(|| format!("Unknown release '{}'", options.label))?;

    let text = if options.markdown {
        entry.download_link(variant, options.bundle)
    } else {
        entry.download(variant, options.bundle)
    };
    config.runtime.print(&format!("{}\n", text))
}
