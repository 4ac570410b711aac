use anyhow::{Context, Result};
use log::debug;

use crate::runtime::Runtime;

use super::config::Config;

/// Print the release entry stored under `label` as pretty JSON.
#[tracing::instrument(skip(config))]
pub fn show<R: Runtime>(config: &Config<R>, label: &str) -> Result<()> {
    let vars = config.variables()?;
    let entry = vars.release(label).with_context(|| {
        let known: Vec<_> = vars.release.keys().map(String::as_str).collect();
        format!(
            "Unknown release '{}'. Known releases: {}",
            label,
            known.join(", ")
        )
    })?;

    debug!("Showing release {} (snapshot: {})", label, entry.is_snapshot());
    let mut json = serde_json::to_string_pretty(entry)?;
    json.push('\n');
    config.runtime.print(&json)
}
