use anyhow::Result;
use log::debug;

use crate::{
    runtime::Runtime,
    variables::{DEVELOPMENT, LATEST_RELEASE},
};

use super::config::Config;

/// List released versions with their dates, followed by the aliases.
#[tracing::instrument(skip(config))]
pub fn list<R: Runtime>(config: &Config<R>) -> Result<()> {
    let (table, development) = config.catalog()?;
    debug!("Found {} release(s)", table.len());

    let mut out = String::new();
    for row in table.iter() {
        out.push_str(&format!("{} {}\n", row.version, row.date));
    }
    if let Some(latest) = table.latest() {
        out.push_str(&format!("{} -> {}\n", LATEST_RELEASE, latest.version));
    }
    out.push_str(&format!("{} -> {}\n", DEVELOPMENT, development));

    config.runtime.print(&out)
}
