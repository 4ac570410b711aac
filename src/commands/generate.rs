use anyhow::{Context, Result, bail};
use log::info;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::config::Config;

/// Options of the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Write to this file instead of stdout.
    pub output: Option<PathBuf>,
    /// Inject the variables into the JSON object stored in this file.
    pub merge: Option<PathBuf>,
    pub compact: bool,
}

/// Render the template variables as JSON.
#[tracing::instrument(skip(config))]
pub fn generate<R: Runtime>(config: &Config<R>, options: &GenerateOptions) -> Result<()> {
    let vars = config.variables()?;

    let mut target = match &options.merge {
        Some(path) => load_object(&config.runtime, path)?,
        None => Map::new(),
    };
    vars.inject(&mut target)?;

    let target = Value::Object(target);
    let mut json = if options.compact {
        serde_json::to_string(&target)?
    } else {
        serde_json::to_string_pretty(&target)?
    };
    json.push('\n');

    match &options.output {
        Some(path) => {
            config
                .runtime
                .write(path, json.as_bytes())
                .with_context(|| format!("Failed to write variables to {:?}", path))?;
            info!(
                "Wrote {} release entries to {:?}",
                vars.release.len(),
                path
            );
        }
        None => config.runtime.print(&json)?,
    }
    Ok(())
}

fn load_object<R: Runtime>(runtime: &R, path: &Path) -> Result<Map<String, Value>> {
    if !runtime.exists(path) {
        info!("Merge target {:?} does not exist, starting empty", path);
        return Ok(Map::new());
    }
    let content = runtime
        .read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    match serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))? {
        Value::Object(map) => Ok(map),
        _ => bail!("{:?} does not contain a JSON object", path),
    }
}
