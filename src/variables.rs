//! Template variables for the documentation site.
//!
//! [`Variables::define`] computes everything page templates reference:
//! `release.<label>.*` for every published version plus the `rel` and `dev`
//! aliases, OS labels, the artifact server index and two inline markers.

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    artifact::LATEST_VERSION,
    markdown::{link, styled_icon},
    platform::OsLabels,
    release::{ReleaseBuilder, ReleaseEntry},
    table::VersionTable,
};

/// Alias of the most recent released version.
pub const LATEST_RELEASE: &str = "rel";
/// Alias of the development version.
pub const DEVELOPMENT: &str = "dev";

const WARNING_ICON: &str = ":fontawesome-solid-exclamation-triangle:";
const STOP_ICON: &str = ":fontawesome-solid-times-circle:";

/// The variable namespace handed to page templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variables {
    pub warning: String,
    pub stop: String,
    pub os: OsLabels,
    pub artifacts_releases: String,
    pub artifacts_releases_link: String,
    /// Release entries keyed by label, in insertion order.
    pub release: IndexMap<String, ReleaseEntry>,
}

impl Variables {
    /// Compute all variables for `table` and the development version.
    #[tracing::instrument(skip(table, builder))]
    pub fn define(table: &VersionTable, development_version: &str, builder: &ReleaseBuilder) -> Self {
        let artifacts_releases = builder.artifacts().releases_index();

        let mut release = IndexMap::new();
        for row in table.iter() {
            release.insert(
                row.version.clone(),
                builder.build(&row.version, &row.version, Some(row.date.as_str())),
            );
        }
        if let Some(latest) = table.latest() {
            release.insert(
                LATEST_RELEASE.to_string(),
                builder.build(&latest.version, &latest.version, Some(latest.date.as_str())),
            );
        }
        release.insert(
            DEVELOPMENT.to_string(),
            builder.build(development_version, LATEST_VERSION, None),
        );
        debug!("Defined {} release entries", release.len());

        Self {
            warning: styled_icon(WARNING_ICON, "warning"),
            stop: styled_icon(STOP_ICON, "stop"),
            os: OsLabels::default(),
            artifacts_releases_link: link("artifact server", &artifacts_releases),
            artifacts_releases,
            release,
        }
    }

    /// Write every variable into `target`, replacing keys of the same name.
    pub fn inject(&self, target: &mut Map<String, Value>) -> Result<()> {
        let value = serde_json::to_value(self).context("Failed to serialize variables")?;
        let Value::Object(vars) = value else {
            bail!("Variables did not serialize to an object");
        };
        for (key, value) in vars {
            target.insert(key, value);
        }
        Ok(())
    }

    /// Release entry by version label or alias.
    pub fn release(&self, label: &str) -> Option<&ReleaseEntry> {
        self.release.get(label)
    }
}
