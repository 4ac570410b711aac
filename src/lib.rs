pub mod artifact;
pub mod commands;
pub mod markdown;
pub mod platform;
pub mod release;
pub mod runtime;
pub mod table;
pub mod variables;

pub use release::{ReleaseBuilder, ReleaseEntry};
pub use table::{Catalog, DEVELOPMENT_VERSION, VersionTable};
pub use variables::Variables;

/// Variables for the built-in release table and development version.
pub fn define_variables() -> Variables {
    Variables::define(
        &VersionTable::builtin(),
        DEVELOPMENT_VERSION,
        &ReleaseBuilder::default(),
    )
}
