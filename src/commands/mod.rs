//! CLI operations over the computed template variables.

pub mod config;
mod generate;
mod list;
mod show;
mod url;

pub use config::Config;
pub use generate::{GenerateOptions, generate};
pub use list::list;
pub use show::show;
pub use url::{UrlOptions, url};
