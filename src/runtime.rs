use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// File-system access used by the commands, mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    /// Write to standard output.
    fn print(&self, text: &str) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self, contents))]
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self, text))]
    fn print(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}
