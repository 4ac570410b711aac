use anyhow::Result;
use clap::Parser;
use relvars::commands::{self, Config, GenerateOptions, UrlOptions};
use relvars::platform::{Bundle, HostDetector, PlatformVariant};
use relvars::runtime::RealRuntime;
use std::path::PathBuf;

/// relvars - Spoofax release download variables
///
/// Computes download URLs and Markdown links for every Spoofax release and
/// renders them as template variables for the documentation site.
///
/// Examples:
///   relvars generate --output docs/release-vars.json
///   relvars url rel --platform linux_64 --jre
#[derive(Parser, Debug)]
#[command(author, version = env!("RELVARS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Artifact server base URL (defaults to https://artifacts.metaborg.org)
    #[arg(
        long = "artifacts-url",
        env = "RELVARS_ARTIFACTS_URL",
        value_name = "URL",
        global = true
    )]
    pub artifacts_url: Option<String>,

    /// Buildfarm base URL (defaults to https://buildfarm.metaborg.org)
    #[arg(
        long = "buildfarm-url",
        env = "RELVARS_BUILDFARM_URL",
        value_name = "URL",
        global = true
    )]
    pub buildfarm_url: Option<String>,

    /// JSON release catalog replacing the built-in release table
    #[arg(
        long = "versions",
        env = "RELVARS_VERSIONS",
        value_name = "FILE",
        global = true
    )]
    pub versions: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print all template variables as JSON
    Generate(GenerateArgs),

    /// Show the variables of a single release
    Show(ShowArgs),

    /// List released versions and their dates
    List,

    /// Print the Eclipse download URL of a release
    Url(UrlArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Write to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Merge the variables into the JSON object in this file
    #[arg(long, value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Version label, `rel` or `dev`
    #[arg(value_name = "LABEL")]
    pub label: String,
}

#[derive(clap::Args, Debug)]
pub struct UrlArgs {
    /// Version label, `rel` or `dev`
    #[arg(value_name = "LABEL", default_value = "rel")]
    pub label: String,

    /// Target platform: macos_64, linux_64, windows_64 or windows_32 (defaults to this host)
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<PlatformVariant>,

    /// Download the bundle with an embedded JVM
    #[arg(long)]
    pub jre: bool,

    /// Print a Markdown link instead of the URL
    #[arg(long)]
    pub markdown: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(RealRuntime, cli.artifacts_url, cli.buildfarm_url, cli.versions);

    match cli.command {
        Commands::Generate(args) => commands::generate(
            &config,
            &GenerateOptions {
                output: args.output,
                merge: args.merge,
                compact: args.compact,
            },
        )?,
        Commands::Show(args) => commands::show(&config, &args.label)?,
        Commands::List => commands::list(&config)?,
        Commands::Url(args) => commands::url(
            &config,
            &HostDetector,
            &UrlOptions {
                label: args.label,
                platform: args.platform,
                bundle: if args.jre { Bundle::Jre } else { Bundle::Base },
                markdown: args.markdown,
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_generate_parsing() {
        let cli = Cli::try_parse_from(["relvars", "generate", "-o", "vars.json"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.output, Some(PathBuf::from("vars.json")));
                assert!(!args.compact);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_url_defaults() {
        let cli = Cli::try_parse_from(["relvars", "url"]).unwrap();
        match cli.command {
            Commands::Url(args) => {
                assert_eq!(args.label, "rel");
                assert_eq!(args.platform, None);
                assert!(!args.jre);
            }
            _ => panic!("Expected Url command"),
        }
    }

    #[test]
    fn test_cli_url_platform_parsing() {
        let cli =
            Cli::try_parse_from(["relvars", "url", "2.5.15", "--platform", "windows_32", "--jre"])
                .unwrap();
        match cli.command {
            Commands::Url(args) => {
                assert_eq!(args.label, "2.5.15");
                assert_eq!(args.platform, Some(PlatformVariant::WindowsX86));
                assert!(args.jre);
            }
            _ => panic!("Expected Url command"),
        }
    }

    #[test]
    fn test_cli_invalid_platform_fails() {
        let result = Cli::try_parse_from(["relvars", "url", "--platform", "beos"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_server_parsing() {
        let cli = Cli::try_parse_from([
            "relvars",
            "list",
            "--artifacts-url",
            "http://nexus.local",
        ])
        .unwrap();
        assert_eq!(cli.artifacts_url.as_deref(), Some("http://nexus.local"));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["relvars"]);
        assert!(result.is_err());
    }
}
