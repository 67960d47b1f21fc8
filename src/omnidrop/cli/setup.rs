use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "omnidrop", bin_name = "omnidrop", version = get_version())]
#[command(about = "Convert Omnivore JSON exports into a Raindrop-importable bookmark file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (default: ./.omnidrop, then the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert export files (or directories of them) into one bookmark file
    #[command(alias = "c")]
    Convert {
        /// Export files or directories to scan (default: current directory)
        #[arg(num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Output file (default: config output-file, "Raindrop_import.html")
        #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the bookmark document instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Print a data: URI download link instead of writing a file
        #[arg(long, conflicts_with_all = ["stdout", "output"])]
        link: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (output-file, input-extensions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_convert_with_paths_and_output() {
        let cli = Cli::try_parse_from(["omnidrop", "convert", "a.json", "dir", "-o", "out.html"])
            .unwrap();
        match cli.command {
            Commands::Convert {
                paths,
                output,
                stdout,
                link,
            } => {
                assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("dir")]);
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(!stdout);
                assert!(!link);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn convert_defaults_to_no_paths() {
        let cli = Cli::try_parse_from(["omnidrop", "c"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert { ref paths, .. } if paths.is_empty()));
    }

    #[test]
    fn verbose_counts_and_conflicts_with_quiet() {
        let cli = Cli::try_parse_from(["omnidrop", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["omnidrop", "-v", "-q", "config"]).is_err());
    }

    #[test]
    fn link_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["omnidrop", "convert", "--link", "--stdout"]).is_err());
    }
}
