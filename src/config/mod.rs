pub mod toml_config;

pub use toml_config::ToolConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::ToolConfig;
    use crate::domain::ports::RowPolicy;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fileio")]
    #[command(about = "Convert CSV files to JSON and append timestamped log lines")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<PathBuf>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit diagnostics as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Convert a CSV file into a JSON array of objects
        Convert {
            source: PathBuf,
            destination: PathBuf,

            #[arg(long, value_enum)]
            row_policy: Option<RowPolicy>,

            #[arg(long, help = "Write single-line JSON")]
            compact: bool,

            #[arg(long)]
            indent: Option<usize>,
        },
        /// Append a timestamped message to the log file
        Log {
            message: String,

            #[arg(long)]
            log_path: Option<String>,

            #[arg(long, help = "Create missing parent directories")]
            create_dirs: bool,
        },
        /// Write the sample product table as CSV
        Seed { path: PathBuf },
        /// Print every entry of the log file
        ShowLog {
            #[arg(long)]
            log_path: Option<String>,
        },
    }

    impl CliConfig {
        /// Defaults, then the TOML file, then command-line flags.
        pub fn resolve(&self) -> Result<ToolConfig> {
            let mut config = ToolConfig::load(self.config.as_deref())?;

            match &self.command {
                Command::Convert {
                    row_policy,
                    compact,
                    indent,
                    ..
                } => {
                    if let Some(policy) = row_policy {
                        config.converter.row_policy = *policy;
                    }
                    if let Some(indent) = indent {
                        config.converter.indent = *indent;
                        config.converter.compact = false;
                    }
                    if *compact {
                        config.converter.compact = true;
                    }
                }
                Command::Log {
                    log_path,
                    create_dirs,
                    ..
                } => {
                    if let Some(path) = log_path {
                        config.log.path = path.clone();
                    }
                    if *create_dirs {
                        config.log.create_parent_dirs = true;
                    }
                }
                Command::ShowLog { log_path } => {
                    if let Some(path) = log_path {
                        config.log.path = path.clone();
                    }
                }
                Command::Seed { .. } => {}
            }

            config.validate()?;
            Ok(config)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::ports::ConfigProvider;
        use std::path::Path;

        #[test]
        fn test_convert_flags_override_defaults() {
            let cli = CliConfig::parse_from([
                "fileio",
                "convert",
                "in.csv",
                "out.json",
                "--row-policy",
                "truncate",
                "--compact",
            ]);
            let config = cli.resolve().unwrap();
            assert_eq!(config.row_policy(), RowPolicy::Truncate);
            assert_eq!(config.json_indent(), None);
        }

        #[test]
        fn test_log_path_flag() {
            let cli = CliConfig::parse_from([
                "fileio",
                "log",
                "hello",
                "--log-path",
                "logs/x.log",
                "--create-dirs",
                "-v",
            ]);
            assert!(cli.verbose);
            let config = cli.resolve().unwrap();
            assert_eq!(config.log_path(), Path::new("logs/x.log"));
            assert!(config.create_parent_dirs());
        }

        #[test]
        fn test_invalid_override_fails_validation() {
            let cli = CliConfig::parse_from(["fileio", "log", "hi", "--log-path", ""]);
            assert!(cli.resolve().is_err());
        }
    }
}
