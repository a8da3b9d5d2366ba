use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::Commands;

/// Top-level CLI parser for the `pulse` binary.
#[derive(Debug, Parser)]
#[command(name = "pulse", version, about = "ConceptPulse - learning functions server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./pulse.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pulse", "serve", "--port", "9000", "--memory", "--verbose", "--config", "dev.toml",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("dev.toml")));
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, Some(9000));
        assert!(args.store.in_memory());
    }

    #[test]
    fn invoke_takes_inline_data() {
        let cli = Cli::try_parse_from([
            "pulse",
            "invoke",
            "generate-questions",
            "--data",
            r#"{"topicId":"t1"}"#,
            "--seed",
            "seed.json",
        ])
        .expect("cli should parse");
        let Commands::Invoke(args) = cli.command else {
            panic!("expected invoke");
        };
        assert_eq!(args.function, "generate-questions");
        assert_eq!(args.data.as_deref(), Some(r#"{"topicId":"t1"}"#));
        assert!(args.store.in_memory());
    }

    #[test]
    fn data_and_file_conflict() {
        let result = Cli::try_parse_from([
            "pulse", "invoke", "process-ocr", "--data", "{}", "--file", "body.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pulse", "--quiet", "--verbose", "config"]).is_err());
    }
}
