//! Command dispatch logic for metricgen

use super::{CheckArgs, GenerateArgs, InitArgs, check_declarations, generate_artifacts, init_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metricgen", version, author, long_about = None)]
#[command(about = "Generate C metric identifiers and lookup tables from a declaration file")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: MetricgenSubcommand,
}

#[derive(Subcommand, Debug)]
enum MetricgenSubcommand {
    /// Translate a declaration file into a C header and source
    Generate(Box<GenerateArgs>),
    /// Validate a declaration file without writing anything
    Check(CheckArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        MetricgenSubcommand::Generate(generate_args) => generate_artifacts(host, generate_args),
        MetricgenSubcommand::Check(check_args) => check_declarations(host, check_args),
        MetricgenSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "metricgen",
            "generate",
            "metrics.def",
            "--header",
            "out/metrics.h",
            "--prefix",
            "app",
        ])
        .unwrap();

        let MetricgenSubcommand::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.common.input.as_deref().map(camino::Utf8Path::as_str), Some("metrics.def"));
        assert_eq!(args.header.as_deref().map(camino::Utf8Path::as_str), Some("out/metrics.h"));
        assert!(args.source.is_none());
        assert_eq!(args.common.prefix.as_deref(), Some("app"));
    }

    #[test]
    fn test_parse_check_without_input() {
        let cli = Cli::try_parse_from(["metricgen", "check"]).unwrap();
        let MetricgenSubcommand::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.common.input.is_none());
    }
}
