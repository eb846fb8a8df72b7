//! Processing logic shared between the generate and check commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::decl::Model;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, app_err};
use std::fs;
use std::io::{Read, Write};

/// Name shown for declarations read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between generate and check commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Declaration file to translate (standard input when omitted or `-`)
    #[arg(value_name = "INPUT")]
    pub input: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `metricgen.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Prefix for generated C type, table and sentinel names, overriding the configuration
    #[arg(long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// The full text of a declaration file along with the name it is reported under.
#[derive(Debug)]
pub struct Declarations {
    pub name: String,
    pub text: String,
}

/// Initialize logger based on log level
///
/// Later calls are ignored, so commands can be run more than once in a process.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Load the configuration and apply command-line overrides
pub fn load_config(args: &CommonArgs) -> Result<Config> {
    let mut config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    if let Some(prefix) = &args.prefix {
        config.prefix.clone_from(prefix);
        config.validate()?;
    }

    Ok(config)
}

/// Read the whole declaration file, or standard input when no path (or `-`) is given.
pub fn read_declarations<H: Host>(host: &mut H, input: Option<&Utf8Path>) -> Result<Declarations> {
    match input {
        None => read_stdin(host),
        Some(path) if path.as_str() == "-" => read_stdin(host),
        Some(path) => {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading declaration file '{path}'"))?;
            let name = path.file_name().unwrap_or(path.as_str()).to_string();
            log::debug!("read {} bytes from '{path}'", text.len());
            Ok(Declarations { name, text })
        }
    }
}

fn read_stdin<H: Host>(host: &mut H) -> Result<Declarations> {
    let mut text = String::new();
    let _ = host
        .input()
        .read_to_string(&mut text)
        .into_app_err("reading declarations from standard input")?;

    log::debug!("read {} bytes from standard input", text.len());
    Ok(Declarations {
        name: STDIN_NAME.to_string(),
        text,
    })
}

/// Build the model for `declarations`, reporting every non-fatal diagnostic on the error stream.
///
/// Declarations generating any of the `reserved` names are rejected.
pub fn translate<H: Host>(host: &mut H, declarations: &Declarations, reserved: Vec<String>) -> Result<Model> {
    let model = Model::parse_reserving(&declarations.text, reserved).map_err(|e| app_err!("{}: {e}", declarations.name))?;

    for diagnostic in model.diagnostics() {
        let _ = writeln!(host.error(), "warning: {}: {diagnostic}", declarations.name);
    }

    log::info!(
        "'{}': {} metric(s), {} label(s)",
        declarations.name,
        model.metrics().len(),
        model.labels().count()
    );

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_read_stdin_when_no_path() {
        let mut host = TestHost::with_input("metric gauge up\n");
        let declarations = read_declarations(&mut host, None).unwrap();
        assert_eq!(declarations.name, STDIN_NAME);
        assert_eq!(declarations.text, "metric gauge up\n");
    }

    #[test]
    fn test_read_stdin_for_dash() {
        let mut host = TestHost::with_input("metric gauge up\n");
        let declarations = read_declarations(&mut host, Some(Utf8Path::new("-"))).unwrap();
        assert_eq!(declarations.name, STDIN_NAME);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_read_file_uses_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("service.def")).unwrap();
        fs::write(&path, "metric counter hits\n").unwrap();

        let mut host = TestHost::new();
        let declarations = read_declarations(&mut host, Some(&path)).unwrap();
        assert_eq!(declarations.name, "service.def");
        assert_eq!(declarations.text, "metric counter hits\n");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_read_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("absent.def")).unwrap();

        let mut host = TestHost::new();
        let err = read_declarations(&mut host, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("absent.def"));
    }

    #[test]
    fn test_translate_reports_diagnostics() {
        let mut host = TestHost::new();
        let declarations = Declarations {
            name: "x.def".to_string(),
            text: "metric gauge up\nbogus line\n".to_string(),
        };

        let model = translate(&mut host, &declarations, Vec::new()).unwrap();
        assert_eq!(model.metrics().len(), 1);
        assert_eq!(host.error_str(), "warning: x.def: line 2: ignoring unrecognized line 'bogus line'\n");
    }

    #[test]
    fn test_translate_rejects_reserved_names() {
        let mut host = TestHost::new();
        let declarations = Declarations {
            name: "x.def".to_string(),
            text: "metric gauge metric_id_count\n".to_string(),
        };

        let err = translate(&mut host, &declarations, vec!["METRIC_ID_COUNT".to_string()]).unwrap_err();
        assert!(err.to_string().contains("x.def: line 1: generated name 'METRIC_ID_COUNT' is already in use"));
    }

    #[test]
    fn test_load_config_applies_prefix_override() {
        let args = CommonArgs {
            input: None,
            config: None,
            prefix: Some("svc".to_string()),
            log_level: LogLevel::None,
        };
        assert_eq!(load_config(&args).unwrap().prefix, "svc");

        let args = CommonArgs {
            prefix: Some("Bad".to_string()),
            ..args
        };
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_translate_error_names_input() {
        let mut host = TestHost::new();
        let declarations = Declarations {
            name: "x.def".to_string(),
            text: "label nope k v\n".to_string(),
        };

        let err = translate(&mut host, &declarations, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("x.def: line 1: label refers to undeclared metric 'nope'"));
    }
}
