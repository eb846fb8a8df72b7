use crate::Result;
use crate::decl::is_identifier;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::sync::LazyLock;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "metricgen.toml";

/// Header name used when no header is being generated
const FALLBACK_HEADER_INCLUDE: &str = "metrics.h";

static MACRO_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid macro name regex"));

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prefix for generated C type, table and sentinel names
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Preprocessor guard around the header (default is `<PREFIX>_GENERATED_H`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_guard: Option<String>,

    /// Name the source uses to include the header (default is the header's file name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_include: Option<String>,
}

fn default_prefix() -> String {
    "metric".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `metricgen.toml` in `base_dir` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading metricgen configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("no configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading metricgen configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!("loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a name would not be valid where it lands in the generated C code
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.prefix) {
            return Err(app_err!(
                "prefix must start with a lowercase letter followed by lowercase letters, digits or underscores, got '{}'",
                self.prefix
            ));
        }

        if let Some(guard) = &self.include_guard
            && !MACRO_NAME.is_match(guard)
        {
            return Err(app_err!("include_guard must be a valid C macro name, got '{guard}'"));
        }

        if let Some(include) = &self.header_include
            && (include.is_empty() || include.contains(['"', '\n', '\r']))
        {
            return Err(app_err!(
                "header_include must be a non-empty file name without quotes or line breaks, got '{include}'"
            ));
        }

        Ok(())
    }

    /// The include guard to emit.
    #[must_use]
    pub fn include_guard(&self) -> String {
        self.include_guard
            .clone()
            .unwrap_or_else(|| format!("{}_GENERATED_H", self.prefix.to_ascii_uppercase()))
    }

    /// The header name the source includes, given the header path being generated, if any.
    #[must_use]
    pub fn header_include(&self, header_path: Option<&Utf8Path>) -> String {
        self.header_include
            .clone()
            .or_else(|| header_path.and_then(Utf8Path::file_name).map(str::to_string))
            .unwrap_or_else(|| FALLBACK_HEADER_INCLUDE.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
