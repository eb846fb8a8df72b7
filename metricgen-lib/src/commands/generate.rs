use super::Host;
use super::common::{CommonArgs, init_logging, load_config, read_declarations, translate};
use crate::Result;
use crate::emit::{Artifact, EmitOptions, generate_header, generate_source, write_artifacts};
use crate::projection::Tables;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::io::Write;

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the C header declaring the enumerations and tables to this file
    #[arg(long, value_name = "PATH", help_heading = "Output")]
    pub header: Option<Utf8PathBuf>,

    /// Write the C source defining the tables to this file
    #[arg(long, value_name = "PATH", help_heading = "Output")]
    pub source: Option<Utf8PathBuf>,
}

/// Translate a declaration file and write the requested artifacts
///
/// # Errors
///
/// Returns an error if no output is requested, if the configuration or declarations are
/// invalid, or if an output file cannot be opened or written. Nothing is written unless
/// every earlier step succeeded.
pub fn generate_artifacts<H: Host>(host: &mut H, args: &GenerateArgs) -> Result<()> {
    init_logging(args.common.log_level);

    if args.header.is_none() && args.source.is_none() {
        return Err(app_err!("no output requested; pass --header, --source, or both"));
    }

    let config = load_config(&args.common)?;
    let declarations = read_declarations(host, args.common.input.as_deref())?;

    let options = EmitOptions {
        prefix: config.prefix.clone(),
        include_guard: config.include_guard(),
        header_include: config.header_include(args.header.as_deref()),
        source_name: declarations.name.clone(),
    };

    let model = translate(host, &declarations, options.reserved_names())?;
    let tables = Tables::build(&model);

    let mut artifacts = Vec::with_capacity(2);

    if let Some(path) = &args.header {
        let mut contents = String::new();
        generate_header(&tables, &options, &mut contents)?;
        artifacts.push(Artifact {
            path: path.as_path(),
            contents,
        });
    }

    if let Some(path) = &args.source {
        let mut contents = String::new();
        generate_source(&tables, &options, &mut contents)?;
        artifacts.push(Artifact {
            path: path.as_path(),
            contents,
        });
    }

    write_artifacts(&artifacts).into_app_err("writing generated files")?;

    log::info!(
        "generated {} identifier(s) and {} label table(s) from '{}'",
        tables.enumeration.identifier_count(),
        tables.enumeration.marker_count(),
        declarations.name
    );

    for artifact in &artifacts {
        let _ = writeln!(host.output(), "Generated {}", artifact.path);
    }

    Ok(())
}
