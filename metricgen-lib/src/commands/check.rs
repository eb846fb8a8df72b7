use super::Host;
use super::common::{CommonArgs, init_logging, load_config, read_declarations, translate};
use crate::Result;
use crate::decl::Diagnostic;
use crate::emit::reserved_names;
use crate::projection::Tables;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// What a successful check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    metrics: usize,
    labels: usize,
    identifiers: usize,
    ignored_lines: usize,
    repeated_values: usize,
}

fn check_declarations_inner<H: Host>(host: &mut H, args: &CheckArgs) -> Result<(String, Summary)> {
    let config = load_config(&args.common)?;
    let declarations = read_declarations(host, args.common.input.as_deref())?;
    let model = translate(host, &declarations, reserved_names(&config.prefix, &config.include_guard()))?;
    let tables = Tables::build(&model);

    let count = |matches: fn(&Diagnostic) -> bool| model.diagnostics().iter().filter(|d| matches(d)).count();

    let summary = Summary {
        metrics: model.metrics().len(),
        labels: tables.enumeration.marker_count(),
        identifiers: tables.enumeration.identifier_count(),
        ignored_lines: count(|d| matches!(d, Diagnostic::SyntaxUnrecognized { .. })),
        repeated_values: count(|d| matches!(d, Diagnostic::DuplicateValue { .. })),
    };

    Ok((declarations.name, summary))
}

/// Translate a declaration file without writing anything and summarize the result
///
/// # Errors
///
/// Returns an error if the declarations cannot be read or are invalid
pub fn check_declarations<H: Host>(host: &mut H, args: &CheckArgs) -> Result<()> {
    init_logging(args.common.log_level);

    match check_declarations_inner(host, args) {
        Ok((name, summary)) => {
            let _ = writeln!(host.output(), "Declarations in {name} are valid");
            let _ = writeln!(
                host.output(),
                "{} metric(s), {} label(s), {} identifier(s)",
                summary.metrics,
                summary.labels,
                summary.identifiers
            );
            if summary.ignored_lines > 0 {
                let _ = writeln!(host.output(), "{} line(s) ignored", summary.ignored_lines);
            }
            if summary.repeated_values > 0 {
                let _ = writeln!(host.output(), "{} repeated label value(s)", summary.repeated_values);
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Declaration check failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
