//! Schema reading phase.

use eyre::Result;
use pbgen_schema::{Directive, SchemaInfo};
use tracing::{info, warn};

use crate::pipeline::{Diagnostic, GenerationContext, Phase, Severity};

/// Code of the diagnostic emitted for each directive the schema lacks.
pub const MISSING_DIRECTIVE: &str = "pbgen::missing_directive";

/// Reads the schema and extracts its `output` and `provider` directives.
///
/// A missing schema is expected on a fresh project and reported as info;
/// any other read failure is a warning. Either way the run continues with
/// no schema facts.
pub struct ReadSchemaPhase;

impl ReadSchemaPhase {
    pub const NAME: &'static str = "read-schema";
}

impl Phase for ReadSchemaPhase {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Read the Prisma schema and extract its directives"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let path = ctx.inputs.schema.clone();
        let location = path.display().to_string();

        let info = match SchemaInfo::load(&path) {
            Ok(info) => info,
            Err(err) => {
                let severity = if err.is_not_found() {
                    info!(path = %location, "schema not found");
                    Severity::Info
                } else {
                    warn!(path = %location, error = %err, "failed to read schema");
                    Severity::Warning
                };
                ctx.add_diagnostic(
                    Diagnostic::from_error(severity, Self::NAME, err.as_ref()).at(location),
                );
                return Ok(());
            }
        };

        if let Some(output) = &info.output_path {
            info!(output = %output.display(), "found client output path");
        }
        if let Some(provider) = &info.provider {
            info!(provider = %provider, "found datasource provider");
        }

        for directive in info.missing_directives() {
            warn!(%directive, "schema directive missing");
            ctx.add_diagnostic(
                Diagnostic::warning(
                    Self::NAME,
                    format!(
                        "no `{}` found in the `{}` block",
                        directive,
                        directive.block()
                    ),
                )
                .with_code(MISSING_DIRECTIVE)
                .with_help(match directive {
                    Directive::Output => "the client will be imported from @prisma/client",
                    Directive::Provider => "the client will be created without a driver adapter",
                })
                .at(location.clone()),
            );
        }

        ctx.schema = Some(info);
        Ok(())
    }
}
