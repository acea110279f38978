//! Adapter resolution phase.

use eyre::Result;
use tracing::{debug, info, warn};

use crate::{
    adapters::AdapterResolver,
    pipeline::{Diagnostic, GenerationContext, Phase, Severity},
};

/// Maps the datasource provider to a driver adapter descriptor.
///
/// An unknown provider is recoverable: the run continues without adapter
/// wiring and a warning is recorded.
pub struct ResolveAdapterPhase {
    resolver: Box<dyn AdapterResolver + Send + Sync>,
}

impl ResolveAdapterPhase {
    pub const NAME: &'static str = "resolve-adapter";

    pub fn new(resolver: impl AdapterResolver + Send + Sync + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }
}

impl Phase for ResolveAdapterPhase {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Resolve the datasource provider to a driver adapter"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let Some(provider) = ctx.provider().map(str::to_string) else {
            debug!("no datasource provider, skipping adapter resolution");
            return Ok(());
        };

        match self.resolver.resolve(&provider) {
            Ok(descriptor) => {
                info!(
                    provider = %provider,
                    adapter = %descriptor.adapter_symbol,
                    package = %descriptor.required_dependency,
                    "resolved driver adapter"
                );
                ctx.adapter = Some(descriptor);
            }
            Err(err) => {
                warn!(provider = %provider, "no driver adapter for provider");
                ctx.add_diagnostic(Diagnostic::from_error(Severity::Warning, Self::NAME, &err));
            }
        }
        Ok(())
    }
}
