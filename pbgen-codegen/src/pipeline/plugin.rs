//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}

/// Logs phase boundaries at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPlugin;

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
        tracing::debug!(phase, "starting phase");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        tracing::debug!(
            phase,
            diagnostics = ctx.diagnostics.len(),
            adapter = ctx.adapter.is_some(),
            "finished phase"
        );
        Ok(())
    }
}
