//! Pipeline orchestrator and existence gate.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use pbgen_core::{File, FileRules, WriteResult};
use tracing::info;

use super::{
    Diagnostic, GenerationContext, GenerationInputs, Phase, Plugin,
    phases::{ReadSchemaPhase, ResolveAdapterPhase, VerifyDependencyPhase},
};
use crate::{
    adapters::AdapterResolver,
    language::{LanguageCodegen, PreviewFile},
};

/// Result of [`Pipeline::ensure`].
#[derive(Debug)]
pub enum EnsureOutcome {
    /// The target already existed. Nothing was read or written.
    Skipped { path: PathBuf },
    /// The target was generated.
    Generated {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },
}

impl EnsureOutcome {
    /// The bootstrap file path.
    pub fn path(&self) -> &Path {
        match self {
            EnsureOutcome::Skipped { path } | EnsureOutcome::Generated { path, .. } => path,
        }
    }

    /// Diagnostics of the run (empty when skipped).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            EnsureOutcome::Skipped { .. } => &[],
            EnsureOutcome::Generated { diagnostics, .. } => diagnostics,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, EnsureOutcome::Generated { .. })
    }
}

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases followed by any user phases, calling plugin
/// hooks before and after each phase.
///
/// ```ignore
/// let pipeline = Pipeline::new(PrismaAdapters)
///     .plugin(TracingPlugin)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(inputs)?;
/// ```
pub struct Pipeline {
    builtin: Vec<Box<dyn Phase>>,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline resolving adapters with `resolver`.
    pub fn new(resolver: impl AdapterResolver + Send + Sync + 'static) -> Self {
        Self {
            builtin: vec![
                Box::new(ReadSchemaPhase),
                Box::new(ResolveAdapterPhase::new(resolver)),
                Box::new(VerifyDependencyPhase),
            ],
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase. Reads the schema and manifest, never writes.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails fatally.
    pub fn run(&self, inputs: GenerationInputs) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(inputs);

        for phase in self.builtin.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run the phases and render the bootstrap without writing it.
    pub fn preview(
        &self,
        inputs: GenerationInputs,
        codegen: &dyn LanguageCodegen,
    ) -> Result<(GenerationContext, PreviewFile)> {
        let ctx = self.run(inputs)?;
        let preview = codegen.preview(&ctx.inputs.target, &ctx.plan());
        Ok((ctx, preview))
    }

    /// Generate the bootstrap file unless it already exists.
    ///
    /// An existing target short-circuits before any phase runs. Otherwise
    /// the phases run, the file is rendered and written with parent
    /// directories created as needed. Only the existence check and the
    /// write can fail; every other problem is reported as a diagnostic.
    pub fn ensure(
        &self,
        inputs: GenerationInputs,
        codegen: &dyn LanguageCodegen,
    ) -> Result<EnsureOutcome> {
        let exists = inputs
            .target
            .try_exists()
            .wrap_err_with(|| format!("failed to check '{}'", inputs.target.display()))?;
        if exists {
            info!(path = %inputs.target.display(), "bootstrap file exists, skipping");
            return Ok(EnsureOutcome::Skipped {
                path: inputs.target,
            });
        }

        let ctx = self.run(inputs)?;
        let content = codegen.render_bootstrap(&ctx.plan());
        let GenerationContext {
            inputs,
            diagnostics,
            ..
        } = ctx;

        let written = File::new(&inputs.target, content)
            .with_rules(FileRules::if_missing())
            .write()
            .wrap_err_with(|| {
                format!(
                    "failed to generate bootstrap file '{}'",
                    inputs.target.display()
                )
            })?;

        match written {
            WriteResult::Written => {
                info!(path = %inputs.target.display(), "generated bootstrap file");
                Ok(EnsureOutcome::Generated {
                    path: inputs.target,
                    diagnostics,
                })
            }
            WriteResult::Skipped => Ok(EnsureOutcome::Skipped {
                path: inputs.target,
            }),
        }
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase
            .run(ctx)
            .wrap_err_with(|| format!("phase '{}' failed", phase_name))?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}
