//! Test doubles for the pipeline.

use crate::{
    adapters::{AdapterDescriptor, AdapterResolver, ImportSpec, ProviderInfo, UnknownProvider},
    language::{BootstrapPlan, LanguageCodegen},
};

/// Resolves only `postgresql`.
pub struct StubResolver;

impl AdapterResolver for StubResolver {
    fn resolve(&self, provider: &str) -> Result<AdapterDescriptor, UnknownProvider> {
        match provider.to_ascii_lowercase().as_str() {
            "postgresql" => Ok(AdapterDescriptor {
                required_dependency: "@prisma/adapter-pg".into(),
                adapter_symbol: "PrismaPg".into(),
                init_snippet: "const adapter = new PrismaPg({ connectionString })".into(),
                extra_imports: vec![ImportSpec::new("dotenv/config")],
            }),
            _ => Err(self.unknown(provider)),
        }
    }

    fn providers(&self) -> Vec<ProviderInfo> {
        vec![ProviderInfo {
            provider: "postgresql",
            family: "postgres",
            package: "@prisma/adapter-pg",
        }]
    }
}

/// Renders the plan as two comment lines.
pub struct StubCodegen;

impl LanguageCodegen for StubCodegen {
    fn language(&self) -> &'static str {
        "stub"
    }

    fn render_bootstrap(&self, plan: &BootstrapPlan) -> String {
        let adapter = plan
            .adapter
            .as_ref()
            .map(|a| a.adapter_symbol.as_str())
            .unwrap_or("none");
        format!("// client: {}\n// adapter: {}\n", plan.client_import, adapter)
    }
}
