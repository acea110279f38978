//! Providers command report.

use pbgen_codegen::adapters::ProviderInfo;

use super::output::{Output, Report};

/// Known datasource providers and their adapter packages.
#[derive(Debug)]
pub struct ProvidersReport {
    pub providers: Vec<ProviderInfo>,
}

impl Report for ProvidersReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Supported providers");
        let width = self
            .providers
            .iter()
            .map(|p| p.provider.len())
            .max()
            .unwrap_or(0);

        for info in &self.providers {
            out.list_item(&format!(
                "{:<width$}  {} ({})",
                info.provider,
                info.package,
                info.family,
                width = width
            ));
        }
    }
}
