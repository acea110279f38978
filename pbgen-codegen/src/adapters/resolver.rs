use miette::Diagnostic;
use thiserror::Error;

use super::AdapterDescriptor;

/// A provider identifier with no known driver adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("no driver adapter is known for provider '{provider}'")]
#[diagnostic(
    code(pbgen::unknown_provider),
    help("supported providers: {supported}")
)]
pub struct UnknownProvider {
    /// The provider as written in the schema.
    pub provider: String,
    /// Comma-separated list of supported identifiers.
    pub supported: String,
}

/// A provider identifier known to a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Lower-cased provider identifier.
    pub provider: &'static str,
    /// Driver family the provider belongs to.
    pub family: &'static str,
    /// Adapter package the provider requires.
    pub package: &'static str,
}

/// Maps datasource provider identifiers to adapter descriptors.
///
/// Implementations match case-insensitively and must return structurally
/// identical descriptors for synonyms.
pub trait AdapterResolver {
    /// Resolve a provider identifier.
    fn resolve(&self, provider: &str) -> Result<AdapterDescriptor, UnknownProvider>;

    /// Every provider identifier this resolver accepts, in a stable order.
    fn providers(&self) -> Vec<ProviderInfo>;

    /// Build the error for an unsupported provider.
    fn unknown(&self, provider: &str) -> UnknownProvider {
        UnknownProvider {
            provider: provider.to_string(),
            supported: self
                .providers()
                .iter()
                .map(|info| info.provider)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
