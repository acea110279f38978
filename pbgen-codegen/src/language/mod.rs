//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Trait implemented by each target language
//! - [`BootstrapPlan`] - Resolved inputs of one bootstrap file
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{BootstrapPlan, DEFAULT_CLIENT_IMPORT, LanguageCodegen, PreviewFile};
