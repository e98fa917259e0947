pub mod catalog_patcher;
pub mod catalog_verifier;
pub mod project_scanner;

pub use catalog_patcher::{CatalogPatcher, PatchOutcome};
pub use catalog_verifier::CatalogVerifier;
pub use project_scanner::ProjectScannerAgent;

/// Set by `--verbose`; any value enables per-rule diagnostics.
pub const VERBOSE_ENV: &str = "CATALOG_PATCH_VERBOSE";
