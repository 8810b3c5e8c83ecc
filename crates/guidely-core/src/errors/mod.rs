//! Error taxonomy. The core algorithms are total over their documented
//! inputs — unknown categories, missing fields, and unparseable slots all
//! degrade locally — so errors only arise at the I/O boundary: catalog JSON
//! parsing, config loading, and behavior store access.

mod catalog_error;
mod store_error;

pub use catalog_error::CatalogError;
pub use store_error::StoreError;

/// Top-level error for the Guidely workspace.
#[derive(Debug, thiserror::Error)]
pub enum GuidelyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used across the workspace.
pub type GuidelyResult<T> = Result<T, GuidelyError>;
