/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate place id in catalog: {id}")]
    DuplicateId { id: String },
}
