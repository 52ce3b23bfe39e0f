use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoseError {
    #[error("unknown alias mode '{0}' (expected structure_ids, idalias_first, idalias_all or all)")]
    UnknownAliasMode(String),
}

pub type Result<T> = std::result::Result<T, DoseError>;
