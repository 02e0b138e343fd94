use std::path::PathBuf;

use thiserror::Error;

use crate::decl::DeclId;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown declaration: {0:?}")]
    UnknownDeclaration(DeclId),

    #[error("Source file is outside the source root: {0}")]
    OutsideSourceRoot(PathBuf),
}

pub type Result<T> = std::result::Result<T, IndexError>;
