use std::io;

use thiserror::Error;

/// Errors raised by an export pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The kind selector of an effect marker has no conversion.
    #[error("unknown 2dfx effect kind {kind}")]
    UnknownEffectKind { kind: i32 },
}

/// Errors raised while reading or writing scene and effect files.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt compressed data: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("scene object {0} not found")]
    ObjectNotFound(crate::Id),
}

pub type ExportResult<T> = Result<T, ExportError>;
