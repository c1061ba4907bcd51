use crate::{
    compression::{CompressError, DecompressError},
    serializer::{DeserializeError, SerializeError},
};

/// Represents errors that can occur in the codec pipeline
#[derive(Debug)]
pub enum Error {
    /// Serialization failed
    Serialize(SerializeError),

    /// Deserialization failed
    Deserialize(DeserializeError),

    /// Compression failed
    Compress(CompressError),

    /// Decompression failed
    Decompress(DecompressError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CacheCodecError: {self:?}")
    }
}

impl std::error::Error for Error {}

impl From<SerializeError> for Error {
    fn from(value: SerializeError) -> Self {
        Self::Serialize(value)
    }
}

impl From<DeserializeError> for Error {
    fn from(value: DeserializeError) -> Self {
        Self::Deserialize(value)
    }
}

impl From<CompressError> for Error {
    fn from(value: CompressError) -> Self {
        Self::Compress(value)
    }
}

impl From<DecompressError> for Error {
    fn from(value: DecompressError) -> Self {
        Self::Decompress(value)
    }
}

/// Cache codec result
pub type Result<T> = std::result::Result<T, Error>;
