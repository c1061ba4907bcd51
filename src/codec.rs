// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{compression::Compressor, serializer::Serializer};
use serde::{de::DeserializeOwned, Serialize};

/// Codec pipeline for cache entries
///
/// Pairs one [`Serializer`] with one [`Compressor`]: writes go through
/// serialize -> compress, reads through decompress -> deserialize. Both
/// strategies are fixed for the lifetime of the codec, so a codec can be
/// shared freely between threads; there is no hot swapping concurrent with
/// in-flight operations.
///
/// A decode failure means the stored entry is corrupt or was written by a
/// different codec configuration. The recommended caller policy is to treat
/// it as a cache miss and repopulate from the source of truth, not to retry
/// (decoding fixed bad input cannot succeed).
#[derive(Clone, Debug, Default)]
pub struct CacheCodec<S: Serializer, C: Compressor> {
    serializer: S,
    compressor: C,
}

impl<S: Serializer, C: Compressor> CacheCodec<S, C> {
    /// Creates a new codec from a serializer and a compressor.
    pub fn new(serializer: S, compressor: C) -> Self {
        Self {
            serializer,
            compressor,
        }
    }

    /// Returns the configured serializer.
    #[must_use]
    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Returns the configured compressor.
    #[must_use]
    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    /// Encodes a value into cache-entry bytes (serialize, then compress).
    ///
    /// A value equal to `T::default()` encodes to the empty buffer.
    ///
    /// # Errors
    ///
    /// Will return `Err` if either stage fails.
    pub fn encode<T: Serialize + Default + PartialEq>(&self, value: &T) -> crate::Result<Vec<u8>> {
        let raw = self.serializer.serialize(value)?;
        let compressed = self.compressor.compress(&raw)?;

        log::trace!(
            "encoded cache entry: {} bytes raw, {} bytes compressed",
            raw.len(),
            compressed.len(),
        );

        Ok(compressed)
    }

    /// Decodes cache-entry bytes back into a value (decompress, then
    /// deserialize).
    ///
    /// The empty buffer decodes to `T::default()`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if either stage fails.
    pub fn decode<T: DeserializeOwned + Default>(&self, bytes: &[u8]) -> crate::Result<T> {
        let raw = self.compressor.decompress(bytes)?;
        let value = self.serializer.deserialize(&raw)?;
        Ok(value)
    }

    /// Decodes an optional cache entry, preserving absence.
    ///
    /// `None` models a cache miss and stays `None`; it is not conflated
    /// with the empty buffer (which decodes to `T::default()`).
    ///
    /// # Errors
    ///
    /// Will return `Err` if [`CacheCodec::decode`] fails.
    pub fn decode_opt<T: DeserializeOwned + Default>(
        &self,
        bytes: Option<&[u8]>,
    ) -> crate::Result<Option<T>> {
        bytes.map(|bytes| self.decode(bytes)).transpose()
    }
}
